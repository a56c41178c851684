use std::ops::RangeInclusive;

use chrono::{Datelike as _, Duration, NaiveDate, Weekday};

/// Week-view context: which day a week starts on and how many days are shown.
///
/// Owned by [`crate::SchedulerStore`] and handed to the week picker by
/// reference while the week view is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WeekConfig {
    pub week_start: Weekday,
    /// Number of visible days, counted from `week_start`. Clamped to 1..=7.
    pub num_days: u8,
}

impl Default for WeekConfig {
    fn default() -> Self {
        Self {
            week_start: Weekday::Mon,
            num_days: 7,
        }
    }
}

impl WeekConfig {
    /// The visible day range of the week containing `date`.
    pub fn week_of(&self, date: NaiveDate) -> RangeInclusive<NaiveDate> {
        let mut start = date;
        while start.weekday() != self.week_start {
            start = start
                .checked_sub_signed(Duration::days(1))
                .expect("date out of range");
        }
        let len = i64::from(self.num_days.clamp(1, 7));
        let end = start
            .checked_add_signed(Duration::days(len - 1))
            .expect("date out of range");
        start..=end
    }
}
