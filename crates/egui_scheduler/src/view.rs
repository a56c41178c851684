/// A calendar granularity offered by the scheduler.
///
/// The set is closed: every dispatch over it (picker choice, translation key)
/// is an exhaustive `match`, so adding a view is a compile-time checked change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CalendarView {
    Month,
    Week,
    Day,
}

impl CalendarView {
    /// All views, in the canonical month → week → day order.
    pub const ALL: [Self; 3] = [Self::Month, Self::Week, Self::Day];

    /// The translation key for this view, also used as the label fallback
    /// when a host supplies an empty translation.
    pub fn key_name(self) -> &'static str {
        match self {
            Self::Month => "month",
            Self::Week => "week",
            Self::Day => "day",
        }
    }
}

/// The ordered list of views actually offered to the user.
///
/// Order-preserving and duplicate-free: the first occurrence of a view wins.
/// Pure, so calling it twice with the same input yields the same output.
///
/// An empty result is a host configuration error; [`crate::SchedulerStore::new`]
/// fails fast on it rather than rendering an empty switcher.
pub fn view_catalog(enabled: &[CalendarView]) -> Vec<CalendarView> {
    let mut views = Vec::with_capacity(enabled.len());
    for &view in enabled {
        if !views.contains(&view) {
            views.push(view);
        }
    }
    views
}
