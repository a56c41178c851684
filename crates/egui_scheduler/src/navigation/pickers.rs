use chrono::NaiveDate;
use egui::Ui;
use egui_extras::DatePickerButton;

use crate::{StateChange, WeekConfig};

/// Date picker for the month view. Shows the selected month and opens a
/// calendar popup when clicked.
pub struct MonthDateButton {
    selection: NaiveDate,
}

impl MonthDateButton {
    pub fn new(selection: NaiveDate) -> Self {
        Self { selection }
    }

    /// Returns the transition to apply when the user picked a date.
    pub fn show(self, ui: &mut Ui) -> Option<StateChange> {
        let mut picked = self.selection;
        let response = ui.add(
            DatePickerButton::new(&mut picked)
                .id_salt("month-date-button")
                .format("%B %Y")
                .show_icon(false)
                .calendar_week(false),
        );
        (response.changed() && picked != self.selection)
            .then_some(StateChange::SelectedDate(picked))
    }
}

/// Date picker for the week view. Labels the selection by week number and
/// shows the configured day span on hover.
pub struct WeekDateButton<'a> {
    selection: NaiveDate,
    week: &'a WeekConfig,
}

impl<'a> WeekDateButton<'a> {
    pub fn new(selection: NaiveDate, week: &'a WeekConfig) -> Self {
        Self { selection, week }
    }

    pub fn show(self, ui: &mut Ui) -> Option<StateChange> {
        let span = self.week.week_of(self.selection);
        let mut picked = self.selection;
        let response = ui
            .add(
                DatePickerButton::new(&mut picked)
                    .id_salt("week-date-button")
                    .format("Week %V, %G")
                    .show_icon(false)
                    .calendar_week(true),
            )
            .on_hover_text(format!(
                "{} – {}",
                span.start().format("%-d %B %Y"),
                span.end().format("%-d %B %Y")
            ));
        (response.changed() && picked != self.selection)
            .then_some(StateChange::SelectedDate(picked))
    }
}

/// Date picker for the day view.
pub struct DayDateButton {
    selection: NaiveDate,
}

impl DayDateButton {
    pub fn new(selection: NaiveDate) -> Self {
        Self { selection }
    }

    pub fn show(self, ui: &mut Ui) -> Option<StateChange> {
        let mut picked = self.selection;
        let response = ui.add(
            DatePickerButton::new(&mut picked)
                .id_salt("day-date-button")
                .format("%-d %B %Y")
                .show_icon(false)
                .calendar_week(false),
        );
        (response.changed() && picked != self.selection)
            .then_some(StateChange::SelectedDate(picked))
    }
}
