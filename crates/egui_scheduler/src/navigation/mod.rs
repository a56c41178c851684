//! The navigation surface: per-view date pickers and the responsive bar
//! that composes them.

mod bar;
mod pickers;

pub use bar::{NavigationBar, DATE_NAVIGATOR_ID, VIEW_NAVIGATOR_ID};
pub use pickers::{DayDateButton, MonthDateButton, WeekDateButton};
