//! Navigation widgets for building a calendar scheduler on top of
//! [`egui`](https://github.com/emilk/egui).
//!
//! The crate is split along the same seam as the scheduler itself:
//!
//! * [`SchedulerStore`] owns the navigation state (selected date, active view)
//!   as an immutable [`Snapshot`] that is replaced through a single transition
//!   entry point, [`SchedulerStore::handle_state`].
//! * [`NavigationBar`] renders the navigation surface for that store: a date
//!   picker for the active view, a "today" shortcut, and a view switcher that
//!   collapses into an overflow menu on narrow viewports.
//!
//! ```
//! # use egui_scheduler::{CalendarView, NavigationBar, SchedulerStore};
//! # egui::__run_test_ui(|ui| {
//! let mut store = SchedulerStore::new(
//!     chrono::NaiveDate::from_ymd_opt(2024, 5, 6).unwrap(),
//!     CalendarView::Week,
//!     &[CalendarView::Month, CalendarView::Week, CalendarView::Day],
//! )
//! .unwrap();
//!
//! ui.add(NavigationBar::new(&mut store));
//! # });
//! ```
//!
//! ## Feature flags
#![cfg_attr(feature = "document-features", doc = document_features::document_features!())]
//!

#![forbid(unsafe_code)]

mod navigation;
mod state;
mod translations;
mod view;
mod week;

pub use crate::navigation::{
    DayDateButton, MonthDateButton, NavigationBar, WeekDateButton, DATE_NAVIGATOR_ID,
    VIEW_NAVIGATOR_ID,
};
pub use crate::state::{SchedulerError, SchedulerStore, Snapshot, StateChange};
pub use crate::translations::{NavigationTranslations, Translations};
pub use crate::view::{view_catalog, CalendarView};
pub use crate::week::WeekConfig;
