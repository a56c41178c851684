use chrono::{Local, NaiveDate};

use crate::view::{view_catalog, CalendarView};
use crate::{Translations, WeekConfig};

/// A state transition, named by the field it replaces.
///
/// This is the widget-facing mutation surface: every gesture on the
/// navigation bar collapses into one of these.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StateChange {
    SelectedDate(NaiveDate),
    View(CalendarView),
}

/// The complete navigation state at one point in time.
///
/// Replaced wholesale on every applied transition; readers never observe a
/// partially updated snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub selected_date: NaiveDate,
    pub view: CalendarView,
    /// Incremented once per applied transition.
    pub version: u64,
}

/// Errors surfaced when constructing a [`SchedulerStore`].
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum SchedulerError {
    /// The view configuration enabled no views at all.
    #[error("no calendar views are enabled")]
    NoViews,

    /// The initial view is not part of the enabled view set.
    #[error("view {0:?} is not among the enabled views")]
    ViewNotEnabled(CalendarView),
}

/// The authoritative navigation state of the scheduler.
///
/// There is exactly one writer, [`Self::handle_state`]; everything else reads
/// the current [`Snapshot`]. egui's single-threaded frame loop serializes the
/// two, so transitions are applied in gesture order with no locking.
pub struct SchedulerStore {
    snapshot: Snapshot,
    views: Vec<CalendarView>,
    week: WeekConfig,
    translations: Translations,
}

impl SchedulerStore {
    /// Create a store showing `selected_date` in `view`.
    ///
    /// `enabled` is deduplicated in declaration order (see
    /// [`view_catalog`]). Fails fast on an empty view set, or when `view`
    /// itself is not enabled.
    pub fn new(
        selected_date: NaiveDate,
        view: CalendarView,
        enabled: &[CalendarView],
    ) -> Result<Self, SchedulerError> {
        let views = view_catalog(enabled);
        if views.is_empty() {
            return Err(SchedulerError::NoViews);
        }
        if !views.contains(&view) {
            return Err(SchedulerError::ViewNotEnabled(view));
        }
        Ok(Self {
            snapshot: Snapshot {
                selected_date,
                view,
                version: 0,
            },
            views,
            week: WeekConfig::default(),
            translations: Translations::default(),
        })
    }

    #[inline]
    pub fn with_week_config(mut self, week: WeekConfig) -> Self {
        self.week = week;
        self
    }

    #[inline]
    pub fn with_translations(mut self, translations: Translations) -> Self {
        self.translations = translations;
        self
    }

    /// The current snapshot.
    #[inline]
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    #[inline]
    pub fn selected_date(&self) -> NaiveDate {
        self.snapshot.selected_date
    }

    #[inline]
    pub fn view(&self) -> CalendarView {
        self.snapshot.view
    }

    /// The ordered, duplicate-free list of views offered to the user.
    #[inline]
    pub fn views(&self) -> &[CalendarView] {
        &self.views
    }

    /// The week context, present exactly while the week view is active.
    pub fn week(&self) -> Option<&WeekConfig> {
        (self.snapshot.view == CalendarView::Week).then_some(&self.week)
    }

    /// The configured week settings, regardless of the active view.
    #[inline]
    pub fn week_config(&self) -> &WeekConfig {
        &self.week
    }

    #[inline]
    pub fn translations(&self) -> &Translations {
        &self.translations
    }

    /// Apply a transition, replacing the snapshot.
    ///
    /// Returns whether the snapshot was replaced. A [`StateChange::View`]
    /// targeting a view that is not in [`Self::views`] is rejected as a
    /// visible no-op (it can only arise from a misconfigured host), and a
    /// change carrying the value a field already holds leaves the snapshot
    /// untouched, version included.
    pub fn handle_state(&mut self, change: StateChange) -> bool {
        let current = self.snapshot;
        let next = match change {
            StateChange::SelectedDate(selected_date) => {
                if selected_date == current.selected_date {
                    return false;
                }
                Snapshot {
                    selected_date,
                    version: current.version + 1,
                    ..current
                }
            }
            StateChange::View(view) => {
                if !self.views.contains(&view) {
                    log::warn!("ignoring switch to disabled calendar view {view:?}");
                    return false;
                }
                if view == current.view {
                    return false;
                }
                Snapshot {
                    view,
                    version: current.version + 1,
                    ..current
                }
            }
        };
        self.snapshot = next;
        true
    }

    /// Jump the selection to the current date.
    pub fn jump_to_today(&mut self) -> bool {
        self.handle_state(StateChange::SelectedDate(Local::now().date_naive()))
    }
}
