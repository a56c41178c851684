use chrono::Local;
use egui::containers::Sides;
use egui::{DragAndDrop, Response, Ui, UiBuilder, Widget};

use super::pickers::{DayDateButton, MonthDateButton, WeekDateButton};
use crate::{CalendarView, SchedulerStore, StateChange};

/// Id salt of the region holding the primary date picker (or the extra
/// action). Exposed for integration tests.
pub const DATE_NAVIGATOR_ID: &str = "date-navigator";

/// Id salt of the region holding the today button and the view switcher.
pub const VIEW_NAVIGATOR_ID: &str = "view-navigator";

/// The overflow menu trigger shown on narrow viewports.
const MORE_BUTTON: &str = "⋮";

/// The navigation surface of the scheduler.
///
/// Reads the [`SchedulerStore`] once per frame, renders the controls that
/// apply to the current state, and routes every gesture back through
/// [`SchedulerStore::handle_state`]:
///
/// * a date picker matching the active view (replaced by
///   [`Self::extra_action`] when one is set),
/// * a "today" shortcut,
/// * a view switcher, inline on wide viewports and collapsed into an
///   overflow menu on narrow ones. The switcher is omitted entirely when
///   only one view is enabled.
///
/// Whether the viewport counts as narrow comes from the host via
/// [`Self::compact`]; the bar does not measure anything itself.
pub struct NavigationBar<'a> {
    store: &'a mut SchedulerStore,
    compact: bool,
    extra_action: Option<Box<dyn FnOnce(&mut Ui) + 'a>>,
}

impl<'a> NavigationBar<'a> {
    pub fn new(store: &'a mut SchedulerStore) -> Self {
        Self {
            store,
            compact: false,
            extra_action: None,
        }
    }

    /// Collapse the view switcher into an overflow menu. (Default: false)
    ///
    /// Pass the host's own breakpoint signal here, e.g. a threshold on the
    /// available width.
    #[inline]
    pub fn compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    /// Host-supplied contents for the primary navigation slot.
    ///
    /// When set, it replaces the date picker there; the picker then moves
    /// next to the today button so date navigation stays reachable, as long
    /// as more than one view is enabled.
    #[inline]
    pub fn extra_action(mut self, add_contents: impl FnOnce(&mut Ui) + 'a) -> Self {
        self.extra_action = Some(Box::new(add_contents));
        self
    }

    pub fn show(self, ui: &mut Ui) -> Response {
        let Self {
            store,
            compact,
            extra_action,
        } = self;
        let has_extra = extra_action.is_some();
        let state: &SchedulerStore = store;

        let mut primary_change = None;
        let mut nav_changes = Vec::new();

        let response = ui
            .scope(|ui| {
                Sides::new().show(
                    ui,
                    |ui| {
                        ui.scope_builder(UiBuilder::new().id_salt(DATE_NAVIGATOR_ID), |ui| {
                            if let Some(add_contents) = extra_action {
                                add_contents(ui);
                            } else {
                                primary_change = date_selector(state, ui);
                            }
                        });
                    },
                    |ui| {
                        ui.scope_builder(UiBuilder::new().id_salt(VIEW_NAVIGATOR_ID), |ui| {
                            // This side is laid out right-to-left, so the
                            // switcher comes first and the today button last.
                            if state.views().len() > 1 {
                                if compact {
                                    view_menu(state, ui, &mut nav_changes);
                                } else {
                                    view_switcher(state, ui, &mut nav_changes);
                                }
                            }

                            if has_extra && state.views().len() > 1 {
                                if let Some(change) = date_selector(state, ui) {
                                    nav_changes.push(change);
                                }
                            }

                            let today = state.translations().navigation.today_label();
                            if ui.button(today).clicked() {
                                nav_changes
                                    .push(StateChange::SelectedDate(Local::now().date_naive()));
                            }
                        });
                    },
                );
            })
            .response;

        for change in primary_change.into_iter().chain(nav_changes) {
            store.handle_state(change);
        }

        response
    }
}

impl Widget for NavigationBar<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        self.show(ui)
    }
}

/// The date picker matching the active view.
fn date_selector(store: &SchedulerStore, ui: &mut Ui) -> Option<StateChange> {
    match store.view() {
        CalendarView::Month => MonthDateButton::new(store.selected_date()).show(ui),
        CalendarView::Week => store
            .week()
            .and_then(|week| WeekDateButton::new(store.selected_date(), week).show(ui)),
        CalendarView::Day => DayDateButton::new(store.selected_date()).show(ui),
    }
}

/// Inline view switcher: one selectable label per view.
///
/// Hovering a label mid-drag selects it just like a click, so dragging an
/// event onto another view switches there without dropping.
fn view_switcher(store: &SchedulerStore, ui: &mut Ui, changes: &mut Vec<StateChange>) {
    let translations = &store.translations().navigation;
    // Reversed because the enclosing layout is right-to-left.
    for &view in store.views().iter().rev() {
        let label = ui.selectable_label(view == store.view(), translations.view_label(view));
        let drag_over = DragAndDrop::has_any_payload(ui.ctx()) && label.contains_pointer();
        if label.clicked() || drag_over {
            changes.push(StateChange::View(view));
        }
    }
}

/// Collapsed view switcher: an overflow menu anchored to a trigger button.
///
/// Open/closed state lives in egui's popup memory, not in the store. On the
/// frame the menu opens, the entry of the active view grabs focus.
fn view_menu(store: &SchedulerStore, ui: &mut Ui, changes: &mut Vec<StateChange>) {
    let translations = &store.translations().navigation;
    let open_latch = ui.id().with("view-menu-open");

    let menu = ui.menu_button(MORE_BUTTON, |ui| {
        let just_opened = !ui.data(|data| data.get_temp::<bool>(open_latch).unwrap_or(false));
        if just_opened {
            ui.data_mut(|data| data.insert_temp(open_latch, true));
        }

        for &view in store.views() {
            let selected = view == store.view();
            let entry = ui.selectable_label(selected, translations.view_label(view));
            if selected && just_opened {
                entry.scroll_to_me(None);
                entry.request_focus();
            }
            if entry.clicked() {
                changes.push(StateChange::View(view));
                ui.close();
            }
        }
    });

    if menu.inner.is_none() {
        // Menu is closed; re-arm the focus latch for the next open.
        ui.data_mut(|data| data.remove::<bool>(open_latch));
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Local, NaiveDate};
    use egui::Popup;
    use egui_kittest::kittest::Queryable as _;
    use egui_kittest::Harness;

    use crate::{CalendarView, NavigationBar, SchedulerStore};

    fn store(enabled: &[CalendarView], view: CalendarView) -> SchedulerStore {
        SchedulerStore::new(
            NaiveDate::from_ymd_opt(2024, 5, 6).unwrap(),
            view,
            enabled,
        )
        .unwrap()
    }

    #[test]
    fn today_button_updates_date_and_keeps_view() {
        let mut harness = Harness::new_ui_state(
            |ui, store| {
                NavigationBar::new(store).show(ui);
            },
            store(
                &[CalendarView::Month, CalendarView::Week],
                CalendarView::Month,
            ),
        );
        harness.run();

        harness.get_by_label("Today").click();
        harness.run();

        assert_eq!(harness.state().selected_date(), Local::now().date_naive());
        assert_eq!(harness.state().view(), CalendarView::Month);
    }

    #[test]
    fn clicking_a_view_label_switches_the_view() {
        let mut harness = Harness::new_ui_state(
            |ui, store| {
                NavigationBar::new(store).show(ui);
            },
            store(
                &[CalendarView::Month, CalendarView::Week, CalendarView::Day],
                CalendarView::Month,
            ),
        );
        harness.run();

        harness.get_by_label("Week").click();
        harness.run();

        assert_eq!(harness.state().view(), CalendarView::Week);
        assert_eq!(
            harness.state().selected_date(),
            NaiveDate::from_ymd_opt(2024, 5, 6).unwrap(),
        );
    }

    #[test]
    fn overflow_menu_lists_views_and_switches() {
        let mut harness = Harness::new_ui_state(
            |ui, store| {
                NavigationBar::new(store).compact(true).show(ui);
            },
            store(
                &[CalendarView::Month, CalendarView::Week, CalendarView::Day],
                CalendarView::Week,
            ),
        );
        harness.run();

        // Inline labels are collapsed behind the trigger.
        assert!(harness.query_by_label("Month").is_none());

        harness.get_by_label("⋮").click();
        harness.run();

        assert!(Popup::is_any_open(&harness.ctx));
        assert!(harness.query_by_label("Month").is_some());
        assert!(harness.query_by_label("Day").is_some());
        // The entry of the active view is pre-focused.
        assert!(harness.get_by_label("Week").is_focused());

        harness.get_by_label("Day").click();
        harness.run();

        assert_eq!(harness.state().view(), CalendarView::Day);
        assert!(!Popup::is_any_open(&harness.ctx));
    }

    #[test]
    fn extra_action_keeps_the_date_picker_reachable() {
        let mut harness = Harness::new_ui_state(
            |ui, store| {
                NavigationBar::new(store)
                    .extra_action(|ui| {
                        let _ = ui.button("New event");
                    })
                    .show(ui);
            },
            store(
                &[CalendarView::Month, CalendarView::Week],
                CalendarView::Month,
            ),
        );
        harness.run();

        // The override occupies the primary slot…
        harness.get_by_label("New event");
        // …while the month picker is still rendered next to the today button.
        harness.get_by_label("May 2024");
    }

    #[test]
    fn single_view_hides_the_switcher() {
        let mut harness = Harness::new_ui_state(
            |ui, store| {
                NavigationBar::new(store).show(ui);
            },
            store(&[CalendarView::Day], CalendarView::Day),
        );
        harness.run();

        assert!(harness.query_by_label("Day").is_none());
        assert!(harness.query_by_label("⋮").is_none());
        // The day picker and today button are still there.
        harness.get_by_label("6 May 2024");
        harness.get_by_label("Today");
    }

    #[test]
    fn single_view_hides_the_overflow_trigger_too() {
        let mut harness = Harness::new_ui_state(
            |ui, store| {
                NavigationBar::new(store).compact(true).show(ui);
            },
            store(&[CalendarView::Day], CalendarView::Day),
        );
        harness.run();

        assert!(harness.query_by_label("⋮").is_none());
    }

    #[test]
    fn week_view_renders_the_week_picker() {
        let mut harness = Harness::new_ui_state(
            |ui, store| {
                NavigationBar::new(store).show(ui);
            },
            store(
                &[CalendarView::Month, CalendarView::Week],
                CalendarView::Week,
            ),
        );
        harness.run();

        // 2024-05-06 is a Monday in ISO week 19.
        harness.get_by_label("Week 19, 2024");
    }
}
