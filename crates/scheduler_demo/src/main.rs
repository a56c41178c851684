//! Demo app for the `egui_scheduler` navigation widgets.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use chrono::{Datelike as _, NaiveDate};
use eframe::egui;
use egui_scheduler::{CalendarView, NavigationBar, SchedulerStore, StateChange};

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([920.0, 640.0]),
        ..Default::default()
    };
    eframe::run_native(
        "egui_scheduler demo",
        options,
        Box::new(|_cc| Ok(Box::new(DemoApp::new()))),
    )
}

struct DemoApp {
    store: SchedulerStore,
    enabled: [bool; 3],
    compact: bool,
    with_extra_action: bool,
}

impl DemoApp {
    fn new() -> Self {
        let store = SchedulerStore::new(
            chrono::Local::now().date_naive(),
            CalendarView::Week,
            &CalendarView::ALL,
        )
        .expect("all views enabled");
        Self {
            store,
            enabled: [true; 3],
            compact: false,
            with_extra_action: false,
        }
    }

    /// Rebuild the store after the enabled view set changed, carrying over
    /// the selection. The active view falls back to the first enabled one
    /// when it just got disabled.
    fn rebuild_store(&mut self) {
        let enabled: Vec<CalendarView> = CalendarView::ALL
            .iter()
            .copied()
            .zip(self.enabled)
            .filter_map(|(view, on)| on.then_some(view))
            .collect();

        let view = if enabled.contains(&self.store.view()) {
            self.store.view()
        } else if let Some(&first) = enabled.first() {
            first
        } else {
            return;
        };

        match SchedulerStore::new(self.store.selected_date(), view, &enabled) {
            Ok(store) => {
                self.store = store.with_week_config(*self.store.week_config());
            }
            Err(err) => log::warn!("keeping previous view configuration: {err}"),
        }
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("navigation").show(ctx, |ui| {
            ui.add_space(4.0);
            let mut bar = NavigationBar::new(&mut self.store).compact(self.compact);
            if self.with_extra_action {
                bar = bar.extra_action(|ui| {
                    if ui.button("➕ New event").clicked() {
                        log::info!("new event requested");
                    }
                });
            }
            bar.show(ui);
            ui.add_space(4.0);
        });

        egui::SidePanel::right("options").show(ctx, |ui| {
            ui.heading("Options");
            ui.checkbox(&mut self.compact, "Compact navigation");
            ui.checkbox(&mut self.with_extra_action, "Extra action");

            ui.separator();
            ui.label("Enabled views:");
            let mut changed = false;
            for (i, view) in CalendarView::ALL.iter().enumerate() {
                changed |= ui
                    .checkbox(&mut self.enabled[i], view.key_name())
                    .changed();
            }
            if self.enabled.iter().all(|on| !on) {
                // An empty view set is a configuration error; keep at least one.
                self.enabled[0] = true;
            }
            if changed {
                self.rebuild_store();
            }

            ui.separator();
            let snapshot = self.store.snapshot();
            ui.label(format!("view: {:?}", snapshot.view));
            ui.label(format!("selected: {}", snapshot.selected_date));
            ui.label(format!("version: {}", snapshot.version));
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.store.view() {
            CalendarView::Month => month_sketch(ui, &mut self.store),
            CalendarView::Week => week_sketch(ui, &mut self.store),
            CalendarView::Day => day_sketch(ui, &self.store),
        });
    }
}

/// A minimal month grid: weekday header plus six rows of days.
fn month_sketch(ui: &mut egui::Ui, store: &mut SchedulerStore) {
    let selected = store.selected_date();
    let week = *store.week_config();
    let first_of_month = selected.with_day(1).expect("first of month");

    let mut picked = None;
    egui::Grid::new("month-grid").show(ui, |ui| {
        let mut weekday = week.week_start;
        for _ in 0..7 {
            ui.strong(weekday.to_string());
            weekday = weekday.succ();
        }
        ui.end_row();

        let mut day = *week.week_of(first_of_month).start();
        for _ in 0..6 {
            for _ in 0..7 {
                if day.month() == selected.month() {
                    if ui
                        .selectable_label(day == selected, format!("{:>2}", day.day()))
                        .clicked()
                    {
                        picked = Some(day);
                    }
                } else {
                    ui.weak(format!("{:>2}", day.day()));
                }
                day = day.succ_opt().expect("date out of range");
            }
            ui.end_row();
        }
    });

    if let Some(day) = picked {
        store.handle_state(StateChange::SelectedDate(day));
    }
}

/// A minimal week strip over the configured day span.
fn week_sketch(ui: &mut egui::Ui, store: &mut SchedulerStore) {
    let selected = store.selected_date();
    let Some(week) = store.week().copied() else {
        return;
    };
    let range = week.week_of(selected);

    let mut picked = None;
    ui.horizontal(|ui| {
        let mut day = *range.start();
        while day <= *range.end() {
            if ui
                .selectable_label(day == selected, day.format("%a %-d").to_string())
                .clicked()
            {
                picked = Some(day);
            }
            day = day.succ_opt().expect("date out of range");
        }
    });

    if let Some(day) = picked {
        store.handle_state(StateChange::SelectedDate(day));
    }
}

fn day_sketch(ui: &mut egui::Ui, store: &SchedulerStore) {
    let selected: NaiveDate = store.selected_date();
    ui.heading(selected.format("%A, %-d %B %Y").to_string());
}
