use crate::CalendarView;

/// Display strings for the navigation surface.
///
/// Hosts usually deserialize this from their own translation storage; any
/// string left empty falls back to the untranslated key name, so a partial
/// table degrades visibly instead of rendering blank controls.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Translations {
    pub navigation: NavigationTranslations,
}

/// Labels for the navigation controls.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NavigationTranslations {
    pub month: String,
    pub week: String,
    pub day: String,
    pub today: String,
}

impl Default for NavigationTranslations {
    fn default() -> Self {
        Self {
            month: "Month".to_owned(),
            week: "Week".to_owned(),
            day: "Day".to_owned(),
            today: "Today".to_owned(),
        }
    }
}

impl NavigationTranslations {
    /// The label of the view switcher entry for `view`.
    pub fn view_label(&self, view: CalendarView) -> &str {
        let label = match view {
            CalendarView::Month => &self.month,
            CalendarView::Week => &self.week,
            CalendarView::Day => &self.day,
        };
        if label.is_empty() {
            view.key_name()
        } else {
            label
        }
    }

    pub fn today_label(&self) -> &str {
        if self.today.is_empty() {
            "today"
        } else {
            &self.today
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_labels() {
        let translations = NavigationTranslations::default();
        assert_eq!(translations.view_label(CalendarView::Month), "Month");
        assert_eq!(translations.today_label(), "Today");
    }

    #[test]
    fn empty_label_falls_back_to_key_name() {
        let translations = NavigationTranslations {
            week: String::new(),
            today: String::new(),
            ..Default::default()
        };
        assert_eq!(translations.view_label(CalendarView::Week), "week");
        assert_eq!(translations.today_label(), "today");
        // Untouched labels keep their translation.
        assert_eq!(translations.view_label(CalendarView::Day), "Day");
    }
}
