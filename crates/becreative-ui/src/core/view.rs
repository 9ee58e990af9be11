//! Page-level view state owned by the shell.
//!
//! # Design
//! - One serializable struct, updated only through [`ViewAction`].
//! - Exactly one of {catalog section, guidelines, documentation} is active;
//!   the catalog selection is remembered while a special view covers it.

use std::rc::Rc;

use becreative_catalog::SectionId;
use serde::{Deserialize, Serialize};
use yew::Reducible;

use crate::core::config::UiConfig;
use crate::core::theme::ThemeMode;

/// Full-page views that replace the catalog panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialView {
    /// Design guidelines.
    Guidelines,
    /// Usage documentation guide.
    Documentation,
}

impl SpecialView {
    /// Button label in the shell.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Guidelines => "Diretrizes",
            Self::Documentation => "Guia de Uso",
        }
    }
}

/// What the main area currently renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActiveView {
    /// A catalog panel.
    Section(SectionId),
    /// A special full-page view.
    Special(SpecialView),
}

/// Shell state shared through context.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    /// Last selected catalog section.
    pub section: SectionId,
    /// Special view covering the catalog, if any.
    pub special: Option<SpecialView>,
    /// Sidebar narrowed to icons.
    pub sidebar_collapsed: bool,
    /// Preview mode.
    pub theme: ThemeMode,
}

/// Updates accepted by [`ViewState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewAction {
    /// Show a catalog section and close any special view.
    SelectSection(SectionId),
    /// Open a special view, or close it when already open.
    ToggleSpecial(SpecialView),
    /// Flip the sidebar collapse flag.
    ToggleSidebar,
    /// Flip light/dark mode.
    ToggleTheme,
}

impl ViewState {
    /// Initial state from startup config.
    #[must_use]
    pub fn from_config(config: &UiConfig) -> Self {
        Self {
            section: config.initial_section,
            sidebar_collapsed: config.sidebar_collapsed,
            ..Self::default()
        }
    }

    /// The view currently displayed.
    #[must_use]
    pub fn active(&self) -> ActiveView {
        self.special
            .map_or(ActiveView::Section(self.section), ActiveView::Special)
    }

    /// Whether `section` is the displayed catalog panel.
    #[must_use]
    pub fn shows_section(&self, section: SectionId) -> bool {
        self.active() == ActiveView::Section(section)
    }

    /// Whether `view` is the displayed special view.
    #[must_use]
    pub fn shows_special(&self, view: SpecialView) -> bool {
        self.special == Some(view)
    }

    /// Next state after `action`.
    #[must_use]
    pub fn apply(&self, action: ViewAction) -> Self {
        let mut next = self.clone();
        match action {
            ViewAction::SelectSection(section) => {
                next.section = section;
                next.special = None;
            }
            ViewAction::ToggleSpecial(view) => {
                next.special = if self.special == Some(view) {
                    None
                } else {
                    Some(view)
                };
            }
            ViewAction::ToggleSidebar => next.sidebar_collapsed = !self.sidebar_collapsed,
            ViewAction::ToggleTheme => next.theme = self.theme.toggled(),
        }
        next
    }
}

impl Reducible for ViewState {
    type Action = ViewAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_actions() -> Vec<ViewAction> {
        let mut actions: Vec<_> = SectionId::all()
            .into_iter()
            .map(ViewAction::SelectSection)
            .collect();
        actions.push(ViewAction::ToggleSpecial(SpecialView::Guidelines));
        actions.push(ViewAction::ToggleSpecial(SpecialView::Documentation));
        actions
    }

    fn displayed_count(state: &ViewState) -> usize {
        let sections = SectionId::all()
            .into_iter()
            .filter(|section| state.shows_section(*section))
            .count();
        let specials = [SpecialView::Guidelines, SpecialView::Documentation]
            .into_iter()
            .filter(|view| state.shows_special(*view))
            .count();
        sections + specials
    }

    #[test]
    fn exactly_one_view_is_displayed_for_every_pair_of_actions() {
        for first in all_actions() {
            for second in all_actions() {
                let state = ViewState::default().apply(first).apply(second);
                assert_eq!(displayed_count(&state), 1, "{first:?} then {second:?}");
            }
        }
    }

    #[test]
    fn selecting_a_section_closes_special_views() {
        let state = ViewState::default()
            .apply(ViewAction::ToggleSpecial(SpecialView::Documentation))
            .apply(ViewAction::SelectSection(SectionId::Icons));
        assert_eq!(state.active(), ActiveView::Section(SectionId::Icons));
    }

    #[test]
    fn opening_one_special_view_replaces_the_other() {
        let state = ViewState::default()
            .apply(ViewAction::ToggleSpecial(SpecialView::Guidelines))
            .apply(ViewAction::ToggleSpecial(SpecialView::Documentation));
        assert_eq!(state.active(), ActiveView::Special(SpecialView::Documentation));
        assert!(!state.shows_special(SpecialView::Guidelines));
    }

    #[test]
    fn closing_a_special_view_restores_the_previous_section() {
        let state = ViewState::default()
            .apply(ViewAction::SelectSection(SectionId::Shadows))
            .apply(ViewAction::ToggleSpecial(SpecialView::Guidelines));
        assert!(!state.shows_section(SectionId::Shadows));
        let state = state.apply(ViewAction::ToggleSpecial(SpecialView::Guidelines));
        assert_eq!(state.active(), ActiveView::Section(SectionId::Shadows));
    }

    #[test]
    fn global_toggles_are_involutions() {
        let start = ViewState::default();
        let twice = start
            .apply(ViewAction::ToggleTheme)
            .apply(ViewAction::ToggleTheme);
        assert_eq!(twice, start);
        let collapsed = start.apply(ViewAction::ToggleSidebar);
        assert!(collapsed.sidebar_collapsed);
        assert_eq!(collapsed.apply(ViewAction::ToggleSidebar), start);
    }

    #[test]
    fn global_toggles_leave_the_view_alone() {
        let state = ViewState::default()
            .apply(ViewAction::ToggleSpecial(SpecialView::Guidelines))
            .apply(ViewAction::ToggleTheme)
            .apply(ViewAction::ToggleSidebar);
        assert_eq!(state.active(), ActiveView::Special(SpecialView::Guidelines));
        assert_eq!(state.theme, ThemeMode::Dark);
    }

    #[test]
    fn initial_state_follows_config() {
        let config = UiConfig {
            initial_section: SectionId::Forms,
            sidebar_collapsed: true,
            ..UiConfig::default()
        };
        let state = ViewState::from_config(&config);
        assert_eq!(state.active(), ActiveView::Section(SectionId::Forms));
        assert!(state.sidebar_collapsed);
    }

    #[test]
    fn state_round_trips_through_json() -> Result<(), serde_json::Error> {
        let state = ViewState::default().apply(ViewAction::ToggleSpecial(SpecialView::Documentation));
        let json = serde_json::to_string(&state)?;
        assert!(json.contains("\"documentation\""));
        assert_eq!(serde_json::from_str::<ViewState>(&json)?, state);
        Ok(())
    }
}
