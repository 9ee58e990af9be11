//! Light/dark preview mode.

use serde::{Deserialize, Serialize};

/// Class added to the document root while dark mode is on.
pub const DARK_CLASS: &str = "dark";

/// Light or dark preview mode. Never persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light mode.
    #[default]
    Light,
    /// Dark mode.
    Dark,
}

impl ThemeMode {
    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Whether the root element should carry [`DARK_CLASS`].
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Accessible label for the header toggle.
    #[must_use]
    pub const fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Ativar modo escuro",
            Self::Dark => "Ativar modo claro",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_restores_mode() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_eq!(mode.toggled().toggled(), mode);
            assert_ne!(mode.toggled(), mode);
        }
    }

    #[test]
    fn only_dark_marks_the_root() {
        assert!(ThemeMode::Dark.is_dark());
        assert!(!ThemeMode::Light.is_dark());
        assert_eq!(ThemeMode::default(), ThemeMode::Light);
        assert_eq!(serde_json::to_string(&ThemeMode::Dark).ok().as_deref(), Some("\"dark\""));
        assert_eq!(DARK_CLASS, "dark");
    }
}
