//! Catalog section identifiers shown in the sidebar.

use serde::{Deserialize, Serialize};

/// One browsable catalog section.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    /// Color palette and tokens.
    #[default]
    Colors,
    /// Typographic scale.
    Typography,
    /// Component library.
    Components,
    /// Elevation and shadow tokens.
    Shadows,
    /// Icon library.
    Icons,
    /// Grid and spacing rules.
    Grid,
    /// Navigation patterns.
    Navigation,
    /// Form patterns.
    Forms,
    /// Naming conventions and token prefixes.
    Naming,
}

impl SectionId {
    /// All sections in sidebar order.
    #[must_use]
    pub const fn all() -> [Self; 9] {
        [
            Self::Colors,
            Self::Typography,
            Self::Components,
            Self::Shadows,
            Self::Icons,
            Self::Grid,
            Self::Navigation,
            Self::Forms,
            Self::Naming,
        ]
    }

    /// Stable identifier used in config files and DOM ids.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Colors => "colors",
            Self::Typography => "typography",
            Self::Components => "components",
            Self::Shadows => "shadows",
            Self::Icons => "icons",
            Self::Grid => "grid",
            Self::Navigation => "navigation",
            Self::Forms => "forms",
            Self::Naming => "naming",
        }
    }

    /// Sidebar label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Colors => "Cores & Tokens",
            Self::Typography => "Tipografia",
            Self::Components => "Componentes",
            Self::Shadows => "Sombras",
            Self::Icons => "Ícones",
            Self::Grid => "Grid System",
            Self::Navigation => "Navegação",
            Self::Forms => "Formulários",
            Self::Naming => "Nomenclatura & Tokens",
        }
    }

    /// Parse a stable identifier back into a section.
    #[must_use]
    pub fn from_id(value: &str) -> Option<Self> {
        Self::all()
            .into_iter()
            .find(|section| section.id() == value.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::SectionId;

    #[test]
    fn ids_parse_back_to_sections() {
        for section in SectionId::all() {
            assert_eq!(SectionId::from_id(section.id()), Some(section));
        }
        assert_eq!(SectionId::from_id(" grid "), Some(SectionId::Grid));
        assert_eq!(SectionId::from_id("unknown"), None);
    }

    #[test]
    fn default_section_is_colors() {
        assert_eq!(SectionId::default(), SectionId::Colors);
    }

    #[test]
    fn serde_uses_snake_case_ids() -> Result<(), serde_json::Error> {
        assert_eq!(serde_json::to_string(&SectionId::Naming)?, "\"naming\"");
        let parsed: SectionId = serde_json::from_str("\"navigation\"")?;
        assert_eq!(parsed, SectionId::Navigation);
        Ok(())
    }
}
