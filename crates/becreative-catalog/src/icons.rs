//! Icon library entries.

use serde::Serialize;

use crate::Named;

/// Icon category used to group the library.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconCategory {
    /// Navigation and wayfinding.
    Navigation,
    /// Actions triggered by the user.
    Action,
    /// Status and feedback.
    Feedback,
}

impl IconCategory {
    /// Heading shown above the group.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Navigation => "Navegação",
            Self::Action => "Ações",
            Self::Feedback => "Feedback",
        }
    }

    /// Categories in display order.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Navigation, Self::Action, Self::Feedback]
    }
}

/// One icon in the library.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct IconEntry {
    /// Component name.
    pub name: &'static str,
    /// Grouping.
    pub category: IconCategory,
    /// SVG path data on a 24x24 grid.
    pub path: &'static str,
    /// Search keywords.
    pub keywords: &'static [&'static str],
}

impl Named for IconEntry {
    fn name(&self) -> &'static str {
        self.name
    }
}

impl IconEntry {
    /// Markup copied from the icon card.
    #[must_use]
    pub fn snippet(&self) -> String {
        format!("<{} size={{24}} />", self.name)
    }
}

/// Sizes the library ships in, in pixels.
pub const ICON_SIZES: &[u16] = &[16, 20, 24, 32];

/// All icons in display order.
pub const ICONS: &[IconEntry] = &[
    IconEntry {
        name: "Menu",
        category: IconCategory::Navigation,
        path: "M4 6h16M4 12h16M4 18h16",
        keywords: &["hamburger", "menu"],
    },
    IconEntry {
        name: "ChevronDown",
        category: IconCategory::Navigation,
        path: "m6 9 6 6 6-6",
        keywords: &["expandir", "seta"],
    },
    IconEntry {
        name: "ChevronRight",
        category: IconCategory::Navigation,
        path: "m9 18 6-6-6-6",
        keywords: &["avançar", "seta"],
    },
    IconEntry {
        name: "Home",
        category: IconCategory::Navigation,
        path: "M3 10.5 12 3l9 7.5V21h-6v-6H9v6H3z",
        keywords: &["início", "casa"],
    },
    IconEntry {
        name: "Copy",
        category: IconCategory::Action,
        path: "M8 8h12v12H8zM4 16V4h12",
        keywords: &["copiar", "clipboard"],
    },
    IconEntry {
        name: "Search",
        category: IconCategory::Action,
        path: "M11 19a8 8 0 1 0 0-16 8 8 0 0 0 0 16zm10 2-4.35-4.35",
        keywords: &["buscar", "lupa"],
    },
    IconEntry {
        name: "Download",
        category: IconCategory::Action,
        path: "M12 3v12m-5-5 5 5 5-5M5 21h14",
        keywords: &["baixar", "exportar"],
    },
    IconEntry {
        name: "Printer",
        category: IconCategory::Action,
        path: "M6 9V3h12v6M6 18H4v-7h16v7h-2M6 14h12v7H6z",
        keywords: &["imprimir"],
    },
    IconEntry {
        name: "Check",
        category: IconCategory::Feedback,
        path: "M20 6 9 17l-5-5",
        keywords: &["sucesso", "ok"],
    },
    IconEntry {
        name: "AlertTriangle",
        category: IconCategory::Feedback,
        path: "M12 3 2 21h20zM12 10v4m0 3h.01",
        keywords: &["aviso", "alerta"],
    },
    IconEntry {
        name: "Info",
        category: IconCategory::Feedback,
        path: "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20zm0-12v6m0-9h.01",
        keywords: &["informação"],
    },
    IconEntry {
        name: "XCircle",
        category: IconCategory::Feedback,
        path: "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20zM15 9l-6 6m0-6 6 6",
        keywords: &["erro", "fechar"],
    },
];

/// Icons in one category, in display order.
pub fn icons_in(category: IconCategory) -> impl Iterator<Item = &'static IconEntry> {
    ICONS.iter().filter(move |icon| icon.category == category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_icons() {
        for category in IconCategory::all() {
            assert!(icons_in(category).count() > 0, "{category:?} empty");
        }
    }

    #[test]
    fn snippet_uses_component_syntax() {
        assert_eq!(ICONS[0].snippet(), "<Menu size={24} />");
    }
}
