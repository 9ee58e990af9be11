//! Elevation tokens.

use serde::Serialize;

use crate::Named;

/// One elevation level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ShadowToken {
    /// Token name.
    pub name: &'static str,
    /// Elevation level, 0 is flat.
    pub level: u8,
    /// `box-shadow` value.
    pub value: &'static str,
    /// Where the level is meant to be used.
    pub usage: &'static str,
}

impl Named for ShadowToken {
    fn name(&self) -> &'static str {
        self.name
    }
}

impl ShadowToken {
    /// Declaration copied from the shadow card.
    #[must_use]
    pub fn css(&self) -> String {
        format!("box-shadow: {};", self.value)
    }
}

/// Shadow scale from flat to highest elevation.
pub const SHADOWS: &[ShadowToken] = &[
    ShadowToken {
        name: "bc-shadow-none",
        level: 0,
        value: "none",
        usage: "Elementos no plano da página",
    },
    ShadowToken {
        name: "bc-shadow-sm",
        level: 1,
        value: "0 1px 2px 0 rgb(0 0 0 / 0.05)",
        usage: "Inputs, botões secundários",
    },
    ShadowToken {
        name: "bc-shadow-md",
        level: 2,
        value: "0 4px 6px -1px rgb(0 0 0 / 0.1), 0 2px 4px -2px rgb(0 0 0 / 0.1)",
        usage: "Cards e superfícies elevadas",
    },
    ShadowToken {
        name: "bc-shadow-lg",
        level: 3,
        value: "0 10px 15px -3px rgb(0 0 0 / 0.1), 0 4px 6px -4px rgb(0 0 0 / 0.1)",
        usage: "Dropdowns e popovers",
    },
    ShadowToken {
        name: "bc-shadow-xl",
        level: 4,
        value: "0 20px 25px -5px rgb(0 0 0 / 0.1), 0 8px 10px -6px rgb(0 0 0 / 0.1)",
        usage: "Modais e diálogos",
    },
    ShadowToken {
        name: "bc-shadow-2xl",
        level: 5,
        value: "0 25px 50px -12px rgb(0 0 0 / 0.25)",
        usage: "Overlays de destaque",
    },
];

/// Guidance shown under the scale.
pub const SHADOW_NOTES: &[&str] = &[
    "Quanto maior a elevação, mais próximo do usuário o elemento parece estar",
    "No dark mode prefira bordas sutis ou superfícies mais claras à sombra",
    "Não combine mais de três níveis de elevação na mesma tela",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_increase_monotonically() {
        assert!(SHADOWS.windows(2).all(|pair| pair[0].level < pair[1].level));
    }

    #[test]
    fn css_wraps_the_value() {
        assert_eq!(SHADOWS[0].css(), "box-shadow: none;");
    }
}
