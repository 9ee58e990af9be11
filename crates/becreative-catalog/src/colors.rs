//! Color palette: primary, neutral and semantic tokens.
//!
//! # Design
//! - Every token carries both theme variants so the swatch mode selector can
//!   render light, dark or both without another lookup.
//! - Contrast ratios are display strings, not computed values.

use serde::Serialize;

use crate::Named;

/// Contrast ratio labels for each theme variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Contrast {
    /// Ratio against the light background.
    pub light: &'static str,
    /// Ratio against the dark background.
    pub dark: &'static str,
}

/// One named color token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ColorToken {
    /// Token name including the `bc-` prefix.
    pub name: &'static str,
    /// Hex value in light mode.
    pub light: &'static str,
    /// Hex value in dark mode.
    pub dark: &'static str,
    /// Contrast ratio labels.
    pub contrast: Contrast,
    /// Where the token is meant to be used.
    pub usage: &'static str,
}

impl Named for ColorToken {
    fn name(&self) -> &'static str {
        self.name
    }
}

/// Group of related tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ColorCategory {
    /// Category title.
    pub name: &'static str,
    /// Short description shown under the title.
    pub description: &'static str,
    /// Tokens in display order.
    pub tokens: &'static [ColorToken],
}

impl Named for ColorCategory {
    fn name(&self) -> &'static str {
        self.name
    }
}

const fn token(
    name: &'static str,
    light: &'static str,
    dark: &'static str,
    contrast: (&'static str, &'static str),
    usage: &'static str,
) -> ColorToken {
    ColorToken {
        name,
        light,
        dark,
        contrast: Contrast {
            light: contrast.0,
            dark: contrast.1,
        },
        usage,
    }
}

const PRIMARY: &[ColorToken] = &[
    token("bc-primary-50", "#faf5ff", "#1e1b4b", ("19:1", "12:1"), "Backgrounds muito claros, estados hover sutis"),
    token("bc-primary-100", "#f3e8ff", "#312e81", ("16:1", "9:1"), "Backgrounds claros, badges informativos"),
    token("bc-primary-200", "#e9d5ff", "#3730a3", ("12:1", "7:1"), "Borders, divisores, estados disabled"),
    token("bc-primary-300", "#d8b4fe", "#4338ca", ("8:1", "5.5:1"), "Placeholder text, elementos secundários"),
    token("bc-primary-400", "#c084fc", "#4f46e5", ("5.2:1", "4.8:1"), "Ícones secundários, elementos interativos"),
    token("bc-primary-500", "#a855f7", "#6366f1", ("4.6:1", "4.2:1"), "Cor principal, estados normal"),
    token("bc-primary-600", "#9333ea", "#8b5cf6", ("5.8:1", "3.8:1"), "Botões primários, links principais"),
    token("bc-primary-700", "#7c3aed", "#a78bfa", ("7.2:1", "3.2:1"), "Estados hover, elementos ativos"),
    token("bc-primary-800", "#6b21a8", "#c4b5fd", ("9.8:1", "2.8:1"), "Estados pressed, elementos enfatizados"),
    token("bc-primary-900", "#581c87", "#e9d5ff", ("13:1", "2.2:1"), "Textos em backgrounds claros"),
];

const NEUTRAL: &[ColorToken] = &[
    token("bc-neutral-50", "#fafafa", "#0a0a0a", ("20:1", "21:1"), "Background principal claro"),
    token("bc-neutral-100", "#f5f5f5", "#171717", ("18:1", "18:1"), "Backgrounds de seções"),
    token("bc-neutral-200", "#e5e5e5", "#262626", ("14:1", "14:1"), "Borders, divisores"),
    token("bc-neutral-300", "#d4d4d4", "#404040", ("10:1", "10:1"), "Borders mais visíveis"),
    token("bc-neutral-400", "#a3a3a3", "#525252", ("6.8:1", "6.8:1"), "Textos placeholder"),
    token("bc-neutral-500", "#737373", "#737373", ("4.6:1", "4.6:1"), "Textos secundários"),
    token("bc-neutral-600", "#525252", "#a3a3a3", ("6.8:1", "6.8:1"), "Textos de apoio"),
    token("bc-neutral-700", "#404040", "#d4d4d4", ("10:1", "10:1"), "Textos importantes"),
    token("bc-neutral-800", "#262626", "#e5e5e5", ("14:1", "14:1"), "Textos enfatizados"),
    token("bc-neutral-900", "#171717", "#fafafa", ("18:1", "20:1"), "Textos principais, títulos"),
];

const SEMANTIC: &[ColorToken] = &[
    token("bc-success-light", "#dcfce7", "#14532d", ("15:1", "11:1"), "Backgrounds de sucesso"),
    token("bc-success", "#16a34a", "#22c55e", ("5.4:1", "4.8:1"), "Ícones, textos de sucesso"),
    token("bc-success-dark", "#15803d", "#4ade80", ("7.2:1", "3.6:1"), "Estados hover, ênfase"),
    token("bc-warning-light", "#fef3c7", "#92400e", ("14:1", "9:1"), "Backgrounds de aviso"),
    token("bc-warning", "#d97706", "#f59e0b", ("5.8:1", "4.2:1"), "Ícones, textos de aviso"),
    token("bc-warning-dark", "#b45309", "#fbbf24", ("7.8:1", "3.4:1"), "Estados hover, ênfase"),
    token("bc-error-light", "#fef2f2", "#7f1d1d", ("18:1", "12:1"), "Backgrounds de erro"),
    token("bc-error", "#dc2626", "#ef4444", ("6.2:1", "4.4:1"), "Ícones, textos de erro"),
    token("bc-error-dark", "#b91c1c", "#f87171", ("8.1:1", "3.2:1"), "Estados hover, ênfase"),
    token("bc-info-light", "#dbeafe", "#1e3a8a", ("16:1", "10:1"), "Backgrounds informativos"),
    token("bc-info", "#2563eb", "#3b82f6", ("6.8:1", "4.6:1"), "Ícones, textos informativos"),
    token("bc-info-dark", "#1d4ed8", "#60a5fa", ("8.9:1", "3.8:1"), "Estados hover, ênfase"),
];

/// Palette categories in display order.
pub const COLOR_CATEGORIES: &[ColorCategory] = &[
    ColorCategory {
        name: "Cores Primárias",
        description: "Cores principais da marca, use para CTAs e elementos de destaque",
        tokens: PRIMARY,
    },
    ColorCategory {
        name: "Cores Neutras",
        description: "Para textos, backgrounds e elementos estruturais",
        tokens: NEUTRAL,
    },
    ColorCategory {
        name: "Cores Semânticas",
        description: "Para feedback, status e comunicação de estados",
        tokens: SEMANTIC,
    },
];

/// WCAG thresholds shown in the accessibility notice.
pub const CONTRAST_LEVELS: &[(&str, &str)] = &[
    ("AA Normal", "4.5:1 mínimo"),
    ("AA Large", "3:1 mínimo"),
    ("AAA", "7:1 (ideal)"),
];

/// Recommended practices for the palette.
pub const COLOR_DO: &[&str] = &[
    "Use tokens semânticos para feedback (success, error, warning)",
    "Sempre verifique o contraste antes de aplicar",
    "Mantenha consistência entre light/dark mode",
    "Use neutral-900 para textos principais",
];

/// Practices to avoid with the palette.
pub const COLOR_AVOID: &[&str] = &[
    "Usar cores muito saturadas para texto longo",
    "Combinar cores com contraste insuficiente",
    "Usar apenas cor para transmitir informação",
    "Misturar tonalidades diferentes da mesma categoria",
];

/// Iterate every token across all categories.
pub fn all_tokens() -> impl Iterator<Item = &'static ColorToken> {
    COLOR_CATEGORIES
        .iter()
        .flat_map(|category| category.tokens.iter())
}

/// Look up a token by name.
#[must_use]
pub fn find_token(name: &str) -> Option<&'static ColorToken> {
    all_tokens().find(|token| token.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_500_matches_reference_values() {
        let token = find_token("bc-primary-500").expect("token present");
        assert_eq!(token.light, "#a855f7");
        assert_eq!(token.dark, "#6366f1");
        assert_eq!(token.contrast.light, "4.6:1");
    }

    #[test]
    fn every_hex_value_is_well_formed() {
        for token in all_tokens() {
            for value in [token.light, token.dark] {
                assert_eq!(value.len(), 7, "{} has bad value {value}", token.name);
                assert!(value.starts_with('#'));
                assert!(value[1..].chars().all(|c| c.is_ascii_hexdigit()));
            }
        }
    }

    #[test]
    fn every_token_uses_the_prefix() {
        assert!(all_tokens().all(|token| token.name.starts_with("bc-")));
        assert_eq!(all_tokens().count(), 32);
    }
}
