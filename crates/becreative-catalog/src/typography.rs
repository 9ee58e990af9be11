//! Typographic scale.

use serde::Serialize;

use crate::Named;

/// One step of the type scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TypographyStep {
    /// Token name.
    pub name: &'static str,
    /// Human label used in the preview.
    pub label: &'static str,
    /// Font size.
    pub size: &'static str,
    /// Line height.
    pub line_height: &'static str,
    /// Font weight.
    pub weight: u16,
    /// Utility class applied in the preview.
    pub class: &'static str,
    /// Where the step is meant to be used.
    pub usage: &'static str,
}

impl Named for TypographyStep {
    fn name(&self) -> &'static str {
        self.name
    }
}

impl TypographyStep {
    /// CSS declarations copied from the scale card.
    #[must_use]
    pub fn css(&self) -> String {
        format!(
            "font-size: {};\nline-height: {};\nfont-weight: {};",
            self.size, self.line_height, self.weight
        )
    }
}

/// Font families used across the system.
pub const FONT_FAMILIES: &[(&str, &str)] = &[
    ("bc-font-sans", "Inter, system-ui, sans-serif"),
    ("bc-font-mono", "'JetBrains Mono', ui-monospace, monospace"),
];

/// Sample sentence rendered for every step.
pub const SAMPLE_TEXT: &str = "Design System Bê Creative";

/// Type scale from largest to smallest.
pub const TYPE_SCALE: &[TypographyStep] = &[
    TypographyStep {
        name: "bc-text-display",
        label: "Display",
        size: "3rem",
        line_height: "1.1",
        weight: 800,
        class: "text-5xl font-extrabold",
        usage: "Hero e títulos de campanha",
    },
    TypographyStep {
        name: "bc-text-h1",
        label: "Heading 1",
        size: "2.25rem",
        line_height: "1.2",
        weight: 700,
        class: "text-4xl font-bold",
        usage: "Título principal da página",
    },
    TypographyStep {
        name: "bc-text-h2",
        label: "Heading 2",
        size: "1.875rem",
        line_height: "1.25",
        weight: 700,
        class: "text-3xl font-bold",
        usage: "Títulos de seção",
    },
    TypographyStep {
        name: "bc-text-h3",
        label: "Heading 3",
        size: "1.5rem",
        line_height: "1.3",
        weight: 600,
        class: "text-2xl font-semibold",
        usage: "Subtítulos e cabeçalhos de cards",
    },
    TypographyStep {
        name: "bc-text-h4",
        label: "Heading 4",
        size: "1.25rem",
        line_height: "1.4",
        weight: 600,
        class: "text-xl font-semibold",
        usage: "Grupos de conteúdo",
    },
    TypographyStep {
        name: "bc-text-body-lg",
        label: "Body Large",
        size: "1.125rem",
        line_height: "1.6",
        weight: 400,
        class: "text-lg",
        usage: "Textos introdutórios",
    },
    TypographyStep {
        name: "bc-text-body",
        label: "Body",
        size: "1rem",
        line_height: "1.6",
        weight: 400,
        class: "text-base",
        usage: "Texto corrido padrão",
    },
    TypographyStep {
        name: "bc-text-small",
        label: "Small",
        size: "0.875rem",
        line_height: "1.5",
        weight: 400,
        class: "text-sm",
        usage: "Legendas, textos de apoio",
    },
    TypographyStep {
        name: "bc-text-caption",
        label: "Caption",
        size: "0.75rem",
        line_height: "1.4",
        weight: 500,
        class: "text-xs font-medium",
        usage: "Labels, badges e metadados",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_snippet_lists_all_declarations() {
        let body = TYPE_SCALE
            .iter()
            .find(|step| step.name == "bc-text-body")
            .expect("body step");
        assert_eq!(
            body.css(),
            "font-size: 1rem;\nline-height: 1.6;\nfont-weight: 400;"
        );
    }

    #[test]
    fn weights_are_valid_css_weights() {
        for step in TYPE_SCALE {
            assert!((100..=900).contains(&step.weight));
            assert_eq!(step.weight % 100, 0);
        }
    }
}
