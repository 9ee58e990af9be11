//! Component library specs.

use serde::Serialize;

use crate::Named;

/// Visual variant a component ships with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ComponentVariant {
    /// Variant label.
    pub label: &'static str,
    /// Utility classes applied to the preview.
    pub class: &'static str,
}

/// Documentation for one component.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ComponentSpec {
    /// Component name.
    pub name: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Variants shown in the preview row.
    pub variants: &'static [ComponentVariant],
    /// Interaction states documented for the component.
    pub states: &'static [&'static str],
    /// Usage snippet.
    pub code: &'static str,
}

impl Named for ComponentSpec {
    fn name(&self) -> &'static str {
        self.name
    }
}

/// Components in display order.
pub const COMPONENTS: &[ComponentSpec] = &[
    ComponentSpec {
        name: "Button",
        description: "Ação principal ou secundária disparada pelo usuário",
        variants: &[
            ComponentVariant {
                label: "Primary",
                class: "bc-btn bc-btn-primary",
            },
            ComponentVariant {
                label: "Secondary",
                class: "bc-btn bc-btn-secondary",
            },
            ComponentVariant {
                label: "Ghost",
                class: "bc-btn bc-btn-ghost",
            },
            ComponentVariant {
                label: "Danger",
                class: "bc-btn bc-btn-danger",
            },
        ],
        states: &["default", "hover", "focus", "pressed", "disabled"],
        code: "<button class=\"bc-btn bc-btn-primary\">Salvar</button>",
    },
    ComponentSpec {
        name: "Badge",
        description: "Rótulo curto para status ou categorias",
        variants: &[
            ComponentVariant {
                label: "Info",
                class: "bc-badge bc-badge-info",
            },
            ComponentVariant {
                label: "Success",
                class: "bc-badge bc-badge-success",
            },
            ComponentVariant {
                label: "Warning",
                class: "bc-badge bc-badge-warning",
            },
        ],
        states: &["default"],
        code: "<span class=\"bc-badge bc-badge-success\">Ativo</span>",
    },
    ComponentSpec {
        name: "Card",
        description: "Superfície que agrupa conteúdo relacionado",
        variants: &[
            ComponentVariant {
                label: "Elevated",
                class: "bc-card bc-card-elevated",
            },
            ComponentVariant {
                label: "Outlined",
                class: "bc-card bc-card-outlined",
            },
        ],
        states: &["default", "hover", "selected"],
        code: "<div class=\"bc-card bc-card-elevated\">\n  <h3>Título</h3>\n  <p>Conteúdo</p>\n</div>",
    },
    ComponentSpec {
        name: "Alert",
        description: "Mensagem contextual de feedback",
        variants: &[
            ComponentVariant {
                label: "Info",
                class: "bc-alert bc-alert-info",
            },
            ComponentVariant {
                label: "Error",
                class: "bc-alert bc-alert-error",
            },
        ],
        states: &["default", "dismissible"],
        code: "<div role=\"alert\" class=\"bc-alert bc-alert-info\">Mensagem</div>",
    },
    ComponentSpec {
        name: "Avatar",
        description: "Representação visual de uma pessoa ou marca",
        variants: &[
            ComponentVariant {
                label: "Small",
                class: "bc-avatar bc-avatar-sm",
            },
            ComponentVariant {
                label: "Large",
                class: "bc-avatar bc-avatar-lg",
            },
        ],
        states: &["default", "fallback"],
        code: "<span class=\"bc-avatar bc-avatar-sm\">BC</span>",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_component_has_a_variant_and_state() {
        for component in COMPONENTS {
            assert!(!component.variants.is_empty(), "{}", component.name);
            assert!(!component.states.is_empty(), "{}", component.name);
        }
    }

    #[test]
    fn snippets_reference_the_first_variant_prefix() {
        for component in COMPONENTS {
            let base = component.variants[0]
                .class
                .split_whitespace()
                .next()
                .expect("class");
            assert!(component.code.contains(base), "{}", component.name);
        }
    }
}
