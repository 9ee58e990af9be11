//! Form patterns.

use serde::Serialize;

use crate::Named;

/// Kind of form control the pattern documents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Single-line text input.
    Text,
    /// E-mail input.
    Email,
    /// Password input.
    Password,
    /// Multi-line text.
    TextArea,
    /// Native select.
    Select,
    /// Checkbox.
    Checkbox,
}

impl FieldKind {
    /// Value for the `type` attribute when the control is an `<input>`.
    #[must_use]
    pub const fn input_type(self) -> Option<&'static str> {
        match self {
            Self::Text => Some("text"),
            Self::Email => Some("email"),
            Self::Password => Some("password"),
            Self::Checkbox => Some("checkbox"),
            Self::TextArea | Self::Select => None,
        }
    }
}

/// One documented form field pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FormPattern {
    /// Pattern name.
    pub name: &'static str,
    /// Control kind.
    pub kind: FieldKind,
    /// Field label.
    pub label: &'static str,
    /// Placeholder text.
    pub placeholder: &'static str,
    /// Helper text under the field.
    pub helper: &'static str,
    /// Error message shown in the invalid preview.
    pub error: &'static str,
    /// Usage snippet.
    pub code: &'static str,
}

impl Named for FormPattern {
    fn name(&self) -> &'static str {
        self.name
    }
}

/// Field patterns in display order.
pub const FORM_PATTERNS: &[FormPattern] = &[
    FormPattern {
        name: "Text Input",
        kind: FieldKind::Text,
        label: "Nome completo",
        placeholder: "Digite seu nome",
        helper: "Como aparece no documento",
        error: "Campo obrigatório",
        code: "<label for=\"name\">Nome completo</label>\n<input id=\"name\" class=\"bc-input\" type=\"text\" />",
    },
    FormPattern {
        name: "Email Input",
        kind: FieldKind::Email,
        label: "E-mail",
        placeholder: "voce@exemplo.com",
        helper: "Nunca compartilhamos seu e-mail",
        error: "Informe um e-mail válido",
        code: "<input class=\"bc-input\" type=\"email\" autocomplete=\"email\" />",
    },
    FormPattern {
        name: "Password Input",
        kind: FieldKind::Password,
        label: "Senha",
        placeholder: "Mínimo de 8 caracteres",
        helper: "Use letras, números e símbolos",
        error: "A senha é muito curta",
        code: "<input class=\"bc-input\" type=\"password\" minlength=\"8\" />",
    },
    FormPattern {
        name: "Textarea",
        kind: FieldKind::TextArea,
        label: "Mensagem",
        placeholder: "Escreva sua mensagem",
        helper: "Até 500 caracteres",
        error: "Mensagem muito longa",
        code: "<textarea class=\"bc-input\" rows=\"4\"></textarea>",
    },
    FormPattern {
        name: "Select",
        kind: FieldKind::Select,
        label: "Estado",
        placeholder: "Selecione",
        helper: "Escolha uma opção",
        error: "Selecione uma opção",
        code: "<select class=\"bc-input\">\n  <option>Selecione</option>\n</select>",
    },
    FormPattern {
        name: "Checkbox",
        kind: FieldKind::Checkbox,
        label: "Aceito os termos de uso",
        placeholder: "",
        helper: "Obrigatório para continuar",
        error: "Você precisa aceitar os termos",
        code: "<label><input type=\"checkbox\" class=\"bc-checkbox\" /> Aceito</label>",
    },
];

/// Validation and layout guidance.
pub const FORM_GUIDELINES: &[&str] = &[
    "Sempre associe um label visível a cada campo",
    "Valide ao sair do campo, não a cada tecla",
    "Mensagens de erro devem dizer como corrigir o problema",
    "Agrupe campos relacionados com fieldset e legend",
    "Mantenha a ordem de tabulação igual à ordem visual",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_types_match_snippets() {
        for pattern in FORM_PATTERNS {
            if let Some(kind) = pattern.kind.input_type() {
                assert!(
                    pattern.code.contains(&format!("type=\"{kind}\"")),
                    "{} snippet",
                    pattern.name
                );
            }
        }
    }
}
