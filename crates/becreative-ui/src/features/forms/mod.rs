//! Form patterns panel.
//!
//! # Design
//! - Every pattern is previewed twice, in its default and its error state.
//! - Preview controls get unique ids so labels and helper text stay linked.

use becreative_catalog::forms::FormPattern;

#[cfg(target_arch = "wasm32")]
pub mod view;

/// Preview state of a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldState {
    /// Untouched field.
    Default,
    /// Field showing its validation message.
    Error,
}

impl FieldState {
    /// Suffix used in ids and class names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Error => "error",
        }
    }
}

/// DOM id of a preview control.
#[must_use]
pub fn field_id(pattern: &FormPattern, state: FieldState) -> String {
    let slug: String = pattern
        .name
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() {
                ch.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect();
    format!("field-{slug}-{}", state.as_str())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use becreative_catalog::forms::FORM_PATTERNS;

    use super::*;

    #[test]
    fn ids_are_slugged() {
        assert_eq!(
            field_id(&FORM_PATTERNS[0], FieldState::Error),
            "field-text-input-error"
        );
    }

    #[test]
    fn ids_are_unique_across_patterns_and_states() {
        let ids: HashSet<_> = FORM_PATTERNS
            .iter()
            .flat_map(|pattern| {
                [FieldState::Default, FieldState::Error]
                    .map(|state| field_id(pattern, state))
            })
            .collect();
        assert_eq!(ids.len(), FORM_PATTERNS.len() * 2);
    }
}
