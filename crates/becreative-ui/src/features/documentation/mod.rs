//! Usage documentation full-page view.
//!
//! # Design
//! - Sections are multi-open, starting with `intro`; code samples inside them
//!   are a second multi-open group.
//! - Printing leaves the open state alone: closed bodies stay in the DOM and
//!   the print stylesheet reveals them.

use becreative_catalog::documentation::{DocSectionId, version_line};

use crate::core::accordion::OpenSet;

#[cfg(target_arch = "wasm32")]
pub mod view;

/// Open sections, open code samples and ticked checklist items.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocState {
    /// Expanded sections.
    pub sections: OpenSet<DocSectionId>,
    /// Expanded code samples, by sample id.
    pub code: OpenSet<&'static str>,
    /// Ticked checklist items, by item term.
    pub checks: OpenSet<&'static str>,
}

impl Default for DocState {
    fn default() -> Self {
        Self {
            sections: OpenSet::with_open([DocSectionId::INITIAL]),
            code: OpenSet::default(),
            checks: OpenSet::default(),
        }
    }
}

/// Footer lines: product and version, then the last-updated date.
#[must_use]
pub fn footer_lines(today: &str) -> [String; 2] {
    [version_line(), format!("Última atualização: {today}")]
}

#[cfg(test)]
mod tests {
    use becreative_catalog::documentation::{DOC_SECTIONS, code_samples};

    use super::*;

    const APP_CSS: &str = include_str!("../../../static/app.css");

    #[test]
    fn only_intro_starts_open() {
        let state = DocState::default();
        assert!(
            DOC_SECTIONS
                .iter()
                .all(|section| state.sections.is_open(section.id) == (section.id == DocSectionId::Intro))
        );
        assert!(code_samples().all(|sample| !state.code.is_open(sample.id)));
    }

    #[test]
    fn print_styles_reveal_closed_sections() {
        let (_, print) = APP_CSS.split_once("@media print").expect("print block");
        let (_, rule) = print
            .split_once(".bc-collapsible-body.is-closed {")
            .expect("closed body rule");
        assert!(rule.trim_start().starts_with("display: block;"));
        assert!(print.contains(".bc-no-print"));
    }

    #[test]
    fn footer_carries_version_and_date() {
        let [version, updated] = footer_lines("18/10/2026");
        assert_eq!(version, "Design System Bê Creative - v1.0.0");
        assert_eq!(updated, "Última atualização: 18/10/2026");
    }
}
