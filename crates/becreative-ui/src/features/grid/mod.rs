//! Grid system panel.
//!
//! # Design
//! - Live demos apply the pattern's class string verbatim, the same string the
//!   copy button writes.

use becreative_catalog::grid::GridKind;

#[cfg(target_arch = "wasm32")]
pub mod view;

/// Cells rendered in each spacing demo.
pub const SPACING_DEMO_CELLS: usize = 4;

/// Heading and lead for a layout family.
#[must_use]
pub const fn kind_heading(kind: GridKind) -> (&'static str, &'static str) {
    match kind {
        GridKind::Automatic => (
            "Grids Automáticos",
            "Colunas que se ajustam ao espaço disponível, sem breakpoints.",
        ),
        GridKind::Responsive => (
            "Grids Responsivos",
            "Número de colunas definido por breakpoint.",
        ),
    }
}

#[cfg(test)]
mod tests {
    use becreative_catalog::grid::{GRID_PATTERNS, patterns_of};

    use super::*;

    #[test]
    fn both_families_have_patterns_and_headings() {
        for kind in [GridKind::Automatic, GridKind::Responsive] {
            assert!(patterns_of(kind).next().is_some());
            assert!(!kind_heading(kind).0.is_empty());
        }
        assert_eq!(
            patterns_of(GridKind::Automatic).count() + patterns_of(GridKind::Responsive).count(),
            GRID_PATTERNS.len()
        );
    }
}
