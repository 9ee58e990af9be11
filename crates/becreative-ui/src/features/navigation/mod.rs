//! Navigation patterns panel.
//!
//! # Design
//! - Previews are drawn per layout kind; only the mobile header preview is
//!   interactive (its menu toggles open and closed).
//! - Code snippets sit in one single-open group across all variants.

use becreative_catalog::navigation::FigmaSpecs;

#[cfg(target_arch = "wasm32")]
pub mod view;

/// Labelled rows of the design tool frame settings, in display order.
#[must_use]
pub const fn figma_rows(specs: &FigmaSpecs) -> [(&'static str, &'static str); 5] {
    [
        ("Width", specs.width),
        ("Height", specs.height),
        ("Padding", specs.padding),
        ("Constraints", specs.constraints),
        ("Auto Layout", specs.auto_layout),
    ]
}

#[cfg(test)]
mod tests {
    use becreative_catalog::navigation::NAVIGATION_VARIANTS;

    use super::*;

    #[test]
    fn figma_rows_cover_every_spec_field() {
        for variant in NAVIGATION_VARIANTS {
            let rows = figma_rows(&variant.figma);
            assert_eq!(rows[1], ("Height", variant.figma.height));
            assert!(rows.iter().all(|(_, value)| !value.is_empty()));
        }
    }
}
