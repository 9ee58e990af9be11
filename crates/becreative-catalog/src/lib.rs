#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, missing_docs)]
#![allow(clippy::module_name_repetitions, clippy::must_use_candidate)]

//! Static catalog for the Bê Creative design-system docs.
//!
//! Every table is `'static`, immutable and serializable. The UI crate renders
//! them; the token export tool turns the palette into a stylesheet.

use std::collections::HashSet;

use serde::Serialize;

pub mod colors;
pub mod components;
pub mod css;
pub mod documentation;
pub mod error;
pub mod forms;
pub mod grid;
pub mod guidelines;
pub mod icons;
pub mod naming;
pub mod navigation;
pub mod sections;
pub mod shadows;
pub mod typography;

pub use error::{CatalogError, CatalogResult};
pub use sections::SectionId;

/// Entry with a display name that must be unique within its table.
pub trait Named {
    /// Display name.
    fn name(&self) -> &'static str;
}

/// Titled paragraph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct GuideNote {
    /// Heading.
    pub title: &'static str,
    /// Paragraph.
    pub body: &'static str,
}

impl Named for GuideNote {
    fn name(&self) -> &'static str {
        self.title
    }
}

/// Titled list of short items.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ListBlock {
    /// Heading.
    pub title: &'static str,
    /// Items in order.
    pub items: &'static [&'static str],
}

impl Named for ListBlock {
    fn name(&self) -> &'static str {
        self.title
    }
}

/// Check that a table is non-empty and its display names are unique.
///
/// # Errors
///
/// Returns [`CatalogError::EmptyTable`] or the first
/// [`CatalogError::DuplicateName`] found.
pub fn ensure_unique<T: Named>(table: &'static str, items: &[T]) -> CatalogResult<()> {
    if items.is_empty() {
        return Err(CatalogError::EmptyTable { table });
    }
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        let name = item.name();
        if !seen.insert(name) {
            return Err(CatalogError::DuplicateName { table, name });
        }
    }
    Ok(())
}

/// Validate every catalog table.
///
/// # Errors
///
/// Returns the first table that breaks the unique-name invariant.
pub fn validate() -> CatalogResult<()> {
    let tokens: Vec<_> = colors::all_tokens().copied().collect();
    ensure_unique("color_categories", colors::COLOR_CATEGORIES)?;
    ensure_unique("color_tokens", &tokens)?;
    ensure_unique("type_scale", typography::TYPE_SCALE)?;
    ensure_unique("components", components::COMPONENTS)?;
    ensure_unique("shadows", shadows::SHADOWS)?;
    ensure_unique("icons", icons::ICONS)?;
    ensure_unique("grid_patterns", grid::GRID_PATTERNS)?;
    ensure_unique("spacing_scale", grid::SPACING_SCALE)?;
    ensure_unique("breakpoints", grid::BREAKPOINTS)?;
    ensure_unique("navigation_variants", navigation::NAVIGATION_VARIANTS)?;
    ensure_unique("device_profiles", navigation::DEVICE_PROFILES)?;
    ensure_unique("form_patterns", forms::FORM_PATTERNS)?;
    ensure_unique("layer_naming_rules", naming::LAYER_NAMING_RULES)?;
    ensure_unique("token_conventions", naming::TOKEN_CONVENTIONS)?;
    for convention in naming::TOKEN_CONVENTIONS {
        ensure_unique("token_examples", convention.examples)?;
    }
    ensure_unique("naming_practices", naming::NAMING_PRACTICES)?;
    ensure_unique("figma_setup_guide", naming::FIGMA_SETUP_GUIDE)?;
    ensure_unique("nielsen_heuristics", guidelines::NIELSEN_HEURISTICS)?;
    ensure_unique("design_process", guidelines::DESIGN_PROCESS)?;
    ensure_unique("quality_checklist", guidelines::QUALITY_CHECKLIST)?;
    ensure_unique("reference_links", guidelines::REFERENCE_LINKS)?;
    ensure_unique("doc_sections", documentation::DOC_SECTIONS)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_catalog_is_valid() {
        assert_eq!(validate(), Ok(()));
    }

    #[test]
    fn duplicate_names_are_reported() {
        let notes = [
            GuideNote {
                title: "A",
                body: "first",
            },
            GuideNote {
                title: "A",
                body: "second",
            },
        ];
        assert_eq!(
            ensure_unique("notes", &notes),
            Err(CatalogError::DuplicateName {
                table: "notes",
                name: "A"
            })
        );
    }

    #[test]
    fn empty_tables_are_reported() {
        let notes: [GuideNote; 0] = [];
        assert_eq!(
            ensure_unique("notes", &notes),
            Err(CatalogError::EmptyTable { table: "notes" })
        );
    }

    #[test]
    fn palette_serializes_to_json() -> Result<(), serde_json::Error> {
        let json = serde_json::to_value(colors::COLOR_CATEGORIES)?;
        assert_eq!(json[0]["tokens"][5]["name"], "bc-primary-500");
        assert_eq!(json[0]["tokens"][5]["contrast"]["dark"], "4.2:1");
        Ok(())
    }
}
