//! Open/closed bookkeeping for collapsible groups.
//!
//! Two flavours: [`OpenSet`] lets any number of items stay open, while
//! [`SingleOpen`] keeps at most one item of its group open.

use std::collections::HashSet;
use std::hash::Hash;

/// Multi-open group: each toggle flips membership of one id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OpenSet<T: Eq + Hash> {
    open: HashSet<T>,
}

impl<T: Eq + Hash> Default for OpenSet<T> {
    fn default() -> Self {
        Self {
            open: HashSet::new(),
        }
    }
}

impl<T: Copy + Eq + Hash> OpenSet<T> {
    /// Group with the given ids open.
    pub fn with_open(ids: impl IntoIterator<Item = T>) -> Self {
        Self {
            open: ids.into_iter().collect(),
        }
    }

    /// Whether `id` is open.
    #[must_use]
    pub fn is_open(&self, id: T) -> bool {
        self.open.contains(&id)
    }

    /// Copy with `id` flipped.
    #[must_use]
    pub fn toggled(&self, id: T) -> Self {
        let mut next = self.clone();
        if !next.open.remove(&id) {
            next.open.insert(id);
        }
        next
    }

}

/// Single-open group: opening one item closes the rest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SingleOpen<T> {
    open: Option<T>,
}

impl<T> Default for SingleOpen<T> {
    fn default() -> Self {
        Self { open: None }
    }
}

impl<T: Copy + PartialEq> SingleOpen<T> {
    /// Group starting with `initial` open, or all closed.
    #[must_use]
    pub const fn new(initial: Option<T>) -> Self {
        Self { open: initial }
    }

    /// Whether `id` is the open item.
    #[must_use]
    pub fn is_open(&self, id: T) -> bool {
        self.open == Some(id)
    }

    /// Copy with `id` opened, or everything closed when `id` was open.
    #[must_use]
    pub fn toggled(&self, id: T) -> Self {
        Self {
            open: if self.is_open(id) { None } else { Some(id) },
        }
    }
}

#[cfg(test)]
mod tests {
    use becreative_catalog::documentation::{DOC_SECTIONS, DocSectionId};
    use becreative_catalog::guidelines::GuidelineSection;

    use super::*;

    #[test]
    fn multi_open_items_are_independent() {
        let set = OpenSet::with_open([DocSectionId::INITIAL])
            .toggled(DocSectionId::Colors)
            .toggled(DocSectionId::Tokens);
        assert!(set.is_open(DocSectionId::Intro));
        assert!(set.is_open(DocSectionId::Colors));
        let set = set.toggled(DocSectionId::Colors);
        assert!(!set.is_open(DocSectionId::Colors));
        assert!(set.is_open(DocSectionId::Tokens));
    }

    #[test]
    fn toggling_twice_is_a_no_op() {
        let set = OpenSet::<&str>::default();
        assert_eq!(set.toggled("a").toggled("a"), set);
    }

    #[test]
    fn opening_every_section_one_by_one() {
        let set = DOC_SECTIONS
            .iter()
            .filter(|section| section.id != DocSectionId::INITIAL)
            .fold(OpenSet::with_open([DocSectionId::INITIAL]), |set, section| {
                set.toggled(section.id)
            });
        assert!(DOC_SECTIONS.iter().all(|section| set.is_open(section.id)));
    }

    #[test]
    fn single_open_closes_siblings() {
        let group = SingleOpen::new(Some(GuidelineSection::INITIAL));
        let group = group.toggled(GuidelineSection::Heuristics);
        assert!(group.is_open(GuidelineSection::Heuristics));
        assert!(!group.is_open(GuidelineSection::WhyDesignSystem));
    }

    #[test]
    fn single_open_toggle_on_open_item_closes_it() {
        let group = SingleOpen::new(Some(GuidelineSection::INITIAL)).toggled(GuidelineSection::INITIAL);
        assert_eq!(group, SingleOpen::default());
        assert!(GuidelineSection::all().into_iter().all(|section| !group.is_open(section)));
    }
}
