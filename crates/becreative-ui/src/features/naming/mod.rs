//! Naming conventions panel.
//!
//! # Design
//! - Four independent accordion groups; within a group at most one item is open.
//! - Item ids are `<group>-<index>` so groups never collide.

use crate::core::accordion::SingleOpen;

#[cfg(target_arch = "wasm32")]
pub mod view;

/// Accordion groups of the panel, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NamingGroup {
    /// Layer naming rules.
    Layers,
    /// Token conventions.
    Tokens,
    /// Design tool setup guide.
    Setup,
    /// Best practices.
    Practices,
}

impl NamingGroup {
    /// Id prefix for items of the group.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Layers => "layer",
            Self::Tokens => "token",
            Self::Setup => "setup",
            Self::Practices => "practice",
        }
    }

    /// Group heading.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Layers => "Convenções para Layers no Figma",
            Self::Tokens => "Convenções para Design Tokens",
            Self::Setup => "Guia de Configuração no Figma",
            Self::Practices => "Boas Práticas e Importância",
        }
    }
}

/// Stable id of one accordion item.
#[must_use]
pub fn accordion_id(group: NamingGroup, index: usize) -> String {
    format!("{}-{index}", group.prefix())
}

/// Open item per group.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NamingAccordions {
    layers: SingleOpen<usize>,
    tokens: SingleOpen<usize>,
    setup: SingleOpen<usize>,
    practices: SingleOpen<usize>,
}

impl NamingAccordions {
    const fn group(&self, group: NamingGroup) -> &SingleOpen<usize> {
        match group {
            NamingGroup::Layers => &self.layers,
            NamingGroup::Tokens => &self.tokens,
            NamingGroup::Setup => &self.setup,
            NamingGroup::Practices => &self.practices,
        }
    }

    /// Whether item `index` of `group` is open.
    #[must_use]
    pub fn is_open(&self, group: NamingGroup, index: usize) -> bool {
        self.group(group).is_open(index)
    }

    /// Copy with item `index` of `group` toggled; other groups are untouched.
    #[must_use]
    pub fn toggled(&self, group: NamingGroup, index: usize) -> Self {
        let mut next = *self;
        let slot = match group {
            NamingGroup::Layers => &mut next.layers,
            NamingGroup::Tokens => &mut next.tokens,
            NamingGroup::Setup => &mut next.setup,
            NamingGroup::Practices => &mut next.practices,
        };
        *slot = slot.toggled(index);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_carry_the_group_prefix() {
        assert_eq!(accordion_id(NamingGroup::Layers, 0), "layer-0");
        assert_eq!(accordion_id(NamingGroup::Practices, 5), "practice-5");
    }

    #[test]
    fn groups_open_independently() {
        let state = NamingAccordions::default()
            .toggled(NamingGroup::Layers, 1)
            .toggled(NamingGroup::Tokens, 2);
        assert!(state.is_open(NamingGroup::Layers, 1));
        assert!(state.is_open(NamingGroup::Tokens, 2));
        assert!(!state.is_open(NamingGroup::Setup, 0));
    }

    #[test]
    fn opening_an_item_closes_its_sibling() {
        let state = NamingAccordions::default()
            .toggled(NamingGroup::Setup, 0)
            .toggled(NamingGroup::Setup, 3);
        assert!(!state.is_open(NamingGroup::Setup, 0));
        assert!(state.is_open(NamingGroup::Setup, 3));
        assert!(!state.toggled(NamingGroup::Setup, 3).is_open(NamingGroup::Setup, 3));
    }
}
