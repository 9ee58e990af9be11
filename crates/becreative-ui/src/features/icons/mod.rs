//! Icon library panel.
//!
//! # Design
//! - A category filter narrows the grid; `None` shows every icon.
//! - Each card copies the component markup for its icon.

use becreative_catalog::icons::{ICONS, IconCategory, IconEntry, icons_in};

#[cfg(target_arch = "wasm32")]
pub mod view;

/// Icons matching the category filter, in catalog order.
#[must_use]
pub fn visible_icons(filter: Option<IconCategory>) -> Vec<&'static IconEntry> {
    match filter {
        Some(category) => icons_in(category).collect(),
        None => ICONS.iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_filter_shows_the_whole_library() {
        assert_eq!(visible_icons(None).len(), ICONS.len());
    }

    #[test]
    fn category_filters_partition_the_library() {
        let total: usize = IconCategory::all()
            .into_iter()
            .map(|category| {
                let icons = visible_icons(Some(category));
                assert!(icons.iter().all(|icon| icon.category == category));
                icons.len()
            })
            .sum();
        assert_eq!(total, ICONS.len());
    }
}
