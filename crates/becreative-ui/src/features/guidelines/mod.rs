//! Design guidelines full-page view.
//!
//! # Design
//! - One section expanded at a time, `why-design-system` first.
//! - Checklist ticks are local to the view and vanish when it closes.

use becreative_catalog::guidelines::QUALITY_CHECKLIST;

use crate::core::accordion::OpenSet;

#[cfg(target_arch = "wasm32")]
pub mod view;

/// Ticked checklist items as `(group, item)` indices.
pub type ChecklistTicks = OpenSet<(usize, usize)>;

/// Ticked and total checklist items.
#[must_use]
pub fn checklist_progress(ticks: &ChecklistTicks) -> (usize, usize) {
    let mut done = 0;
    let mut total = 0;
    for (group, block) in QUALITY_CHECKLIST.iter().enumerate() {
        for item in 0..block.items.len() {
            total += 1;
            if ticks.is_open((group, item)) {
                done += 1;
            }
        }
    }
    (done, total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_counts_only_ticked_items() {
        let ticks = ChecklistTicks::default().toggled((0, 0)).toggled((3, 4));
        assert_eq!(checklist_progress(&ticks), (2, 20));
    }

    #[test]
    fn unticking_restores_progress() {
        let ticks = ChecklistTicks::default().toggled((1, 2)).toggled((1, 2));
        assert_eq!(checklist_progress(&ticks).0, 0);
    }

    #[test]
    fn out_of_range_ticks_are_ignored() {
        let ticks = ChecklistTicks::default().toggled((9, 9));
        assert_eq!(checklist_progress(&ticks).0, 0);
    }
}
