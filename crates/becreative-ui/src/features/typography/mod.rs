//! Typography scale panel.

use becreative_catalog::typography::TypographyStep;

#[cfg(target_arch = "wasm32")]
pub mod view;

/// Inline style that renders the sample at the step's size.
#[must_use]
pub fn sample_style(step: &TypographyStep) -> String {
    step.css().replace('\n', " ")
}

#[cfg(test)]
mod tests {
    use becreative_catalog::typography::TYPE_SCALE;

    use super::*;

    #[test]
    fn sample_style_is_a_single_line() {
        for step in TYPE_SCALE {
            let style = sample_style(step);
            assert!(!style.contains('\n'));
            assert!(style.contains(&format!("font-size: {};", step.size)));
            assert!(style.contains(&format!("font-weight: {};", step.weight)));
        }
    }
}
