//! Color tokens panel.
//!
//! # Design
//! - The swatch mode decides which hex values a card shows and offers to copy.
//! - The CSS snippet is always copyable, whatever the mode.

use becreative_catalog::colors::ColorToken;
use becreative_catalog::css::token_snippet;

use crate::core::ui::{SwatchMode, SwatchVariant, swatch_label};

#[cfg(target_arch = "wasm32")]
pub mod view;

/// One copy button on a token card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CopyTarget {
    /// Indicator label.
    pub label: String,
    /// Clipboard text.
    pub text: String,
}

/// Copy targets a card offers in `mode`, hex values first.
#[must_use]
pub fn swatch_copies(token: &ColorToken, mode: SwatchMode) -> Vec<CopyTarget> {
    let mut targets = Vec::with_capacity(3);
    if mode.shows_light() {
        targets.push(CopyTarget {
            label: swatch_label(token.name, SwatchVariant::Light),
            text: token.light.to_owned(),
        });
    }
    if mode.shows_dark() {
        targets.push(CopyTarget {
            label: swatch_label(token.name, SwatchVariant::Dark),
            text: token.dark.to_owned(),
        });
    }
    targets.push(CopyTarget {
        label: swatch_label(token.name, SwatchVariant::Css),
        text: token_snippet(token),
    });
    targets
}

#[cfg(test)]
mod tests {
    use becreative_catalog::colors::{all_tokens, find_token};

    use super::*;

    #[test]
    fn compare_mode_offers_both_hex_values_and_css() {
        let token = find_token("bc-primary-500").expect("token");
        let targets = swatch_copies(token, SwatchMode::Compare);
        let labels: Vec<_> = targets.iter().map(|target| target.label.as_str()).collect();
        assert_eq!(
            labels,
            ["bc-primary-500-light", "bc-primary-500-dark", "bc-primary-500-css"]
        );
        assert_eq!(targets[0].text, "#a855f7");
        assert_eq!(targets[1].text, token.dark);
    }

    #[test]
    fn single_modes_hide_the_other_variant() {
        let token = find_token("bc-primary-500").expect("token");
        let light = swatch_copies(token, SwatchMode::Light);
        assert_eq!(light.len(), 2);
        assert!(light.iter().all(|target| !target.label.ends_with("-dark")));
        let dark = swatch_copies(token, SwatchMode::Dark);
        assert!(dark.iter().all(|target| !target.label.ends_with("-light")));
    }

    #[test]
    fn css_target_matches_snippet_for_every_token() {
        for token in all_tokens() {
            let targets = swatch_copies(token, SwatchMode::Light);
            let css = targets.last().expect("css target");
            assert_eq!(css.text, token_snippet(token));
            assert!(css.text.contains(&format!("--{}: {};", token.name, token.dark)));
        }
    }
}
