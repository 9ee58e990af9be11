//! CSS custom property rendering for color tokens.

use std::fmt::Write as _;

use crate::colors::{ColorCategory, ColorToken};

/// Selector holding the light values.
pub const LIGHT_SCOPE: &str = ":root";
/// Selector holding the dark values.
pub const DARK_SCOPE: &str = ".dark";

/// Snippet copied from a token card: one declaration per theme scope.
#[must_use]
pub fn token_snippet(token: &ColorToken) -> String {
    format!(
        "{LIGHT_SCOPE} {{\n  --{name}: {light};\n}}\n\n{DARK_SCOPE} {{\n  --{name}: {dark};\n}}",
        name = token.name,
        light = token.light,
        dark = token.dark,
    )
}

/// Full stylesheet for a palette, grouped by category within each scope.
#[must_use]
pub fn stylesheet(categories: &[ColorCategory]) -> String {
    let mut out = String::from("/* Generated by token_export. Do not edit by hand. */\n");
    write_scope(&mut out, LIGHT_SCOPE, categories, |token| token.light);
    out.push('\n');
    write_scope(&mut out, DARK_SCOPE, categories, |token| token.dark);
    out
}

fn write_scope(
    out: &mut String,
    selector: &str,
    categories: &[ColorCategory],
    value: impl Fn(&ColorToken) -> &'static str,
) {
    out.push_str(selector);
    out.push_str(" {\n");
    for (index, category) in categories.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        // Writing into a String cannot fail.
        let _ = writeln!(out, "  /* {} */", category.name);
        for token in category.tokens {
            let _ = writeln!(out, "  --{}: {};", token.name, value(token));
        }
    }
    out.push_str("}\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{COLOR_CATEGORIES, find_token};

    #[test]
    fn snippet_matches_card_layout() {
        let token = find_token("bc-primary-500").expect("token");
        assert_eq!(
            token_snippet(token),
            ":root {\n  --bc-primary-500: #a855f7;\n}\n\n.dark {\n  --bc-primary-500: #6366f1;\n}"
        );
    }

    #[test]
    fn stylesheet_declares_every_token_in_both_scopes() {
        let css = stylesheet(COLOR_CATEGORIES);
        let (light, dark) = css.split_once(".dark {").expect("dark scope");
        for token in crate::colors::all_tokens() {
            assert!(light.contains(&format!("--{}: {};", token.name, token.light)));
            assert!(dark.contains(&format!("--{}: {};", token.name, token.dark)));
        }
    }

    #[test]
    fn stylesheet_is_deterministic() {
        assert_eq!(stylesheet(COLOR_CATEGORIES), stylesheet(COLOR_CATEGORIES));
    }
}
