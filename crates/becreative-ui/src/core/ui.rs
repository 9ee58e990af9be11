//! Small UI primitives shared by the catalog panels.

/// Which theme variants a color card shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SwatchMode {
    /// Light values only.
    Light,
    /// Dark values only.
    Dark,
    /// Both side by side.
    #[default]
    Compare,
}

impl SwatchMode {
    /// Selector order.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Light, Self::Dark, Self::Compare]
    }

    /// Selector label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::Compare => "Comparar",
        }
    }

    /// Whether light swatches are visible.
    #[must_use]
    pub const fn shows_light(self) -> bool {
        matches!(self, Self::Light | Self::Compare)
    }

    /// Whether dark swatches are visible.
    #[must_use]
    pub const fn shows_dark(self) -> bool {
        matches!(self, Self::Dark | Self::Compare)
    }
}

/// Copyable part of a color card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwatchVariant {
    /// Light hex value.
    Light,
    /// Dark hex value.
    Dark,
    /// Two-scope CSS snippet.
    Css,
}

impl SwatchVariant {
    const fn suffix(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Css => "css",
        }
    }
}

/// Indicator label for one copyable part of a color card.
#[must_use]
pub fn swatch_label(token: &str, variant: SwatchVariant) -> String {
    format!("{token}-{}", variant.suffix())
}

/// `dd/mm/yyyy` as used in the manual footer.
#[must_use]
pub fn format_pt_br_date(day: u32, month: u32, year: u32) -> String {
    format!("{day:02}/{month:02}/{year:04}")
}

/// Numbered cells for a live grid demo.
#[must_use]
pub fn demo_cells(count: usize) -> impl Iterator<Item = usize> {
    1..=count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compare_mode_shows_both_variants() {
        assert!(SwatchMode::Compare.shows_light() && SwatchMode::Compare.shows_dark());
        assert!(SwatchMode::Light.shows_light() && !SwatchMode::Light.shows_dark());
        assert!(!SwatchMode::Dark.shows_light() && SwatchMode::Dark.shows_dark());
        assert_eq!(SwatchMode::default(), SwatchMode::Compare);
    }

    #[test]
    fn swatch_labels_follow_token_name() {
        assert_eq!(swatch_label("bc-primary-500", SwatchVariant::Light), "bc-primary-500-light");
        assert_eq!(swatch_label("bc-primary-500", SwatchVariant::Dark), "bc-primary-500-dark");
        assert_eq!(swatch_label("bc-primary-500", SwatchVariant::Css), "bc-primary-500-css");
    }

    #[test]
    fn dates_are_zero_padded() {
        assert_eq!(format_pt_br_date(3, 7, 2025), "03/07/2025");
        assert_eq!(format_pt_br_date(31, 12, 2024), "31/12/2024");
    }

    #[test]
    fn demo_cells_are_one_based() {
        assert_eq!(demo_cells(3).collect::<Vec<_>>(), [1, 2, 3]);
        assert_eq!(demo_cells(0).count(), 0);
    }
}
