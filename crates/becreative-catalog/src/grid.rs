//! Grid layouts, spacing scale and breakpoints.
//!
//! # Design
//! - Each pattern carries the exact class string that is both applied to the
//!   live demo and copied to the clipboard.
//! - Demo item counts live with the pattern so the renderer stays generic.

use serde::Serialize;

use crate::Named;

/// Layout family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GridKind {
    /// `auto-fit` / `auto-fill` grids with a minimum column width.
    Automatic,
    /// Breakpoint-driven column counts.
    Responsive,
}

/// One documented grid layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct GridPattern {
    /// Display name.
    pub name: &'static str,
    /// Layout family.
    pub kind: GridKind,
    /// What the layout does.
    pub description: &'static str,
    /// Where it is meant to be used.
    pub usage: &'static str,
    /// Class string applied and copied.
    pub code: &'static str,
    /// Number of placeholder items in the live demo.
    pub demo_items: usize,
}

impl Named for GridPattern {
    fn name(&self) -> &'static str {
        self.name
    }
}

/// One spacing step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SpacingStep {
    /// Display name.
    pub name: &'static str,
    /// Gap utility class.
    pub class: &'static str,
    /// Pixel value.
    pub value: &'static str,
    /// Where it is meant to be used.
    pub usage: &'static str,
}

impl Named for SpacingStep {
    fn name(&self) -> &'static str {
        self.name
    }
}

/// Responsive breakpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Breakpoint {
    /// Prefix, without the trailing colon.
    pub prefix: &'static str,
    /// Minimum viewport width in pixels.
    pub min_width: u32,
}

impl Named for Breakpoint {
    fn name(&self) -> &'static str {
        self.prefix
    }
}

impl Breakpoint {
    /// `640px+` style label.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}px+", self.min_width)
    }
}

/// All grid patterns, automatic first.
pub const GRID_PATTERNS: &[GridPattern] = &[
    GridPattern {
        name: "Auto Fit 250px",
        kind: GridKind::Automatic,
        description: "Grid responsivo com colunas mínimas de 250px",
        usage: "Cards de produtos, galeria de imagens",
        code: "grid grid-cols-auto-fit-250 gap-6",
        demo_items: 6,
    },
    GridPattern {
        name: "Auto Fit 300px",
        kind: GridKind::Automatic,
        description: "Grid responsivo com colunas mínimas de 300px",
        usage: "Cards de conteúdo, portfolios",
        code: "grid grid-cols-auto-fit-300 gap-6",
        demo_items: 6,
    },
    GridPattern {
        name: "Auto Fill 200px",
        kind: GridKind::Automatic,
        description: "Grid que preenche com colunas de 200px",
        usage: "Thumbnails, ícones, elementos pequenos",
        code: "grid grid-cols-auto-fill-200 gap-4",
        demo_items: 6,
    },
    GridPattern {
        name: "12 Column Grid",
        kind: GridKind::Responsive,
        description: "Sistema clássico de 12 colunas",
        usage: "Layouts complexos, dashboard",
        code: "grid grid-cols-12 gap-6",
        demo_items: 12,
    },
    GridPattern {
        name: "Responsive Cards",
        kind: GridKind::Responsive,
        description: "1 coluna mobile, 2 tablet, 3 desktop",
        usage: "Cards de conteúdo, artigos",
        code: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
        demo_items: 6,
    },
    GridPattern {
        name: "Sidebar Layout",
        kind: GridKind::Responsive,
        description: "Layout com sidebar em desktop",
        usage: "Páginas de conteúdo com navegação lateral",
        code: "grid grid-cols-1 lg:grid-cols-4 gap-6",
        demo_items: 6,
    },
];

/// Spacing scale.
pub const SPACING_SCALE: &[SpacingStep] = &[
    SpacingStep {
        name: "Extra Small",
        class: "gap-2",
        value: "8px",
        usage: "Elementos muito próximos",
    },
    SpacingStep {
        name: "Small",
        class: "gap-4",
        value: "16px",
        usage: "Elementos relacionados",
    },
    SpacingStep {
        name: "Medium",
        class: "gap-6",
        value: "24px",
        usage: "Espaçamento padrão",
    },
    SpacingStep {
        name: "Large",
        class: "gap-8",
        value: "32px",
        usage: "Seções distintas",
    },
    SpacingStep {
        name: "Extra Large",
        class: "gap-12",
        value: "48px",
        usage: "Separação de blocos",
    },
];

/// Breakpoints in ascending width.
pub const BREAKPOINTS: &[Breakpoint] = &[
    Breakpoint {
        prefix: "sm",
        min_width: 640,
    },
    Breakpoint {
        prefix: "md",
        min_width: 768,
    },
    Breakpoint {
        prefix: "lg",
        min_width: 1024,
    },
    Breakpoint {
        prefix: "xl",
        min_width: 1280,
    },
    Breakpoint {
        prefix: "2xl",
        min_width: 1536,
    },
];

/// Recommended usage next to the breakpoint table.
pub const BREAKPOINT_ADVICE: &[(&str, &str)] = &[
    (
        "Mobile First",
        "Comece com mobile e adicione breakpoints maiores",
    ),
    (
        "Container",
        "Use max-width para limitar largura em telas grandes",
    ),
    (
        "Flexibilidade",
        "Combine grid com flexbox quando necessário",
    ),
];

/// Good practices for grid layouts.
pub const GRID_PRACTICES: &[&str] = &[
    "Use grids automáticos para conteúdo dinâmico",
    "Mantenha espaçamento consistente",
    "Teste em diferentes tamanhos de tela",
    "Priorize legibilidade e usabilidade",
];

/// Performance notes for grid layouts.
pub const GRID_PERFORMANCE: &[&str] = &[
    "Evite grids muito complexos",
    "Use CSS Grid para layouts 2D",
    "Prefira Flexbox para layouts 1D",
    "Otimize para dispositivos móveis",
];

/// Patterns of one layout family, in display order.
pub fn patterns_of(kind: GridKind) -> impl Iterator<Item = &'static GridPattern> {
    GRID_PATTERNS.iter().filter(move |pattern| pattern.kind == kind)
}

/// Find the breakpoint active at a viewport width.
#[must_use]
pub fn breakpoint_for(width: u32) -> Option<&'static Breakpoint> {
    BREAKPOINTS
        .iter()
        .rev()
        .find(|breakpoint| width >= breakpoint.min_width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twelve_column_demo_fills_every_column() {
        let twelve = GRID_PATTERNS
            .iter()
            .find(|pattern| pattern.name == "12 Column Grid")
            .expect("pattern");
        assert_eq!(twelve.demo_items, 12);
    }

    #[test]
    fn families_split_three_and_three() {
        assert_eq!(patterns_of(GridKind::Automatic).count(), 3);
        assert_eq!(patterns_of(GridKind::Responsive).count(), 3);
    }

    #[test]
    fn breakpoint_lookup_picks_widest_match() {
        assert_eq!(breakpoint_for(320), None);
        assert_eq!(breakpoint_for(640).map(|bp| bp.prefix), Some("sm"));
        assert_eq!(breakpoint_for(1100).map(|bp| bp.prefix), Some("lg"));
        assert_eq!(breakpoint_for(4000).map(|bp| bp.prefix), Some("2xl"));
        assert_eq!(BREAKPOINTS[0].label(), "640px+");
    }
}
