//! Navigation patterns and device profiles.

use serde::Serialize;

use crate::Named;

/// Target form factor of a navigation variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceClass {
    /// Phones and small tablets.
    Mobile,
    /// Laptops and desktops.
    Desktop,
}

impl DeviceClass {
    /// Badge text.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Desktop => "desktop",
        }
    }
}

/// Layout of the live preview.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavLayout {
    /// Horizontal header with inline links.
    DesktopHeader,
    /// Compact header with a hamburger toggle.
    MobileHeader,
    /// Tab bar pinned to the bottom.
    BottomBar,
    /// Vertical sidebar.
    Sidebar,
}

/// Frame measurements for the design tool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FigmaSpecs {
    /// Frame width.
    pub width: &'static str,
    /// Frame height.
    pub height: &'static str,
    /// Inner padding.
    pub padding: &'static str,
    /// Pinning constraints.
    pub constraints: &'static str,
    /// Auto layout direction and distribution.
    pub auto_layout: &'static str,
}

/// One navigation pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NavigationVariant {
    /// Display name.
    pub name: &'static str,
    /// Target form factor.
    pub device: DeviceClass,
    /// Preview layout.
    pub layout: NavLayout,
    /// Where it is meant to be used.
    pub usage: &'static str,
    /// Runtime behavior.
    pub behavior: &'static str,
    /// Size constraints.
    pub constraints: &'static str,
    /// Design tool frame settings.
    pub figma: FigmaSpecs,
    /// Markup snippet.
    pub code: &'static str,
}

impl Named for NavigationVariant {
    fn name(&self) -> &'static str {
        self.name
    }
}

/// Navigation guidance per device size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DeviceProfile {
    /// Device name.
    pub name: &'static str,
    /// Viewport range.
    pub range: &'static str,
    /// Smallest design frame.
    pub min_frame: &'static str,
    /// Largest design frame.
    pub max_frame: &'static str,
    /// Design approach.
    pub approach: &'static str,
    /// Recommended navigation.
    pub navigation: &'static str,
    /// Notable characteristics.
    pub characteristics: &'static [&'static str],
}

impl Named for DeviceProfile {
    fn name(&self) -> &'static str {
        self.name
    }
}

/// Links rendered inside the header previews.
pub const PREVIEW_LINKS: &[&str] = &["Home", "Produtos", "Sobre", "Contato"];

/// Device profiles, smallest first.
pub const DEVICE_PROFILES: &[DeviceProfile] = &[
    DeviceProfile {
        name: "Mobile",
        range: "320px - 768px",
        min_frame: "320px",
        max_frame: "414px",
        approach: "Mobile First",
        navigation: "Bottom nav + Hamburger menu",
        characteristics: &[
            "Navegação por toque",
            "Área de toque mínima: 44px",
            "Menu hamburger para múltiplas opções",
            "Bottom navigation para 3-5 seções principais",
        ],
    },
    DeviceProfile {
        name: "Tablet",
        range: "768px - 1024px",
        min_frame: "768px",
        max_frame: "1024px",
        approach: "Adaptativo",
        navigation: "Header horizontal + Sidebar opcional",
        characteristics: &[
            "Mix de navegação desktop/mobile",
            "Sidebar colapsível",
            "Header com mais espaço para links",
            "Gestos de swipe opcionais",
        ],
    },
    DeviceProfile {
        name: "Desktop",
        range: "1024px+",
        min_frame: "1024px",
        max_frame: "1920px+",
        approach: "Desktop First (tradicional)",
        navigation: "Header + Sidebar para dashboards",
        characteristics: &[
            "Navegação por mouse/trackpad",
            "Múltiplos níveis de navegação",
            "Breadcrumbs para navegação profunda",
            "Hover states e tooltips",
        ],
    },
];

/// Navigation variants in display order.
pub const NAVIGATION_VARIANTS: &[NavigationVariant] = &[
    NavigationVariant {
        name: "Desktop Header",
        device: DeviceClass::Desktop,
        layout: NavLayout::DesktopHeader,
        usage: "Site responsivo, aplicações web",
        behavior: "Fixo no topo, links horizontais",
        constraints: "Fill container, height: 64-80px",
        figma: FigmaSpecs {
            width: "Fill container",
            height: "72px",
            padding: "16px 24px",
            constraints: "Left & Right",
            auto_layout: "Horizontal, Space between",
        },
        code: r##"<nav className="bg-white border-b border-neutral-200 px-6 py-4">
  <div className="flex items-center justify-between max-w-6xl mx-auto">
    <div className="flex items-center gap-8">
      <div className="font-bold text-xl text-brand-700">Logo</div>
      <div className="hidden md:flex items-center gap-6">
        <a href="#" className="text-neutral-700 hover:text-brand-600">Home</a>
        <a href="#" className="text-neutral-700 hover:text-brand-600">Produtos</a>
      </div>
    </div>
    <div className="flex items-center gap-4">
      <button className="px-4 py-2 text-brand-600">Login</button>
      <button className="px-4 py-2 bg-brand-500 text-white rounded-lg">Cadastrar</button>
    </div>
  </div>
</nav>"##,
    },
    NavigationVariant {
        name: "Mobile Header",
        device: DeviceClass::Mobile,
        layout: NavLayout::MobileHeader,
        usage: "Apps móveis, sites mobile-first",
        behavior: "Hamburger menu, overlay ou slide",
        constraints: "Fill width, height: 56-64px",
        figma: FigmaSpecs {
            width: "Fill container",
            height: "56px",
            padding: "12px 16px",
            constraints: "Left & Right, Top",
            auto_layout: "Horizontal, Space between",
        },
        code: r#"<nav className="bg-white border-b border-neutral-200 px-4 py-3">
  <div className="flex items-center justify-between">
    <button className="p-2 text-neutral-700">
      <Menu size={24} />
    </button>
    <div className="font-bold text-lg text-brand-700">Logo</div>
    <button className="p-2 text-neutral-700">
      <Search size={20} />
    </button>
  </div>
</nav>"#,
    },
    NavigationVariant {
        name: "Bottom Navigation",
        device: DeviceClass::Mobile,
        layout: NavLayout::BottomBar,
        usage: "Apps móveis, navegação principal",
        behavior: "Fixo na parte inferior, 3-5 itens",
        constraints: "Fill width, height: 64-80px, bottom safe area",
        figma: FigmaSpecs {
            width: "Fill container",
            height: "72px",
            padding: "8px 16px",
            constraints: "Left & Right, Bottom",
            auto_layout: "Horizontal, Space between",
        },
        code: r#"<nav className="bg-white border-t border-neutral-200 px-4 py-2">
  <div className="flex items-center justify-around">
    <button className="flex flex-col items-center py-2 text-brand-600">
      <Home size={20} />
      <span className="text-xs mt-1">Home</span>
    </button>
    <button className="flex flex-col items-center py-2 text-neutral-500">
      <Search size={20} />
      <span className="text-xs mt-1">Buscar</span>
    </button>
  </div>
</nav>"#,
    },
    NavigationVariant {
        name: "Sidebar Navigation",
        device: DeviceClass::Desktop,
        layout: NavLayout::Sidebar,
        usage: "Dashboards, aplicações complexas",
        behavior: "Lateral esquerda, colapsível",
        constraints: "Width: 240-280px, Fill height",
        figma: FigmaSpecs {
            width: "256px",
            height: "Fill container",
            padding: "16px",
            constraints: "Left, Top & Bottom",
            auto_layout: "Vertical, Top",
        },
        code: r##"<nav className="bg-white border-r border-neutral-200 w-64 h-full p-4">
  <div className="space-y-6">
    <div className="font-bold text-xl text-brand-700 px-3">Dashboard</div>
    <div className="space-y-1">
      <a href="#" className="flex items-center gap-3 px-3 py-2 text-brand-600 bg-brand-50 rounded-lg">
        <Home size={18} />
        <span>Overview</span>
      </a>
    </div>
  </div>
</nav>"##,
    },
];

/// Mobile-first practices.
pub const MOBILE_FIRST_PRACTICES: &[&str] = &[
    "Comece com navegação mobile e expanda",
    "Use bottom navigation para 3-5 seções principais",
    "Hamburger menu para navegação secundária",
    "Área de toque mínima de 44px",
];

/// Responsiveness practices.
pub const RESPONSIVE_PRACTICES: &[&str] = &[
    "Teste em diferentes tamanhos de tela",
    "Progressive enhancement para desktop",
    "Mantenha consistência entre dispositivos",
    "Considere orientação landscape/portrait",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_layout_has_exactly_one_variant() {
        for layout in [
            NavLayout::DesktopHeader,
            NavLayout::MobileHeader,
            NavLayout::BottomBar,
            NavLayout::Sidebar,
        ] {
            let count = NAVIGATION_VARIANTS
                .iter()
                .filter(|variant| variant.layout == layout)
                .count();
            assert_eq!(count, 1, "{layout:?}");
        }
    }

    #[test]
    fn snippets_are_nav_elements() {
        for variant in NAVIGATION_VARIANTS {
            assert!(variant.code.starts_with("<nav"), "{}", variant.name);
            assert!(variant.code.ends_with("</nav>"), "{}", variant.name);
        }
    }
}
