//! Catalog panels and special views, one slice per section.
//!
//! # Design
//! - Each slice keeps DOM-free helpers in `mod.rs` and its Yew view in `view.rs`.
//! - Panels read catalog tables directly; only the copy service and open sets
//!   are panel-local state.

pub mod colors;
pub mod components;
pub mod documentation;
pub mod forms;
pub mod grid;
pub mod guidelines;
pub mod icons;
pub mod naming;
pub mod navigation;
pub mod shadows;
pub mod typography;

#[cfg(target_arch = "wasm32")]
use becreative_catalog::SectionId;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;

#[cfg(target_arch = "wasm32")]
use crate::core::view::{ActiveView, SpecialView};

/// Main-area content for the active view.
#[cfg(target_arch = "wasm32")]
pub(crate) fn render_active(active: ActiveView) -> Html {
    match active {
        ActiveView::Special(SpecialView::Guidelines) => {
            html! { <guidelines::view::GuidelinesView /> }
        }
        ActiveView::Special(SpecialView::Documentation) => {
            html! { <documentation::view::DocumentationView /> }
        }
        ActiveView::Section(section) => render_section(section),
    }
}

#[cfg(target_arch = "wasm32")]
fn render_section(section: SectionId) -> Html {
    match section {
        SectionId::Colors => html! { <colors::view::ColorTokensPanel /> },
        SectionId::Typography => html! { <typography::view::TypographyPanel /> },
        SectionId::Components => html! { <components::view::ComponentLibraryPanel /> },
        SectionId::Shadows => html! { <shadows::view::ShadowPanel /> },
        SectionId::Icons => html! { <icons::view::IconLibraryPanel /> },
        SectionId::Grid => html! { <grid::view::GridPanel /> },
        SectionId::Navigation => html! { <navigation::view::NavigationPanel /> },
        SectionId::Forms => html! { <forms::view::FormPanel /> },
        SectionId::Naming => html! { <naming::view::NamingPanel /> },
    }
}

/// Heading block shared by every panel.
#[cfg(target_arch = "wasm32")]
pub(crate) fn panel_head(title: &'static str, subtitle: &'static str) -> Html {
    html! {
        <header class="bc-panel-head">
            <h2>{title}</h2>
            <p class="bc-muted">{subtitle}</p>
        </header>
    }
}

/// Plain bulleted list.
#[cfg(target_arch = "wasm32")]
pub(crate) fn bullet_list(items: &'static [&'static str]) -> Html {
    html! {
        <ul class="bc-list">
            {for items.iter().map(|item| html! { <li>{*item}</li> })}
        </ul>
    }
}
