#![forbid(unsafe_code)]
#![warn(
    unused,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
//! Bê Creative design-system docs site.
//! This crate holds the Yew front end plus the DOM-free state it drives.

pub mod core;
pub mod features;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;

#[cfg(test)]
mod tests {
    use becreative_catalog::SectionId;

    use crate::core::config::UiConfig;
    use crate::core::view::{ActiveView, SpecialView, ViewAction, ViewState};

    #[test]
    fn catalog_ships_valid_tables() {
        assert_eq!(becreative_catalog::validate(), Ok(()));
    }

    #[test]
    fn configured_start_section_survives_a_special_view_round_trip() {
        let (config, err) = UiConfig::load_or_default(Some(r#"{"initial_section":"naming"}"#));
        assert!(err.is_none());
        let state = ViewState::from_config(&config)
            .apply(ViewAction::ToggleSpecial(SpecialView::Documentation))
            .apply(ViewAction::ToggleSpecial(SpecialView::Documentation));
        assert_eq!(state.active(), ActiveView::Section(SectionId::Naming));
    }
}
