//! Component library panel.

#[cfg(target_arch = "wasm32")]
pub mod view;
