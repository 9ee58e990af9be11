//! Shadow scale panel.
//!
//! # Design
//! - Previews apply the token value inline so the scale renders without
//!   extra stylesheet rules.

#[cfg(target_arch = "wasm32")]
pub mod view;
