//! Core, DOM-free primitives and helpers for the docs site.
pub mod accordion;
pub mod config;
pub mod copy;
pub mod theme;
pub mod toast;
pub mod ui;
pub mod view;
