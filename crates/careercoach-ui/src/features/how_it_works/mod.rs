//! How-it-works page.

#[cfg(target_arch = "wasm32")]
pub mod view;
