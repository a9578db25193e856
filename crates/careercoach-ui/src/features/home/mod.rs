//! Landing page sections.
//!
//! # Design
//! - Copy comes from the translation bundle as typed records.
//! - Sections are plain function components composed by the page.

#[cfg(target_arch = "wasm32")]
pub mod view;
