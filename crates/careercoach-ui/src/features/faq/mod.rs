//! FAQ page: tabbed categories, search and a single-open accordion.

pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
