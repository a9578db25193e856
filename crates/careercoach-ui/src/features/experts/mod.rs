//! Expert coaches section: category filter plus paginated cards.

pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
