//! Blog page: featured strip, search and category chips.

pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
