//! Core, DOM-free primitives and helpers for the Web UI.
pub mod logic;
pub mod nav;
pub mod rotation;
pub mod site;
pub mod store;
