//! Page and section features. Each slice keeps its DOM-free state beside a
//! wasm-only view.

pub mod blog;
pub mod careers;
pub mod experts;
pub mod faq;
pub mod home;
pub mod how_it_works;
pub mod testimonials;
