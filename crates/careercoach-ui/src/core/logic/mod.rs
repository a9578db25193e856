//! Pure list helpers extracted from components for non-wasm testing.
//!
//! # Design
//! - Helpers borrow from the caller's slice and never clone records.
//! - Source order is preserved by every filter.

pub mod filter;
pub mod paginate;
pub mod search;

pub use filter::{Categorized, CategoryFilter, filter_by_category};
pub use paginate::{Page, next_page, paginate, prev_page, total_pages};
pub use search::{Searchable, filter_and_search, search, search_all};
