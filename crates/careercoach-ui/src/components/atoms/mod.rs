//! Shared UI atoms used across the shell and views.

pub(crate) mod category_chips;
pub(crate) mod empty_state;
pub(crate) mod page_dots;
pub(crate) mod rating;
pub(crate) mod search_input;

pub(crate) use category_chips::{CategoryChips, ChipOption};
pub(crate) use empty_state::EmptyState;
pub(crate) use page_dots::PageDots;
pub(crate) use rating::Rating;
pub(crate) use search_input::SearchInput;
