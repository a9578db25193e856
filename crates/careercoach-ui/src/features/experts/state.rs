//! Expert list view state.
//!
//! # Design
//! - Only the selection and page index are stored; the visible page is
//!   recomputed from the catalog on every render.
//! - Changing the category always returns to the first page.

use crate::core::logic::{
    CategoryFilter, Page, filter_by_category, next_page, paginate, prev_page,
};
use careercoach_content::{Expert, ExpertCategory};

/// Specialties shown on a card before the "+N more" counter.
pub const VISIBLE_SPECIALTIES: usize = 2;

/// Filter and page selection for the experts section.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExpertsState {
    /// Active category chip.
    pub category: CategoryFilter<ExpertCategory>,
    /// Requested page index; normalized when a page is computed.
    pub page: usize,
}

impl ExpertsState {
    /// Select a category and reset to the first page.
    #[must_use]
    pub const fn with_category(self, category: CategoryFilter<ExpertCategory>) -> Self {
        Self { category, page: 0 }
    }

    /// Move to the next page, wrapping.
    #[must_use]
    pub const fn next(self, total_pages: usize) -> Self {
        Self {
            page: next_page(self.page, total_pages),
            ..self
        }
    }

    /// Move to the previous page, wrapping.
    #[must_use]
    pub const fn prev(self, total_pages: usize) -> Self {
        Self {
            page: prev_page(self.page, total_pages),
            ..self
        }
    }

    /// Jump directly to `page`.
    #[must_use]
    pub const fn jump(self, page: usize) -> Self {
        Self { page, ..self }
    }

    /// Experts passing the active category.
    #[must_use]
    pub fn filtered<'a>(&self, experts: &'a [Expert]) -> Vec<&'a Expert> {
        filter_by_category(experts, &self.category)
    }

    /// Current page of an already filtered list.
    #[must_use]
    pub fn page_of<'a, 'b>(
        &self,
        filtered: &'b [&'a Expert],
        page_size: usize,
    ) -> Page<'b, &'a Expert> {
        paginate(filtered, page_size, self.page)
    }
}
