//! FAQ page state.
//!
//! # Design
//! - Tabs have no wildcard; the first tab is selected on load.
//! - At most one entry is open; opening another closes the previous one.

use crate::core::logic::{CategoryFilter, filter_and_search};
use careercoach_content::{FaqCategory, FaqEntry};

/// Active tab, search term and open entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FaqState {
    /// Selected tab.
    pub category: FaqCategory,
    /// Debounced search input.
    pub term: String,
    /// Id of the expanded entry.
    pub open: Option<u32>,
}

impl Default for FaqState {
    fn default() -> Self {
        Self {
            category: FaqCategory::General,
            term: String::new(),
            open: None,
        }
    }
}

impl FaqState {
    /// Toggle entry `id`: open it, or close it when it is already open.
    pub fn toggle(&mut self, id: u32) {
        self.open = if self.open == Some(id) { None } else { Some(id) };
    }

    /// Switch tab and collapse any open entry.
    pub fn select_category(&mut self, category: FaqCategory) {
        self.category = category;
        self.open = None;
    }

    /// Replace the search term.
    pub fn set_term(&mut self, term: String) {
        self.term = term;
    }

    /// Whether entry `id` is expanded.
    #[must_use]
    pub fn is_open(&self, id: u32) -> bool {
        self.open == Some(id)
    }

    /// Entries in the active tab matching the search term.
    #[must_use]
    pub fn visible<'a>(&self, faqs: &'a [FaqEntry]) -> Vec<&'a FaqEntry> {
        filter_and_search(faqs, &CategoryFilter::Only(self.category), &self.term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use careercoach_test_support::fixtures::faq;

    #[test]
    fn toggling_the_open_entry_closes_it() {
        let mut state = FaqState::default();
        state.toggle(3);
        assert!(state.is_open(3));
        state.toggle(4);
        assert!(state.is_open(4));
        assert!(!state.is_open(3));
        state.toggle(4);
        assert_eq!(state.open, None);
    }

    #[test]
    fn tab_switch_collapses_entries() {
        let mut state = FaqState::default();
        state.toggle(1);
        state.select_category(FaqCategory::Technical);
        assert_eq!(state.open, None);
        assert_eq!(state.category, FaqCategory::Technical);
    }

    #[test]
    fn search_is_scoped_to_the_tab() {
        let faqs = vec![
            faq(1, FaqCategory::General, "What is this?", "A coaching platform."),
            faq(2, FaqCategory::Payment, "Refunds?", "Full refund within 24 hours."),
            faq(3, FaqCategory::Technical, "Issues?", "We refund lost time."),
        ];
        let mut state = FaqState::default();
        assert_eq!(state.visible(&faqs).len(), 1);
        state.set_term("refund".to_string());
        assert!(state.visible(&faqs).is_empty());
        state.select_category(FaqCategory::Payment);
        let ids: Vec<u32> = state.visible(&faqs).iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![2]);
    }
}
