//! Blog page state.

use crate::core::logic::{CategoryFilter, filter_and_search};
use careercoach_content::{BlogCategory, BlogPost};

/// Category chip and search term for the post grid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BlogState {
    /// Active category chip.
    pub category: CategoryFilter<BlogCategory>,
    /// Debounced search input.
    pub term: String,
}

impl BlogState {
    /// Posts passing both the category and the search term.
    #[must_use]
    pub fn visible<'a>(&self, posts: &'a [BlogPost]) -> Vec<&'a BlogPost> {
        filter_and_search(posts, &self.category, &self.term)
    }

    /// Whether the featured strip should show; hidden while narrowing results.
    #[must_use]
    pub fn show_featured(&self) -> bool {
        self.category == CategoryFilter::All && self.term.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use careercoach_test_support::fixtures::post;

    fn posts() -> Vec<BlogPost> {
        vec![
            post(1, BlogCategory::CareerTips, "Five essential skills", "Future-proof your career"),
            post(2, BlogCategory::IndustryNews, "AI in hiring", "Recruitment is changing"),
            post(3, BlogCategory::CareerTips, "Engineer to manager", "Leadership roadmap"),
        ]
    }

    #[test]
    fn category_and_term_narrow_together() {
        let all = posts();
        let state = BlogState {
            category: CategoryFilter::Only(BlogCategory::CareerTips),
            term: "CAREER".to_string(),
        };
        let ids: Vec<u32> = state.visible(&all).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1]);
        assert!(!state.show_featured());
    }

    #[test]
    fn default_state_shows_everything() {
        let all = posts();
        let state = BlogState::default();
        assert_eq!(state.visible(&all).len(), 3);
        assert!(state.show_featured());
    }

    #[test]
    fn unmatched_term_is_empty() {
        let all = posts();
        let state = BlogState {
            term: "quantum".to_string(),
            ..BlogState::default()
        };
        assert!(state.visible(&all).is_empty());
    }
}
