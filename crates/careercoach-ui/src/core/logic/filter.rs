//! Category filtering with a wildcard.

use careercoach_content::{BlogCategory, BlogPost, Expert, ExpertCategory, FaqCategory, FaqEntry};

/// Records that belong to exactly one category.
pub trait Categorized {
    /// Category enumeration for the record type.
    type Category: Copy + Eq;

    /// Category of this record.
    fn category(&self) -> Self::Category;
}

impl Categorized for Expert {
    type Category = ExpertCategory;

    fn category(&self) -> ExpertCategory {
        self.category
    }
}

impl Categorized for BlogPost {
    type Category = BlogCategory;

    fn category(&self) -> BlogCategory {
        self.category
    }
}

impl Categorized for FaqEntry {
    type Category = FaqCategory;

    fn category(&self) -> FaqCategory {
        self.category
    }
}

/// Active category selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CategoryFilter<C> {
    /// Wildcard; every record passes.
    All,
    /// Exact match on one category.
    Only(C),
}

impl<C> Default for CategoryFilter<C> {
    fn default() -> Self {
        Self::All
    }
}

impl<C: Copy + Eq> CategoryFilter<C> {
    /// Whether a record in `category` passes the filter.
    #[must_use]
    pub fn matches(&self, category: C) -> bool {
        match self {
            Self::All => true,
            Self::Only(active) => *active == category,
        }
    }

    /// Selected category, or `None` for the wildcard.
    #[must_use]
    pub const fn category(&self) -> Option<C> {
        match self {
            Self::All => None,
            Self::Only(category) => Some(*category),
        }
    }
}

/// Records passing `filter`, in source order.
#[must_use]
pub fn filter_by_category<'a, T: Categorized>(
    items: &'a [T],
    filter: &CategoryFilter<T::Category>,
) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| filter.matches(item.category()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use careercoach_test_support::fixtures::{expert, experts};

    #[test]
    fn wildcard_passes_everything_in_order() {
        let list = experts(&[
            ExpertCategory::Tech,
            ExpertCategory::Finance,
            ExpertCategory::Tech,
        ]);
        let ids: Vec<u32> = filter_by_category(&list, &CategoryFilter::All)
            .iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn exact_match_keeps_source_order() {
        let list = experts(&[
            ExpertCategory::Tech,
            ExpertCategory::Finance,
            ExpertCategory::Tech,
        ]);
        let filtered = filter_by_category(&list, &CategoryFilter::Only(ExpertCategory::Tech));
        let ids: Vec<u32> = filtered.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(
            filtered
                .iter()
                .all(|e| e.category == ExpertCategory::Tech)
        );
    }

    #[test]
    fn absent_category_yields_empty() {
        let list = vec![
            expert(1, ExpertCategory::Tech),
            expert(2, ExpertCategory::Finance),
        ];
        assert!(filter_by_category(&list, &CategoryFilter::Only(ExpertCategory::Consulting)).is_empty());
    }

    #[test]
    fn filter_reports_its_category() {
        assert_eq!(CategoryFilter::<FaqCategory>::All.category(), None);
        assert_eq!(
            CategoryFilter::Only(FaqCategory::Booking).category(),
            Some(FaqCategory::Booking)
        );
        assert!(CategoryFilter::Only(FaqCategory::Booking).matches(FaqCategory::Booking));
        assert!(!CategoryFilter::Only(FaqCategory::Booking).matches(FaqCategory::General));
    }
}
