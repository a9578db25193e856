//! Case-insensitive substring search over designated text fields.

use crate::core::logic::filter::{Categorized, CategoryFilter};
use careercoach_content::{BlogPost, FaqEntry};

/// Records with default searchable text fields.
pub trait Searchable {
    /// Fields the search term is matched against.
    fn search_fields(&self) -> Vec<&str>;
}

impl Searchable for FaqEntry {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.question.as_str(), self.answer.as_str()]
    }
}

impl Searchable for BlogPost {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.excerpt.as_str()]
    }
}

/// Records where any field returned by `fields` contains `term`.
///
/// Both sides are lowercased; whitespace in the term is significant. An empty
/// term matches every record.
#[must_use]
pub fn search<'a, T, F, I>(items: &'a [T], term: &str, fields: F) -> Vec<&'a T>
where
    F: Fn(&'a T) -> I,
    I: IntoIterator<Item = &'a str>,
{
    let needle = term.to_lowercase();
    items
        .iter()
        .filter(|item| {
            needle.is_empty()
                || fields(*item)
                    .into_iter()
                    .any(|field| field.to_lowercase().contains(&needle))
        })
        .collect()
}

/// [`search`] over each record's [`Searchable::search_fields`].
#[must_use]
pub fn search_all<'a, T: Searchable>(items: &'a [T], term: &str) -> Vec<&'a T> {
    search(items, term, T::search_fields)
}

/// Records passing both the category filter and the search term.
#[must_use]
pub fn filter_and_search<'a, T>(
    items: &'a [T],
    filter: &CategoryFilter<T::Category>,
    term: &str,
) -> Vec<&'a T>
where
    T: Categorized + Searchable,
{
    search_all(items, term)
        .into_iter()
        .filter(|item| filter.matches(item.category()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use careercoach_content::{BlogCategory, FaqCategory};
    use careercoach_test_support::fixtures::{faq, post};

    #[test]
    fn empty_term_returns_everything_in_order() {
        let posts = vec![
            post(1, BlogCategory::CareerTips, "a", "b"),
            post(2, BlogCategory::Resources, "c", "d"),
        ];
        let ids: Vec<u32> = search_all(&posts, "").iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn whitespace_in_the_term_is_matched_literally() {
        let posts = vec![
            post(1, BlogCategory::Resources, "Database basics", "Indexes first"),
            post(2, BlogCategory::Resources, "Big data tools", "Spark and friends"),
        ];
        let ids: Vec<u32> = search_all(&posts, "data ").iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2]);
        assert!(search_all(&posts, "   ").is_empty());
    }

    #[test]
    fn matching_ignores_case() {
        let posts = vec![post(1, BlogCategory::IndustryNews, "technology trends", "")];
        assert_eq!(search_all(&posts, "TECH").len(), 1);
        assert_eq!(search_all(&posts, "Trends").len(), 1);
        assert!(search_all(&posts, "finance").is_empty());
    }

    #[test]
    fn any_designated_field_can_match() {
        let posts = vec![
            post(1, BlogCategory::CareerTips, "Remote work", "Stay visible"),
            post(2, BlogCategory::CareerTips, "Negotiation", "Ask for a raise"),
        ];
        let by_excerpt = search_all(&posts, "raise");
        assert_eq!(by_excerpt.len(), 1);
        assert_eq!(by_excerpt[0].id, 2);

        let title_only = search(&posts, "raise", |p| [p.title.as_str()]);
        assert!(title_only.is_empty());
    }

    #[test]
    fn category_and_term_combine() {
        let faqs = vec![
            faq(1, FaqCategory::Payment, "Do you offer refunds?", "Within 24 hours."),
            faq(2, FaqCategory::Payment, "Which cards?", "Visa and Mastercard."),
            faq(3, FaqCategory::Payment, "Invoices?", "A refund note is issued on request."),
            faq(4, FaqCategory::Payment, "Currency?", "We bill in USD."),
            faq(5, FaqCategory::Payment, "Discounts?", "Bundles save 15%."),
            faq(6, FaqCategory::Booking, "Refund after cancel?", "Yes."),
        ];
        let hits = filter_and_search(&faqs, &CategoryFilter::Only(FaqCategory::Payment), "refund");
        let ids: Vec<u32> = hits.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(hits.iter().all(|f| {
            let text = format!("{} {}", f.question, f.answer).to_lowercase();
            text.contains("refund")
        }));

        let everywhere = filter_and_search(&faqs, &CategoryFilter::All, "refund");
        assert_eq!(everywhere.len(), 3);
    }
}
