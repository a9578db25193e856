//! Minimal record builders.
//!
//! Every builder fills the fields a test does not care about with stable
//! placeholder values so assertions only depend on the arguments.

use careercoach_content::{
    BlogCategory, BlogPost, Expert, ExpertCategory, FaqCategory, FaqEntry, Testimonial,
    TestimonialResults,
};
use chrono::NaiveDate;

/// Expert with the given id and category.
#[must_use]
pub fn expert(id: u32, category: ExpertCategory) -> Expert {
    Expert {
        id,
        name: format!("Expert {id}"),
        title: "Coach".to_string(),
        company: "Acme".to_string(),
        rating: 4.8,
        review_count: 10,
        experience_years: 8,
        location: "Remote".to_string(),
        specialties: vec!["Interviews".to_string(), "Negotiation".to_string()],
        hourly_rate: 100,
        next_available: "Tomorrow".to_string(),
        category,
        featured: false,
        languages: vec!["English".to_string()],
    }
}

/// One expert per category, ids starting at 1.
#[must_use]
pub fn experts(categories: &[ExpertCategory]) -> Vec<Expert> {
    categories
        .iter()
        .zip(1..)
        .map(|(category, id)| expert(id, *category))
        .collect()
}

/// FAQ entry with explicit question and answer text.
#[must_use]
pub fn faq(id: u32, category: FaqCategory, question: &str, answer: &str) -> FaqEntry {
    FaqEntry {
        id,
        category,
        question: question.to_string(),
        answer: answer.to_string(),
    }
}

/// Blog post with explicit title and excerpt.
#[must_use]
pub fn post(id: u32, category: BlogCategory, title: &str, excerpt: &str) -> BlogPost {
    BlogPost {
        id,
        title: title.to_string(),
        excerpt: excerpt.to_string(),
        author: "Staff".to_string(),
        date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default(),
        read_time_minutes: 5,
        category,
        featured: false,
    }
}

/// `count` testimonials with ids starting at 1.
#[must_use]
pub fn testimonials(count: u32) -> Vec<Testimonial> {
    (1..=count)
        .map(|id| Testimonial {
            id,
            name: format!("Client {id}"),
            role: "Engineer".to_string(),
            company: "Acme".to_string(),
            rating: 5,
            quote: format!("Quote {id}"),
            results: TestimonialResults {
                salary_increase_pct: 20,
                time_to_promotion: "6 months".to_string(),
                confidence_level_pct: 90,
            },
            before: "Before".to_string(),
            after: "After".to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn experts_number_from_one_in_order() {
        let built = experts(&[ExpertCategory::Tech, ExpertCategory::Finance]);
        assert_eq!(built.len(), 2);
        assert_eq!(built[0].id, 1);
        assert_eq!(built[1].category, ExpertCategory::Finance);
    }

    #[test]
    fn testimonials_have_distinct_ids() {
        let built = testimonials(4);
        let ids: Vec<u32> = built.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn post_keeps_supplied_text() {
        let built = post(7, BlogCategory::Interviews, "Title", "Excerpt");
        assert_eq!(built.title, "Title");
        assert_eq!(built.excerpt, "Excerpt");
        assert_eq!(built.date.to_string(), "2024-01-01");
    }
}
