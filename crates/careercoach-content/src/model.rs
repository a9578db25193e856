//! Record types for the static site content.
//!
//! # Design
//! - Categories are closed enumerations so filter controls can only offer
//!   values that exist.
//! - `as_str` doubles as the translation key segment for category labels.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Industry an expert coaches in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpertCategory {
    /// Software, product and data roles.
    Tech,
    /// Banking, investment and planning.
    Finance,
    /// Brand, growth and creative.
    Marketing,
    /// Executive and people leadership.
    Leadership,
    /// Management consulting.
    Consulting,
}

impl ExpertCategory {
    /// All categories in filter-bar order.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::Tech,
            Self::Finance,
            Self::Marketing,
            Self::Leadership,
            Self::Consulting,
        ]
    }

    /// Stable identifier, also used as the translation key segment.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tech => "tech",
            Self::Finance => "finance",
            Self::Marketing => "marketing",
            Self::Leadership => "leadership",
            Self::Consulting => "consulting",
        }
    }

    /// English label used when no translation is available.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Tech => "Technology",
            Self::Finance => "Finance",
            Self::Marketing => "Marketing",
            Self::Leadership => "Leadership",
            Self::Consulting => "Consulting",
        }
    }
}

/// Blog post section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BlogCategory {
    /// Practical career advice.
    CareerTips,
    /// Hiring market and industry updates.
    IndustryNews,
    /// Conversations with coaches.
    Interviews,
    /// Tools and reading lists.
    Resources,
}

impl BlogCategory {
    /// All categories in filter-bar order.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [
            Self::CareerTips,
            Self::IndustryNews,
            Self::Interviews,
            Self::Resources,
        ]
    }

    /// Stable identifier, also used as the translation key segment.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CareerTips => "careerTips",
            Self::IndustryNews => "industryNews",
            Self::Interviews => "interviews",
            Self::Resources => "resources",
        }
    }

    /// English label used when no translation is available.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::CareerTips => "Career Tips",
            Self::IndustryNews => "Industry News",
            Self::Interviews => "Interviews",
            Self::Resources => "Resources",
        }
    }
}

/// FAQ grouping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaqCategory {
    /// Platform overview questions.
    General,
    /// Scheduling questions.
    Booking,
    /// Pricing and refunds.
    Payment,
    /// Video and tooling questions.
    Technical,
}

impl FaqCategory {
    /// All categories in tab order.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::General, Self::Booking, Self::Payment, Self::Technical]
    }

    /// Stable identifier, also used as the translation key segment.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Booking => "booking",
            Self::Payment => "payment",
            Self::Technical => "technical",
        }
    }

    /// English label used when no translation is available.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Booking => "Booking",
            Self::Payment => "Payment",
            Self::Technical => "Technical",
        }
    }
}

/// Coach profile card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Expert {
    /// Stable identifier.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Job title.
    pub title: String,
    /// Current employer.
    pub company: String,
    /// Average rating out of 5.
    pub rating: f32,
    /// Number of reviews behind the rating.
    pub review_count: u32,
    /// Years of industry experience.
    pub experience_years: u8,
    /// City and region.
    pub location: String,
    /// Coaching specialties, most relevant first.
    pub specialties: Vec<String>,
    /// Hourly rate in USD.
    pub hourly_rate: u32,
    /// Human-readable next open slot.
    pub next_available: String,
    /// Filter category.
    pub category: ExpertCategory,
    /// Whether the card carries the featured badge.
    pub featured: bool,
    /// Spoken languages.
    pub languages: Vec<String>,
}

impl Expert {
    /// Avatar initial.
    #[must_use]
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }

    /// Specialties to show on a card plus the count left off.
    #[must_use]
    pub fn visible_specialties(&self, max: usize) -> (&[String], usize) {
        let shown = self.specialties.len().min(max);
        (&self.specialties[..shown], self.specialties.len() - shown)
    }
}

/// Outcome metrics quoted in a testimonial.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestimonialResults {
    /// Salary increase in percent.
    pub salary_increase_pct: u8,
    /// Human-readable time until promotion.
    pub time_to_promotion: String,
    /// Self-reported confidence in percent.
    pub confidence_level_pct: u8,
}

/// Client success story.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    /// Stable identifier.
    pub id: u32,
    /// Client name.
    pub name: String,
    /// Client role after coaching.
    pub role: String,
    /// Client employer after coaching.
    pub company: String,
    /// Star rating out of 5.
    pub rating: u8,
    /// Quote body.
    pub quote: String,
    /// Outcome metrics.
    pub results: TestimonialResults,
    /// Situation before coaching.
    pub before: String,
    /// Situation after coaching.
    pub after: String,
}

impl Testimonial {
    /// Avatar initial.
    #[must_use]
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}

/// Blog article stub.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    /// Stable identifier.
    pub id: u32,
    /// Headline.
    pub title: String,
    /// Teaser paragraph.
    pub excerpt: String,
    /// Author name.
    pub author: String,
    /// Publication date.
    pub date: NaiveDate,
    /// Estimated reading time.
    pub read_time_minutes: u16,
    /// Filter category.
    pub category: BlogCategory,
    /// Whether the post appears in the featured strip.
    pub featured: bool,
}

impl BlogPost {
    /// Publication date formatted for cards, e.g. `Jan 15, 2024`.
    #[must_use]
    pub fn display_date(&self) -> String {
        self.date.format("%b %-d, %Y").to_string()
    }
}

/// Frequently asked question.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    /// Stable identifier.
    pub id: u32,
    /// Tab the entry is listed under.
    pub category: FaqCategory,
    /// Question text.
    pub question: String,
    /// Answer text.
    pub answer: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expert_with(specialties: &[&str]) -> Expert {
        Expert {
            id: 1,
            name: "Zoe".into(),
            title: String::new(),
            company: String::new(),
            rating: 4.5,
            review_count: 0,
            experience_years: 1,
            location: String::new(),
            specialties: specialties.iter().map(ToString::to_string).collect(),
            hourly_rate: 0,
            next_available: String::new(),
            category: ExpertCategory::Tech,
            featured: false,
            languages: vec![],
        }
    }

    #[test]
    fn specialties_are_truncated_with_remainder() {
        let expert = expert_with(&["a", "b", "c", "d"]);
        let (shown, hidden) = expert.visible_specialties(2);
        assert_eq!(shown, ["a".to_string(), "b".to_string()]);
        assert_eq!(hidden, 2);

        let short = expert_with(&["a"]);
        assert_eq!(short.visible_specialties(2).1, 0);
        assert_eq!(short.initial(), 'Z');
    }

    #[test]
    fn category_ids_match_serde_names() {
        for category in BlogCategory::all() {
            let encoded = serde_json::to_string(&category).expect("encode");
            assert_eq!(encoded, format!("\"{}\"", category.as_str()));
        }
        for category in ExpertCategory::all() {
            let encoded = serde_json::to_string(&category).expect("encode");
            assert_eq!(encoded, format!("\"{}\"", category.as_str()));
        }
        for category in FaqCategory::all() {
            let encoded = serde_json::to_string(&category).expect("encode");
            assert_eq!(encoded, format!("\"{}\"", category.as_str()));
        }
    }

    #[test]
    fn blog_dates_render_short_month() {
        let post = BlogPost {
            id: 1,
            title: String::new(),
            excerpt: String::new(),
            author: String::new(),
            date: NaiveDate::from_ymd_opt(2024, 1, 5).expect("date"),
            read_time_minutes: 4,
            category: BlogCategory::Resources,
            featured: false,
        };
        assert_eq!(post.display_date(), "Jan 5, 2024");
    }
}
