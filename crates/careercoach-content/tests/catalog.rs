use careercoach_content::{BlogCategory, ExpertCategory, FaqCategory, catalog};
use chrono::NaiveDate;

#[test]
fn every_expert_category_has_a_coach() {
    let experts = &catalog().experts;
    for category in ExpertCategory::all() {
        assert!(
            experts.iter().any(|e| e.category == category),
            "no expert in {}",
            category.as_str()
        );
    }
    let tech: Vec<u32> = experts
        .iter()
        .filter(|e| e.category == ExpertCategory::Tech)
        .map(|e| e.id)
        .collect();
    assert_eq!(tech, vec![1, 4, 7]);
}

#[test]
fn faqs_cover_each_tab_evenly() {
    let faqs = &catalog().faqs;
    assert_eq!(faqs.len(), 12);
    for category in FaqCategory::all() {
        assert_eq!(faqs.iter().filter(|f| f.category == category).count(), 3);
    }
}

#[test]
fn blog_posts_are_newest_first() {
    let posts = &catalog().blog_posts;
    assert!(posts.windows(2).all(|pair| pair[0].date >= pair[1].date));
    assert_eq!(
        posts[0].date,
        NaiveDate::from_ymd_opt(2024, 1, 15).expect("date")
    );
    assert_eq!(posts[0].display_date(), "Jan 15, 2024");
    assert_eq!(
        posts
            .iter()
            .filter(|p| p.category == BlogCategory::CareerTips)
            .count(),
        3
    );
}

#[test]
fn testimonials_carry_outcome_metrics() {
    for testimonial in &catalog().testimonials {
        assert!(testimonial.rating <= 5);
        assert!(testimonial.results.confidence_level_pct <= 100);
        assert!(!testimonial.quote.is_empty());
    }
}
