//! Compiled-in content catalog.
//!
//! # Design
//! - Each dataset is a JSON array embedded with `include_str!` and decoded
//!   once on first access.
//! - Decode failures are logged and replaced with an empty catalog so a bad
//!   dataset degrades to empty states instead of a blank page.

use std::collections::HashSet;
use std::sync::LazyLock;

use serde::de::DeserializeOwned;

use crate::error::{ContentError, ContentResult};
use crate::model::{BlogPost, Expert, FaqEntry, Testimonial};

const EXPERTS_JSON: &str = include_str!("../data/experts.json");
const TESTIMONIALS_JSON: &str = include_str!("../data/testimonials.json");
const BLOG_POSTS_JSON: &str = include_str!("../data/blog_posts.json");
const FAQS_JSON: &str = include_str!("../data/faqs.json");

static CATALOG: LazyLock<Catalog> = LazyLock::new(|| {
    Catalog::load().unwrap_or_else(|err| {
        tracing::error!(error = %err, "content catalog rejected; rendering empty lists");
        Catalog::default()
    })
});

/// All site content in source order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    /// Coach profiles.
    pub experts: Vec<Expert>,
    /// Client success stories.
    pub testimonials: Vec<Testimonial>,
    /// Blog articles.
    pub blog_posts: Vec<BlogPost>,
    /// Frequently asked questions.
    pub faqs: Vec<FaqEntry>,
}

impl Catalog {
    /// Decode every compiled-in dataset.
    ///
    /// # Errors
    /// Returns [`ContentError::Decode`] for malformed JSON and
    /// [`ContentError::DuplicateId`] when a dataset repeats an id.
    pub fn load() -> ContentResult<Self> {
        let catalog = Self {
            experts: decode("experts", EXPERTS_JSON, |e: &Expert| e.id)?,
            testimonials: decode("testimonials", TESTIMONIALS_JSON, |t: &Testimonial| t.id)?,
            blog_posts: decode("blog_posts", BLOG_POSTS_JSON, |p: &BlogPost| p.id)?,
            faqs: decode("faqs", FAQS_JSON, |f: &FaqEntry| f.id)?,
        };
        tracing::debug!(
            experts = catalog.experts.len(),
            testimonials = catalog.testimonials.len(),
            blog_posts = catalog.blog_posts.len(),
            faqs = catalog.faqs.len(),
            "content catalog decoded"
        );
        Ok(catalog)
    }

    /// Posts flagged for the featured strip.
    pub fn featured_posts(&self) -> impl Iterator<Item = &BlogPost> {
        self.blog_posts.iter().filter(|post| post.featured)
    }
}

/// Shared catalog decoded on first use.
#[must_use]
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

/// Decode one dataset and reject repeated ids.
///
/// # Errors
/// See [`Catalog::load`].
pub fn decode<T, F>(dataset: &'static str, raw: &str, id_of: F) -> ContentResult<Vec<T>>
where
    T: DeserializeOwned,
    F: Fn(&T) -> u32,
{
    let records: Vec<T> =
        serde_json::from_str(raw).map_err(|source| ContentError::Decode { dataset, source })?;
    let mut seen = HashSet::with_capacity(records.len());
    if let Some(id) = records.iter().map(&id_of).find(|id| !seen.insert(*id)) {
        return Err(ContentError::DuplicateId { dataset, id });
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compiled_datasets_decode() {
        let catalog = Catalog::load().expect("datasets should decode");
        assert!(!catalog.experts.is_empty());
        assert_eq!(catalog.testimonials.len(), 4);
        assert_eq!(catalog.featured_posts().count(), 2);
    }

    #[test]
    fn repeated_ids_are_rejected() {
        let raw = r#"[{"id":1,"category":"general","question":"a","answer":"b"},
                      {"id":1,"category":"booking","question":"c","answer":"d"}]"#;
        let err = decode("faqs", raw, |f: &FaqEntry| f.id).expect_err("duplicate");
        assert!(matches!(
            err,
            ContentError::DuplicateId {
                dataset: "faqs",
                id: 1
            }
        ));
    }

    #[test]
    fn malformed_dataset_names_itself() {
        let err = decode("faqs", "[{", |f: &FaqEntry| f.id).expect_err("malformed");
        assert_eq!(err.to_string(), "failed to decode faqs dataset");
    }

    #[test]
    fn shared_catalog_matches_fresh_load() {
        assert_eq!(catalog(), &Catalog::load().expect("load"));
    }
}
