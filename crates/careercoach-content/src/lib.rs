#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Static site content for CareerCoach.
//!
//! Layout: `model.rs` (record types and category enumerations), `catalog.rs`
//! (compiled-in JSON datasets decoded into a [`Catalog`]), `error.rs`
//! ([`ContentError`]).

pub mod catalog;
pub mod error;
pub mod model;

pub use catalog::{Catalog, catalog};
pub use error::{ContentError, ContentResult};
pub use model::{
    BlogCategory, BlogPost, Expert, ExpertCategory, FaqCategory, FaqEntry, Testimonial,
    TestimonialResults,
};
