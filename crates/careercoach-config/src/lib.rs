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

//! Compiled-in site configuration for the CareerCoach front-end.
//!
//! Layout: `model.rs` (typed [`SiteConfig`] document), `defaults.rs` (fallback
//! values for absent keys), `validate.rs` (field checks), `error.rs`
//! ([`ConfigError`]).

pub mod defaults;
pub mod error;
pub mod model;
pub mod validate;

pub use error::{ConfigError, ConfigResult};
pub use model::SiteConfig;
