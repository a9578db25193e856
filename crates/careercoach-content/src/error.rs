//! Error types for catalog decoding.

use thiserror::Error;

/// Failures raised while decoding the compiled-in datasets.
#[derive(Debug, Error)]
pub enum ContentError {
    /// A dataset was not valid JSON for its record type.
    #[error("failed to decode {dataset} dataset")]
    Decode {
        /// Dataset name (file stem).
        dataset: &'static str,
        /// Source decode error.
        #[source]
        source: serde_json::Error,
    },
    /// Two records in one dataset share an id.
    #[error("duplicate id {id} in {dataset} dataset")]
    DuplicateId {
        /// Dataset name (file stem).
        dataset: &'static str,
        /// Repeated identifier.
        id: u32,
    },
}

/// Convenience alias for catalog results.
pub type ContentResult<T> = Result<T, ContentError>;
