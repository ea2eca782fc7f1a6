//! Error types for loading seed data, configuration, and host URLs.
//!
//! Store operations never fail; these errors only surface at the
//! construction boundary, before a store exists.

use thiserror::Error;

/// Errors raised while building a store from external input.
#[derive(Debug, Error)]
pub enum Error {
    /// The host URL could not be parsed.
    #[error("invalid location URL '{url}': {source}")]
    InvalidUrl {
        /// The rejected input.
        url: String,
        /// The underlying parse failure.
        #[source]
        source: url::ParseError,
    },

    /// Seed records or configuration were not valid JSON for the expected shape.
    #[error("malformed JSON input: {0}")]
    Json(#[from] serde_json::Error),

    /// Two seed records share an id.
    #[error("duplicate record id {0} in seed data")]
    DuplicateId(u64),
}

/// Convenience alias for results carrying [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
