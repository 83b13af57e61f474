//! Translation lookup errors.

use thiserror::Error;

/// Failures while looking a phrase up on the terminology portal.
#[derive(Error, Debug)]
pub enum TranslationError {
    /// The portal answered with a non-success status.
    #[error("Translation service returned HTTP {0}")]
    Status(u16),

    /// The request never produced a response.
    #[error("Translation request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The configured search URL is not usable.
    #[error("Invalid search URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}
