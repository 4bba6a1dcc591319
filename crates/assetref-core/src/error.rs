//! Error types for configuration.
//!
//! Resolution itself has no error type: an unresolvable reference is an
//! empty result, never a failure.

use thiserror::Error;

/// The configured API origin cannot be used to build an [`OriginPair`](crate::origin::OriginPair).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Value did not parse as an absolute URL.
    #[error("invalid api_origin {value:?}: {reason}")]
    InvalidOrigin { value: String, reason: String },
    /// Parsed, but the scheme is not http or https.
    #[error("api_origin {value:?} uses unsupported scheme {scheme:?} (expected http or https)")]
    UnsupportedScheme { value: String, scheme: String },
}
