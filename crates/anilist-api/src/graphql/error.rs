//! `AniListError` - failure taxonomy for GraphQL requests.

use std::fmt;

use super::envelope::GraphqlError;

/// Maximum number of body bytes kept in [`AniListError::Http`].
const BODY_PREVIEW_LEN: usize = 500;

/// Errors raised while executing an AniList operation.
///
/// Returned inside `anyhow::Error`; recover the kind with
/// `err.downcast_ref::<AniListError>()`.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub enum AniListError {
    /// The request could not be sent or the body could not be read
    /// (connection failure, timeout, TLS error).
    Transport {
        /// Operation name.
        operation: &'static str,
        /// Underlying HTTP client error.
        source: reqwest::Error,
    },
    /// The server answered with a non-success status and no GraphQL errors.
    Http {
        /// Operation name.
        operation: &'static str,
        /// HTTP status code.
        status: u16,
        /// Leading part of the response body.
        body: String,
    },
    /// The remote API reported GraphQL errors.
    Remote {
        /// Operation name.
        operation: &'static str,
        /// HTTP status code.
        status: u16,
        /// Errors as reported by the API.
        errors: Vec<GraphqlError>,
    },
    /// A successful response carried neither `data` nor `errors`.
    MissingData {
        /// Operation name.
        operation: &'static str,
    },
    /// The response body did not match the expected shape.
    Decode {
        /// Operation name.
        operation: &'static str,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
    /// Pagination stopped at the configured page bound.
    PageLimitExceeded {
        /// Operation name.
        operation: &'static str,
        /// Configured maximum number of pages.
        limit: u32,
    },
}

impl AniListError {
    /// Builds an [`Self::Http`] error, truncating the body.
    pub(crate) fn http(operation: &'static str, status: u16, body: &str) -> Self {
        Self::Http {
            operation,
            status,
            body: String::from(&body[..body.floor_char_boundary(BODY_PREVIEW_LEN)]),
        }
    }

    /// Operation the error belongs to.
    #[must_use]
    pub const fn operation(&self) -> &'static str {
        match self {
            Self::Transport { operation, .. }
            | Self::Http { operation, .. }
            | Self::Remote { operation, .. }
            | Self::MissingData { operation }
            | Self::Decode { operation, .. }
            | Self::PageLimitExceeded { operation, .. } => operation,
        }
    }

    /// Returns `true` for failures reaching the remote API.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::Http { .. })
    }

    /// Returns `true` when the remote API reported GraphQL errors.
    #[must_use]
    pub const fn is_remote(&self) -> bool {
        matches!(self, Self::Remote { .. })
    }
}

impl fmt::Display for AniListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport { operation, source } => {
                write!(f, "{operation} transport error: {source}")
            }
            Self::Http {
                operation,
                status,
                body,
            } => write!(f, "{operation} HTTP error (status {status}): {body}"),
            Self::Remote {
                operation,
                status,
                errors,
            } => {
                let messages = errors
                    .iter()
                    .map(|e| e.message.as_str())
                    .collect::<Vec<_>>()
                    .join("; ");
                write!(f, "{operation} remote error (status {status}): {messages}")
            }
            Self::MissingData { operation } => {
                write!(f, "{operation} response contained no data")
            }
            Self::Decode { operation, source } => {
                write!(f, "{operation} response decoding failed: {source}")
            }
            Self::PageLimitExceeded { operation, limit } => {
                write!(f, "{operation} pagination exceeded {limit} pages")
            }
        }
    }
}

impl std::error::Error for AniListError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Transport { source, .. } => Some(source),
            Self::Decode { source, .. } => Some(source),
            Self::Http { .. }
            | Self::Remote { .. }
            | Self::MissingData { .. }
            | Self::PageLimitExceeded { .. } => None,
        }
    }
}
