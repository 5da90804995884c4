//! Error types for the discussions API client.

use thiserror::Error;

/// Client-side rejection of request parameters, raised before any network I/O.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// `create` was called without any attributes.
    #[error("no channel attributes were supplied")]
    EmptyAttributes,

    /// An attribute outside the recognized channel attribute set.
    #[error("Argument '{key}' is not a supported field")]
    UnsupportedAttribute {
        /// The first unsupported key encountered.
        key: String,
    },

    /// `channel_type` is missing, not a string, or not a valid channel type.
    #[error(
        "Channel type '{}' is not a valid option",
        .value.as_deref().unwrap_or("<missing>")
    )]
    InvalidChannelType {
        /// The offending value; `None` when `channel_type` was absent.
        value: Option<String>,
    },
}

/// Discriminator for [`ValidationError`], for callers that only branch on the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    EmptyAttributes,
    UnsupportedAttribute,
    InvalidChannelType,
}

impl ValidationError {
    pub fn kind(&self) -> ValidationErrorKind {
        match self {
            ValidationError::EmptyAttributes => ValidationErrorKind::EmptyAttributes,
            ValidationError::UnsupportedAttribute { .. } => ValidationErrorKind::UnsupportedAttribute,
            ValidationError::InvalidChannelType { .. } => ValidationErrorKind::InvalidChannelType,
        }
    }
}

/// Error returned by resource operations.
///
/// `E` is the transport's own error type. It is carried as-is so callers see
/// exactly what the transport reported.
#[derive(Error, Debug)]
pub enum ApiError<E> {
    /// Parameters were rejected locally; no request was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The transport failed to deliver the request.
    #[error("transport error: {0}")]
    Transport(#[source] E),
}

impl<E> ApiError<E> {
    /// The validation error, if the request was rejected before I/O.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            ApiError::Validation(err) => Some(err),
            ApiError::Transport(_) => None,
        }
    }
}

/// Errors raised while building a client from configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The base URL is empty after trimming.
    #[error("base url must not be empty")]
    EmptyBaseUrl,

    /// A configured value cannot be sent as an HTTP header.
    #[error("invalid value for header '{header}'")]
    InvalidHeader {
        /// Header name.
        header: &'static str,
    },

    /// The HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    Http(#[from] reqwest::Error),

    /// An environment variable held an unusable value.
    #[error("invalid value for {var}: {reason}")]
    InvalidEnv {
        /// Variable name.
        var: &'static str,
        /// What was wrong with it.
        reason: String,
    },
}

/// Result type for configuration and client construction.
pub type Result<T> = std::result::Result<T, ConfigError>;
