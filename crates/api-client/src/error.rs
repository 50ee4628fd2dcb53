//! Error types for the API client

use std::borrow::Cow;
use thiserror::Error;

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// API client errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// Missing API key or organization id, or an invalid configuration value
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The authentication call failed
    #[error("Authentication failed: {message}")]
    Authentication {
        /// Short description of the failure
        message: String,
        /// Underlying error
        #[source]
        source: Box<ApiError>,
    },

    /// Response could not be parsed, or the request itself was malformed
    #[error("Validation error: {0}")]
    Validation(String),

    /// API returned a non-2xx response
    #[error("API error ({status}): {description}")]
    ApiRequest {
        /// HTTP status code
        status: u16,
        /// Text from the status table
        description: String,
        /// Raw response body, if any
        body: String,
    },

    /// Connection-level failure with no HTTP status
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    /// Create a configuration error
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an API request error, looking up the status description
    pub fn api_request(status: u16, body: impl Into<String>) -> Self {
        Self::ApiRequest {
            status,
            description: status_description(status).into_owned(),
            body: body.into(),
        }
    }

    /// Wrap an error raised while authenticating
    #[must_use]
    pub fn authentication(source: ApiError) -> Self {
        Self::Authentication {
            message: source.to_string(),
            source: Box::new(source),
        }
    }

    /// Check if this is a configuration error
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    /// HTTP status carried by the error, if any
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiRequest { status, .. } => Some(*status),
            Self::Authentication { source, .. } => source.status(),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            Self::Configuration(_) | Self::Validation(_) => None,
        }
    }

    /// Check if this is a client error (4xx)
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        self.status().is_some_and(|s| (400..500).contains(&s))
    }

    /// Check if this is a server error (5xx)
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status().is_some_and(|s| s >= 500)
    }
}

/// Human-readable description for an HTTP status code
///
/// Known codes map to fixed text; anything else gets a generic message
/// embedding the code.
#[must_use]
pub fn status_description(code: u16) -> Cow<'static, str> {
    match code {
        400 => Cow::Borrowed("Bad request"),
        401 => Cow::Borrowed("Unauthorized"),
        403 => Cow::Borrowed("Forbidden"),
        404 => Cow::Borrowed("Not found"),
        429 => Cow::Borrowed("Too many requests"),
        500 => Cow::Borrowed("Internal server error"),
        502 => Cow::Borrowed("Bad gateway"),
        503 => Cow::Borrowed("Service unavailable"),
        other => Cow::Owned(format!("Unknown error: {other}")),
    }
}
