//! Configuration for the iiko API client
//!
//! A `ClientConfig` is an immutable value handed to [`crate::IikoClient`].
//! Reading it from the environment is left to the caller.

use crate::error::{ApiError, ApiResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Default iiko Cloud API host
pub const DEFAULT_BASE_URL: &str = "https://api-ru.iiko.services";

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the API host
    pub base_url: String,
    /// API key sent as the bearer credential
    pub api_key: Option<String>,
    /// Access token from a previous authentication; preferred over the API key
    pub access_token: Option<String>,
    /// Organization used when a facade is not given one explicitly
    pub organization_id: Option<String>,
    /// Request timeout
    #[serde(with = "duration_secs")]
    pub timeout: Duration,
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            access_token: None,
            organization_id: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |v: &Option<String>| v.as_ref().map(|_| "<redacted>");
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &redact(&self.api_key))
            .field("access_token", &redact(&self.access_token))
            .field("organization_id", &self.organization_id)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ClientConfig {
    /// Create a configuration with defaults and the given API key
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::default().with_api_key(api_key)
    }

    /// Builder-style method to set base URL
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Builder-style method to set the API key
    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Builder-style method to set an access token
    #[must_use]
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Builder-style method to set the default organization
    #[must_use]
    pub fn with_organization_id(mut self, id: impl Into<String>) -> Self {
        self.organization_id = Some(id.into());
        self
    }

    /// Builder-style method to set timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Bearer credential for authenticated requests
    ///
    /// The access token wins over the API key. Empty strings count as unset.
    pub fn bearer(&self) -> ApiResult<&str> {
        self.access_token
            .as_deref()
            .filter(|t| !t.is_empty())
            .or_else(|| self.api_key.as_deref().filter(|k| !k.is_empty()))
            .ok_or_else(|| ApiError::configuration("API key is not set; use with_api_key()"))
    }

    /// Validate the configuration
    pub fn validate(&self) -> ApiResult<()> {
        if self.base_url.is_empty() {
            return Err(ApiError::configuration("base_url cannot be empty"));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ApiError::configuration(
                "base_url must start with http:// or https://",
            ));
        }

        if self.timeout.is_zero() {
            return Err(ApiError::configuration("timeout cannot be zero"));
        }

        Ok(())
    }
}
