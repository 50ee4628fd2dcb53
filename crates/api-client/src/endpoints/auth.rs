//! Authentication endpoints

use crate::client::IikoClient;
use crate::error::{ApiError, ApiResult};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tracing::{error, info};

const AUTH_PATH: &str = "api/1/auth/access_token";
const API_LOGIN_PATH: &str = "api/1/access_token";

/// Authentication API interface
#[derive(Clone)]
pub struct AuthApi {
    client: IikoClient,
}

impl AuthApi {
    /// Create a new auth API interface
    pub(crate) fn new(client: IikoClient) -> Self {
        Self { client }
    }

    /// Exchange a login and password for an access token
    ///
    /// POST /api/1/auth/access_token
    ///
    /// Configuration errors pass through unchanged; any other failure is
    /// wrapped in [`ApiError::Authentication`].
    pub async fn authenticate(&self, login: &str, password: &str) -> ApiResult<AuthResponse> {
        let body = json!({ "login": login, "password": password });
        let result = self.client.post(AUTH_PATH, &[], Some(&body)).await;
        Self::finish(result)
    }

    /// Exchange an iiko Cloud API login for an access token
    ///
    /// POST /api/1/access_token, sent without a bearer header.
    pub async fn access_token(&self, api_login: &str) -> ApiResult<AuthResponse> {
        let body = json!({ "apiLogin": api_login });
        let result = self
            .client
            .request_unauthenticated(Method::POST, API_LOGIN_PATH, Some(&body))
            .await;
        Self::finish(result)
    }

    fn finish(result: ApiResult<Value>) -> ApiResult<AuthResponse> {
        let response = result
            .and_then(|value| {
                serde_json::from_value::<AuthResponse>(value)
                    .map_err(|e| ApiError::validation(format!("Invalid auth response: {e}")))
            })
            .map_err(|e| {
                error!(error = %e, "Authentication failed");
                if e.is_configuration() {
                    e
                } else {
                    ApiError::authentication(e)
                }
            })?;

        info!("Authentication succeeded");
        Ok(response)
    }
}

/// Access token response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Bearer token for subsequent calls
    pub token: Option<String>,
    /// Expiry timestamp as sent by the server
    pub expires: Option<String>,
    /// Any other fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::test_support::{client, unconfigured};
    use httpmock::prelude::*;

    #[test]
    fn test_auth_response_deserialize() {
        let json = r#"{
            "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
            "expires": "2024-12-31T23:59:59.000Z",
            "correlationId": "c-1"
        }"#;

        let response: AuthResponse = serde_json::from_str(json).unwrap();
        assert!(response.token.unwrap().starts_with("eyJ"));
        assert_eq!(response.expires.as_deref(), Some("2024-12-31T23:59:59.000Z"));
        assert_eq!(response.extra["correlationId"], "c-1");
    }

    #[tokio::test]
    async fn test_authenticate_posts_credentials() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/1/auth/access_token")
                    .json_body(json!({"login": "admin", "password": "secret"}));
                then.status(200).json_body(json!({"token": "t-1"}));
            })
            .await;

        let client = client(&server);
        let response = client.auth().authenticate("admin", "secret").await.unwrap();
        mock.assert_async().await;
        assert_eq!(response.token.as_deref(), Some("t-1"));

        let authed = client.authenticate("admin", "secret").await.unwrap();
        assert_eq!(authed.config().access_token.as_deref(), Some("t-1"));
    }

    #[tokio::test]
    async fn test_authenticate_failure_is_wrapped() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/1/auth/access_token");
                then.status(401);
            })
            .await;

        let err = client(&server)
            .auth()
            .authenticate("admin", "wrong")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Authentication { .. }));
        assert_eq!(err.status(), Some(401));
    }

    #[tokio::test]
    async fn test_authenticate_without_key_is_configuration_error() {
        let server = MockServer::start_async().await;
        let err = unconfigured(&server)
            .auth()
            .authenticate("admin", "secret")
            .await
            .unwrap_err();
        assert!(err.is_configuration());
    }

    #[tokio::test]
    async fn test_client_authenticate_requires_token() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/1/auth/access_token");
                then.status(200).json_body(json!({"expires": "soon"}));
            })
            .await;

        let err = client(&server).authenticate("a", "b").await.err().unwrap();
        assert!(matches!(err, ApiError::Authentication { .. }));
    }

    #[tokio::test]
    async fn test_api_login_has_no_bearer() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/1/access_token")
                    .json_body(json!({"apiLogin": "login-key"}))
                    .header_missing("authorization");
                then.status(200).json_body(json!({"token": "t-2"}));
            })
            .await;

        let response = unconfigured(&server)
            .auth()
            .access_token("login-key")
            .await
            .unwrap();
        mock.assert_async().await;
        assert_eq!(response.token.as_deref(), Some("t-2"));
    }
}
