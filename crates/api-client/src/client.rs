//! Main API client implementation

use crate::config::ClientConfig;
use crate::endpoints::{
    AuthApi, CustomersApi, DeliveriesApi, DiscountsApi, InfoApi, MenuApi, OrdersApi,
    OrganizationsApi, PaymentsApi, ReportsApi, ReservesApi, StockApi, TablesApi,
};
use crate::error::{ApiError, ApiResult};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, Method, Response};
use serde_json::{Map, Value};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

/// Request correlation ID header
const X_REQUEST_ID: &str = "X-Request-ID";

/// Query parameters as sent on the wire
pub type Query = [(&'static str, String)];

/// iiko API client
///
/// Cheap to clone; clones share the underlying connection pool. The
/// configuration is immutable, so a client with a different organization or
/// credential is a new value (see [`IikoClient::with_organization`]).
#[derive(Clone)]
pub struct IikoClient {
    inner: Client,
    config: Arc<ClientConfig>,
}

/// Outcome of a connection probe
#[derive(Debug)]
pub enum ConnectionStatus {
    /// The API answered an authenticated request
    Connected,
    /// The client is missing a credential or other setting
    NotConfigured(ApiError),
    /// The request went out but failed
    Unreachable(ApiError),
}

impl ConnectionStatus {
    /// Whether the probe succeeded
    #[must_use]
    pub fn is_connected(&self) -> bool {
        matches!(self, Self::Connected)
    }
}

impl IikoClient {
    /// Create a new client with specific configuration
    pub fn new(config: ClientConfig) -> ApiResult<Self> {
        config.validate()?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        default_headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("iiko-api-client/", env!("CARGO_PKG_VERSION"))),
        );

        let inner = Client::builder()
            .timeout(config.timeout)
            .default_headers(default_headers)
            .build()
            .map_err(ApiError::Transport)?;

        Ok(Self {
            inner,
            config: Arc::new(config),
        })
    }

    /// Create a client for the default host with the given API key
    pub fn with_api_key(api_key: impl Into<String>) -> ApiResult<Self> {
        Self::new(ClientConfig::new(api_key))
    }

    /// Get the current configuration
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the base URL
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Default organization, if one is configured
    #[must_use]
    pub fn organization_id(&self) -> Option<&str> {
        self.config.organization_id.as_deref()
    }

    /// Client sharing this connection pool with a different default organization
    #[must_use]
    pub fn with_organization(&self, organization_id: impl Into<String>) -> Self {
        let organization_id = organization_id.into();
        info!(organization_id = %organization_id, "Organization id set");
        self.derive(|config| config.with_organization_id(organization_id))
    }

    /// Client sharing this connection pool that authenticates with `token`
    #[must_use]
    pub fn with_access_token(&self, token: impl Into<String>) -> Self {
        self.derive(|config| config.with_access_token(token))
    }

    fn derive(&self, f: impl FnOnce(ClientConfig) -> ClientConfig) -> Self {
        Self {
            inner: self.inner.clone(),
            config: Arc::new(f((*self.config).clone())),
        }
    }

    /// Authenticate and return a client carrying the issued access token
    pub async fn authenticate(&self, login: &str, password: &str) -> ApiResult<Self> {
        let response = self.auth().authenticate(login, password).await?;
        let token = response.token.filter(|t| !t.is_empty()).ok_or_else(|| {
            ApiError::authentication(ApiError::validation("response has no token"))
        })?;
        Ok(self.with_access_token(token))
    }

    // -------------------------------------------------------------------------
    // Endpoint API accessors
    // -------------------------------------------------------------------------

    /// Access authentication endpoints
    #[must_use]
    pub fn auth(&self) -> AuthApi {
        AuthApi::new(self.clone())
    }

    /// Access organization endpoints
    #[must_use]
    pub fn organizations(&self) -> OrganizationsApi {
        OrganizationsApi::new(self.clone())
    }

    /// Access menu and product endpoints
    #[must_use]
    pub fn menu(&self) -> MenuApi {
        MenuApi::new(self.clone())
    }

    /// Access order endpoints
    #[must_use]
    pub fn orders(&self) -> OrdersApi {
        OrdersApi::new(self.clone())
    }

    /// Access customer endpoints
    #[must_use]
    pub fn customers(&self) -> CustomersApi {
        CustomersApi::new(self.clone())
    }

    /// Access warehouse and stock endpoints
    #[must_use]
    pub fn stock(&self) -> StockApi {
        StockApi::new(self.clone())
    }

    /// Access delivery endpoints
    #[must_use]
    pub fn deliveries(&self) -> DeliveriesApi {
        DeliveriesApi::new(self.clone())
    }

    /// Access table reservation endpoints
    #[must_use]
    pub fn reserves(&self) -> ReservesApi {
        ReservesApi::new(self.clone())
    }

    /// Access table and zone endpoints
    #[must_use]
    pub fn tables(&self) -> TablesApi {
        TablesApi::new(self.clone())
    }

    /// Access payment endpoints
    #[must_use]
    pub fn payments(&self) -> PaymentsApi {
        PaymentsApi::new(self.clone())
    }

    /// Access discount and promotion endpoints
    #[must_use]
    pub fn discounts(&self) -> DiscountsApi {
        DiscountsApi::new(self.clone())
    }

    /// Access report endpoints
    #[must_use]
    pub fn reports(&self) -> ReportsApi {
        ReportsApi::new(self.clone())
    }

    /// Access the API info endpoint
    #[must_use]
    pub fn info(&self) -> InfoApi {
        InfoApi::new(self.clone())
    }

    // -------------------------------------------------------------------------
    // Connection probe
    // -------------------------------------------------------------------------

    /// Probe the API by listing organizations
    pub async fn connection_status(&self) -> ConnectionStatus {
        match self.organizations().list().await {
            Ok(_) => {
                info!("Connection to API established");
                ConnectionStatus::Connected
            }
            Err(e) if e.is_configuration() => {
                warn!(error = %e, "Client is not configured");
                ConnectionStatus::NotConfigured(e)
            }
            Err(e) => {
                error!(error = %e, "Connection to API failed");
                ConnectionStatus::Unreachable(e)
            }
        }
    }

    /// Whether the API is reachable with the current credentials
    ///
    /// Never fails; every error counts as "not connected".
    pub async fn check_connection(&self) -> bool {
        self.connection_status().await.is_connected()
    }

    // -------------------------------------------------------------------------
    // Low-level HTTP methods
    // -------------------------------------------------------------------------

    /// Perform a GET request
    pub async fn get(&self, path: &str, query: &Query) -> ApiResult<Value> {
        self.request(Method::GET, path, query, None).await
    }

    /// Perform a POST request
    pub async fn post(&self, path: &str, query: &Query, body: Option<&Value>) -> ApiResult<Value> {
        self.request(Method::POST, path, query, body).await
    }

    /// Perform a PUT request
    pub async fn put(&self, path: &str, query: &Query, body: &Value) -> ApiResult<Value> {
        self.request(Method::PUT, path, query, Some(body)).await
    }

    /// Perform a DELETE request
    pub async fn delete(&self, path: &str, query: &Query) -> ApiResult<Value> {
        self.request(Method::DELETE, path, query, None).await
    }

    /// Execute one authenticated request and decode the JSON response
    ///
    /// Fails with [`ApiError::Configuration`] before touching the network if
    /// no credential is set. An empty response body decodes to `{}`.
    #[instrument(skip(self, query, body), fields(request_id))]
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        query: &Query,
        body: Option<&Value>,
    ) -> ApiResult<Value> {
        let bearer = self.config.bearer()?;
        self.execute(method, path, query, body, Some(bearer)).await
    }

    /// Execute one request without an `Authorization` header
    #[instrument(skip(self, body), fields(request_id))]
    pub(crate) async fn request_unauthenticated(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> ApiResult<Value> {
        self.execute(method, path, &[], body, None).await
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        query: &Query,
        body: Option<&Value>,
        bearer: Option<&str>,
    ) -> ApiResult<Value> {
        if !matches!(
            method,
            Method::GET | Method::POST | Method::PUT | Method::DELETE
        ) {
            return Err(ApiError::validation(format!(
                "Unsupported HTTP method: {method}"
            )));
        }

        let url = self.url(path);
        let request_id = Uuid::new_v4().to_string();
        tracing::Span::current().record("request_id", request_id.as_str());

        let mut request = self
            .inner
            .request(method.clone(), &url)
            .header(X_REQUEST_ID, &request_id);

        if let Some(token) = bearer {
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(b) = body {
            request = request.json(b);
        }

        debug!(request_id = %request_id, method = %method, url = %url, "Sending request");
        let start = Instant::now();

        let response = request.send().await.map_err(|e| {
            error!(request_id = %request_id, url = %url, error = %e, "HTTP request failed");
            ApiError::Transport(e)
        })?;

        let result = Self::handle_response(&request_id, response).await;
        debug!(
            request_id = %request_id,
            elapsed_ms = start.elapsed().as_millis(),
            ok = result.is_ok(),
            "Request finished"
        );
        result
    }

    /// Handle HTTP response and decode the body
    async fn handle_response(request_id: &str, response: Response) -> ApiResult<Value> {
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let err = ApiError::api_request(
                status.as_u16(),
                String::from_utf8_lossy(&bytes).into_owned(),
            );
            warn!(
                request_id = %request_id,
                status = status.as_u16(),
                error = %err,
                "API returned an error status"
            );
            return Err(err);
        }

        if bytes.is_empty() {
            return Ok(Value::Object(Map::new()));
        }

        serde_json::from_slice(&bytes).map_err(|e| {
            error!(request_id = %request_id, error = %e, "Failed to parse response JSON");
            ApiError::validation(format!("Invalid response format from API: {e}"))
        })
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::IikoClient;
    use crate::config::ClientConfig;
    use httpmock::MockServer;

    /// Client pointed at a mock server with a key and default organization
    pub fn client(server: &MockServer) -> IikoClient {
        IikoClient::new(
            ClientConfig::new("test-key")
                .with_base_url(server.base_url())
                .with_organization_id("org1"),
        )
        .unwrap()
    }

    /// Client pointed at a mock server with no credentials at all
    pub fn unconfigured(server: &MockServer) -> IikoClient {
        IikoClient::new(ClientConfig::default().with_base_url(server.base_url())).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::{client, unconfigured};
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[test]
    fn test_client_creation() {
        assert!(IikoClient::with_api_key("key").is_ok());
        assert!(IikoClient::new(ClientConfig::default().with_base_url("nope")).is_err());
    }

    #[test]
    fn test_url_joining() {
        let client = IikoClient::new(
            ClientConfig::new("k").with_base_url("http://localhost:9000/"),
        )
        .unwrap();
        assert_eq!(client.url("/api/1/info"), "http://localhost:9000/api/1/info");
        assert_eq!(client.url("api/1/info"), "http://localhost:9000/api/1/info");
    }

    #[test]
    fn test_with_organization_leaves_original_untouched() {
        let base = IikoClient::with_api_key("key").unwrap();
        let scoped = base.with_organization("org2");
        assert_eq!(base.organization_id(), None);
        assert_eq!(scoped.organization_id(), Some("org2"));
    }

    #[tokio::test]
    async fn test_request_sends_headers() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/1/info")
                    .header("authorization", "Bearer test-key")
                    .header("accept", "application/json")
                    .header("content-type", "application/json")
                    .header_exists("x-request-id");
                then.status(200).json_body(json!({"version": "1.0.0"}));
            })
            .await;

        let value = client(&server).get("api/1/info", &[]).await.unwrap();

        mock.assert_async().await;
        assert_eq!(value["version"], "1.0.0");
    }

    #[tokio::test]
    async fn test_missing_key_makes_no_request() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.any_request();
                then.status(200).json_body(json!({}));
            })
            .await;

        let err = unconfigured(&server).get("api/1/info", &[]).await.unwrap_err();

        assert!(err.is_configuration());
        mock.assert_hits_async(0).await;
    }

    #[tokio::test]
    async fn test_error_status_maps_to_api_request() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/1/organizations/missing");
                then.status(404).body("no such organization");
            })
            .await;

        let err = client(&server)
            .get("api/1/organizations/missing", &[])
            .await
            .unwrap_err();

        match err {
            ApiError::ApiRequest {
                status,
                description,
                body,
            } => {
                assert_eq!(status, 404);
                assert_eq!(description, "Not found");
                assert_eq!(body, "no such organization");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_body_is_empty_object() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(DELETE).path("/api/1/orders/o1");
                then.status(204);
            })
            .await;

        let value = client(&server).delete("api/1/orders/o1", &[]).await.unwrap();
        assert_eq!(value, json!({}));
    }

    #[tokio::test]
    async fn test_invalid_json_is_validation_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/1/info");
                then.status(200).body("<html>oops</html>");
            })
            .await;

        let err = client(&server).get("api/1/info", &[]).await.unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[tokio::test]
    async fn test_unsupported_method() {
        let server = MockServer::start_async().await;
        let err = client(&server)
            .request(reqwest::Method::PATCH, "api/1/orders", &[], None)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[tokio::test]
    async fn test_access_token_preferred() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/1/info")
                    .header("authorization", "Bearer session-token");
                then.status(200).json_body(json!({}));
            })
            .await;

        client(&server)
            .with_access_token("session-token")
            .get("api/1/info", &[])
            .await
            .unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_check_connection() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/1/organizations");
                then.status(200).json_body(json!({"organizations": []}));
            })
            .await;

        assert!(client(&server).check_connection().await);
    }

    #[tokio::test]
    async fn test_check_connection_swallows_errors() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/1/organizations");
                then.status(503);
            })
            .await;

        assert!(!client(&server).check_connection().await);
        assert!(!unconfigured(&server).check_connection().await);
    }

    #[tokio::test]
    async fn test_connection_status_distinguishes_causes() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/1/organizations");
                then.status(401);
            })
            .await;

        let status = unconfigured(&server).connection_status().await;
        assert!(matches!(status, ConnectionStatus::NotConfigured(_)));

        let status = client(&server).connection_status().await;
        match status {
            ConnectionStatus::Unreachable(e) => assert_eq!(e.status(), Some(401)),
            other => panic!("unexpected status: {other:?}"),
        }
    }
}
