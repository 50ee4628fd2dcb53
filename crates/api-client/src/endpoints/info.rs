//! API info endpoint

use crate::client::IikoClient;
use crate::error::ApiResult;
use serde_json::Value;
use tracing::error;

/// API info interface
#[derive(Clone)]
pub struct InfoApi {
    client: IikoClient,
}

impl InfoApi {
    /// Create a new info API interface
    pub(crate) fn new(client: IikoClient) -> Self {
        Self { client }
    }

    /// Get API version and metadata
    ///
    /// GET /api/1/info
    pub async fn get(&self) -> ApiResult<Value> {
        self.client
            .get("api/1/info", &[])
            .await
            .inspect_err(|e| error!(error = %e, "Failed to get API info"))
    }
}

#[cfg(test)]
mod tests {
    use crate::client::test_support::client;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_info() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/1/info");
                then.status(200).json_body(json!({
                    "version": "1.0.0",
                    "name": "iiko API",
                    "rateLimit": {"requestsPerMinute": 1000}
                }));
            })
            .await;

        let info = client(&server).info().get().await.unwrap();
        assert_eq!(info["name"], "iiko API");
        assert_eq!(info["rateLimit"]["requestsPerMinute"], 1000);
    }
}
