//! Table and hall zone endpoints

use crate::client::IikoClient;
use crate::endpoints::resource::{OrganizationScope, TABLES, ZONES};
use crate::error::ApiResult;
use serde_json::Value;

/// Tables API interface
#[derive(Clone)]
pub struct TablesApi {
    scope: OrganizationScope,
}

impl TablesApi {
    /// Create a new tables API interface
    pub(crate) fn new(client: IikoClient) -> Self {
        Self {
            scope: OrganizationScope::new(client),
        }
    }

    /// Use `organization_id` instead of the client default
    #[must_use]
    pub fn with_organization(self, organization_id: impl Into<String>) -> Self {
        Self {
            scope: self.scope.with_organization(organization_id),
        }
    }

    /// List tables
    pub async fn tables(&self) -> ApiResult<Vec<Value>> {
        self.scope.list(&TABLES, None, &[]).await
    }

    /// List hall zones
    pub async fn zones(&self) -> ApiResult<Vec<Value>> {
        self.scope.list(&ZONES, None, &[]).await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::test_support::client;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_tables_and_zones() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/1/tables");
                then.status(200)
                    .json_body(json!({"tables": [{"id": "t-1", "number": 1, "seats": 4}]}));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/1/zones");
                then.status(200)
                    .json_body(json!({"zones": [{"id": "z-1", "name": "Terrace"}]}));
            })
            .await;

        let api = client(&server).tables();
        assert_eq!(api.tables().await.unwrap()[0]["seats"], 4);
        assert_eq!(api.zones().await.unwrap()[0]["name"], "Terrace");
    }
}
