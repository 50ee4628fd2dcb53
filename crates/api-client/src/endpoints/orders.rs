//! Order endpoints
//!
//! Full CRUD over `/api/1/orders`. Request bodies are any serializable JSON
//! object; the organization id is written into them before sending.

use crate::client::IikoClient;
use crate::endpoints::resource::{DateRange, OrganizationScope, ORDERS};
use crate::error::ApiResult;
use serde::Serialize;
use serde_json::Value;

/// Orders API interface
#[derive(Clone)]
pub struct OrdersApi {
    scope: OrganizationScope,
}

impl OrdersApi {
    /// Create a new orders API interface
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

    /// List orders, optionally bounded by date
    ///
    /// GET /api/1/orders?organizationId=<id>&dateFrom=..&dateTo=..
    pub async fn list(&self, range: &DateRange) -> ApiResult<Vec<Value>> {
        self.scope.list(&ORDERS, Some(range), &[]).await
    }

    /// Get a single order
    ///
    /// GET /api/1/orders/{id}
    pub async fn get(&self, order_id: &str) -> ApiResult<Value> {
        self.scope.get(&ORDERS, order_id).await
    }

    /// Create an order
    ///
    /// POST /api/1/orders
    pub async fn create<B: Serialize + ?Sized>(&self, order: &B) -> ApiResult<Value> {
        self.scope.create(&ORDERS, order).await
    }

    /// Update an order
    ///
    /// PUT /api/1/orders/{id}
    pub async fn update<B: Serialize + ?Sized>(&self, order_id: &str, order: &B) -> ApiResult<Value> {
        self.scope.update(&ORDERS, order_id, order).await
    }

    /// Delete an order; returns `true` on success
    ///
    /// DELETE /api/1/orders/{id}
    pub async fn delete(&self, order_id: &str) -> ApiResult<bool> {
        self.scope.delete(&ORDERS, order_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::test_support::{client, unconfigured};
    use crate::error::ApiError;
    use chrono::NaiveDate;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_create_merges_organization_id() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/api/1/orders").json_body(json!({
                    "organizationId": "org1",
                    "items": [{"productId": "prod-001", "amount": 2}],
                    "paymentType": "Card"
                }));
                then.status(200)
                    .json_body(json!({"id": "order-12345", "status": "New"}));
            })
            .await;

        let order = json!({
            "items": [{"productId": "prod-001", "amount": 2}],
            "paymentType": "Card"
        });
        let created = client(&server).orders().create(&order).await.unwrap();

        mock.assert_async().await;
        assert_eq!(created, json!({"id": "order-12345", "status": "New"}));
    }

    #[tokio::test]
    async fn test_list_with_date_range() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/1/orders")
                    .query_param("organizationId", "org1")
                    .query_param("dateFrom", "2024-01-01")
                    .query_param("dateTo", "2024-01-15");
                then.status(200).json_body(json!({
                    "orders": [{"id": "order-12345"}, {"id": "order-12346"}]
                }));
            })
            .await;

        let range = DateRange::between(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        );
        let orders = client(&server).orders().list(&range).await.unwrap();

        mock.assert_async().await;
        assert_eq!(orders.len(), 2);
    }

    #[tokio::test]
    async fn test_list_without_range_sends_only_organization() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/1/orders")
                    .query_param("organizationId", "org1")
                    .query_param_missing("dateFrom")
                    .query_param_missing("dateTo");
                then.status(200).json_body(json!({"orders": []}));
            })
            .await;

        let orders = client(&server).orders().list(&DateRange::new()).await.unwrap();
        mock.assert_async().await;
        assert!(orders.is_empty());
    }

    #[tokio::test]
    async fn test_update_uses_put() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(PUT)
                    .path("/api/1/orders/order-12345")
                    .json_body(json!({"comment": "ring twice", "organizationId": "org1"}));
                then.status(200).json_body(json!({"id": "order-12345"}));
            })
            .await;

        client(&server)
            .orders()
            .update("order-12345", &json!({"comment": "ring twice"}))
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_delete_returns_true() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(DELETE)
                    .path("/api/1/orders/order-12345")
                    .query_param("organizationId", "org1");
                then.status(200).body("");
            })
            .await;

        assert!(client(&server).orders().delete("order-12345").await.unwrap());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_server_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/1/orders/o1");
                then.status(500);
            })
            .await;

        let err = client(&server).orders().get("o1").await.unwrap_err();
        assert!(err.is_server_error());
        assert!(matches!(err, ApiError::ApiRequest { ref description, .. } if description == "Internal server error"));
    }

    #[tokio::test]
    async fn test_create_rejects_non_object_body() {
        let server = MockServer::start_async().await;
        let err = client(&server).orders().create(&json!([1, 2])).await.unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[tokio::test]
    async fn test_missing_key_reported_before_bad_arguments() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.any_request();
                then.status(200).json_body(json!({}));
            })
            .await;

        let orders = unconfigured(&server).with_organization("org1").orders();
        let err = orders.get("").await.unwrap_err();
        assert!(err.is_configuration(), "{err}");
        let err = orders.create(&json!([1])).await.unwrap_err();
        assert!(err.is_configuration(), "{err}");
        let err = orders.update("", &json!("x")).await.unwrap_err();
        assert!(err.is_configuration(), "{err}");
        let err = orders.delete("").await.unwrap_err();
        assert!(err.is_configuration(), "{err}");
        mock.assert_hits_async(0).await;
    }

    #[tokio::test]
    async fn test_empty_override_falls_back_to_client_default() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/1/orders")
                    .query_param("organizationId", "org1");
                then.status(200).json_body(json!({"orders": [{"id": "o1"}]}));
            })
            .await;

        let orders = client(&server)
            .orders()
            .with_organization("")
            .list(&DateRange::new())
            .await
            .unwrap();
        mock.assert_async().await;
        assert_eq!(orders.len(), 1);
    }

    #[tokio::test]
    async fn test_get_rejects_ids_that_change_the_path() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.any_request();
                then.status(200).json_body(json!({}));
            })
            .await;

        let orders = client(&server).orders();
        for id in ["a/b", "a?x=1", "a#frag", "..", "a%2Fb"] {
            let err = orders.get(id).await.unwrap_err();
            assert!(matches!(err, ApiError::Validation(_)), "{id}: {err}");
        }
        mock.assert_hits_async(0).await;
    }
}
