//! Resource table and the generic organization-scoped facade
//!
//! Every organization-scoped endpoint is described by a [`Resource`] entry.
//! [`OrganizationScope`] implements the shared list/get/create/update/delete
//! behaviour once; the per-resource facades only pick the entry.

use crate::client::{IikoClient, Query};
use crate::error::{ApiError, ApiResult};
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info};

/// Query/body key carrying the organization id
pub const ORGANIZATION_ID: &str = "organizationId";

/// Static description of one REST collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resource {
    /// Collection path relative to the base URL
    pub path: &'static str,
    /// Response field holding the list
    pub collection: &'static str,
    /// Name used in log lines
    pub label: &'static str,
}

impl Resource {
    const fn new(path: &'static str, collection: &'static str, label: &'static str) -> Self {
        Self {
            path,
            collection,
            label,
        }
    }

    /// Path of a single item
    ///
    /// The id must be one plain path segment: non-empty, not `.` or `..`,
    /// and free of `/`, `?`, `#`, `%` and control characters.
    pub fn item_path(&self, id: &str) -> ApiResult<String> {
        if id.is_empty() {
            return Err(ApiError::validation(format!("{} id cannot be empty", self.label)));
        }
        if id == "." || id == ".." || id.chars().any(|c| "/?#%".contains(c) || c.is_control()) {
            return Err(ApiError::validation(format!(
                "{} id {id:?} is not a valid path segment",
                self.label
            )));
        }
        Ok(format!("{}/{id}", self.path))
    }
}

/// Organizations visible to the credential
pub const ORGANIZATIONS: Resource = Resource::new("api/1/organizations", "organizations", "organization");
/// Menu items of an organization
pub const MENU: Resource = Resource::new("api/1/menu", "items", "menu item");
/// Product catalogue
pub const PRODUCTS: Resource = Resource::new("api/1/products", "products", "product");
/// Orders
pub const ORDERS: Resource = Resource::new("api/1/orders", "orders", "order");
/// Customers
pub const CUSTOMERS: Resource = Resource::new("api/1/customers", "customers", "customer");
/// Warehouses
pub const WAREHOUSES: Resource = Resource::new("api/1/warehouses", "warehouses", "warehouse");
/// Stock balances
pub const STOCK: Resource = Resource::new("api/1/stock", "stock", "stock entry");
/// Deliveries
pub const DELIVERIES: Resource = Resource::new("api/1/deliveries", "deliveries", "delivery");
/// Table reservations
pub const RESERVES: Resource = Resource::new("api/1/reserves", "reserves", "reserve");
/// Tables
pub const TABLES: Resource = Resource::new("api/1/tables", "tables", "table");
/// Hall zones
pub const ZONES: Resource = Resource::new("api/1/zones", "zones", "zone");
/// Payments
pub const PAYMENTS: Resource = Resource::new("api/1/payments", "payments", "payment");
/// Discounts
pub const DISCOUNTS: Resource = Resource::new("api/1/discounts", "discounts", "discount");
/// Promotions
pub const PROMOTIONS: Resource = Resource::new("api/1/promotions", "promotions", "promotion");

/// Optional `dateFrom`/`dateTo` bounds for list and report endpoints
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    /// Inclusive start date
    pub from: Option<NaiveDate>,
    /// Inclusive end date
    pub to: Option<NaiveDate>,
}

impl DateRange {
    /// Unbounded range
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Range covering `from..=to`
    #[must_use]
    pub fn between(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
        }
    }

    /// Set the start date
    #[must_use]
    pub fn with_from(mut self, from: NaiveDate) -> Self {
        self.from = Some(from);
        self
    }

    /// Set the end date
    #[must_use]
    pub fn with_to(mut self, to: NaiveDate) -> Self {
        self.to = Some(to);
        self
    }

    fn push_query(&self, query: &mut Vec<(&'static str, String)>) {
        if let Some(from) = self.from {
            query.push(("dateFrom", from.format("%Y-%m-%d").to_string()));
        }
        if let Some(to) = self.to {
            query.push(("dateTo", to.format("%Y-%m-%d").to_string()));
        }
    }
}

/// Take the named list out of a response object
///
/// A missing or `null` field yields an empty list.
pub(crate) fn unwrap_collection(response: Value, key: &str) -> ApiResult<Vec<Value>> {
    match response {
        Value::Object(mut map) => match map.remove(key) {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(Value::Array(items)) => Ok(items),
            Some(other) => Err(ApiError::validation(format!(
                "expected `{key}` to be an array, got {other}"
            ))),
        },
        other => Err(ApiError::validation(format!(
            "expected a JSON object response, got {other}"
        ))),
    }
}

/// Serialize a request body and write the organization id over it
pub(crate) fn with_organization<B: Serialize + ?Sized>(
    body: &B,
    organization_id: &str,
) -> ApiResult<Value> {
    let value = serde_json::to_value(body)
        .map_err(|e| ApiError::validation(format!("Failed to serialize request body: {e}")))?;

    match value {
        Value::Object(mut map) => {
            map.insert(ORGANIZATION_ID.to_string(), Value::String(organization_id.to_string()));
            Ok(Value::Object(map))
        }
        other => Err(ApiError::validation(format!(
            "request body must be a JSON object, got {other}"
        ))),
    }
}

fn created_id(value: &Value) -> &str {
    value.get("id").and_then(Value::as_str).unwrap_or_default()
}

/// Organization-resolving facade shared by every scoped resource
///
/// Every operation checks, in order: a credential is set, an organization
/// resolves, then the id and body are well formed.
#[derive(Clone)]
pub struct OrganizationScope {
    client: IikoClient,
    /// Per-facade override; empty means "use the client default"
    organization_id: Option<String>,
}

impl OrganizationScope {
    pub(crate) fn new(client: IikoClient) -> Self {
        Self {
            client,
            organization_id: None,
        }
    }

    /// Override the client's default organization for this facade
    ///
    /// An empty id leaves the client default in effect.
    #[must_use]
    pub fn with_organization(mut self, organization_id: impl Into<String>) -> Self {
        self.organization_id = Some(organization_id.into());
        self
    }

    /// Organization the next call will use: the override, else the client default
    pub fn organization_id(&self) -> ApiResult<&str> {
        let non_empty = |id: &&str| !id.is_empty();
        self.organization_id
            .as_deref()
            .filter(non_empty)
            .or_else(|| self.client.organization_id().filter(non_empty))
            .ok_or_else(|| {
                ApiError::configuration("Organization id is not set; use with_organization()")
            })
    }

    /// Credential and organization, checked before anything about the request
    fn resolve(&self) -> ApiResult<&str> {
        self.client.config().bearer()?;
        self.organization_id()
    }

    fn query(&self) -> ApiResult<Vec<(&'static str, String)>> {
        Ok(vec![(ORGANIZATION_ID, self.resolve()?.to_string())])
    }

    /// GET the collection and unwrap its list field
    pub(crate) async fn list(
        &self,
        resource: &Resource,
        range: Option<&DateRange>,
        extra: &Query,
    ) -> ApiResult<Vec<Value>> {
        let mut query = self.query()?;
        if let Some(range) = range {
            range.push_query(&mut query);
        }
        query.extend_from_slice(extra);

        self.client
            .get(resource.path, &query)
            .await
            .and_then(|response| unwrap_collection(response, resource.collection))
            .inspect_err(|e| error!(resource = resource.label, error = %e, "Failed to list"))
    }

    /// GET an arbitrary scoped path and return the raw object
    pub(crate) async fn fetch(
        &self,
        path: &str,
        label: &str,
        range: Option<&DateRange>,
    ) -> ApiResult<Value> {
        let mut query = self.query()?;
        if let Some(range) = range {
            range.push_query(&mut query);
        }

        self.client
            .get(path, &query)
            .await
            .inspect_err(|e| error!(resource = label, error = %e, "Failed to fetch"))
    }

    /// GET a single item
    pub(crate) async fn get(&self, resource: &Resource, id: &str) -> ApiResult<Value> {
        let query = self.query()?;
        let path = resource.item_path(id)?;

        self.client
            .get(&path, &query)
            .await
            .inspect_err(|e| error!(resource = resource.label, id, error = %e, "Failed to get"))
    }

    /// POST a new item with the organization id merged into the body
    pub(crate) async fn create<B: Serialize + ?Sized>(
        &self,
        resource: &Resource,
        body: &B,
    ) -> ApiResult<Value> {
        let body = with_organization(body, self.resolve()?)?;

        let created = self
            .client
            .post(resource.path, &[], Some(&body))
            .await
            .inspect_err(|e| error!(resource = resource.label, error = %e, "Failed to create"))?;

        info!(resource = resource.label, id = created_id(&created), "Created");
        Ok(created)
    }

    /// PUT an existing item with the organization id merged into the body
    pub(crate) async fn update<B: Serialize + ?Sized>(
        &self,
        resource: &Resource,
        id: &str,
        body: &B,
    ) -> ApiResult<Value> {
        let organization_id = self.resolve()?;
        let path = resource.item_path(id)?;
        let body = with_organization(body, organization_id)?;

        let updated = self
            .client
            .put(&path, &[], &body)
            .await
            .inspect_err(|e| error!(resource = resource.label, id, error = %e, "Failed to update"))?;

        info!(resource = resource.label, id, "Updated");
        Ok(updated)
    }

    /// DELETE an item; `true` on any 2xx
    pub(crate) async fn delete(&self, resource: &Resource, id: &str) -> ApiResult<bool> {
        let query = self.query()?;
        let path = resource.item_path(id)?;

        self.client
            .delete(&path, &query)
            .await
            .inspect_err(|e| error!(resource = resource.label, id, error = %e, "Failed to delete"))?;

        info!(resource = resource.label, id, "Deleted");
        Ok(true)
    }

    /// POST to `{item}/cancel`; `true` on any 2xx
    pub(crate) async fn cancel(&self, resource: &Resource, id: &str) -> ApiResult<bool> {
        let query = self.query()?;
        let path = format!("{}/cancel", resource.item_path(id)?);

        self.client
            .post(&path, &query, None)
            .await
            .inspect_err(|e| error!(resource = resource.label, id, error = %e, "Failed to cancel"))?;

        info!(resource = resource.label, id, "Cancelled");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::test_support::{client, unconfigured};
    use httpmock::prelude::*;
    use serde_json::json;

    #[test]
    fn test_item_path() {
        assert_eq!(ORDERS.item_path("o1").unwrap(), "api/1/orders/o1");
        assert!(ORDERS.item_path("").is_err());
        assert_eq!(
            ORDERS.item_path("3fa85f64-5717-4562-b3fc-2c963f66afa6").unwrap(),
            "api/1/orders/3fa85f64-5717-4562-b3fc-2c963f66afa6"
        );
        for id in ["a/b", "a?b", "a#b", "a%20b", ".", "..", "a\nb"] {
            assert!(
                matches!(ORDERS.item_path(id), Err(ApiError::Validation(_))),
                "{id:?} accepted"
            );
        }
    }

    #[test]
    fn test_date_range_query() {
        let range = DateRange::between(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        );
        let mut query = Vec::new();
        range.push_query(&mut query);
        assert_eq!(
            query,
            vec![
                ("dateFrom", "2024-01-01".to_string()),
                ("dateTo", "2024-01-31".to_string())
            ]
        );

        let mut query = Vec::new();
        DateRange::new()
            .with_to(NaiveDate::from_ymd_opt(2024, 2, 9).unwrap())
            .push_query(&mut query);
        assert_eq!(query, vec![("dateTo", "2024-02-09".to_string())]);
    }

    #[test]
    fn test_unwrap_collection() {
        let items = unwrap_collection(json!({"orders": [{"id": "A"}]}), "orders").unwrap();
        assert_eq!(items, vec![json!({"id": "A"})]);

        assert!(unwrap_collection(json!({}), "orders").unwrap().is_empty());
        assert!(unwrap_collection(json!({"orders": null}), "orders").unwrap().is_empty());
        assert!(unwrap_collection(json!({"orders": 3}), "orders").is_err());
        assert!(unwrap_collection(json!([1, 2]), "orders").is_err());
    }

    #[test]
    fn test_with_organization_overrides_caller_field() {
        let body = json!({"name": "Ivan", "organizationId": "stale"});
        let merged = with_organization(&body, "org1").unwrap();
        assert_eq!(merged, json!({"name": "Ivan", "organizationId": "org1"}));

        assert!(with_organization(&json!([1]), "org1").is_err());
    }

    #[tokio::test]
    async fn test_scope_uses_client_default() {
        let server = MockServer::start_async().await;
        let scope = OrganizationScope::new(client(&server));
        assert_eq!(scope.organization_id().unwrap(), "org1");

        let scope = scope.with_organization("org2");
        assert_eq!(scope.organization_id().unwrap(), "org2");

        let scope = scope.with_organization("");
        assert_eq!(scope.organization_id().unwrap(), "org1");
    }

    #[tokio::test]
    async fn test_scope_without_organization_fails_before_request() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.any_request();
                then.status(200).json_body(json!({}));
            })
            .await;

        let scope = OrganizationScope::new(
            IikoClient::new(
                crate::ClientConfig::new("key").with_base_url(server.base_url()),
            )
            .unwrap(),
        );
        let err = scope.list(&ORDERS, None, &[]).await.unwrap_err();
        assert!(err.is_configuration());

        let err = OrganizationScope::new(unconfigured(&server))
            .with_organization("org1")
            .list(&ORDERS, None, &[])
            .await
            .unwrap_err();
        assert!(err.is_configuration());

        mock.assert_hits_async(0).await;
    }
}
