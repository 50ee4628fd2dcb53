//! Delivery endpoints

use crate::client::IikoClient;
use crate::endpoints::resource::{DateRange, OrganizationScope, DELIVERIES};
use crate::error::ApiResult;
use serde::Serialize;
use serde_json::Value;

/// Deliveries API interface
#[derive(Clone)]
pub struct DeliveriesApi {
    scope: OrganizationScope,
}

impl DeliveriesApi {
    /// Create a new deliveries API interface
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

    /// List deliveries in a date range
    ///
    /// GET /api/1/deliveries
    pub async fn list(&self, range: &DateRange) -> ApiResult<Vec<Value>> {
        self.scope.list(&DELIVERIES, Some(range), &[]).await
    }

    /// Get a single delivery
    pub async fn get(&self, delivery_id: &str) -> ApiResult<Value> {
        self.scope.get(&DELIVERIES, delivery_id).await
    }

    /// Create a delivery
    ///
    /// POST /api/1/deliveries
    pub async fn create<B: Serialize + ?Sized>(&self, delivery: &B) -> ApiResult<Value> {
        self.scope.create(&DELIVERIES, delivery).await
    }

    /// Update a delivery, e.g. its status or courier
    ///
    /// PUT /api/1/deliveries/{id}
    pub async fn update<B: Serialize + ?Sized>(
        &self,
        delivery_id: &str,
        delivery: &B,
    ) -> ApiResult<Value> {
        self.scope.update(&DELIVERIES, delivery_id, delivery).await
    }
}
