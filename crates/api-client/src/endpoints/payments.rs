//! Payment endpoints

use crate::client::IikoClient;
use crate::endpoints::resource::{DateRange, OrganizationScope, PAYMENTS};
use crate::error::ApiResult;
use serde::Serialize;
use serde_json::Value;

/// Payments API interface
#[derive(Clone)]
pub struct PaymentsApi {
    scope: OrganizationScope,
}

impl PaymentsApi {
    /// Create a new payments API interface
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

    /// List payments in a date range
    pub async fn list(&self, range: &DateRange) -> ApiResult<Vec<Value>> {
        self.scope.list(&PAYMENTS, Some(range), &[]).await
    }

    /// Get a single payment
    pub async fn get(&self, payment_id: &str) -> ApiResult<Value> {
        self.scope.get(&PAYMENTS, payment_id).await
    }

    /// Register a payment
    ///
    /// POST /api/1/payments
    pub async fn create<B: Serialize + ?Sized>(&self, payment: &B) -> ApiResult<Value> {
        self.scope.create(&PAYMENTS, payment).await
    }
}
