//! Table reservation endpoints

use crate::client::IikoClient;
use crate::endpoints::resource::{DateRange, OrganizationScope, RESERVES};
use crate::error::ApiResult;
use serde::Serialize;
use serde_json::Value;

/// Reserves API interface
#[derive(Clone)]
pub struct ReservesApi {
    scope: OrganizationScope,
}

impl ReservesApi {
    /// Create a new reserves API interface
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

    /// List reservations in a date range
    pub async fn list(&self, range: &DateRange) -> ApiResult<Vec<Value>> {
        self.scope.list(&RESERVES, Some(range), &[]).await
    }

    /// Get a single reservation
    pub async fn get(&self, reserve_id: &str) -> ApiResult<Value> {
        self.scope.get(&RESERVES, reserve_id).await
    }

    /// Book a table
    pub async fn create<B: Serialize + ?Sized>(&self, reserve: &B) -> ApiResult<Value> {
        self.scope.create(&RESERVES, reserve).await
    }

    /// Change a reservation
    pub async fn update<B: Serialize + ?Sized>(
        &self,
        reserve_id: &str,
        reserve: &B,
    ) -> ApiResult<Value> {
        self.scope.update(&RESERVES, reserve_id, reserve).await
    }

    /// Cancel a reservation; returns `true` on success
    ///
    /// POST /api/1/reserves/{id}/cancel
    pub async fn cancel(&self, reserve_id: &str) -> ApiResult<bool> {
        self.scope.cancel(&RESERVES, reserve_id).await
    }
}
