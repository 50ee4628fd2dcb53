//! Customer endpoints

use crate::client::IikoClient;
use crate::endpoints::resource::{OrganizationScope, CUSTOMERS};
use crate::error::ApiResult;
use serde::Serialize;
use serde_json::Value;

/// Customers API interface
#[derive(Clone)]
pub struct CustomersApi {
    scope: OrganizationScope,
}

impl CustomersApi {
    /// Create a new customers API interface
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

    /// List customers of the organization
    ///
    /// GET /api/1/customers
    pub async fn list(&self) -> ApiResult<Vec<Value>> {
        self.scope.list(&CUSTOMERS, None, &[]).await
    }

    /// Get a single customer
    ///
    /// GET /api/1/customers/{id}
    pub async fn get(&self, customer_id: &str) -> ApiResult<Value> {
        self.scope.get(&CUSTOMERS, customer_id).await
    }

    /// Register a customer
    ///
    /// POST /api/1/customers
    pub async fn create<B: Serialize + ?Sized>(&self, customer: &B) -> ApiResult<Value> {
        self.scope.create(&CUSTOMERS, customer).await
    }

    /// Update a customer
    ///
    /// PUT /api/1/customers/{id}
    pub async fn update<B: Serialize + ?Sized>(
        &self,
        customer_id: &str,
        customer: &B,
    ) -> ApiResult<Value> {
        self.scope.update(&CUSTOMERS, customer_id, customer).await
    }
}
