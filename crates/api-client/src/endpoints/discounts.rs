//! Discount and promotion endpoints

use crate::client::IikoClient;
use crate::endpoints::resource::{OrganizationScope, DISCOUNTS, PROMOTIONS};
use crate::error::ApiResult;
use serde_json::Value;

/// Discounts API interface
#[derive(Clone)]
pub struct DiscountsApi {
    scope: OrganizationScope,
}

impl DiscountsApi {
    /// Create a new discounts API interface
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

    /// List discounts
    pub async fn discounts(&self) -> ApiResult<Vec<Value>> {
        self.scope.list(&DISCOUNTS, None, &[]).await
    }

    /// List promotions
    pub async fn promotions(&self) -> ApiResult<Vec<Value>> {
        self.scope.list(&PROMOTIONS, None, &[]).await
    }
}
