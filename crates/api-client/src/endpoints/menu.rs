//! Menu and product endpoints

use crate::client::IikoClient;
use crate::endpoints::resource::{OrganizationScope, MENU, PRODUCTS};
use crate::error::ApiResult;
use serde_json::Value;

/// Menu API interface
#[derive(Clone)]
pub struct MenuApi {
    scope: OrganizationScope,
}

impl MenuApi {
    /// Create a new menu API interface
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

    /// Get the organization menu
    ///
    /// GET /api/1/menu?organizationId=<id>
    pub async fn menu(&self) -> ApiResult<Vec<Value>> {
        self.scope.list(&MENU, None, &[]).await
    }

    /// List products
    ///
    /// GET /api/1/products?organizationId=<id>
    pub async fn products(&self) -> ApiResult<Vec<Value>> {
        self.scope.list(&PRODUCTS, None, &[]).await
    }

    /// Get a single product
    ///
    /// GET /api/1/products/{id}?organizationId=<id>
    pub async fn product(&self, product_id: &str) -> ApiResult<Value> {
        self.scope.get(&PRODUCTS, product_id).await
    }
}
