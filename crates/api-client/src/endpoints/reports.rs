//! Report endpoints
//!
//! Reports come back as raw objects; their shape depends on the server
//! version and is not modelled here.

use crate::client::IikoClient;
use crate::endpoints::resource::{DateRange, OrganizationScope};
use crate::error::ApiResult;
use serde_json::Value;

const SALES_PATH: &str = "api/1/reports/sales";
const PRODUCTS_PATH: &str = "api/1/reports/products";

/// Reports API interface
#[derive(Clone)]
pub struct ReportsApi {
    scope: OrganizationScope,
}

impl ReportsApi {
    /// Create a new reports API interface
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

    /// Sales report
    ///
    /// GET /api/1/reports/sales
    pub async fn sales(&self, range: &DateRange) -> ApiResult<Value> {
        self.scope.fetch(SALES_PATH, "sales report", Some(range)).await
    }

    /// Product sales report
    ///
    /// GET /api/1/reports/products
    pub async fn products(&self, range: &DateRange) -> ApiResult<Value> {
        self.scope
            .fetch(PRODUCTS_PATH, "products report", Some(range))
            .await
    }
}
