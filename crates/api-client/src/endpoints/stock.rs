//! Warehouse and stock endpoints

use crate::client::IikoClient;
use crate::endpoints::resource::{OrganizationScope, STOCK, WAREHOUSES};
use crate::error::ApiResult;
use serde_json::Value;

/// Stock API interface
#[derive(Clone)]
pub struct StockApi {
    scope: OrganizationScope,
}

impl StockApi {
    /// Create a new stock API interface
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

    /// List warehouses
    ///
    /// GET /api/1/warehouses
    pub async fn warehouses(&self) -> ApiResult<Vec<Value>> {
        self.scope.list(&WAREHOUSES, None, &[]).await
    }

    /// Stock balances, optionally for one warehouse
    ///
    /// GET /api/1/stock?warehouseId=<id>
    pub async fn stock(&self, warehouse_id: Option<&str>) -> ApiResult<Vec<Value>> {
        match warehouse_id {
            Some(id) => {
                self.scope
                    .list(&STOCK, None, &[("warehouseId", id.to_string())])
                    .await
            }
            None => self.scope.list(&STOCK, None, &[]).await,
        }
    }
}
