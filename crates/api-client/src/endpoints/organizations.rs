//! Organization endpoints
//!
//! These are the only resource calls that need no organization id.

use crate::client::IikoClient;
use crate::endpoints::resource::{unwrap_collection, ORGANIZATIONS};
use crate::error::ApiResult;
use serde_json::Value;
use tracing::error;

/// Organizations API interface
#[derive(Clone)]
pub struct OrganizationsApi {
    client: IikoClient,
}

impl OrganizationsApi {
    /// Create a new organizations API interface
    pub(crate) fn new(client: IikoClient) -> Self {
        Self { client }
    }

    /// List organizations available to the credential
    ///
    /// GET /api/1/organizations
    pub async fn list(&self) -> ApiResult<Vec<Value>> {
        self.client
            .get(ORGANIZATIONS.path, &[])
            .await
            .and_then(|response| unwrap_collection(response, ORGANIZATIONS.collection))
            .inspect_err(|e| error!(error = %e, "Failed to list organizations"))
    }

    /// Get one organization
    ///
    /// GET /api/1/organizations/{id}
    pub async fn get(&self, id: &str) -> ApiResult<Value> {
        self.client.config().bearer()?;
        let path = ORGANIZATIONS.item_path(id)?;
        self.client
            .get(&path, &[])
            .await
            .inspect_err(|e| error!(id, error = %e, "Failed to get organization"))
    }
}
