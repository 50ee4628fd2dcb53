//! Connection check and API info commands

use crate::commands::OutputFormat;
use crate::output::{self, Status};
use anyhow::{Context, Result};
use iiko_api_client::{ConnectionStatus, IikoClient};
use serde_json::json;

/// Probe the API and report whether it is reachable
pub async fn run(client: &IikoClient, format: OutputFormat) -> Result<()> {
    let status = client.connection_status().await;

    if format == OutputFormat::Json {
        let error = match &status {
            ConnectionStatus::Connected => None,
            ConnectionStatus::NotConfigured(e) | ConnectionStatus::Unreachable(e) => {
                Some(e.to_string())
            }
        };
        output::print_json(&json!({
            "connected": status.is_connected(),
            "baseUrl": client.base_url(),
            "organizationId": client.organization_id(),
            "error": error,
        }))?;
    }

    match status {
        ConnectionStatus::Connected => {
            if format == OutputFormat::Text {
                Status::success(&format!("Connected to {}", client.base_url()));
                if let Some(org) = client.organization_id() {
                    println!("  Organization: {org}");
                }
            }
            Ok(())
        }
        ConnectionStatus::NotConfigured(e) => Err(e).context("Client is not configured"),
        ConnectionStatus::Unreachable(e) => {
            Err(e).with_context(|| format!("Cannot reach {}", client.base_url()))
        }
    }
}

/// Show API version metadata
pub async fn info(client: &IikoClient, format: OutputFormat) -> Result<()> {
    let info = client.info().get().await?;
    output::print_value("API info", &info, format)
}
