//! Smoke tests against a real iiko account
//!
//! Run with `--features integration` and `IIKO_API_KEY` set. Without a key
//! every test returns early.

#![cfg(feature = "integration")]

use iiko_api_client::{ClientConfig, DateRange, IikoClient};

fn live_client() -> Option<IikoClient> {
    let key = std::env::var("IIKO_API_KEY").ok()?;
    let mut config = ClientConfig::new(key);
    if let Ok(url) = std::env::var("IIKO_API_URL") {
        config = config.with_base_url(url);
    }
    if let Ok(org) = std::env::var("IIKO_ORGANIZATION_ID") {
        config = config.with_organization_id(org);
    }
    Some(IikoClient::new(config).expect("valid live configuration"))
}

#[tokio::test]
async fn test_live_connection() {
    let Some(client) = live_client() else { return };
    assert!(client.check_connection().await);
}

#[tokio::test]
async fn test_live_orders() {
    let Some(client) = live_client() else { return };
    if client.organization_id().is_none() {
        return;
    }
    client.orders().list(&DateRange::new()).await.unwrap();
}
