//! Async client for the iiko restaurant management REST API
//!
//! This crate wraps the iiko Cloud API (`/api/1/...`) behind one
//! [`IikoClient`] that hands out a facade per resource group: organizations,
//! menu, orders, customers, stock, deliveries, reserves, tables, payments,
//! discounts, reports and API info.
//!
//! # Features
//!
//! - **Immutable configuration**: API key, access token and default
//!   organization live in a [`ClientConfig`] value
//! - **Organization scoping**: every scoped call carries `organizationId`,
//!   either the client default or a per-facade override
//! - **Typed errors**: configuration, authentication, validation and HTTP
//!   status failures are distinct [`ApiError`] variants
//! - **Request correlation**: each request carries an `X-Request-ID`
//!
//! # Example
//!
//! ```rust,no_run
//! use iiko_api_client::{ClientConfig, DateRange, IikoClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = IikoClient::new(
//!         ClientConfig::new("my-api-key").with_organization_id("org-uuid"),
//!     )?;
//!
//!     if !client.check_connection().await {
//!         eprintln!("iiko API unreachable");
//!         return Ok(());
//!     }
//!
//!     let orders = client.orders().list(&DateRange::new()).await?;
//!     println!("{} orders", orders.len());
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod models;

pub use client::{ConnectionStatus, IikoClient};
pub use config::ClientConfig;
pub use endpoints::DateRange;
pub use error::{status_description, ApiError, ApiResult};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::client::{ConnectionStatus, IikoClient};
    pub use crate::config::ClientConfig;
    pub use crate::endpoints::{
        AuthApi, CustomersApi, DateRange, DeliveriesApi, DiscountsApi, InfoApi, MenuApi,
        OrdersApi, OrganizationsApi, PaymentsApi, ReportsApi, ReservesApi, StockApi, TablesApi,
    };
    pub use crate::error::{ApiError, ApiResult};
    pub use crate::models::decode;
}
