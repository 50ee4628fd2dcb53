//! Endpoint-specific API implementations
//!
//! Each module provides a typed interface for one group of iiko endpoints.
//! Everything except `auth`, `organizations` and `info` is scoped to an
//! organization through [`OrganizationScope`].
//!
//! ## Mapping to the iiko REST API
//!
//! | Module | Paths | Description |
//! |--------|-------|-------------|
//! | `auth` | `api/1/auth/access_token`, `api/1/access_token` | Token exchange |
//! | `organizations` | `api/1/organizations` | Organizations visible to the credential |
//! | `menu` | `api/1/menu`, `api/1/products` | Menu and product catalogue |
//! | `orders` | `api/1/orders` | Order CRUD |
//! | `customers` | `api/1/customers` | Customer base |
//! | `stock` | `api/1/warehouses`, `api/1/stock` | Warehouses and balances |
//! | `deliveries` | `api/1/deliveries` | Delivery orders |
//! | `reserves` | `api/1/reserves` | Table reservations |
//! | `tables` | `api/1/tables`, `api/1/zones` | Hall layout |
//! | `payments` | `api/1/payments` | Payments |
//! | `discounts` | `api/1/discounts`, `api/1/promotions` | Loyalty |
//! | `reports` | `api/1/reports/*` | Sales reports |
//! | `info` | `api/1/info` | API version metadata |

pub mod auth;
pub mod customers;
pub mod deliveries;
pub mod discounts;
pub mod info;
pub mod menu;
pub mod orders;
pub mod organizations;
pub mod payments;
pub mod reports;
pub mod reserves;
pub mod resource;
pub mod stock;
pub mod tables;

pub use auth::{AuthApi, AuthResponse};
pub use customers::CustomersApi;
pub use deliveries::DeliveriesApi;
pub use discounts::DiscountsApi;
pub use info::InfoApi;
pub use menu::MenuApi;
pub use orders::OrdersApi;
pub use organizations::OrganizationsApi;
pub use payments::PaymentsApi;
pub use reports::ReportsApi;
pub use reserves::ReservesApi;
pub use resource::{DateRange, OrganizationScope, Resource};
pub use stock::StockApi;
pub use tables::TablesApi;
