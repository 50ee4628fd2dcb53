//! Typed views over iiko responses
//!
//! Facades return raw [`Value`]s. Callers who want structure decode them
//! with [`decode`]. Each view keeps fields it does not name in `extra`.

use crate::error::{ApiError, ApiResult};
use chrono::{DateTime, NaiveDate, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Decode a raw response into a typed view
///
/// # Errors
///
/// Returns [`ApiError::Validation`] when the value does not fit `T`.
pub fn decode<T: DeserializeOwned>(value: Value) -> ApiResult<T> {
    serde_json::from_value(value)
        .map_err(|e| ApiError::validation(format!("Unexpected response shape: {e}")))
}

/// Decode every element of a list response
///
/// # Errors
///
/// Fails on the first element that does not fit `T`.
pub fn decode_all<T: DeserializeOwned>(values: Vec<Value>) -> ApiResult<Vec<T>> {
    values.into_iter().map(decode).collect()
}

/// Restaurant, cafe or other organization
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    /// Organization id
    pub id: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Organization kind, e.g. `Restaurant`
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Street address
    #[serde(default)]
    pub address: Option<String>,
    /// Contact phone
    #[serde(default)]
    pub phone: Option<String>,
    /// Contact email
    #[serde(default)]
    pub email: Option<String>,
    /// IANA time zone name
    #[serde(default)]
    pub time_zone: Option<String>,
    /// ISO currency code
    #[serde(default)]
    pub currency: Option<String>,
    /// Whether the organization accepts orders
    #[serde(default)]
    pub is_active: bool,
    /// Unmodelled fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Modifier attached to a product or order line
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Modifier {
    /// Modifier id
    pub id: String,
    /// Name
    #[serde(default)]
    pub name: Option<String>,
    /// Amount
    #[serde(default)]
    pub amount: Option<f64>,
    /// Price
    #[serde(default)]
    pub price: Option<f64>,
    /// Unmodelled fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Nutrition facts per portion
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionalInfo {
    /// kcal
    #[serde(default)]
    pub calories: f64,
    /// grams
    #[serde(default)]
    pub proteins: f64,
    /// grams
    #[serde(default)]
    pub fats: f64,
    /// grams
    #[serde(default)]
    pub carbohydrates: f64,
}

/// Menu item or catalogue product
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Product id
    pub id: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Free-form description
    #[serde(default)]
    pub description: Option<String>,
    /// Sale price
    #[serde(default)]
    pub price: Option<f64>,
    /// Cost price, only on catalogue entries
    #[serde(default)]
    pub cost_price: Option<f64>,
    /// Menu category
    #[serde(default)]
    pub category: Option<String>,
    /// Menu items report `isAvailable`
    #[serde(default)]
    pub is_available: Option<bool>,
    /// Catalogue entries report `isActive`
    #[serde(default)]
    pub is_active: Option<bool>,
    /// Picture URL
    #[serde(default)]
    pub image_url: Option<String>,
    /// Available modifiers
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
    /// Nutrition facts
    #[serde(default)]
    pub nutritional_info: Option<NutritionalInfo>,
    /// Unmodelled fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Order lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    /// Accepted, not started
    New,
    /// Being cooked
    InProgress,
    /// Cooked, waiting for pickup or courier
    Ready,
    /// With the courier
    Delivering,
    /// Paid and closed
    Closed,
    /// Cancelled
    Cancelled,
    /// Any status this crate does not know
    #[serde(other)]
    Unknown,
}

impl OrderStatus {
    /// Whether no further transitions are expected
    #[must_use]
    pub fn is_final(self) -> bool {
        matches!(self, Self::Closed | Self::Cancelled)
    }
}

/// Delivery address with optional coordinates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryPoint {
    /// Street address
    pub address: String,
    /// Latitude
    #[serde(default)]
    pub latitude: Option<f64>,
    /// Longitude
    #[serde(default)]
    pub longitude: Option<f64>,
}

/// One line of an order
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// Line id, absent on requests
    #[serde(default)]
    pub id: Option<String>,
    /// Ordered product
    pub product_id: String,
    /// Product name
    #[serde(default)]
    pub product_name: Option<String>,
    /// Quantity
    pub amount: f64,
    /// Price
    #[serde(default)]
    pub price: Option<f64>,
    /// `amount * price` as computed by the server
    #[serde(default)]
    pub sum: Option<f64>,
    /// Modifiers
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
}

/// Order as returned by the orders endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Order id
    pub id: String,
    /// Human-facing order number
    #[serde(default)]
    pub number: Option<String>,
    /// Lifecycle state
    pub status: OrderStatus,
    /// Order lines; list responses omit them
    #[serde(default)]
    pub items: Vec<OrderItem>,
    /// Customer phone
    #[serde(default)]
    pub customer_phone: Option<String>,
    /// Customer name
    #[serde(default)]
    pub customer_name: Option<String>,
    /// Where to deliver
    #[serde(default)]
    pub delivery_point: Option<DeliveryPoint>,
    /// `Delivery`, `Takeaway`, ...
    #[serde(default)]
    pub delivery_type: Option<String>,
    /// `Card`, `Cash`, ...
    #[serde(default)]
    pub payment_type: Option<String>,
    /// Order total
    #[serde(default)]
    pub sum: Option<f64>,
    /// Comment
    #[serde(default)]
    pub comment: Option<String>,
    /// Created date
    #[serde(default)]
    pub created_date: Option<DateTime<Utc>>,
    /// Estimated delivery time
    #[serde(default)]
    pub estimated_delivery_time: Option<DateTime<Utc>>,
    /// Unmodelled fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Loyalty customer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Customer id
    pub id: String,
    /// Name
    #[serde(default)]
    pub name: Option<String>,
    /// Phone
    #[serde(default)]
    pub phone: Option<String>,
    /// Email
    #[serde(default)]
    pub email: Option<String>,
    /// Birth date
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    /// Number of orders placed
    #[serde(default)]
    pub total_orders: u32,
    /// Lifetime spend
    #[serde(default)]
    pub total_spent: f64,
    /// Last visit date
    #[serde(default)]
    pub last_visit_date: Option<DateTime<Utc>>,
    /// Unmodelled fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Delivery of an order
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Delivery {
    /// Delivery id
    pub id: String,
    /// Delivered order
    #[serde(default)]
    pub order_id: Option<String>,
    /// Server-side status string
    #[serde(default)]
    pub status: Option<String>,
    /// Delivery point
    #[serde(default)]
    pub delivery_point: Option<DeliveryPoint>,
    /// Estimated delivery time
    #[serde(default)]
    pub estimated_delivery_time: Option<DateTime<Utc>>,
    /// Set once delivered
    #[serde(default)]
    pub actual_delivery_time: Option<DateTime<Utc>>,
    /// Created date
    #[serde(default)]
    pub created_date: Option<DateTime<Utc>>,
    /// Unmodelled fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Table reservation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reserve {
    /// Reservation id
    pub id: String,
    /// Table id
    #[serde(default)]
    pub table_id: Option<String>,
    /// Table name
    #[serde(default)]
    pub table_name: Option<String>,
    /// Customer name
    #[serde(default)]
    pub customer_name: Option<String>,
    /// Customer phone
    #[serde(default)]
    pub customer_phone: Option<String>,
    /// Party size
    #[serde(default)]
    pub guests_count: u32,
    /// Booked slot
    #[serde(default)]
    pub reservation_date: Option<DateTime<Utc>>,
    /// `Confirmed`, `Cancelled`, ...
    #[serde(default)]
    pub status: Option<String>,
    /// Unmodelled fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Payment against an order
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    /// Payment id
    pub id: String,
    /// Order id
    #[serde(default)]
    pub order_id: Option<String>,
    /// Paid amount
    #[serde(default)]
    pub amount: f64,
    /// Payment type
    #[serde(default)]
    pub payment_type: Option<String>,
    /// Card scheme or similar
    #[serde(default)]
    pub payment_method: Option<String>,
    /// Status
    #[serde(default)]
    pub status: Option<String>,
    /// Created date
    #[serde(default)]
    pub created_date: Option<DateTime<Utc>>,
    /// Completed date
    #[serde(default)]
    pub completed_date: Option<DateTime<Utc>>,
    /// Unmodelled fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Table in a hall zone
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    /// Table id
    pub id: String,
    /// Name
    #[serde(default)]
    pub name: Option<String>,
    /// Zone id
    #[serde(default)]
    pub zone_id: Option<String>,
    /// Number of seats
    #[serde(default)]
    pub seats_count: u32,
    /// Is active
    #[serde(default)]
    pub is_active: bool,
    /// `Available`, `Reserved`, ...
    #[serde(default)]
    pub status: Option<String>,
    /// Unmodelled fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Hall zone
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Zone {
    /// Zone id
    pub id: String,
    /// Name
    #[serde(default)]
    pub name: Option<String>,
    /// Description
    #[serde(default)]
    pub description: Option<String>,
    /// Is active
    #[serde(default)]
    pub is_active: bool,
    /// Number of tables in the zone
    #[serde(default)]
    pub tables_count: u32,
    /// Unmodelled fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
