//! Terminal output utilities
//!
//! Every command renders through here so `--format json` stays machine
//! readable and text output stays consistent.

use crate::commands::OutputFormat;
use anyhow::Result;
use iiko_api_client::models::{decode_all, Order, Organization};
use owo_colors::OwoColorize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Fields tried, in order, to label a record in a one-line summary
const LABEL_FIELDS: &[&str] = &[
    "name",
    "number",
    "productName",
    "customerName",
    "tableName",
    "status",
];

/// Status message helpers
pub struct Status;

impl Status {
    /// Print a success message
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Print a warning message
    pub fn warning(message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print a header
    pub fn header(message: &str) {
        println!();
        println!("{}", message.bold());
        println!("{}", "─".repeat(message.chars().count()));
    }
}

/// Id of a record, falling back to `productId` for stock rows
pub fn record_id(item: &Value) -> &str {
    item.get("id")
        .or_else(|| item.get("productId"))
        .and_then(Value::as_str)
        .unwrap_or("-")
}

/// One-line description of a record: its id and the first label found
pub fn summary(item: &Value) -> String {
    let id = record_id(item);
    let label = LABEL_FIELDS
        .iter()
        .find_map(|field| item.get(*field).and_then(scalar));

    match label {
        Some(label) => format!("{id}  {label}"),
        None => id.to_string(),
    }
}

fn scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// One-line description of an organization
pub fn organization_line(org: &Organization) -> String {
    let mut line = if org.name.is_empty() {
        org.id.clone()
    } else {
        format!("{}  {}", org.id, org.name)
    };
    if let Some(currency) = &org.currency {
        line.push_str(&format!(" [{currency}]"));
    }
    line
}

/// One-line description of an order: id, number, status and total
pub fn order_line(order: &Order) -> String {
    let mut line = format!(
        "{}  #{}  {:?}",
        order.id,
        order.number.as_deref().unwrap_or("-"),
        order.status
    );
    if let Some(sum) = order.sum {
        line.push_str(&format!("  {sum:.2}"));
    }
    line
}

/// Format a count with singular/plural
pub fn format_count(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

/// Print a value as pretty JSON
pub fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a list response
pub fn print_list(title: &str, items: &[Value], format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(&Value::Array(items.to_vec()));
    }

    Status::header(title);
    if items.is_empty() {
        println!("  {}", "(none)".dimmed());
    }
    for item in items {
        println!("  {}", summary(item));
    }
    println!();
    println!("{}", format_count(items.len(), "record", "records").dimmed());
    Ok(())
}

/// Print a list response through a typed view
///
/// Text output falls back to [`print_list`] when any item does not fit `T`.
pub fn print_typed<T: DeserializeOwned>(
    title: &str,
    items: &[Value],
    format: OutputFormat,
    line: impl Fn(&T) -> String,
) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(&Value::Array(items.to_vec()));
    }
    let Ok(typed) = decode_all::<T>(items.to_vec()) else {
        return print_list(title, items, format);
    };

    Status::header(title);
    if typed.is_empty() {
        println!("  {}", "(none)".dimmed());
    }
    for item in &typed {
        println!("  {}", line(item));
    }
    println!();
    println!("{}", format_count(typed.len(), "record", "records").dimmed());
    Ok(())
}

/// Print a single object response
pub fn print_value(title: &str, value: &Value, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Text {
        Status::header(title);
    }
    print_json(value)
}

/// Print the result of a create or update call
pub fn report_saved(
    action: &str,
    label: &str,
    saved: &Value,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(saved),
        OutputFormat::Text => {
            Status::success(&format!("{action} {label} {}", record_id(saved)));
            Ok(())
        }
    }
}

/// Print the result of a delete or cancel call
pub fn report_done(
    action: &str,
    label: &str,
    id: &str,
    done: bool,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let mut result = Map::new();
            result.insert("id".to_string(), Value::from(id));
            result.insert(action.to_lowercase(), Value::Bool(done));
            print_json(&Value::Object(result))
        }
        OutputFormat::Text => {
            Status::success(&format!("{action} {label} {id}"));
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_summary_prefers_name() {
        let item = json!({"id": "org-1", "name": "Tbilisi", "status": "Open"});
        assert_eq!(summary(&item), "org-1  Tbilisi");
    }

    #[test]
    fn test_summary_falls_back_to_status() {
        let item = json!({"id": "del-1", "name": "", "status": "OnWay"});
        assert_eq!(summary(&item), "del-1  OnWay");
    }

    #[test]
    fn test_summary_stock_row() {
        let item = json!({"productId": "prod-001", "productName": "Khinkali", "amount": 40});
        assert_eq!(summary(&item), "prod-001  Khinkali");
    }

    #[test]
    fn test_summary_without_label() {
        assert_eq!(summary(&json!({"id": "x"})), "x");
        assert_eq!(summary(&json!({})), "-");
    }

    #[test]
    fn test_organization_line() {
        let org: Organization =
            serde_json::from_value(json!({"id": "A", "name": "Tbilisi", "currency": "GEL"})).unwrap();
        assert_eq!(organization_line(&org), "A  Tbilisi [GEL]");

        let org: Organization = serde_json::from_value(json!({"id": "B"})).unwrap();
        assert_eq!(organization_line(&org), "B");
    }

    #[test]
    fn test_order_line() {
        let order: Order = serde_json::from_value(json!({
            "id": "order-12345",
            "number": "42",
            "status": "InProgress",
            "sum": 24.5
        }))
        .unwrap();
        assert_eq!(order_line(&order), "order-12345  #42  InProgress  24.50");

        let order: Order =
            serde_json::from_value(json!({"id": "o2", "status": "Refunded"})).unwrap();
        assert_eq!(order_line(&order), "o2  #-  Unknown");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(1, "record", "records"), "1 record");
        assert_eq!(format_count(3, "record", "records"), "3 records");
    }
}
