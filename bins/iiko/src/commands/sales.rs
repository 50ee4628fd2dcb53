//! Orders, deliveries and payments

use crate::commands::{BodyArgs, OutputFormat, RangeArgs};
use crate::output::{self, report_done, report_saved};
use anyhow::Result;
use clap::Subcommand;
use iiko_api_client::IikoClient;

#[derive(Debug, Subcommand)]
pub enum OrdersCommand {
    /// List orders
    List(RangeArgs),
    /// Show one order
    Get {
        /// Order id
        id: String,
    },
    /// Create an order from a JSON file
    Create(BodyArgs),
    /// Update an order from a JSON file
    Update {
        /// Order id
        id: String,
        #[command(flatten)]
        body: BodyArgs,
    },
    /// Delete an order
    Delete {
        /// Order id
        id: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum DeliveriesCommand {
    /// List deliveries
    List(RangeArgs),
    /// Show one delivery
    Get {
        /// Delivery id
        id: String,
    },
    /// Create a delivery from a JSON file
    Create(BodyArgs),
    /// Update a delivery from a JSON file
    Update {
        /// Delivery id
        id: String,
        #[command(flatten)]
        body: BodyArgs,
    },
}

#[derive(Debug, Subcommand)]
pub enum PaymentsCommand {
    /// List payments
    List(RangeArgs),
    /// Show one payment
    Get {
        /// Payment id
        id: String,
    },
    /// Register a payment from a JSON file
    Create(BodyArgs),
}

pub async fn orders(client: &IikoClient, command: OrdersCommand, format: OutputFormat) -> Result<()> {
    let api = client.orders();
    match command {
        OrdersCommand::List(range) => output::print_typed(
            "Orders",
            &api.list(&range.range()?).await?,
            format,
            output::order_line,
        ),
        OrdersCommand::Get { id } => {
            output::print_value(&format!("Order {id}"), &api.get(&id).await?, format)
        }
        OrdersCommand::Create(body) => {
            report_saved("Created", "order", &api.create(&body.load()?).await?, format)
        }
        OrdersCommand::Update { id, body } => {
            report_saved("Updated", "order", &api.update(&id, &body.load()?).await?, format)
        }
        OrdersCommand::Delete { id } => {
            let deleted = api.delete(&id).await?;
            report_done("Deleted", "order", &id, deleted, format)
        }
    }
}

pub async fn deliveries(
    client: &IikoClient,
    command: DeliveriesCommand,
    format: OutputFormat,
) -> Result<()> {
    let api = client.deliveries();
    match command {
        DeliveriesCommand::List(range) => {
            output::print_list("Deliveries", &api.list(&range.range()?).await?, format)
        }
        DeliveriesCommand::Get { id } => {
            output::print_value(&format!("Delivery {id}"), &api.get(&id).await?, format)
        }
        DeliveriesCommand::Create(body) => {
            report_saved("Created", "delivery", &api.create(&body.load()?).await?, format)
        }
        DeliveriesCommand::Update { id, body } => {
            report_saved("Updated", "delivery", &api.update(&id, &body.load()?).await?, format)
        }
    }
}

pub async fn payments(
    client: &IikoClient,
    command: PaymentsCommand,
    format: OutputFormat,
) -> Result<()> {
    let api = client.payments();
    match command {
        PaymentsCommand::List(range) => {
            output::print_list("Payments", &api.list(&range.range()?).await?, format)
        }
        PaymentsCommand::Get { id } => {
            output::print_value(&format!("Payment {id}"), &api.get(&id).await?, format)
        }
        PaymentsCommand::Create(body) => {
            report_saved("Created", "payment", &api.create(&body.load()?).await?, format)
        }
    }
}
