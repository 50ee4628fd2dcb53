//! Customers and table reservations

use crate::commands::{BodyArgs, OutputFormat, RangeArgs};
use crate::output::{self, report_done, report_saved};
use anyhow::Result;
use clap::Subcommand;
use iiko_api_client::IikoClient;

#[derive(Debug, Subcommand)]
pub enum CustomersCommand {
    /// List customers
    List,
    /// Show one customer
    Get {
        /// Customer id
        id: String,
    },
    /// Register a customer from a JSON file
    Create(BodyArgs),
    /// Update a customer from a JSON file
    Update {
        /// Customer id
        id: String,
        #[command(flatten)]
        body: BodyArgs,
    },
}

#[derive(Debug, Subcommand)]
pub enum ReservesCommand {
    /// List reservations
    List(RangeArgs),
    /// Show one reservation
    Get {
        /// Reservation id
        id: String,
    },
    /// Book a table from a JSON file
    Create(BodyArgs),
    /// Change a reservation from a JSON file
    Update {
        /// Reservation id
        id: String,
        #[command(flatten)]
        body: BodyArgs,
    },
    /// Cancel a reservation
    Cancel {
        /// Reservation id
        id: String,
    },
}

pub async fn customers(
    client: &IikoClient,
    command: CustomersCommand,
    format: OutputFormat,
) -> Result<()> {
    let api = client.customers();
    match command {
        CustomersCommand::List => output::print_list("Customers", &api.list().await?, format),
        CustomersCommand::Get { id } => {
            output::print_value(&format!("Customer {id}"), &api.get(&id).await?, format)
        }
        CustomersCommand::Create(body) => {
            report_saved("Created", "customer", &api.create(&body.load()?).await?, format)
        }
        CustomersCommand::Update { id, body } => {
            report_saved("Updated", "customer", &api.update(&id, &body.load()?).await?, format)
        }
    }
}

pub async fn reserves(
    client: &IikoClient,
    command: ReservesCommand,
    format: OutputFormat,
) -> Result<()> {
    let api = client.reserves();
    match command {
        ReservesCommand::List(range) => {
            output::print_list("Reservations", &api.list(&range.range()?).await?, format)
        }
        ReservesCommand::Get { id } => {
            output::print_value(&format!("Reservation {id}"), &api.get(&id).await?, format)
        }
        ReservesCommand::Create(body) => {
            report_saved("Created", "reservation", &api.create(&body.load()?).await?, format)
        }
        ReservesCommand::Update { id, body } => {
            report_saved("Updated", "reservation", &api.update(&id, &body.load()?).await?, format)
        }
        ReservesCommand::Cancel { id } => {
            let cancelled = api.cancel(&id).await?;
            report_done("Cancelled", "reservation", &id, cancelled, format)
        }
    }
}
