//! Sales reports

use crate::commands::{OutputFormat, RangeArgs};
use crate::output;
use anyhow::Result;
use clap::Subcommand;
use iiko_api_client::IikoClient;

#[derive(Debug, Subcommand)]
pub enum ReportsCommand {
    /// Revenue summary
    Sales(RangeArgs),
    /// Best-selling products
    Products(RangeArgs),
}

pub async fn run(client: &IikoClient, command: ReportsCommand, format: OutputFormat) -> Result<()> {
    let api = client.reports();
    match command {
        ReportsCommand::Sales(range) => {
            output::print_value("Sales report", &api.sales(&range.range()?).await?, format)
        }
        ReportsCommand::Products(range) => {
            output::print_value("Products report", &api.products(&range.range()?).await?, format)
        }
    }
}
