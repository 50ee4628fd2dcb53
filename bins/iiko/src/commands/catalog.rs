//! Read-only reference data: organizations, menu, stock, hall layout, loyalty

use crate::commands::OutputFormat;
use crate::output;
use anyhow::Result;
use clap::Subcommand;
use iiko_api_client::IikoClient;

#[derive(Debug, Subcommand)]
pub enum OrganizationsCommand {
    /// List organizations visible to the API key
    List,
    /// Show one organization
    Get {
        /// Organization id
        id: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum MenuCommand {
    /// List menu items
    Items,
    /// List the product catalogue
    Products,
    /// Show one product
    Product {
        /// Product id
        id: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum StockCommand {
    /// List warehouses
    Warehouses,
    /// Show stock balances
    Balances {
        /// Only this warehouse
        #[arg(short, long)]
        warehouse: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
pub enum TablesCommand {
    /// List tables
    List,
    /// List hall zones
    Zones,
}

#[derive(Debug, Subcommand)]
pub enum DiscountsCommand {
    /// List discounts
    List,
    /// List promotions
    Promotions,
}

pub async fn organizations(
    client: &IikoClient,
    command: OrganizationsCommand,
    format: OutputFormat,
) -> Result<()> {
    let api = client.organizations();
    match command {
        OrganizationsCommand::List => output::print_typed(
            "Organizations",
            &api.list().await?,
            format,
            output::organization_line,
        ),
        OrganizationsCommand::Get { id } => {
            output::print_value(&format!("Organization {id}"), &api.get(&id).await?, format)
        }
    }
}

pub async fn menu(client: &IikoClient, command: MenuCommand, format: OutputFormat) -> Result<()> {
    let api = client.menu();
    match command {
        MenuCommand::Items => output::print_list("Menu", &api.menu().await?, format),
        MenuCommand::Products => output::print_list("Products", &api.products().await?, format),
        MenuCommand::Product { id } => {
            output::print_value(&format!("Product {id}"), &api.product(&id).await?, format)
        }
    }
}

pub async fn stock(client: &IikoClient, command: StockCommand, format: OutputFormat) -> Result<()> {
    let api = client.stock();
    match command {
        StockCommand::Warehouses => output::print_list("Warehouses", &api.warehouses().await?, format),
        StockCommand::Balances { warehouse } => {
            let title = match &warehouse {
                Some(id) => format!("Stock in {id}"),
                None => "Stock".to_string(),
            };
            output::print_list(&title, &api.stock(warehouse.as_deref()).await?, format)
        }
    }
}

pub async fn tables(client: &IikoClient, command: TablesCommand, format: OutputFormat) -> Result<()> {
    let api = client.tables();
    match command {
        TablesCommand::List => output::print_list("Tables", &api.tables().await?, format),
        TablesCommand::Zones => output::print_list("Zones", &api.zones().await?, format),
    }
}

pub async fn discounts(
    client: &IikoClient,
    command: DiscountsCommand,
    format: OutputFormat,
) -> Result<()> {
    let api = client.discounts();
    match command {
        DiscountsCommand::List => output::print_list("Discounts", &api.discounts().await?, format),
        DiscountsCommand::Promotions => {
            output::print_list("Promotions", &api.promotions().await?, format)
        }
    }
}
