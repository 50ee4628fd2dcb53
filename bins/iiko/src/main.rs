//! iiko CLI
//!
//! Command-line access to the iiko restaurant management API. Credentials
//! and the default organization come from flags or `IIKO_*` variables.

use anyhow::Result;
use clap::{Parser, Subcommand};
use iiko_api_client::config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use iiko_api_client::{ApiError, ClientConfig, IikoClient};
use owo_colors::OwoColorize;
use std::process::ExitCode;
use std::time::Duration;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

use commands::auth::AuthCommand;
use commands::catalog::{
    DiscountsCommand, MenuCommand, OrganizationsCommand, StockCommand, TablesCommand,
};
use commands::guests::{CustomersCommand, ReservesCommand};
use commands::reports::ReportsCommand;
use commands::sales::{DeliveriesCommand, OrdersCommand, PaymentsCommand};
use commands::{auth, catalog, guests, reports, sales, status, OutputFormat};

/// Exit code for API and I/O failures
const EXIT_FAILURE: u8 = 1;

/// Exit code for missing or invalid configuration
const EXIT_CONFIGURATION: u8 = 3;

/// Command-line client for the iiko restaurant API
#[derive(Parser)]
#[command(name = "iiko")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// API key used as the bearer credential
    #[arg(long, global = true, env = "IIKO_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Access token; takes precedence over the API key
    #[arg(long, global = true, env = "IIKO_ACCESS_TOKEN", hide_env_values = true)]
    access_token: Option<String>,

    /// Default organization id for scoped commands
    #[arg(short, long, global = true, env = "IIKO_ORGANIZATION_ID")]
    organization: Option<String>,

    /// API base URL
    #[arg(long, global = true, env = "IIKO_API_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "IIKO_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT.as_secs())]
    timeout: u64,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that the API is reachable with the current credentials
    Status,

    /// Show API version metadata
    Info,

    /// Obtain access tokens
    Auth {
        #[command(subcommand)]
        command: AuthCommand,
    },

    /// Organizations visible to the credential
    Organizations {
        #[command(subcommand)]
        command: OrganizationsCommand,
    },

    /// Menu and product catalogue
    Menu {
        #[command(subcommand)]
        command: MenuCommand,
    },

    /// Orders
    Orders {
        #[command(subcommand)]
        command: OrdersCommand,
    },

    /// Customer base
    Customers {
        #[command(subcommand)]
        command: CustomersCommand,
    },

    /// Warehouses and stock balances
    Stock {
        #[command(subcommand)]
        command: StockCommand,
    },

    /// Delivery orders
    Deliveries {
        #[command(subcommand)]
        command: DeliveriesCommand,
    },

    /// Table reservations
    Reserves {
        #[command(subcommand)]
        command: ReservesCommand,
    },

    /// Tables and hall zones
    Tables {
        #[command(subcommand)]
        command: TablesCommand,
    },

    /// Payments
    Payments {
        #[command(subcommand)]
        command: PaymentsCommand,
    },

    /// Discounts and promotions
    Discounts {
        #[command(subcommand)]
        command: DiscountsCommand,
    },

    /// Sales reports
    Reports {
        #[command(subcommand)]
        command: ReportsCommand,
    },
}

impl Cli {
    fn client(&self) -> Result<IikoClient> {
        let mut config = ClientConfig::default()
            .with_base_url(&self.base_url)
            .with_timeout(Duration::from_secs(self.timeout));

        if let Some(key) = &self.api_key {
            config = config.with_api_key(key);
        }
        if let Some(token) = &self.access_token {
            config = config.with_access_token(token);
        }
        if let Some(org) = &self.organization {
            config = config.with_organization_id(org);
        }

        debug!(?config, "Building client");
        Ok(IikoClient::new(config)?)
    }
}

fn init_tracing(verbose: bool, format: OutputFormat) {
    let filter = if verbose {
        EnvFilter::new("iiko=debug,iiko_api_client=debug")
    } else if let Ok(filter) = EnvFilter::try_from_default_env() {
        filter
    } else {
        return;
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match format {
        OutputFormat::Json => builder.json().init(),
        OutputFormat::Text => builder.init(),
    }
}

async fn run(cli: Cli) -> Result<()> {
    let client = cli.client()?;
    let format = cli.format;

    match cli.command {
        Commands::Status => status::run(&client, format).await,
        Commands::Info => status::info(&client, format).await,
        Commands::Auth { command } => auth::run(&client, command, format).await,
        Commands::Organizations { command } => {
            catalog::organizations(&client, command, format).await
        }
        Commands::Menu { command } => catalog::menu(&client, command, format).await,
        Commands::Orders { command } => sales::orders(&client, command, format).await,
        Commands::Customers { command } => guests::customers(&client, command, format).await,
        Commands::Stock { command } => catalog::stock(&client, command, format).await,
        Commands::Deliveries { command } => sales::deliveries(&client, command, format).await,
        Commands::Reserves { command } => guests::reserves(&client, command, format).await,
        Commands::Tables { command } => catalog::tables(&client, command, format).await,
        Commands::Payments { command } => sales::payments(&client, command, format).await,
        Commands::Discounts { command } => catalog::discounts(&client, command, format).await,
        Commands::Reports { command } => reports::run(&client, command, format).await,
    }
}

fn exit_code(error: &anyhow::Error) -> u8 {
    match error.downcast_ref::<ApiError>() {
        Some(e) if e.is_configuration() => EXIT_CONFIGURATION,
        _ => EXIT_FAILURE,
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.format);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            ExitCode::from(exit_code(&e))
        }
    }
}
