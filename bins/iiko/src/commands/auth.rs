//! Token exchange commands

use crate::commands::OutputFormat;
use crate::output::{self, Status};
use anyhow::Result;
use clap::Subcommand;
use iiko_api_client::endpoints::AuthResponse;
use iiko_api_client::IikoClient;
use owo_colors::OwoColorize;

#[derive(Debug, Subcommand)]
pub enum AuthCommand {
    /// Exchange a login and password for an access token
    Login {
        /// Account login
        login: String,

        /// Account password
        #[arg(long, env = "IIKO_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Exchange an iiko Cloud API login for an access token
    ApiLogin {
        /// API login issued in iikoWeb
        api_login: String,
    },
}

pub async fn run(client: &IikoClient, command: AuthCommand, format: OutputFormat) -> Result<()> {
    let response = match command {
        AuthCommand::Login { login, password } => {
            client.auth().authenticate(&login, &password).await?
        }
        AuthCommand::ApiLogin { api_login } => client.auth().access_token(&api_login).await?,
    };
    render(&response, format)
}

fn render(response: &AuthResponse, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        return output::print_json(&serde_json::to_value(response)?);
    }

    match response.token.as_deref() {
        Some(token) => {
            Status::success("Access token issued");
            println!("  Token:   {token}");
            if let Some(expires) = &response.expires {
                println!("  Expires: {}", expires.dimmed());
            }
        }
        None => Status::warning("Response carried no token"),
    }
    Ok(())
}
