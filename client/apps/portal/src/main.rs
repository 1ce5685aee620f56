//! Portal CLI Entry Point
//!
//! Wires configuration, logging and the gateways, then runs one command.
//! Uses `anyhow` for startup errors, but library errors stay typed
//! (`AuthError`, `ContentError`, `kernel::error::AppError`).

mod cli;

use std::sync::Arc;

use auth::{AuthConfig, AuthGateway, SupabaseIdentityProvider, SupabaseProfileRepository};
use clap::Parser;
use content::{ContentConfig, ContentGateway, SupabaseContentSource};
use platform::{ServiceClient, ServiceConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Gateways};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing; stdout carries command output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "portal=info,auth=info,content=info,platform=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    // Missing configuration is fatal
    let config = ServiceConfig::from_env()?;
    tracing::info!(url = config.base_url(), "Hosted service configured");

    let client = Arc::new(ServiceClient::new(config)?);

    let gateways = Gateways {
        content: ContentGateway::new(
            Arc::new(SupabaseContentSource::new(client.clone())),
            ContentConfig::default(),
        ),
        auth: Arc::new(AuthGateway::new(
            Arc::new(SupabaseIdentityProvider::new(client.clone())),
            Arc::new(SupabaseProfileRepository::new(client)),
            AuthConfig::default(),
        )),
    };

    cli::run(cli.command, &gateways).await
}
