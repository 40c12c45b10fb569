use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use client::{Clients, FileStorage, TokenStore, TracingNotifier};
use common::{ClientConfig, ClientError};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod cli;
mod home;
mod login;

use crate::cli::{Cli, Command};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    let config = ClientConfig::from_env().context("Failed to load client configuration")?;
    info!("Using API at {}", config.api_url);

    let store = TokenStore::new(FileStorage::new(&config.token_storage_path));
    let clients = Clients::from_config(&config, store, Arc::new(TracingNotifier))
        .context("Failed to build HTTP clients")?;

    match run(cli.command, &clients).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(error) => match error
            .downcast_ref::<ClientError>()
            .and_then(ClientError::redirect_target)
        {
            Some(target) => {
                warn!("Session expired, redirecting to {}", target);
                Ok(ExitCode::FAILURE)
            }
            None => Err(error),
        },
    }
}

async fn run(command: Command, clients: &Clients) -> Result<()> {
    match command {
        Command::Login { id, pw } => login::login(clients, &id, &pw).await?,
        Command::Logout => {
            clients.auth().logout();
            println!("로그아웃되었습니다");
        }
        Command::Home => home::show(clients).await?,
    }
    Ok(())
}
