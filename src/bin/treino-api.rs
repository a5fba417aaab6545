// ABOUTME: Server binary for the Treino workout plan API
// ABOUTME: Parses CLI overrides, initialises logging and serves HTTP until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Treino API Contributors

//! # Treino API Server Binary

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};
use treino_api::{config::ServerConfig, logging, server};

#[derive(Parser)]
#[command(name = "treino-api")]
#[command(about = "Treino API - workout plans generated from a student profile")]
pub struct Args {
    /// Override bind address
    #[arg(long)]
    host: Option<String>,

    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    info!("{}", config.summary());
    info!("Endpoints:");
    info!("   Status:         GET  http://{}/", config.bind_address());
    info!("   Health:         GET  http://{}/health", config.bind_address());
    info!("   Models:         GET  http://{}/models", config.bind_address());
    info!("   Generate plan:  POST http://{}/gerar-treino", config.bind_address());

    if let Err(e) = server::serve(config).await {
        error!("Server error: {e:#}");
        return Err(e);
    }

    Ok(())
}
