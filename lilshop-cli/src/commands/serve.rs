//! HTTP server command
//!
//! Resolves settings flag > environment > config file, runs migrations,
//! then serves until shutdown.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use lilshop_core::ShopConfig;
use lilshop_server::db::{create_pool, migrations};
use lilshop_server::http::{run_server, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default from config, 127.0.0.1:3030)
    #[arg(long, short = 'b')]
    pub bind: Option<SocketAddr>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Database URL (overrides config/environment)
    #[arg(long, env = "LILSHOP_DB")]
    pub database_url: Option<String>,

    /// Directory holding the dashboard frontend
    #[arg(long)]
    pub assets: Option<PathBuf>,
}

/// Run the HTTP server
pub async fn run(args: ServeArgs) -> Result<()> {
    let config = ShopConfig::load_or_default().context("Failed to load config")?;

    let bind_addr = match args.bind {
        Some(addr) => addr,
        None => config
            .server
            .bind
            .parse()
            .with_context(|| format!("Invalid bind address '{}' in config", config.server.bind))?,
    };

    let database_url = args.database_url.unwrap_or(config.database.url);

    tracing::info!("Starting lilshop server on {}", bind_addr);

    // Create database pool and bring the schema up to date
    let pool = create_pool(&database_url)
        .await
        .context("Failed to create database pool")?;
    migrations::run(&pool)
        .await
        .context("Failed to run migrations")?;

    let server_config = ServerConfig {
        bind_addr,
        cors_permissive: args.cors_permissive || config.server.cors_permissive,
        assets_dir: args.assets.unwrap_or(config.assets.dir),
    };

    // Run server (blocks until shutdown)
    run_server(pool, server_config).await.context("Server error")?;

    Ok(())
}
