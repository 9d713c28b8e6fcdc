//! Database initialization command

use anyhow::{Context, Result};
use clap::Parser;

use lilshop_core::ShopConfig;
use lilshop_server::db::{create_pool, migrations};

/// Arguments for the init-db command
#[derive(Parser, Debug)]
pub struct InitDbArgs {
    /// Database URL (overrides config/environment)
    #[arg(long, env = "LILSHOP_DB")]
    pub database_url: Option<String>,
}

/// Create the database file and run migrations
pub async fn run(args: InitDbArgs) -> Result<()> {
    let config = ShopConfig::load_or_default().context("Failed to load config")?;
    let database_url = args.database_url.unwrap_or(config.database.url);

    // Make sure the parent directory for a default ~/.lilshop db exists
    if let Some(path) = database_url.strip_prefix("sqlite://") {
        if let Some(parent) = std::path::Path::new(path).parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }

    let pool = create_pool(&database_url)
        .await
        .context("Failed to create database pool")?;
    migrations::run(&pool)
        .await
        .context("Failed to run migrations")?;

    tracing::info!(url = %database_url, "Database initialized");
    println!("Database initialized: {}", database_url);

    Ok(())
}
