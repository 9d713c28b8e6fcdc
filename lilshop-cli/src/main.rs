//! lilshop CLI - inventory/MRP dashboard server
//!
//! Entry point for the `lilshop` command-line tool:
//! - `serve` runs the HTTP dashboard server
//! - `init-db` creates the database and runs migrations
//! - `config` manages ~/.lilshop/config.toml

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "lilshop",
    author,
    version,
    about = "Small-shop inventory and MRP dashboard",
    long_about = "Run the LilShop dashboard: a SQLite-backed HTTP server for \
                  products, inventory counts, and suppliers, with a static \
                  browser frontend."
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP dashboard server
    Serve(commands::serve::ServeArgs),
    /// Create the database file and run migrations
    InitDb(commands::init_db::InitDbArgs),
    /// Manage lilshop configuration (init, show)
    Config(commands::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_setup::init_tracing(&TracingConfig { debug: cli.debug })?;

    match cli.command {
        Commands::Serve(args) => commands::serve::run(args).await?,
        Commands::InitDb(args) => commands::init_db::run(args).await?,
        Commands::Config(args) => commands::config::run(args)?,
    }

    Ok(())
}
