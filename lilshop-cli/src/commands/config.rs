//! Configuration management command

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use lilshop_core::ShopConfig;

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Write a default config to ~/.lilshop/config.toml
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
    /// Print the resolved configuration
    Show,
}

/// Run the config command
pub fn run(args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommand::Init { force } => init(force),
        ConfigCommand::Show => show(),
    }
}

fn init(force: bool) -> Result<()> {
    let path = ShopConfig::config_path();

    if path.exists() && !force {
        anyhow::bail!(
            "Config already exists at {:?}\n\nUse --force to overwrite",
            path
        );
    }

    let config = ShopConfig::default();
    config.save().context("Failed to write config")?;
    println!("Wrote default config to {}", path.display());

    Ok(())
}

fn show() -> Result<()> {
    let config = ShopConfig::load_or_default().context("Failed to load config")?;
    let rendered = toml::to_string_pretty(&config).context("Failed to render config")?;

    println!("# {}", ShopConfig::config_path().display());
    print!("{}", rendered);

    Ok(())
}
