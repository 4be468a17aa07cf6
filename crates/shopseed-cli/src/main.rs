mod inventory;
mod location;
mod policy;
mod populate;
mod validate;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "shopseed")]
#[command(about = "Seed and maintain a Shopify development store catalog")]
struct Cli {
    /// Catalog file to use instead of SHOPSEED_CATALOG_PATH
    #[arg(long, global = true, value_name = "PATH")]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Delete the store's products and collections and recreate them from the catalog
    Populate {
        /// Print the products and collection membership without calling the API
        #[arg(long)]
        dry_run: bool,

        /// Skip the teardown of existing products and collections
        #[arg(long)]
        keep_existing: bool,
    },
    /// Reset every variant's stock to its target quantity
    FixInventory {
        /// Show current and target quantities without writing
        #[arg(long)]
        dry_run: bool,
    },
    /// Load and validate the catalog file
    Validate,
}

fn init_tracing(log_level: &str) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(log_level))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    if let Commands::Validate = cli.command {
        init_tracing("info")?;
        let path = cli.catalog.unwrap_or_else(shopseed_core::load_catalog_path);
        return validate::run_validate(&path);
    }

    let mut config = shopseed_core::load_app_config()?;
    if let Some(path) = cli.catalog {
        config.catalog_path = path;
    }
    init_tracing(&config.log_level)?;
    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Populate {
            dry_run,
            keep_existing,
        } => populate::run_populate(&config, dry_run, keep_existing).await,
        Commands::FixInventory { dry_run } => {
            inventory::run_fix_inventory(&config, dry_run).await
        }
        Commands::Validate => validate::run_validate(&config.catalog_path),
    }
}
