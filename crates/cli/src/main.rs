//! usergraph CLI - User relationship service
//!
//! This binary provides the command-line interface for the usergraph REST service.

#![deny(warnings)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use usergraph_core::config::Config;

#[derive(Parser)]
#[command(name = "usergraph")]
#[command(about = "REST service for creating relationships between users in Neo4j")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the REST server
    Serve {
        /// Port to listen on (overrides server.port)
        #[arg(short, long)]
        port: Option<u16>,

        /// Use the in-memory graph instead of Neo4j
        #[arg(long)]
        mock: bool,

        /// JSON file of user profiles to load into the in-memory graph
        #[arg(long, value_name = "FILE", requires = "mock")]
        seed: Option<PathBuf>,
    },
    /// Validate the configuration and check that Neo4j answers
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose)?;

    match cli.command {
        Some(Commands::Serve { port, mock, seed }) => {
            let mut config = load_config(cli.config.as_deref())?;
            apply_serve_overrides(&mut config, port, mock, seed);
            serve(config).await
        }
        Some(Commands::Check) => check(cli.config.as_deref()).await,
        None => {
            println!("Run 'usergraph serve' to start the REST server, or --help for more options");
            Ok(())
        }
    }
}

/// Initialize logging system
fn init_logging(verbose: bool) -> Result<()> {
    let level = if verbose { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "usergraph={level},usergraph_core={level},usergraph_storage={level},usergraph_server={level},tower_http={level}"
        ))
        .init();

    Ok(())
}

fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let config = Config::load(config_path).context("Failed to load configuration")?;
    debug!("Loaded configuration: {config:?}");
    Ok(config)
}

/// Command line flags take precedence over file and environment settings
fn apply_serve_overrides(
    config: &mut Config,
    port: Option<u16>,
    mock: bool,
    seed: Option<PathBuf>,
) {
    if let Some(port) = port {
        config.server.port = port;
    }
    if mock {
        config.storage.use_mock = true;
    }
    if seed.is_some() {
        config.storage.mock_seed_file = seed;
    }
}

/// Start the REST server
async fn serve(config: Config) -> Result<()> {
    if config.storage.use_mock {
        info!("Starting with the in-memory graph; nothing will be written to Neo4j");
    } else {
        info!("Starting with Neo4j at {}", config.storage.bolt_uri());
    }

    usergraph_server::run_server(config)
        .await
        .context("REST server failed")
}

/// Validate configuration and ping the graph database
async fn check(config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    config.validate().context("Invalid configuration")?;

    let allowed = config
        .relationships
        .allowed_relationship_types()
        .context("Invalid relationship types")?;
    info!(
        "Allowed relationship types: {}",
        allowed.iter().collect::<Vec<_>>().join(", ")
    );

    let graph = usergraph_storage::create_neo4j_client(&config.storage)
        .await
        .context("Failed to create graph client")?;
    graph
        .ping()
        .await
        .with_context(|| format!("Neo4j at {} did not answer", config.storage.bolt_uri()))?;

    println!("Configuration OK, Neo4j reachable");
    Ok(())
}
