//! Configuration loading from files and environment variables

use crate::error::{Error, Result};
use config::{Config as ConfigLib, ConfigBuilder as LibConfigBuilder, Environment, File};
use std::path::Path;

use super::{global_config_path, Config};

type Builder = LibConfigBuilder<config::builder::DefaultState>;

/// Apply a plain environment variable as an override for `key`
fn override_from_env(builder: Builder, var: &str, key: &str) -> Result<Builder> {
    match std::env::var(var) {
        Ok(value) => builder
            .set_override(key, value)
            .map_err(|e| Error::config(format!("Failed to set {var}: {e}"))),
        Err(_) => Ok(builder),
    }
}

/// Same as [`override_from_env`], for port numbers; unparsable values are ignored
fn override_port_from_env(builder: Builder, var: &str, key: &str) -> Result<Builder> {
    match std::env::var(var).ok().and_then(|p| p.parse::<u16>().ok()) {
        Some(port) => builder
            .set_override(key, port)
            .map_err(|e| Error::config(format!("Failed to set {var}: {e}"))),
        None => Ok(builder),
    }
}

impl Config {
    /// Loads configuration from a TOML file with environment variable overrides
    ///
    /// Environment variables are prefixed with `USERGRAPH_` and use double underscores
    /// for nested values. For example:
    /// - `USERGRAPH_SERVER__PORT=8080`
    /// - `USERGRAPH_RELATIONSHIPS__ALLOWED_TYPES=KNOWS,FOLLOWS`
    ///
    /// The plain `NEO4J_HOST`, `NEO4J_BOLT_PORT`, `NEO4J_USER` and `NEO4J_PASSWORD`
    /// variables are honoured as well and take precedence.
    pub fn from_file(path: &Path) -> Result<Self> {
        let mut builder = ConfigLib::builder();

        // Add the config file if it exists
        if path.exists() {
            tracing::debug!("Loading configuration from {}", path.display());
            builder = builder.add_source(File::from(path));
        } else {
            tracing::debug!(
                "No configuration file at {}, using defaults and environment",
                path.display()
            );
        }

        // Add environment variables with USERGRAPH_ prefix
        builder = builder.add_source(
            Environment::with_prefix("USERGRAPH")
                .prefix_separator("_")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("relationships.allowed_types")
                .with_list_parse_key("server.allowed_origins")
                .try_parsing(true),
        );

        // Neo4j configuration
        builder = override_from_env(builder, "NEO4J_HOST", "storage.neo4j_host")?;
        builder = override_port_from_env(builder, "NEO4J_BOLT_PORT", "storage.neo4j_bolt_port")?;
        builder = override_from_env(builder, "NEO4J_USER", "storage.neo4j_user")?;
        builder = override_from_env(builder, "NEO4J_PASSWORD", "storage.neo4j_password")?;

        let config = builder
            .build()
            .map_err(|e| Error::config(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| Error::config(format!("Failed to deserialize config: {e}")))
    }

    /// Creates a config from a TOML string (useful for testing)
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(format!("Failed to parse TOML: {e}")))
    }

    /// Load configuration from a single file
    ///
    /// Precedence (lowest to highest):
    /// 1. Hardcoded defaults
    /// 2. Config file (~/.usergraph/config.toml or custom --config path)
    /// 3. Environment variables (USERGRAPH_*, then NEO4J_*)
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let path = match config_path {
            Some(p) => p.to_path_buf(),
            None => global_config_path()?,
        };
        Self::from_file(&path)
    }
}
