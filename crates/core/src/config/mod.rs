//! Configuration module for the usergraph service
//!
//! This module provides configuration structures and loading mechanisms for the
//! relationship service. Configuration can be loaded from TOML files and/or
//! environment variables.

mod defaults;
mod loading;
mod storage;


use crate::error::{Error, Result};
use crate::relationship::AllowedRelationshipTypes;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use defaults::*;

/// Returns the path to the global configuration file
///
/// The global config is stored at `~/.usergraph/config.toml`.
pub fn global_config_path() -> Result<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| Error::config("Unable to determine home directory".to_string()))?;
    Ok(home_dir.join(".usergraph").join("config.toml"))
}

/// Main configuration structure for the usergraph service
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Graph database configuration
    #[serde(default)]
    pub storage: StorageConfig,

    /// REST server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Relationship vocabulary configuration
    #[serde(default)]
    pub relationships: RelationshipsConfig,
}

/// Configuration for the Neo4j backend
#[derive(Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Neo4j host address
    #[serde(default = "default_neo4j_host")]
    pub neo4j_host: String,

    /// Neo4j Bolt port (driver connection)
    #[serde(default = "default_neo4j_bolt_port")]
    pub neo4j_bolt_port: u16,

    /// Neo4j username
    #[serde(default = "default_neo4j_user")]
    pub neo4j_user: String,

    /// Neo4j password
    #[serde(default = "default_neo4j_password")]
    pub neo4j_password: String,

    /// Database to run queries against (server default when unset)
    #[serde(default)]
    pub neo4j_database: Option<String>,

    /// Maximum pooled Bolt connections
    #[serde(default = "default_max_connections")]
    pub max_connections: usize,

    /// Use the in-memory graph instead of Neo4j
    #[serde(default = "default_use_mock")]
    pub use_mock: bool,

    /// JSON file of user profiles loaded into the in-memory graph
    #[serde(default)]
    pub mock_seed_file: Option<PathBuf>,
}

impl std::fmt::Debug for StorageConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageConfig")
            .field("neo4j_host", &self.neo4j_host)
            .field("neo4j_bolt_port", &self.neo4j_bolt_port)
            .field("neo4j_user", &self.neo4j_user)
            .field("neo4j_password", &"***REDACTED***")
            .field("neo4j_database", &self.neo4j_database)
            .field("max_connections", &self.max_connections)
            .field("use_mock", &self.use_mock)
            .field("mock_seed_file", &self.mock_seed_file)
            .finish()
    }
}

/// Configuration for REST API server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind
    #[serde(default = "default_server_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_server_port")]
    pub port: u16,

    /// Allowed CORS origins (empty = disabled, ["*"] = all origins)
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

/// Relationship types callers may create through the simple relationship endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelationshipsConfig {
    #[serde(default = "default_allowed_relationship_types")]
    pub allowed_types: Vec<String>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            neo4j_host: default_neo4j_host(),
            neo4j_bolt_port: default_neo4j_bolt_port(),
            neo4j_user: default_neo4j_user(),
            neo4j_password: default_neo4j_password(),
            neo4j_database: None,
            max_connections: default_max_connections(),
            use_mock: default_use_mock(),
            mock_seed_file: None,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
            allowed_origins: default_allowed_origins(),
        }
    }
}

impl Default for RelationshipsConfig {
    fn default() -> Self {
        Self {
            allowed_types: default_allowed_relationship_types(),
        }
    }
}

impl RelationshipsConfig {
    /// Build the validated relationship type registry
    pub fn allowed_relationship_types(&self) -> Result<AllowedRelationshipTypes> {
        AllowedRelationshipTypes::new(self.allowed_types.iter().cloned())
    }
}

impl Config {
    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        if self.storage.neo4j_host.trim().is_empty() {
            return Err(Error::config("storage.neo4j_host must not be empty"));
        }

        if self.storage.neo4j_bolt_port == 0 {
            return Err(Error::config(
                "Invalid storage.neo4j_bolt_port: must be greater than 0".to_string(),
            ));
        }

        if self.storage.max_connections == 0 {
            return Err(Error::config(
                "storage.max_connections must be greater than 0".to_string(),
            ));
        }

        if self.storage.mock_seed_file.is_some() && !self.storage.use_mock {
            return Err(Error::config(
                "storage.mock_seed_file requires storage.use_mock = true".to_string(),
            ));
        }

        if self.server.port == 0 {
            return Err(Error::config(
                "Invalid server.port: must be greater than 0".to_string(),
            ));
        }

        self.relationships.allowed_relationship_types()?;

        Ok(())
    }

    /// Saves the configuration to a TOML file
    pub fn save(&self, path: &std::path::Path) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| Error::config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, toml_string)
            .map_err(|e| Error::config(format!("Failed to write config file: {e}")))?;

        Ok(())
    }
}
