//! Default values and functions for configuration

use crate::relationship::DEFAULT_RELATIONSHIP_TYPES;

// Default constants
pub(crate) const DEFAULT_NEO4J_HOST: &str = "localhost";
pub(crate) const DEFAULT_NEO4J_USER: &str = "neo4j";
pub(crate) const DEFAULT_NEO4J_PASSWORD: &str = "usergraph";
pub(crate) const DEFAULT_SERVER_HOST: &str = "127.0.0.1";

pub(crate) fn default_neo4j_host() -> String {
    DEFAULT_NEO4J_HOST.to_string()
}

pub(crate) fn default_neo4j_bolt_port() -> u16 {
    7687
}

pub(crate) fn default_neo4j_user() -> String {
    DEFAULT_NEO4J_USER.to_string()
}

pub(crate) fn default_neo4j_password() -> String {
    DEFAULT_NEO4J_PASSWORD.to_string()
}

pub(crate) fn default_max_connections() -> usize {
    16
}

pub(crate) fn default_use_mock() -> bool {
    false
}

pub(crate) fn default_server_host() -> String {
    DEFAULT_SERVER_HOST.to_string()
}

pub(crate) fn default_server_port() -> u16 {
    3000
}

pub(crate) fn default_allowed_origins() -> Vec<String> {
    Vec::new() // Empty by default = CORS disabled
}

pub(crate) fn default_allowed_relationship_types() -> Vec<String> {
    DEFAULT_RELATIONSHIP_TYPES
        .iter()
        .map(|t| (*t).to_string())
        .collect()
}
