//! Storage-related configuration methods

use super::StorageConfig;

impl StorageConfig {
    /// Bolt URI of the configured Neo4j server
    ///
    /// ```
    /// use usergraph_core::config::StorageConfig;
    ///
    /// let config = StorageConfig::default();
    /// assert_eq!(config.bolt_uri(), "bolt://localhost:7687");
    /// ```
    pub fn bolt_uri(&self) -> String {
        format!("bolt://{}:{}", self.neo4j_host, self.neo4j_bolt_port)
    }
}
