use crate::error::StorageError;
use crate::neo4j::{MockNeo4jClient, Neo4jClient, Neo4jClientTrait};
use std::sync::Arc;
use tracing::info;
use usergraph_core::{config::StorageConfig, Error};

/// Creates a graph client based on configuration.
///
/// Returns a trait object so that the real Neo4j client and the in-memory
/// mock can be used interchangeably by the server.
///
/// # Arguments
/// * `config` - Storage configuration with Neo4j connection details
///
/// # Errors
/// Returns an error if the Neo4j connection cannot be established or the
/// mock seed file cannot be loaded
///
/// # Example
/// ```no_run
/// # use usergraph_core::StorageConfig;
/// # async fn example() -> usergraph_core::Result<()> {
/// let graph = usergraph_storage::create_neo4j_client(&StorageConfig::default()).await?;
/// graph.ping().await?;
/// # Ok(())
/// # }
/// ```
pub async fn create_neo4j_client(
    config: &StorageConfig,
) -> Result<Arc<dyn Neo4jClientTrait>, Error> {
    if config.use_mock {
        let client = match &config.mock_seed_file {
            Some(path) => MockNeo4jClient::from_seed_file(path)
                .await
                .map_err(|e| StorageError::SeedLoad(format!("{e:#}")))?,
            None => MockNeo4jClient::new(),
        };
        info!("Using in-memory graph client");
        return Ok(Arc::new(client) as Arc<dyn Neo4jClientTrait>);
    }

    if config.max_connections == 0 {
        return Err(StorageError::InvalidConfig(
            "max_connections must be greater than 0".to_string(),
        )
        .into());
    }

    let client = Neo4jClient::new(config)
        .await
        .map_err(|e| StorageError::ConnectionFailed(format!("{e:#}")))?;

    Ok(Arc::new(client) as Arc<dyn Neo4jClientTrait>)
}
