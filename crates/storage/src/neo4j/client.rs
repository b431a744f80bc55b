use anyhow::{Context, Result};
use async_trait::async_trait;
use neo4rs::{ConfigBuilder, Graph, Query, Row};
use std::sync::Arc;
use tracing::{debug, info};
use usergraph_core::{RelationshipType, StorageConfig};

use super::queries::{
    create_relationship_query, similarity_relationship_query, CREATED_COLUMN, MATCH_COUNT_COLUMN,
    PING_QUERY,
};
use super::traits::Neo4jClientTrait;

/// Neo4j client for the relationship operations
///
/// Wraps the driver's pooled [`Graph`] handle. Each operation borrows one
/// pooled connection for a single auto-committed write query; the connection
/// goes back to the pool when the result stream is dropped.
pub struct Neo4jClient {
    graph: Arc<Graph>,
}

impl Neo4jClient {
    /// Connect to Neo4j server with the provided configuration
    ///
    /// # Arguments
    /// * `config` - Storage configuration containing Neo4j connection details
    ///
    /// # Returns
    /// * `Result<Self>` - Connected Neo4j client or error
    ///
    /// # Example
    /// ```no_run
    /// use usergraph_storage::Neo4jClient;
    /// use usergraph_core::StorageConfig;
    ///
    /// # async fn example(config: &StorageConfig) -> anyhow::Result<()> {
    /// let client = Neo4jClient::new(config).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn new(config: &StorageConfig) -> Result<Self> {
        let uri = config.bolt_uri();

        info!("Connecting to Neo4j at {}", uri);

        let mut builder = ConfigBuilder::default()
            .uri(uri)
            .user(config.neo4j_user.as_str())
            .password(config.neo4j_password.as_str())
            .max_connections(config.max_connections);

        if let Some(db) = &config.neo4j_database {
            debug!("Using Neo4j database: {}", db);
            builder = builder.db(db.as_str());
        }

        let neo4j_config = builder.build().context("Invalid Neo4j configuration")?;

        let graph = Graph::connect(neo4j_config)
            .await
            .context("Failed to connect to Neo4j")?;

        Ok(Self::from_graph(Arc::new(graph)))
    }

    /// Wrap an already connected graph handle
    pub fn from_graph(graph: Arc<Graph>) -> Self {
        Self { graph }
    }

    /// Get a reference to the underlying Graph for direct query execution
    pub fn graph(&self) -> &Arc<Graph> {
        &self.graph
    }

    /// Run a query and read every row
    ///
    /// The stream is drained so that the auto-commit transaction completes
    /// before the connection goes back to the pool.
    async fn fetch_all(&self, query: Query) -> Result<Vec<Row>> {
        let mut stream = self.graph.execute(query).await?;

        let mut rows = Vec::new();
        while let Some(row) = stream.next().await? {
            rows.push(row);
        }
        Ok(rows)
    }
}

#[async_trait]
impl Neo4jClientTrait for Neo4jClient {
    async fn create_relationship(
        &self,
        person1: &str,
        person2: &str,
        relationship: &RelationshipType,
    ) -> Result<u64> {
        let query = Query::new(create_relationship_query(relationship))
            .param("person1", person1)
            .param("person2", person2);

        let rows = self.fetch_all(query).await?;

        let created: i64 = match rows.first() {
            Some(row) => row.get(CREATED_COLUMN)?,
            None => 0,
        };

        debug!(
            "Created {} {} relationship(s) from {} to {}",
            created, relationship, person1, person2
        );

        u64::try_from(created).context("Negative relationship count returned by Neo4j")
    }

    async fn create_similarity_relationship(
        &self,
        person1: &str,
        person2: &str,
    ) -> Result<Option<i64>> {
        let query = Query::new(similarity_relationship_query())
            .param("person1", person1)
            .param("person2", person2);

        let rows = self.fetch_all(query).await?;

        match rows.first() {
            Some(row) => {
                let match_count: i64 = row.get(MATCH_COUNT_COLUMN)?;
                if rows.len() > 1 {
                    debug!(
                        "{} similarity rows for {} -> {}; usernames are not unique",
                        rows.len(),
                        person1,
                        person2
                    );
                }
                Ok(Some(match_count))
            }
            None => Ok(None),
        }
    }

    async fn ping(&self) -> Result<()> {
        self.graph
            .run(Query::new(PING_QUERY.to_string()))
            .await
            .context("Neo4j ping failed")
    }
}
