use anyhow::Result;
use async_trait::async_trait;
use usergraph_core::RelationshipType;

/// Trait for the graph operations behind the relationship endpoints
///
/// Implementations receive relationship types only as validated
/// [`RelationshipType`] values and must bind user names as query parameters,
/// never as query text.
#[async_trait]
pub trait Neo4jClientTrait: Send + Sync {
    /// Create a directed `person1 -> person2` edge of the given type
    ///
    /// Always creates a new edge, even if an identical one already exists.
    ///
    /// # Returns
    /// * `Result<u64>` - Number of edges created; `0` when either user does not exist
    async fn create_relationship(
        &self,
        person1: &str,
        person2: &str,
        relationship: &RelationshipType,
    ) -> Result<u64>;

    /// Score two users' preferences and store a `SIMILAR_PREFERENCES` edge
    ///
    /// # Returns
    /// * `Result<Option<i64>>` - The stored `matches` value, or `None` when either
    ///   user does not exist (no edge is created in that case)
    async fn create_similarity_relationship(
        &self,
        person1: &str,
        person2: &str,
    ) -> Result<Option<i64>>;

    /// Check that the database answers queries
    async fn ping(&self) -> Result<()>;
}
