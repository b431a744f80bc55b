//! In-memory graph client for tests and local development

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;
use usergraph_core::{similarity_score, PreferenceProfile, RelationshipType, SIMILAR_PREFERENCES};

use super::traits::Neo4jClientTrait;

/// In-memory relationship data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredRelationship {
    pub from: String,
    pub to: String,
    pub rel_type: String,
    /// Set on `SIMILAR_PREFERENCES` edges only
    pub matches: Option<i64>,
}

#[derive(Debug, Default)]
struct MockData {
    users: HashMap<String, PreferenceProfile>, // username -> profile
    relationships: Vec<StoredRelationship>,
    unreachable: bool,
}

/// Mock Neo4j client backed by in-memory users and edges
///
/// Mirrors the Cypher semantics of [`super::Neo4jClient`]: edges are only
/// created between existing users, every call creates a new edge, and
/// similarity scores use [`similarity_score`].
#[derive(Clone, Default)]
pub struct MockNeo4jClient {
    data: Arc<RwLock<MockData>>,
}

impl MockNeo4jClient {
    /// Create a new, empty mock client
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock client whose every query fails as if the server were down
    pub fn unreachable() -> Self {
        let data = MockData {
            unreachable: true,
            ..MockData::default()
        };
        Self {
            data: Arc::new(RwLock::new(data)),
        }
    }

    /// Create a mock client pre-populated with users
    pub fn with_users(profiles: impl IntoIterator<Item = PreferenceProfile>) -> Self {
        let users = profiles
            .into_iter()
            .map(|profile| (profile.username.clone(), profile))
            .collect();
        let data = MockData {
            users,
            ..MockData::default()
        };
        Self {
            data: Arc::new(RwLock::new(data)),
        }
    }

    /// Load users from a JSON array of preference profiles
    pub async fn from_seed_file(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read seed file {}", path.display()))?;

        let profiles: Vec<PreferenceProfile> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse seed file {}", path.display()))?;

        info!(
            "Loaded {} users into the in-memory graph from {}",
            profiles.len(),
            path.display()
        );

        Ok(Self::with_users(profiles))
    }

    /// Add or replace a user node
    pub async fn insert_user(&self, profile: PreferenceProfile) {
        let mut data = self.data.write().await;
        data.users.insert(profile.username.clone(), profile);
    }

    /// Toggle simulated connectivity failures
    pub async fn set_unreachable(&self, unreachable: bool) {
        self.data.write().await.unreachable = unreachable;
    }

    /// Snapshot of every stored relationship, in creation order
    pub async fn relationships(&self) -> Vec<StoredRelationship> {
        self.data.read().await.relationships.clone()
    }

    /// Get number of relationships stored
    pub async fn relationship_count(&self) -> usize {
        self.data.read().await.relationships.len()
    }

    /// Get number of users stored
    pub async fn user_count(&self) -> usize {
        self.data.read().await.users.len()
    }
}

fn connection_error() -> anyhow::Error {
    anyhow!("Connection refused: Neo4j is unreachable")
}

#[async_trait]
impl Neo4jClientTrait for MockNeo4jClient {
    async fn create_relationship(
        &self,
        person1: &str,
        person2: &str,
        relationship: &RelationshipType,
    ) -> Result<u64> {
        let mut data = self.data.write().await;
        if data.unreachable {
            return Err(connection_error());
        }

        if !data.users.contains_key(person1) || !data.users.contains_key(person2) {
            return Ok(0);
        }

        data.relationships.push(StoredRelationship {
            from: person1.to_string(),
            to: person2.to_string(),
            rel_type: relationship.to_string(),
            matches: None,
        });
        Ok(1)
    }

    async fn create_similarity_relationship(
        &self,
        person1: &str,
        person2: &str,
    ) -> Result<Option<i64>> {
        let mut data = self.data.write().await;
        if data.unreachable {
            return Err(connection_error());
        }

        let matches = match (data.users.get(person1), data.users.get(person2)) {
            (Some(a), Some(b)) => similarity_score(a, b),
            _ => return Ok(None),
        };

        data.relationships.push(StoredRelationship {
            from: person1.to_string(),
            to: person2.to_string(),
            rel_type: SIMILAR_PREFERENCES.to_string(),
            matches: Some(matches),
        });
        Ok(Some(matches))
    }

    async fn ping(&self) -> Result<()> {
        if self.data.read().await.unreachable {
            return Err(connection_error());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use usergraph_core::{AllowedRelationshipTypes, PreferenceCategory};

    fn knows() -> RelationshipType {
        AllowedRelationshipTypes::default().parse("KNOWS").unwrap()
    }

    fn client() -> MockNeo4jClient {
        MockNeo4jClient::with_users([
            PreferenceProfile::new("alice").with(PreferenceCategory::MoviesLikes, ["a", "b"]),
            PreferenceProfile::new("bob").with(PreferenceCategory::MoviesLikes, ["b", "c"]),
        ])
    }

    #[tokio::test]
    async fn test_create_relationship_between_existing_users() {
        let client = client();

        let created = client.create_relationship("alice", "bob", &knows()).await.unwrap();

        assert_eq!(created, 1);
        assert_eq!(
            client.relationships().await,
            vec![StoredRelationship {
                from: "alice".to_string(),
                to: "bob".to_string(),
                rel_type: "KNOWS".to_string(),
                matches: None,
            }]
        );
    }

    #[tokio::test]
    async fn test_create_relationship_twice_creates_two_edges() {
        let client = client();

        client.create_relationship("alice", "bob", &knows()).await.unwrap();
        client.create_relationship("alice", "bob", &knows()).await.unwrap();

        assert_eq!(client.relationship_count().await, 2);
    }

    #[tokio::test]
    async fn test_create_relationship_missing_user_creates_nothing() {
        let client = client();

        let created = client.create_relationship("alice", "nobody", &knows()).await.unwrap();

        assert_eq!(created, 0);
        assert_eq!(client.relationship_count().await, 0);
    }

    #[tokio::test]
    async fn test_similarity_relationship_stores_score() {
        let client = client();

        let matches = client.create_similarity_relationship("alice", "bob").await.unwrap();

        assert_eq!(matches, Some(1));
        let stored = client.relationships().await;
        assert_eq!(stored[0].rel_type, SIMILAR_PREFERENCES);
        assert_eq!(stored[0].matches, Some(1));
    }

    #[tokio::test]
    async fn test_similarity_relationship_zero_score_still_creates_edge() {
        let client = client();
        client.insert_user(PreferenceProfile::new("carol")).await;

        let matches = client.create_similarity_relationship("alice", "carol").await.unwrap();

        assert_eq!(matches, Some(0));
        assert_eq!(client.relationship_count().await, 1);
    }

    #[tokio::test]
    async fn test_similarity_relationship_missing_user() {
        let client = client();

        let matches = client.create_similarity_relationship("ghost", "bob").await.unwrap();

        assert_eq!(matches, None);
        assert_eq!(client.relationship_count().await, 0);
    }

    #[tokio::test]
    async fn test_unreachable_fails_without_writing() {
        let client = client();
        client.set_unreachable(true).await;

        assert!(client.create_relationship("alice", "bob", &knows()).await.is_err());
        assert!(client.create_similarity_relationship("alice", "bob").await.is_err());
        assert!(client.ping().await.is_err());

        client.set_unreachable(false).await;
        assert_eq!(client.relationship_count().await, 0);
        assert!(client.ping().await.is_ok());
    }

    #[tokio::test]
    async fn test_from_seed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.json");
        std::fs::write(
            &path,
            r#"[
                {"username": "alice", "email": "alice@example.com", "music_likes": ["jazz", "soul"]},
                {"username": "bob", "music_likes": ["soul"]}
            ]"#,
        )
        .unwrap();

        let client = MockNeo4jClient::from_seed_file(&path).await.unwrap();

        assert_eq!(client.user_count().await, 2);
        assert_eq!(
            client.create_similarity_relationship("alice", "bob").await.unwrap(),
            Some(1)
        );
    }

    #[tokio::test]
    async fn test_from_seed_file_rejects_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = MockNeo4jClient::from_seed_file(&path).await.err().unwrap();
        assert!(err.to_string().contains("Failed to parse seed file"));
    }
}
