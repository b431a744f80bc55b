//! Test utilities for storage layer integration tests

use anyhow::Result;
use neo4rs::{Graph, Query};
use usergraph_core::{config::StorageConfig, PreferenceProfile};

/// Create a StorageConfig for a locally running Neo4j
///
/// Connection details come from `NEO4J_HOST`, `NEO4J_BOLT_PORT`, `NEO4J_USER`
/// and `NEO4J_PASSWORD`, falling back to the service defaults.
pub fn create_storage_config() -> StorageConfig {
    let defaults = StorageConfig::default();
    StorageConfig {
        neo4j_host: std::env::var("NEO4J_HOST").unwrap_or(defaults.neo4j_host.clone()),
        neo4j_bolt_port: std::env::var("NEO4J_BOLT_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.neo4j_bolt_port),
        neo4j_user: std::env::var("NEO4J_USER").unwrap_or(defaults.neo4j_user.clone()),
        neo4j_password: std::env::var("NEO4J_PASSWORD")
            .unwrap_or(defaults.neo4j_password.clone()),
        ..defaults
    }
}

/// Username unique to one test run
pub fn unique_username(prefix: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    format!("{prefix}_{nanos}")
}

/// Create a User node carrying every preference property of `profile`
pub async fn create_user(graph: &Graph, profile: &PreferenceProfile) -> Result<()> {
    let mut text = "CREATE (u:User {username: $username})".to_string();
    for category in profile.preferences.keys() {
        let prop = category.property_name();
        text.push_str(&format!(" SET u.{prop} = ${prop}"));
    }

    let mut query = Query::new(text).param("username", profile.username.clone());
    for (category, values) in &profile.preferences {
        query = query.param(category.property_name(), values.clone());
    }

    graph.run(query).await?;
    Ok(())
}

/// Count edges of a type between two users
pub async fn count_edges(graph: &Graph, from: &str, to: &str, rel_type: &str) -> Result<i64> {
    let query = Query::new(format!(
        "MATCH (:User {{username: $from}})-[r:{rel_type}]->(:User {{username: $to}})
         RETURN count(r) AS edges"
    ))
    .param("from", from)
    .param("to", to);

    let mut result = graph.execute(query).await?;
    match result.next().await? {
        Some(row) => Ok(row.get("edges")?),
        None => Ok(0),
    }
}

/// Remove the users created by a test along with their edges
pub async fn delete_users(graph: &Graph, usernames: &[&str]) -> Result<()> {
    let names: Vec<String> = usernames.iter().map(|u| (*u).to_string()).collect();
    let query = Query::new("MATCH (u:User) WHERE u.username IN $names DETACH DELETE u".to_string())
        .param("names", names);
    graph.run(query).await?;
    Ok(())
}
