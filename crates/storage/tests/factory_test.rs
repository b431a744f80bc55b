use pretty_assertions::assert_eq;
use usergraph_core::{AllowedRelationshipTypes, Error, StorageConfig};
use usergraph_storage::create_neo4j_client;

#[tokio::test]
async fn test_factory_returns_mock_client() -> anyhow::Result<()> {
    let config = StorageConfig {
        use_mock: true,
        ..StorageConfig::default()
    };

    let client = create_neo4j_client(&config).await?;
    client.ping().await?;

    // Empty in-memory graph: nobody to connect
    let knows = AllowedRelationshipTypes::default().parse("KNOWS")?;
    assert_eq!(client.create_relationship("a", "b", &knows).await?, 0);
    Ok(())
}

#[tokio::test]
async fn test_factory_loads_seed_file() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("users.json");
    std::fs::write(
        &path,
        r#"[{"username": "a", "games_likes": ["go"]}, {"username": "b", "games_likes": ["go"]}]"#,
    )?;

    let config = StorageConfig {
        use_mock: true,
        mock_seed_file: Some(path),
        ..StorageConfig::default()
    };

    let client = create_neo4j_client(&config).await?;
    assert_eq!(client.create_similarity_relationship("a", "b").await?, Some(1));
    Ok(())
}

#[tokio::test]
async fn test_factory_missing_seed_file_fails() {
    let config = StorageConfig {
        use_mock: true,
        mock_seed_file: Some("/nonexistent/users.json".into()),
        ..StorageConfig::default()
    };

    let result = create_neo4j_client(&config).await;
    assert!(matches!(result, Err(Error::Other(_))));
}

#[tokio::test]
async fn test_factory_rejects_zero_connections() {
    let config = StorageConfig {
        max_connections: 0,
        ..StorageConfig::default()
    };

    let result = create_neo4j_client(&config).await;
    assert!(matches!(result, Err(Error::Config(_))));
}
