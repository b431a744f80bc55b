//! Neo4j graph database client for user relationship storage

pub(crate) mod client;
pub(crate) mod mock;
pub(crate) mod queries;
pub(crate) mod traits;

pub use client::Neo4jClient;
pub use mock::{MockNeo4jClient, StoredRelationship};
pub use traits::Neo4jClientTrait;
