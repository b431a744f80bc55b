#![deny(warnings)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

//! Graph storage for the usergraph relationship service
//!
//! Exposes [`Neo4jClientTrait`] with two implementations: [`Neo4jClient`]
//! over the `neo4rs` driver and the in-memory [`MockNeo4jClient`].

pub mod error;
mod factory;
mod neo4j;

pub use error::StorageError;
pub use factory::create_neo4j_client;
pub use neo4j::{MockNeo4jClient, Neo4jClient, Neo4jClientTrait, StoredRelationship};
