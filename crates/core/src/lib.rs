//! Core types for the usergraph relationship service
//!
//! This crate provides the foundational pieces shared by the storage layer,
//! the REST server and the binary:
//!
//! - **Preferences**: the thirteen preference categories and similarity scoring
//! - **Relationships**: validated relationship type labels
//! - **Configuration**: service configuration management
//! - **Error handling**: unified error types
//!

pub mod config;
pub mod error;
pub mod preferences;
pub mod relationship;

// Re-export main types for convenience
pub use config::{Config, RelationshipsConfig, ServerConfig, StorageConfig};
pub use error::{Error, QueryResultExt, Result};
pub use preferences::{similarity_score, PreferenceCategory, PreferenceProfile};
pub use relationship::{AllowedRelationshipTypes, RelationshipType, SIMILAR_PREFERENCES};
