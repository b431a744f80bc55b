//! Request and response models for relationship operations

use serde::{Deserialize, Serialize};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Success message for simple relationship creation
pub const RELATIONSHIP_CREATED_MESSAGE: &str = "Relationship created successfully";

/// Success message for preference-based relationship creation
pub const PREFERENCE_RELATIONSHIP_CREATED_MESSAGE: &str =
    "Relationship created based on preferences";

/// Not found message for simple relationship creation
pub const USERS_NOT_FOUND_MESSAGE: &str = "Users not found";

/// Not found message for preference-based relationship creation
pub const PREFERENCE_USERS_NOT_FOUND_MESSAGE: &str = "Users not found or no matches";

/// Error context for failures during simple relationship creation
pub const CREATE_RELATIONSHIP_FAILED: &str = "Failed to create relationship";

/// Error context for failures during preference matching
pub const PROCESS_PREFERENCES_FAILED: &str = "Failed to process preferences";

/// Create a typed relationship between two users
#[derive(Debug, Clone, Deserialize, Serialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct CreateRelationshipRequest {
    /// Username of the source user
    pub person1: String,
    /// Username of the target user
    pub person2: String,
    /// Relationship type, one of the configured allowed types
    pub relationship: String,
}

/// Create a `SIMILAR_PREFERENCES` relationship between two users
#[derive(Debug, Clone, Deserialize, Serialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct PreferenceMatchRequest {
    /// Username of the source user
    pub person1: String,
    /// Username of the target user
    pub person2: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct CreateRelationshipResponse {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct PreferenceMatchResponse {
    pub message: String,
    /// Number of shared preferences across all categories
    pub match_count: i64,
}

/// Relationship types accepted by the simple relationship endpoint
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct RelationshipTypesResponse {
    pub types: Vec<String>,
}

/// Body of every error response
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ErrorResponse {
    pub error: String,
}
