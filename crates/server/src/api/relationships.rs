//! Relationship creation operations
//!
//! Decoding happens in the HTTP layer; these functions validate the decoded
//! request, issue the single graph query and translate its outcome.

use tracing::{debug, info, warn};
use usergraph_core::error::{Error, QueryResultExt, Result};
use usergraph_core::AllowedRelationshipTypes;
use usergraph_storage::Neo4jClientTrait;

use super::models::{
    CreateRelationshipRequest, CreateRelationshipResponse, PreferenceMatchRequest,
    PreferenceMatchResponse, CREATE_RELATIONSHIP_FAILED, PREFERENCE_RELATIONSHIP_CREATED_MESSAGE,
    PREFERENCE_USERS_NOT_FOUND_MESSAGE, PROCESS_PREFERENCES_FAILED, RELATIONSHIP_CREATED_MESSAGE,
    USERS_NOT_FOUND_MESSAGE,
};

/// Create a caller-typed relationship from `person1` to `person2`
///
/// The relationship type is checked against `allowed` before any query is
/// built. Usernames are matched verbatim, so an empty or unknown name is
/// reported as not found. Each successful call creates a new edge.
pub async fn create_simple_relationship(
    request: CreateRelationshipRequest,
    neo4j: &dyn Neo4jClientTrait,
    allowed: &AllowedRelationshipTypes,
) -> Result<CreateRelationshipResponse> {
    let person1 = request.person1.as_str();
    let person2 = request.person2.as_str();

    let relationship = allowed.parse(&request.relationship).inspect_err(|e| {
        warn!("Rejected relationship type {:?}: {e}", request.relationship);
    })?;

    let created = neo4j
        .create_relationship(person1, person2, &relationship)
        .await
        .query_context(CREATE_RELATIONSHIP_FAILED)?;

    if created == 0 {
        debug!(
            "No {} relationship created: {} or {} does not exist",
            relationship, person1, person2
        );
        return Err(Error::not_found(USERS_NOT_FOUND_MESSAGE));
    }

    info!("Created {} relationship {} -> {}", relationship, person1, person2);

    Ok(CreateRelationshipResponse {
        message: RELATIONSHIP_CREATED_MESSAGE.to_string(),
    })
}

/// Score `person1` against `person2` and store the score as a relationship
///
/// A score of zero between existing users is a success; only a missing user
/// is reported as not found.
pub async fn match_preferences(
    request: PreferenceMatchRequest,
    neo4j: &dyn Neo4jClientTrait,
) -> Result<PreferenceMatchResponse> {
    let person1 = request.person1.as_str();
    let person2 = request.person2.as_str();

    let match_count = neo4j
        .create_similarity_relationship(person1, person2)
        .await
        .query_context(PROCESS_PREFERENCES_FAILED)?
        .ok_or_else(|| Error::not_found(PREFERENCE_USERS_NOT_FOUND_MESSAGE))?;

    info!(
        "Created SIMILAR_PREFERENCES relationship {} -> {} with {} matches",
        person1, person2, match_count
    );

    Ok(PreferenceMatchResponse {
        message: PREFERENCE_RELATIONSHIP_CREATED_MESSAGE.to_string(),
        match_count,
    })
}
