//! Cypher text for the relationship operations
//!
//! User names are always bound as `$person1` / `$person2`. The only text
//! spliced into a query is a [`RelationshipType`] (already validated) or a
//! [`PreferenceCategory`] property name (a compile-time literal).

use usergraph_core::{PreferenceCategory, RelationshipType, SIMILAR_PREFERENCES};

/// Column returned by [`create_relationship_query`]
pub(crate) const CREATED_COLUMN: &str = "created";

/// Column returned by [`similarity_relationship_query`]
pub(crate) const MATCH_COUNT_COLUMN: &str = "match_count";

/// Create a typed edge between two users and report how many were created
///
/// `count(r)` aggregates over the matched rows, so the query yields exactly
/// one row, with `0` when either user is missing.
pub(crate) fn create_relationship_query(relationship: &RelationshipType) -> String {
    format!(
        "MATCH (a:User {{username: $person1}}), (b:User {{username: $person2}})
         CREATE (a)-[r:{relationship}]->(b)
         RETURN count(r) AS {CREATED_COLUMN}"
    )
}

/// Per-category overlap expression for one preference category
///
/// A missing property reads as an empty list so that one unset category
/// cannot turn the whole total into `null`.
fn category_overlap_expr(category: PreferenceCategory) -> String {
    let prop = category.property_name();
    format!("size([x IN coalesce(a.{prop}, []) WHERE x IN coalesce(b.{prop}, [])])")
}

/// Score two users across every preference category and store the score
///
/// Yields one row with `match_count` when both users exist (a score of `0`
/// included) and no row otherwise.
pub(crate) fn similarity_relationship_query() -> String {
    let overlaps: Vec<String> = PreferenceCategory::all()
        .map(category_overlap_expr)
        .collect();

    format!(
        "MATCH (a:User {{username: $person1}}), (b:User {{username: $person2}})
         WITH a, b, [
             {}
         ] AS match_counts
         WITH a, b, reduce(total = 0, n IN match_counts | total + n) AS total_matches
         CREATE (a)-[r:{SIMILAR_PREFERENCES} {{matches: total_matches}}]->(b)
         RETURN r.matches AS {MATCH_COUNT_COLUMN}",
        overlaps.join(",\n             ")
    )
}

/// Connectivity probe
pub(crate) const PING_QUERY: &str = "RETURN 1 AS ok";

#[cfg(test)]
mod tests {
    use super::*;
    use usergraph_core::AllowedRelationshipTypes;

    #[test]
    fn test_create_relationship_query_binds_usernames() {
        let rel = AllowedRelationshipTypes::default()
            .parse("FOLLOWS")
            .unwrap();
        let query = create_relationship_query(&rel);

        assert!(query.contains("(a:User {username: $person1})"));
        assert!(query.contains("(b:User {username: $person2})"));
        assert!(query.contains("CREATE (a)-[r:FOLLOWS]->(b)"));
        assert!(query.contains("RETURN count(r) AS created"));
        assert!(!query.contains("MERGE"));
    }

    #[test]
    fn test_similarity_query_covers_every_category() {
        let query = similarity_relationship_query();

        for category in PreferenceCategory::all() {
            let prop = category.property_name();
            assert!(
                query.contains(&format!(
                    "[x IN coalesce(a.{prop}, []) WHERE x IN coalesce(b.{prop}, [])]"
                )),
                "missing overlap term for {prop}"
            );
        }
        assert_eq!(query.matches("size([x IN").count(), 13);
    }

    #[test]
    fn test_similarity_query_creates_scored_edge() {
        let query = similarity_relationship_query();

        assert!(query.contains("reduce(total = 0, n IN match_counts | total + n)"));
        assert!(query.contains("CREATE (a)-[r:SIMILAR_PREFERENCES {matches: total_matches}]->(b)"));
        assert!(query.contains("RETURN r.matches AS match_count"));
    }
}
