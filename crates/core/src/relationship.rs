//! Relationship type validation
//!
//! Cypher cannot bind a relationship type as a query parameter, so the type
//! label ends up in the query text. A caller-supplied label therefore only
//! reaches a query as a [`RelationshipType`], which can only be obtained from
//! an [`AllowedRelationshipTypes`] registry after passing both the identifier
//! pattern check and the allow-list check.

use crate::error::{Error, Result};
use std::collections::BTreeSet;
use std::fmt;

/// Relationship type created by the preference matcher
pub const SIMILAR_PREFERENCES: &str = "SIMILAR_PREFERENCES";

/// Longest accepted relationship type label
pub const MAX_RELATIONSHIP_TYPE_LEN: usize = 64;

/// Default allow-list for caller-selected relationship types
pub const DEFAULT_RELATIONSHIP_TYPES: &[&str] = &[
    "FRIENDS_WITH",
    "FOLLOWS",
    "KNOWS",
    "LIKES",
    "DISLIKES",
    "BLOCKED",
    "MATCHED_WITH",
];

/// Check a label against `^[A-Z][A-Z0-9_]*$` and the length limit
pub fn validate_type_label(label: &str) -> Result<()> {
    if label.is_empty() {
        return Err(Error::invalid_input("relationship type must not be empty"));
    }

    if label.len() > MAX_RELATIONSHIP_TYPE_LEN {
        return Err(Error::invalid_input(format!(
            "relationship type is longer than {MAX_RELATIONSHIP_TYPE_LEN} characters"
        )));
    }

    let mut chars = label.chars();
    let starts_with_letter = chars.next().is_some_and(|c| c.is_ascii_uppercase());
    let rest_valid = chars.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_');

    if !starts_with_letter || !rest_valid {
        return Err(Error::invalid_input(format!(
            "relationship type '{label}' must start with an uppercase letter and contain only \
             uppercase letters, digits and underscores"
        )));
    }

    Ok(())
}

/// A relationship type label that is safe to place in query text
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelationshipType(String);

impl RelationshipType {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RelationshipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RelationshipType {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Server-side vocabulary of relationship types callers may create
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowedRelationshipTypes {
    types: BTreeSet<String>,
}

impl AllowedRelationshipTypes {
    /// Build the registry, rejecting malformed or reserved labels
    pub fn new<I, S>(types: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = BTreeSet::new();
        for label in types {
            let label = label.into();
            validate_type_label(&label)
                .map_err(|e| Error::config(format!("Invalid allowed relationship type: {e}")))?;
            if label == SIMILAR_PREFERENCES {
                return Err(Error::config(format!(
                    "{SIMILAR_PREFERENCES} is reserved for preference matching and cannot be allowed"
                )));
            }
            set.insert(label);
        }

        if set.is_empty() {
            return Err(Error::config(
                "At least one relationship type must be allowed".to_string(),
            ));
        }

        Ok(Self { types: set })
    }

    /// Validate a caller-supplied label
    pub fn parse(&self, raw: &str) -> Result<RelationshipType> {
        validate_type_label(raw)?;

        if raw == SIMILAR_PREFERENCES {
            return Err(Error::invalid_input(format!(
                "relationship type {SIMILAR_PREFERENCES} is reserved for preference matching"
            )));
        }

        if !self.types.contains(raw) {
            return Err(Error::invalid_input(format!(
                "relationship type '{raw}' is not allowed. Allowed types: {:?}",
                self.types
            )));
        }

        Ok(RelationshipType(raw.to_string()))
    }

    /// Allowed labels in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(String::as_str)
    }
}

impl Default for AllowedRelationshipTypes {
    fn default() -> Self {
        Self {
            types: DEFAULT_RELATIONSHIP_TYPES
                .iter()
                .map(|t| (*t).to_string())
                .collect(),
        }
    }
}
