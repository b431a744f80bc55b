//! User preference categories and similarity scoring
//!
//! Every `User` node carries one list-valued property per
//! [`PreferenceCategory`]. Two users are compared category by category: for
//! each category the number of entries in the first user's list that also
//! appear in the second user's list is counted, and the per-category counts
//! are summed into a single score.
//!
//! The same aggregation runs inside the graph database as a Cypher query
//! (see the storage crate); [`similarity_score`] is the in-process rendition
//! used by the in-memory graph client and by tests.

use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use strum::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr, IntoEnumIterator};

/// A list-valued preference property on a `User` node
///
/// The string form of each variant is the exact node property name.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    EnumCount,
    IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PreferenceCategory {
    MoviesLikes,
    MoviesDislikes,
    GamesLikes,
    GamesDislikes,
    BooksLikes,
    BooksDislikes,
    MusicLikes,
    MusicDislikes,
    ArtHobbies,
    OutdoorsLikes,
    OutdoorsDislikes,
    FitnessHobbies,
    SocialHobbies,
}

impl PreferenceCategory {
    /// Node property name holding this category's list
    pub fn property_name(self) -> &'static str {
        self.into()
    }

    /// All categories, in scoring order
    pub fn all() -> impl Iterator<Item = PreferenceCategory> {
        Self::iter()
    }
}

/// Preference lists of a single user
///
/// Serializes flat, with the username next to one key per category, which
/// mirrors the property layout of a `User` node. Properties that are not a
/// preference category are skipped when deserializing:
///
/// ```
/// use usergraph_core::preferences::{PreferenceCategory, PreferenceProfile};
///
/// let profile: PreferenceProfile = serde_json::from_str(
///     r#"{"username": "alice", "email": "a@example.com", "movies_likes": ["alien", "heat"]}"#,
/// ).unwrap();
/// assert_eq!(profile.list(PreferenceCategory::MoviesLikes).len(), 2);
/// assert!(profile.list(PreferenceCategory::BooksLikes).is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PreferenceProfile {
    pub username: String,

    #[serde(flatten)]
    pub preferences: BTreeMap<PreferenceCategory, Vec<String>>,
}

impl PreferenceProfile {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            preferences: BTreeMap::new(),
        }
    }

    /// Builder-style setter for one category
    pub fn with<I, S>(mut self, category: PreferenceCategory, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.preferences
            .insert(category, values.into_iter().map(Into::into).collect());
        self
    }

    /// List for a category; a category never set reads as empty
    pub fn list(&self, category: PreferenceCategory) -> &[String] {
        self.preferences
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl<'de> Deserialize<'de> for PreferenceProfile {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(ProfileVisitor)
    }
}

struct ProfileVisitor;

impl<'de> Visitor<'de> for ProfileVisitor {
    type Value = PreferenceProfile;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a user object with a username and preference lists")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut username: Option<String> = None;
        let mut preferences = BTreeMap::new();

        while let Some(key) = map.next_key::<String>()? {
            if key == "username" {
                if username.is_some() {
                    return Err(de::Error::duplicate_field("username"));
                }
                username = Some(map.next_value()?);
            } else if let Ok(category) = PreferenceCategory::from_str(&key) {
                let values: Option<Vec<String>> = map.next_value()?;
                preferences.insert(category, values.unwrap_or_default());
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }

        let username = username.ok_or_else(|| de::Error::missing_field("username"))?;
        Ok(PreferenceProfile {
            username,
            preferences,
        })
    }
}

/// Number of entries of `a` that also occur in `b`
///
/// Duplicates in `a` are counted once per occurrence, duplicates in `b` are
/// not.
pub fn category_matches(a: &[String], b: &[String]) -> i64 {
    a.iter().filter(|value| b.contains(value)).count() as i64
}

/// Similarity score between two users, summed over every category
pub fn similarity_score(a: &PreferenceProfile, b: &PreferenceProfile) -> i64 {
    PreferenceCategory::all()
        .map(|category| category_matches(a.list(category), b.list(category)))
        .sum()
}
