//! API service layer for relationship operations
//!
//! This module contains the business logic behind the REST endpoints.

pub mod models;
mod relationships;

pub use models::*;
pub use relationships::{create_simple_relationship, match_preferences};
