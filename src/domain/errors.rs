//! Domain error types
//!
//! These errors are framework-agnostic and represent business-level failures.
//! A missing row is not an error here: repositories report it as `None` or
//! `false` so callers can tell "absent" apart from "broken".

use std::fmt;

#[derive(Debug)]
pub enum DomainError {
    /// Database/persistence error
    Database(String),
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::Database(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

// Conversion from SeaORM errors (used in infrastructure layer)
impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        DomainError::Database(e.to_string())
    }
}
