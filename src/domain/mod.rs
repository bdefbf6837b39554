//! Domain layer - Business abstractions
//!
//! Trait definitions and domain error types. The SeaORM-backed
//! implementations live in the infrastructure layer.

pub mod errors;
pub mod repositories;

pub use errors::DomainError;
pub use repositories::*;
