//! Services Layer
//!
//! Business logic kept out of the HTTP handlers.

pub mod song_service;

// Re-export for convenience
pub use song_service::SongService;
