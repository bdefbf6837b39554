//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;

use super::DomainError;
use crate::models::song;
use crate::schemas::{CreateSongRequest, UpdateSongRequest};

/// Filter criteria for song searches
#[derive(Debug, Default, Clone)]
pub struct SongFilter {
    /// Substring to look for in the song name. `None` or an empty string
    /// matches every song.
    pub name: Option<String>,
    /// Minimum play count. `None` is equivalent to 0 since play counts are
    /// never negative.
    pub min_plays: Option<i32>,
}

/// Repository trait for the Song entity
#[async_trait]
pub trait SongRepository: Send + Sync {
    /// Find all songs
    async fn find_all(&self) -> Result<Vec<song::Model>, DomainError>;

    /// Create a new song; `plays` defaults to 0 when absent
    async fn create(&self, input: CreateSongRequest) -> Result<song::Model, DomainError>;

    /// Update a song, applying only the fields present in the input.
    /// Returns `None` when no song has the given ID.
    async fn update(
        &self,
        id: i32,
        input: UpdateSongRequest,
    ) -> Result<Option<song::Model>, DomainError>;

    /// Delete a song. Returns `false` when no song has the given ID.
    async fn delete(&self, id: i32) -> Result<bool, DomainError>;

    /// Find songs matching the filter: name substring (ASCII
    /// case-insensitive, via SQL `LIKE`) AND minimum play count.
    async fn search(&self, filter: SongFilter) -> Result<Vec<song::Model>, DomainError>;
}
