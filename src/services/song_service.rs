//! Song Service - Delegation layer between HTTP handlers and the repository
//!
//! Deliberately thin: each call forwards to the repository and maps stored
//! entities to their response shape. Business rules would land here if the
//! contract ever grew any.

use std::sync::Arc;

use crate::domain::{DomainError, SongFilter, SongRepository};
use crate::schemas::{CreateSongRequest, SongResponse, UpdateSongRequest};

#[derive(Clone)]
pub struct SongService {
    repo: Arc<dyn SongRepository>,
}

impl SongService {
    pub fn new(repo: Arc<dyn SongRepository>) -> Self {
        Self { repo }
    }

    /// List every song in the catalogue
    pub async fn list_songs(&self) -> Result<Vec<SongResponse>, DomainError> {
        let songs = self.repo.find_all().await?;

        Ok(songs.into_iter().map(SongResponse::from).collect())
    }

    /// Create a song from an already-validated payload
    pub async fn create_song(
        &self,
        input: CreateSongRequest,
    ) -> Result<SongResponse, DomainError> {
        let song = self.repo.create(input).await?;

        Ok(SongResponse::from(song))
    }

    /// Update a song; `None` means no song has the given ID
    pub async fn update_song(
        &self,
        id: i32,
        input: UpdateSongRequest,
    ) -> Result<Option<SongResponse>, DomainError> {
        let updated = self.repo.update(id, input).await?;

        Ok(updated.map(SongResponse::from))
    }

    /// Delete a song; `false` means no song has the given ID
    pub async fn delete_song(&self, id: i32) -> Result<bool, DomainError> {
        self.repo.delete(id).await
    }

    /// Search songs by name substring and minimum play count
    pub async fn search_songs(
        &self,
        filter: SongFilter,
    ) -> Result<Vec<SongResponse>, DomainError> {
        let songs = self.repo.search(filter).await?;

        Ok(songs.into_iter().map(SongResponse::from).collect())
    }
}
