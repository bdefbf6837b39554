//! Application state containing wired services and shared resources

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::infrastructure::SeaOrmSongRepository;
use crate::services::SongService;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection (kept for seeding and tests)
    db: DatabaseConnection,
    /// Song service backed by the SeaORM repository
    pub songs: SongService,
}

impl AppState {
    /// Create a new AppState with the repository wired to the service
    pub fn new(db: DatabaseConnection) -> Self {
        let song_repo = Arc::new(SeaOrmSongRepository::new(db.clone()));
        let songs = SongService::new(song_repo);

        Self { db, songs }
    }

    /// Get the database connection
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}
