pub mod health;
pub mod songs;

use axum::{
    routing::{get, put},
    Router,
};

use crate::infrastructure::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Songs - the collection answers with and without the trailing slash
        .route("/songs", get(songs::list_songs).post(songs::create_song))
        .route("/songs/", get(songs::list_songs).post(songs::create_song))
        .route("/songs/search", get(songs::search_songs))
        .route(
            "/songs/:id",
            put(songs::update_song).delete(songs::delete_song),
        )
        .with_state(state)
}
