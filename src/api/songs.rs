//! HTTP handlers for the song resource
//!
//! Every error leaves in the same JSON envelope: `{"error": ...}`. Body and
//! query extraction failures are caught here instead of letting the
//! extractors answer with plain text.

use crate::domain::SongFilter;
use crate::infrastructure::AppState;
use crate::schemas::{CreateSongRequest, UpdateSongRequest};
use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;
use validator::Validate;

/// Query parameters for `GET /songs/search`
#[derive(Debug, Deserialize, Clone)]
pub struct SearchQuery {
    pub name: Option<String>,
    pub min_plays: Option<i32>,
}

pub async fn list_songs(State(state): State<AppState>) -> impl IntoResponse {
    match state.songs.list_songs().await {
        Ok(songs) => (StatusCode::OK, Json(songs)).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": e.to_string() })),
        )
            .into_response(),
    }
}

pub async fn create_song(
    State(state): State<AppState>,
    payload: Result<Json<CreateSongRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": rejection.body_text() })),
            )
                .into_response();
        }
    };

    if let Err(errors) = payload.validate() {
        return (StatusCode::BAD_REQUEST, Json(json!({ "error": errors }))).into_response();
    }

    match state.songs.create_song(payload).await {
        Ok(song) => (StatusCode::CREATED, Json(song)).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": e.to_string() })),
        )
            .into_response(),
    }
}

pub async fn update_song(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    payload: Result<Json<UpdateSongRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": rejection.body_text() })),
            )
                .into_response();
        }
    };

    if let Err(errors) = payload.validate() {
        return (StatusCode::BAD_REQUEST, Json(json!({ "error": errors }))).into_response();
    }

    match state.songs.update_song(id, payload).await {
        Ok(Some(song)) => (StatusCode::OK, Json(song)).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Song not found" })),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": e.to_string() })),
        )
            .into_response(),
    }
}

pub async fn delete_song(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    match state.songs.delete_song(id).await {
        Ok(true) => (
            StatusCode::OK,
            Json(json!({ "message": "Song deleted successfully" })),
        )
            .into_response(),
        Ok(false) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Song not found" })),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": e.to_string() })),
        )
            .into_response(),
    }
}

/// Search by name substring and minimum play count.
///
/// Name matching is ASCII case-insensitive (SQLite `LIKE`). An absent or
/// empty `name` matches every song; `min_plays` defaults to 0. A
/// non-numeric `min_plays` is rejected instead of silently ignored.
pub async fn search_songs(
    State(state): State<AppState>,
    params: Result<Query<SearchQuery>, QueryRejection>,
) -> impl IntoResponse {
    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": rejection.body_text() })),
            )
                .into_response();
        }
    };

    let filter = SongFilter {
        name: params.name,
        min_plays: params.min_plays,
    };

    match state.songs.search_songs(filter).await {
        Ok(songs) => (StatusCode::OK, Json(songs)).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": e.to_string() })),
        )
            .into_response(),
    }
}
