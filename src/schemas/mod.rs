//! Validated request payloads and response shapes

pub mod song;

pub use song::{CreateSongRequest, SongResponse, UpdateSongRequest};
