//! Domain models for the music library
//!
//! Records mirror the rows supplied by the platform media index; identifiers
//! are the index's own rowids and are never reassigned by this crate.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Music track with the metadata the browser displays
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Song {
    /// Media index identifier
    pub id: i64,
    /// Track title
    pub title: String,
    /// Display artist name
    pub artist: String,
    /// Display album name
    pub album: String,
    /// Album reference
    pub album_id: i64,
    /// Duration in milliseconds
    pub duration_ms: i64,
    /// Location of the audio file
    pub path: String,
}

/// Album with metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Album {
    /// Media index identifier
    pub id: i64,
    /// Album name
    pub name: String,
    /// Album artist name
    pub artist: String,
    /// Release year, when the index knows it
    pub year: Option<i32>,
}

/// Artist entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Artist {
    /// Media index identifier
    pub id: i64,
    /// Artist name
    pub name: String,
}

/// Playlist identity as registered in the media index.
///
/// Membership lives in the index; rule configuration for auto playlists
/// lives in the sidecar files owned by the playlist store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Playlist {
    /// Media index identifier
    pub id: i64,
    /// Playlist name
    pub name: String,
}

impl Playlist {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Genre entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Genre {
    /// Media index identifier
    pub id: i64,
    /// Genre name
    pub name: String,
}
