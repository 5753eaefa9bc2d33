//! Genre browsing model.
//!
//! Presentation-side companion for a genre list page: a positional snapshot
//! of the sorted genres plus the handlers a list UI binds to. Row lookups
//! never fail the render; a hole in the snapshot is reported through
//! tracing and shown as a blank row.

use crate::error::Result;
use crate::library::Library;
use crate::media::MediaIndex;
use crate::models::{Genre, Song};
use tracing::error;

/// Where queued songs should land relative to the current queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueuePosition {
    /// Play immediately after the current song.
    Next,
    /// Append to the end of the queue.
    Last,
}

/// Positional snapshot of the genre list.
#[derive(Debug, Default)]
pub struct GenreListModel {
    rows: Vec<Genre>,
}

impl GenreListModel {
    /// Snapshot the library's sorted genres.
    pub fn from_library(library: &mut Library) -> Self {
        Self {
            rows: library.genres().to_vec(),
        }
    }

    /// Number of rows.
    pub fn count(&self) -> usize {
        self.rows.len()
    }

    /// Row payload, when present.
    pub fn item(&self, position: usize) -> Option<&Genre> {
        self.rows.get(position)
    }

    /// Stable row identifier (the position itself).
    pub fn item_id(&self, position: usize) -> i64 {
        position as i64
    }

    /// Display label for a row. A missing entry renders blank rather than
    /// failing the whole list.
    pub fn label(&self, position: usize) -> String {
        match self.rows.get(position) {
            Some(genre) => genre.name.clone(),
            None => {
                error!(position, "The requested genre entry is missing");
                String::new()
            }
        }
    }

    /// Genre to open when a row is tapped.
    pub fn select(&self, position: usize) -> Option<&Genre> {
        self.rows.get(position)
    }

    /// Fetch a row's member songs for a queue action. The caller hands the
    /// result (and the chosen [`QueuePosition`]) to the player.
    pub async fn queue_contents(
        &self,
        index: &dyn MediaIndex,
        position: usize,
        queue_position: QueuePosition,
    ) -> Result<(QueuePosition, Vec<Song>)> {
        let Some(genre) = self.rows.get(position) else {
            error!(position, "Queue action on a missing genre entry");
            return Ok((queue_position, Vec::new()));
        };

        let songs = index.songs_in_genre(genre.id).await?;
        Ok((queue_position, songs))
    }

    /// Replace the snapshot.
    pub fn update_data(&mut self, rows: Vec<Genre>) {
        self.rows = rows;
    }
}
