//! Media index access
//!
//! The platform media index is the canonical record of what is on the
//! device: songs, albums, artists, genres, and playlist membership. The
//! library cache is populated from it and the playlist store writes through
//! it. This module defines the [`MediaIndex`] contract plus a SQLite-backed
//! implementation and its connection-pool helpers.

use crate::error::{LibraryError, Result};
use crate::models::{Album, Artist, Genre, Playlist, Song};
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::{query, query_as, SqlitePool};
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

/// Media index interface.
///
/// Read operations return rows in index order; display ordering is the
/// caller's concern. Playlist mutations are visible to other consumers of
/// the same index immediately.
#[async_trait]
pub trait MediaIndex: Send + Sync {
    /// All songs known to the index
    async fn all_songs(&self) -> Result<Vec<Song>>;

    /// All albums known to the index
    async fn all_albums(&self) -> Result<Vec<Album>>;

    /// All artists known to the index
    async fn all_artists(&self) -> Result<Vec<Artist>>;

    /// All genres known to the index
    async fn all_genres(&self) -> Result<Vec<Genre>>;

    /// All playlists registered in the index
    async fn all_playlists(&self) -> Result<Vec<Playlist>>;

    /// Member songs of a genre
    async fn songs_in_genre(&self, genre_id: i64) -> Result<Vec<Song>>;

    /// Member songs of a playlist, in play order
    async fn playlist_songs(&self, playlist_id: i64) -> Result<Vec<Song>>;

    /// Playlists whose name contains the query (case-insensitive)
    async fn search_playlists(&self, query: &str) -> Result<Vec<Playlist>>;

    /// Look up a playlist by exact name, ignoring case
    async fn find_playlist_by_name(&self, name: &str) -> Result<Option<Playlist>>;

    /// Register a new playlist with the given initial members
    ///
    /// # Errors
    /// Returns `InvalidInput` when the name is empty or whitespace.
    async fn create_playlist(&self, name: &str, songs: &[Song]) -> Result<Playlist>;

    /// Remove a playlist and its membership
    ///
    /// # Returns
    /// - `Ok(true)` if the playlist was deleted
    /// - `Ok(false)` if it was not present
    async fn delete_playlist(&self, playlist: &Playlist) -> Result<bool>;

    /// Replace a playlist's membership
    ///
    /// # Errors
    /// Returns `NotFound` when the playlist is not registered.
    async fn edit_playlist(&self, playlist: &Playlist, songs: &[Song]) -> Result<()>;

    /// Append songs to the end of a playlist
    async fn append_to_playlist(&self, playlist: &Playlist, songs: &[Song]) -> Result<()>;
}

// =============================================================================
// Connection pool helpers
// =============================================================================

/// Open a connection pool for the media index database file.
///
/// WAL journaling with NORMAL sync gives multiple readers alongside the
/// single writer; the database is created on first use.
pub async fn create_pool(database_path: &str) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&format!("sqlite:{}", database_path))?
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .foreign_keys(true)
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .min_connections(1)
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(30))
        .connect_with(options)
        .await?;

    info!(path = database_path, "Opened media index database");
    Ok(pool)
}

/// In-memory pool for tests.
///
/// Limited to one connection; each connection of a `:memory:` database is
/// its own database.
pub async fn create_test_pool() -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?;

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;

    Ok(pool)
}

// =============================================================================
// SQLite implementation
// =============================================================================

/// SQLite implementation of [`MediaIndex`].
pub struct SqliteMediaIndex {
    pool: SqlitePool,
}

impl SqliteMediaIndex {
    /// Create a media index over an existing pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create the schema if it does not exist yet
    pub async fn initialize(&self) -> Result<()> {
        debug!("Initializing media index schema");

        let statements = [
            "CREATE TABLE IF NOT EXISTS songs (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                artist TEXT NOT NULL DEFAULT '',
                album TEXT NOT NULL DEFAULT '',
                album_id INTEGER NOT NULL DEFAULT 0,
                genre_id INTEGER NOT NULL DEFAULT 0,
                duration_ms INTEGER NOT NULL DEFAULT 0,
                path TEXT NOT NULL
            )",
            "CREATE TABLE IF NOT EXISTS albums (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                artist TEXT NOT NULL DEFAULT '',
                year INTEGER
            )",
            "CREATE TABLE IF NOT EXISTS artists (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL
            )",
            "CREATE TABLE IF NOT EXISTS genres (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL
            )",
            "CREATE TABLE IF NOT EXISTS playlists (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                date_added INTEGER NOT NULL
            )",
            "CREATE TABLE IF NOT EXISTS playlist_songs (
                playlist_id INTEGER NOT NULL,
                song_id INTEGER NOT NULL,
                play_order INTEGER NOT NULL,
                added_at INTEGER NOT NULL
            )",
            "CREATE INDEX IF NOT EXISTS idx_songs_genre ON songs(genre_id)",
            "CREATE INDEX IF NOT EXISTS idx_playlist_songs_playlist
                ON playlist_songs(playlist_id, play_order)",
        ];

        for statement in statements {
            query(statement).execute(&self.pool).await?;
        }

        debug!("Media index schema ready");
        Ok(())
    }

    async fn insert_members(&self, playlist_id: i64, songs: &[Song], start: i64) -> Result<()> {
        let added_at = chrono::Utc::now().timestamp();

        for (offset, song) in songs.iter().enumerate() {
            query(
                "INSERT INTO playlist_songs (playlist_id, song_id, play_order, added_at)
                 VALUES (?, ?, ?, ?)",
            )
            .bind(playlist_id)
            .bind(song.id)
            .bind(start + offset as i64)
            .bind(added_at)
            .execute(&self.pool)
            .await?;
        }

        Ok(())
    }

    // -------------------------------------------------------------------------
    // Scanner-facing inserts. The media scanner owns index population; the
    // test suites use these to seed fixtures.
    // -------------------------------------------------------------------------

    /// Insert a song row, returning it with its assigned id
    pub async fn insert_song(&self, song: &Song, genre_id: i64) -> Result<Song> {
        let result = query(
            "INSERT INTO songs (title, artist, album, album_id, genre_id, duration_ms, path)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&song.title)
        .bind(&song.artist)
        .bind(&song.album)
        .bind(song.album_id)
        .bind(genre_id)
        .bind(song.duration_ms)
        .bind(&song.path)
        .execute(&self.pool)
        .await?;

        Ok(Song {
            id: result.last_insert_rowid(),
            ..song.clone()
        })
    }

    /// Insert an album row, returning it with its assigned id
    pub async fn insert_album(&self, album: &Album) -> Result<Album> {
        let result = query("INSERT INTO albums (name, artist, year) VALUES (?, ?, ?)")
            .bind(&album.name)
            .bind(&album.artist)
            .bind(album.year)
            .execute(&self.pool)
            .await?;

        Ok(Album {
            id: result.last_insert_rowid(),
            ..album.clone()
        })
    }

    /// Insert an artist row
    pub async fn insert_artist(&self, name: &str) -> Result<Artist> {
        let result = query("INSERT INTO artists (name) VALUES (?)")
            .bind(name)
            .execute(&self.pool)
            .await?;

        Ok(Artist {
            id: result.last_insert_rowid(),
            name: name.to_string(),
        })
    }

    /// Insert a genre row
    pub async fn insert_genre(&self, name: &str) -> Result<Genre> {
        let result = query("INSERT INTO genres (name) VALUES (?)")
            .bind(name)
            .execute(&self.pool)
            .await?;

        Ok(Genre {
            id: result.last_insert_rowid(),
            name: name.to_string(),
        })
    }
}

#[async_trait]
impl MediaIndex for SqliteMediaIndex {
    async fn all_songs(&self) -> Result<Vec<Song>> {
        let songs = query_as::<_, Song>(
            "SELECT id, title, artist, album, album_id, duration_ms, path
             FROM songs ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(songs)
    }

    async fn all_albums(&self) -> Result<Vec<Album>> {
        let albums = query_as::<_, Album>("SELECT id, name, artist, year FROM albums ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await?;

        Ok(albums)
    }

    async fn all_artists(&self) -> Result<Vec<Artist>> {
        let artists = query_as::<_, Artist>("SELECT id, name FROM artists ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await?;

        Ok(artists)
    }

    async fn all_genres(&self) -> Result<Vec<Genre>> {
        let genres = query_as::<_, Genre>("SELECT id, name FROM genres ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await?;

        Ok(genres)
    }

    async fn all_playlists(&self) -> Result<Vec<Playlist>> {
        let playlists = query_as::<_, Playlist>("SELECT id, name FROM playlists ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await?;

        Ok(playlists)
    }

    async fn songs_in_genre(&self, genre_id: i64) -> Result<Vec<Song>> {
        let songs = query_as::<_, Song>(
            "SELECT id, title, artist, album, album_id, duration_ms, path
             FROM songs WHERE genre_id = ? ORDER BY id ASC",
        )
        .bind(genre_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(songs)
    }

    async fn playlist_songs(&self, playlist_id: i64) -> Result<Vec<Song>> {
        let songs = query_as::<_, Song>(
            "SELECT s.id, s.title, s.artist, s.album, s.album_id, s.duration_ms, s.path
             FROM songs s
             JOIN playlist_songs ps ON ps.song_id = s.id
             WHERE ps.playlist_id = ?
             ORDER BY ps.play_order ASC",
        )
        .bind(playlist_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(songs)
    }

    async fn search_playlists(&self, search: &str) -> Result<Vec<Playlist>> {
        let playlists = query_as::<_, Playlist>(
            "SELECT id, name FROM playlists WHERE name LIKE ? ORDER BY name ASC",
        )
        .bind(format!("%{}%", search))
        .fetch_all(&self.pool)
        .await?;

        Ok(playlists)
    }

    async fn find_playlist_by_name(&self, name: &str) -> Result<Option<Playlist>> {
        let playlist = query_as::<_, Playlist>(
            "SELECT id, name FROM playlists WHERE name = ? COLLATE NOCASE",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(playlist)
    }

    async fn create_playlist(&self, name: &str, songs: &[Song]) -> Result<Playlist> {
        if name.trim().is_empty() {
            return Err(LibraryError::InvalidInput {
                field: "name".to_string(),
                message: "Playlist name cannot be empty".to_string(),
            });
        }

        let result = query("INSERT INTO playlists (name, date_added) VALUES (?, ?)")
            .bind(name)
            .bind(chrono::Utc::now().timestamp())
            .execute(&self.pool)
            .await?;

        let playlist = Playlist::new(result.last_insert_rowid(), name);
        self.insert_members(playlist.id, songs, 0).await?;

        info!(playlist = %playlist.name, members = songs.len(), "Created playlist");
        Ok(playlist)
    }

    async fn delete_playlist(&self, playlist: &Playlist) -> Result<bool> {
        query("DELETE FROM playlist_songs WHERE playlist_id = ?")
            .bind(playlist.id)
            .execute(&self.pool)
            .await?;

        let result = query("DELETE FROM playlists WHERE id = ?")
            .bind(playlist.id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn edit_playlist(&self, playlist: &Playlist, songs: &[Song]) -> Result<()> {
        let existing = query_as::<_, (i64,)>("SELECT id FROM playlists WHERE id = ?")
            .bind(playlist.id)
            .fetch_optional(&self.pool)
            .await?;

        if existing.is_none() {
            return Err(LibraryError::NotFound {
                entity_type: "Playlist".to_string(),
                id: playlist.id,
            });
        }

        query("DELETE FROM playlist_songs WHERE playlist_id = ?")
            .bind(playlist.id)
            .execute(&self.pool)
            .await?;

        self.insert_members(playlist.id, songs, 0).await?;

        debug!(playlist = %playlist.name, members = songs.len(), "Replaced playlist members");
        Ok(())
    }

    async fn append_to_playlist(&self, playlist: &Playlist, songs: &[Song]) -> Result<()> {
        let (max_order,): (i64,) = query_as(
            "SELECT COALESCE(MAX(play_order), -1) FROM playlist_songs WHERE playlist_id = ?",
        )
        .bind(playlist.id)
        .fetch_one(&self.pool)
        .await?;

        self.insert_members(playlist.id, songs, max_order + 1).await
    }
}
