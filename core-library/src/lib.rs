//! # Library Management Module
//!
//! Owns the in-memory music library cache and the media index it is
//! populated from.
//!
//! ## Overview
//!
//! This module manages:
//! - Domain models for songs, albums, artists, playlists, and genres
//! - Display-name ordering (article stripping, letter partitioning)
//! - The session-scoped [`Library`](library::Library) cache with sorted accessors
//! - The [`MediaIndex`](media::MediaIndex) contract over the platform media
//!   database, with a SQLite implementation
//! - The genre list presentation model consumed by browsing UIs

pub mod browse;
pub mod error;
pub mod library;
pub mod media;
pub mod models;
pub mod sort;

pub use error::{LibraryError, Result};
pub use library::Library;
pub use media::{MediaIndex, SqliteMediaIndex};
pub use models::{Album, Artist, Genre, Playlist, Song};
pub use sort::LetterRule;
