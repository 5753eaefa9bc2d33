//! # Playlist Management Module
//!
//! Playlist persistence over the platform media index, plus the sidecar
//! files that hold auto-playlist rule configurations.
//!
//! ## Overview
//!
//! - [`PlaylistStore`](store::PlaylistStore) - CRUD, search, and name
//!   validation, with a latest-snapshot subscription for list UIs
//! - [`LocalPlaylistStore`](store::LocalPlaylistStore) - the on-device
//!   implementation writing through the media index
//! - [`AutoPlaylist`](auto::AutoPlaylist) - rule-configured playlists whose
//!   membership is regenerated from criteria
//! - [`sidecar`] - the versioned `.jpl` JSON format the rules persist in

pub mod auto;
pub mod error;
pub mod sidecar;
pub mod store;

pub use auto::{AutoPlaylist, AutoPlaylistRule, AutoPlaylistSort, RuleField, RuleFilter};
pub use error::{PlaylistError, PlaylistNameError, Result};
pub use store::{LocalPlaylistStore, PlaylistStore};
