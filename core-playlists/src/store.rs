//! Playlist store
//!
//! CRUD over the media index with a published latest-snapshot of the
//! playlist list. The snapshot is a `tokio::sync::watch` cell: new
//! subscribers immediately observe the most recent list, and every mutation
//! publishes an updated, name-sorted copy.
//!
//! Auto playlists write through twice: the identity and generated
//! membership land in the media index so every consumer of the index sees
//! the playlist, while the rule configuration lands in a `.jpl` sidecar
//! file. A sidecar write failure is reported to the diagnostics sink and
//! deliberately not propagated, so the playlist can exist in the index with
//! its configuration missing on disk until the next successful save.

use crate::auto::AutoPlaylist;
use crate::error::{PlaylistNameError, Result};
use crate::sidecar;
use async_trait::async_trait;
use bridge_traits::diagnostics::{DiagnosticsSink, ErrorReport};
use bridge_traits::storage::FileSystemAccess;
use bytes::Bytes;
use core_library::media::MediaIndex;
use core_library::models::{Playlist, Song};
use core_library::sort::{compare_names, LetterRule};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, error, info, warn};

/// Playlist persistence interface.
#[async_trait]
pub trait PlaylistStore: Send + Sync {
    /// Re-query the media index and publish a fresh snapshot.
    async fn refresh(&self) -> Result<()>;

    /// Subscribe to the playlist list. The receiver observes the latest
    /// published snapshot immediately and every update afterwards.
    fn playlists(&self) -> watch::Receiver<Vec<Playlist>>;

    /// Member songs of a playlist, in play order.
    async fn playlist_songs(&self, playlist: &Playlist) -> Result<Vec<Song>>;

    /// Playlists whose name contains the query.
    async fn search(&self, query: &str) -> Result<Vec<Playlist>>;

    /// Validate a proposed playlist name.
    ///
    /// Returns `None` when the name is acceptable; otherwise the reason,
    /// ready for inline display. Blank names and names already in use are
    /// the two rejected cases.
    async fn verify_playlist_name(&self, name: &str) -> Result<Option<PlaylistNameError>>;

    /// Create a playlist with the given members.
    async fn make_playlist(&self, name: &str, songs: &[Song]) -> Result<Playlist>;

    /// Register an auto playlist: create its identity in the media index,
    /// seed generated membership, and persist the rule configuration.
    async fn make_auto_playlist(&self, playlist: AutoPlaylist) -> Result<AutoPlaylist>;

    /// Delete a playlist.
    async fn remove_playlist(&self, playlist: &Playlist) -> Result<()>;

    /// Replace a playlist's members.
    async fn edit_playlist(&self, playlist: &Playlist, songs: &[Song]) -> Result<()>;

    /// Save an updated rule configuration and regenerate membership.
    async fn edit_auto_playlist(&self, playlist: AutoPlaylist) -> Result<()>;

    /// Append songs to a playlist.
    async fn add_to_playlist(&self, playlist: &Playlist, songs: &[Song]) -> Result<()>;

    /// Read every auto-playlist configuration from the data directory.
    async fn load_auto_playlists(&self) -> Result<Vec<AutoPlaylist>>;
}

/// On-device playlist store backed by the media index and sidecar files.
pub struct LocalPlaylistStore {
    index: Arc<dyn MediaIndex>,
    files: Arc<dyn FileSystemAccess>,
    diagnostics: Arc<dyn DiagnosticsSink>,
    snapshot: watch::Sender<Vec<Playlist>>,
}

impl LocalPlaylistStore {
    pub fn new(
        index: Arc<dyn MediaIndex>,
        files: Arc<dyn FileSystemAccess>,
        diagnostics: Arc<dyn DiagnosticsSink>,
    ) -> Self {
        let (snapshot, _) = watch::channel(Vec::new());
        Self {
            index,
            files,
            diagnostics,
            snapshot,
        }
    }

    fn publish<F>(&self, mutate: F)
    where
        F: FnOnce(&mut Vec<Playlist>),
    {
        self.snapshot.send_modify(|list| {
            mutate(list);
            list.sort_by(|a, b| compare_names(&a.name, &b.name, false, LetterRule::default()));
        });
    }

    async fn write_sidecar(&self, playlist: &AutoPlaylist) -> Result<()> {
        let json = sidecar::encode(playlist)?;
        let dir = self.files.get_data_directory().await?;
        let path = dir.join(sidecar::sidecar_file_name(&playlist.playlist.name));

        self.files.write_file(&path, Bytes::from(json)).await?;
        debug!(path = ?path, "Wrote auto playlist sidecar");
        Ok(())
    }

    /// Seed membership from the rules and persist the configuration.
    ///
    /// Neither step may abort the caller: a membership seed failure is
    /// logged, a sidecar failure goes to the diagnostics collector.
    async fn save_configuration(&self, playlist: &AutoPlaylist) {
        match self.index.all_songs().await {
            Ok(catalog) => {
                let members = playlist.generate(&catalog);
                if let Err(e) = self.index.edit_playlist(&playlist.playlist, &members).await {
                    error!(
                        playlist = %playlist.playlist.name,
                        error = %e,
                        "Failed to initialize auto playlist contents"
                    );
                }
            }
            Err(e) => {
                error!(
                    playlist = %playlist.playlist.name,
                    error = %e,
                    "Failed to read catalog for auto playlist contents"
                );
            }
        }

        if let Err(e) = self.write_sidecar(playlist).await {
            warn!(
                playlist = %playlist.playlist.name,
                error = %e,
                "Sidecar write failed; configuration not persisted"
            );

            let report = ErrorReport::new(
                "playlist_store",
                format!(
                    "Failed to persist configuration for \"{}\": {}",
                    playlist.playlist.name, e
                ),
            );
            if let Err(report_error) = self.diagnostics.report(report).await {
                warn!(error = %report_error, "Diagnostics report delivery failed");
            }
        }
    }
}

#[async_trait]
impl PlaylistStore for LocalPlaylistStore {
    async fn refresh(&self) -> Result<()> {
        let playlists = self.index.all_playlists().await?;
        self.publish(|list| *list = playlists);
        Ok(())
    }

    fn playlists(&self) -> watch::Receiver<Vec<Playlist>> {
        self.snapshot.subscribe()
    }

    async fn playlist_songs(&self, playlist: &Playlist) -> Result<Vec<Song>> {
        Ok(self.index.playlist_songs(playlist.id).await?)
    }

    async fn search(&self, query: &str) -> Result<Vec<Playlist>> {
        Ok(self.index.search_playlists(query).await?)
    }

    async fn verify_playlist_name(&self, name: &str) -> Result<Option<PlaylistNameError>> {
        if name.trim().is_empty() {
            return Ok(Some(PlaylistNameError::Empty));
        }

        if let Some(existing) = self.index.find_playlist_by_name(name).await? {
            return Ok(Some(PlaylistNameError::Duplicate(existing.name)));
        }

        Ok(None)
    }

    async fn make_playlist(&self, name: &str, songs: &[Song]) -> Result<Playlist> {
        let created = self.index.create_playlist(name, songs).await?;

        let for_snapshot = created.clone();
        self.publish(|list| list.push(for_snapshot));

        info!(playlist = %created.name, "Playlist created");
        Ok(created)
    }

    async fn make_auto_playlist(&self, playlist: AutoPlaylist) -> Result<AutoPlaylist> {
        let registered = self
            .index
            .create_playlist(&playlist.playlist.name, &[])
            .await?;

        let created = playlist.with_id(registered.id);
        self.save_configuration(&created).await;

        self.publish(|list| list.push(registered));

        info!(playlist = %created.playlist.name, "Auto playlist created");
        Ok(created)
    }

    async fn remove_playlist(&self, playlist: &Playlist) -> Result<()> {
        self.index.delete_playlist(playlist).await?;

        let removed_id = playlist.id;
        self.publish(|list| list.retain(|p| p.id != removed_id));

        info!(playlist = %playlist.name, "Playlist removed");
        Ok(())
    }

    async fn edit_playlist(&self, playlist: &Playlist, songs: &[Song]) -> Result<()> {
        Ok(self.index.edit_playlist(playlist, songs).await?)
    }

    async fn edit_auto_playlist(&self, playlist: AutoPlaylist) -> Result<()> {
        self.save_configuration(&playlist).await;

        let replacement = playlist.playlist.clone();
        self.publish(|list| {
            if let Some(entry) = list.iter_mut().find(|p| p.id == replacement.id) {
                *entry = replacement;
            }
        });

        Ok(())
    }

    async fn add_to_playlist(&self, playlist: &Playlist, songs: &[Song]) -> Result<()> {
        Ok(self.index.append_to_playlist(playlist, songs).await?)
    }

    async fn load_auto_playlists(&self) -> Result<Vec<AutoPlaylist>> {
        let dir = self.files.get_data_directory().await?;
        let entries = self.files.list_directory(&dir).await?;

        let mut playlists = Vec::new();
        for path in entries {
            if !sidecar::is_sidecar_path(&path) {
                continue;
            }

            let bytes = self.files.read_file(&path).await?;
            match sidecar::decode(&bytes) {
                Ok(playlist) => playlists.push(playlist),
                Err(e) => {
                    warn!(path = ?path, error = %e, "Skipping unreadable sidecar file");
                }
            }
        }

        Ok(playlists)
    }
}
