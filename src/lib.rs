//! Core service façade and bootstrap helpers.
//!
//! This crate wires host-provided bridge implementations (HTTP, filesystem,
//! diagnostics) and the media index into the library, playlist, and status
//! modules. Desktop embeddings call [`bootstrap`] with an
//! [`AppConfig`](core_runtime::AppConfig); other hosts construct
//! [`CoreDependencies`] from their own adapters and use
//! [`CoreService::with_config`] directly.

pub mod error;

pub use error::{CoreError, Result};

use std::sync::Arc;

use bridge_desktop::{LogDiagnostics, ReqwestHttpClient, TokioFileSystem};
use bridge_traits::{
    diagnostics::DiagnosticsSink, http::HttpClient, storage::FileSystemAccess,
};
use core_library::{
    media::{create_pool, MediaIndex, SqliteMediaIndex},
    Library,
};
use core_playlists::{LocalPlaylistStore, PlaylistStore};
use core_runtime::AppConfig;
use core_status::StatusApi;
use tracing::info;

/// Aggregated handle to all bridge dependencies the core requires.
pub struct CoreDependencies {
    pub http_client: Arc<dyn HttpClient>,
    pub filesystem: Arc<dyn FileSystemAccess>,
    pub media_index: Arc<dyn MediaIndex>,
    pub diagnostics: Arc<dyn DiagnosticsSink>,
}

impl CoreDependencies {
    /// Construct a dependency bundle from explicit bridge handles.
    pub fn new(
        http_client: Arc<dyn HttpClient>,
        filesystem: Arc<dyn FileSystemAccess>,
        media_index: Arc<dyn MediaIndex>,
        diagnostics: Arc<dyn DiagnosticsSink>,
    ) -> Self {
        Self {
            http_client,
            filesystem,
            media_index,
            diagnostics,
        }
    }
}

/// Primary façade exposed to host applications.
pub struct CoreService {
    deps: Arc<CoreDependencies>,
    playlists: Arc<LocalPlaylistStore>,
    status: StatusApi,
}

impl CoreService {
    /// Create a service from the provided dependencies and configuration.
    pub fn with_config(deps: CoreDependencies, config: &AppConfig) -> Self {
        let deps = Arc::new(deps);

        let playlists = Arc::new(LocalPlaylistStore::new(
            Arc::clone(&deps.media_index),
            Arc::clone(&deps.filesystem),
            Arc::clone(&deps.diagnostics),
        ));

        let status = StatusApi::new(Arc::clone(&deps.http_client), config.status_base_url.as_str());

        Self {
            deps,
            playlists,
            status,
        }
    }

    /// Access the bridge dependencies being used by the service.
    pub fn dependencies(&self) -> Arc<CoreDependencies> {
        Arc::clone(&self.deps)
    }

    /// The playlist store.
    pub fn playlists(&self) -> Arc<dyn PlaylistStore> {
        Arc::clone(&self.playlists) as Arc<dyn PlaylistStore>
    }

    /// The status API client.
    pub fn status(&self) -> &StatusApi {
        &self.status
    }

    /// Create a session library cache, populated from the media index.
    pub async fn load_library(&self) -> Result<Library> {
        let mut library = Library::new();
        library.rescan(self.deps.media_index.as_ref()).await?;
        Ok(library)
    }
}

/// Bootstrap a desktop service: open the media index database, wire the
/// desktop bridges, and publish the initial playlist snapshot.
pub async fn bootstrap(config: AppConfig) -> Result<CoreService> {
    let pool = create_pool(&config.database_path).await?;
    let index = SqliteMediaIndex::new(pool);
    index.initialize().await?;

    let filesystem: Arc<dyn FileSystemAccess> = match &config.data_dir {
        Some(dir) => Arc::new(TokioFileSystem::with_data_directory(dir.clone())),
        None => Arc::new(TokioFileSystem::new()),
    };

    let deps = CoreDependencies::new(
        Arc::new(ReqwestHttpClient::new()?),
        filesystem,
        Arc::new(index),
        Arc::new(LogDiagnostics),
    );

    let service = CoreService::with_config(deps, &config);
    service.playlists.refresh().await?;

    info!(database = %config.database_path, "Core service ready");
    Ok(service)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(dir: &std::path::Path) -> AppConfig {
        AppConfig::default()
            .with_database_path(dir.join("index.db").display().to_string())
            .with_data_dir(dir.join("data"))
    }

    #[tokio::test]
    async fn test_bootstrap_and_create_playlist() {
        let dir = tempfile::tempdir().unwrap();
        let service = bootstrap(test_config(dir.path())).await.unwrap();

        let store = service.playlists();
        assert!(store.playlists().borrow().is_empty());

        store.make_playlist("Evening", &[]).await.unwrap();

        let names: Vec<String> = store
            .playlists()
            .borrow()
            .iter()
            .map(|p| p.name.clone())
            .collect();
        assert_eq!(names, vec!["Evening"]);
    }

    #[tokio::test]
    async fn test_load_library_reflects_index() {
        let dir = tempfile::tempdir().unwrap();
        let service = bootstrap(test_config(dir.path())).await.unwrap();

        service.playlists().make_playlist("Mix", &[]).await.unwrap();

        let mut library = service.load_library().await.unwrap();
        assert_eq!(library.playlists().len(), 1);
        assert!(library.songs().is_empty());
    }
}
