use bridge_traits::error::BridgeError;
use core_library::LibraryError;
use core_playlists::PlaylistError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Library error: {0}")]
    Library(#[from] LibraryError),

    #[error("Playlist error: {0}")]
    Playlist(#[from] PlaylistError),

    #[error("Bridge error: {0}")]
    Bridge(#[from] BridgeError),

    #[error("Runtime error: {0}")]
    Runtime(#[from] core_runtime::Error),
}

pub type Result<T> = std::result::Result<T, CoreError>;
