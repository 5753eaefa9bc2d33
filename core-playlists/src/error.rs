use bridge_traits::error::BridgeError;
use core_library::LibraryError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlaylistError {
    #[error("Library error: {0}")]
    Library(#[from] LibraryError),

    #[error("Bridge error: {0}")]
    Bridge(#[from] BridgeError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Why a proposed playlist name was rejected.
///
/// Carried as a value, not an error return: an invalid name is an expected
/// outcome the UI renders inline next to the input field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlaylistNameError {
    #[error("Playlist name cannot be blank")]
    Empty,

    #[error("A playlist named \"{0}\" already exists")]
    Duplicate(String),
}

pub type Result<T> = std::result::Result<T, PlaylistError>;
