//! Auto-playlist sidecar format
//!
//! Rule configurations are not representable in the media index, so each
//! auto playlist persists one as a pretty-printed JSON file named
//! `<playlist-name>.jpl` in the application's private data directory. The
//! document carries a version field; files written before versioning decode
//! as version 1.

use crate::auto::AutoPlaylist;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Sidecar file extension (without the dot).
pub const SIDECAR_EXTENSION: &str = "jpl";

/// Version written to new sidecar files.
pub const SIDECAR_VERSION: u32 = 1;

fn default_version() -> u32 {
    1
}

/// On-disk shape of a sidecar file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidecarDocument {
    /// Format version, for future migrations.
    #[serde(default = "default_version")]
    pub version: u32,
    /// The persisted rule configuration and playlist identity.
    pub playlist: AutoPlaylist,
}

/// File name for a playlist's sidecar.
pub fn sidecar_file_name(playlist_name: &str) -> String {
    format!("{}.{}", playlist_name, SIDECAR_EXTENSION)
}

/// Whether a path looks like a sidecar file.
pub fn is_sidecar_path(path: &Path) -> bool {
    path.extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case(SIDECAR_EXTENSION))
}

/// Serialize a configuration to the pretty-printed sidecar document.
pub fn encode(playlist: &AutoPlaylist) -> Result<String> {
    let document = SidecarDocument {
        version: SIDECAR_VERSION,
        playlist: playlist.clone(),
    };
    Ok(serde_json::to_string_pretty(&document)?)
}

/// Parse a sidecar document back into a configuration.
pub fn decode(bytes: &[u8]) -> Result<AutoPlaylist> {
    let document: SidecarDocument = serde_json::from_slice(bytes)?;
    Ok(document.playlist)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auto::{AutoPlaylistRule, RuleField, RuleFilter};

    #[test]
    fn test_sidecar_file_name() {
        assert_eq!(sidecar_file_name("Road Trip"), "Road Trip.jpl");
    }

    #[test]
    fn test_is_sidecar_path() {
        assert!(is_sidecar_path(Path::new("/data/Mix.jpl")));
        assert!(is_sidecar_path(Path::new("/data/Mix.JPL")));
        assert!(!is_sidecar_path(Path::new("/data/Mix.json")));
        assert!(!is_sidecar_path(Path::new("/data/jpl")));
    }

    #[test]
    fn test_encode_is_pretty_and_versioned() {
        let auto = AutoPlaylist::new("Recent");
        let json = encode(&auto).unwrap();

        // Pretty printing spans multiple lines and the version is explicit.
        assert!(json.contains('\n'));
        assert!(json.contains("\"version\": 1"));
        assert!(json.contains("\"Recent\""));
    }

    #[test]
    fn test_roundtrip() {
        let mut auto = AutoPlaylist::new("Favorites");
        auto.rules = vec![AutoPlaylistRule::new(
            RuleField::Artist,
            RuleFilter::Contains,
            "beach",
        )];
        auto.truncate = Some(25);

        let json = encode(&auto).unwrap();
        let decoded = decode(json.as_bytes()).unwrap();
        assert_eq!(decoded, auto);
    }

    #[test]
    fn test_decode_without_version_defaults_to_one() {
        let auto = AutoPlaylist::new("Old File");
        let bare = serde_json::json!({ "playlist": auto });
        let document: SidecarDocument =
            serde_json::from_slice(bare.to_string().as_bytes()).unwrap();

        assert_eq!(document.version, 1);
        assert_eq!(document.playlist.playlist.name, "Old File");
    }
}
