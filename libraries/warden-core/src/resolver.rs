//! Track reference resolution
//!
//! Playlists are most commonly authored with paths relative to their own
//! location; root-relative references are a secondary convention for flat
//! collection exports. Absolute references trust the author.

use std::path::{Path, PathBuf};

use crate::types::{is_audio_file, ResolvedTrack};

/// Resolve a raw track reference to a filesystem candidate
///
/// Backslash separators are normalized to forward slashes first. Absolute
/// references pass through unchanged; relative references try the playlist's
/// own directory, then the collection root. When neither candidate exists
/// the playlist-relative one is returned so the caller can report the
/// location that was tested.
pub fn resolve(reference: &str, playlist_dir: &Path, collection_root: &Path) -> PathBuf {
    let normalized = reference.replace('\\', "/");
    let candidate = Path::new(&normalized);

    if candidate.is_absolute() {
        return candidate.to_path_buf();
    }

    let relative = playlist_dir.join(candidate);
    if relative.exists() {
        return relative;
    }

    let root_relative = collection_root.join(candidate);
    if root_relative.exists() {
        return root_relative;
    }

    relative
}

/// Resolve a reference and attach the existence/extension verdict
pub fn resolve_track(reference: String, playlist_dir: &Path, collection_root: &Path) -> ResolvedTrack {
    let path = resolve(&reference, playlist_dir, collection_root);
    let exists = path.exists() && is_audio_file(&path);

    ResolvedTrack { reference, path, exists }
}
