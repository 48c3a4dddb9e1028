//! Relocation of invalid playlists

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::WardenError;
use crate::Result;

/// Move an invalid playlist under the quarantine root
///
/// The destination mirrors the playlist's path relative to the collection
/// root, so `root/sub/dir/list.m3u` lands at `quarantine/sub/dir/list.m3u`.
/// Missing parent directories are created. Returns the destination path.
pub fn quarantine_playlist(
    playlist: &Path,
    collection_root: &Path,
    quarantine_root: &Path,
) -> Result<PathBuf> {
    let relative = playlist
        .strip_prefix(collection_root)
        .map_err(|_| WardenError::OutsideRoot {
            path: playlist.to_path_buf(),
            root: collection_root.to_path_buf(),
        })?;

    let destination = quarantine_root.join(relative);
    if let Some(parent) = destination.parent() {
        fs::create_dir_all(parent)?;
    }

    // Rename when possible; fall back to copy+remove for cross-device moves.
    if fs::rename(playlist, &destination).is_err() {
        fs::copy(playlist, &destination)?;
        fs::remove_file(playlist)?;
    }

    debug!(from = %playlist.display(), to = %destination.display(), "quarantined playlist");
    Ok(destination)
}
