//! Per-playlist validation

use std::fs;
use std::path::Path;

use tracing::warn;

use crate::error::WardenError;
use crate::formats::{self, PlaylistFormat};
use crate::resolver;
use crate::types::PlaylistResult;
use crate::Result;

/// Validate a single playlist against the filesystem
///
/// Read and parse failures never propagate: they are recorded as the
/// result's diagnostic, yield zero references, and the playlist classifies
/// invalid through the empty-valid-set invariant.
pub fn validate_playlist(playlist: &Path, collection_root: &Path) -> PlaylistResult {
    let mut result = PlaylistResult {
        playlist: playlist.to_path_buf(),
        valid_tracks: Vec::new(),
        missing_tracks: Vec::new(),
        diagnostic: None,
    };

    let references = match read_references(playlist) {
        Ok(references) => references,
        Err(err) => {
            warn!(playlist = %playlist.display(), error = %err, "failed to read playlist");
            result.diagnostic = Some(err.to_string());
            return result;
        }
    };

    let playlist_dir = playlist.parent().unwrap_or(collection_root);

    for reference in references {
        let track = resolver::resolve_track(reference, playlist_dir, collection_root);
        if track.exists {
            result.valid_tracks.push(track.path);
        } else {
            // Report the raw reference, not the candidate we probed.
            result.missing_tracks.push(track.reference);
        }
    }

    result
}

fn read_references(playlist: &Path) -> Result<Vec<String>> {
    let Some(format) = PlaylistFormat::from_path(playlist) else {
        // Discovery filters by extension; anything else parses to nothing.
        return Ok(Vec::new());
    };

    let bytes = fs::read(playlist)?;
    // Lossy decode: a playlist with stray bytes still yields its readable
    // references instead of failing wholesale.
    let content = String::from_utf8_lossy(&bytes);

    formats::parse(format, &content).map_err(|err| WardenError::PlaylistParse {
        path: playlist.to_path_buf(),
        reason: err.to_string(),
    })
}
