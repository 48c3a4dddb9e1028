//! Domain types for playlist validation

use std::path::{Path, PathBuf};

/// Audio file extensions recognized as valid track targets (lowercase)
pub const AUDIO_EXTENSIONS: &[&str] = &[
    "mp3", "flac", "wav", "m4a", "aac", "ogg", "wma", "ape", "opus", "aiff", "dsf", "dff", "mpc",
    "tta",
];

/// Check whether a path carries a recognized audio extension (case-insensitive)
pub fn is_audio_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| AUDIO_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// A raw track reference paired with the filesystem location it resolved to
#[derive(Debug, Clone)]
pub struct ResolvedTrack {
    /// Reference string exactly as extracted from the playlist
    pub reference: String,

    /// Candidate filesystem path produced by the resolver
    pub path: PathBuf,

    /// Whether the candidate exists and has a recognized audio extension
    pub exists: bool,
}

/// Outcome of validating a single playlist file
#[derive(Debug, Clone)]
pub struct PlaylistResult {
    /// Path of the playlist that was validated
    pub playlist: PathBuf,

    /// Resolved locations of tracks that exist and look like audio files
    pub valid_tracks: Vec<PathBuf>,

    /// Raw reference strings of tracks that could not be resolved
    pub missing_tracks: Vec<String>,

    /// Diagnostic from a failed read or parse, if any
    pub diagnostic: Option<String>,
}

impl PlaylistResult {
    /// A playlist is valid when nothing is missing and at least one track
    /// resolved. An empty playlist is never valid.
    pub fn is_valid(&self) -> bool {
        self.missing_tracks.is_empty() && !self.valid_tracks.is_empty()
    }

    /// Total number of track references found in the playlist
    pub fn track_count(&self) -> usize {
        self.valid_tracks.len() + self.missing_tracks.len()
    }
}

/// Running counters for a validation run
///
/// Owned by the orchestrator and updated once per playlist; safe to reuse as
/// a library because nothing here is global.
#[derive(Debug, Clone, Default)]
pub struct ValidationStats {
    pub playlists_found: usize,
    pub valid_playlists: usize,
    pub invalid_playlists: usize,
    pub quarantined_playlists: usize,
    pub total_tracks: usize,
    pub valid_tracks: usize,
    pub missing_tracks: usize,
}

impl ValidationStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one playlist's outcome into the counters
    pub fn record(&mut self, result: &PlaylistResult) {
        self.total_tracks += result.track_count();
        self.valid_tracks += result.valid_tracks.len();
        self.missing_tracks += result.missing_tracks.len();

        if result.is_valid() {
            self.valid_playlists += 1;
        } else {
            self.invalid_playlists += 1;
        }
    }

    /// Percentage of playlists that validated, or `None` when none were found
    pub fn playlist_validity(&self) -> Option<f64> {
        if self.playlists_found == 0 {
            return None;
        }
        Some(self.valid_playlists as f64 / self.playlists_found as f64 * 100.0)
    }

    /// Percentage of tracks that resolved, or `None` when no tracks were seen
    pub fn track_validity(&self) -> Option<f64> {
        if self.total_tracks == 0 {
            return None;
        }
        Some(self.valid_tracks as f64 / self.total_tracks as f64 * 100.0)
    }
}
