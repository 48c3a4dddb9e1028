//! Recursive playlist discovery

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::error::WardenError;
use crate::formats::PlaylistFormat;
use crate::Result;

/// Scanner for playlist files in a collection tree
pub struct PlaylistScanner {
    /// Whether to follow symbolic links
    follow_links: bool,
}

impl Default for PlaylistScanner {
    fn default() -> Self {
        Self { follow_links: false }
    }
}

impl PlaylistScanner {
    /// Create a new playlist scanner
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to follow symbolic links
    pub fn follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    /// Scan a directory tree for playlist files
    ///
    /// Returns the matches sorted by path, for deterministic processing
    /// order. Unreadable entries are skipped with a diagnostic.
    pub fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        if !root.exists() {
            return Err(WardenError::PathNotFound(root.display().to_string()));
        }

        if !root.is_dir() {
            return Err(WardenError::InvalidPath(format!(
                "{} is not a directory",
                root.display()
            )));
        }

        let mut playlists = Vec::new();

        for entry in WalkDir::new(root).follow_links(self.follow_links) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    debug!(error = %err, "skipping unreadable entry");
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            if PlaylistFormat::from_path(entry.path()).is_some() {
                playlists.push(entry.into_path());
            }
        }

        playlists.sort();
        Ok(playlists)
    }
}
