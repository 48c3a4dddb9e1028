//! Playlist Warden Core
//!
//! Scans music collections for playlist files, parses the supported container
//! formats, and checks every referenced track against the filesystem.
//!
//! # Architecture
//!
//! - `formats`: one parser per playlist container (M3U/M3U8, PLS, XSPF, WPL, ASX)
//! - `resolver`: maps raw track references to filesystem candidates
//! - `validator`: per-playlist orchestration and classification
//! - `scanner`: recursive playlist discovery
//! - `quarantine`: relocation of invalid playlists

#![forbid(unsafe_code)]

pub mod error;
pub mod formats;
pub mod quarantine;
pub mod resolver;
pub mod scanner;
pub mod types;
pub mod validator;

pub use error::WardenError;
pub use formats::PlaylistFormat;
pub use quarantine::quarantine_playlist;
pub use scanner::PlaylistScanner;
pub use types::{PlaylistResult, ResolvedTrack, ValidationStats};
pub use validator::validate_playlist;

/// Re-export commonly used types
pub type Result<T> = std::result::Result<T, WardenError>;
