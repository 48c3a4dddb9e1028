//! Console rendering for validation runs
//!
//! Everything here is pure string building; `main` decides what goes to
//! stdout. Missing-track previews are capped at five entries per playlist.

use std::fmt::Write;
use std::path::Path;

use warden_core::{PlaylistFormat, PlaylistResult, ValidationStats};

/// Number of missing references listed per invalid playlist
const MISSING_PREVIEW_LIMIT: usize = 5;

/// What happened (or would happen) to an invalid playlist's file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuarantineAction {
    /// Quarantine not configured, or playlist valid
    None,
    /// File was moved under the quarantine root
    Quarantined,
    /// The move was attempted and failed
    Failed,
    /// Dry-run: the file would have been moved
    WouldQuarantine,
}

/// Output toggles from the command line
pub struct ReportOptions {
    pub show_details: bool,
    pub show_valid: bool,
}

/// Header printed before scanning starts
pub fn scan_header(root: &Path, quarantine: Option<&Path>, dry_run: bool) -> String {
    let mut extensions: Vec<String> = PlaylistFormat::EXTENSIONS
        .iter()
        .map(|ext| format!(".{ext}"))
        .collect();
    extensions.sort();

    let mut out = String::new();
    let _ = writeln!(out, "Scanning for playlists in: {}", root.display());
    let _ = writeln!(out, "Looking for extensions: {}", extensions.join(", "));
    if let Some(quarantine) = quarantine {
        let _ = writeln!(out, "Quarantine directory: {}", quarantine.display());
        if dry_run {
            let _ = writeln!(out, "DRY RUN MODE: No files will be moved");
        }
    }
    let _ = writeln!(out, "{}", "-".repeat(70));
    out
}

/// Render one playlist's status block, or `None` when nothing should print
///
/// Valid playlists only print under `--show-valid`; invalid playlists always
/// print, with track details unless `--no-details`.
pub fn playlist_report(
    result: &PlaylistResult,
    root: &Path,
    action: QuarantineAction,
    options: &ReportOptions,
) -> Option<String> {
    let display_path = result.playlist.strip_prefix(root).unwrap_or(&result.playlist);
    let mut out = String::new();

    if result.is_valid() {
        if !options.show_valid {
            return None;
        }
        let _ = writeln!(out, "✓ VALID: {}", display_path.display());
        if options.show_details {
            let _ = writeln!(out, "   Tracks: {}", result.valid_tracks.len());
        }
        return Some(out);
    }

    let suffix = match action {
        QuarantineAction::None => "",
        QuarantineAction::Quarantined => " [QUARANTINED]",
        QuarantineAction::Failed => " [QUARANTINE FAILED]",
        QuarantineAction::WouldQuarantine => " [WOULD QUARANTINE]",
    };
    let _ = writeln!(out, "✗ INVALID: {}{}", display_path.display(), suffix);

    if options.show_details {
        if let Some(diagnostic) = &result.diagnostic {
            let _ = writeln!(out, "   Error: {diagnostic}");
        }
        let _ = writeln!(out, "   Valid tracks: {}", result.valid_tracks.len());
        let _ = writeln!(out, "   Missing tracks: {}", result.missing_tracks.len());

        if !result.missing_tracks.is_empty() {
            let _ = writeln!(out, "   Missing files:");
            for missing in result.missing_tracks.iter().take(MISSING_PREVIEW_LIMIT) {
                let _ = writeln!(out, "     - {missing}");
            }
            if result.missing_tracks.len() > MISSING_PREVIEW_LIMIT {
                let _ = writeln!(
                    out,
                    "     ... and {} more",
                    result.missing_tracks.len() - MISSING_PREVIEW_LIMIT
                );
            }
        }
    }

    out.push('\n');
    Some(out)
}

/// Final summary block with the two validity percentages
///
/// Either percentage line is omitted when its denominator is zero.
pub fn summary(stats: &ValidationStats, quarantine_enabled: bool) -> String {
    let mut out = String::new();
    let rule = "=".repeat(70);

    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "VALIDATION SUMMARY");
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "Playlists found:     {}", stats.playlists_found);
    let _ = writeln!(out, "Valid playlists:     {}", stats.valid_playlists);
    let _ = writeln!(out, "Invalid playlists:   {}", stats.invalid_playlists);
    if quarantine_enabled {
        let _ = writeln!(out, "Quarantined:         {}", stats.quarantined_playlists);
    }
    let _ = writeln!(out, "Total tracks:        {}", stats.total_tracks);
    let _ = writeln!(out, "Valid tracks:        {}", stats.valid_tracks);
    let _ = writeln!(out, "Missing tracks:      {}", stats.missing_tracks);

    if let Some(pct) = stats.playlist_validity() {
        let _ = writeln!(out, "Playlist validity:   {pct:.1}%");
    }
    if let Some(pct) = stats.track_validity() {
        let _ = writeln!(out, "Track validity:      {pct:.1}%");
    }

    out
}
