use std::fs;

use tempfile::TempDir;
use warden_core::validate_playlist;

#[test]
fn test_m3u_with_one_missing_track_is_invalid() {
    let root = TempDir::new().unwrap();
    fs::write(root.path().join("track1.mp3"), b"x").unwrap();

    let playlist = root.path().join("pl.m3u");
    fs::write(&playlist, "# comment\ntrack1.mp3\nmissing.mp3\n").unwrap();

    let result = validate_playlist(&playlist, root.path());
    assert!(!result.is_valid());
    assert_eq!(result.valid_tracks, vec![root.path().join("track1.mp3")]);
    // The raw reference is reported, not the probed candidate path.
    assert_eq!(result.missing_tracks, vec!["missing.mp3"]);
    assert_eq!(result.track_count(), 2);
}

#[test]
fn test_fully_resolvable_playlist_is_valid() {
    let root = TempDir::new().unwrap();
    fs::write(root.path().join("a.mp3"), b"x").unwrap();
    fs::write(root.path().join("b.flac"), b"x").unwrap();

    let playlist = root.path().join("pl.m3u");
    fs::write(&playlist, "a.mp3\nb.flac\n").unwrap();

    let result = validate_playlist(&playlist, root.path());
    assert!(result.is_valid());
    assert_eq!(result.valid_tracks.len(), 2);
    assert!(result.missing_tracks.is_empty());
}

#[test]
fn test_empty_playlist_is_invalid() {
    let root = TempDir::new().unwrap();
    let playlist = root.path().join("empty.m3u");
    fs::write(&playlist, "#EXTM3U\n").unwrap();

    let result = validate_playlist(&playlist, root.path());
    assert!(!result.is_valid());
    assert_eq!(result.track_count(), 0);
}

#[test]
fn test_pls_scenario() {
    let root = TempDir::new().unwrap();
    fs::write(root.path().join("song.flac"), b"x").unwrap();

    let playlist = root.path().join("pl.pls");
    fs::write(&playlist, "[playlist]\nFile1=song.flac\nNumberOfEntries=1\n").unwrap();

    let result = validate_playlist(&playlist, root.path());
    assert!(result.is_valid());
    assert_eq!(result.valid_tracks, vec![root.path().join("song.flac")]);
}

#[test]
fn test_absolute_existing_track_is_valid_regardless_of_root() {
    let music = TempDir::new().unwrap();
    fs::write(music.path().join("song.mp3"), b"x").unwrap();

    // Playlist lives in an unrelated tree.
    let root = TempDir::new().unwrap();
    let playlist = root.path().join("pl.m3u");
    fs::write(&playlist, format!("{}\n", music.path().join("song.mp3").display())).unwrap();

    let result = validate_playlist(&playlist, root.path());
    assert!(result.is_valid());
}

#[test]
fn test_track_relative_to_collection_root() {
    let root = TempDir::new().unwrap();
    fs::create_dir_all(root.path().join("playlists")).unwrap();
    fs::create_dir_all(root.path().join("albums")).unwrap();
    fs::write(root.path().join("albums/song.ogg"), b"x").unwrap();

    let playlist = root.path().join("playlists/pl.m3u");
    fs::write(&playlist, "albums/song.ogg\n").unwrap();

    let result = validate_playlist(&playlist, root.path());
    assert!(result.is_valid());
    assert_eq!(result.valid_tracks, vec![root.path().join("albums/song.ogg")]);
}

#[test]
fn test_existing_file_with_wrong_extension_is_missing() {
    let root = TempDir::new().unwrap();
    fs::write(root.path().join("notes.txt"), b"x").unwrap();

    let playlist = root.path().join("pl.m3u");
    fs::write(&playlist, "notes.txt\n").unwrap();

    let result = validate_playlist(&playlist, root.path());
    assert!(!result.is_valid());
    assert_eq!(result.missing_tracks, vec!["notes.txt"]);
}

#[test]
fn test_http_reference_reports_missing() {
    let root = TempDir::new().unwrap();
    let playlist = root.path().join("pl.m3u");
    fs::write(&playlist, "http://example.com/stream.mp3\n").unwrap();

    let result = validate_playlist(&playlist, root.path());
    assert!(!result.is_valid());
    assert_eq!(result.missing_tracks, vec!["http://example.com/stream.mp3"]);
}

#[test]
fn test_malformed_xspf_yields_diagnostic_not_panic() {
    let root = TempDir::new().unwrap();
    let playlist = root.path().join("broken.xspf");
    fs::write(&playlist, "<playlist><track></wrong>").unwrap();

    let result = validate_playlist(&playlist, root.path());
    assert!(!result.is_valid());
    assert_eq!(result.track_count(), 0);
    assert!(result.diagnostic.is_some());
}

#[test]
fn test_missing_playlist_file_yields_diagnostic() {
    let root = TempDir::new().unwrap();
    let playlist = root.path().join("gone.m3u");

    let result = validate_playlist(&playlist, root.path());
    assert!(!result.is_valid());
    assert!(result.diagnostic.is_some());
}

#[test]
fn test_file_uri_round_trip_in_m3u() {
    let root = TempDir::new().unwrap();
    fs::write(root.path().join("a b.mp3"), b"x").unwrap();

    let playlist = root.path().join("pl.m3u");
    let uri = format!("file://{}/a%20b.mp3\n", root.path().display());
    fs::write(&playlist, uri).unwrap();

    let result = validate_playlist(&playlist, root.path());
    assert!(result.is_valid());
    assert_eq!(result.valid_tracks, vec![root.path().join("a b.mp3")]);
}
