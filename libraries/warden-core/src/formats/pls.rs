//! PLS parser
//!
//! INI-style format. Only `FileN=` entries carry track references; the
//! section header, `TitleN=`, `LengthN=`, and `NumberOfEntries=` lines are
//! ignored.

/// Extract track references from PLS content
pub fn parse(content: &str) -> Vec<String> {
    let mut tracks = Vec::new();

    for line in content.lines() {
        let line = line.trim();
        if !line.to_ascii_lowercase().starts_with("file") {
            continue;
        }
        if let Some((_, value)) = line.split_once('=') {
            tracks.push(super::decode_file_uri(value));
        }
    }

    tracks
}
