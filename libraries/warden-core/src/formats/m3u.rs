//! M3U / M3U8 parser
//!
//! Plain and extended M3U share the same shape: one reference per line, with
//! `#`-prefixed lines carrying directives or comments. Extended-M3U metadata
//! (`#EXTM3U`, `#EXTINF`, ...) is therefore skipped along with comments.

/// Extract track references from M3U content
pub fn parse(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(super::decode_file_uri)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::parse;

    #[test]
    fn test_skips_comments_and_blank_lines() {
        let content = "#EXTM3U\n\n#EXTINF:123,Artist - Title\ntrack1.mp3\n   \nsub/track2.flac\n";
        assert_eq!(parse(content), vec!["track1.mp3", "sub/track2.flac"]);
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        assert_eq!(parse("  spaced.mp3  \n"), vec!["spaced.mp3"]);
    }

    #[test]
    fn test_decodes_file_uris() {
        assert_eq!(parse("file:///music/a%20b.mp3\n"), vec!["/music/a b.mp3"]);
    }

    #[test]
    fn test_preserves_order_and_duplicates() {
        let content = "b.mp3\na.mp3\nb.mp3\n";
        assert_eq!(parse(content), vec!["b.mp3", "a.mp3", "b.mp3"]);
    }
}
