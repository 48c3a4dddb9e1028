//! Playlist format detection and parsing
//!
//! Each supported container format gets its own parser module. Every parser
//! turns playlist text into the ordered list of raw track reference strings,
//! preserving file order and duplicates. Nothing here touches the filesystem;
//! resolution happens later.

pub mod asx;
pub mod m3u;
pub mod pls;
pub mod wpl;
pub mod xspf;

use std::path::Path;

use percent_encoding::percent_decode_str;
use quick_xml::events::BytesStart;

use crate::error::WardenError;
use crate::Result;

/// Playlist container format, derived from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaylistFormat {
    /// `.m3u` / `.m3u8`
    M3u,
    /// `.pls`
    Pls,
    /// `.xspf` (XML Shareable Playlist Format)
    Xspf,
    /// `.wpl` (Windows Media Player)
    Wpl,
    /// `.asx` (Advanced Stream Redirector)
    Asx,
}

impl PlaylistFormat {
    /// File extensions recognized as playlists (lowercase)
    pub const EXTENSIONS: &'static [&'static str] = &["pls", "m3u", "m3u8", "xspf", "asx", "wpl"];

    /// Detect the format from a file's extension, case-insensitively
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "m3u" | "m3u8" => Some(Self::M3u),
            "pls" => Some(Self::Pls),
            "xspf" => Some(Self::Xspf),
            "wpl" => Some(Self::Wpl),
            "asx" => Some(Self::Asx),
            _ => None,
        }
    }
}

/// Parse playlist content into raw track references
///
/// The text formats cannot fail on content; the XML formats return an error
/// for malformed documents, which the validator downgrades to a diagnostic.
pub fn parse(format: PlaylistFormat, content: &str) -> Result<Vec<String>> {
    match format {
        PlaylistFormat::M3u => Ok(m3u::parse(content)),
        PlaylistFormat::Pls => Ok(pls::parse(content)),
        PlaylistFormat::Xspf => xspf::parse(content),
        PlaylistFormat::Wpl => wpl::parse(content),
        PlaylistFormat::Asx => asx::parse(content),
    }
}

/// Strip a `file://` scheme and percent-decode the remainder
///
/// References without the scheme pass through unchanged. Only the M3U, PLS,
/// and XSPF parsers call this; WPL and ASX store native paths verbatim.
pub(crate) fn decode_file_uri(reference: &str) -> String {
    match reference.strip_prefix("file://") {
        Some(rest) => percent_decode_str(rest).decode_utf8_lossy().into_owned(),
        None => reference.to_string(),
    }
}

/// Look up an attribute on an element by local name
pub(crate) fn attribute(element: &BytesStart, name: &[u8]) -> Result<Option<String>> {
    for attr in element.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        if attr.key.local_name().as_ref() == name {
            let value = attr
                .unescape_value()
                .map_err(|e| WardenError::Xml(e.into()))?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}
