//! WPL parser
//!
//! Windows Media Player playlists reference tracks through the `src`
//! attribute of `media` elements. Values are taken verbatim: WPL stores
//! native Windows paths, never percent-encoded URIs.

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::Result;

/// Extract track references from WPL content
pub fn parse(content: &str) -> Result<Vec<String>> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(true);

    let mut tracks = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) => {
                if e.local_name().as_ref() == b"media" {
                    if let Some(src) = super::attribute(&e, b"src")? {
                        tracks.push(src);
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(tracks)
}
