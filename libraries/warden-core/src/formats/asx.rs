//! ASX parser
//!
//! Each `entry` element contributes the `href` of its first `ref` child,
//! verbatim. Extra `ref` children (fallback locations) are ignored, and a
//! first `ref` without an `href` silences the whole entry.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::Result;

/// Extract track references from ASX content
pub fn parse(content: &str) -> Result<Vec<String>> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(true);

    let mut tracks = Vec::new();
    let mut in_entry = false;
    let mut entry_done = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"entry" => {
                    in_entry = true;
                    entry_done = false;
                }
                b"ref" => take_ref(&e, in_entry, &mut entry_done, &mut tracks)?,
                _ => {}
            },
            // An empty <entry/> has no children and no End event; it must
            // not open an entry scope.
            Event::Empty(e) => {
                if e.local_name().as_ref() == b"ref" {
                    take_ref(&e, in_entry, &mut entry_done, &mut tracks)?;
                }
            }
            Event::End(e) => {
                if e.local_name().as_ref() == b"entry" {
                    in_entry = false;
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(tracks)
}

/// Consume a `ref` element: the first one per entry wins, with or without
/// an `href` to contribute
fn take_ref(
    element: &BytesStart,
    in_entry: bool,
    entry_done: &mut bool,
    tracks: &mut Vec<String>,
) -> Result<()> {
    if !in_entry || *entry_done {
        return Ok(());
    }
    *entry_done = true;

    if let Some(href) = super::attribute(element, b"href")? {
        tracks.push(href);
    }
    Ok(())
}
