//! XSPF parser
//!
//! Elements are matched by local name, so documents in the default XSPF
//! namespace (`http://xspf.org/ns/0/`), a namespace declared on the root
//! element, or no namespace at all are all accepted. Tracks without a
//! `location` are skipped.

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::Result;

/// Extract track references from XSPF content
pub fn parse(content: &str) -> Result<Vec<String>> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(true);

    let mut tracks = Vec::new();
    let mut in_track = false;
    let mut in_location = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"track" => in_track = true,
                b"location" if in_track => in_location = true,
                _ => {}
            },
            Event::End(e) => match e.local_name().as_ref() {
                b"track" => in_track = false,
                b"location" => in_location = false,
                _ => {}
            },
            Event::Text(t) if in_location => {
                let text = t.decode().map_err(quick_xml::Error::from)?;
                tracks.push(super::decode_file_uri(text.trim()));
            }
            Event::CData(t) if in_location => {
                let text = String::from_utf8_lossy(&t.into_inner()).into_owned();
                tracks.push(super::decode_file_uri(text.trim()));
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(tracks)
}

#[cfg(test)]
mod tests {
    use super::parse;

    #[test]
    fn test_parses_namespaced_document() {
        let content = r#"<?xml version="1.0" encoding="UTF-8"?>
<playlist version="1" xmlns="http://xspf.org/ns/0/">
  <trackList>
    <track><location>file:///music/a%20b.mp3</location></track>
    <track><title>no location, skipped</title></track>
    <track><location>relative/c.flac</location></track>
  </trackList>
</playlist>"#;
        assert_eq!(parse(content).unwrap(), vec!["/music/a b.mp3", "relative/c.flac"]);
    }

    #[test]
    fn test_accepts_document_without_namespace() {
        let content = "<playlist><trackList><track><location>x.mp3</location></track></trackList></playlist>";
        assert_eq!(parse(content).unwrap(), vec!["x.mp3"]);
    }

    #[test]
    fn test_location_in_cdata() {
        let content = "<playlist><trackList><track><location><![CDATA[/music/a b.mp3]]></location></track></trackList></playlist>";
        assert_eq!(parse(content).unwrap(), vec!["/music/a b.mp3"]);
    }

    #[test]
    fn test_location_outside_track_is_ignored() {
        let content = "<playlist><location>stray.mp3</location></playlist>";
        assert!(parse(content).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_xml_is_an_error() {
        assert!(parse("<playlist><track></wrong></playlist>").is_err());
    }
}
