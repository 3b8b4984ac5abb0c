//! Minimal RSS reader: `item` entries with their `title` and `pubDate`.
//!
//! Elements are matched by local name, so namespace prefixes and `xmlns`
//! declarations never affect the result. Entries are taken from the first
//! `channel` under the document root, or from the root itself when there is
//! no channel.

use quick_xml::events::Event;
use quick_xml::Reader;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("malformed feed: {0}")]
    Malformed(String),

    #[error("feed ended inside an open element")]
    Truncated,
}

/// One raw entry, in document order. Either field may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedEntry {
    pub title: String,
    pub published: String,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Capture {
    Title,
    Published,
}

/// Item being read, with the depth of its start tag.
struct OpenItem {
    depth: usize,
    entry: FeedEntry,
    title_seen: bool,
    published_seen: bool,
    capture: Option<Capture>,
}

impl OpenItem {
    fn new(depth: usize) -> Self {
        Self {
            depth,
            entry: FeedEntry::default(),
            title_seen: false,
            published_seen: false,
            capture: None,
        }
    }

    fn open_child(&mut self, name: &[u8], depth: usize) {
        if depth != self.depth + 1 || self.capture.is_some() {
            return;
        }
        match name {
            b"title" if !self.title_seen => {
                self.title_seen = true;
                self.capture = Some(Capture::Title);
            }
            b"pubDate" if !self.published_seen => {
                self.published_seen = true;
                self.capture = Some(Capture::Published);
            }
            _ => {}
        }
    }

    fn close_child(&mut self, depth: usize) {
        if depth == self.depth + 1 {
            self.capture = None;
        }
    }

    fn push_text(&mut self, text: &str, depth: usize) {
        // only text directly inside the captured element counts
        if depth != self.depth + 1 {
            return;
        }
        match self.capture {
            Some(Capture::Title) => self.entry.title.push_str(text),
            Some(Capture::Published) => self.entry.published.push_str(text),
            None => {}
        }
    }

    fn finish(mut self) -> FeedEntry {
        self.entry.title = self.entry.title.trim().to_string();
        self.entry.published = self.entry.published.trim().to_string();
        self.entry
    }
}

/// Parse a feed document into its entries.
///
/// Fails on malformed XML (including undefined entities) and on documents
/// that end before every element is closed.
pub fn parse_feed(raw: &str) -> Result<Vec<FeedEntry>, FeedError> {
    let mut reader = Reader::from_str(raw);
    reader.config_mut().trim_text(true);

    let mut depth = 0usize;
    let mut channel_depth: Option<usize> = None;
    let mut channel_closed = false;
    let mut root_items = Vec::new();
    let mut channel_items = Vec::new();
    let mut open: Option<OpenItem> = None;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| FeedError::Malformed(e.to_string()))?;

        match event {
            Event::Start(e) => {
                depth += 1;
                let local = e.local_name();
                let name = local.as_ref();

                if let Some(item) = open.as_mut() {
                    item.open_child(name, depth);
                    continue;
                }
                match name {
                    b"channel" if depth == 2 && channel_depth.is_none() => {
                        channel_depth = Some(depth);
                    }
                    b"item"
                        if depth == 2 || (channel_depth == Some(depth - 1) && !channel_closed) =>
                    {
                        open = Some(OpenItem::new(depth));
                    }
                    _ => {}
                }
            }
            Event::Empty(e) => {
                let local = e.local_name();
                if let Some(item) = open.as_mut() {
                    item.open_child(local.as_ref(), depth + 1);
                    item.close_child(depth + 1);
                } else if local.as_ref() == b"item" {
                    let entry = FeedEntry::default();
                    if depth + 1 == 2 {
                        root_items.push(entry.clone());
                    }
                    if channel_depth == Some(depth) && !channel_closed {
                        channel_items.push(entry);
                    }
                }
            }
            Event::Text(t) => {
                if let Some(item) = open.as_mut() {
                    let text = t.unescape().map_err(|e| FeedError::Malformed(e.to_string()))?;
                    item.push_text(&text, depth);
                }
            }
            Event::CData(c) => {
                if let Some(item) = open.as_mut() {
                    let bytes = c.into_inner();
                    item.push_text(&String::from_utf8_lossy(&bytes), depth);
                }
            }
            Event::End(_) => {
                match open.take() {
                    Some(item) if item.depth == depth => {
                        let under_channel = channel_depth == Some(depth - 1) && !channel_closed;
                        let entry = item.finish();
                        if depth == 2 {
                            root_items.push(entry.clone());
                        }
                        if under_channel {
                            channel_items.push(entry);
                        }
                    }
                    Some(mut item) => {
                        item.close_child(depth);
                        open = Some(item);
                    }
                    None => {
                        if channel_depth == Some(depth) {
                            channel_closed = true;
                        }
                    }
                }
                depth = depth.saturating_sub(1);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if depth != 0 {
        return Err(FeedError::Truncated);
    }
    Ok(if channel_depth.is_some() { channel_items } else { root_items })
}

#[cfg(test)]
mod tests {
    use super::*;

    const RSS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:atom="http://www.w3.org/2005/Atom">
  <channel>
    <title>Energy Wire</title>
    <atom:link href="https://example.com/feed" rel="self"/>
    <item>
      <title>  Grid alert issued for Texas  </title>
      <pubDate>Tue, 02 Jan 2024 09:30:00 +0000</pubDate>
      <dc:creator>Desk</dc:creator>
    </item>
    <item>
      <title><![CDATA[Oil & gas M&A heats up]]></title>
      <pubDate>not a date</pubDate>
    </item>
    <item>
      <description>No title here</description>
    </item>
  </channel>
</rss>"#;

    #[test]
    fn reads_channel_items_in_order() {
        let entries = parse_feed(RSS).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].title, "Grid alert issued for Texas");
        assert_eq!(entries[0].published, "Tue, 02 Jan 2024 09:30:00 +0000");
        assert_eq!(entries[1].title, "Oil & gas M&A heats up");
        assert_eq!(entries[1].published, "not a date");
        assert_eq!(entries[2], FeedEntry::default());
    }

    #[test]
    fn channel_title_is_not_an_entry() {
        let entries = parse_feed(RSS).unwrap();
        assert!(entries.iter().all(|e| e.title != "Energy Wire"));
    }

    #[test]
    fn escaped_entities_are_decoded() {
        let raw = "<rss><channel><item><title>AT&amp;T &lt;power&gt;</title></item></channel></rss>";
        assert_eq!(parse_feed(raw).unwrap()[0].title, "AT&T <power>");
    }

    #[test]
    fn prefixed_elements_match_by_local_name() {
        let raw = r#"<x:rss xmlns:x="urn:x"><x:channel><x:item><x:title>Solar record</x:title></x:item></x:channel></x:rss>"#;
        assert_eq!(parse_feed(raw).unwrap()[0].title, "Solar record");
    }

    #[test]
    fn items_directly_under_root_without_channel() {
        let raw = "<feed><item><title>Wind output surges</title></item></feed>";
        let entries = parse_feed(raw).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "Wind output surges");
    }

    #[test]
    fn nested_items_are_ignored() {
        let raw = "<rss><channel><group><item><title>Deep</title></item></group></channel></rss>";
        assert!(parse_feed(raw).unwrap().is_empty());
    }

    #[test]
    fn malformed_documents_fail() {
        assert!(parse_feed("<rss><channel><item><title>x</wrong></item></channel></rss>").is_err());
        assert!(parse_feed("<rss><channel><item><title>x</title>").is_err());
    }
}
