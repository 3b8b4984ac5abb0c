//! Feed catalogue and the cross-feed signal and commentary collectors.

use std::collections::HashSet;

use tracing::{info, warn};

use super::classify::classify_headline;
use super::feed::parse_feed;
use crate::domain::{CommentaryItem, SignalItem, Tag, TagCategory};
use crate::transport::{Pacer, Transport};

pub const SIGNALS_PER_FEED: usize = 4;
pub const MAX_SIGNALS: usize = 20;
pub const COMMENTARY_PER_FEED: usize = 3;
pub const MAX_COMMENTARY: usize = 12;

/// A news feed and the tags every headline from it starts with.
#[derive(Debug, Clone, Copy)]
pub struct SignalFeed {
    pub url: &'static str,
    pub base_tags: &'static [(&'static str, TagCategory)],
}

impl SignalFeed {
    pub fn base_tags(&self) -> Vec<Tag> {
        self.base_tags
            .iter()
            .map(|&(label, category)| Tag::new(label, category))
            .collect()
    }
}

/// An official source whose headlines are attributed to a speaker.
#[derive(Debug, Clone, Copy)]
pub struct CommentaryFeed {
    pub url: &'static str,
    pub source_id: &'static str,
    pub speaker: &'static str,
}

pub const SIGNAL_FEEDS: &[SignalFeed] = &[
    SignalFeed {
        url: "https://feeds.reuters.com/reuters/businessNews",
        base_tags: &[("Global", TagCategory::Geo)],
    },
    SignalFeed {
        url: "https://www.eia.gov/rss/news.xml",
        base_tags: &[("USA", TagCategory::Geo), ("EIA", TagCategory::Company)],
    },
    SignalFeed {
        url: "https://www.ferc.gov/news-events/news/rss.xml",
        base_tags: &[("USA", TagCategory::Geo), ("FERC", TagCategory::Company)],
    },
    SignalFeed {
        url: "https://www.iea.org/rss/news.xml",
        base_tags: &[("Global", TagCategory::Geo), ("IEA", TagCategory::Company)],
    },
    SignalFeed {
        url: "https://www.ogj.com/rss/home.rss",
        base_tags: &[("Oil & Gas", TagCategory::Sector)],
    },
    SignalFeed {
        url: "https://www.spglobal.com/commodityinsights/en/rss-feed/oil",
        base_tags: &[("Global", TagCategory::Geo)],
    },
    SignalFeed {
        url: "https://www.pjm.com/media/news-room/press-releases.aspx",
        base_tags: &[("USA", TagCategory::Geo), ("PJM", TagCategory::Company)],
    },
];

pub const COMMENTARY_FEEDS: &[CommentaryFeed] = &[
    CommentaryFeed {
        url: "https://www.ferc.gov/news-events/news/rss.xml",
        source_id: "ferc",
        speaker: "FERC",
    },
    CommentaryFeed {
        url: "https://www.iea.org/rss/news.xml",
        source_id: "iea",
        speaker: "IEA",
    },
    CommentaryFeed {
        url: "https://www.energy.gov/news",
        source_id: "gov",
        speaker: "US DOE",
    },
];

/// Full institutional name for a commentary source; unknown ids fall back to
/// the speaker's short name.
pub fn speaker_role<'a>(source_id: &str, speaker: &'a str) -> &'a str {
    match source_id {
        "ferc" => "Federal Energy Regulatory Commission",
        "iea" => "International Energy Agency",
        "gov" => "US Department of Energy",
        "pjm" => "PJM Interconnection",
        _ => speaker,
    }
}

/// Classified headlines from one feed, at most `max_items`, in feed order.
///
/// Off-topic and untitled entries do not count toward the cap. A feed that
/// cannot be fetched or parsed contributes nothing.
pub fn feed_items(
    transport: &dyn Transport,
    url: &str,
    base_tags: &[Tag],
    max_items: usize,
) -> Vec<SignalItem> {
    let Some(raw) = transport.fetch_text(url) else {
        return Vec::new();
    };
    let entries = match parse_feed(&raw) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(url, error = %e, "unreadable feed");
            return Vec::new();
        }
    };

    entries
        .iter()
        .filter_map(|entry| classify_headline(&entry.title, &entry.published, base_tags))
        .take(max_items)
        .collect()
}

/// Keep the first item for each distinct headline, then truncate to `cap`.
pub fn dedup_headlines<T>(items: Vec<T>, cap: usize, headline: impl Fn(&T) -> &str) -> Vec<T> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(headline(item).to_string()))
        .take(cap)
        .collect()
}

pub fn collect_signals(transport: &dyn Transport, pacer: &Pacer) -> Vec<SignalItem> {
    let mut all = Vec::new();
    for feed in SIGNAL_FEEDS {
        let items = feed_items(transport, feed.url, &feed.base_tags(), SIGNALS_PER_FEED);
        info!(url = feed.url, count = items.len(), "signal feed");
        all.extend(items);
        pacer.pause();
    }
    dedup_headlines(all, MAX_SIGNALS, |item| item.head.as_str())
}

pub fn collect_commentary(transport: &dyn Transport, pacer: &Pacer) -> Vec<CommentaryItem> {
    let mut all = Vec::new();
    for feed in COMMENTARY_FEEDS {
        let base = [Tag::new(feed.speaker, TagCategory::Policy)];
        let role = speaker_role(feed.source_id, feed.speaker);
        let items = feed_items(transport, feed.url, &base, COMMENTARY_PER_FEED);
        info!(url = feed.url, count = items.len(), "commentary feed");
        all.extend(
            items
                .into_iter()
                .map(|item| CommentaryItem::from_signal(item, feed.source_id, feed.speaker, role)),
        );
        pacer.pause();
    }
    dedup_headlines(all, MAX_COMMENTARY, |item| item.head.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::CannedTransport;

    fn rss(titles: &[&str]) -> String {
        let items: String = titles
            .iter()
            .map(|t| {
                format!(
                    "<item><title>{t}</title>\
                     <pubDate>Tue, 02 Jan 2024 09:30:00 +0000</pubDate></item>"
                )
            })
            .collect();
        format!("<rss><channel>{items}</channel></rss>")
    }

    #[test]
    fn per_feed_cap_counts_relevant_items_only() {
        let body = rss(&[
            "Cat show",
            "Oil one",
            "Gas two",
            "Wind three",
            "Solar four",
            "Grid five",
        ]);
        let transport = CannedTransport::new().with_route("feed", body);
        let items = feed_items(&transport, "https://x/feed", &[], 4);
        let heads: Vec<_> = items.iter().map(|i| i.head.as_str()).collect();
        assert_eq!(heads, ["Oil one", "Gas two", "Wind three", "Solar four"]);
    }

    #[test]
    fn failed_or_malformed_feed_is_empty() {
        let transport = CannedTransport::new().with_route("bad", "<rss><channel>");
        assert!(feed_items(&transport, "https://x/bad", &[], 4).is_empty());
        assert!(feed_items(&transport, "https://x/missing", &[], 4).is_empty());
    }

    #[test]
    fn dedup_keeps_first_and_caps() {
        let items = vec!["a", "b", "a", "c", "b", "d"];
        assert_eq!(dedup_headlines(items.clone(), 10, |s| *s), ["a", "b", "c", "d"]);
        assert_eq!(dedup_headlines(items, 2, |s| *s), ["a", "b"]);
    }

    #[test]
    fn signals_dedup_across_feeds() {
        let shared = rss(&["Grid alert issued for Texas"]);
        let transport = CannedTransport::new()
            .with_route("eia.gov", shared.clone())
            .with_route("ferc.gov", shared);
        let signals = collect_signals(&transport, &Pacer::none());
        assert_eq!(signals.len(), 1);
        let tags: Vec<_> = signals[0].tags.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(tags[..2], ["USA", "EIA"]);
    }

    #[test]
    fn commentary_is_attributed() {
        let body = rss(&["IEA sees record solar additions", "Gas demand to plateau"]);
        let transport = CannedTransport::new().with_route("iea.org", body);
        let commentary = collect_commentary(&transport, &Pacer::none());
        assert_eq!(commentary.len(), 2);
        assert!(commentary.iter().all(|c| c.source_id == "iea"));
        assert_eq!(commentary[0].speaker, "IEA");
        assert_eq!(commentary[0].role, "International Energy Agency");
        assert_eq!(commentary[0].tags[0], Tag::new("IEA", TagCategory::Policy));
    }

    #[test]
    fn unknown_source_role_falls_back_to_speaker() {
        assert_eq!(speaker_role("pjm", "PJM"), "PJM Interconnection");
        assert_eq!(speaker_role("nrc", "NRC"), "NRC");
    }
}
