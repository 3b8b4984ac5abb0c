//! Headline signals and official commentary from news feeds.
//!
//! Each feed is fetched once, filtered to energy-relevant headlines and
//! classified headline by headline. Results from all feeds are merged,
//! deduplicated by exact headline and capped.

pub mod classify;
pub mod collect;
pub mod feed;
pub mod rules;

pub use classify::{
    auto_tag, classify_headline, classify_impact, classify_kind, format_pub_date,
    is_energy_relevant, MAX_TAGS, RECENT,
};
pub use collect::{
    collect_commentary, collect_signals, dedup_headlines, feed_items, speaker_role,
    CommentaryFeed, SignalFeed, COMMENTARY_FEEDS, COMMENTARY_PER_FEED, MAX_COMMENTARY,
    MAX_SIGNALS, SIGNALS_PER_FEED, SIGNAL_FEEDS,
};
pub use feed::{parse_feed, FeedEntry, FeedError};
