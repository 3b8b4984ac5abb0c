//! Per-headline classification: relevance, category, impact, tags and the
//! display timestamp.

use chrono::{NaiveDateTime, Weekday};

use super::rules::{mentions_any, ENERGY_KEYWORDS, IMPACT_RULES, KIND_RULES, TAG_RULES};
use crate::domain::{Impact, SignalItem, SignalKind, Tag};

/// Maximum tags on one headline, base tags included.
pub const MAX_TAGS: usize = 4;

/// Display value when the publish date is missing or unparseable.
pub const RECENT: &str = "Recent";

const PUB_DATE_FORMAT: &str = "%d %b %Y %H:%M:%S";
const PUB_DATE_PREFIX: usize = 25;

pub fn is_energy_relevant(headline: &str) -> bool {
    mentions_any(&headline.to_lowercase(), ENERGY_KEYWORDS)
}

pub fn classify_kind(headline: &str) -> SignalKind {
    let lowered = headline.to_lowercase();
    KIND_RULES
        .iter()
        .find(|(keywords, _)| mentions_any(&lowered, keywords))
        .map_or(SignalKind::Market, |&(_, kind)| kind)
}

pub fn classify_impact(headline: &str) -> Impact {
    let lowered = headline.to_lowercase();
    IMPACT_RULES
        .iter()
        .find(|(keywords, _)| mentions_any(&lowered, keywords))
        .map_or(Impact::Low, |&(_, impact)| impact)
}

/// Base tags followed by every rule tag the headline triggers, in rule order,
/// skipping labels already present and stopping at [`MAX_TAGS`].
pub fn auto_tag(headline: &str, base: &[Tag]) -> Vec<Tag> {
    let lowered = headline.to_lowercase();
    let mut tags = base.to_vec();

    for rule in TAG_RULES {
        if tags.len() >= MAX_TAGS {
            break;
        }
        if tags.iter().any(|t| t.label == rule.label) {
            continue;
        }
        if mentions_any(&lowered, rule.keywords) {
            tags.push(Tag::new(rule.label, rule.category));
        }
    }
    tags
}

/// `"Tue, 02 Jan 2024 09:30:00 +0000"` -> `"09:30\n02 Jan"`.
///
/// Only the first 25 characters are read, so any zone suffix is ignored.
/// The weekday must be a three-letter abbreviation but is not checked
/// against the date. Anything that does not parse yields [`RECENT`].
pub fn format_pub_date(raw: &str) -> String {
    let prefix: String = raw.chars().take(PUB_DATE_PREFIX).collect();
    parse_pub_date(&prefix)
        .map(|dt| dt.format("%H:%M\n%d %b").to_string())
        .unwrap_or_else(|| RECENT.to_string())
}

fn parse_pub_date(prefix: &str) -> Option<NaiveDateTime> {
    let (weekday, rest) = prefix.split_once(',')?;
    if weekday.len() != 3 || weekday.parse::<Weekday>().is_err() {
        return None;
    }
    NaiveDateTime::parse_from_str(rest.trim_start(), PUB_DATE_FORMAT).ok()
}

/// Classify one feed entry. `None` when the headline is blank or off-topic.
pub fn classify_headline(title: &str, published: &str, base_tags: &[Tag]) -> Option<SignalItem> {
    let head = title.trim();
    if head.is_empty() || !is_energy_relevant(head) {
        return None;
    }

    let kind = classify_kind(head);
    Some(SignalItem {
        time: format_pub_date(published.trim()),
        icon: kind,
        icon_label: kind.icon().to_string(),
        head: head.to_string(),
        tags: auto_tag(head, base_tags),
        imp: classify_impact(head),
        kind,
    })
}
