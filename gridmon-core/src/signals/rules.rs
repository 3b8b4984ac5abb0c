//! Keyword tables driving headline classification.
//!
//! Every table is matched as a case-insensitive substring test against the
//! lower-cased headline, so `"refin"` catches both "refinery" and "refining".
//! Order matters wherever a table is a rule list: the first matching rule wins.

use crate::domain::{Impact, SignalKind, TagCategory};

/// A headline is kept only if it mentions at least one of these.
pub const ENERGY_KEYWORDS: &[&str] = &[
    "energy", "power", "electricity", "grid", "solar", "wind", "nuclear", "gas", "oil",
    "lng", "pipeline", "refinery", "utility", "renewable", "hydrogen", "carbon", "emissions",
    "battery", "storage", "transmission", "capacity", "demand", "supply", "fuel", "barrel",
    "megawatt", "gigawatt", "ferc", "eia", "opec", "iea", "petroleum", "crude", "offshore",
    "ev", "electric vehicle", "semiconductor", "inverter", "charging", "lithium",
    "tesla", "nextera", "exxon", "shell", "bp", "chevron", "totalenergies",
];

/// Category precedence. Anything that matches none is [`SignalKind::Market`].
pub const KIND_RULES: &[(&[&str], SignalKind)] = &[
    (
        &["acqui", "merger", "takeover", "buys", "deal", "joint venture"],
        SignalKind::Deal,
    ),
    (
        &["alert", "emergency", "outage", "storm", "crisis", "shortage", "blackout"],
        SignalKind::Alert,
    ),
    (
        &["policy", "regulation", "rule", "law", "directive", "mandate", "congress", "parliament"],
        SignalKind::Policy,
    ),
    (
        &[
            "pipeline", "plant", "project", "construction", "commission", "capacity addition",
            "offshore",
        ],
        SignalKind::Infrastructure,
    ),
];

/// Impact tiers, highest first. Anything that matches none is [`Impact::Low`].
pub const IMPACT_RULES: &[(&[&str], Impact)] = &[
    (
        &[
            "emergency", "alert", "crisis", "blackout", "outage", "shutdown", "major", "billion",
            "record",
        ],
        Impact::High,
    ),
    (
        &["deal", "acqui", "merger", "policy", "regulation", "capacity", "project", "agreement"],
        Impact::Medium,
    ),
];

/// A topic tag and the keywords that trigger it.
#[derive(Debug, Clone, Copy)]
pub struct TagRule {
    pub keywords: &'static [&'static str],
    pub label: &'static str,
    pub category: TagCategory,
}

const fn tag_rule(
    keywords: &'static [&'static str],
    label: &'static str,
    category: TagCategory,
) -> TagRule {
    TagRule { keywords, label, category }
}

/// Tags in the order they are appended.
pub const TAG_RULES: &[TagRule] = &[
    tag_rule(
        &[
            "usa", "u.s.", "american", "ferc", "eia", "doe", "texas", "california", "pjm", "ercot",
            "miso",
        ],
        "USA",
        TagCategory::Geo,
    ),
    tag_rule(
        &[
            "europe", "eu", "european", "germany", "france", "uk", "britain", "norway", "entsoe",
            "ofgem",
        ],
        "Europe",
        TagCategory::Geo,
    ),
    tag_rule(
        &["canada", "canadian", "alberta", "trans mountain"],
        "Canada",
        TagCategory::Geo,
    ),
    tag_rule(
        &["solar", "wind", "renewable", "clean energy", "hydrogen", "battery", "storage", "green"],
        "Renewables",
        TagCategory::Sector,
    ),
    tag_rule(
        &["nuclear", "uranium", "reactor", "vogtle", "smr"],
        "Nuclear",
        TagCategory::Sector,
    ),
    tag_rule(
        &["oil", "crude", "brent", "wti", "barrel", "upstream", "e&p", "exploration"],
        "Oil",
        TagCategory::Sector,
    ),
    tag_rule(
        &["gas", "lng", "natural gas", "pipeline", "midstream", "ttf", "henry hub"],
        "Gas",
        TagCategory::Sector,
    ),
    tag_rule(
        &["refin", "downstream", "crack spread"],
        "Refiners",
        TagCategory::Sector,
    ),
    tag_rule(
        &["grid", "transmission", "interconnect", "capacity market", "demand response"],
        "Grid",
        TagCategory::Sector,
    ),
    tag_rule(
        &["ev", "electric vehicle", "charging", "tesla", "rivian", "lucid"],
        "EV",
        TagCategory::Sector,
    ),
    tag_rule(
        &[
            "semiconductor", "chip", "inverter", "power electronics", "silicon carbide", "sic",
            "gan", "wolfspeed", "onsemi", "infineon",
        ],
        "Power Semi",
        TagCategory::Sector,
    ),
    tag_rule(
        &["merger", "acquisition", "deal", "takeover", "buys", "acquires", "billion"],
        "M&A",
        TagCategory::Policy,
    ),
    tag_rule(
        &[
            "policy", "regulation", "rule", "legislation", "congress", "parliament", "directive",
            "mandate",
        ],
        "Policy",
        TagCategory::Policy,
    ),
];

/// True when `lowered` contains any of `keywords`.
pub fn mentions_any(lowered: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| lowered.contains(kw))
}
