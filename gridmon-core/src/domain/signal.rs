use serde::{Deserialize, Serialize};

/// Headline category. Serialized with the dashboard's short codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignalKind {
    #[serde(rename = "deal")]
    Deal,
    #[serde(rename = "alr")]
    Alert,
    #[serde(rename = "pol")]
    Policy,
    #[serde(rename = "inf")]
    Infrastructure,
    #[serde(rename = "mkt")]
    Market,
    #[serde(rename = "com")]
    Commentary,
}

impl SignalKind {
    pub fn code(self) -> &'static str {
        match self {
            Self::Deal => "deal",
            Self::Alert => "alr",
            Self::Policy => "pol",
            Self::Infrastructure => "inf",
            Self::Market => "mkt",
            Self::Commentary => "com",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Deal => "💰",
            Self::Alert => "⚡",
            Self::Policy => "⚖️",
            Self::Infrastructure => "🏗️",
            Self::Market => "📊",
            Self::Commentary => "🏛️",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Impact {
    #[serde(rename = "h")]
    High,
    #[serde(rename = "m")]
    Medium,
    #[serde(rename = "l")]
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TagCategory {
    #[serde(rename = "geo")]
    Geo,
    #[serde(rename = "co")]
    Company,
    #[serde(rename = "sec")]
    Sector,
    #[serde(rename = "pol")]
    Policy,
}

/// Topic tag attached to a headline.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    #[serde(rename = "t")]
    pub label: String,
    #[serde(rename = "c")]
    pub category: TagCategory,
}

impl Tag {
    pub fn new(label: &str, category: TagCategory) -> Self {
        Self {
            label: label.to_string(),
            category,
        }
    }
}

/// A classified, energy-relevant headline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalItem {
    /// `"HH:MM\nDD Mon"`, or `"Recent"` when the publish date did not parse.
    pub time: String,
    pub icon: SignalKind,
    #[serde(rename = "iconLabel")]
    pub icon_label: String,
    pub head: String,
    pub tags: Vec<Tag>,
    pub imp: Impact,
    #[serde(rename = "type")]
    pub kind: SignalKind,
}

/// Headline from an official source, attributed to a speaker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentaryItem {
    pub time: String,
    pub icon: SignalKind,
    #[serde(rename = "iconLabel")]
    pub icon_label: String,
    pub head: String,
    pub tags: Vec<Tag>,
    pub imp: Impact,
    /// Short identifier of the publishing feed (`"ferc"`, `"iea"`, ...).
    #[serde(rename = "type")]
    pub source_id: String,
    pub speaker: String,
    pub role: String,
}

impl CommentaryItem {
    /// Re-attribute a classified headline to an official speaker.
    pub fn from_signal(item: SignalItem, source_id: &str, speaker: &str, role: &str) -> Self {
        Self {
            time: item.time,
            icon: SignalKind::Commentary,
            icon_label: SignalKind::Commentary.icon().to_string(),
            head: item.head,
            tags: item.tags,
            imp: item.imp,
            source_id: source_id.to_string(),
            speaker: speaker.to_string(),
            role: role.to_string(),
        }
    }
}
