use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Load tier of a grid region relative to its peak capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridStatus {
    Surplus,
    Tight,
    Stress,
}

impl GridStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Surplus => "surplus",
            Self::Tight => "tight",
            Self::Stress => "stress",
        }
    }
}

impl fmt::Display for GridStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction a contextual driver pushes the balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DriverKind {
    #[serde(rename = "demand-up")]
    DemandUp,
    #[serde(rename = "demand-dn")]
    DemandDown,
    #[serde(rename = "neutral")]
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    pub label: String,
    #[serde(rename = "type")]
    pub kind: DriverKind,
}

impl Driver {
    pub fn new(label: &str, kind: DriverKind) -> Self {
        Self {
            label: label.to_string(),
            kind,
        }
    }
}

/// Fuel label -> percent string, kept in first-seen order.
///
/// Serializes as a JSON object so the dashboard can iterate it directly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerationMix(Vec<(String, String)>);

impl GenerationMix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mix shown when no breakdown could be computed.
    pub fn unavailable() -> Self {
        Self(vec![("Gas".to_string(), crate::format::NOT_AVAILABLE.to_string())])
    }

    /// Insert or replace the share for `label`, preserving its original position.
    pub fn insert(&mut self, label: &str, share: String) {
        match self.0.iter_mut().find(|(l, _)| l == label) {
            Some(entry) => entry.1 = share,
            None => self.0.push((label.to_string(), share)),
        }
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, s)| s.as_str())
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(l, _)| l.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for GenerationMix {
    fn from_iter<T: IntoIterator<Item = (&'a str, &'a str)>>(iter: T) -> Self {
        let mut mix = Self::new();
        for (label, share) in iter {
            mix.insert(label, share.to_string());
        }
        mix
    }
}

impl Serialize for GenerationMix {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (label, share) in &self.0 {
            map.serialize_entry(label, share)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for GenerationMix {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MixVisitor;

        impl<'de> Visitor<'de> for MixVisitor {
            type Value = GenerationMix;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of fuel label to percent string")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut mix = GenerationMix::new();
                while let Some((label, share)) = access.next_entry::<String, String>()? {
                    mix.insert(&label, share);
                }
                Ok(mix)
            }
        }

        deserializer.deserialize_map(MixVisitor)
    }
}

/// Demand/supply picture for one balancing region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridRegion {
    pub name: String,
    /// Current demand in GW, one decimal. Zero when unavailable.
    pub demand: f64,
    /// Static reference peak capacity in GW.
    pub peak: f64,
    /// Estimated supply in GW, one decimal. Zero when demand is unavailable.
    pub supply: f64,
    pub status: GridStatus,
    pub sources: GenerationMix,
    pub drivers: Vec<Driver>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mix_serializes_in_insertion_order() {
        let mix: GenerationMix = [("Wind", "40%"), ("Gas", "35%"), ("Coal", "25%")]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&mix).unwrap();
        assert_eq!(json, r#"{"Wind":"40%","Gas":"35%","Coal":"25%"}"#);

        let back: GenerationMix = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mix);
    }

    #[test]
    fn mix_insert_replaces_in_place() {
        let mut mix = GenerationMix::new();
        mix.insert("Gas", "10%".into());
        mix.insert("Solar", "5%".into());
        mix.insert("Gas", "12%".into());
        assert_eq!(mix.labels().collect::<Vec<_>>(), ["Gas", "Solar"]);
        assert_eq!(mix.get("Gas"), Some("12%"));
    }

    #[test]
    fn driver_kind_wire_names() {
        let d = Driver::new("DE wind surplus", DriverKind::DemandDown);
        let v = serde_json::to_value(&d).unwrap();
        assert_eq!(v["type"], "demand-dn");
        assert_eq!(v["label"], "DE wind surplus");
    }
}
