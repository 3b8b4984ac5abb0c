//! EIA API v2 request builders and response parsing.

use serde_json::Value;

use crate::domain::GenerationMix;
use crate::format::{round_to, RawNumber};

pub const DEMAND_URL: &str = "https://api.eia.gov/v2/electricity/rto/region-data/data/";
pub const MIX_URL: &str = "https://api.eia.gov/v2/electricity/rto/fuel-type-data/data/";

/// Rows requested from the generation-mix endpoint.
pub const MIX_WINDOW: usize = 10;

/// Display label for an EIA fuel-type code. Unknown codes display as-is.
pub fn fuel_label(code: &str) -> &str {
    match code {
        "NG" => "Gas",
        "NUC" => "Nuclear",
        "COL" => "Coal",
        "WND" => "Wind",
        "SUN" => "Solar",
        "WAT" => "Hydro",
        "OIL" => "Oil",
        "OTH" | "UNK" => "Other",
        other => other,
    }
}

fn query_url(base: &str, params: &[(&str, &str)]) -> String {
    match reqwest::Url::parse_with_params(base, params) {
        Ok(url) => url.into(),
        Err(_) => base.to_string(),
    }
}

/// Most recent hourly demand value for one respondent.
pub fn demand_url(eia_id: &str, api_key: &str) -> String {
    query_url(
        DEMAND_URL,
        &[
            ("api_key", api_key),
            ("frequency", "hourly"),
            ("data[0]", "value"),
            ("facets[respondent][]", eia_id),
            ("facets[type][]", "D"),
            ("sort[0][column]", "period"),
            ("sort[0][direction]", "desc"),
            ("length", "1"),
        ],
    )
}

/// Recent generation values by fuel type for one respondent.
pub fn mix_url(eia_id: &str, api_key: &str) -> String {
    let length = MIX_WINDOW.to_string();
    query_url(
        MIX_URL,
        &[
            ("api_key", api_key),
            ("frequency", "hourly"),
            ("data[0]", "value"),
            ("facets[respondent][]", eia_id),
            ("sort[0][column]", "period"),
            ("sort[0][direction]", "desc"),
            ("length", &length),
        ],
    )
}

fn data_rows(payload: &Value) -> Option<&Vec<Value>> {
    payload
        .get("response")?
        .get("data")?
        .as_array()
        .filter(|rows| !rows.is_empty())
}

/// Latest demand in GW (the API reports MW).
pub fn parse_demand(payload: &Value) -> Option<f64> {
    let first = data_rows(payload)?.first()?;
    first.get("value").to_number().map(|mw| mw / 1000.0)
}

/// Percent share per fuel label across the returned window.
///
/// Values for codes sharing a label are summed, shares are rounded to whole
/// percent, and labels that round to zero are dropped. Returns `None` when
/// the window carries no generation at all.
pub fn parse_mix(payload: &Value) -> Option<GenerationMix> {
    let rows = data_rows(payload)?;

    let mut volumes: Vec<(String, f64)> = Vec::new();
    for row in rows {
        let code = row
            .get("fueltype")
            .and_then(Value::as_str)
            .unwrap_or("Other");
        let label = fuel_label(code);
        let value = row.get("value").to_number().unwrap_or(0.0);
        match volumes.iter_mut().find(|(l, _)| l == label) {
            Some(entry) => entry.1 += value,
            None => volumes.push((label.to_string(), value)),
        }
    }

    let total: f64 = volumes.iter().map(|(_, v)| v).sum();
    if total <= 0.0 {
        return None;
    }

    let mut mix = GenerationMix::new();
    for (label, volume) in &volumes {
        let pct = round_to(volume / total * 100.0, 0);
        if pct > 0.0 {
            mix.insert(label, format!("{pct:.0}%"));
        }
    }
    Some(mix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn demand_converts_mw_to_gw() {
        let payload = json!({"response": {"data": [{"period": "2026-01-05T14", "value": 61234}]}});
        assert_eq!(parse_demand(&payload), Some(61.234));

        let payload = json!({"response": {"data": [{"value": "48,500"}]}});
        assert_eq!(parse_demand(&payload), Some(48.5));
    }

    #[test]
    fn demand_missing_pieces() {
        assert_eq!(parse_demand(&json!({})), None);
        assert_eq!(parse_demand(&json!({"response": {"data": []}})), None);
        assert_eq!(parse_demand(&json!({"response": {"data": [{"value": null}]}})), None);
    }

    #[test]
    fn mix_shares_and_drops_zero() {
        let payload = json!({"response": {"data": [
            {"fueltype": "NG", "value": 500},
            {"fueltype": "WND", "value": "300"},
            {"fueltype": "SUN", "value": 196},
            {"fueltype": "OIL", "value": 4},
        ]}});
        let mix = parse_mix(&payload).unwrap();
        assert_eq!(mix.labels().collect::<Vec<_>>(), ["Gas", "Wind", "Solar"]);
        assert_eq!(mix.get("Gas"), Some("50%"));
        assert_eq!(mix.get("Wind"), Some("30%"));
        assert_eq!(mix.get("Solar"), Some("20%"));
        assert_eq!(mix.get("Oil"), None);
    }

    #[test]
    fn mix_merges_codes_with_same_label() {
        let payload = json!({"response": {"data": [
            {"fueltype": "OTH", "value": 25},
            {"fueltype": "NUC", "value": 50},
            {"fueltype": "UNK", "value": 25},
        ]}});
        let mix = parse_mix(&payload).unwrap();
        assert_eq!(mix.get("Other"), Some("50%"));
        assert_eq!(mix.get("Nuclear"), Some("50%"));
        assert_eq!(mix.len(), 2);
    }

    #[test]
    fn mix_share_ties_round_to_even() {
        let payload = json!({"response": {"data": [
            {"fueltype": "NG", "value": 199},
            {"fueltype": "SUN", "value": 1},
        ]}});
        let mix = parse_mix(&payload).unwrap();
        assert_eq!(mix.get("Gas"), Some("100%"));
        assert_eq!(mix.get("Solar"), None);
        assert_eq!(mix.len(), 1);

        let payload = json!({"response": {"data": [
            {"fueltype": "NG", "value": 7},
            {"fueltype": "SUN", "value": 1},
        ]}});
        let mix = parse_mix(&payload).unwrap();
        assert_eq!(mix.get("Gas"), Some("88%"));
        assert_eq!(mix.get("Solar"), Some("12%"));
    }

    #[test]
    fn mix_with_zero_volume_is_unavailable() {
        let payload = json!({"response": {"data": [{"fueltype": "NG", "value": 0}]}});
        assert!(parse_mix(&payload).is_none());
    }

    #[test]
    fn unknown_fuel_code_passes_through() {
        assert_eq!(fuel_label("GEO"), "GEO");
        assert_eq!(fuel_label("WAT"), "Hydro");
    }

    #[test]
    fn urls_carry_facets() {
        let url = demand_url("PJM", "K");
        assert!(url.starts_with(DEMAND_URL));
        assert!(url.contains("api_key=K"));
        assert!(url.contains("PJM"));
        assert!(url.contains("length=1"));
        assert!(mix_url("PJM", "K").contains("length=10"));
    }
}
