//! Commodity price quotes from Alpha Vantage `GLOBAL_QUOTE`, plus the
//! manually maintained power and LNG marks that have no live source yet.

use serde_json::Value;
use tracing::{info, warn};

use crate::config::Credentials;
use crate::domain::PriceQuote;
use crate::format::{format_price, round_to, RawNumber};
use crate::transport::{Pacer, Transport};

pub const ALPHA_VANTAGE_URL: &str = "https://www.alphavantage.co/query";

/// A quoted commodity and how to display it.
#[derive(Debug, Clone, Copy)]
pub struct Commodity {
    pub symbol: &'static str,
    pub name: &'static str,
    pub unit: &'static str,
    pub prefix: &'static str,
}

pub const COMMODITIES: &[Commodity] = &[
    Commodity {
        symbol: "BZ=F",
        name: "Brent Crude",
        unit: "USD/bbl",
        prefix: "$",
    },
    Commodity {
        symbol: "CL=F",
        name: "WTI",
        unit: "USD/bbl",
        prefix: "$",
    },
    Commodity {
        symbol: "NG=F",
        name: "Henry Hub",
        unit: "USD/MMBtu",
        prefix: "$",
    },
    Commodity {
        symbol: "TTF=F",
        name: "TTF Gas",
        unit: "EUR/MWh",
        prefix: "€",
    },
    Commodity {
        symbol: "EUAFUT",
        name: "EU ETS Carbon",
        unit: "EUR/t CO₂",
        prefix: "€",
    },
    Commodity {
        symbol: "UX=F",
        name: "Uranium",
        unit: "USD/lb",
        prefix: "$",
    },
];

/// `GLOBAL_QUOTE` request URL for one symbol.
pub fn quote_url(symbol: &str, api_key: &str) -> String {
    let params = [
        ("function", "GLOBAL_QUOTE"),
        ("symbol", symbol),
        ("apikey", api_key),
    ];
    match reqwest::Url::parse_with_params(ALPHA_VANTAGE_URL, &params) {
        Ok(url) => url.into(),
        Err(_) => format!(
            "{ALPHA_VANTAGE_URL}?function=GLOBAL_QUOTE&symbol={symbol}&apikey={api_key}"
        ),
    }
}

/// Build a quote from a `GLOBAL_QUOTE` payload.
///
/// Returns `None` when the payload has no usable price or change figure
/// (rate-limit notes, unknown symbols, empty quote objects).
pub fn parse_global_quote(payload: &Value, commodity: &Commodity) -> Option<PriceQuote> {
    let quote = payload.get("Global Quote")?;
    let price = quote.get("05. price")?.to_number()?;
    let change = quote
        .get("10. change percent")
        .and_then(Value::as_str)
        .and_then(|s| s.trim().trim_end_matches('%').to_number())?;

    Some(PriceQuote {
        name: commodity.name.to_string(),
        value: format_price(commodity.prefix, price),
        unit: commodity.unit.to_string(),
        change_pct: round_to(change, 2),
        up: change >= 0.0,
        source: None,
    })
}

/// Marks maintained by hand until a power-price feed is wired in.
pub fn manual_quotes() -> Vec<PriceQuote> {
    let manual = |name: &str, value: &str, unit: &str, change_pct: f64| PriceQuote {
        name: name.to_string(),
        value: value.to_string(),
        unit: unit.to_string(),
        change_pct,
        up: change_pct >= 0.0,
        source: Some("manual".to_string()),
    };

    vec![
        manual("UK Power", "£74.10", "GBP/MWh", 2.1),
        manual("JKM LNG", "$13.85", "USD/MMBtu", 0.7),
        manual("ERCOT Day-Ahead", "$42.10", "USD/MWh", -1.1),
    ]
}

/// One quote per catalogued commodity followed by the manual marks.
///
/// A symbol whose request fails or returns an unusable payload degrades to a
/// `"N/A"` placeholder; the remaining symbols are still fetched.
pub fn collect_prices(
    transport: &dyn Transport,
    credentials: &Credentials,
    pacer: &Pacer,
) -> Vec<PriceQuote> {
    let mut prices = Vec::with_capacity(COMMODITIES.len() + 3);

    for commodity in COMMODITIES {
        let url = quote_url(commodity.symbol, &credentials.alpha_vantage_key);
        let quote = transport
            .fetch_json(&url)
            .and_then(|payload| parse_global_quote(&payload, commodity));
        pacer.pause();

        match quote {
            Some(q) => {
                info!(symbol = commodity.symbol, value = %q.value, "quote");
                prices.push(q);
            }
            None => {
                warn!(symbol = commodity.symbol, "no usable quote, using placeholder");
                prices.push(PriceQuote::unavailable(commodity.name, commodity.unit));
            }
        }
    }

    prices.extend(manual_quotes());
    prices
}
