//! Display formatting for numeric fields.
//!
//! Every formatter accepts anything that implements [`RawNumber`] (floats,
//! optional floats, raw strings from exports, JSON values) and never fails:
//! input that does not parse to a finite number renders as [`NOT_AVAILABLE`].

use serde_json::Value;

/// Sentinel rendered for any value that is missing or unparseable.
pub const NOT_AVAILABLE: &str = "N/A";

/// A value that may or may not coerce to a finite number.
pub trait RawNumber {
    fn to_number(&self) -> Option<f64>;
}

impl RawNumber for f64 {
    fn to_number(&self) -> Option<f64> {
        self.is_finite().then_some(*self)
    }
}

impl RawNumber for str {
    fn to_number(&self) -> Option<f64> {
        parse_number(self)
    }
}

impl RawNumber for String {
    fn to_number(&self) -> Option<f64> {
        parse_number(self)
    }
}

impl RawNumber for Value {
    fn to_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => n.as_f64().filter(|f| f.is_finite()),
            Value::String(s) => parse_number(s),
            _ => None,
        }
    }
}

impl<T: RawNumber> RawNumber for Option<T> {
    fn to_number(&self) -> Option<f64> {
        self.as_ref().and_then(RawNumber::to_number)
    }
}

impl<T: RawNumber + ?Sized> RawNumber for &T {
    fn to_number(&self) -> Option<f64> {
        (**self).to_number()
    }
}

/// Parse a raw string as a number, ignoring surrounding whitespace and
/// thousands separators. Non-finite results (`inf`, `NaN`) are rejected.
pub fn parse_number(raw: &str) -> Option<f64> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    cleaned.parse::<f64>().ok().filter(|f| f.is_finite())
}

/// Sign-prefixed, one-decimal value followed by `suffix` (`"+4.2%"`).
pub fn format_percent<V: RawNumber>(value: V, suffix: &str) -> String {
    match value.to_number() {
        // `+ 0.0` folds negative zero so it renders as "+0.0"
        Some(f) => {
            let f = f + 0.0;
            let sign = if f >= 0.0 { "+" } else { "" };
            format!("{sign}{f:.1}{suffix}")
        }
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Signed multiple change (`"+1.2x"`).
pub fn format_multiple<V: RawNumber>(value: V) -> String {
    format_percent(value, "x")
}

/// Aggregate market capitalization. Input is in millions of currency units.
///
/// Scales to `T` (two decimals) at one million, `B` (no decimals) at one
/// thousand, and `M` (no decimals) below that.
pub fn format_market_cap<V: RawNumber>(value: V) -> String {
    match value.to_number() {
        Some(m) if m >= 1_000_000.0 => format!("${:.2}T", m / 1_000_000.0),
        Some(m) if m >= 1_000.0 => format!("${:.0}B", m / 1_000.0),
        Some(m) => format!("${m:.0}M"),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Price with a currency prefix, thousands separators and two decimals
/// (`"$1,234.50"`).
pub fn format_price(prefix: &str, price: f64) -> String {
    let fixed = format!("{:.2}", price.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((&fixed, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if price < 0.0 { "-" } else { "" };
    format!("{prefix}{sign}{grouped}.{frac_part}")
}

/// Round to a fixed number of decimal places, ties to even.
///
/// Rounds the exact decimal expansion of `value`, so `61.25` becomes `61.2`
/// and `0.5` becomes `0`.
pub fn round_to(value: f64, places: usize) -> f64 {
    format!("{value:.places$}").parse().unwrap_or(value)
}
