use std::collections::HashMap;

use crate::stats::FieldLookup;

/// Financial fields recognized in an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EquityField {
    MarketCap,
    PeCurrent,
    EvCurrent,
    EpsNtm,
    Eps4w,
    Eps13w,
    Eps52w,
    Pe52w,
    Ev52w,
    PriceYtd,
    Price1y,
    Price3y,
}

impl EquityField {
    /// Map an export column header to a field. Headers are compared after
    /// trimming; anything else is ignored.
    pub fn from_header(header: &str) -> Option<Self> {
        let field = match header.trim() {
            "Market Capitalization" => Self::MarketCap,
            "P/E (NTM)" => Self::PeCurrent,
            "EV/EBITDA (NTM)" => Self::EvCurrent,
            "EPS (NTM Mean Estimate)" => Self::EpsNtm,
            "EPS (NTM Mean, 4 Weeks Prior)" => Self::Eps4w,
            "EPS (NTM Mean, 13 Weeks Prior)" => Self::Eps13w,
            "EPS (NTM Mean, 52 Weeks Prior)" => Self::Eps52w,
            "P/E (NTM, 52 Weeks Prior)" => Self::Pe52w,
            "EV/EBITDA (NTM, 52 Weeks Prior)" => Self::Ev52w,
            "Price % Change (YTD)" => Self::PriceYtd,
            "Price % Change (1 Year)" => Self::Price1y,
            "Price % Change (3 Year)" => Self::Price3y,
            _ => return None,
        };
        Some(field)
    }
}

/// One company's recognized fields, as trimmed raw strings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompanyRow {
    values: HashMap<EquityField, String>,
}

impl CompanyRow {
    /// Normalize one export record against its header row.
    ///
    /// Returns `None` when no recognized column carries a value, so footer
    /// lines and blank records are dropped.
    pub fn from_record<'a, H, V>(headers: H, values: V) -> Option<Self>
    where
        H: IntoIterator<Item = &'a str>,
        V: IntoIterator<Item = &'a str>,
    {
        let mut row = Self::default();
        for (header, value) in headers.into_iter().zip(values) {
            if let Some(field) = EquityField::from_header(header) {
                row.values.insert(field, value.trim().to_string());
            }
        }
        row.has_values().then_some(row)
    }

    pub fn set(&mut self, field: EquityField, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    pub fn get(&self, field: EquityField) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    fn has_values(&self) -> bool {
        self.values.values().any(|v| !v.is_empty())
    }
}

impl FieldLookup for CompanyRow {
    type Field = EquityField;

    fn field(&self, field: EquityField) -> Option<&str> {
        self.get(field)
    }
}
