use crate::domain::{PeriodRow, PeriodTable, Provenance, SubsectorSummary};
use crate::format::{format_market_cap, format_multiple, format_percent, NOT_AVAILABLE};
use crate::stats::{median_of, weighted_total};

use super::catalogue::Subsector;
use super::columns::{CompanyRow, EquityField};

/// Flat trend series until real price history is available.
pub const PLACEHOLDER_SPARK: [u32; 7] = [50; 7];

/// Share of the one-year multiple change attributed to year-to-date.
///
/// There is no YTD-prior multiple upstream, so YTD is approximated linearly
/// as a quarter of the 52-week change.
const YTD_SHARE_OF_YEAR: f64 = 0.25;

/// Percent revision from `old` to `new`, relative to `|old|`.
///
/// `None` when either side is missing or `old` is zero.
pub fn pct_change(new: Option<f64>, old: Option<f64>) -> Option<f64> {
    match (new, old) {
        (Some(new), Some(old)) if old != 0.0 => Some((new - old) / old.abs() * 100.0),
        _ => None,
    }
}

fn multiple_change(new: Option<f64>, old: Option<f64>) -> Option<f64> {
    Some(new? - old?)
}

/// A zero median is as good as no median for the current multiple.
fn nonzero(v: Option<f64>) -> Option<f64> {
    v.filter(|x| *x != 0.0)
}

fn ytd_multiple_change(new: Option<f64>, old: Option<f64>) -> Option<f64> {
    multiple_change(nonzero(new), nonzero(old)).map(|d| d * YTD_SHARE_OF_YEAR)
}

fn current_multiple(v: Option<f64>) -> String {
    match nonzero(v) {
        Some(x) => format!("{x:.1}x"),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Reduce a subsector's normalized rows to one summary.
///
/// Returns `None` for an empty row set; the caller skips that subsector.
pub fn summarize_subsector(
    subsector: &Subsector,
    rows: &[CompanyRow],
    as_of: &str,
) -> Option<SubsectorSummary> {
    if rows.is_empty() {
        return None;
    }
    let med = |field| median_of(rows, field);

    let pe_cur = med(EquityField::PeCurrent);
    let pe_52w = med(EquityField::Pe52w);
    let ev_cur = med(EquityField::EvCurrent);
    let ev_52w = med(EquityField::Ev52w);
    let eps_ntm = med(EquityField::EpsNtm);
    let eps_13w = med(EquityField::Eps13w);
    let eps_52w = med(EquityField::Eps52w);

    // The 13-week-prior estimate stands in for a start-of-year figure.
    let eps_rev_ytd = pct_change(eps_ntm, eps_13w);
    let eps_rev_1y = pct_change(eps_ntm, eps_52w);

    let data = PeriodTable {
        price: PeriodRow::new(
            format_percent(med(EquityField::PriceYtd), "%"),
            format_percent(med(EquityField::Price1y), "%"),
            format_percent(med(EquityField::Price3y), "%"),
        ),
        eps: PeriodRow::new(
            format_percent(eps_rev_ytd, "%"),
            format_percent(eps_rev_1y, "%"),
            NOT_AVAILABLE,
        ),
        pe: PeriodRow::new(
            format_multiple(ytd_multiple_change(pe_cur, pe_52w)),
            format_multiple(multiple_change(pe_cur, pe_52w)),
            NOT_AVAILABLE,
        ),
        ev: PeriodRow::new(
            format_multiple(ytd_multiple_change(ev_cur, ev_52w)),
            format_multiple(multiple_change(ev_cur, ev_52w)),
            NOT_AVAILABLE,
        ),
    };

    Some(SubsectorSummary {
        name: subsector.name.to_string(),
        sub: format!("{} · {} cos", subsector.label, rows.len()),
        mktcap: format_market_cap(weighted_total(rows, EquityField::MarketCap)),
        pe: current_multiple(pe_cur),
        data,
        spark: PLACEHOLDER_SPARK.to_vec(),
        source: Provenance::Capiq,
        as_of: as_of.to_string(),
        n_companies: rows.len(),
    })
}
