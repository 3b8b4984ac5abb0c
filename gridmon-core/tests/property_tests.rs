//! Property tests for the pipeline invariants.
//!
//! 1. Formatting never panics and always yields a signed figure or `"N/A"`
//! 2. The median is one of the numeric inputs and is the lower middle
//! 3. Headline deduplication keeps first occurrences in order
//! 4. Tagging keeps base tags first, never repeats a label, never exceeds four
//! 5. Grid tiers are monotone in demand

use proptest::prelude::*;
use std::collections::HashSet;

use gridmon_core::domain::{GridStatus, Tag, TagCategory};
use gridmon_core::format::{format_market_cap, format_multiple, format_percent, NOT_AVAILABLE};
use gridmon_core::grid::{classify_load, Thresholds};
use gridmon_core::signals::{auto_tag, dedup_headlines, MAX_TAGS};
use gridmon_core::stats::median;

// ── Strategies ───────────────────────────────────────────────────────

fn arb_raw_value() -> impl Strategy<Value = String> {
    prop_oneof![
        (-1.0e7..1.0e7_f64).prop_map(|v| format!("{v:.3}")),
        (0u64..10_000_000).prop_map(|v| v.to_string()),
        Just(String::new()),
        Just("n/a".to_string()),
        "[a-z%,. ]{0,8}",
    ]
}

fn arb_headline() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "Oil rallies",
        "Grid alert",
        "Solar deal",
        "Nuclear restart",
        "Gas glut",
    ])
    .prop_map(str::to_string)
}

fn status_rank(s: GridStatus) -> u8 {
    match s {
        GridStatus::Surplus => 0,
        GridStatus::Tight => 1,
        GridStatus::Stress => 2,
    }
}

// ── 1. Formatting ────────────────────────────────────────────────────

proptest! {
    #[test]
    fn percent_is_signed_or_sentinel(raw in arb_raw_value()) {
        let out = format_percent(raw.as_str(), "%");
        prop_assert!(
            out == NOT_AVAILABLE
                || ((out.starts_with('+') || out.starts_with('-')) && out.ends_with('%'))
        );
    }

    #[test]
    fn multiple_ends_in_x_or_sentinel(raw in arb_raw_value()) {
        let out = format_multiple(raw.as_str());
        prop_assert!(out == NOT_AVAILABLE || out.ends_with('x'));
    }

    #[test]
    fn market_cap_has_dollar_and_scale(millions in 0.0..5.0e7_f64) {
        let out = format_market_cap(millions);
        prop_assert!(out.starts_with('$'));
        prop_assert!(out.ends_with('T') || out.ends_with('B') || out.ends_with('M'));
    }
}

// ── 2. Median ────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn median_is_lower_middle(values in prop::collection::vec(-1.0e6..1.0e6_f64, 1..40)) {
        let m = median(values.iter().copied()).unwrap();
        let below = values.iter().filter(|v| **v < m).count();
        let at_or_below = values.iter().filter(|v| **v <= m).count();
        prop_assert!(values.contains(&m));
        // m occupies sorted index (n - 1) / 2
        let idx = (values.len() - 1) / 2;
        prop_assert!(below <= idx && idx < at_or_below);
    }

    #[test]
    fn median_ignores_junk(values in prop::collection::vec(arb_raw_value(), 0..20)) {
        let numeric: Vec<f64> = values
            .iter()
            .filter_map(|v| gridmon_core::format::parse_number(v))
            .collect();
        let m = median(values.iter().map(String::as_str));
        prop_assert_eq!(m.is_some(), !numeric.is_empty());
    }
}

// ── 3. Deduplication ─────────────────────────────────────────────────

proptest! {
    #[test]
    fn dedup_keeps_first_occurrences(
        heads in prop::collection::vec(arb_headline(), 0..30),
        cap in 1usize..25,
    ) {
        let out = dedup_headlines(heads.clone(), cap, |h| h.as_str());
        let unique: HashSet<_> = out.iter().collect();
        prop_assert_eq!(unique.len(), out.len());
        prop_assert!(out.len() <= cap);

        let mut expected = Vec::new();
        for h in &heads {
            if !expected.contains(h) {
                expected.push(h.clone());
            }
        }
        expected.truncate(cap);
        prop_assert_eq!(out, expected);
    }
}

// ── 4. Tagging ───────────────────────────────────────────────────────

proptest! {
    #[test]
    fn tags_are_bounded_and_unique(
        headline in "[a-zA-Z .&]{0,80}",
        with_base in any::<bool>(),
    ) {
        let base = if with_base {
            vec![Tag::new("USA", TagCategory::Geo), Tag::new("EIA", TagCategory::Company)]
        } else {
            Vec::new()
        };
        let tags = auto_tag(&headline, &base);
        prop_assert!(tags.len() <= MAX_TAGS);
        prop_assert_eq!(&tags[..base.len()], &base[..]);
        let labels: HashSet<_> = tags.iter().map(|t| t.label.as_str()).collect();
        prop_assert_eq!(labels.len(), tags.len());
    }
}

// ── 5. Grid tiers ────────────────────────────────────────────────────

proptest! {
    #[test]
    fn status_is_monotone_in_demand(a in 0.1..200.0_f64, b in 0.1..200.0_f64) {
        let t = Thresholds { surplus: 0.80, tight: 0.92 };
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let lo_status = classify_load(Some(lo), 120.0, t).status;
        let hi_status = classify_load(Some(hi), 120.0, t).status;
        prop_assert!(status_rank(lo_status) <= status_rank(hi_status));
    }
}
