//! Statistical aggregation over heterogeneous rows.
//!
//! Values arrive as raw strings (or anything else implementing
//! [`RawNumber`]); entries that do not coerce to a number are skipped rather
//! than treated as zero, except in [`weighted_total`] where they contribute
//! nothing to the sum.

use crate::format::RawNumber;

/// Rows that expose raw field values by key.
pub trait FieldLookup {
    type Field: Copy;

    fn field(&self, field: Self::Field) -> Option<&str>;
}

/// Lower median of the numeric values.
///
/// Odd counts return the middle element; even counts return the lower of the
/// two central elements (`[10, 20, 30, 40]` -> `20`), never their average.
/// Returns `None` when no value is numeric.
pub fn median<I>(values: I) -> Option<f64>
where
    I: IntoIterator,
    I::Item: RawNumber,
{
    let mut clean: Vec<f64> = values.into_iter().filter_map(|v| v.to_number()).collect();
    if clean.is_empty() {
        return None;
    }
    clean.sort_by(f64::total_cmp);
    Some(clean[(clean.len() - 1) / 2])
}

/// Median of one field across a set of rows.
pub fn median_of<R: FieldLookup>(rows: &[R], field: R::Field) -> Option<f64> {
    median(rows.iter().map(|r| r.field(field)))
}

/// Plain sum of one field across rows; missing or non-numeric values add zero.
pub fn weighted_total<R: FieldLookup>(rows: &[R], field: R::Field) -> f64 {
    rows.iter()
        .filter_map(|r| r.field(field).to_number())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct Row(HashMap<&'static str, &'static str>);

    impl FieldLookup for Row {
        type Field = &'static str;

        fn field(&self, field: &'static str) -> Option<&str> {
            self.0.get(field).copied()
        }
    }

    fn row(pairs: &[(&'static str, &'static str)]) -> Row {
        Row(pairs.iter().copied().collect())
    }

    #[test]
    fn median_empty_is_none() {
        assert_eq!(median(Vec::<f64>::new()), None);
        assert_eq!(median(["a", "b"]), None);
    }

    #[test]
    fn median_odd_count_is_middle() {
        assert_eq!(median([30.0, 10.0, 20.0]), Some(20.0));
    }

    #[test]
    fn median_even_count_is_lower_middle() {
        assert_eq!(median([40.0, 10.0, 30.0, 20.0]), Some(20.0));
        assert_eq!(median(["5", "1"]), Some(1.0));
    }

    #[test]
    fn median_skips_non_numeric() {
        assert_eq!(median(["12", "", "n/a", "8", "1,000"]), Some(12.0));
    }

    #[test]
    fn weighted_total_sums_numeric_only() {
        let rows = vec![
            row(&[("cap", "1,500")]),
            row(&[("cap", "bad")]),
            row(&[("other", "9")]),
            row(&[("cap", "500.5")]),
        ];
        assert_eq!(weighted_total(&rows, "cap"), 2000.5);
    }

    #[test]
    fn median_of_reads_field() {
        let rows = vec![row(&[("pe", "14")]), row(&[("pe", "10")]), row(&[("pe", "12")])];
        assert_eq!(median_of(&rows, "pe"), Some(12.0));
        assert_eq!(median_of(&rows, "ev"), None);
    }
}
