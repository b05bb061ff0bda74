use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::data::model::{UsageRecord, VALUE, YEAR};

// ---------------------------------------------------------------------------
// Column selectors
// ---------------------------------------------------------------------------

/// Numeric columns that can be summarised or summed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericColumn {
    Year,
    Value,
}

impl NumericColumn {
    pub fn name(self) -> &'static str {
        match self {
            NumericColumn::Year => YEAR,
            NumericColumn::Value => VALUE,
        }
    }

    pub fn get(self, rec: &UsageRecord) -> f64 {
        match self {
            NumericColumn::Year => f64::from(rec.year),
            NumericColumn::Value => rec.value,
        }
    }
}

/// Columns rows can be grouped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupColumn {
    Area,
}

impl GroupColumn {
    pub fn key(self, rec: &UsageRecord) -> String {
        match self {
            GroupColumn::Area => rec.area.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

// ---------------------------------------------------------------------------
// Descriptive statistics
// ---------------------------------------------------------------------------

/// Row labels of the statistics table, in display order.
pub const STAT_LABELS: [&str; 8] = ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];

/// Descriptive statistics for one numeric column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnStats {
    pub column: &'static str,
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (n - 1 denominator).
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

impl ColumnStats {
    /// Values in [`STAT_LABELS`] order.
    pub fn values(&self) -> [f64; 8] {
        [
            self.count as f64,
            self.mean,
            self.std,
            self.min,
            self.q25,
            self.median,
            self.q75,
            self.max,
        ]
    }
}

/// Per-column statistics, one entry per requested column.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryStats {
    pub columns: Vec<ColumnStats>,
}

impl SummaryStats {
    #[cfg(test)]
    pub fn column(&self, name: &str) -> Option<&ColumnStats> {
        self.columns.iter().find(|c| c.column == name)
    }

    /// The display table: one row per statistic, one cell per column, each
    /// formatted to two decimals.
    pub fn formatted_rows(&self) -> Vec<(&'static str, Vec<String>)> {
        STAT_LABELS
            .iter()
            .enumerate()
            .map(|(i, &label)| {
                let cells = self
                    .columns
                    .iter()
                    .map(|c| format_two_decimals(c.values()[i]))
                    .collect();
                (label, cells)
            })
            .collect()
    }
}

pub fn format_two_decimals(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else {
        format!("{v:.2}")
    }
}

/// Summarise each of `columns` over `rows`.
pub fn describe<'a>(
    rows: impl IntoIterator<Item = &'a UsageRecord>,
    columns: &[NumericColumn],
) -> SummaryStats {
    let rows: Vec<&UsageRecord> = rows.into_iter().collect();
    let columns = columns
        .iter()
        .map(|&col| {
            let values: Vec<f64> = rows.iter().map(|rec| col.get(rec)).collect();
            describe_values(col.name(), &values)
        })
        .collect();
    SummaryStats { columns }
}

/// Descriptive statistics for a slice of values.
pub fn describe_values(column: &'static str, values: &[f64]) -> ColumnStats {
    let n = values.len();
    if n == 0 {
        return ColumnStats {
            column,
            count: 0,
            mean: f64::NAN,
            std: f64::NAN,
            min: f64::NAN,
            q25: f64::NAN,
            median: f64::NAN,
            q75: f64::NAN,
            max: f64::NAN,
        };
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mean = values.iter().sum::<f64>() / n as f64;
    let std = if n > 1 {
        let variance = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
        variance.sqrt()
    } else {
        f64::NAN
    };

    ColumnStats {
        column,
        count: n,
        mean,
        std,
        min: sorted[0],
        q25: percentile(&sorted, 25.0),
        median: percentile(&sorted, 50.0),
        q75: percentile(&sorted, 75.0),
        max: sorted[n - 1],
    }
}

/// Percentile of pre-sorted values using linear interpolation between the
/// two closest ranks.
fn percentile(sorted_values: &[f64], p: f64) -> f64 {
    let n = sorted_values.len();
    if n == 0 {
        return f64::NAN;
    }
    if n == 1 {
        return sorted_values[0];
    }

    let rank = (p / 100.0) * (n - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = (rank.ceil() as usize).min(n - 1);
    let frac = rank - lower as f64;

    if lower == upper {
        sorted_values[lower]
    } else {
        sorted_values[lower] * (1.0 - frac) + sorted_values[upper] * frac
    }
}

// ---------------------------------------------------------------------------
// Grouped totals
// ---------------------------------------------------------------------------

/// Group sums ordered by total.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankedTotals {
    pub entries: Vec<(String, f64)>,
}

impl RankedTotals {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn labels(&self) -> Vec<String> {
        self.entries.iter().map(|(k, _)| k.clone()).collect()
    }
}

/// Sum `value` within each `group`, order the sums, keep the first `n`.
///
/// Groups with equal sums stay in ascending key order.
pub fn top_n_by_group<'a>(
    rows: impl IntoIterator<Item = &'a UsageRecord>,
    group: GroupColumn,
    value: NumericColumn,
    n: usize,
    order: SortOrder,
) -> RankedTotals {
    let mut sums: BTreeMap<String, f64> = BTreeMap::new();
    for rec in rows {
        *sums.entry(group.key(rec)).or_insert(0.0) += value.get(rec);
    }

    let mut entries: Vec<(String, f64)> = sums.into_iter().collect();
    // `sort_by` is stable, so ties keep the key order from the BTreeMap.
    entries.sort_by(|a, b| match order {
        SortOrder::Descending => b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal),
        SortOrder::Ascending => a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal),
    });
    entries.truncate(n);

    RankedTotals { entries }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn records(rows: &[(&str, i32, f64)]) -> Vec<UsageRecord> {
        rows.iter().map(|&(a, y, v)| UsageRecord::new(a, y, v)).collect()
    }

    #[test]
    fn describe_one_to_four() {
        let stats = describe_values("Value", &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(stats.count, 4);
        assert!(approx(stats.mean, 2.5));
        assert!(approx(stats.min, 1.0));
        assert!(approx(stats.max, 4.0));
        assert!(approx(stats.std, (5.0f64 / 3.0).sqrt()));
        assert!(approx(stats.q25, 1.75));
        assert!(approx(stats.median, 2.5));
        assert!(approx(stats.q75, 3.25));
    }

    #[test]
    fn describe_single_value_has_undefined_std() {
        let stats = describe_values("Value", &[7.0]);
        assert_eq!(stats.count, 1);
        assert!(stats.std.is_nan());
        assert!(approx(stats.q25, 7.0));
    }

    #[test]
    fn describe_empty_column() {
        let stats = describe_values("Value", &[]);
        assert_eq!(stats.count, 0);
        assert!(stats.mean.is_nan());
        assert_eq!(format_two_decimals(stats.max), "NaN");
    }

    #[test]
    fn describe_reads_requested_columns() {
        let recs = records(&[("A", 2000, 1.0), ("B", 2002, 3.0)]);
        let stats = describe(&recs, &[NumericColumn::Year, NumericColumn::Value]);
        assert_eq!(stats.columns.len(), 2);
        assert!(approx(stats.column("Year").unwrap().mean, 2001.0));
        assert!(approx(stats.column("Value").unwrap().mean, 2.0));
    }

    #[test]
    fn formatted_rows_use_two_decimals() {
        let recs = records(&[("A", 2000, 1.0), ("B", 2001, 2.0)]);
        let rows = describe(&recs, &[NumericColumn::Year, NumericColumn::Value]).formatted_rows();
        assert_eq!(rows.len(), STAT_LABELS.len());
        assert_eq!(rows[0], ("count", vec!["2.00".to_string(), "2.00".to_string()]));
        assert_eq!(rows[1].1, vec!["2000.50".to_string(), "1.50".to_string()]);
        assert_eq!(rows[2].1[1], "0.71");
    }

    #[test]
    fn top_n_sums_and_ranks() {
        let recs = records(&[
            ("A", 2000, 1.0),
            ("B", 2000, 5.0),
            ("A", 2001, 2.0),
            ("C", 2000, 4.0),
            ("B", 2001, 1.0),
            ("D", 2000, 0.5),
        ]);
        let top = top_n_by_group(&recs, GroupColumn::Area, NumericColumn::Value, 3, SortOrder::Descending);
        assert_eq!(top.len(), 3);
        assert_eq!(top.labels(), vec!["B", "C", "A"]);
        assert!(top.entries.windows(2).all(|w| w[0].1 >= w[1].1));

        for (area, sum) in &top.entries {
            let expected: f64 = recs.iter().filter(|r| &r.area == area).map(|r| r.value).sum();
            assert!(approx(*sum, expected));
        }
    }

    #[test]
    fn top_n_is_bounded_by_group_count() {
        let recs = records(&[("A", 2000, 1.0), ("B", 2000, 2.0)]);
        let top = top_n_by_group(&recs, GroupColumn::Area, NumericColumn::Value, 10, SortOrder::Descending);
        assert_eq!(top.len(), 2);
        let none = top_n_by_group(&recs, GroupColumn::Area, NumericColumn::Value, 0, SortOrder::Descending);
        assert!(none.is_empty());
    }

    #[test]
    fn top_n_ties_keep_key_order() {
        let recs = records(&[("Zambia", 2000, 3.0), ("Angola", 2000, 3.0), ("Mali", 2000, 9.0)]);
        let top = top_n_by_group(&recs, GroupColumn::Area, NumericColumn::Value, 10, SortOrder::Descending);
        assert_eq!(top.labels(), vec!["Mali", "Angola", "Zambia"]);
    }

    #[test]
    fn top_n_ascending() {
        let recs = records(&[("A", 2000, 4.0), ("B", 2000, 1.0), ("A", 2001, 2.0), ("C", 2001, 3.0)]);
        let top = top_n_by_group(&recs, GroupColumn::Area, NumericColumn::Value, 2, SortOrder::Ascending);
        assert_eq!(top.entries, vec![("B".to_string(), 1.0), ("C".to_string(), 3.0)]);
    }
}
