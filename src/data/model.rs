use std::collections::{BTreeMap, HashSet};

// ---------------------------------------------------------------------------
// Column names
// ---------------------------------------------------------------------------

pub const AREA: &str = "Area";
pub const YEAR: &str = "Year";
pub const VALUE: &str = "Value";

// ---------------------------------------------------------------------------
// UsageRecord – one row of the source table
// ---------------------------------------------------------------------------

/// A single pesticide usage observation.
#[derive(Debug, Clone, PartialEq)]
pub struct UsageRecord {
    /// Country or region name.
    pub area: String,
    pub year: i32,
    /// Usage quantity, typically tonnes of active ingredient.
    pub value: f64,
    /// Every other source column, kept verbatim: column_name → raw text.
    pub extra: BTreeMap<String, String>,
}

impl UsageRecord {
    pub fn new(area: impl Into<String>, year: i32, value: f64) -> Self {
        Self {
            area: area.into(),
            year,
            value,
            extra: BTreeMap::new(),
        }
    }

    /// Display text for any source column, typed or not.
    pub fn cell(&self, column: &str) -> String {
        match column {
            AREA => self.area.clone(),
            YEAR => self.year.to_string(),
            VALUE => self.value.to_string(),
            other => self.extra.get(other).cloned().unwrap_or_default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed table with indices computed once at load time.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// All rows, in source order.
    pub records: Vec<UsageRecord>,
    /// Source header order (includes Area, Year and Value).
    pub columns: Vec<String>,
    /// Distinct Area values in order of first appearance.
    pub areas: Vec<String>,
    /// `(min(Year), max(Year))`, `None` for an empty table.
    pub year_bounds: Option<(i32, i32)>,
}

impl Dataset {
    /// Build the indices from loaded rows.
    pub fn from_records(columns: Vec<String>, records: Vec<UsageRecord>) -> Self {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut areas = Vec::new();
        for rec in &records {
            if seen.insert(rec.area.as_str()) {
                areas.push(rec.area.clone());
            }
        }

        let year_bounds = records.iter().fold(None, |acc, rec| match acc {
            None => Some((rec.year, rec.year)),
            Some((lo, hi)) => Some((i32::min(lo, rec.year), i32::max(hi, rec.year))),
        });

        Dataset {
            records,
            columns,
            areas,
            year_bounds,
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The first `n` rows, as shown in the data preview.
    pub fn head(&self, n: usize) -> &[UsageRecord] {
        &self.records[..n.min(self.records.len())]
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a UsageRecord;
    type IntoIter = std::slice::Iter<'a, UsageRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

// ---------------------------------------------------------------------------
// FilteredView – a borrowed subset of the dataset
// ---------------------------------------------------------------------------

/// Rows of a [`Dataset`] that passed a predicate, in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilteredView<'a> {
    pub rows: Vec<&'a UsageRecord>,
}

impl<'a> FilteredView<'a> {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a UsageRecord> + '_ {
        self.rows.iter().copied()
    }
}

impl<'a> FromIterator<&'a UsageRecord> for FilteredView<'a> {
    fn from_iter<I: IntoIterator<Item = &'a UsageRecord>>(iter: I) -> Self {
        FilteredView {
            rows: iter.into_iter().collect(),
        }
    }
}

impl<'a, 'v> IntoIterator for &'v FilteredView<'a> {
    type Item = &'a UsageRecord;
    type IntoIter = std::iter::Copied<std::slice::Iter<'v, &'a UsageRecord>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter().copied()
    }
}
