//! Per-page view models.
//!
//! Each builder takes the cached [`Dataset`] plus the current widget values
//! and returns exactly what its page draws. Nothing here touches egui, so the
//! pages can be exercised without a window.

use std::collections::HashMap;

use crate::data::filter::{by_country, by_year, by_year_range};
use crate::data::model::{Dataset, UsageRecord};
use crate::geo;
use crate::state::YearRange;
use crate::stats::{
    describe, top_n_by_group, GroupColumn, NumericColumn, RankedTotals, SortOrder, SummaryStats,
};

pub const NO_DATA_FOR_RANGE: &str = "No data available for the selected year range.";
pub const NO_DATA_FOR_YEAR: &str = "No data available for the selected year.";

/// Countries listed under the map as the year's lowest users.
pub const LOWEST_USERS: usize = 5;

/// Outcome of a filtered page: either something to chart or a notice to
/// show in its place.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection<T> {
    Data(T),
    Empty { notice: &'static str },
}

impl<T> Selection<T> {
    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        matches!(self, Selection::Empty { .. })
    }
}

// ---------------------------------------------------------------------------
// Home
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct HomeView<'a> {
    pub columns: &'a [String],
    pub preview: &'a [UsageRecord],
    pub stats: SummaryStats,
    pub top_countries: RankedTotals,
}

pub fn home_view(dataset: &Dataset, preview_rows: usize, top_n: usize) -> HomeView<'_> {
    HomeView {
        columns: &dataset.columns,
        preview: dataset.head(preview_rows),
        stats: describe(dataset, &[NumericColumn::Year, NumericColumn::Value]),
        top_countries: top_n_by_group(
            dataset,
            GroupColumn::Area,
            NumericColumn::Value,
            top_n,
            SortOrder::Descending,
        ),
    }
}

// ---------------------------------------------------------------------------
// Country Analysis
// ---------------------------------------------------------------------------

/// One country's usage over the selected years.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryTrend {
    pub country: String,
    pub range: YearRange,
    /// `(Year, Value)` ordered by year.
    pub points: Vec<(i32, f64)>,
}

impl CountryTrend {
    pub fn subheader(&self) -> String {
        format!(
            "Pesticide Usage in {} ({} - {})",
            self.country,
            self.range.start(),
            self.range.end()
        )
    }

    pub fn title(&self) -> String {
        format!("Pesticide Usage Trends in {}", self.country)
    }
}

pub fn country_view(dataset: &Dataset, country: &str, range: YearRange) -> Selection<CountryTrend> {
    let rows = by_year_range(&by_country(dataset, country), range.start(), range.end());
    log::debug!(
        "{} rows for {country} in {}-{}",
        rows.len(),
        range.start(),
        range.end()
    );
    if rows.is_empty() {
        return Selection::Empty {
            notice: NO_DATA_FOR_RANGE,
        };
    }

    let mut points: Vec<(i32, f64)> = rows.iter().map(|rec| (rec.year, rec.value)).collect();
    points.sort_by_key(|&(year, _)| year);

    Selection::Data(CountryTrend {
        country: country.to_string(),
        range,
        points,
    })
}

// ---------------------------------------------------------------------------
// Global Trends
// ---------------------------------------------------------------------------

/// A country placed on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct MapPoint {
    pub area: String,
    pub lat: f64,
    pub lon: f64,
    pub value: f64,
}

/// Every country's usage in one year.
#[derive(Debug, Clone, PartialEq)]
pub struct YearSnapshot {
    pub year: i32,
    /// One total per Area, in order of first appearance.
    pub values: Vec<(String, f64)>,
    pub located: Vec<MapPoint>,
    /// Areas with no known location.
    pub unmatched: Vec<String>,
    /// `(min, max)` over `values`, the colour scale's domain.
    pub value_range: (f64, f64),
    /// Smallest per-country totals, lowest first.
    pub lowest: RankedTotals,
}

impl YearSnapshot {
    pub fn title(&self) -> String {
        format!("Global Pesticide Usage in {}", self.year)
    }

    pub fn value_of(&self, area: &str) -> Option<f64> {
        self.values.iter().find(|(a, _)| a == area).map(|(_, v)| *v)
    }
}

pub fn global_view(dataset: &Dataset, year: i32) -> Selection<YearSnapshot> {
    let rows = by_year(dataset, year);
    if rows.is_empty() {
        return Selection::Empty {
            notice: NO_DATA_FOR_YEAR,
        };
    }

    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut values: Vec<(String, f64)> = Vec::new();
    for rec in &rows {
        match index.get(rec.area.as_str()) {
            Some(&i) => values[i].1 += rec.value,
            None => {
                index.insert(rec.area.as_str(), values.len());
                values.push((rec.area.clone(), rec.value));
            }
        }
    }

    let value_range = values.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), (_, v)| {
        (lo.min(*v), hi.max(*v))
    });

    let lowest = top_n_by_group(
        &rows,
        GroupColumn::Area,
        NumericColumn::Value,
        LOWEST_USERS,
        SortOrder::Ascending,
    );

    let mut located = Vec::new();
    let mut unmatched = Vec::new();
    for (area, value) in &values {
        match geo::locate(area) {
            Some(loc) => located.push(MapPoint {
                area: area.clone(),
                lat: loc.lat,
                lon: loc.lon,
                value: *value,
            }),
            None => unmatched.push(area.clone()),
        }
    }

    Selection::Data(YearSnapshot {
        year,
        values,
        located,
        unmatched,
        value_range,
        lowest,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Dataset {
        Dataset::from_records(
            vec!["Area".into(), "Year".into(), "Value".into()],
            vec![
                UsageRecord::new("X", 2000, 10.0),
                UsageRecord::new("X", 2001, 20.0),
                UsageRecord::new("Y", 2000, 5.0),
            ],
        )
    }

    #[test]
    fn home_ranks_countries_by_total() {
        let ds = fixture();
        let home = home_view(&ds, 10, 10);
        assert_eq!(
            home.top_countries.entries,
            vec![("X".to_string(), 30.0), ("Y".to_string(), 5.0)]
        );
        assert_eq!(home.preview.len(), 3);
        assert_eq!(home.stats.column("Value").map(|c| c.count), Some(3));
        assert_eq!(home.stats.column("Year").map(|c| c.min), Some(2000.0));
    }

    #[test]
    fn home_respects_preview_and_top_limits() {
        let ds = fixture();
        let home = home_view(&ds, 2, 1);
        assert_eq!(home.preview.len(), 2);
        assert_eq!(home.top_countries.labels(), vec!["X"]);
    }

    #[test]
    fn country_trend_is_ordered_by_year() {
        let ds = fixture();
        match country_view(&ds, "X", YearRange::new(2000, 2001)) {
            Selection::Data(trend) => {
                assert_eq!(trend.points, vec![(2000, 10.0), (2001, 20.0)]);
                assert_eq!(trend.subheader(), "Pesticide Usage in X (2000 - 2001)");
                assert_eq!(trend.title(), "Pesticide Usage Trends in X");
            }
            Selection::Empty { notice } => panic!("unexpected notice: {notice}"),
        }
    }

    #[test]
    fn country_trend_sorts_unordered_source_rows() {
        let ds = Dataset::from_records(
            Vec::new(),
            vec![
                UsageRecord::new("Z", 2003, 3.0),
                UsageRecord::new("Z", 2001, 1.0),
                UsageRecord::new("Z", 2002, 2.0),
            ],
        );
        let Selection::Data(trend) = country_view(&ds, "Z", YearRange::new(2001, 2003)) else {
            panic!("expected data");
        };
        assert_eq!(trend.points, vec![(2001, 1.0), (2002, 2.0), (2003, 3.0)]);
    }

    #[test]
    fn country_without_rows_in_range_shows_notice() {
        let ds = fixture();
        let view = country_view(&ds, "Y", YearRange::new(2001, 2001));
        assert_eq!(
            view,
            Selection::Empty {
                notice: NO_DATA_FOR_RANGE
            }
        );
        assert!(country_view(&ds, "Nowhere", YearRange::new(2000, 2001)).is_empty());
    }

    #[test]
    fn global_snapshot_has_one_value_per_country() {
        let ds = fixture();
        let Selection::Data(snapshot) = global_view(&ds, 2000) else {
            panic!("expected data");
        };
        assert_eq!(
            snapshot.values,
            vec![("X".to_string(), 10.0), ("Y".to_string(), 5.0)]
        );
        assert_eq!(snapshot.value_range, (5.0, 10.0));
        assert_eq!(
            snapshot.lowest.entries,
            vec![("Y".to_string(), 5.0), ("X".to_string(), 10.0)]
        );
        assert_eq!(snapshot.title(), "Global Pesticide Usage in 2000");
        // Neither fixture name is a real country.
        assert!(snapshot.located.is_empty());
        assert_eq!(snapshot.unmatched, vec!["X", "Y"]);
    }

    #[test]
    fn global_snapshot_locates_known_countries_and_sums_duplicates() {
        let ds = Dataset::from_records(
            Vec::new(),
            vec![
                UsageRecord::new("Viet Nam", 2010, 4.0),
                UsageRecord::new("World", 2010, 100.0),
                UsageRecord::new("Viet Nam", 2010, 1.0),
            ],
        );
        let Selection::Data(snapshot) = global_view(&ds, 2010) else {
            panic!("expected data");
        };
        assert_eq!(snapshot.value_of("Viet Nam"), Some(5.0));
        assert_eq!(snapshot.located.len(), 1);
        assert_eq!(snapshot.located[0].area, "Viet Nam");
        assert_eq!(snapshot.unmatched, vec!["World"]);
    }

    #[test]
    fn global_snapshot_lists_lowest_users_first() {
        let rows: Vec<UsageRecord> = (0..8)
            .map(|i| UsageRecord::new(format!("C{i}"), 2012, f64::from(8 - i)))
            .collect();
        let ds = Dataset::from_records(Vec::new(), rows);
        let Selection::Data(snapshot) = global_view(&ds, 2012) else {
            panic!("expected data");
        };
        assert_eq!(snapshot.lowest.len(), LOWEST_USERS);
        assert_eq!(snapshot.lowest.labels(), vec!["C7", "C6", "C5", "C4", "C3"]);
        assert!(snapshot.lowest.entries.windows(2).all(|w| w[0].1 <= w[1].1));
    }

    #[test]
    fn global_year_without_rows_shows_notice() {
        let ds = fixture();
        assert_eq!(
            global_view(&ds, 1999),
            Selection::Empty {
                notice: NO_DATA_FOR_YEAR
            }
        );
    }

    #[test]
    fn empty_dataset_takes_notice_paths() {
        let ds = Dataset::default();
        let home = home_view(&ds, 10, 10);
        assert!(home.preview.is_empty());
        assert!(home.top_countries.is_empty());
        assert_eq!(home.stats.column("Value").map(|c| c.count), Some(0));
        assert!(country_view(&ds, "X", YearRange::new(0, 0)).is_empty());
        assert!(global_view(&ds, 0).is_empty());
    }
}
