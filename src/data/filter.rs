use super::model::{FilteredView, UsageRecord};

// ---------------------------------------------------------------------------
// Row predicates
// ---------------------------------------------------------------------------
//
// Each filter accepts a `&Dataset` or a `&FilteredView`, so they chain:
// `by_year_range(&by_country(&ds, "Chile"), 1995, 2000)`. Source order is
// preserved and an empty result is a valid outcome, not an error.

/// Rows whose `Area` equals `country` exactly.
pub fn by_country<'a>(
    rows: impl IntoIterator<Item = &'a UsageRecord>,
    country: &str,
) -> FilteredView<'a> {
    rows.into_iter().filter(|rec| rec.area == country).collect()
}

/// Rows with `min_year <= Year <= max_year`.
pub fn by_year_range<'a>(
    rows: impl IntoIterator<Item = &'a UsageRecord>,
    min_year: i32,
    max_year: i32,
) -> FilteredView<'a> {
    rows.into_iter()
        .filter(|rec| (min_year..=max_year).contains(&rec.year))
        .collect()
}

/// Rows whose `Year` equals `year`.
pub fn by_year<'a>(rows: impl IntoIterator<Item = &'a UsageRecord>, year: i32) -> FilteredView<'a> {
    rows.into_iter().filter(|rec| rec.year == year).collect()
}
