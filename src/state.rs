use crate::data::model::Dataset;

// ---------------------------------------------------------------------------
// Navigation
// ---------------------------------------------------------------------------

/// The dashboard's pages. Any page may be selected at any time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Page {
    #[default]
    Home,
    CountryAnalysis,
    GlobalTrends,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Home, Page::CountryAnalysis, Page::GlobalTrends];

    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::CountryAnalysis => "Country Analysis",
            Page::GlobalTrends => "Global Trends",
        }
    }
}

// ---------------------------------------------------------------------------
// Year range – the two-handle control's value
// ---------------------------------------------------------------------------

/// Inclusive `[start, end]` range of years with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    start: i32,
    end: i32,
}

impl YearRange {
    /// Build a range, swapping the handles if they crossed.
    pub fn new(a: i32, b: i32) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    pub fn start(&self) -> i32 {
        self.start
    }

    pub fn end(&self) -> i32 {
        self.end
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full widget state, independent of rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub page: Page,

    /// Country Analysis: selected Area (None only for an empty dataset).
    pub country: Option<String>,

    /// Country Analysis: selected year range.
    pub year_range: YearRange,

    /// Global Trends: selected year.
    pub year: i32,

    /// `(min(Year), max(Year))` the year widgets are bounded by.
    pub year_bounds: (i32, i32),

    /// Year for which unlocatable map areas were last reported.
    pub map_warned_year: Option<i32>,
}

impl AppState {
    /// Widget defaults for a freshly loaded dataset: first country, the full
    /// year range and the earliest year.
    pub fn for_dataset(dataset: &Dataset) -> Self {
        let (min, max) = dataset.year_bounds.unwrap_or((0, 0));
        Self {
            page: Page::default(),
            country: dataset.areas.first().cloned(),
            year_range: YearRange::new(min, max),
            year: min,
            year_bounds: (min, max),
            map_warned_year: None,
        }
    }

    pub fn set_page(&mut self, page: Page) {
        if self.page != page {
            log::debug!("Navigating to {}", page.label());
            self.page = page;
        }
    }

    pub fn set_country(&mut self, country: String) {
        if self.country.as_deref() != Some(country.as_str()) {
            log::debug!("Country selection: {country}");
            self.country = Some(country);
        }
    }

    /// Update the year range from the two handles, clamped to the dataset
    /// bounds. Handles that cross are swapped.
    pub fn set_year_range(&mut self, a: i32, b: i32) {
        let (min, max) = self.year_bounds;
        let range = YearRange::new(a.clamp(min, max), b.clamp(min, max));
        if range != self.year_range {
            log::debug!("Year range: {}-{}", range.start(), range.end());
            self.year_range = range;
        }
    }

    pub fn set_year(&mut self, year: i32) {
        let (min, max) = self.year_bounds;
        let year = year.clamp(min, max);
        if year != self.year {
            log::debug!("Map year: {year}");
            self.year = year;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::UsageRecord;

    fn dataset() -> Dataset {
        Dataset::from_records(
            vec!["Area".into(), "Year".into(), "Value".into()],
            vec![
                UsageRecord::new("Nepal", 1995, 1.0),
                UsageRecord::new("Chile", 1990, 2.0),
                UsageRecord::new("Nepal", 2016, 3.0),
            ],
        )
    }

    #[test]
    fn defaults_follow_the_dataset() {
        let state = AppState::for_dataset(&dataset());
        assert_eq!(state.page, Page::Home);
        assert_eq!(state.country.as_deref(), Some("Nepal"));
        assert_eq!(state.year_range, YearRange::new(1990, 2016));
        assert_eq!(state.year, 1990);
    }

    #[test]
    fn empty_dataset_defaults() {
        let state = AppState::for_dataset(&Dataset::default());
        assert_eq!(state.country, None);
        assert_eq!(state.year_bounds, (0, 0));
    }

    #[test]
    fn crossed_handles_are_swapped() {
        let range = YearRange::new(2005, 1999);
        assert_eq!((range.start(), range.end()), (1999, 2005));
    }

    #[test]
    fn widget_values_are_clamped_to_bounds() {
        let mut state = AppState::for_dataset(&dataset());
        state.set_year_range(1800, 2100);
        assert_eq!(state.year_range, YearRange::new(1990, 2016));
        state.set_year(2500);
        assert_eq!(state.year, 2016);
    }

    #[test]
    fn any_page_can_be_selected_directly() {
        let mut state = AppState::for_dataset(&dataset());
        for page in Page::ALL.iter().rev() {
            state.set_page(*page);
            assert_eq!(state.page, *page);
        }
        assert_eq!(
            Page::ALL.map(Page::label),
            ["Home", "Country Analysis", "Global Trends"]
        );
    }
}
