/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///   pesticides.csv
///        │
///        ▼
///   ┌──────────────┐
///   │ DatasetStore │  read once → cached Dataset
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset  │  Vec<UsageRecord>, area index, year bounds
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter  │  country / year / year-range predicates → FilteredView
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod filter;
