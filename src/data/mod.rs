/// Data layer: core types, loading, filtering, and aggregation.
///
/// Architecture:
/// ```text
///  hour.csv + day.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse both tables → BikeDataset (once per session)
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │  BikeDataset  │  Vec<HourlyRecord>, Vec<DailyRecord>, years
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  year/season/weather predicates → row indices
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ summary   │  group-bys feeding the three chart groups
///   └──────────┘
/// ```
pub mod filter;
pub mod loader;
pub mod model;
pub mod summary;

#[cfg(test)]
pub mod testutil;
