/// Data layer: core types, loading, filtering and metrics.
///
/// Architecture:
/// ```text
///  embedded TSV table
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + validate → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  Vec<EventRecord>, species index, year bounds
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  year range + species set → FilteredView
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  metrics  │  FilteredView → Summary (cards + chart series)
///   └──────────┘
/// ```

pub mod error;
pub mod filter;
pub mod loader;
pub mod metrics;
pub mod model;
