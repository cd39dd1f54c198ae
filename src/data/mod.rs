/// Data layer: core types, loading, filtering, and aggregation.
///
/// Architecture:
/// ```text
///      .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → LaunchDataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ LaunchDataset │  Vec<LaunchRecord>, site/payload indices
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  site ⨉ payload range → surviving indices
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate  │  proportion slices, scatter points
///   └───────────┘
/// ```

pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod model;
