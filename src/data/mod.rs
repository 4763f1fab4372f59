/// Data layer: record types, loading, and the filter/sort pipeline.
///
/// Architecture:
/// ```text
///  bundled alumni.json / .json / .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader  │  parse file → AlumniDataset
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ AlumniDataset │  Vec<AlumniRecord>, observed courses
///   └───────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter  │  name/course predicates + year sort → ordered indices
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
