/// Data layer: filename conventions, CSV loading, and the figure model.
///
/// Architecture:
/// ```text
///  sonde_*.csv / TEB_*.csv
///        │
///        ▼
///   ┌──────────┐
///   │  naming   │  file name → {kind, axis, scheme, encoder}
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  scan dir → Inventory, parse file → Series / Table
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  model    │  Figure, Trace, ValueRange (log-scale test)
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod naming;
