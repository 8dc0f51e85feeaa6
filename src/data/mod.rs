//! Data module - CSV loading, schema check, filtering and aggregation

pub mod filter;
pub mod loader;
pub mod model;
pub mod processor;
pub mod schema;

pub use filter::{apply_filters, FilterSelection, YearFilter};
pub use loader::{DatasetCache, LoadedDataset};
pub use model::Season;
pub use processor::{DataProcessor, MonthlySummary, SeasonalSummary};
pub use schema::SchemaGuard;
