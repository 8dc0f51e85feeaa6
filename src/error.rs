//! Error types shared by the data pipeline and the GUI.

use polars::prelude::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Data file not available at {}: {reason}", path.display())]
    DataUnavailable { path: PathBuf, reason: String },

    #[error("The dataset contains no rows")]
    EmptyDataset,

    #[error("Required columns not found in dataset: {}", missing.join(", "))]
    SchemaMismatch { missing: Vec<String> },

    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
}

impl DashboardError {
    /// Whether this error should be shown as an error rather than a notice.
    pub fn is_error(&self) -> bool {
        !matches!(self, DashboardError::EmptyDataset)
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;
