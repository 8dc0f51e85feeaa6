//! CSV Data Loader Module
//! Reads the rental dataset with Polars and memoizes it for the process lifetime.

use crate::data::model::RentalTable;
use crate::error::{DashboardError, Result};
use log::{debug, info, warn};
use polars::prelude::*;
use std::cell::{Cell, OnceCell};
use std::path::{Path, PathBuf};

/// Reads delimited rental files into a [`RentalTable`].
pub struct DataLoader;

impl DataLoader {
    /// Load a CSV file using Polars. Uncached.
    pub fn load_csv(path: &Path) -> Result<RentalTable> {
        if !path.is_file() {
            return Err(DashboardError::DataUnavailable {
                path: path.to_path_buf(),
                reason: "file not found".to_string(),
            });
        }

        let df = LazyCsvReader::new(path)
            .with_has_header(true)
            .with_infer_schema_length(Some(10000))
            .finish()
            .and_then(|lazy| lazy.collect())
            .map_err(|e| DashboardError::DataUnavailable {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        info!(
            "Loaded {} rows, {} columns from {}",
            df.height(),
            df.width(),
            path.display()
        );
        let table = RentalTable::new(df);
        debug!("Columns: {:?}", table.column_names());
        Ok(table)
    }
}

/// Why the memoized load produced no data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadFailure {
    pub path: PathBuf,
    pub reason: String,
}

impl From<LoadFailure> for DashboardError {
    fn from(failure: LoadFailure) -> Self {
        DashboardError::DataUnavailable {
            path: failure.path,
            reason: failure.reason,
        }
    }
}

/// Outcome of a load: the table (empty on failure) plus the failure, if any.
#[derive(Debug, Clone, Default)]
pub struct LoadedDataset {
    pub table: RentalTable,
    pub failure: Option<LoadFailure>,
}

impl LoadedDataset {
    pub fn from_table(table: RentalTable) -> Self {
        Self {
            table,
            failure: None,
        }
    }

    fn from_result(path: &Path, result: Result<RentalTable>) -> Self {
        match result {
            Ok(table) => Self::from_table(table),
            Err(e) => {
                warn!("Failed to load dataset: {}", e);
                let failure = match e {
                    DashboardError::DataUnavailable { path, reason } => LoadFailure { path, reason },
                    other => LoadFailure {
                        path: path.to_path_buf(),
                        reason: other.to_string(),
                    },
                };
                Self {
                    table: RentalTable::empty(),
                    failure: Some(failure),
                }
            }
        }
    }
}

/// Process-wide memoized dataset keyed on a fixed path.
///
/// The first [`get_or_load`](Self::get_or_load) reads the file; later calls
/// return the stored outcome, failures included. Only
/// [`invalidate`](Self::invalidate) clears it.
pub struct DatasetCache {
    path: PathBuf,
    slot: OnceCell<LoadedDataset>,
    loads: Cell<usize>,
}

impl DatasetCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            slot: OnceCell::new(),
            loads: Cell::new(0),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get_or_load(&self) -> &LoadedDataset {
        self.slot.get_or_init(|| {
            self.loads.set(self.loads.get() + 1);
            LoadedDataset::from_result(&self.path, DataLoader::load_csv(&self.path))
        })
    }

    pub fn is_loaded(&self) -> bool {
        self.slot.get().is_some()
    }

    /// Number of filesystem reads performed so far.
    pub fn load_count(&self) -> usize {
        self.loads.get()
    }

    pub fn invalidate(&mut self) {
        if self.slot.take().is_some() {
            info!("Dataset cache invalidated for {}", self.path.display());
        }
    }
}
