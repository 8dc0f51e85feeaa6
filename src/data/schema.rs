//! Presence check for the columns the pipeline depends on.

use crate::data::model::{RentalTable, DATE_COL, SEASON_COL, YEAR_COL};
use crate::error::{DashboardError, Result};

pub const REQUIRED_COLUMNS: [&str; 3] = [SEASON_COL, DATE_COL, YEAR_COL];

pub struct SchemaGuard;

impl SchemaGuard {
    /// Fails with [`DashboardError::SchemaMismatch`] naming every absent column.
    pub fn check(table: &RentalTable) -> Result<()> {
        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|name| !table.has_column(name))
            .map(|name| name.to_string())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(DashboardError::SchemaMismatch { missing })
        }
    }
}
