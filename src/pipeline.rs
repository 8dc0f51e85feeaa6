//! One dashboard cycle: guard, prepare, filter, aggregate.
//!
//! [`render`] is a pure function of the memoized dataset and the current
//! selection. The GUI calls it after every interaction and draws whatever it
//! returns.

use crate::charts::TableView;
use crate::data::{
    apply_filters, DataProcessor, FilterSelection, LoadedDataset, MonthlySummary, SchemaGuard,
    SeasonalSummary,
};
use crate::error::{DashboardError, Result};
use log::debug;

/// Everything the main area draws for one cycle.
#[derive(Debug, Clone)]
pub struct DashboardView {
    /// Rows left after filtering.
    pub row_count: usize,
    pub seasonal: SeasonalSummary,
    pub monthly: MonthlySummary,
    pub table: TableView,
    /// Sum of `cnt` over the filtered rows.
    pub total_rentals: i64,
}

pub fn render(dataset: &LoadedDataset, selection: &FilterSelection) -> Result<DashboardView> {
    if dataset.table.is_empty() {
        return Err(match &dataset.failure {
            Some(failure) => failure.clone().into(),
            None => DashboardError::EmptyDataset,
        });
    }

    SchemaGuard::check(&dataset.table)?;

    let prepared = DataProcessor::prepare(&dataset.table)?;
    let filtered = apply_filters(&prepared, selection)?;
    let seasonal = DataProcessor::seasonal_summary(&filtered)?;
    let monthly = DataProcessor::monthly_summary(&filtered)?;
    let total_rentals = DataProcessor::total_count(&filtered)?;
    let table = TableView::from_frame(&filtered);

    debug!(
        "Cycle: {} of {} rows selected, {} seasonal rows, {} monthly rows",
        filtered.height(),
        dataset.table.height(),
        seasonal.rows.len(),
        monthly.rows.len()
    );

    Ok(DashboardView {
        row_count: filtered.height(),
        seasonal,
        monthly,
        table,
        total_rentals,
    })
}
