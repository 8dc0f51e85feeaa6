//! Charts module - Chart rendering

pub mod insights;
mod plotter;
mod table;

pub use plotter::ChartPlotter;
pub use table::TableView;
