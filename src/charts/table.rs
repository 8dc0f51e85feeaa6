//! Raw data table for the filtered rows.

use egui_extras::{Column as TableColumn, TableBuilder};
use polars::prelude::*;

const HEADER_HEIGHT: f32 = 22.0;
const ROW_HEIGHT: f32 = 18.0;
const MAX_TABLE_HEIGHT: f32 = 420.0;

/// Display-ready copy of a frame: one string per cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableView {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

fn cell_text(value: AnyValue) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        other => other.to_string(),
    }
}

impl TableView {
    pub fn from_frame(df: &DataFrame) -> Self {
        let headers = df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();

        let columns = df.get_columns();
        let rows = (0..df.height())
            .map(|i| {
                columns
                    .iter()
                    .map(|col| col.get(i).map(cell_text).unwrap_or_default())
                    .collect()
            })
            .collect();

        Self { headers, rows }
    }

    /// Scrollable table with every column and row.
    pub fn show(&self, ui: &mut egui::Ui) {
        if self.headers.is_empty() {
            return;
        }

        egui::ScrollArea::horizontal()
            .id_salt("data_table_scroll")
            .show(ui, |ui| {
                TableBuilder::new(ui)
                    .striped(true)
                    .resizable(true)
                    .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                    .columns(TableColumn::auto().at_least(60.0), self.headers.len())
                    .min_scrolled_height(0.0)
                    .max_scroll_height(MAX_TABLE_HEIGHT)
                    .header(HEADER_HEIGHT, |mut header| {
                        for name in &self.headers {
                            header.col(|ui| {
                                ui.strong(name);
                            });
                        }
                    })
                    .body(|body| {
                        body.rows(ROW_HEIGHT, self.rows.len(), |mut row| {
                            let cells = &self.rows[row.index()];
                            for cell in cells {
                                row.col(|ui| {
                                    ui.label(cell);
                                });
                            }
                        });
                    });
            });
    }
}
