//! Chart Viewer Widget
//! Central scrollable panel: title, the two charts with their insights, and
//! the raw data table.

use crate::charts::insights::{draw_insights, MONTHLY_INSIGHTS, SEASONAL_INSIGHTS};
use crate::charts::ChartPlotter;
use crate::error::DashboardError;
use crate::pipeline::DashboardView;
use egui::{Color32, RichText, ScrollArea};

const SECTION_SPACING: f32 = 20.0;
const ERROR_COLOR: Color32 = Color32::from_rgb(220, 53, 69);

/// Main area renderer for the latest cycle outcome.
pub struct ChartViewer {
    title: String,
}

impl ChartViewer {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    /// Draw either the dashboard or the message that halted this cycle.
    pub fn show(&self, ui: &mut egui::Ui, outcome: &Result<DashboardView, DashboardError>) {
        let view = match outcome {
            Ok(view) => view,
            Err(e) => {
                Self::draw_halt(ui, e);
                return;
            }
        };

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.label(RichText::new(format!("📊 {}", self.title)).size(26.0).strong());
                ui.label(RichText::new("Bike rental data for 2011 and 2012").size(18.0));
                ui.add_space(SECTION_SPACING);

                Self::section_heading(ui, "Bike Rental Development per Season");
                ui.label(RichText::new("Total Bike Rentals per Season").size(13.0).strong());
                ChartPlotter::draw_seasonal_chart(ui, &view.seasonal);
                ui.add_space(8.0);
                draw_insights(ui, &SEASONAL_INSIGHTS);
                ui.add_space(SECTION_SPACING);

                Self::section_heading(ui, "Bike Rental Trend per Month");
                ui.label(RichText::new("Bike Rental Trend per Month").size(13.0).strong());
                ChartPlotter::draw_monthly_chart(ui, &view.monthly);
                ui.add_space(8.0);
                draw_insights(ui, &MONTHLY_INSIGHTS);
                ui.add_space(SECTION_SPACING);

                Self::section_heading(ui, "📜 Bike Rental Data");
                ui.label(
                    RichText::new(format!(
                        "{} rows, {} rentals",
                        view.row_count,
                        view.total_rentals
                    ))
                        .size(11.0)
                        .color(Color32::GRAY),
                );
                view.table.show(ui);
            });
    }

    fn section_heading(ui: &mut egui::Ui, text: &str) {
        ui.separator();
        ui.label(RichText::new(text).size(20.0).strong());
        ui.add_space(5.0);
    }

    fn draw_halt(ui: &mut egui::Ui, error: &DashboardError) {
        ui.add_space(10.0);
        if error.is_error() {
            egui::Frame::none()
                .rounding(5.0)
                .stroke(egui::Stroke::new(1.5, ERROR_COLOR))
                .inner_margin(10.0)
                .show(ui, |ui| {
                    ui.label(RichText::new(error.to_string()).size(14.0).color(ERROR_COLOR));
                });
        } else {
            ui.label(RichText::new(error.to_string()).size(14.0).color(Color32::GRAY));
        }
    }
}
