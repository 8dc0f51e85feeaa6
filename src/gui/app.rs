//! Bike Rental Dashboard Main Application
//! Main window with the filter sidebar and the dashboard view.

use crate::config::DashboardConfig;
use crate::data::DatasetCache;
use crate::error::DashboardError;
use crate::gui::{ChartViewer, ControlPanel, ControlPanelAction};
use crate::pipeline::{self, DashboardView};
use egui::SidePanel;
use log::{info, warn};

/// Main application window.
pub struct DashboardApp {
    cache: DatasetCache,
    control_panel: ControlPanel,
    chart_viewer: ChartViewer,

    /// Result of the most recent cycle.
    outcome: Result<DashboardView, DashboardError>,
}

impl DashboardApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &DashboardConfig) -> Self {
        let data_path = config.data_path();
        let mut app = Self {
            cache: DatasetCache::new(&data_path),
            control_panel: ControlPanel::new(data_path),
            chart_viewer: ChartViewer::new(config.title.clone()),
            outcome: Err(DashboardError::EmptyDataset),
        };
        app.run_cycle();
        app
    }

    /// Re-run the whole pipeline against the cached dataset.
    fn run_cycle(&mut self) {
        let selection = self.control_panel.selection();
        let first_load = !self.cache.is_loaded();
        self.outcome = pipeline::render(self.cache.get_or_load(), &selection);
        if first_load {
            info!(
                "Dataset read {} time(s) from {}",
                self.cache.load_count(),
                self.cache.path().display()
            );
        }

        match &self.outcome {
            Ok(view) => {
                let total = self.cache.get_or_load().table.height();
                self.control_panel
                    .set_status(&format!("Showing {} of {} rows", view.row_count, total));
            }
            Err(e) => {
                warn!("Render halted: {}", e);
                self.control_panel.set_status(&format!("Error: {}", e));
            }
        }
    }

    fn handle_reload(&mut self) {
        info!("Reloading dataset from {}", self.cache.path().display());
        self.cache.invalidate();
        self.run_cycle();
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Left panel - filters
        SidePanel::left("control_panel")
            .min_width(220.0)
            .max_width(280.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    match self.control_panel.show(ui) {
                        ControlPanelAction::SelectionChanged => self.run_cycle(),
                        ControlPanelAction::ReloadData => self.handle_reload(),
                        ControlPanelAction::None => {}
                    }
                });
            });

        // Central panel - dashboard
        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_viewer.show(ui, &self.outcome);
        });
    }
}
