//! Bike Rental Dashboard - daily bike rental analysis
//!
//! Loads the daily rental dataset, filters it by year, season and month, and
//! shows seasonal and monthly rental totals next to the raw data.

mod charts;
mod config;
mod data;
mod error;
mod gui;
mod pipeline;

use config::DashboardConfig;
use eframe::egui;
use gui::DashboardApp;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let config = DashboardConfig::load();

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([config.min_width, config.min_height])
            .with_title(config.title.clone()),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Bike Rental Dashboard",
        options,
        Box::new(move |cc| Ok(Box::new(DashboardApp::new(cc, &config)))),
    )
}
