//! Control Panel Widget
//! Left side panel with the year, season and month filters.

use crate::data::filter::ALL_MONTHS;
use crate::data::{FilterSelection, Season, YearFilter};
use egui::{Color32, RichText};
use std::path::PathBuf;

/// Left side control panel holding the filter widgets' state.
pub struct ControlPanel {
    pub year: YearFilter,
    pub seasons: [bool; 4],
    pub months: [bool; 12],
    pub data_path: PathBuf,
    pub status: String,
}

impl ControlPanel {
    pub fn new(data_path: PathBuf) -> Self {
        Self {
            year: YearFilter::default(),
            seasons: [true; 4],
            months: [true; 12],
            data_path,
            status: "Ready".to_string(),
        }
    }

    /// Current selection as read from the widgets.
    pub fn selection(&self) -> FilterSelection {
        FilterSelection::default()
            .with_year(self.year)
            .with_seasons(
                Season::ALL
                    .into_iter()
                    .filter(|s| self.seasons[s.index()]),
            )
            .with_months(ALL_MONTHS.filter(|m| self.months[(m - 1) as usize]))
    }

    /// Draw the control panel
    pub fn show(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        ui.add_space(5.0);
        ui.label(RichText::new("Time Range Filter").size(18.0).strong());
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Year =====
        ui.label(RichText::new("Select Year:").size(14.0).strong());
        ui.add_space(5.0);
        for year in YearFilter::ALL {
            if ui.radio_value(&mut self.year, year, year.label()).changed() {
                action = ControlPanelAction::SelectionChanged;
            }
        }

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Seasons =====
        ui.label(RichText::new("Select Season:").size(14.0).strong());
        ui.add_space(5.0);
        for season in Season::ALL {
            if ui
                .checkbox(&mut self.seasons[season.index()], season.label())
                .changed()
            {
                action = ControlPanelAction::SelectionChanged;
            }
        }
        if Self::select_buttons(ui, &mut self.seasons) {
            action = ControlPanelAction::SelectionChanged;
        }

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Months =====
        ui.label(RichText::new("Select Month:").size(14.0).strong());
        ui.add_space(5.0);
        egui::Grid::new("month_checkboxes")
            .num_columns(4)
            .spacing([12.0, 4.0])
            .show(ui, |ui| {
                for (i, selected) in self.months.iter_mut().enumerate() {
                    if ui.checkbox(selected, (i + 1).to_string()).changed() {
                        action = ControlPanelAction::SelectionChanged;
                    }
                    if (i + 1) % 4 == 0 {
                        ui.end_row();
                    }
                }
            });
        if Self::select_buttons(ui, &mut self.months) {
            action = ControlPanelAction::SelectionChanged;
        }

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Data Source =====
        ui.label(RichText::new("Data Source").size(14.0).strong());
        ui.add_space(5.0);
        let file_name = self
            .data_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.data_path.display().to_string());
        ui.label(RichText::new(file_name).size(12.0))
            .on_hover_text(self.data_path.display().to_string());
        ui.add_space(5.0);
        if ui.button("🔄 Reload data").clicked() {
            action = ControlPanelAction::ReloadData;
        }

        ui.add_space(10.0);
        let status_color = if self.status.starts_with("Error") {
            Color32::from_rgb(220, 53, 69)
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        action
    }

    /// "Select All" / "Clear All" helpers. Returns true if anything changed.
    fn select_buttons(ui: &mut egui::Ui, flags: &mut [bool]) -> bool {
        let mut changed = false;
        ui.horizontal(|ui| {
            if ui.small_button("Select All").clicked() && flags.iter().any(|v| !v) {
                flags.iter_mut().for_each(|v| *v = true);
                changed = true;
            }
            if ui.small_button("Clear All").clicked() && flags.iter().any(|v| *v) {
                flags.iter_mut().for_each(|v| *v = false);
                changed = true;
            }
        });
        changed
    }

    /// Set status line text
    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    SelectionChanged,
    ReloadData,
}
