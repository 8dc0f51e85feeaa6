//! Fixed commentary shown under each chart. Not recomputed from the data.

use egui::{Color32, RichText};

pub const SEASONAL_INSIGHTS: [&str; 2] = [
    "Spring shows a significant jump compared with the previous year.",
    "Fall has the highest number of rentals.",
];

pub const MONTHLY_INSIGHTS: [&str; 2] = [
    "A large surge happens early in the year, especially from January to March.",
    "The trend declines at the end of the year (October - December).",
];

const CHECK_COLOR: Color32 = Color32::from_rgb(40, 167, 69);

pub fn draw_insights(ui: &mut egui::Ui, lines: &[&str]) {
    for line in lines {
        ui.horizontal(|ui| {
            ui.label(RichText::new("✅").color(CHECK_COLOR));
            ui.label(RichText::new(*line).strong());
        });
    }
}
