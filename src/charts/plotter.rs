//! Chart Plotter Module
//! Shapes the summaries into plot series and draws them with egui_plot.

use crate::data::{MonthlySummary, Season, SeasonalSummary};
use egui::Color32;
use egui_plot::{Bar, BarChart, GridMark, Legend, Line, Plot, PlotPoints, Points};

pub const CHART_HEIGHT: f32 = 320.0;

/// Fraction of a category slot covered by one season's bar group.
const GROUP_WIDTH: f64 = 0.8;

/// Cool-to-warm pair, one color per dataset year.
pub const YEAR_COLORS: [(i32, Color32); 2] = [
    (2011, Color32::from_rgb(59, 76, 192)),  // Cool blue
    (2012, Color32::from_rgb(180, 4, 38)),  // Warm red
];

/// Bars for one year of the seasonal chart.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    pub name: String,
    pub color: Color32,
    pub bar_width: f64,
    /// (x position, height)
    pub bars: Vec<(f64, f64)>,
}

/// One year's line on the monthly chart.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    pub name: String,
    pub color: Color32,
    /// [month, count], ascending by month
    pub points: Vec<[f64; 2]>,
}

/// Draws the seasonal bar chart and the monthly line chart.
pub struct ChartPlotter;

impl ChartPlotter {
    pub fn year_color(year: i32) -> Color32 {
        YEAR_COLORS
            .iter()
            .find(|(y, _)| *y == year)
            .map(|(_, c)| *c)
            .unwrap_or(Color32::GRAY)
    }

    /// Group bars by season, one series per year, side by side within a slot.
    pub fn seasonal_bars(summary: &SeasonalSummary) -> Vec<BarSeries> {
        let years = summary.years();
        let n = years.len().max(1) as f64;
        let bar_width = GROUP_WIDTH / n;

        years
            .iter()
            .enumerate()
            .map(|(i, &year)| {
                let offset = (i as f64 - (n - 1.0) / 2.0) * bar_width;
                let bars = summary
                    .rows
                    .iter()
                    .filter(|r| r.year == year)
                    .map(|r| (r.season.index() as f64 + offset, r.count as f64))
                    .collect();
                BarSeries {
                    name: year.to_string(),
                    color: Self::year_color(year),
                    bar_width,
                    bars,
                }
            })
            .collect()
    }

    pub fn monthly_lines(summary: &MonthlySummary) -> Vec<LineSeries> {
        summary
            .years()
            .into_iter()
            .map(|year| LineSeries {
                name: year.to_string(),
                color: Self::year_color(year),
                points: summary
                    .rows
                    .iter()
                    .filter(|r| r.year == year)
                    .map(|r| [r.month as f64, r.count as f64])
                    .collect(),
            })
            .collect()
    }

    /// Season label for an x-axis mark, blank between categories.
    pub fn season_axis_label(value: f64) -> String {
        let idx = value.round();
        if (value - idx).abs() > 1e-6 || idx < 0.0 {
            return String::new();
        }
        Season::ALL
            .get(idx as usize)
            .map(|s| s.label().to_string())
            .unwrap_or_default()
    }

    pub fn month_axis_label(value: f64) -> String {
        let month = value.round();
        if (value - month).abs() > 1e-6 || !(1.0..=12.0).contains(&month) {
            String::new()
        } else {
            format!("{}", month as u32)
        }
    }

    /// Grouped bar chart: x = season, bars colored by year.
    pub fn draw_seasonal_chart(ui: &mut egui::Ui, summary: &SeasonalSummary) {
        let series = Self::seasonal_bars(summary);

        Plot::new("seasonal_chart")
            .height(CHART_HEIGHT)
            .legend(Legend::default())
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .x_axis_label("Season")
            .y_axis_label("Total Rentals")
            .include_x(-0.6)
            .include_x(Season::ALL.len() as f64 - 0.4)
            .include_y(0.0)
            .x_grid_spacer(|_input| {
                Season::ALL
                    .iter()
                    .map(|s| GridMark {
                        value: s.index() as f64,
                        step_size: 1.0,
                    })
                    .collect()
            })
            .x_axis_formatter(|mark, _range| Self::season_axis_label(mark.value))
            .show(ui, |plot_ui| {
                for s in series {
                    let bars: Vec<Bar> = s
                        .bars
                        .iter()
                        .map(|&(x, h)| Bar::new(x, h).width(s.bar_width))
                        .collect();
                    plot_ui.bar_chart(BarChart::new(bars).color(s.color).name(&s.name));
                }
            });
    }

    /// Line chart: x = month 1-12, one line per year with point markers.
    pub fn draw_monthly_chart(ui: &mut egui::Ui, summary: &MonthlySummary) {
        let series = Self::monthly_lines(summary);

        Plot::new("monthly_chart")
            .height(CHART_HEIGHT)
            .legend(Legend::default())
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .x_axis_label("Month")
            .y_axis_label("Total Rentals")
            .include_x(0.5)
            .include_x(12.5)
            .include_y(0.0)
            .x_grid_spacer(|_input| {
                (1..=12)
                    .map(|m| GridMark {
                        value: m as f64,
                        step_size: 1.0,
                    })
                    .collect()
            })
            .x_axis_formatter(|mark, _range| Self::month_axis_label(mark.value))
            .show(ui, |plot_ui| {
                for s in series {
                    plot_ui.line(
                        Line::new(PlotPoints::from_iter(s.points.iter().copied()))
                            .color(s.color)
                            .width(2.0)
                            .name(&s.name),
                    );
                    plot_ui.points(
                        Points::new(PlotPoints::from_iter(s.points.iter().copied()))
                            .radius(4.0)
                            .color(s.color)
                            .name(&s.name),
                    );
                }
            });
    }
}
