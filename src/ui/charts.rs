use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, GridMark, Legend, Plot};

use crate::state::AppState;

const CHART_HEIGHT: f32 = 260.0;
const BAR_COLOR: Color32 = Color32::from_rgb(70, 130, 180);

// ---------------------------------------------------------------------------
// Central panel charts
// ---------------------------------------------------------------------------

/// Render the three charts for the current filtered view.
pub fn charts(ui: &mut Ui, state: &AppState) {
    if state.summary.total_events == 0 {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No events match the current filters");
        });
        return;
    }

    ui.heading("📅 Events by Year");
    events_by_year(ui, state);
    ui.separator();

    ui.heading("🏢 Top Facilities");
    top_facilities(ui, state);
    ui.separator();

    ui.heading("🐋 Species Distribution");
    species_distribution(ui, state);
}

/// Label for a category axis: only whole positions that hold a category.
fn category_label(mark: GridMark, labels: &[String]) -> String {
    let pos = mark.value.round();
    if (mark.value - pos).abs() > f64::EPSILON || pos < 0.0 {
        return String::new();
    }
    labels.get(pos as usize).cloned().unwrap_or_default()
}

/// Vertical bars, one per year present in the view.
fn events_by_year(ui: &mut Ui, state: &AppState) {
    let counts = &state.summary.year_counts;
    let labels: Vec<String> = counts.iter().map(|(year, _)| year.to_string()).collect();
    let bars: Vec<Bar> = counts
        .iter()
        .enumerate()
        .map(|(i, (year, n))| Bar::new(i as f64, *n as f64).name(year).fill(BAR_COLOR))
        .collect();

    Plot::new("events_by_year")
        .height(CHART_HEIGHT)
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .include_y(0.0)
        .x_axis_label("Year")
        .y_axis_label("Number of Events")
        .x_axis_formatter(move |mark, _range| category_label(mark, &labels))
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).width(0.6));
        });
}

/// Horizontal bars, most events at the top.
fn top_facilities(ui: &mut Ui, state: &AppState) {
    let counts = &state.summary.facility_counts;
    // Position 0 is the bottom of the chart, so list the ranking reversed.
    let labels: Vec<String> = counts.iter().rev().map(|(name, _)| name.clone()).collect();
    let bars: Vec<Bar> = counts
        .iter()
        .rev()
        .enumerate()
        .map(|(i, (name, n))| Bar::new(i as f64, *n as f64).name(name).fill(BAR_COLOR))
        .collect();

    Plot::new("top_facilities")
        .height(CHART_HEIGHT.max(22.0 * counts.len() as f32))
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .include_x(0.0)
        .x_axis_label("Number of Events")
        .y_axis_formatter(move |mark, _range| category_label(mark, &labels))
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).width(0.7).horizontal());
        });
}

/// One coloured bar per species, with a legend.
fn species_distribution(ui: &mut Ui, state: &AppState) {
    let counts = &state.summary.species_counts;
    let labels: Vec<String> = counts.iter().map(|(name, _)| name.clone()).collect();

    Plot::new("species_distribution")
        .height(CHART_HEIGHT)
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .include_y(0.0)
        .legend(Legend::default())
        .y_axis_label("Number of Events")
        .x_axis_formatter(move |mark, _range| category_label(mark, &labels))
        .show(ui, |plot_ui| {
            for (i, (species, n)) in counts.iter().enumerate() {
                let color = state.color_map.color_for(species);
                let bar = Bar::new(i as f64, *n as f64).name(species).fill(color);
                let chart = BarChart::new(vec![bar]).width(0.6).color(color).name(species);
                plot_ui.bar_chart(chart);
            }
        });
}
