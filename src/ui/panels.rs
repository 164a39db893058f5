use eframe::egui::{self, RichText, ScrollArea, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filter Options");
    ui.separator();

    let (min_year, max_year) = (state.dataset.min_year(), state.dataset.max_year());
    let species = state.dataset.species().to_vec();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Year range ----
            ui.strong("Select Year Range");
            let mut from = state.criteria.year_min;
            let mut to = state.criteria.year_max;
            if ui
                .add(egui::Slider::new(&mut from, min_year..=max_year).text("from"))
                .changed()
            {
                state.set_year_min(from);
            }
            if ui
                .add(egui::Slider::new(&mut to, min_year..=max_year).text("to"))
                .changed()
            {
                state.set_year_max(to);
            }
            ui.separator();

            // ---- Species multiselect ----
            let n_selected = state.criteria.selected_species.len();
            ui.strong(format!("Select Species  ({n_selected}/{})", species.len()));
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    state.select_all_species();
                }
                if ui.small_button("None").clicked() {
                    state.select_no_species();
                }
            });

            for name in &species {
                let mut checked = state.is_species_selected(name);
                let text = RichText::new(name).color(state.color_map.color_for(name));
                if ui.checkbox(&mut checked, text).changed() {
                    state.toggle_species(name);
                }
            }
            ui.separator();

            if ui.button("Reset filters").clicked() {
                state.reset_filters();
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the dashboard title and the event counter.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.heading("🌊 Arctic Voice Dashboard");
        ui.separator();
        ui.label(format!(
            "{} events loaded, {} visible",
            state.dataset.len(),
            state.visible_indices.len()
        ));
    });
    ui.label(RichText::new("Cetacean Interaction Events in China (2012–2019)").strong());
}

// ---------------------------------------------------------------------------
// Summary cards
// ---------------------------------------------------------------------------

/// Three metric cards: total events, unique facilities, species involved.
pub fn summary_cards(ui: &mut Ui, state: &AppState) {
    ui.heading("📊 Summary Statistics");
    let summary = &state.summary;
    let cards = [
        ("Total Events", summary.total_events),
        ("Unique Facilities", summary.unique_facility_count),
        ("Species Involved", summary.unique_species_count),
    ];

    ui.columns(cards.len(), |columns: &mut [Ui]| {
        for (col, (label, value)) in columns.iter_mut().zip(cards) {
            egui::Frame::group(col.style()).show(col, |ui: &mut Ui| {
                ui.set_min_width(ui.available_width());
                ui.label(label);
                ui.label(RichText::new(value.to_string()).size(28.0).strong());
            });
        }
    });
}
