use std::sync::Arc;

use crate::color::ColorMap;
use crate::data::filter::{FilterCriteria, filter};
use crate::data::metrics::Summary;
use crate::data::model::Dataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset, shared read-only for the lifetime of the process.
    pub dataset: Arc<Dataset>,

    /// Current year range and species selection.
    pub criteria: FilterCriteria,

    /// Indices of events passing the current filters (cached).
    pub visible_indices: Vec<usize>,

    /// Metrics and chart series for `visible_indices` (cached).
    pub summary: Summary,

    /// Colour per species.
    pub color_map: ColorMap,
}

impl AppState {
    /// Start with everything selected.
    pub fn new(dataset: Arc<Dataset>) -> Self {
        let criteria = FilterCriteria::all(&dataset);
        let color_map = ColorMap::new(dataset.species());
        let mut state = AppState {
            dataset,
            criteria,
            visible_indices: Vec::new(),
            summary: Summary::default(),
            color_map,
        };
        state.refilter();
        state
    }

    /// Recompute `visible_indices` and `summary` after a criteria change.
    ///
    /// Invalid criteria are corrected by the pipeline; the corrected values
    /// are written back so the widgets reflect what is shown.
    pub fn refilter(&mut self) {
        self.criteria = self.criteria.clamped(&self.dataset);
        let view = filter(&self.dataset, &self.criteria);
        self.summary = Summary::from_view(&view);
        self.visible_indices = view.indices().to_vec();
        log::debug!(
            "Refiltered: years {}..={}, {} species, {} events",
            self.criteria.year_min,
            self.criteria.year_max,
            self.criteria.selected_species.len(),
            self.visible_indices.len()
        );
    }

    /// Set the lower year bound; the upper bound follows if overtaken.
    pub fn set_year_min(&mut self, year: i32) {
        self.criteria.year_min = year;
        self.criteria.year_max = self.criteria.year_max.max(year);
        self.refilter();
    }

    /// Set the upper year bound; the lower bound follows if overtaken.
    pub fn set_year_max(&mut self, year: i32) {
        self.criteria.year_max = year;
        self.criteria.year_min = self.criteria.year_min.min(year);
        self.refilter();
    }

    pub fn is_species_selected(&self, species: &str) -> bool {
        self.criteria.selected_species.contains(species)
    }

    /// Toggle a single species in the allow-set.
    pub fn toggle_species(&mut self, species: &str) {
        let selected = &mut self.criteria.selected_species;
        if !selected.remove(species) {
            selected.insert(species.to_string());
        }
        self.refilter();
    }

    /// Select every species.
    pub fn select_all_species(&mut self) {
        self.criteria.selected_species = self.dataset.species().iter().cloned().collect();
        self.refilter();
    }

    /// Deselect every species.
    pub fn select_no_species(&mut self) {
        self.criteria.selected_species.clear();
        self.refilter();
    }

    /// Back to the full range with all species.
    pub fn reset_filters(&mut self) {
        self.criteria = FilterCriteria::all(&self.dataset);
        self.refilter();
    }
}
