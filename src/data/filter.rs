use std::collections::BTreeSet;

use super::error::InvalidCriteriaError;
use super::model::{Dataset, EventRecord};

// ---------------------------------------------------------------------------
// Filter criteria: year range + species allow-set
// ---------------------------------------------------------------------------

/// The current selection made in the filter panel.
///
/// An empty `selected_species` set is valid and matches nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    pub year_min: i32,
    pub year_max: i32,
    pub selected_species: BTreeSet<String>,
}

impl FilterCriteria {
    /// Full year range and every species selected (i.e., show everything).
    pub fn all(dataset: &Dataset) -> Self {
        FilterCriteria {
            year_min: dataset.min_year(),
            year_max: dataset.max_year(),
            selected_species: dataset.species().iter().cloned().collect(),
        }
    }

    /// Strict check against the dataset's year bounds and species.
    pub fn validate(&self, dataset: &Dataset) -> Result<(), InvalidCriteriaError> {
        if self.year_min > self.year_max {
            return Err(InvalidCriteriaError::ReversedRange {
                year_min: self.year_min,
                year_max: self.year_max,
            });
        }
        let (min, max) = (dataset.min_year(), dataset.max_year());
        for year in [self.year_min, self.year_max] {
            if !(min..=max).contains(&year) {
                return Err(InvalidCriteriaError::YearOutOfRange { year, min, max });
            }
        }
        if let Some(unknown) = self
            .selected_species
            .iter()
            .find(|s| !dataset.has_species(s))
        {
            return Err(InvalidCriteriaError::UnknownSpecies(unknown.clone()));
        }
        Ok(())
    }

    /// Correct the criteria to the nearest valid selection:
    /// * both years are clamped into the dataset's year range
    /// * a reversed range collapses to the single year `year_min`
    /// * species absent from the dataset are dropped
    pub fn clamped(&self, dataset: &Dataset) -> Self {
        let (min, max) = (dataset.min_year(), dataset.max_year());
        let year_min = self.year_min.clamp(min, max);
        let year_max = self.year_max.clamp(min, max).max(year_min);
        let selected_species = self
            .selected_species
            .iter()
            .filter(|s| dataset.has_species(s))
            .cloned()
            .collect();

        FilterCriteria {
            year_min,
            year_max,
            selected_species,
        }
    }

    /// Whether a single record passes both predicates (inclusive year range).
    pub fn matches(&self, record: &EventRecord) -> bool {
        (self.year_min..=self.year_max).contains(&record.year())
            && self.selected_species.contains(&record.species)
    }
}

// ---------------------------------------------------------------------------
// Filtered view
// ---------------------------------------------------------------------------

/// The records of a [`Dataset`] that pass a [`FilterCriteria`], as indices
/// in source order.
#[derive(Debug, Clone)]
pub struct FilteredView<'a> {
    dataset: &'a Dataset,
    indices: Vec<usize>,
}

impl<'a> FilteredView<'a> {
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Matching records, in the dataset's original order.
    pub fn records(&self) -> impl Iterator<Item = &'a EventRecord> + '_ {
        let records = self.dataset.records();
        self.indices.iter().map(move |&i| &records[i])
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Apply the criteria to the dataset.
///
/// Out-of-range years, reversed ranges and unknown species are corrected with
/// [`FilterCriteria::clamped`] rather than rejected; the correction is logged.
pub fn filter<'a>(dataset: &'a Dataset, criteria: &FilterCriteria) -> FilteredView<'a> {
    let effective = criteria.clamped(dataset);
    if effective != *criteria {
        log::warn!(
            "Filter criteria corrected: years {}..={} -> {}..={}, {} -> {} species",
            criteria.year_min,
            criteria.year_max,
            effective.year_min,
            effective.year_max,
            criteria.selected_species.len(),
            effective.selected_species.len()
        );
    }
    apply(dataset, &effective)
}

/// Like [`filter`], but rejects invalid criteria instead of correcting them.
pub fn try_filter<'a>(
    dataset: &'a Dataset,
    criteria: &FilterCriteria,
) -> Result<FilteredView<'a>, InvalidCriteriaError> {
    criteria.validate(dataset)?;
    Ok(apply(dataset, criteria))
}

fn apply<'a>(dataset: &'a Dataset, criteria: &FilterCriteria) -> FilteredView<'a> {
    let indices = dataset
        .records()
        .iter()
        .enumerate()
        .filter(|(_, rec)| criteria.matches(rec))
        .map(|(i, _)| i)
        .collect();

    FilteredView { dataset, indices }
}
