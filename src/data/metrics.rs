use std::collections::BTreeMap;

use super::filter::FilteredView;

// ---------------------------------------------------------------------------
// Summary – everything the metric cards and charts need
// ---------------------------------------------------------------------------

/// Metrics and chart series derived from a [`FilteredView`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub total_events: usize,
    pub unique_facility_count: usize,
    pub unique_species_count: usize,
    /// Events per year, ascending by year; years with no events are absent.
    pub year_counts: Vec<(i32, usize)>,
    /// Events per facility, descending by count.
    pub facility_counts: Vec<(String, usize)>,
    /// Events per species, descending by count.
    pub species_counts: Vec<(String, usize)>,
}

impl Summary {
    pub fn from_view(view: &FilteredView<'_>) -> Self {
        let mut years: BTreeMap<i32, usize> = BTreeMap::new();
        for rec in view.records() {
            *years.entry(rec.year()).or_default() += 1;
        }

        let facility_counts = ranked_counts(view.records().map(|r| r.facility.as_str()));
        let species_counts = ranked_counts(view.records().map(|r| r.species.as_str()));

        Summary {
            total_events: view.len(),
            unique_facility_count: facility_counts.len(),
            unique_species_count: species_counts.len(),
            year_counts: years.into_iter().collect(),
            facility_counts,
            species_counts,
        }
    }
}

/// Count occurrences, sorted by count descending. The sort is stable, so
/// ties keep the order in which each value first appeared.
fn ranked_counts<'a>(values: impl Iterator<Item = &'a str>) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for value in values {
        match counts.iter_mut().find(|(v, _)| *v == value) {
            Some(entry) => entry.1 += 1,
            None => counts.push((value.to_string(), 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{FilterCriteria, filter};
    use crate::data::loader::load;

    fn total<K>(counts: &[(K, usize)]) -> usize {
        counts.iter().map(|(_, n)| n).sum()
    }

    #[test]
    fn test_full_dataset_summary() {
        let ds = load().unwrap();
        let summary = Summary::from_view(&filter(&ds, &FilterCriteria::all(&ds)));

        assert_eq!(summary.total_events, 15);
        assert_eq!(summary.unique_facility_count, 13);
        assert_eq!(summary.unique_species_count, 5);
        assert_eq!(
            summary.year_counts,
            vec![(2012, 1), (2015, 2), (2016, 1), (2017, 3), (2018, 3), (2019, 5)]
        );
        assert_eq!(
            summary.facility_counts[..2],
            [
                ("Beijing Aquarium".to_string(), 3),
                ("Hefei Yaotai Ocean World".to_string(), 1),
            ]
        );
        assert_eq!(
            summary.species_counts,
            vec![
                ("Beluga whale".to_string(), 7),
                ("Bottlenose dolphin".to_string(), 5),
                ("Unknown Dolphin".to_string(), 1),
                ("Pantropical spotted dolphin".to_string(), 1),
                ("Pacific white-sided dolphin".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_metric_consistency() {
        let ds = load().unwrap();
        let mut all = FilterCriteria::all(&ds);
        let mut checks = vec![all.clone()];
        all.year_min = 2017;
        checks.push(all.clone());
        all.selected_species.remove("Beluga whale");
        checks.push(all.clone());
        all.selected_species.clear();
        checks.push(all);

        for criteria in checks {
            let summary = Summary::from_view(&filter(&ds, &criteria));
            assert_eq!(summary.total_events, total(&summary.facility_counts));
            assert_eq!(summary.total_events, total(&summary.species_counts));
            assert_eq!(summary.total_events, total(&summary.year_counts));
        }
    }

    #[test]
    fn test_empty_view_summary() {
        let ds = load().unwrap();
        let mut criteria = FilterCriteria::all(&ds);
        criteria.selected_species.clear();
        assert_eq!(Summary::from_view(&filter(&ds, &criteria)), Summary::default());
    }

    #[test]
    fn test_ties_keep_first_appearance() {
        let counts = ranked_counts(["b", "a", "c", "a", "c"].into_iter());
        assert_eq!(
            counts,
            vec![
                ("a".to_string(), 2),
                ("c".to_string(), 2),
                ("b".to_string(), 1)
            ]
        );
    }
}
