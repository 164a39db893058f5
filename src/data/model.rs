use chrono::{Datelike, NaiveDate};

use super::error::ParseError;

// ---------------------------------------------------------------------------
// EventRecord – one row of the event table
// ---------------------------------------------------------------------------

/// A single documented interaction event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    pub date: NaiveDate,
    pub facility: String,
    pub species: String,
    pub event_description: String,
}

impl EventRecord {
    /// Calendar year of the event, always consistent with `date`.
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// Calendar month of the event (1–12).
    pub fn month(&self) -> u32 {
        self.date.month()
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full, read-only event table with pre-computed indices.
///
/// Never empty: construction fails with [`ParseError::Empty`] otherwise, so
/// the year bounds are always defined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    records: Vec<EventRecord>,
    /// Distinct species in order of first appearance.
    species: Vec<String>,
    min_year: i32,
    max_year: i32,
}

impl Dataset {
    /// Build the dataset and its indices from parsed records.
    pub fn from_records(records: Vec<EventRecord>) -> Result<Self, ParseError> {
        let first = records.first().ok_or(ParseError::Empty)?;
        let (mut min_year, mut max_year) = (first.year(), first.year());
        let mut species: Vec<String> = Vec::new();

        for rec in &records {
            min_year = min_year.min(rec.year());
            max_year = max_year.max(rec.year());
            if !species.contains(&rec.species) {
                species.push(rec.species.clone());
            }
        }

        Ok(Dataset {
            records,
            species,
            min_year,
            max_year,
        })
    }

    /// All records in source order.
    pub fn records(&self) -> &[EventRecord] {
        &self.records
    }

    pub fn species(&self) -> &[String] {
        &self.species
    }

    pub fn has_species(&self, name: &str) -> bool {
        self.species.iter().any(|s| s == name)
    }

    pub fn min_year(&self) -> i32 {
        self.min_year
    }

    pub fn max_year(&self) -> i32 {
        self.max_year
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false for a constructed dataset.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(y: i32, m: u32, d: u32, facility: &str, species: &str) -> EventRecord {
        EventRecord {
            date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            facility: facility.to_string(),
            species: species.to_string(),
            event_description: "Public interactions".to_string(),
        }
    }

    #[test]
    fn test_derived_fields_follow_date() {
        let rec = record(2019, 8, 14, "Beijing Aquarium", "Beluga whale");
        assert_eq!(rec.year(), 2019);
        assert_eq!(rec.month(), 8);
    }

    #[test]
    fn test_species_in_first_appearance_order() {
        let ds = Dataset::from_records(vec![
            record(2019, 1, 1, "A", "Orca"),
            record(2018, 1, 1, "B", "Beluga whale"),
            record(2017, 1, 1, "C", "Orca"),
        ])
        .unwrap();
        assert_eq!(ds.species(), ["Orca", "Beluga whale"]);
        assert!(ds.has_species("Orca"));
        assert!(!ds.has_species("Narwhal"));
    }

    #[test]
    fn test_year_bounds() {
        let ds = Dataset::from_records(vec![
            record(2017, 1, 1, "A", "Orca"),
            record(2012, 3, 23, "B", "Orca"),
            record(2019, 8, 14, "C", "Orca"),
        ])
        .unwrap();
        assert_eq!((ds.min_year(), ds.max_year()), (2012, 2019));
        assert_eq!(ds.len(), 3);
    }

    #[test]
    fn test_empty_dataset_rejected() {
        let result = Dataset::from_records(Vec::new());
        assert!(matches!(result, Err(ParseError::Empty)));
    }
}
