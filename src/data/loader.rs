use chrono::NaiveDate;
use serde::Deserialize;

use super::error::ParseError;
use super::model::{Dataset, EventRecord};

// ---------------------------------------------------------------------------
// Embedded event table
// ---------------------------------------------------------------------------

/// Documented cetacean interaction events, 2012–2019 (tab-separated).
pub const EMBEDDED_EVENTS: &str = "
DATE\tFACILITY\tSPECIES\tEVENT
8/14/2019\tBeijing Aquarium\tBottlenose dolphin\tDolphins used for public interactions
8/10/2019\tHefei Yaotai Ocean World\tUnknown Dolphin\ttrainer for a day advertised
7/25/2019\tWeihai Shendiaoshen Safari Park\tBottlenose dolphin\tDolphins used for photo opportunities
7/22/2019\tSanya Haichang Fantasy Town\tBeluga whale\tTV celebrities allowed to kiss whales
6/9/2019\tBeijing Aquarium\tBeluga whale\tChildren allowed to interact
3/27/2018\tZhuhai Chimelong Ocean Kingdom\tBottlenose dolphin\tDolphins used for photo opportunities
3/26/2018\tGuangzhou Grandview Aquarium\tBeluga whale\tWhales used for photo opportunities
1/29/2018\tNanchang Sunac Ocean Park\tBottlenose dolphin\tClose contact feeding interactions
5/21/2017\tBeijing Aquarium\tBeluga whale\tPublic interactions
4/17/2017\tShenzhen Safari Park\tPantropical spotted dolphin\tSwim-with encounters
3/2/2017\tFuzhou Polar Ocean World\tBeluga whale\tPublic photo sessions
6/27/2016\tFenjiezhou Island Aquarium\tPacific white-sided dolphin\tSwim-with encounters
4/11/2015\tFushun Royal Ocean World\tBeluga whale\tPublic interactions
1/15/2015\tDalian Laohutan Ocean Park\tBeluga whale\tPublic interactions
3/23/2012\tDalian SunAsia Ocean World\tBottlenose dolphin\tPublic interactions
";

const REQUIRED_COLUMNS: [&str; 4] = ["DATE", "FACILITY", "SPECIES", "EVENT"];

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Parse the embedded event table.
///
/// The text is compiled in, so this is deterministic; it still goes through
/// full validation and fails with a [`ParseError`] if the literal is broken.
pub fn load() -> Result<Dataset, ParseError> {
    let dataset = parse_events(EMBEDDED_EVENTS)?;
    log::info!(
        "Loaded {} events ({}–{}), {} species",
        dataset.len(),
        dataset.min_year(),
        dataset.max_year(),
        dataset.species().len()
    );
    Ok(dataset)
}

/// Parse a tab-separated event table with a `DATE FACILITY SPECIES EVENT`
/// header. Extra columns are ignored; records keep their source order.
pub fn parse_events(text: &str) -> Result<Dataset, ParseError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .trim(csv::Trim::All)
        .from_reader(text.trim().as_bytes());

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(ParseError::MissingColumn(column));
        }
    }

    let mut records = Vec::new();
    for (i, result) in reader.deserialize::<RawRow>().enumerate() {
        let raw = result?;
        records.push(raw.into_record(i + 1)?);
    }

    Dataset::from_records(records)
}

// ---------------------------------------------------------------------------
// Row conversion
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "DATE")]
    date: String,
    #[serde(rename = "FACILITY")]
    facility: String,
    #[serde(rename = "SPECIES")]
    species: String,
    #[serde(rename = "EVENT")]
    event: String,
}

impl RawRow {
    fn into_record(self, row: usize) -> Result<EventRecord, ParseError> {
        for (column, value) in [
            ("DATE", &self.date),
            ("FACILITY", &self.facility),
            ("SPECIES", &self.species),
            ("EVENT", &self.event),
        ] {
            if value.is_empty() {
                return Err(ParseError::EmptyField { row, column });
            }
        }

        let date = parse_date(&self.date).ok_or_else(|| ParseError::InvalidDate {
            row,
            value: self.date.clone(),
        })?;

        Ok(EventRecord {
            date,
            facility: self.facility,
            species: self.species,
            event_description: self.event,
        })
    }
}

/// `M/D/YYYY`, month and day with or without zero padding.
fn parse_date(s: &str) -> Option<NaiveDate> {
    let year = s.rsplit('/').next()?;
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::parse_from_str(s, "%m/%d/%Y").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_table_loads() {
        let ds = load().unwrap();
        assert_eq!(ds.len(), 15);
        assert_eq!((ds.min_year(), ds.max_year()), (2012, 2019));
        assert_eq!(ds.species().len(), 5);
    }

    #[test]
    fn test_load_is_idempotent() {
        assert_eq!(load().unwrap(), load().unwrap());
    }

    #[test]
    fn test_source_order_and_derived_fields() {
        let ds = load().unwrap();
        let first = &ds.records()[0];
        assert_eq!(first.date, NaiveDate::from_ymd_opt(2019, 8, 14).unwrap());
        assert_eq!(first.facility, "Beijing Aquarium");
        assert_eq!(first.species, "Bottlenose dolphin");
        assert_eq!(first.event_description, "Dolphins used for public interactions");
        assert_eq!((first.year(), first.month()), (2019, 8));

        let last = &ds.records()[14];
        assert_eq!(last.facility, "Dalian SunAsia Ocean World");
        assert_eq!((last.year(), last.month()), (2012, 3));
    }

    #[test]
    fn test_unpadded_and_padded_dates() {
        assert_eq!(parse_date("3/2/2017"), NaiveDate::from_ymd_opt(2017, 3, 2));
        assert_eq!(parse_date("03/02/2017"), NaiveDate::from_ymd_opt(2017, 3, 2));
        assert_eq!(parse_date("3/2/17"), None);
        assert_eq!(parse_date("2017-03-02"), None);
        assert_eq!(parse_date("13/1/2017"), None);
    }

    #[test]
    fn test_invalid_date_reports_row() {
        let text = "DATE\tFACILITY\tSPECIES\tEVENT\n\
                    1/1/2019\tA\tOrca\tShow\n\
                    2/30/2019\tB\tOrca\tShow\n";
        match parse_events(text) {
            Err(ParseError::InvalidDate { row, value }) => {
                assert_eq!(row, 2);
                assert_eq!(value, "2/30/2019");
            }
            other => panic!("expected InvalidDate, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_column() {
        let text = "DATE\tFACILITY\tEVENT\n1/1/2019\tA\tShow\n";
        assert!(matches!(
            parse_events(text),
            Err(ParseError::MissingColumn("SPECIES"))
        ));
    }

    #[test]
    fn test_empty_field() {
        let text = "DATE\tFACILITY\tSPECIES\tEVENT\n1/1/2019\t \tOrca\tShow\n";
        assert!(matches!(
            parse_events(text),
            Err(ParseError::EmptyField { row: 1, column: "FACILITY" })
        ));
    }

    #[test]
    fn test_short_row_is_rejected() {
        let text = "DATE\tFACILITY\tSPECIES\tEVENT\n1/1/2019\tA\tOrca\n";
        assert!(matches!(parse_events(text), Err(ParseError::Csv(_))));
    }

    #[test]
    fn test_header_only_is_empty() {
        let text = "DATE\tFACILITY\tSPECIES\tEVENT\n";
        assert!(matches!(parse_events(text), Err(ParseError::Empty)));
    }

    #[test]
    fn test_extra_columns_ignored() {
        let text = "DATE\tFACILITY\tSPECIES\tEVENT\tSOURCE\n\
                    1/1/2019\tA\tOrca\tShow\tnews\n";
        let ds = parse_events(text).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.records()[0].event_description, "Show");
    }
}
