use thiserror::Error;

// ---------------------------------------------------------------------------
// Loader errors
// ---------------------------------------------------------------------------

/// Raised when the event table text is malformed.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    /// `row` is the 1-based data row (the header is not counted).
    #[error("row {row}: '{value}' is not a M/D/YYYY date")]
    InvalidDate { row: usize, value: String },

    #[error("row {row}: column '{column}' is empty")]
    EmptyField { row: usize, column: &'static str },

    #[error("event table contains no rows")]
    Empty,

    #[error("malformed event table")]
    Csv(#[from] csv::Error),
}

// ---------------------------------------------------------------------------
// Filter errors
// ---------------------------------------------------------------------------

/// Raised by strict criteria validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidCriteriaError {
    #[error("year range is reversed ({year_min} > {year_max})")]
    ReversedRange { year_min: i32, year_max: i32 },

    #[error("year {year} is outside the dataset range {min}..={max}")]
    YearOutOfRange { year: i32, min: i32, max: i32 },

    #[error("species '{0}' does not occur in the dataset")]
    UnknownSpecies(String),
}
