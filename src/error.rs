use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

/// Failures surfaced by the evaluation core and the reference-data loader.
///
/// An airline code missing from the database is *not* an error: the
/// evaluator turns it into a [`RiskLevel::Grey`](crate::models::RiskLevel::Grey)
/// result instead.
#[derive(Debug, Error)]
pub enum RiskError {
    #[error("unknown location '{location}': no airlines registered for it")]
    UnknownLocation { location: String },

    #[error("no airline matches '{query}' by code or name")]
    UnknownAirline { query: String },

    #[error(
        "malformed expiration date '{value}' for {airline} ({group}); expected YYYY-MM-DD or N/A"
    )]
    MalformedExpirationDate {
        airline: String,
        group: String,
        value: String,
    },

    #[error("invalid trip window: end date {end} is before start date {start}")]
    InvalidTripWindow { start: NaiveDate, end: NaiveDate },

    #[error("reference data unavailable at {}: {reason}", path.display())]
    DataSourceUnavailable { path: PathBuf, reason: String },
}

pub type Result<T> = std::result::Result<T, RiskError>;
