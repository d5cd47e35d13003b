use std::fmt;

use chrono::NaiveDate;

use crate::models::TripWindow;

/// Marker for a contract with no defined end.
pub const NO_EXPIRY: &str = "N/A";

/// A resolved `expiration_date`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expiry {
    /// No defined end; later than any trip window.
    Never,
    On(NaiveDate),
}

impl fmt::Display for Expiry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expiry::Never => write!(f, "{NO_EXPIRY}"),
            Expiry::On(date) => write!(f, "{date}"),
        }
    }
}

/// Resolve a raw `expiration_date`.
///
/// Returns `None` when the value is neither `N/A` nor a `YYYY-MM-DD` date.
pub fn resolve_expiry(raw: &str) -> Option<Expiry> {
    let raw = raw.trim();
    if raw == NO_EXPIRY {
        return Some(Expiry::Never);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(Expiry::On)
}

/// Where a contract expiry falls relative to a trip window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryPosition {
    BeforeTrip,
    DuringTrip,
    /// Strictly after return but within the caution window.
    ShortlyAfter,
    Clear,
}

pub fn position(expiry: Expiry, window: &TripWindow, caution_days: i64) -> ExpiryPosition {
    let Expiry::On(date) = expiry else {
        return ExpiryPosition::Clear;
    };
    if date < window.start() {
        return ExpiryPosition::BeforeTrip;
    }
    if date <= window.end() {
        return ExpiryPosition::DuringTrip;
    }
    let days_after = (date - window.end()).num_days();
    if days_after > 0 && days_after < caution_days {
        ExpiryPosition::ShortlyAfter
    } else {
        ExpiryPosition::Clear
    }
}
