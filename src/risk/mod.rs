//! Per-airline labor-disruption risk.
//!
//! - [`classifier`] — maps free-text contract statuses to a [`StatusClass`](classifier::StatusClass).
//! - [`expiry`] — resolves `expiration_date` strings and positions them against a trip.
//! - [`evaluator`] — folds an airline's bargaining groups into a
//!   [`RiskResult`](crate::models::RiskResult).

pub mod classifier;
pub mod evaluator;
pub mod expiry;
