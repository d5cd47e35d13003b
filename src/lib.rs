//! `smoot` — flag airline labor-disruption risk for a trip.
//!
//! # Flow
//! 1. Load reference data once ([`data::load_reference_data`]).
//! 2. Build a [`analyzer::TripAnalyzer`] over it.
//! 3. Evaluate airlines directly or by location; each airline goes through
//!    [`risk::evaluator::evaluate`].
//! 4. Read the [`analyzer::TripReport`] verdict, sort for display, and ask for
//!    GREEN alternatives when a chosen airline is at risk.

pub mod analyzer;
pub mod config;
pub mod data;
pub mod error;
pub mod models;
pub mod risk;

pub use analyzer::{AirlineAssessment, TripAnalyzer, TripReport, Verdict};
pub use data::ReferenceData;
pub use error::RiskError;
pub use models::{RiskLevel, RiskResult, TripWindow};
