//! Report renderers for trip risk results.
//!
//! - [`terminal`] — summary box, severity-sorted table, verdict and alternatives.
//!
//! JSON output is produced directly from the serializable report types in `main`.

pub mod terminal;
