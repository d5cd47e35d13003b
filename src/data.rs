//! Reference data: the airline database and the route registry.
//!
//! Both are loaded once and never mutated afterwards. The analyzer borrows a
//! [`ReferenceData`] for each invocation.

use std::collections::BTreeMap;
use std::path::Path;

use log::{info, warn};
use serde::de::DeserializeOwned;

use crate::config::DataConfig;
use crate::error::{Result, RiskError};
use crate::models::AirlineRecord;

#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    /// Airline records keyed by airline code.
    pub airlines: BTreeMap<String, AirlineRecord>,
    /// Location label (city or airport) → codes of the airlines serving it,
    /// in the order the data source lists them.
    pub routes: BTreeMap<String, Vec<String>>,
}

impl ReferenceData {
    pub fn new(
        airlines: BTreeMap<String, AirlineRecord>,
        routes: BTreeMap<String, Vec<String>>,
    ) -> Self {
        let data = Self { airlines, routes };
        for (location, codes) in &data.routes {
            for code in codes.iter().filter(|c| !data.airlines.contains_key(*c)) {
                warn!("route registry lists unknown airline {code} for {location}");
            }
        }
        data
    }

    pub fn is_empty(&self) -> bool {
        self.airlines.is_empty() && self.routes.is_empty()
    }

    pub fn airline(&self, code: &str) -> Option<&AirlineRecord> {
        self.airlines.get(code)
    }

    /// Codes serving `location`, or `None` when the location is not registered.
    pub fn serving(&self, location: &str) -> Option<&[String]> {
        self.routes.get(location).map(Vec::as_slice)
    }

    /// Look an airline up by display name.
    pub fn code_for_name(&self, name: &str) -> Option<&str> {
        self.airlines
            .iter()
            .find(|(_, rec)| rec.name == name)
            .map(|(code, _)| code.as_str())
    }
}

/// Load the airline database and route registry described by `config`.
///
/// A missing route file yields an empty registry; every other failure is
/// reported as [`RiskError::DataSourceUnavailable`].
pub fn load_reference_data(config: &DataConfig) -> Result<ReferenceData> {
    let airlines: BTreeMap<String, AirlineRecord> = read_json(&config.airlines)?;

    let routes = if config.routes.exists() {
        read_json(&config.routes)?
    } else {
        info!(
            "no route registry at {}; location search disabled",
            config.routes.display()
        );
        BTreeMap::new()
    };

    info!(
        "loaded {} airlines and {} locations",
        airlines.len(),
        routes.len()
    );

    Ok(ReferenceData::new(airlines, routes))
}

/// Like [`load_reference_data`], but degrade to empty data on failure.
///
/// Returns the error alongside so the caller can tell the user once.
pub fn load_or_empty(config: &DataConfig) -> (ReferenceData, Option<RiskError>) {
    match load_reference_data(config) {
        Ok(data) => (data, None),
        Err(err) => {
            warn!("{err}; continuing with empty reference data");
            (ReferenceData::default(), Some(err))
        }
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let unavailable = |reason: String| RiskError::DataSourceUnavailable {
        path: path.to_path_buf(),
        reason,
    };

    let content = std::fs::read_to_string(path).map_err(|e| unavailable(e.to_string()))?;
    serde_json::from_str(&content).map_err(|e| unavailable(e.to_string()))
}
