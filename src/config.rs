use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::risk::evaluator::RiskPolicy;

/// Root configuration structure, deserialized from `.smoot/config.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Where the reference data lives.
    #[serde(default)]
    pub data: DataConfig,
    /// Evaluation tunables.
    #[serde(default)]
    pub policy: RiskPolicy,
}

/// Locations of the airline database and route registry.
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// JSON airline database keyed by airline code.
    #[serde(default = "default_airlines_path")]
    pub airlines: PathBuf,
    /// JSON route registry (location → airline codes). A missing file
    /// means an empty registry.
    #[serde(default = "default_routes_path")]
    pub routes: PathBuf,
}

fn default_airlines_path() -> PathBuf {
    PathBuf::from("airlines_db.json")
}

fn default_routes_path() -> PathBuf {
    PathBuf::from("routes.json")
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            airlines: default_airlines_path(),
            routes: default_routes_path(),
        }
    }
}

impl DataConfig {
    /// Resolve relative paths against `base` (the directory the config came from).
    fn rebase(mut self, base: &Path) -> Self {
        if self.airlines.is_relative() {
            self.airlines = base.join(&self.airlines);
        }
        if self.routes.is_relative() {
            self.routes = base.join(&self.routes);
        }
        self
    }
}

/// Load the configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `<cwd>/.smoot/config.toml`
/// 3. `~/.config/smoot/config.toml`
/// 4. Built-in [`Config::default`]
///
/// Relative data paths in a config file are taken relative to the project
/// directory for (2) and to the file's own directory otherwise.
pub fn load_config(cwd: &Path, config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        let base = path.parent().unwrap_or(cwd);
        return read_config(path, base);
    }

    let project_config = cwd.join(".smoot").join("config.toml");
    if project_config.exists() {
        return read_config(&project_config, cwd);
    }

    if let Some(home) = dirs::home_dir() {
        let home_dir = home.join(".config").join("smoot");
        let home_config = home_dir.join("config.toml");
        if home_config.exists() {
            return read_config(&home_config, &home_dir);
        }
    }

    Ok(Config::default())
}

fn read_config(path: &Path, base: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let mut config: Config = toml::from_str(&content)
        .with_context(|| format!("invalid config {}", path.display()))?;
    config.data = config.data.rebase(base);
    log::debug!("loaded config from {}", path.display());
    Ok(config)
}
