use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct FileConfig {
    pub db_path: Option<String>,
    pub busy_timeout_ms: Option<u64>,

    pub demo: Option<DemoConfig>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct DemoConfig {
    pub records: Option<usize>,
    pub seed: Option<u64>,
    /// Drop and recreate the tables before inserting demo records.
    pub reset: Option<bool>,
    /// Countries to print a stock balance for.
    pub countries: Option<Vec<String>>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}
