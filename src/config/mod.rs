mod file_config;

pub use file_config::{DemoConfig, FileConfig};

use crate::demo_data;
use anyhow::{bail, Result};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_DB_PATH: &str = "abap.db";
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5000;
pub const DEFAULT_DEMO_RECORDS: usize = 10;

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub db_path: PathBuf,
    pub busy_timeout_ms: u64,
    pub records: usize,
    pub seed: Option<u64>,
    pub no_reset: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
            records: DEFAULT_DEMO_RECORDS,
            seed: None,
            no_reset: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub busy_timeout: Duration,
    pub demo: DemoSettings,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoSettings {
    pub records: usize,
    pub seed: Option<u64>,
    pub reset: bool,
    pub countries: Vec<String>,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            records: DEFAULT_DEMO_RECORDS,
            seed: None,
            reset: true,
            countries: demo_data::REPORT_COUNTRIES.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let db_path = file
            .db_path
            .map(PathBuf::from)
            .unwrap_or_else(|| cli.db_path.clone());
        if db_path.as_os_str().is_empty() {
            bail!("db_path must not be empty");
        }
        if db_path.is_dir() {
            bail!("db_path is a directory: {:?}", db_path);
        }

        let busy_timeout =
            Duration::from_millis(file.busy_timeout_ms.unwrap_or(cli.busy_timeout_ms));

        let demo_file = file.demo.unwrap_or_default();
        let defaults = DemoSettings::default();
        let demo = DemoSettings {
            records: demo_file.records.unwrap_or(cli.records),
            seed: demo_file.seed.or(cli.seed),
            reset: demo_file.reset.unwrap_or(!cli.no_reset),
            countries: demo_file.countries.unwrap_or(defaults.countries),
        };

        Ok(Self {
            db_path,
            busy_timeout,
            demo,
        })
    }
}
