//! Configuration loading and representation.
//!
//! Settings come from `DROMED_*` environment variables with local-dev defaults.

use std::path::PathBuf;

use thiserror::Error;

use dromed_core::DomainError;
use dromed_inventory::StockThresholds;

pub const ENV_DATA_FILE: &str = "DROMED_DATA_FILE";
pub const ENV_REPORTS_DIR: &str = "DROMED_REPORTS_DIR";
pub const ENV_BIND_ADDR: &str = "DROMED_BIND_ADDR";
pub const ENV_CRITICAL_DAYS: &str = "DROMED_CRITICAL_DAYS";
pub const ENV_WARNING_DAYS: &str = "DROMED_WARNING_DAYS";

pub const DEFAULT_DATA_FILE: &str = "datasets/dromed_inventory_data.csv";
pub const DEFAULT_REPORTS_DIR: &str = "reports";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },

    #[error("invalid thresholds: {0}")]
    Thresholds(#[from] DomainError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub data_file: PathBuf,
    pub reports_dir: PathBuf,
    pub bind_addr: String,
    pub thresholds: StockThresholds,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            reports_dir: PathBuf::from(DEFAULT_REPORTS_DIR),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            thresholds: StockThresholds::default(),
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build settings from an arbitrary variable lookup (tests pass a map).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let critical_days = parse_days(&lookup, ENV_CRITICAL_DAYS)?
            .unwrap_or(defaults.thresholds.critical_days());
        let warning_days = parse_days(&lookup, ENV_WARNING_DAYS)?
            .unwrap_or(defaults.thresholds.warning_days());

        Ok(Self {
            data_file: lookup(ENV_DATA_FILE).map(PathBuf::from).unwrap_or(defaults.data_file),
            reports_dir: lookup(ENV_REPORTS_DIR)
                .map(PathBuf::from)
                .unwrap_or(defaults.reports_dir),
            bind_addr: lookup(ENV_BIND_ADDR).unwrap_or(defaults.bind_addr),
            thresholds: StockThresholds::new(critical_days, warning_days)?,
        })
    }
}

fn parse_days<F>(lookup: &F, var: &'static str) -> Result<Option<f64>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { var, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() {
        let settings = Settings::from_lookup(lookup(&[])).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.thresholds.critical_days(), 7.0);
        assert_eq!(settings.thresholds.warning_days(), 14.0);
    }

    #[test]
    fn overrides_are_applied() {
        let settings = Settings::from_lookup(lookup(&[
            (ENV_DATA_FILE, "/data/stock.csv"),
            (ENV_REPORTS_DIR, "/tmp/out"),
            (ENV_BIND_ADDR, "0.0.0.0:8080"),
            (ENV_CRITICAL_DAYS, "3"),
            (ENV_WARNING_DAYS, " 10.5 "),
        ]))
        .unwrap();

        assert_eq!(settings.data_file, PathBuf::from("/data/stock.csv"));
        assert_eq!(settings.reports_dir, PathBuf::from("/tmp/out"));
        assert_eq!(settings.bind_addr, "0.0.0.0:8080");
        assert_eq!(settings.thresholds, StockThresholds::new(3.0, 10.5).unwrap());
    }

    #[test]
    fn unparseable_number_names_variable() {
        let err = Settings::from_lookup(lookup(&[(ENV_WARNING_DAYS, "two weeks")])).unwrap_err();
        match err {
            ConfigError::Invalid { var, value } => {
                assert_eq!(var, ENV_WARNING_DAYS);
                assert_eq!(value, "two weeks");
            }
            other => panic!("Expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn inverted_thresholds_are_rejected() {
        let err = Settings::from_lookup(lookup(&[(ENV_CRITICAL_DAYS, "20")])).unwrap_err();
        assert!(matches!(err, ConfigError::Thresholds(DomainError::Validation(_))));
    }
}
