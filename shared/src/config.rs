//! Configuration management for the skill Lambda.

use std::env;

use crate::{Error, Result};

/// Table holding the four solar sector rows.
pub const DEFAULT_TABLE_NAME: &str = "solar-sectors";

/// Region the sector table lives in.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Divisor used when averaging sector efficiency.
///
/// This is the number of sectors the grid is built with, not the number of
/// rows a scan happens to return.
pub const DEFAULT_EFFICIENCY_DIVISOR: f64 = 4.0;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// DynamoDB table name
    pub table_name: String,
    /// AWS region
    pub aws_region: String,
    /// Divisor for the grid efficiency average
    pub efficiency_divisor: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            table_name: DEFAULT_TABLE_NAME.to_string(),
            aws_region: DEFAULT_REGION.to_string(),
            efficiency_divisor: DEFAULT_EFFICIENCY_DIVISOR,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let efficiency_divisor = match lookup("EFFICIENCY_DIVISOR") {
            Some(raw) => parse_divisor(&raw)?,
            None => DEFAULT_EFFICIENCY_DIVISOR,
        };

        Ok(Self {
            table_name: lookup("SECTOR_TABLE_NAME")
                .unwrap_or_else(|| DEFAULT_TABLE_NAME.to_string()),
            aws_region: lookup("AWS_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string()),
            efficiency_divisor,
        })
    }
}

fn parse_divisor(raw: &str) -> Result<f64> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|e| Error::Config(format!("EFFICIENCY_DIVISOR must be a number: {}", e)))?;

    if !value.is_finite() || value <= 0.0 {
        return Err(Error::Config(format!(
            "EFFICIENCY_DIVISOR must be positive, got {}",
            raw
        )));
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.efficiency_divisor, 4.0);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("SECTOR_TABLE_NAME", "sectors-staging"),
            ("AWS_REGION", "us-west-2"),
            ("EFFICIENCY_DIVISOR", "5"),
        ]))
        .unwrap();

        assert_eq!(config.table_name, "sectors-staging");
        assert_eq!(config.aws_region, "us-west-2");
        assert_eq!(config.efficiency_divisor, 5.0);
    }

    #[test]
    fn test_rejects_bad_divisor() {
        for raw in ["four", "0", "-2", "inf"] {
            let result = Config::from_lookup(lookup_from(&[("EFFICIENCY_DIVISOR", raw)]));
            assert!(matches!(result, Err(Error::Config(_))), "accepted {}", raw);
        }
    }
}
