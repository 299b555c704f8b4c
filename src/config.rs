//! Scenario generation parameters
//!
//! Parameters can be deserialized from JSON; any missing field falls back
//! to the pricing defaults below.

use crate::error::{EsgError, Result};
use crate::rng::DEFAULT_SEED_BASE;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Parameters for a scenario generation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EsgConfig {
    /// Seed offset: scenario n is seeded with n - 1 + seed_base
    #[serde(default = "default_seed_base")]
    pub seed_base: i64,

    /// Number of scenarios to generate (scenarios are numbered from 1)
    #[serde(default = "default_num_scenarios")]
    pub num_scenarios: u32,

    /// Projection horizon in months
    #[serde(default = "default_projection_months")]
    pub projection_months: u32,

    /// Random draws consumed per projection month
    #[serde(default = "default_draws_per_month")]
    pub draws_per_month: u32,

    /// 1Y anchor rate as a decimal (0.01 = 1%)
    #[serde(default = "default_short_rate")]
    pub short_rate: f64,

    /// 20Y anchor rate as a decimal
    #[serde(default = "default_long_rate")]
    pub long_rate: f64,
}

fn default_seed_base() -> i64 { DEFAULT_SEED_BASE }
fn default_num_scenarios() -> u32 { 1 }
fn default_projection_months() -> u32 { 360 }
fn default_draws_per_month() -> u32 { 11 }
fn default_short_rate() -> f64 { 0.01 }
fn default_long_rate() -> f64 { 0.03 }

impl Default for EsgConfig {
    fn default() -> Self {
        Self {
            seed_base: DEFAULT_SEED_BASE,
            num_scenarios: 1,
            projection_months: 360,
            draws_per_month: 11,
            short_rate: 0.01,
            long_rate: 0.03,
        }
    }
}

impl EsgConfig {
    /// Parse from a JSON document and validate
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: EsgConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a JSON file and validate
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        log::info!("Loaded ESG config from {}", path.as_ref().display());
        Self::from_json_str(&contents)
    }

    pub fn validate(&self) -> Result<()> {
        if self.num_scenarios == 0 {
            return Err(EsgError::InvalidConfig("num_scenarios must be at least 1".into()));
        }
        if self.projection_months == 0 {
            return Err(EsgError::InvalidConfig("projection_months must be at least 1".into()));
        }
        if self.draws_per_month == 0 {
            return Err(EsgError::InvalidConfig("draws_per_month must be at least 1".into()));
        }
        if !self.short_rate.is_finite() || !self.long_rate.is_finite() {
            return Err(EsgError::InvalidConfig("anchor rates must be finite".into()));
        }
        Ok(())
    }

    /// Total draws per scenario over the projection horizon
    pub fn draws_per_scenario(&self) -> usize {
        self.projection_months as usize * self.draws_per_month as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_run() {
        let config = EsgConfig::default();
        assert_eq!(config.seed_base, 10200);
        assert_eq!(config.draws_per_scenario(), 3960);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = EsgConfig::from_json_str(r#"{ "num_scenarios": 50, "short_rate": 0.015 }"#)
            .expect("Failed to parse");

        assert_eq!(config.num_scenarios, 50);
        assert_eq!(config.short_rate, 0.015);
        assert_eq!(config.long_rate, 0.03);
        assert_eq!(config.projection_months, 360);
    }

    #[test]
    fn test_zero_scenarios_rejected() {
        let result = EsgConfig::from_json_str(r#"{ "num_scenarios": 0 }"#);
        assert!(matches!(result, Err(EsgError::InvalidConfig(_))));
    }

    #[test]
    fn test_malformed_json() {
        let result = EsgConfig::from_json_str("{ not json");
        assert!(matches!(result, Err(EsgError::Json(_))));
    }
}
