//! Navigator configuration
//!
//! Controls the simulated backend: per-operation latency, payment success
//! rate, RNG seeding, and the explorer used for transaction links. Loadable
//! from TOML; every field has a default.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Default block explorer for transaction links
pub const DEFAULT_EXPLORER_BASE_URL: &str = "https://cardanoscan.io/transaction/";

/// Navigator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigatorConfig {
    /// Simulated latency per operation
    pub latency: LatencyConfig,
    /// Probability that a payment from a non-demo wallet succeeds
    pub payment_success_rate: f64,
    /// Seed for the simulated backend; `None` seeds from the OS
    pub rng_seed: Option<u64>,
    /// Prefix for transaction explorer links
    pub explorer_base_url: String,
}

impl NavigatorConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration with every simulated delay removed
    #[inline]
    #[must_use]
    pub fn instant() -> Self {
        Self {
            latency: LatencyConfig::zero(),
            ..Self::default()
        }
    }

    /// With deterministic RNG seed
    #[inline]
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    /// With payment success rate
    #[inline]
    #[must_use]
    pub fn with_payment_success_rate(mut self, rate: f64) -> Self {
        self.payment_success_rate = rate;
        self
    }

    /// With latency settings
    #[inline]
    #[must_use]
    pub fn with_latency(mut self, latency: LatencyConfig) -> Self {
        self.latency = latency;
        self
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.payment_success_rate) {
            return Err(ConfigError::InvalidValue {
                field: "payment_success_rate",
                reason: format!("{} is outside [0, 1]", self.payment_success_rate),
            });
        }
        if self.explorer_base_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "explorer_base_url",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml_str(&raw)?;
        tracing::debug!(path = %path.display(), "Loaded navigator config");
        Ok(config)
    }
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            latency: LatencyConfig::default(),
            payment_success_rate: 0.9,
            rng_seed: None,
            explorer_base_url: DEFAULT_EXPLORER_BASE_URL.to_string(),
        }
    }
}

/// Simulated latency in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatencyConfig {
    pub connect_ms: u64,
    pub analyze_ms: u64,
    pub roadmap_ms: u64,
    pub progress_ms: u64,
    pub mint_ms: u64,
    pub payment_ms: u64,
    pub register_ms: u64,
    pub verify_ms: u64,
}

impl LatencyConfig {
    /// No delays at all
    #[inline]
    #[must_use]
    pub fn zero() -> Self {
        Self {
            connect_ms: 0,
            analyze_ms: 0,
            roadmap_ms: 0,
            progress_ms: 0,
            mint_ms: 0,
            payment_ms: 0,
            register_ms: 0,
            verify_ms: 0,
        }
    }
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            connect_ms: 1500,
            analyze_ms: 2000,
            roadmap_ms: 1500,
            progress_ms: 1000,
            mint_ms: 2000,
            payment_ms: 1500,
            register_ms: 1000,
            verify_ms: 800,
        }
    }
}

/// Sleep for a simulated latency; returns immediately for zero
pub(crate) async fn simulate_latency(ms: u64) {
    if ms > 0 {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_latencies_and_rate() {
        let config = NavigatorConfig::default();
        assert_eq!(config.latency.analyze_ms, 2000);
        assert_eq!(config.latency.payment_ms, 1500);
        assert_eq!(config.payment_success_rate, 0.9);
        assert!(config.rng_seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = NavigatorConfig::from_toml_str(
            r#"
            rng_seed = 7

            [latency]
            analyze_ms = 10
            "#,
        )
        .unwrap();

        assert_eq!(config.rng_seed, Some(7));
        assert_eq!(config.latency.analyze_ms, 10);
        assert_eq!(config.latency.roadmap_ms, 1500);
        assert_eq!(config.explorer_base_url, DEFAULT_EXPLORER_BASE_URL);
    }

    #[test]
    fn rejects_out_of_range_success_rate() {
        let err = NavigatorConfig::from_toml_str("payment_success_rate = 1.5").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { field: "payment_success_rate", .. }
        ));
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = NavigatorConfig::from_toml_str("latency = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "payment_success_rate = 0.5").unwrap();

        let config = NavigatorConfig::load(file.path()).unwrap();
        assert_eq!(config.payment_success_rate, 0.5);
    }

    #[test]
    fn load_missing_file() {
        let err = NavigatorConfig::load("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn instant_has_no_latency() {
        let config = NavigatorConfig::instant().with_seed(1);
        assert_eq!(config.latency, LatencyConfig::zero());
        assert_eq!(config.rng_seed, Some(1));
    }
}
