//! Configuration loading and management

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::time::Duration;

fn default_latency_ms() -> u64 {
    500
}

/// Configuration for the registry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Simulated latency applied to every registry operation, in
    /// milliseconds
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
        }
    }
}

impl RegistryConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// The configured latency as a `Duration`
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_latency_is_half_a_second() {
        let config = RegistryConfig::default();
        assert_eq!(config.latency(), Duration::from_millis(500));
    }

    #[test]
    fn test_from_yaml_str() {
        let config = RegistryConfig::from_yaml_str("latency_ms: 25").unwrap();
        assert_eq!(config.latency(), Duration::from_millis(25));
    }

    #[test]
    fn test_missing_field_falls_back_to_default() {
        let config = RegistryConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config.latency_ms, 500);
    }
}
