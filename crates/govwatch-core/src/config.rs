//! Monitor configuration.

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Compound Governor Bravo on Ethereum mainnet.
pub const COMPOUND_GOVERNANCE_ADDRESS: &str = "0xc0dA01a04C3f3E0be433606045bB7017A7323E38";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitorConfig {
    /// Contract whose events are monitored
    #[serde(default = "default_governance_address")]
    pub governance_address: String,
}

fn default_governance_address() -> String {
    COMPOUND_GOVERNANCE_ADDRESS.to_string()
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            governance_address: default_governance_address(),
        }
    }
}

impl MonitorConfig {
    /// Parse from YAML. Missing keys fall back to defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// The governance address must be a `0x`-prefixed 20-byte hex address.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let addr = &self.governance_address;
        if !addr.starts_with("0x") {
            return Err(ConfigError::InvalidAddress {
                address: addr.clone(),
                reason: "missing 0x prefix".into(),
            });
        }
        addr.parse::<Address>()
            .map(|_| ())
            .map_err(|e| ConfigError::InvalidAddress {
                address: addr.clone(),
                reason: e.to_string(),
            })
    }
}
