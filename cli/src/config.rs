//! CLI configuration: optional YAML file plus environment overrides.

use anyhow::{Context, Result};
use govwatch_core::MonitorConfig;
use govwatch_observability::LogConfig;
use serde::Deserialize;

pub const ENV_GOVERNANCE_ADDRESS: &str = "GOVWATCH_GOVERNANCE_ADDRESS";

#[derive(Debug, Default, Deserialize)]
pub struct CliConfig {
    #[serde(default)]
    pub monitor: MonitorConfig,
    #[serde(default)]
    pub log: LogConfig,
}

impl CliConfig {
    pub fn load(path: Option<&str>) -> Result<Self> {
        let mut config = match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("reading config {path}"))?;
                Self::from_yaml_str(&raw).with_context(|| format!("parsing config {path}"))?
            }
            None => Self::default(),
        };

        if let Ok(addr) = std::env::var(ENV_GOVERNANCE_ADDRESS) {
            config.monitor.governance_address = addr;
        }
        config
            .monitor
            .validate()
            .context("invalid monitor configuration")?;
        Ok(config)
    }

    fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_are_optional() {
        let c = CliConfig::from_yaml_str("log:\n  level: warn\n").unwrap();
        assert_eq!(c.log.level, "warn");
        assert_eq!(c.monitor, MonitorConfig::default());
    }

    #[test]
    fn monitor_section() {
        let c = CliConfig::from_yaml_str(
            "monitor:\n  governance_address: \"0x0000000000000000000000000000000000000001\"\n",
        )
        .unwrap();
        assert_eq!(
            c.monitor.governance_address,
            "0x0000000000000000000000000000000000000001"
        );
    }
}
