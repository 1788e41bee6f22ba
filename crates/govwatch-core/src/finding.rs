//! The alert record emitted for a detected governance event.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FindingType {
    Info,
    Suspicious,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FindingSeverity {
    Info,
    High,
}

/// A structured alert. Serializes with camelCase keys
/// (`name`, `description`, `alertId`, `protocol`, `type`, `severity`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    pub name: String,
    pub description: String,
    pub alert_id: String,
    pub protocol: String,
    #[serde(rename = "type")]
    pub finding_type: FindingType,
    pub severity: FindingSeverity,
}
