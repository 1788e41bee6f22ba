//! Maps a matched event kind and transaction outcome to a [`Finding`].

use crate::finding::{Finding, FindingSeverity, FindingType};
use crate::kind::EventKind;

pub const FINDING_NAME: &str = "COMPOUND GOVERNANCE EVENT";
pub const ALERT_ID: &str = "COMPOUND_GOV_ALERT";
pub const PROTOCOL: &str = "Compound";

/// Successful transactions are informational; a governance event inside a
/// failed transaction is suspicious with high severity.
pub fn classify(kind: EventKind, succeeded: bool) -> Finding {
    let (description, finding_type, severity) = if succeeded {
        (
            format!("Compound {kind} Proposal Event detected."),
            FindingType::Info,
            FindingSeverity::Info,
        )
    } else {
        (
            format!("Compound Failed {kind} Proposal event detected."),
            FindingType::Suspicious,
            FindingSeverity::High,
        )
    };

    Finding {
        name: FINDING_NAME.to_string(),
        description,
        alert_id: ALERT_ID.to_string(),
        protocol: PROTOCOL.to_string(),
        finding_type,
        severity,
    }
}
