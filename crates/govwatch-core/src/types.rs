//! Per-transaction input types.

use serde::{Deserialize, Deserializer, Serialize};

/// One event log as observed on a transaction.
///
/// Both fields default to empty when missing or `null`, so partial logs
/// deserialize; an empty address or topic list simply never matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Emitting contract address (hex, any case)
    #[serde(default, deserialize_with = "null_as_default")]
    pub address: String,
    /// topics[0] is the event signature hash when present
    #[serde(default, deserialize_with = "null_as_default")]
    pub topics: Vec<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl LogEntry {
    pub fn new(address: impl Into<String>, topics: Vec<String>) -> Self {
        Self {
            address: address.into(),
            topics,
        }
    }

    /// `true` if this log was emitted by `address`. Empty addresses never match.
    pub fn emitted_by(&self, address: &str) -> bool {
        !self.address.is_empty() && self.address.eq_ignore_ascii_case(address)
    }
}

/// The unit of work handed to the agent: a transaction's logs plus its outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionContext {
    /// Used only for log context
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx_hash: Option<String>,
    #[serde(default)]
    pub logs: Vec<LogEntry>,
    pub succeeded: bool,
}

impl TransactionContext {
    pub fn new(logs: Vec<LogEntry>, succeeded: bool) -> Self {
        Self {
            tx_hash: None,
            logs,
            succeeded,
        }
    }

    pub fn with_tx_hash(mut self, hash: impl Into<String>) -> Self {
        self.tx_hash = Some(hash.into());
        self
    }
}
