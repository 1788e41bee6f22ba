//! # govwatch-core
//!
//! Detection core for the GovWatch governance monitor.
//!
//! Given the logs of a single transaction, the [`GovernanceAgent`] checks
//! whether the Compound Governor emitted a proposal-created, vote-cast or
//! proposal-executed event and returns one [`Finding`] per matched kind.
//! Failed transactions are escalated to suspicious / high severity.
//!
//! The core performs no I/O. Receipts are supplied by the caller, either
//! directly as a [`TransactionContext`] or through the JSON-RPC shaped
//! [`Receipt`] adapter.

pub mod agent;
pub mod classifier;
pub mod config;
pub mod error;
pub mod filter;
pub mod finding;
pub mod kind;
pub mod matcher;
pub mod receipt;
pub mod signature;
pub mod types;

pub use agent::GovernanceAgent;
pub use classifier::classify;
pub use config::{MonitorConfig, COMPOUND_GOVERNANCE_ADDRESS};
pub use error::{ConfigError, ReceiptError};
pub use filter::{LogFilter, TopicLogFilter};
pub use finding::{Finding, FindingSeverity, FindingType};
pub use kind::EventKind;
pub use matcher::EventMatcher;
pub use receipt::Receipt;
pub use signature::{signature, topic_hash_of, topic_of, SignatureEntry, TopicHash, SIGNATURES};
pub use types::{LogEntry, TransactionContext};
