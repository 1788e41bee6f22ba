//! The log-filtering primitive: "logs at address X matching signature Y".
//!
//! The matcher only depends on the [`LogFilter`] trait, so tests can swap
//! in a stub without building real topic hashes.

use crate::signature::{topic_hash_of, TopicHash, SIGNATURES};
use crate::types::{LogEntry, TransactionContext};

pub trait LogFilter: Send + Sync {
    /// Return every log in `tx` emitted by `address` whose topics contain the
    /// hash of `signature`. Malformed logs are skipped, never reported.
    fn filter_logs<'a>(
        &self,
        tx: &'a TransactionContext,
        signature: &str,
        address: &str,
    ) -> Vec<&'a LogEntry>;
}

/// Default filter: scans the in-memory logs for the signature's topic hash.
///
/// Topics for every registered signature are hashed once at construction;
/// other signatures are hashed on demand.
#[derive(Debug, Clone)]
pub struct TopicLogFilter {
    topics: Vec<(&'static str, TopicHash)>,
}

impl TopicLogFilter {
    pub fn new() -> Self {
        Self {
            topics: SIGNATURES
                .iter()
                .map(|entry| (entry.signature, topic_hash_of(entry.signature)))
                .collect(),
        }
    }

    /// Topic hash for `signature`, from the cache when registered.
    pub fn topic(&self, signature: &str) -> TopicHash {
        self.topics
            .iter()
            .find(|(sig, _)| *sig == signature)
            .map(|(_, topic)| topic.clone())
            .unwrap_or_else(|| topic_hash_of(signature))
    }
}

impl Default for TopicLogFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl LogFilter for TopicLogFilter {
    fn filter_logs<'a>(
        &self,
        tx: &'a TransactionContext,
        signature: &str,
        address: &str,
    ) -> Vec<&'a LogEntry> {
        let topic = self.topic(signature);
        tx.logs
            .iter()
            .filter(|log| log.emitted_by(address))
            .filter(|log| log.topics.iter().any(|t| topic.matches(t)))
            .collect()
    }
}
