//! Per-transaction entrypoint: match, classify, collect.

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::classifier::classify;
use crate::config::MonitorConfig;
use crate::error::ConfigError;
use crate::filter::{LogFilter, TopicLogFilter};
use crate::finding::Finding;
use crate::matcher::EventMatcher;
use crate::types::TransactionContext;

/// Watches one governance contract and turns its events into findings.
///
/// Holds only immutable state, so a single agent can be shared across
/// threads and fed transactions concurrently.
#[derive(Debug, Clone)]
pub struct GovernanceAgent<F = TopicLogFilter> {
    matcher: EventMatcher<F>,
}

impl GovernanceAgent<TopicLogFilter> {
    /// Build an agent from a validated monitor config.
    pub fn new(config: &MonitorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_matcher(EventMatcher::new(
            config.governance_address.clone(),
        )))
    }

    /// Agent for the Compound Governor at its mainnet address.
    pub fn compound() -> Self {
        Self::with_matcher(EventMatcher::new(
            MonitorConfig::default().governance_address,
        ))
    }
}

impl Default for GovernanceAgent<TopicLogFilter> {
    fn default() -> Self {
        Self::compound()
    }
}

impl<F: LogFilter> GovernanceAgent<F> {
    pub fn with_matcher(matcher: EventMatcher<F>) -> Self {
        Self { matcher }
    }

    pub fn matcher(&self) -> &EventMatcher<F> {
        &self.matcher
    }

    /// Findings for one transaction, one per matched kind in monitored order.
    pub fn handle(&self, tx: &TransactionContext) -> Vec<Finding> {
        trace!(
            tx = tx.tx_hash.as_deref().unwrap_or("-"),
            logs = tx.logs.len(),
            "scanning transaction"
        );

        self.matcher
            .find_matches(tx)
            .into_iter()
            .map(|kind| {
                debug!(
                    tx = tx.tx_hash.as_deref().unwrap_or("-"),
                    %kind,
                    succeeded = tx.succeeded,
                    "governance event matched"
                );
                classify(kind, tx.succeeded)
            })
            .collect()
    }

    /// Handle many independent transactions in parallel.
    /// Output `i` holds the findings for `txs[i]`.
    pub fn handle_batch(&self, txs: &[TransactionContext]) -> Vec<Vec<Finding>> {
        txs.par_iter().map(|tx| self.handle(tx)).collect()
    }
}
