//! Decides which monitored governance events a transaction emitted.

use crate::filter::{LogFilter, TopicLogFilter};
use crate::kind::EventKind;
use crate::signature::signature;
use crate::types::TransactionContext;

/// Matches a transaction's logs against the registered signatures for a
/// single target contract.
#[derive(Debug, Clone)]
pub struct EventMatcher<F = TopicLogFilter> {
    target: String,
    filter: F,
}

impl EventMatcher<TopicLogFilter> {
    pub fn new(target: impl Into<String>) -> Self {
        Self::with_filter(target, TopicLogFilter::new())
    }
}

impl<F: LogFilter> EventMatcher<F> {
    pub fn with_filter(target: impl Into<String>, filter: F) -> Self {
        Self {
            target: target.into(),
            filter,
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// `true` if at least one log in `tx` is a `kind` event from the target.
    pub fn matches(&self, tx: &TransactionContext, kind: EventKind) -> bool {
        !self
            .filter
            .filter_logs(tx, signature(kind), &self.target)
            .is_empty()
    }

    /// Monitored kinds present in `tx`, in [`EventKind::MONITORED`] order.
    /// Each kind appears at most once however many logs match it.
    pub fn find_matches(&self, tx: &TransactionContext) -> Vec<EventKind> {
        EventKind::MONITORED
            .into_iter()
            .filter(|&kind| self.matches(tx, kind))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signature::topic_of;
    use crate::types::LogEntry;

    const GOV: &str = "0xc0dA01a04C3f3E0be433606045bB7017A7323E38";

    fn log(kind: EventKind) -> LogEntry {
        LogEntry::new(GOV, vec![topic_of(kind).as_hex().to_string()])
    }

    /// Stub filter that claims a hit for exactly one signature.
    struct OnlySignature(&'static str);

    impl LogFilter for OnlySignature {
        fn filter_logs<'a>(
            &self,
            tx: &'a TransactionContext,
            signature: &str,
            _address: &str,
        ) -> Vec<&'a LogEntry> {
            if signature == self.0 {
                tx.logs.iter().take(1).collect()
            } else {
                vec![]
            }
        }
    }

    #[test]
    fn no_logs_no_matches() {
        let m = EventMatcher::new(GOV);
        assert_eq!(m.target(), GOV);
        assert!(m.find_matches(&TransactionContext::default()).is_empty());
    }

    #[test]
    fn matches_follow_monitored_order() {
        let m = EventMatcher::new(GOV);
        let tx = TransactionContext::new(
            vec![log(EventKind::Execute), log(EventKind::Vote), log(EventKind::Create)],
            true,
        );
        assert_eq!(
            m.find_matches(&tx),
            vec![EventKind::Create, EventKind::Vote, EventKind::Execute]
        );
    }

    #[test]
    fn duplicate_logs_collapse_to_one_match() {
        let m = EventMatcher::new(GOV);
        let tx = TransactionContext::new(vec![log(EventKind::Vote), log(EventKind::Vote)], true);
        assert_eq!(m.find_matches(&tx), vec![EventKind::Vote]);
    }

    #[test]
    fn queue_and_cancel_are_not_reported() {
        let m = EventMatcher::new(GOV);
        let tx = TransactionContext::new(vec![log(EventKind::Queue), log(EventKind::Cancel)], true);
        assert!(m.matches(&tx, EventKind::Queue));
        assert!(m.find_matches(&tx).is_empty());
    }

    #[test]
    fn injected_filter_drives_matching() {
        let m = EventMatcher::with_filter(GOV, OnlySignature("VoteCast(address,uint256,bool,uint256)"));
        let tx = TransactionContext::new(vec![LogEntry::default()], false);
        assert_eq!(m.find_matches(&tx), vec![EventKind::Vote]);
    }
}
