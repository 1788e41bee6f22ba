//! Golden fixture integration tests.
//!
//! Each fixture in `fixtures/governance/` holds a JSON-RPC receipt and the
//! findings the agent must emit for it, in order.

use govwatch_core::{
    classify, EventKind, Finding, GovernanceAgent, LogEntry, Receipt, TransactionContext,
    COMPOUND_GOVERNANCE_ADDRESS,
};

// ─── Helpers ──────────────────────────────────────────────────────────────────

/// The fixtures live two levels above the crate root.
fn fixture_path(name: &str) -> std::path::PathBuf {
    let mut p = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    p.push("../../fixtures/governance");
    p.push(name);
    p
}

fn run_fixture(name: &str) {
    let raw = std::fs::read_to_string(fixture_path(name))
        .unwrap_or_else(|e| panic!("fixture {name} not found: {e}"));
    let fixture: serde_json::Value = serde_json::from_str(&raw).unwrap();

    let receipt: Receipt = serde_json::from_value(fixture["receipt"].clone()).unwrap();
    let tx = receipt.into_context().unwrap();
    let expected: Vec<Finding> =
        serde_json::from_value(fixture["expectedFindings"].clone()).unwrap();

    let got = GovernanceAgent::compound().handle(&tx);
    assert_eq!(got, expected, "fixture {name}: {}", fixture["description"]);
}

fn single(kind: EventKind, succeeded: bool) -> TransactionContext {
    TransactionContext::new(
        vec![LogEntry::new(
            COMPOUND_GOVERNANCE_ADDRESS,
            vec![govwatch_core::topic_of(kind).as_hex().to_string()],
        )],
        succeeded,
    )
}

// ─── Fixtures ─────────────────────────────────────────────────────────────────

#[test]
fn create_succeeded_golden() {
    run_fixture("create-succeeded.json");
}

#[test]
fn vote_failed_golden() {
    run_fixture("vote-failed.json");
}

#[test]
fn execute_succeeded_golden() {
    run_fixture("execute-succeeded.json");
}

#[test]
fn create_and_vote_golden() {
    run_fixture("create-and-vote.json");
}

#[test]
fn wrong_address_golden() {
    run_fixture("wrong-address.json");
}

#[test]
fn queue_not_monitored_golden() {
    run_fixture("queue-not-monitored.json");
}

#[test]
fn lowercase_address_golden() {
    run_fixture("lowercase-address.json");
}

// ─── Properties ───────────────────────────────────────────────────────────────

#[test]
fn every_monitored_kind_succeeded() {
    let agent = GovernanceAgent::compound();
    for kind in EventKind::MONITORED {
        let findings = agent.handle(&single(kind, true));
        assert_eq!(findings.len(), 1);
        assert!(findings[0]
            .description
            .contains(&format!("{kind} Proposal Event detected.")));
    }
}

#[test]
fn every_monitored_kind_failed() {
    let agent = GovernanceAgent::compound();
    for kind in EventKind::MONITORED {
        let findings = agent.handle(&single(kind, false));
        assert_eq!(findings, vec![classify(kind, false)]);
        assert!(findings[0]
            .description
            .contains(&format!("Failed {kind} Proposal event detected.")));
    }
}

#[test]
fn governor_without_monitored_topic() {
    let agent = GovernanceAgent::compound();
    let tx = TransactionContext::new(
        vec![
            LogEntry::new(COMPOUND_GOVERNANCE_ADDRESS, vec![]),
            LogEntry::new(
                COMPOUND_GOVERNANCE_ADDRESS,
                vec!["0xddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef".into()],
            ),
        ],
        true,
    );
    assert!(agent.handle(&tx).is_empty());
}

#[test]
fn upper_case_address_matches() {
    let agent = GovernanceAgent::compound();
    let mut tx = single(EventKind::Vote, true);
    tx.logs[0].address = "0xC0DA01A04C3F3E0BE433606045BB7017A7323E38".into();
    assert_eq!(agent.handle(&tx), vec![classify(EventKind::Vote, true)]);
}
