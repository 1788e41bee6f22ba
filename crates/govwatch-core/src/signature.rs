//! Compound Governor event signatures and their topic hashes.
//!
//! The topic of an EVM event is the keccak256 hash of its canonical
//! signature string, e.g.:
//!   keccak256("ProposalExecuted(uint256)")
//!   → 0x712ae1383f79ac853f8d882153778e0260ef8f03b504e2866e0593e04d2b291f

use serde::{Deserialize, Serialize};
use std::fmt;
use tiny_keccak::{Hasher, Keccak};

use crate::kind::EventKind;

/// A `0x`-prefixed, lower-case hex keccak256 digest of an event signature.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TopicHash(String);

impl TopicHash {
    pub fn as_hex(&self) -> &str {
        &self.0
    }

    /// Compare against a raw log topic. Hex case is ignored.
    pub fn matches(&self, topic: &str) -> bool {
        self.0.eq_ignore_ascii_case(topic)
    }
}

impl fmt::Display for TopicHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Relates a kind to its canonical event signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignatureEntry {
    pub kind: EventKind,
    pub signature: &'static str,
}

pub const SIGNATURES: [SignatureEntry; 5] = [
    SignatureEntry {
        kind: EventKind::Create,
        signature: "ProposalCreated(uint256,address,address[],uint256[],string[],bytes[],uint256,uint256,string)",
    },
    SignatureEntry {
        kind: EventKind::Vote,
        signature: "VoteCast(address,uint256,bool,uint256)",
    },
    SignatureEntry {
        kind: EventKind::Queue,
        signature: "ProposalQueued(uint256,uint256)",
    },
    SignatureEntry {
        kind: EventKind::Execute,
        signature: "ProposalExecuted(uint256)",
    },
    SignatureEntry {
        kind: EventKind::Cancel,
        signature: "ProposalCanceled(uint256)",
    },
];

/// Canonical signature for `kind`.
pub fn signature(kind: EventKind) -> &'static str {
    match kind {
        EventKind::Create => SIGNATURES[0].signature,
        EventKind::Vote => SIGNATURES[1].signature,
        EventKind::Queue => SIGNATURES[2].signature,
        EventKind::Execute => SIGNATURES[3].signature,
        EventKind::Cancel => SIGNATURES[4].signature,
    }
}

/// keccak256 of an arbitrary signature string. Never fails.
pub fn topic_hash_of(signature: &str) -> TopicHash {
    let mut hasher = Keccak::v256();
    let mut output = [0u8; 32];
    hasher.update(signature.as_bytes());
    hasher.finalize(&mut output);
    TopicHash(format!("0x{}", hex::encode(output)))
}

pub fn topic_of(kind: EventKind) -> TopicHash {
    topic_hash_of(signature(kind))
}
