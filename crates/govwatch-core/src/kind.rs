//! The closed set of Compound Governor events GovWatch knows about.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A governance event kind.
///
/// Every kind has a registered signature, but only [`EventKind::MONITORED`]
/// kinds produce findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventKind {
    Create,
    Vote,
    Queue,
    Execute,
    Cancel,
}

impl EventKind {
    /// All kinds in declaration order.
    pub const ALL: [EventKind; 5] = [
        EventKind::Create,
        EventKind::Vote,
        EventKind::Queue,
        EventKind::Execute,
        EventKind::Cancel,
    ];

    /// Kinds that produce findings, in the order findings are emitted.
    /// Queue and cancel are registered but deliberately not monitored.
    pub const MONITORED: [EventKind; 3] = [EventKind::Create, EventKind::Vote, EventKind::Execute];

    /// Upper-case label used in finding descriptions, e.g. `"CREATE"`.
    pub fn label(self) -> &'static str {
        match self {
            EventKind::Create => "CREATE",
            EventKind::Vote => "VOTE",
            EventKind::Queue => "QUEUE",
            EventKind::Execute => "EXECUTE",
            EventKind::Cancel => "CANCEL",
        }
    }

    pub fn is_monitored(self) -> bool {
        Self::MONITORED.contains(&self)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EventKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown governance event kind '{s}'"))
    }
}
