//! # govwatch-observability
//!
//! Structured logging for GovWatch binaries.
//!
//! Text or JSON output via `tracing-subscriber`, with a global level and
//! optional per-crate overrides, e.g. `info,govwatch_core=debug`.

pub mod tracing_setup;

pub use tracing_setup::{init_tracing, LogConfig};
