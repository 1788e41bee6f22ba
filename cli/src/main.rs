//! GovWatch CLI.
//!
//! # Commands
//! ```text
//! govwatch scan       --receipt <path.json> [--config <path.yaml>] [--json]
//! govwatch signatures [--json]
//! govwatch test       --fixtures <dir>
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use govwatch_core::{signature, topic_of, EventKind};
use govwatch_observability::init_tracing;

mod cmd_scan;
mod config;

#[derive(Parser)]
#[command(
    name = "govwatch",
    about = "Compound governance event monitor",
    long_about = "
GovWatch: flag ProposalCreated, VoteCast and ProposalExecuted events emitted by
the Compound Governor. Events inside reverted transactions are reported as
suspicious with high severity.

ENVIRONMENT VARIABLES:
  GOVWATCH_GOVERNANCE_ADDRESS   Override the monitored governance contract
",
    version
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// YAML config file with `monitor` and `log` sections
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a JSON-RPC transaction receipt for governance events
    Scan {
        /// Path to the receipt JSON file
        #[arg(long)]
        receipt: String,
        /// Output findings as JSON
        #[arg(long)]
        json: bool,
    },

    /// List registered governance event signatures and topic hashes
    Signatures {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run golden test fixtures
    Test {
        /// Directory containing fixture JSON files
        #[arg(long, default_value = "./fixtures/governance")]
        fixtures: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut cfg = config::CliConfig::load(cli.config.as_deref())?;
    if cli.verbose {
        cfg.log.level = "debug".into();
    }
    init_tracing(&cfg.log);

    match cli.command {
        Commands::Scan { receipt, json } => cmd_scan::run(&cfg.monitor, &receipt, json),
        Commands::Signatures { json } => cmd_signatures(json),
        Commands::Test { fixtures } => cmd_test::run(&cfg.monitor, &fixtures),
    }
}

fn cmd_signatures(as_json: bool) -> Result<()> {
    if as_json {
        let rows: Vec<_> = EventKind::ALL
            .into_iter()
            .map(|kind| {
                serde_json::json!({
                    "kind": kind,
                    "signature": signature(kind),
                    "topic": topic_of(kind).as_hex(),
                    "monitored": kind.is_monitored(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    for kind in EventKind::ALL {
        let marker = if kind.is_monitored() { "*" } else { " " };
        println!("{marker} {:<8} {}", kind.label(), topic_of(kind));
        println!("           {}", signature(kind));
    }
    println!();
    println!("* monitored");
    Ok(())
}
