//! `govwatch scan` — run the agent over one receipt file.

use anyhow::{Context, Result};
use govwatch_core::{GovernanceAgent, MonitorConfig, Receipt};
use tracing::info;

pub fn run(monitor: &MonitorConfig, receipt_path: &str, as_json: bool) -> Result<()> {
    let raw = std::fs::read_to_string(receipt_path)
        .with_context(|| format!("reading receipt {receipt_path}"))?;
    let tx = Receipt::from_json_str(&raw)
        .with_context(|| format!("parsing receipt {receipt_path}"))?
        .into_context()
        .with_context(|| format!("invalid receipt {receipt_path}"))?;

    let agent = GovernanceAgent::new(monitor)?;
    let findings = agent.handle(&tx);
    info!(
        tx = tx.tx_hash.as_deref().unwrap_or("-"),
        findings = findings.len(),
        "receipt scanned"
    );

    if as_json {
        println!("{}", serde_json::to_string_pretty(&findings)?);
        return Ok(());
    }

    if findings.is_empty() {
        println!("No governance events detected.");
    }
    for f in &findings {
        println!("[{:?}/{:?}] {}", f.severity, f.finding_type, f.description);
        println!("    {} · {} · {}", f.name, f.alert_id, f.protocol);
    }
    Ok(())
}
