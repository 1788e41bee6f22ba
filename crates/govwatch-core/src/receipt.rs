//! Adapter from an Ethereum JSON-RPC transaction receipt to a
//! [`TransactionContext`].
//!
//! Only `transactionHash`, `status` and `logs[].{address,topics}` are read;
//! every other receipt field is ignored.

use serde::Deserialize;
use serde_json::Value;

use crate::error::ReceiptError;
use crate::types::{LogEntry, TransactionContext};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    #[serde(default)]
    pub transaction_hash: Option<String>,
    /// `"0x1"` / `"0x0"`, a bool, or 1 / 0. Absent means success.
    #[serde(default)]
    pub status: Option<Value>,
    #[serde(default)]
    pub logs: Vec<LogEntry>,
}

impl Receipt {
    pub fn from_json_str(json: &str) -> Result<Self, ReceiptError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn succeeded(&self) -> Result<bool, ReceiptError> {
        let invalid = |v: &Value| ReceiptError::InvalidStatus {
            value: v.to_string(),
        };
        match &self.status {
            None | Some(Value::Null) => Ok(true),
            Some(Value::Bool(b)) => Ok(*b),
            Some(v @ Value::Number(n)) => match n.as_u64() {
                Some(1) => Ok(true),
                Some(0) => Ok(false),
                _ => Err(invalid(v)),
            },
            Some(v @ Value::String(s)) => match s.to_ascii_lowercase().as_str() {
                "0x1" | "1" | "true" => Ok(true),
                "0x0" | "0" | "false" => Ok(false),
                _ => Err(invalid(v)),
            },
            Some(v) => Err(invalid(v)),
        }
    }

    pub fn into_context(self) -> Result<TransactionContext, ReceiptError> {
        let succeeded = self.succeeded()?;
        Ok(TransactionContext {
            tx_hash: self.transaction_hash,
            logs: self.logs,
            succeeded,
        })
    }
}

impl TryFrom<Receipt> for TransactionContext {
    type Error = ReceiptError;

    fn try_from(receipt: Receipt) -> Result<Self, Self::Error> {
        receipt.into_context()
    }
}
