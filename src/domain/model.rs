use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Token the scanner refused to parse, with its zero-based position in the stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectedToken {
    pub token: String,
    pub position: usize,
}

/// Everything the scanner got out of the raw input: the integers parsed in
/// order, plus the token that stopped the scan when one did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOutcome {
    pub values: Vec<i64>,
    pub rejected: Option<RejectedToken>,
}

impl ScanOutcome {
    pub fn truncated(&self) -> bool {
        self.rejected.is_some()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoldReport {
    pub value: i64,
    pub values_read: usize,
    pub truncated: bool,
    pub finished_at: DateTime<Utc>,
}

impl FoldReport {
    /// The contract output: the decimal result, nothing else.
    pub fn render_plain(&self) -> String {
        self.value.to_string()
    }
}
