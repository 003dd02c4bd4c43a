//! Data types produced by the ledger for display and export.

use crate::analyzers::grade::LetterGrade;
use serde::Serialize;

/// Result of recording a batch of entries.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BatchOutcome {
    pub accepted: usize,
    pub rejected: usize,
}

/// The two logical states of a ledger. Only the report text depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerState {
    Empty,
    Populated,
}

/// Point-in-time snapshot of a ledger, serialized for `--json` output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LedgerSummary {
    pub count: usize,
    pub grades: Vec<f64>,
    pub average: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_grade: Option<LetterGrade>,
}
