//! Grade arithmetic and classification.
//!
//! This module holds the pure pieces the ledger derives its statistics from:
//! the mean, the letter-grade thresholds, and the summary types handed to
//! the output layer.

pub mod grade;
pub mod types;
pub mod utility;
