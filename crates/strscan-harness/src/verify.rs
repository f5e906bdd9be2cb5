//! Verification results.

use serde::{Deserialize, Serialize};

/// Outcome of executing one fixture case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationResult {
    /// Case identifier from the fixture.
    pub case_name: String,
    /// Whether actual output matched expected output.
    pub passed: bool,
    /// Expected output string.
    pub expected: String,
    /// Actual output string (or `error:` line when dispatch failed).
    pub actual: String,
    /// Rendered expected/got pair, present only on mismatch.
    pub diff: Option<String>,
}
