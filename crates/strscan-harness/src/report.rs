//! Conformance report generation.

use serde::{Deserialize, Serialize};

use crate::verify::VerificationResult;

/// One failed case carried into the report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailureEntry {
    /// Case identifier from the fixture.
    pub case_name: String,
    /// Expected output string.
    pub expected: String,
    /// Actual output string.
    pub actual: String,
}

/// Aggregate outcome of one harness run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConformanceReport {
    /// Name of the test campaign.
    pub campaign: String,
    /// Total cases executed.
    pub total: usize,
    /// Cases whose actual output matched.
    pub passed: usize,
    /// Cases whose actual output mismatched.
    pub failed: usize,
    /// Failing cases with their expected/got pairs.
    pub failures: Vec<FailureEntry>,
}

impl ConformanceReport {
    /// Build a report from a slice of verification results.
    #[must_use]
    pub fn from_results(campaign: impl Into<String>, results: &[VerificationResult]) -> Self {
        let failures: Vec<FailureEntry> = results
            .iter()
            .filter(|r| !r.passed)
            .map(|r| FailureEntry {
                case_name: r.case_name.clone(),
                expected: r.expected.clone(),
                actual: r.actual.clone(),
            })
            .collect();
        Self {
            campaign: campaign.into(),
            total: results.len(),
            passed: results.len() - failures.len(),
            failed: failures.len(),
            failures,
        }
    }

    /// Whether every case passed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Render the report as markdown.
    #[must_use]
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("# Conformance report: {}\n\n", self.campaign));
        out.push_str(&format!(
            "- total: {}\n- passed: {}\n- failed: {}\n",
            self.total, self.passed, self.failed
        ));
        if !self.failures.is_empty() {
            out.push_str("\n## Failures\n\n");
            out.push_str("| case | expected | got |\n|---|---|---|\n");
            for failure in &self.failures {
                out.push_str(&format!(
                    "| {} | `{}` | `{}` |\n",
                    failure.case_name, failure.expected, failure.actual
                ));
            }
        }
        out
    }

    /// Render the report as pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
