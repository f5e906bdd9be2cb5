//! Test execution engine.

use crate::diff;
use crate::exec::execute_case;
use crate::fixtures::FixtureSet;
use crate::verify::VerificationResult;

/// Runs a fixture set and collects verification results.
pub struct TestRunner {
    /// Name of the test campaign.
    pub campaign: String,
}

impl TestRunner {
    /// Create a new test runner.
    #[must_use]
    pub fn new(campaign: impl Into<String>) -> Self {
        Self {
            campaign: campaign.into(),
        }
    }

    /// Run all fixtures in a set and return results.
    ///
    /// A failing or erroring case never stops the run; every case executes
    /// and mismatches surface in the results.
    pub fn run(&self, fixture_set: &FixtureSet) -> Vec<VerificationResult> {
        fixture_set
            .cases
            .iter()
            .map(|case| {
                let actual = match execute_case(&case.function, &case.inputs) {
                    Ok(output) => output,
                    Err(err) => format!("error:{err}"),
                };
                let passed = actual == case.expected_output;
                let diff = if passed {
                    None
                } else {
                    Some(diff::render_diff(&case.expected_output, &actual))
                };
                VerificationResult {
                    case_name: case.name.clone(),
                    passed,
                    expected: case.expected_output.clone(),
                    actual,
                    diff,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runner_executes_all_cases() {
        let fixture = FixtureSet::from_json(
            r#"{
                "version":"v1",
                "family":"scan/find",
                "cases":[
                    {"name":"find_hit","function":"find","inputs":{"s":"abcdef","target":"d"},"expected_output":"3"},
                    {"name":"find_miss","function":"find","inputs":{"s":"abcdef","target":"z"},"expected_output":"6"}
                ]
            }"#,
        )
        .expect("valid fixture json");

        let results = TestRunner::new("smoke").run(&fixture);
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.passed));
    }

    #[test]
    fn mismatch_carries_diff_and_run_continues() {
        let fixture = FixtureSet::from_json(
            r#"{
                "version":"v1",
                "family":"scan/length",
                "cases":[
                    {"name":"wrong_expectation","function":"length","inputs":{"s":"abc"},"expected_output":"4"},
                    {"name":"right_expectation","function":"length","inputs":{"s":"abc"},"expected_output":"3"}
                ]
            }"#,
        )
        .expect("valid fixture json");

        let results = TestRunner::new("smoke").run(&fixture);
        assert_eq!(results.len(), 2);
        assert!(!results[0].passed);
        assert!(results[0].diff.as_deref().unwrap().contains("expected: \"4\""));
        assert!(results[1].passed);
    }

    #[test]
    fn dispatch_error_is_reported_not_fatal() {
        let fixture = FixtureSet::from_json(
            r#"{
                "version":"v1",
                "family":"scan",
                "cases":[
                    {"name":"bogus","function":"strfry","inputs":{},"expected_output":"x"}
                ]
            }"#,
        )
        .expect("valid fixture json");

        let results = TestRunner::new("smoke").run(&fixture);
        assert_eq!(results.len(), 1);
        assert!(!results[0].passed);
        assert!(results[0].actual.starts_with("error:"));
    }
}
