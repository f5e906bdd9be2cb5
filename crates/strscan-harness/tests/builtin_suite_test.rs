//! End-to-end run of the builtin fixture set.

use strscan_harness::fixtures;
use strscan_harness::report::ConformanceReport;
use strscan_harness::runner::TestRunner;

#[test]
fn builtin_fixture_set_passes_in_full() {
    let set = fixtures::builtin();
    let results = TestRunner::new("builtin").run(&set);
    assert_eq!(results.len(), set.cases.len());

    let failures: Vec<&str> = results
        .iter()
        .filter(|r| !r.passed)
        .map(|r| r.case_name.as_str())
        .collect();
    assert!(failures.is_empty(), "failing cases: {failures:?}");
}

#[test]
fn builtin_report_reflects_clean_run() {
    let set = fixtures::builtin();
    let results = TestRunner::new("builtin").run(&set);
    let report = ConformanceReport::from_results("builtin", &results);

    assert!(report.all_passed());
    assert_eq!(report.total, set.cases.len());
    assert_eq!(report.failed, 0);
    assert!(report.to_markdown().contains("failed: 0"));
}

#[test]
fn builtin_covers_every_dispatchable_function() {
    let set = fixtures::builtin();
    let functions = [
        "length",
        "find",
        "first_non_space",
        "first_space",
        "rfind_non_space",
        "rfind_space",
        "compare",
        "copy",
        "copy_if",
        "copy_if_rev",
        "trimmed",
    ];
    for function in functions {
        assert!(
            set.cases.iter().any(|c| c.function == function),
            "no builtin case for {function}"
        );
    }
}
