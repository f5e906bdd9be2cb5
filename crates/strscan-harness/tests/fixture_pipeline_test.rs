//! Fixture serialization and file-loading pipeline.

use strscan_harness::fixtures::{self, FixtureSet};
use strscan_harness::runner::TestRunner;

#[test]
fn fixture_set_survives_json_round_trip() {
    let set = fixtures::builtin();
    let json = set.to_json().expect("serialize");
    let back = FixtureSet::from_json(&json).expect("deserialize");

    assert_eq!(back.version, set.version);
    assert_eq!(back.family, set.family);
    assert_eq!(back.cases.len(), set.cases.len());
    for (a, b) in back.cases.iter().zip(set.cases.iter()) {
        assert_eq!(a.name, b.name);
        assert_eq!(a.function, b.function);
        assert_eq!(a.inputs, b.inputs);
        assert_eq!(a.expected_output, b.expected_output);
    }
}

#[test]
fn captured_fixture_file_loads_and_passes() {
    let set = fixtures::builtin();
    let path = std::env::temp_dir().join("strscan_fixture_pipeline_test.json");
    std::fs::write(&path, set.to_json().expect("serialize")).expect("write fixture file");

    let loaded = FixtureSet::from_file(&path).expect("load fixture file");
    let results = TestRunner::new("from_file").run(&loaded);
    assert!(results.iter().all(|r| r.passed));

    std::fs::remove_file(&path).ok();
}

#[test]
fn malformed_fixture_json_is_rejected() {
    assert!(FixtureSet::from_json("{\"version\":\"v1\"}").is_err());
    assert!(FixtureSet::from_json("not json at all").is_err());
}
