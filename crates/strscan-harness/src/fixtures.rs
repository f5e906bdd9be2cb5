//! Fixture loading and management.

use serde::{Deserialize, Serialize};
use serde_json::json;

/// A single fixture test case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureCase {
    /// Case identifier.
    pub name: String,
    /// Function being tested.
    pub function: String,
    /// Input parameters (serialized).
    pub inputs: serde_json::Value,
    /// Expected output (serialized as string for comparison).
    pub expected_output: String,
}

/// A collection of fixture cases for a function family.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureSet {
    /// Schema version.
    pub version: String,
    /// Function family name.
    pub family: String,
    /// Individual test cases.
    pub cases: Vec<FixtureCase>,
}

impl FixtureSet {
    /// Load fixture set from JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize fixture set to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load fixture set from a file path.
    pub fn from_file(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let set = Self::from_json(&content)?;
        Ok(set)
    }
}

fn case(name: &str, function: &str, inputs: serde_json::Value, expected: &str) -> FixtureCase {
    FixtureCase {
        name: name.to_string(),
        function: function.to_string(),
        inputs,
        expected_output: expected.to_string(),
    }
}

/// The builtin golden fixture set.
///
/// Carries the original literal test vectors for every primitive plus the
/// documented edge cases (empty range, all-whitespace range, prefix
/// ordering, nothing-matches filter).
#[must_use]
pub fn builtin() -> FixtureSet {
    FixtureSet {
        version: "v1".to_string(),
        family: "scan".to_string(),
        cases: vec![
            case("length_empty", "length", json!({"s": ""}), "0"),
            case("length_basic", "length", json!({"s": "abc"}), "3"),
            case("find_hit", "find", json!({"s": "abcdef", "target": "d"}), "3"),
            case("find_miss_returns_end", "find", json!({"s": "abcdef", "target": "z"}), "6"),
            case("find_empty_range", "find", json!({"s": "", "target": "a"}), "0"),
            case(
                "first_non_space_basic",
                "first_non_space",
                json!({"s": "  abc  "}),
                "2",
            ),
            case(
                "first_non_space_all_whitespace",
                "first_non_space",
                json!({"s": "   "}),
                "3",
            ),
            case("first_space_basic", "first_space", json!({"s": "abc def"}), "3"),
            case("first_space_none", "first_space", json!({"s": "abc"}), "3"),
            case(
                "rfind_non_space_basic",
                "rfind_non_space",
                json!({"s": "abc def  "}),
                "6",
            ),
            case(
                "rfind_non_space_all_whitespace",
                "rfind_non_space",
                json!({"s": "   "}),
                "0",
            ),
            case(
                "rfind_space_basic",
                "rfind_space",
                json!({"s": "abc def  ghi"}),
                "8",
            ),
            case("compare_less", "compare", json!({"a": "abc", "b": "def"}), "-1"),
            case("compare_equal", "compare", json!({"a": "abc", "b": "abc"}), "0"),
            case("compare_greater", "compare", json!({"a": "def", "b": "abc"}), "1"),
            case("compare_prefix_sorts_first", "compare", json!({"a": "ab", "b": "abc"}), "-1"),
            case("copy_basic", "copy", json!({"s": "abc"}), "abc"),
            case(
                "copy_if_letters",
                "copy_if",
                json!({"s": "6ab12c57", "pred": "alpha"}),
                "abc",
            ),
            case(
                "copy_if_digits",
                "copy_if",
                json!({"s": "6ab12c57", "pred": "digit"}),
                "61257",
            ),
            case(
                "copy_if_nothing_matches",
                "copy_if",
                json!({"s": "12345", "pred": "alpha"}),
                "",
            ),
            case(
                "copy_if_rev_letters",
                "copy_if_rev",
                json!({"s": "6ab12c57", "pred": "alpha"}),
                "cba",
            ),
            case(
                "copy_if_rev_upper",
                "copy_if_rev",
                json!({"s": "aXbYcZ", "pred": "upper"}),
                "ZYX",
            ),
            case("trimmed_basic", "trimmed", json!({"s": "  abc def  "}), "abc def"),
            case("trimmed_all_whitespace", "trimmed", json!({"s": "   "}), ""),
        ],
    }
}
