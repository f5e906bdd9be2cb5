//! Fixture case execution: name-based dispatch to the core primitives.

use core::cmp::Ordering;

use serde_json::Value;
use thiserror::Error;

use strscan_core::ctype;
use strscan_core::scan::{range, seq};

/// Errors raised while decoding or dispatching a fixture case.
#[derive(Debug, Error)]
pub enum ExecError {
    #[error("unknown function `{0}`")]
    UnknownFunction(String),
    #[error("unknown predicate `{0}`")]
    UnknownPredicate(String),
    #[error("missing input `{0}`")]
    MissingInput(&'static str),
    #[error("input `{0}` must be a string")]
    NotAString(&'static str),
    #[error("input `{0}` must be a single character")]
    NotAChar(&'static str),
}

type Predicate = fn(u8) -> bool;

/// Resolves a predicate name from fixture inputs to a classifier.
pub fn predicate(name: &str) -> Result<Predicate, ExecError> {
    match name {
        "alpha" => Ok(ctype::is_alpha),
        "digit" => Ok(ctype::is_digit),
        "alnum" => Ok(ctype::is_alnum),
        "space" => Ok(ctype::is_space),
        "upper" => Ok(ctype::is_upper),
        "lower" => Ok(ctype::is_lower),
        other => Err(ExecError::UnknownPredicate(other.to_string())),
    }
}

fn string_input<'a>(inputs: &'a Value, key: &'static str) -> Result<&'a str, ExecError> {
    inputs
        .get(key)
        .ok_or(ExecError::MissingInput(key))?
        .as_str()
        .ok_or(ExecError::NotAString(key))
}

fn byte_input(inputs: &Value, key: &'static str) -> Result<u8, ExecError> {
    let s = string_input(inputs, key)?;
    let mut bytes = s.bytes();
    match (bytes.next(), bytes.next()) {
        (Some(b), None) => Ok(b),
        _ => Err(ExecError::NotAChar(key)),
    }
}

fn ordering_label(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Less => "-1",
        Ordering::Equal => "0",
        Ordering::Greater => "1",
    }
}

fn render_bytes(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Executes a single fixture case and renders its output as a string.
///
/// Fixture inputs carry logical strings as JSON strings, single characters
/// as one-character strings, and predicates by registry name.
pub fn execute_case(function: &str, inputs: &Value) -> Result<String, ExecError> {
    match function {
        "length" => {
            let s = string_input(inputs, "s")?;
            Ok(seq::length(s.as_bytes()).to_string())
        }
        "find" => {
            let s = string_input(inputs, "s")?;
            let target = byte_input(inputs, "target")?;
            Ok(range::find(s.as_bytes(), target).to_string())
        }
        "first_non_space" => {
            let s = string_input(inputs, "s")?;
            Ok(seq::first_non_space(s.as_bytes()).to_string())
        }
        "first_space" => {
            let s = string_input(inputs, "s")?;
            Ok(seq::first_space(s.as_bytes()).to_string())
        }
        "rfind_non_space" => {
            let s = string_input(inputs, "s")?;
            Ok(range::rfind_non_space(s.as_bytes()).to_string())
        }
        "rfind_space" => {
            let s = string_input(inputs, "s")?;
            Ok(range::rfind_space(s.as_bytes()).to_string())
        }
        "compare" => {
            let a = string_input(inputs, "a")?;
            let b = string_input(inputs, "b")?;
            Ok(ordering_label(seq::compare(a.as_bytes(), b.as_bytes())).to_string())
        }
        "copy" => {
            let s = string_input(inputs, "s")?;
            let mut dest = vec![0u8; s.len()];
            let end = range::copy(&mut dest, s.as_bytes());
            Ok(render_bytes(&dest[..end]))
        }
        "copy_if" => {
            let s = string_input(inputs, "s")?;
            let pred = predicate(string_input(inputs, "pred")?)?;
            let mut dest = vec![0u8; s.len()];
            let end = range::copy_if(&mut dest, s.as_bytes(), pred);
            Ok(render_bytes(&dest[..end]))
        }
        "copy_if_rev" => {
            let s = string_input(inputs, "s")?;
            let pred = predicate(string_input(inputs, "pred")?)?;
            let mut dest = vec![0u8; s.len()];
            let end = range::copy_if_rev(&mut dest, s.as_bytes(), pred);
            Ok(render_bytes(&dest[..end]))
        }
        "trimmed" => {
            let s = string_input(inputs, "s")?;
            Ok(render_bytes(seq::trimmed(s.as_bytes())))
        }
        other => Err(ExecError::UnknownFunction(other.to_string())),
    }
}
