//! Expected/got rendering for failed cases.

/// Renders the expected/got pair for a mismatched case.
#[must_use]
pub fn render_diff(expected: &str, actual: &str) -> String {
    format!("expected: \"{expected}\"\n     got: \"{actual}\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_both_sides() {
        let out = render_diff("3", "4");
        assert!(out.contains("expected: \"3\""));
        assert!(out.contains("got: \"4\""));
    }
}
