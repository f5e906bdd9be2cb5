//! Character classification.
//!
//! Byte classifiers used as scan boundaries and copy predicates.
//! C locale only.

/// Returns `true` if `c` is an alphabetic character (`[A-Za-z]`).
#[inline]
pub fn is_alpha(c: u8) -> bool {
    c.is_ascii_alphabetic()
}

/// Returns `true` if `c` is a decimal digit (`[0-9]`).
#[inline]
pub fn is_digit(c: u8) -> bool {
    c.is_ascii_digit()
}

/// Returns `true` if `c` is an alphanumeric character (`[A-Za-z0-9]`).
#[inline]
pub fn is_alnum(c: u8) -> bool {
    c.is_ascii_alphanumeric()
}

/// Returns `true` if `c` is a whitespace character.
///
/// Whitespace: space, tab, newline, vertical tab, form feed, carriage return.
#[inline]
pub fn is_space(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// Returns `true` if `c` is an uppercase letter (`[A-Z]`).
#[inline]
pub fn is_upper(c: u8) -> bool {
    c.is_ascii_uppercase()
}

/// Returns `true` if `c` is a lowercase letter (`[a-z]`).
#[inline]
pub fn is_lower(c: u8) -> bool {
    c.is_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_alpha() {
        assert!(is_alpha(b'A'));
        assert!(is_alpha(b'Z'));
        assert!(is_alpha(b'a'));
        assert!(is_alpha(b'z'));
        assert!(!is_alpha(b'0'));
        assert!(!is_alpha(b' '));
        assert!(!is_alpha(0));
    }

    #[test]
    fn test_is_digit() {
        for c in b'0'..=b'9' {
            assert!(is_digit(c));
        }
        assert!(!is_digit(b'a'));
        assert!(!is_digit(b'/'));
        assert!(!is_digit(b':'));
    }

    #[test]
    fn test_is_space() {
        assert!(is_space(b' '));
        assert!(is_space(b'\t'));
        assert!(is_space(b'\n'));
        assert!(is_space(0x0B));
        assert!(is_space(0x0C));
        assert!(is_space(b'\r'));
        assert!(!is_space(b'a'));
        assert!(!is_space(0));
    }

    #[test]
    fn test_is_upper_lower() {
        for c in b'A'..=b'Z' {
            assert!(is_upper(c));
            assert!(!is_lower(c));
        }
        for c in b'a'..=b'z' {
            assert!(is_lower(c));
            assert!(!is_upper(c));
        }
    }

    #[test]
    fn exhaustive_invariants() {
        for c in 0u8..=255 {
            assert_eq!(
                is_alnum(c),
                is_alpha(c) || is_digit(c),
                "alnum invariant failed for {c}"
            );
            assert_eq!(
                is_alpha(c),
                is_upper(c) || is_lower(c),
                "alpha invariant failed for {c}"
            );
            if is_space(c) {
                assert!(!is_alnum(c), "space must not be alnum for {c}");
            }
        }
    }
}
