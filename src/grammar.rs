//! Error name grammar.
//!
//! An error name is `Namespace:Cause`, where both halves are one or more
//! PascalCase segments: an uppercase ASCII letter followed by at least one
//! lowercase ASCII letter or digit.
//!
//! ```text
//! ^(([A-Z][a-z0-9]+)+):(([A-Z][a-z0-9]+)+)$
//! ```
//!
//! Two matchers exist for the same grammar:
//!
//! - `matches_name_pattern`: the compiled regular expression, used by the
//!   runtime constructor. The pattern text is part of the error contract
//!   (it appears verbatim in the rejection message).
//! - `is_valid_name`: a `const fn` byte walker, used by
//!   `ErrorType::const_new` so that constant definitions are checked at
//!   compile time.
//!
//! Property tests assert the two agree.

use regex::Regex;
use std::sync::OnceLock;

/// The naming grammar, as quoted in rejection messages.
pub const NAME_PATTERN: &str = "^(([A-Z][a-z0-9]+)+):(([A-Z][a-z0-9]+)+)$";

/// Separator between namespace and cause.
pub const NAME_SEPARATOR: char = ':';

/// Reserved namespace of the built-in error types.
pub const DEFAULT_NAMESPACE: &str = "Default";

/// Compiled name pattern (initialized once).
fn name_regex() -> &'static Regex {
    static NAME_REGEX: OnceLock<Regex> = OnceLock::new();
    NAME_REGEX.get_or_init(|| {
        Regex::new(NAME_PATTERN).expect("error name pattern is a valid regular expression")
    })
}

/// Check a name against the compiled `NAME_PATTERN`.
#[inline]
pub fn matches_name_pattern(name: &str) -> bool {
    name_regex().is_match(name)
}

/// Compile-time equivalent of `matches_name_pattern`.
pub const fn is_valid_name(name: &str) -> bool {
    let bytes = name.as_bytes();
    let Some(colon) = separator_index(bytes) else {
        return false;
    };
    is_pascal_case(bytes, 0, colon) && is_pascal_case(bytes, colon + 1, bytes.len())
}

/// Whether a name's namespace is the reserved `Default` namespace.
///
/// Only meaningful for names that already passed the grammar check.
pub const fn has_default_namespace(name: &str) -> bool {
    let bytes = name.as_bytes();
    let ns = DEFAULT_NAMESPACE.as_bytes();
    if bytes.len() <= ns.len() + 1 || bytes[ns.len()] != b':' {
        return false;
    }
    let mut i = 0;
    while i < ns.len() {
        if bytes[i] != ns[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// Split a validated name into `(namespace, cause)`.
///
/// A name without a separator yields itself as namespace and an empty cause.
#[inline]
pub fn split_name(name: &str) -> (&str, &str) {
    name.split_once(NAME_SEPARATOR).unwrap_or((name, ""))
}

/// Byte-wise string equality usable in const contexts.
pub(crate) const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// Index of the single separator, or `None` if there are zero or several.
const fn separator_index(bytes: &[u8]) -> Option<usize> {
    let mut found = None;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b':' {
            if found.is_some() {
                return None;
            }
            found = Some(i);
        }
        i += 1;
    }
    found
}

/// `([A-Z][a-z0-9]+)+` over `bytes[start..end]`.
const fn is_pascal_case(bytes: &[u8], start: usize, end: usize) -> bool {
    if start >= end || !bytes[start].is_ascii_uppercase() {
        return false;
    }
    // Characters seen since the last uppercase letter.
    let mut tail = 0;
    let mut i = start + 1;
    while i < end {
        let b = bytes[i];
        if b.is_ascii_uppercase() {
            if tail == 0 {
                return false;
            }
            tail = 0;
        } else if b.is_ascii_lowercase() || b.is_ascii_digit() {
            tail += 1;
        } else {
            return false;
        }
        i += 1;
    }
    tail > 0
}
