//! Structured log entry for rejected error type definitions.
//!
//! # Properties
//!
//! - Borrows from `ErrorTypeViolation` with an explicit lifetime and cannot
//!   outlive it
//! - No heap allocation in accessors
//! - Free-text fields are bounded when written, since rejected names are
//!   untrusted input (plugin manifests, remote definitions)
//!
//! The crate never logs on its own. Callers hand this view to whatever
//! logging pipeline they run.

use crate::ErrorCode;
use smallvec::SmallVec;
use std::borrow::Cow;
use std::fmt;

/// Maximum length for any individual field in formatted output (DoS prevention)
const MAX_FIELD_OUTPUT_LEN: usize = 1024;

/// Truncation indicator appended to truncated strings
const TRUNCATION_INDICATOR: &str = "...[TRUNCATED]";

/// Structured view of a violation.
///
/// # Example
///
/// ```rust
/// # use contract_errors::{ErrorCode, ErrorType};
/// let err = ErrorType::new(ErrorCode::NotFound, "Default:Timeout").unwrap_err();
/// let log = err.log();
/// assert_eq!(log.kind(), "DEFAULT_CODE_MISMATCH");
/// assert_eq!(log.expected_code(), Some(ErrorCode::Timeout));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ViolationLog<'a> {
    kind: &'static str,
    code: ErrorCode,
    name: &'a str,
    expected_code: Option<ErrorCode>,
}

impl<'a> ViolationLog<'a> {
    #[inline]
    pub(crate) const fn new(
        kind: &'static str,
        code: ErrorCode,
        name: &'a str,
        expected_code: Option<ErrorCode>,
    ) -> Self {
        Self {
            kind,
            code,
            name,
            expected_code,
        }
    }

    /// Write a single log line without intermediate buffers.
    ///
    /// Format: `[KIND] code=CODE name='NAME'`, followed by
    /// ` expected_code=CODE` for code mismatches. The name is truncated to a
    /// bounded length.
    pub fn write_to(&self, f: &mut impl fmt::Write) -> fmt::Result {
        write!(
            f,
            "[{}] code={} name='{}'",
            self.kind,
            self.code,
            truncate_with_indicator(self.name)
        )?;

        if let Some(expected) = self.expected_code {
            write!(f, " expected_code={}", expected)?;
        }

        Ok(())
    }

    /// Key/value pairs for structured (JSON, logfmt) loggers.
    ///
    /// Values are not truncated here; bounding is up to the serializer.
    pub fn fields(&self) -> SmallVec<[(&'static str, &'a str); 4]> {
        let mut fields = SmallVec::new();
        fields.push(("kind", self.kind));
        fields.push(("code", self.code.as_str()));
        fields.push(("name", self.name));
        if let Some(expected) = self.expected_code {
            fields.push(("expected_code", expected.as_str()));
        }
        fields
    }

    /// Format into an owned line.
    ///
    /// Only available with the `trusted_debug` feature in debug builds, so
    /// untrusted names are not casually materialized in production paths.
    #[cfg(all(feature = "trusted_debug", debug_assertions))]
    pub fn format_for_trusted_debug(&self) -> String {
        let mut output = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_to(&mut output);
        output
    }

    #[inline]
    pub const fn kind(&self) -> &'static str {
        self.kind
    }

    #[inline]
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    #[inline]
    pub const fn name(&self) -> &'a str {
        self.name
    }

    #[inline]
    pub const fn expected_code(&self) -> Option<ErrorCode> {
        self.expected_code
    }
}

impl fmt::Display for ViolationLog<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}

/// Truncate a string for display to prevent DoS via extremely long input.
///
/// If the string exceeds MAX_FIELD_OUTPUT_LEN, it's truncated with an indicator
/// to make the truncation visible to operators.
///
/// Returns a Cow<str> to avoid allocation when no truncation is needed.
pub(crate) fn truncate_with_indicator(s: &str) -> Cow<'_, str> {
    if s.len() <= MAX_FIELD_OUTPUT_LEN {
        return Cow::Borrowed(s);
    }

    let max_content_len = MAX_FIELD_OUTPUT_LEN.saturating_sub(TRUNCATION_INDICATOR.len());

    // Last UTF-8 boundary at or before the limit
    let mut idx = max_content_len;
    while idx > 0 && !s.is_char_boundary(idx) {
        idx -= 1;
    }

    if idx == 0 {
        return Cow::Borrowed(TRUNCATION_INDICATOR);
    }

    let mut result = String::with_capacity(idx + TRUNCATION_INDICATOR.len());
    result.push_str(&s[..idx]);
    result.push_str(TRUNCATION_INDICATOR);
    Cow::Owned(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorType;

    fn render(log: &ViolationLog<'_>) -> String {
        let mut buffer = String::new();
        log.write_to(&mut buffer).unwrap();
        buffer
    }

    #[test]
    fn grammar_violation_line() {
        let err = ErrorType::new(ErrorCode::Conflict, ":PascalCase").unwrap_err();
        assert_eq!(
            render(&err.log()),
            "[NAME_GRAMMAR] code=CONFLICT name=':PascalCase'"
        );
    }

    #[test]
    fn mismatch_line_includes_expected_code() {
        let err = ErrorType::new(ErrorCode::Internal, "Default:NotFound").unwrap_err();
        assert_eq!(
            err.log().to_string(),
            "[DEFAULT_CODE_MISMATCH] code=INTERNAL name='Default:NotFound' expected_code=NOT_FOUND"
        );
    }

    #[test]
    fn fields_are_structured() {
        let err = ErrorType::new(ErrorCode::Timeout, "Default:CustomError").unwrap_err();
        let log = err.log();
        let fields = log.fields();
        assert_eq!(
            fields.as_slice(),
            &[
                ("kind", "DEFAULT_NAMESPACE_CUSTOM_CAUSE"),
                ("code", "TIMEOUT"),
                ("name", "Default:CustomError"),
            ]
        );
        assert!(!fields.spilled());
    }

    #[test]
    fn long_names_are_bounded() {
        let name = "x".repeat(MAX_FIELD_OUTPUT_LEN * 4);
        let err = ErrorType::new(ErrorCode::Internal, name).unwrap_err();
        let line = render(&err.log());
        assert!(line.len() < MAX_FIELD_OUTPUT_LEN + 64);
        assert!(line.contains(TRUNCATION_INDICATOR));
        // Structured field stays untouched.
        assert_eq!(err.log().name().len(), MAX_FIELD_OUTPUT_LEN * 4);
    }

    #[cfg(all(feature = "trusted_debug", debug_assertions))]
    #[test]
    fn trusted_debug_matches_write_to() {
        let err = ErrorType::new(ErrorCode::Internal, "nope").unwrap_err();
        let log = err.log();
        assert_eq!(log.format_for_trusted_debug(), render(&log));
    }

    #[test]
    fn no_truncate_when_under_limit() {
        let s = "short string";
        let truncated = truncate_with_indicator(s);
        assert!(matches!(truncated, Cow::Borrowed(_)));
        assert_eq!(truncated, s);
    }

    #[test]
    fn exactly_at_limit() {
        let s = "a".repeat(MAX_FIELD_OUTPUT_LEN);
        let truncated = truncate_with_indicator(&s);
        assert!(matches!(truncated, Cow::Borrowed(_)));
        assert!(!truncated.ends_with(TRUNCATION_INDICATOR));
    }

    #[test]
    fn one_over_limit() {
        let s = "a".repeat(MAX_FIELD_OUTPUT_LEN + 1);
        let truncated = truncate_with_indicator(&s);
        assert!(matches!(truncated, Cow::Owned(_)));
        assert!(truncated.len() <= MAX_FIELD_OUTPUT_LEN);
        assert!(truncated.ends_with(TRUNCATION_INDICATOR));
    }

    #[test]
    fn truncate_utf8_boundary() {
        let s = "й".repeat(MAX_FIELD_OUTPUT_LEN);
        let truncated = truncate_with_indicator(&s);
        assert!(truncated.len() <= MAX_FIELD_OUTPUT_LEN);
        assert!(truncated.ends_with(TRUNCATION_INDICATOR));
    }

    #[test]
    fn truncate_emoji() {
        let s = "🔥".repeat(MAX_FIELD_OUTPUT_LEN);
        let truncated = truncate_with_indicator(&s);
        assert!(std::str::from_utf8(truncated.as_bytes()).is_ok());
        assert!(truncated.ends_with(TRUNCATION_INDICATOR));
    }
}
