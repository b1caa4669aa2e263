//! Validated error types and the violations raised while constructing them.
//!
//! # Construction APIs
//!
//! - `ErrorType::new`: runtime validation, returns `Result`, never panics.
//!   This is the entry point for error types defined from configuration,
//!   plugins, or any other dynamic source.
//! - `ErrorType::const_new`: compile-time validation for `const` items. A
//!   violation in a const context is a build failure.
//!
//! Both apply the same rules, in order, stopping at the first failure:
//!
//! 1. The name must match `NAME_PATTERN`.
//! 2. A name in the `Default` namespace must be one of the built-in default
//!    names, paired with that name's code.
//!
//! # Message Stability
//!
//! Consumers on the other side of a service boundary match on the rendered
//! messages, so each violation renders a fixed string with no interpolated
//! input. The offending name and codes are available as structured fields
//! instead.

use crate::codes::ErrorCode;
use crate::definitions;
use crate::grammar::{self, NAME_PATTERN};
use crate::logging::ViolationLog;
use std::borrow::Cow;
use std::fmt;

/// Message for names that do not match the naming grammar.
pub const NAME_GRAMMAR_MESSAGE: &str =
    "errors: error name does not match regexp `^(([A-Z][a-z0-9]+)+):(([A-Z][a-z0-9]+)+)$`";

/// Message for unknown causes in the reserved `Default` namespace.
pub const DEFAULT_NAMESPACE_CUSTOM_CAUSE_MESSAGE: &str =
    "errors: error name with default namespace cannot use custom cause";

/// Message for a default name paired with a code other than its own.
pub const DEFAULT_CODE_MISMATCH_MESSAGE: &str =
    "errors: invalid combination of default error name and error code";

// ============================================================================
// Error Type
// ============================================================================

/// An error code paired with a validated `Namespace:Cause` name.
///
/// Values are immutable and can only be obtained through `new`, `const_new`,
/// or the predefined constants in `definitions`.
///
/// # Example
///
/// ```rust
/// use contract_errors::{ErrorCode, ErrorType};
///
/// let missing = ErrorType::new(ErrorCode::NotFound, "Catalog:DatasetMissing").unwrap();
/// assert_eq!(missing.namespace(), "Catalog");
/// assert_eq!(missing.cause(), "DatasetMissing");
/// assert_eq!(missing.to_string(), "Catalog:DatasetMissing (NOT_FOUND)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ErrorType {
    code: ErrorCode,
    name: Cow<'static, str>,
}

impl ErrorType {
    /// Validate `name` and pair it with `code`.
    ///
    /// # Errors
    ///
    /// - `ErrorTypeViolation::NameGrammar` if the name does not match
    ///   `NAME_PATTERN`. Checked first, even for `Default:`-prefixed input.
    /// - `ErrorTypeViolation::DefaultNamespaceCustomCause` if the namespace
    ///   is `Default` but the name is not a built-in default.
    /// - `ErrorTypeViolation::DefaultCodeMismatch` if the name is a built-in
    ///   default but `code` is not its code.
    ///
    /// The rejected name is handed back inside the violation.
    pub fn new(
        code: ErrorCode,
        name: impl Into<Cow<'static, str>>,
    ) -> Result<Self, ErrorTypeViolation> {
        let name = name.into();

        if !grammar::matches_name_pattern(&name) {
            return Err(ErrorTypeViolation::NameGrammar { code, name });
        }

        if grammar::has_default_namespace(&name) {
            match definitions::default_code_for(&name) {
                None => {
                    return Err(ErrorTypeViolation::DefaultNamespaceCustomCause { code, name });
                }
                Some(expected) if expected != code => {
                    return Err(ErrorTypeViolation::DefaultCodeMismatch {
                        code,
                        name,
                        expected,
                    });
                }
                Some(_) => {}
            }
        }

        Ok(Self { code, name })
    }

    /// Validate at compile time (infallible in const contexts).
    ///
    /// # Panics
    ///
    /// Panics with the same message `new` would return, under the same
    /// conditions. In a `const` item the panic is a compile error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use contract_errors::{ErrorCode, ErrorType};
    ///
    /// const DATASET_LOCKED: ErrorType =
    ///     ErrorType::const_new(ErrorCode::Conflict, "Catalog:DatasetLocked");
    /// assert_eq!(DATASET_LOCKED.code(), ErrorCode::Conflict);
    /// ```
    ///
    /// ```rust,compile_fail
    /// use contract_errors::{ErrorCode, ErrorType};
    ///
    /// const BAD: ErrorType = ErrorType::const_new(ErrorCode::Conflict, "catalog:locked");
    /// let _ = BAD.code();
    /// ```
    pub const fn const_new(code: ErrorCode, name: &'static str) -> Self {
        assert!(
            grammar::is_valid_name(name),
            "errors: error name does not match regexp `^(([A-Z][a-z0-9]+)+):(([A-Z][a-z0-9]+)+)$`"
        );

        if grammar::has_default_namespace(name) {
            match definitions::default_code_for(name) {
                Some(expected) => assert!(
                    expected.same_as(code),
                    "errors: invalid combination of default error name and error code"
                ),
                None => panic!("errors: error name with default namespace cannot use custom cause"),
            }
        }

        Self {
            code,
            name: Cow::Borrowed(name),
        }
    }

    /// Error code.
    #[inline]
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    /// Full `Namespace:Cause` name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Text before the separator.
    #[inline]
    pub fn namespace(&self) -> &str {
        grammar::split_name(&self.name).0
    }

    /// Text after the separator.
    #[inline]
    pub fn cause(&self) -> &str {
        grammar::split_name(&self.name).1
    }

    /// Whether this is one of the built-in default error types.
    #[inline]
    pub fn is_default(&self) -> bool {
        grammar::has_default_namespace(&self.name)
    }
}

impl fmt::Display for ErrorType {
    /// Format: `{name} ({CODE})`, e.g. `Default:NotFound (NOT_FOUND)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}

// ============================================================================
// Violations
// ============================================================================

/// Reason a (code, name) pair was rejected.
///
/// `Display` renders a fixed message per variant; the fields are for
/// structured logging and programmatic handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorTypeViolation {
    /// Name does not match `NAME_PATTERN`.
    NameGrammar {
        code: ErrorCode,
        name: Cow<'static, str>,
    },
    /// Name uses the `Default` namespace with a cause that is not built in.
    DefaultNamespaceCustomCause {
        code: ErrorCode,
        name: Cow<'static, str>,
    },
    /// Name is a built-in default, but the code is not the one it is bound to.
    DefaultCodeMismatch {
        code: ErrorCode,
        name: Cow<'static, str>,
        expected: ErrorCode,
    },
}

impl ErrorTypeViolation {
    /// Stable machine-readable label for the violation kind.
    #[inline]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::NameGrammar { .. } => "NAME_GRAMMAR",
            Self::DefaultNamespaceCustomCause { .. } => "DEFAULT_NAMESPACE_CUSTOM_CAUSE",
            Self::DefaultCodeMismatch { .. } => "DEFAULT_CODE_MISMATCH",
        }
    }

    /// Fixed human-readable message (same text as `Display`).
    #[inline]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::NameGrammar { .. } => NAME_GRAMMAR_MESSAGE,
            Self::DefaultNamespaceCustomCause { .. } => DEFAULT_NAMESPACE_CUSTOM_CAUSE_MESSAGE,
            Self::DefaultCodeMismatch { .. } => DEFAULT_CODE_MISMATCH_MESSAGE,
        }
    }

    /// Code that was requested.
    #[inline]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::NameGrammar { code, .. }
            | Self::DefaultNamespaceCustomCause { code, .. }
            | Self::DefaultCodeMismatch { code, .. } => *code,
        }
    }

    /// Name that was rejected, verbatim.
    #[inline]
    pub fn name(&self) -> &str {
        match self {
            Self::NameGrammar { name, .. }
            | Self::DefaultNamespaceCustomCause { name, .. }
            | Self::DefaultCodeMismatch { name, .. } => name,
        }
    }

    /// Code the name is bound to, for `DefaultCodeMismatch`.
    #[inline]
    pub const fn expected_code(&self) -> Option<ErrorCode> {
        match self {
            Self::DefaultCodeMismatch { expected, .. } => Some(*expected),
            _ => None,
        }
    }

    /// Pattern the name is checked against, for `NameGrammar`.
    #[inline]
    pub const fn expected_pattern(&self) -> Option<&'static str> {
        match self {
            Self::NameGrammar { .. } => Some(NAME_PATTERN),
            _ => None,
        }
    }

    /// Take back ownership of the rejected name.
    pub fn into_name(self) -> Cow<'static, str> {
        match self {
            Self::NameGrammar { name, .. }
            | Self::DefaultNamespaceCustomCause { name, .. }
            | Self::DefaultCodeMismatch { name, .. } => name,
        }
    }

    /// Structured log view borrowing from this violation.
    ///
    /// The returned `ViolationLog` cannot outlive the violation.
    #[inline]
    pub fn log(&self) -> ViolationLog<'_> {
        ViolationLog::new(self.kind(), self.code(), self.name(), self.expected_code())
    }

    /// Callback-style access to `log`.
    ///
    /// ```rust
    /// # use contract_errors::{ErrorCode, ErrorType};
    /// let err = ErrorType::new(ErrorCode::Internal, "broken").unwrap_err();
    /// let line = err.with_log(|log| {
    ///     let mut buffer = String::new();
    ///     log.write_to(&mut buffer).unwrap();
    ///     buffer
    /// });
    /// assert_eq!(line, "[NAME_GRAMMAR] code=INTERNAL name='broken'");
    /// ```
    #[inline]
    pub fn with_log<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&ViolationLog<'_>) -> R,
    {
        let log = self.log();
        f(&log)
    }
}

impl fmt::Display for ErrorTypeViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ErrorTypeViolation {}

// ============================================================================
// Tests
// ============================================================================
