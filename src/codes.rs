//! Error codes - the closed set of categories an error type can carry.
//!
//! Every error crossing a service boundary is tagged with exactly one
//! `ErrorCode`. The set is frozen: consumers on the other side of the wire
//! map these codes to their own handling (retry policy, status mapping), so
//! adding a code is a contract change, not a local one.
//!
//! # Text Form
//!
//! Each code has a stable upper-snake-case string (`NOT_FOUND`,
//! `REQUEST_ENTITY_TOO_LARGE`, ...). `Display` and `as_str` write it without
//! allocating; `FromStr` accepts exactly those strings and nothing else.
//!
//! # Example
//!
//! ```rust
//! use contract_errors::ErrorCode;
//!
//! let code: ErrorCode = "NOT_FOUND".parse().unwrap();
//! assert_eq!(code, ErrorCode::NotFound);
//! assert_eq!(code.to_string(), "NOT_FOUND");
//! ```

use std::fmt;
use std::str::FromStr;

// ============================================================================
// Error Code
// ============================================================================

/// Category of an error in the service contract.
///
/// Discriminants start at 1 so that an unset/zero code is not representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ErrorCode {
    /// Caller is not allowed to perform the operation.
    PermissionDenied = 1,
    /// Request arguments are malformed or out of range.
    InvalidArgument = 2,
    /// Requested entity does not exist.
    NotFound = 3,
    /// Request conflicts with the current state of the target.
    Conflict = 4,
    /// Request payload exceeds what the server accepts.
    RequestEntityTooLarge = 5,
    /// System is not in a state required for the operation.
    FailedPrecondition = 6,
    /// Unexpected server-side failure.
    Internal = 7,
    /// Operation did not complete in time.
    Timeout = 8,
    /// Application-defined client error.
    CustomClient = 9,
    /// Application-defined server error.
    CustomServer = 10,
}

impl ErrorCode {
    /// Every code, in discriminant order.
    pub const ALL: [ErrorCode; 10] = [
        Self::PermissionDenied,
        Self::InvalidArgument,
        Self::NotFound,
        Self::Conflict,
        Self::RequestEntityTooLarge,
        Self::FailedPrecondition,
        Self::Internal,
        Self::Timeout,
        Self::CustomClient,
        Self::CustomServer,
    ];

    /// Stable wire/diagnostic representation.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PermissionDenied => "PERMISSION_DENIED",
            Self::InvalidArgument => "INVALID_ARGUMENT",
            Self::NotFound => "NOT_FOUND",
            Self::Conflict => "CONFLICT",
            Self::RequestEntityTooLarge => "REQUEST_ENTITY_TOO_LARGE",
            Self::FailedPrecondition => "FAILED_PRECONDITION",
            Self::Internal => "INTERNAL",
            Self::Timeout => "TIMEOUT",
            Self::CustomClient => "CUSTOM_CLIENT",
            Self::CustomServer => "CUSTOM_SERVER",
        }
    }

    /// Numeric value of the code (1-10).
    #[inline]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Const-compatible equality, used by compile-time validation.
    #[inline]
    pub(crate) const fn same_as(self, other: ErrorCode) -> bool {
        self as u8 == other as u8
    }

    /// Parse a code from its stable string form.
    ///
    /// # Errors
    ///
    /// Returns `ParseErrorCodeError` for anything other than one of the ten
    /// upper-snake-case names. Matching is exact: no trimming, no case folding.
    pub fn parse(text: &str) -> Result<Self, ParseErrorCodeError> {
        Self::ALL
            .into_iter()
            .find(|code| code.as_str() == text)
            .ok_or_else(|| ParseErrorCodeError {
                text: text.to_owned(),
            })
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErrorCode {
    type Err = ParseErrorCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ============================================================================
// Parse Error
// ============================================================================

/// Text did not name a known error code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorCodeError {
    text: String,
}

impl ParseErrorCodeError {
    /// The rejected input, verbatim.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for ParseErrorCodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "errors: unknown error code `{}`",
            crate::logging::truncate_with_indicator(&self.text)
        )
    }
}

impl std::error::Error for ParseErrorCodeError {}

// ============================================================================
// Tests
// ============================================================================
