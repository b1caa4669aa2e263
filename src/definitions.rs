//! Built-in default error types.
//!
//! # Reserved Namespace
//!
//! The `Default` namespace belongs to this table. Each entry binds one
//! canonical name to one code; no other name may use the namespace, and no
//! other code may use these names. Application-defined errors pick their own
//! namespace and may use any code, including `CUSTOM_CLIENT` and
//! `CUSTOM_SERVER` which have no default entry.
//!
//! # Governance
//!
//! The table is compile-time data. The `DEFAULT_*` constants are built with
//! `ErrorType::const_new`, which checks each one against the table, so a
//! constant drifting from its table entry fails the build.

use crate::{define_error_types, ErrorCode, ErrorType};

/// Canonical (code, name) pairs of the `Default` namespace.
const DEFAULT_TABLE: [(ErrorCode, &str); 8] = [
    (ErrorCode::PermissionDenied, "Default:PermissionDenied"),
    (ErrorCode::InvalidArgument, "Default:InvalidArgument"),
    (ErrorCode::NotFound, "Default:NotFound"),
    (ErrorCode::Conflict, "Default:Conflict"),
    (ErrorCode::RequestEntityTooLarge, "Default:RequestEntityTooLarge"),
    (ErrorCode::FailedPrecondition, "Default:FailedPrecondition"),
    (ErrorCode::Internal, "Default:Internal"),
    (ErrorCode::Timeout, "Default:Timeout"),
];

/// Code bound to a default name, or `None` if `name` is not a default name.
pub const fn default_code_for(name: &str) -> Option<ErrorCode> {
    let mut i = 0;
    while i < DEFAULT_TABLE.len() {
        let (code, default_name) = DEFAULT_TABLE[i];
        if crate::grammar::str_eq(name, default_name) {
            return Some(code);
        }
        i += 1;
    }
    None
}

// -----------------------------------------------------------------------------
// Default error types
// -----------------------------------------------------------------------------
define_error_types! {
    /// `Default:PermissionDenied` (PERMISSION_DENIED)
    DEFAULT_PERMISSION_DENIED = (PermissionDenied, "Default:PermissionDenied"),
    /// `Default:InvalidArgument` (INVALID_ARGUMENT)
    DEFAULT_INVALID_ARGUMENT = (InvalidArgument, "Default:InvalidArgument"),
    /// `Default:NotFound` (NOT_FOUND)
    DEFAULT_NOT_FOUND = (NotFound, "Default:NotFound"),
    /// `Default:Conflict` (CONFLICT)
    DEFAULT_CONFLICT = (Conflict, "Default:Conflict"),
    /// `Default:RequestEntityTooLarge` (REQUEST_ENTITY_TOO_LARGE)
    DEFAULT_REQUEST_ENTITY_TOO_LARGE = (RequestEntityTooLarge, "Default:RequestEntityTooLarge"),
    /// `Default:FailedPrecondition` (FAILED_PRECONDITION)
    DEFAULT_FAILED_PRECONDITION = (FailedPrecondition, "Default:FailedPrecondition"),
    /// `Default:Internal` (INTERNAL)
    DEFAULT_INTERNAL = (Internal, "Default:Internal"),
    /// `Default:Timeout` (TIMEOUT)
    DEFAULT_TIMEOUT = (Timeout, "Default:Timeout"),
}

/// Every default error type, in table order.
pub static DEFAULT_ERROR_TYPES: [ErrorType; 8] = [
    DEFAULT_PERMISSION_DENIED,
    DEFAULT_INVALID_ARGUMENT,
    DEFAULT_NOT_FOUND,
    DEFAULT_CONFLICT,
    DEFAULT_REQUEST_ENTITY_TOO_LARGE,
    DEFAULT_FAILED_PRECONDITION,
    DEFAULT_INTERNAL,
    DEFAULT_TIMEOUT,
];

/// Look up a default error type by its full name.
pub fn default_error_type(name: &str) -> Option<&'static ErrorType> {
    DEFAULT_ERROR_TYPES.iter().find(|et| et.name() == name)
}

/// The default error type bound to `code`, if it has one.
pub fn default_for_code(code: ErrorCode) -> Option<&'static ErrorType> {
    DEFAULT_ERROR_TYPES.iter().find(|et| et.code() == code)
}
