//! Macros for declaring error types as compile-time constants.
//!
//! Constants declared this way go through `ErrorType::const_new`, so a
//! malformed name or a misuse of the `Default` namespace fails the build
//! instead of surfacing as a runtime violation.
//!
//! ```rust
//! use contract_errors::{define_error_types, ErrorCode};
//!
//! define_error_types! {
//!     DATASET_MISSING = (NotFound, "Catalog:DatasetMissing"),
//!     DATASET_LOCKED  = (Conflict, "Catalog:DatasetLocked"),
//! }
//!
//! assert_eq!(DATASET_LOCKED.code(), ErrorCode::Conflict);
//! ```
//!
//! ```rust,compile_fail
//! # use contract_errors::define_error_type;
//! // Reserved namespace with an unknown cause
//! define_error_type!(SHADOWED, Internal, "Default:Shadowed");
//! let _ = SHADOWED.code();
//! ```

/// Define a single error type constant.
///
/// The code is given as an `ErrorCode` variant name.
///
/// ```rust
/// # use contract_errors::define_error_type;
/// define_error_type!(QUOTA_EXCEEDED, RequestEntityTooLarge, "Storage:QuotaExceeded");
/// assert_eq!(QUOTA_EXCEEDED.namespace(), "Storage");
/// ```
#[macro_export]
macro_rules! define_error_type {
    ($(#[$meta:meta])* $name:ident, $code:ident, $error_name:literal) => {
        $(#[$meta])*
        pub const $name: $crate::ErrorType =
            $crate::ErrorType::const_new($crate::ErrorCode::$code, $error_name);
    };
}

/// Define several error type constants at once.
#[macro_export]
macro_rules! define_error_types {
    ($( $(#[$meta:meta])* $name:ident = ($code:ident, $error_name:literal) ),+ $(,)?) => {
        $(
            $crate::define_error_type!($(#[$meta])* $name, $code, $error_name);
        )+
    };
}
