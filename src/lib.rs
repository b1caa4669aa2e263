//! # Contract Errors
//!
//! Validated error types for service-to-service error contracts.
//!
//! An error crossing a service boundary is identified by an [`ErrorType`]:
//! an [`ErrorCode`] from a closed set plus a `Namespace:Cause` name. Both
//! sides of the boundary rely on the name being well formed and on the
//! reserved `Default` namespace meaning exactly one thing, so error types
//! can only be obtained through validation.
//!
//! ## Rules
//!
//! 1. Names match `^(([A-Z][a-z0-9]+)+):(([A-Z][a-z0-9]+)+)$`
//! 2. The `Default` namespace holds only the built-in default error types,
//!    each bound to one code
//! 3. Any other namespace may use any code
//!
//! Rule 1 is checked first. Each rejection renders a fixed message, so
//! consumers that match on message text keep working.
//!
//! ## Quick Start
//!
//! ```rust
//! use contract_errors::{ErrorCode, ErrorType, Result};
//!
//! fn register(code: ErrorCode, name: String) -> Result<ErrorType> {
//!     ErrorType::new(code, name)
//! }
//!
//! let et = register(ErrorCode::CustomClient, "Billing:CardDeclined".into()).unwrap();
//! assert_eq!(et.to_string(), "Billing:CardDeclined (CUSTOM_CLIENT)");
//!
//! let err = register(ErrorCode::Internal, "Default:Oops".into()).unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "errors: error name with default namespace cannot use custom cause"
//! );
//! ```
//!
//! ## Compile-time Definitions
//!
//! ```rust
//! use contract_errors::{define_error_types, DEFAULT_NOT_FOUND, ErrorCode};
//!
//! define_error_types! {
//!     CARD_DECLINED = (CustomClient, "Billing:CardDeclined"),
//! }
//!
//! assert_eq!(DEFAULT_NOT_FOUND.code(), ErrorCode::NotFound);
//! assert_eq!(CARD_DECLINED.namespace(), "Billing");
//! ```
//!
//! ## Features
//!
//! - `trusted_debug`: Enable `ViolationLog::format_for_trusted_debug` (debug builds only)

#![warn(missing_docs)]
#![warn(clippy::all)]

use std::result;

pub mod codes;
pub mod convenience;
pub mod definitions;
pub mod grammar;
pub mod logging;
pub mod models;

pub use codes::*;
pub use definitions::*;
pub use grammar::{DEFAULT_NAMESPACE, NAME_PATTERN, NAME_SEPARATOR};
pub use logging::*;
pub use models::*;

/// Type alias for Results of error type construction.
pub type Result<T> = result::Result<T, ErrorTypeViolation>;
