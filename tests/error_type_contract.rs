//! Contract tests: every error code against every class of name.
//!
//! These pin the exact rejection messages, since consumers across service
//! boundaries match on them.

use contract_errors::{
    DEFAULT_ERROR_TYPES, ErrorCode, ErrorType, ErrorTypeViolation, definitions,
};

const GRAMMAR_MESSAGE: &str =
    "errors: error name does not match regexp `^(([A-Z][a-z0-9]+)+):(([A-Z][a-z0-9]+)+)$`";
const CUSTOM_CAUSE_MESSAGE: &str =
    "errors: error name with default namespace cannot use custom cause";
const MISMATCH_MESSAGE: &str = "errors: invalid combination of default error name and error code";

const INVALID_NAMES: &[(&str, &str)] = &[
    ("no namespace", ":PascalCase"),
    ("no cause", "PascalCase:"),
    ("no namespace nor cause", ":"),
    ("no colon", "PascalCase"),
    ("namespace with invalid case", "notPascalCase:PascalCase"),
    ("cause with invalid case", "PascalCase:notPascalCase"),
    ("name with three parts", "PascalCase:PascalCase:PascalCase"),
];

const CUSTOM_VALID_NAMES: &[&str] = &[
    "MyApplication:MyCustomError",
    "Aa:Bb",
    "A1:B2",
    "A1A1:B2B2",
    "Aa1Aa1:Bb2Bb2",
    "A1aA1a:B2bB2b",
];

// ============================================================================
// Default names
// ============================================================================

#[test]
fn default_names_accept_only_their_code() {
    for code in ErrorCode::ALL {
        for default in &DEFAULT_ERROR_TYPES {
            let result = ErrorType::new(code, default.name().to_owned());
            if default.code() == code {
                assert_eq!(result.as_ref(), Ok(default), "{code} / {default}");
            } else {
                let err = result.unwrap_err();
                assert_eq!(err.to_string(), MISMATCH_MESSAGE, "{code} / {default}");
                assert_eq!(err.expected_code(), Some(default.code()));
            }
        }
    }
}

#[test]
fn default_constants_round_trip() {
    for default in &DEFAULT_ERROR_TYPES {
        let rebuilt = ErrorType::new(default.code(), default.name().to_owned())
            .unwrap_or_else(|e| panic!("{default}: {e}"));
        assert_eq!(&rebuilt, default);
    }
}

#[test]
fn default_constants_are_exposed() {
    let expected = [
        (&definitions::DEFAULT_PERMISSION_DENIED, "Default:PermissionDenied (PERMISSION_DENIED)"),
        (&definitions::DEFAULT_INVALID_ARGUMENT, "Default:InvalidArgument (INVALID_ARGUMENT)"),
        (&definitions::DEFAULT_NOT_FOUND, "Default:NotFound (NOT_FOUND)"),
        (&definitions::DEFAULT_CONFLICT, "Default:Conflict (CONFLICT)"),
        (
            &definitions::DEFAULT_REQUEST_ENTITY_TOO_LARGE,
            "Default:RequestEntityTooLarge (REQUEST_ENTITY_TOO_LARGE)",
        ),
        (
            &definitions::DEFAULT_FAILED_PRECONDITION,
            "Default:FailedPrecondition (FAILED_PRECONDITION)",
        ),
        (&definitions::DEFAULT_INTERNAL, "Default:Internal (INTERNAL)"),
        (&definitions::DEFAULT_TIMEOUT, "Default:Timeout (TIMEOUT)"),
    ];
    for (et, display) in expected {
        assert_eq!(et.to_string(), display);
    }
}

// ============================================================================
// Custom names
// ============================================================================

#[test]
fn custom_valid_names_accept_every_code() {
    for code in ErrorCode::ALL {
        for name in CUSTOM_VALID_NAMES {
            let et = ErrorType::new(code, *name).unwrap_or_else(|e| panic!("{code} / {name}: {e}"));
            assert_eq!(et.code(), code);
            assert_eq!(et.name(), *name);
        }
    }
}

#[test]
fn invalid_names_fail_grammar_for_every_code() {
    for code in ErrorCode::ALL {
        for (case, name) in INVALID_NAMES {
            let err = ErrorType::new(code, *name).unwrap_err();
            assert_eq!(err.to_string(), GRAMMAR_MESSAGE, "{code} / {case}");
            assert!(matches!(err, ErrorTypeViolation::NameGrammar { .. }), "{case}");
            assert_eq!(err.name(), *name);
        }
    }
}

#[test]
fn default_namespace_with_custom_cause_fails_for_every_code() {
    for code in ErrorCode::ALL {
        let err = ErrorType::new(code, "Default:CustomError").unwrap_err();
        assert_eq!(err.to_string(), CUSTOM_CAUSE_MESSAGE, "{code}");
    }
}

#[test]
fn construction_is_deterministic() {
    for code in ErrorCode::ALL {
        for name in ["Default:NotFound", "Default:CustomError", "Aa:Bb", "bad"] {
            assert_eq!(ErrorType::new(code, name), ErrorType::new(code, name));
        }
    }
}
