//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use morefunc::foundation::{Error, ErrorContext, ErrorKind, Kind, Limit, Value};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_type_mismatch() {
    let err = Error::type_mismatch(Kind::Tuple, Kind::Int);
    assert!(matches!(err.kind, ErrorKind::TypeMismatch { .. }));
    assert_eq!(err.to_string(), "type mismatch: expected tuple, got int");
}

#[test]
fn error_missing_structure() {
    let err = Error::missing_structure(Value::from("k"));
    assert!(matches!(err.kind, ErrorKind::MissingStructure { .. }));
    assert!(err.to_string().contains('k'));
}

#[test]
fn error_missing_value() {
    let err = Error::missing_value(Value::Int(9));
    assert!(matches!(err.kind, ErrorKind::MissingValue { .. }));
    assert!(err.to_string().contains('9'));
}

#[test]
fn error_malformed_pair() {
    let err = Error::malformed_pair(Value::tuple([1, 2, 3]));
    assert!(matches!(err.kind, ErrorKind::MalformedPair(_)));
    assert!(err.to_string().contains("(1, 2, 3)"));
}

#[test]
fn error_unknown_role() {
    let err = Error::unknown_role("baz");
    assert!(matches!(err.kind, ErrorKind::UnknownRole(ref r) if r == "baz"));
}

#[test]
fn error_limit_exceeded() {
    let err = Error::limit_exceeded(Limit::MaxDepth { limit: 3 });
    assert!(err.to_string().contains('3'));
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn context_is_rendered_after_kind() {
    let err = Error::missing_structure(Value::from("leaf"))
        .with_context(ErrorContext::new().with_key("outer").with_key("inner"));
    assert_eq!(
        err.to_string(),
        "no structure recorded for key leaf at outer -> inner"
    );
}

#[test]
fn within_prepends_outer_keys() {
    let err = Error::type_mismatch(Kind::Map, Kind::Int)
        .within(&Value::from("b"))
        .within(&Value::from("a"));

    let path = err.context.unwrap().path;
    assert_eq!(path, vec![Value::from("a"), Value::from("b")]);
}

#[test]
fn no_context_renders_kind_only() {
    let err = Error::unknown_role("x");
    assert_eq!(err.to_string(), "unknown role: x");
}
