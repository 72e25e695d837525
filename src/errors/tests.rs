//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip, Phase};
use crate::Position;
use std::rc::Rc;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position(10, Rc::new("test.fz".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_phase(), Phase::Lexer);
}

#[test]
fn test_error_position() {
    let pos = Position(42, Rc::new("test.fz".to_string()));
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: ")".to_string(),
        },
        pos.clone(),
    );

    assert_eq!(error.get_position(), &pos);
    assert_eq!(error.get_line(), 42);
}

#[test]
fn test_error_display() {
    let error = Error::new(
        ErrorImpl::ExpectedSeparator {
            token: "\"s\"".to_string(),
        },
        Position(3, Rc::new("test.fz".to_string())),
    );

    assert_eq!(
        error.to_string(),
        "expected a ';', found \"\\\"s\\\"\" at test.fz:3"
    );
}

#[test]
fn test_unterminated_grouping_error() {
    let error = Error::new(
        ErrorImpl::UnterminatedGrouping,
        Position(1, Rc::new("test.fz".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnterminatedGrouping");
    assert_eq!(error.get_phase(), Phase::Parser);
    assert_eq!(error.get_kind().to_string(), "unterminated grouping");
}

#[test]
fn test_invalid_assignment_target_error() {
    let error = Error::new(
        ErrorImpl::InvalidAssignmentTarget,
        Position(1, Rc::new("test.fz".to_string())),
    );

    assert_eq!(error.get_error_name(), "InvalidAssignmentTarget");
    assert_eq!(error.get_kind().to_string(), "left operand must be name");
}

#[test]
fn test_nesting_too_deep_error() {
    let error = Error::new(
        ErrorImpl::NestingTooDeep { limit: 256 },
        Position(3, Rc::new("test.fz".to_string())),
    );

    assert_eq!(error.get_phase(), Phase::Parser);
    assert_eq!(error.to_string(), "expression nested deeper than 256 levels at test.fz:3");
    assert!(matches!(error.get_tip(), ErrorTip::Suggestion(_)));
}

#[test]
fn test_lexer_error_phases() {
    let kinds = vec![
        ErrorImpl::UnterminatedString,
        ErrorImpl::MalformedNumber {
            token: "123n".to_string(),
        },
        ErrorImpl::NumberParseError {
            token: "99999999999999999999".to_string(),
        },
    ];

    for kind in kinds {
        let error = Error::new(kind, Position(0, Rc::new("test.fz".to_string())));
        assert_eq!(error.get_phase(), Phase::Lexer);
    }
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position(0, Rc::new("test.fz".to_string())),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::ExpectedCloseParen {
            token: "newline".to_string(),
        },
        Position(0, Rc::new("test.fz".to_string())),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("expected a ')'")),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
