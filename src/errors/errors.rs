use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Error, Debug, Clone)]
#[error("{internal_error} at {position}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

/// Stage of the front end that raised an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Lexer,
    Parser,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_line(&self) -> u32 {
        self.position.0
    }

    pub fn get_phase(&self) -> Phase {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. }
            | ErrorImpl::UnterminatedString
            | ErrorImpl::MalformedNumber { .. }
            | ErrorImpl::NumberParseError { .. } => Phase::Lexer,
            ErrorImpl::UnexpectedToken { .. }
            | ErrorImpl::UnterminatedGrouping
            | ErrorImpl::ExpectedCloseParen { .. }
            | ErrorImpl::InvalidAssignmentTarget
            | ErrorImpl::ExpectedSeparator { .. }
            | ErrorImpl::NestingTooDeep { .. } => Phase::Parser,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::MalformedNumber { .. } => "MalformedNumber",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnterminatedGrouping => "UnterminatedGrouping",
            ErrorImpl::ExpectedCloseParen { .. } => "ExpectedCloseParen",
            ErrorImpl::InvalidAssignmentTarget => "InvalidAssignmentTarget",
            ErrorImpl::ExpectedSeparator { .. } => "ExpectedSeparator",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnterminatedString => {
                ErrorTip::Suggestion(String::from("Unterminated string, add a closing '\"'"))
            }
            ErrorImpl::MalformedNumber { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, identifiers cannot start with a digit",
                token
            )),
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, expected an expression",
                token
            )),
            ErrorImpl::UnterminatedGrouping => {
                ErrorTip::Suggestion(String::from("Unterminated grouping, add a closing ')'"))
            }
            ErrorImpl::ExpectedCloseParen { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, expected a ')'",
                token
            )),
            ErrorImpl::InvalidAssignmentTarget => ErrorTip::Suggestion(String::from(
                "Only names can be assigned to",
            )),
            ErrorImpl::ExpectedSeparator { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, did you miss a semicolon?",
                token
            )),
            ErrorImpl::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "Expressions cannot nest more than {} levels, split it with assignments",
                limit
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unterminated string")]
    UnterminatedString,
    #[error("invalid number: {token:?}")]
    MalformedNumber { token: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("cannot parse expression starting with {token:?}")]
    UnexpectedToken { token: String },
    #[error("unterminated grouping")]
    UnterminatedGrouping,
    #[error("expected a ')', found {token:?}")]
    ExpectedCloseParen { token: String },
    #[error("left operand must be name")]
    InvalidAssignmentTarget,
    #[error("expected a ';', found {token:?}")]
    ExpectedSeparator { token: String },
    #[error("expression nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}
