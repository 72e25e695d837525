//! Error types and error handling for the front end.
//!
//! This module defines the error types raised while lexing and parsing.
//! It includes:
//!
//! - An error structure carrying the source line and file label
//! - Specific error variants for the lexer and the parser
//! - Helpful error names and suggestions for display

pub mod errors;

#[cfg(test)]
mod tests;
