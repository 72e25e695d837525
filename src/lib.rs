#![allow(clippy::module_inception)]

use std::{fmt::Display, rc::Rc};

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// A 1-based source line together with the label of the file it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.1, self.0)
    }
}

/// Returns the text of the given 1-based line, without its line terminator.
pub fn get_line_at(source: &str, line: u32) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source
        .split('\n')
        .nth((line - 1) as usize)
        .map(|text| text.strip_suffix('\r').unwrap_or(text))
}


pub fn display_error(error: &Error, source: &str) {
    print!("{}", render_error(error, source));
}

/// Formats an error the way the command line reports it:
///
/// ```text
/// Error: UnterminatedGrouping (Unterminated grouping, add a closing ')')
/// -> main.fz
///   |
/// 1 | (x + y
///   | ^^^^^^
/// ```
pub fn render_error(error: &Error, source: &str) -> String {
    let position = error.get_position();
    let line_string = position.0.to_string();
    let padding = line_string.len() + 2;

    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    out.push_str(&format!("-> {}\n", position.1));
    out.push_str(&format!("{:>padding$}\n", "|"));

    if let Some(line_text) = get_line_at(source, position.0) {
        let line_text_removed = remove_starting_whitespace(line_text).trim_end();

        out.push_str(&format!("{} | {}\n", line_string, line_text_removed));

        let arrows = line_text_removed.chars().count().max(1);
        out.push_str(&format!("{:>padding$} {}\n", "|", "^".repeat(arrows)));
    }

    out
}

fn remove_starting_whitespace(string: &str) -> &str {
    string.trim_start_matches([' ', '\t'])
}
