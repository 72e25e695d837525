use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{errors::errors::{Error, ErrorImpl}, Position, MK_TOKEN};

use super::tokens::{Token, TokenKind, TokenValue, RESERVED_LOOKUP};

lazy_static! {
    static ref SYMBOL_PATTERN: Regex = Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*").unwrap();
    static ref NUMBER_PATTERN: Regex = Regex::new("^[0-9]+(\\.[0-9]+)?").unwrap();
}

/// Cursor-based scanner producing one token per call.
///
/// `start` marks the beginning of the token under construction and `current`
/// the next unread byte; both always sit on `char` boundaries.
#[derive(Clone)]
pub struct Lexer {
    source: String,
    start: usize,
    current: usize,
    line: u32,
    file: Rc<String>,
    finished: bool,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            source,
            start: 0,
            current: 0,
            line: 1,
            file: file_name,
            finished: false,
        }
    }

    /// Scans the next token. Once the source is exhausted every call returns `EOF`.
    pub fn next_token(&mut self) -> Result<Token, Error> {
        self.skip_whitespace();
        self.start = self.current;

        let c = match self.advance() {
            Some(c) => c,
            None => return Ok(MK_TOKEN!(TokenKind::EOF, self.line)),
        };

        if is_alpha(c) {
            return Ok(self.symbol());
        }
        if c.is_ascii_digit() {
            return self.number();
        }

        let kind = match c {
            '(' => TokenKind::OpenParen,
            ')' => TokenKind::CloseParen,
            ';' => TokenKind::Semicolon,
            ':' => TokenKind::Colon,
            ',' => TokenKind::Comma,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Dash,
            '/' => TokenKind::Slash,
            '*' => TokenKind::Star,
            '=' => self.either('=', TokenKind::Equals, TokenKind::Assignment),
            '!' => self.either('=', TokenKind::NotEquals, TokenKind::Not),
            '<' => self.either('=', TokenKind::LessEquals, TokenKind::Less),
            '>' => self.either('=', TokenKind::GreaterEquals, TokenKind::Greater),
            '"' => return self.string(),
            '\n' => {
                let token = MK_TOKEN!(TokenKind::NewLine, self.line);
                self.line += 1;
                return Ok(token);
            }
            _ => {
                return Err(self.error(ErrorImpl::UnrecognisedToken {
                    token: c.to_string(),
                }))
            }
        };

        Ok(MK_TOKEN!(kind, self.line))
    }

    /// Drains the lexer. The `EOF` token is always the last element.
    pub fn scan_all(&mut self) -> Result<Vec<Token>, Error> {
        let mut tokens = vec![];

        loop {
            let token = self.next_token()?;
            let at_eof = token.kind == TokenKind::EOF;
            tokens.push(token);

            if at_eof {
                return Ok(tokens);
            }
        }
    }

    pub fn at_eof(&self) -> bool {
        self.current >= self.source.len()
    }

    pub fn get_line(&self) -> u32 {
        self.line
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.current += c.len_utf8();
        Some(c)
    }

    fn peek(&self) -> Option<char> {
        self.source[self.current..].chars().next()
    }

    fn peek_next(&self) -> Option<char> {
        let mut chars = self.source[self.current..].chars();
        chars.next();
        chars.next()
    }

    fn either(&mut self, expected: char, matched: TokenKind, otherwise: TokenKind) -> TokenKind {
        if self.peek() == Some(expected) {
            self.advance();
            matched
        } else {
            otherwise
        }
    }

    fn skip_whitespace(&mut self) {
        loop {
            match self.peek() {
                Some(' ') | Some('\t') | Some('\r') => {
                    self.advance();
                }
                Some('/') if self.peek_next() == Some('/') => {
                    // Comment runs up to, not including, the newline
                    while !matches!(self.peek(), Some('\n') | None) {
                        self.advance();
                    }
                }
                _ => return,
            }
        }
    }

    fn symbol(&mut self) -> Token {
        if let Some(matched) = SYMBOL_PATTERN.find(&self.source[self.start..]) {
            self.current = self.start + matched.end();
        }

        let value = &self.source[self.start..self.current];

        if let Some(kind) = RESERVED_LOOKUP.get(value) {
            MK_TOKEN!(*kind, self.line)
        } else {
            MK_TOKEN!(TokenKind::Identifier, TokenValue::Text(String::from(value)), self.line)
        }
    }

    fn number(&mut self) -> Result<Token, Error> {
        if let Some(matched) = NUMBER_PATTERN.find(&self.source[self.start..]) {
            self.current = self.start + matched.end();
        }

        let matched = String::from(&self.source[self.start..self.current]);

        if let Some(c) = self.peek().filter(|c| is_alpha(*c)) {
            return Err(self.error(ErrorImpl::MalformedNumber {
                token: format!("{}{}", matched, c),
            }));
        }

        if matched.contains('.') {
            match matched.parse::<f64>() {
                Ok(value) => Ok(MK_TOKEN!(TokenKind::Float, TokenValue::Float(value), self.line)),
                Err(_) => Err(self.error(ErrorImpl::NumberParseError { token: matched })),
            }
        } else {
            match matched.parse::<i64>() {
                Ok(value) => Ok(MK_TOKEN!(TokenKind::Int, TokenValue::Int(value), self.line)),
                Err(_) => Err(self.error(ErrorImpl::NumberParseError { token: matched })),
            }
        }
    }

    fn string(&mut self) -> Result<Token, Error> {
        loop {
            match self.advance() {
                Some('"') => break,
                Some('\n') => self.line += 1,
                Some(_) => {}
                None => return Err(self.error(ErrorImpl::UnterminatedString)),
            }
        }

        let string_literal = String::from(&self.source[(self.start + 1)..(self.current - 1)]);

        Ok(MK_TOKEN!(TokenKind::String, TokenValue::Text(string_literal), self.line))
    }

    fn error(&self, error_impl: ErrorImpl) -> Error {
        Error::new(error_impl, Position(self.line, Rc::clone(&self.file)))
    }
}

impl Iterator for Lexer {
    type Item = Result<Token, Error>;

    /// Yields every token up to and including `EOF`, or up to the first error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let token = self.next_token();
        if !matches!(&token, Ok(token) if token.kind != TokenKind::EOF) {
            self.finished = true;
        }

        Some(token)
    }
}

fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);
    lex.scan_all()
}
