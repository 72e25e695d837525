use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("let", TokenKind::Let);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("fun", TokenKind::Fun);
        map.insert("for", TokenKind::For);
        map.insert("return", TokenKind::Return);
        map.insert("end", TokenKind::End);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map.insert("nil", TokenKind::Nil);
        map.insert("print", TokenKind::Print);
        map.insert("in", TokenKind::In);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,

    OpenParen,
    CloseParen,
    Colon,
    Comma,
    Semicolon,

    // Reserved
    Let,
    If,
    Else,
    Fun,
    For,
    Return,
    End,
    True,
    False,
    Nil,
    Print,
    In,

    Identifier,
    Int,
    Float,
    String,

    Assignment, // =
    Equals,     // ==
    Plus,
    Dash,
    Slash,
    Star,
    Not,       // !
    NotEquals, // !=
    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    NewLine,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Payload carried by value tokens.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    None,
    /// Identifier name or string contents (without the quotes)
    Text(String),
    Int(i64),
    Float(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: TokenValue,
    pub line: u32,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.kind, &self.value) {
            (TokenKind::String, TokenValue::Text(text)) => write!(f, "\"{}\"", text),
            (_, TokenValue::Text(text)) => write!(f, "{}", text),
            (_, TokenValue::Int(value)) => write!(f, "{}", value),
            (_, TokenValue::Float(value)) => write!(f, "{:?}", value),
            (kind, TokenValue::None) => write!(f, "{}", kind.lexeme()),
        }
    }
}

impl TokenKind {
    /// Source spelling of fixed tokens. Value kinds fall back to their name.
    pub fn lexeme(&self) -> &'static str {
        match self {
            TokenKind::EOF => "end of input",
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::Colon => ":",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::Let => "let",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::Fun => "fun",
            TokenKind::For => "for",
            TokenKind::Return => "return",
            TokenKind::End => "end",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::Nil => "nil",
            TokenKind::Print => "print",
            TokenKind::In => "in",
            TokenKind::Identifier => "identifier",
            TokenKind::Int => "integer",
            TokenKind::Float => "float",
            TokenKind::String => "string",
            TokenKind::Assignment => "=",
            TokenKind::Equals => "==",
            TokenKind::Plus => "+",
            TokenKind::Dash => "-",
            TokenKind::Slash => "/",
            TokenKind::Star => "*",
            TokenKind::Not => "!",
            TokenKind::NotEquals => "!=",
            TokenKind::Less => "<",
            TokenKind::LessEquals => "<=",
            TokenKind::Greater => ">",
            TokenKind::GreaterEquals => ">=",
            TokenKind::NewLine => "newline",
        }
    }
}

impl Token {
    pub fn new(kind: TokenKind, line: u32) -> Token {
        Token {
            kind,
            value: TokenValue::None,
            line,
        }
    }

    pub fn identifier(name: &str, line: u32) -> Token {
        Token {
            kind: TokenKind::Identifier,
            value: TokenValue::Text(name.to_string()),
            line,
        }
    }

    pub fn string(contents: &str, line: u32) -> Token {
        Token {
            kind: TokenKind::String,
            value: TokenValue::Text(contents.to_string()),
            line,
        }
    }

    pub fn int(value: i64, line: u32) -> Token {
        Token {
            kind: TokenKind::Int,
            value: TokenValue::Int(value),
            line,
        }
    }

    pub fn float(value: f64, line: u32) -> Token {
        Token {
            kind: TokenKind::Float,
            value: TokenValue::Float(value),
            line,
        }
    }

    fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    /// Whether this token may terminate a statement.
    pub fn is_separator(&self) -> bool {
        self.is_one_of_many(&[TokenKind::NewLine, TokenKind::Semicolon, TokenKind::EOF])
    }

    /// Text payload of identifiers and strings.
    pub fn text(&self) -> Option<&str> {
        match &self.value {
            TokenValue::Text(text) => Some(text),
            _ => None,
        }
    }
}
