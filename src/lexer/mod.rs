// Author: Dustin Pilgrim
// License: MIT

use std::fmt;
use std::str::Chars;

use crate::ast::{Position, Span};
use crate::error::ParseError;

mod scanner;
mod tokenizer;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    // --- keywords ---
    Language,
    True,
    False,

    // --- literals ---
    Ident(String),
    /// Digit text, e.g. `007`.
    Int(String),
    /// String content without the surrounding quotes, escapes kept verbatim.
    String(String),

    // --- structure ---
    Colon,
    Semi,
    LBrace,
    RBrace,
    LBracket,
    RBracket,

    Eof,
}

/// The shape of a [`Token`] without its text, used in error expectations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Language,
    True,
    False,
    Ident,
    Int,
    String,
    Colon,
    Semi,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Eof,
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Language => TokenKind::Language,
            Token::True => TokenKind::True,
            Token::False => TokenKind::False,
            Token::Ident(_) => TokenKind::Ident,
            Token::Int(_) => TokenKind::Int,
            Token::String(_) => TokenKind::String,
            Token::Colon => TokenKind::Colon,
            Token::Semi => TokenKind::Semi,
            Token::LBrace => TokenKind::LBrace,
            Token::RBrace => TokenKind::RBrace,
            Token::LBracket => TokenKind::LBracket,
            Token::RBracket => TokenKind::RBracket,
            Token::Eof => TokenKind::Eof,
        }
    }

    /// Whether this token can open a literal.
    pub fn starts_literal(&self) -> bool {
        matches!(
            self,
            Token::String(_) | Token::Int(_) | Token::True | Token::False | Token::LBracket
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TokenKind::Language => "'language'",
            TokenKind::True => "'true'",
            TokenKind::False => "'false'",
            TokenKind::Ident => "identifier",
            TokenKind::Int => "integer",
            TokenKind::String => "string",
            TokenKind::Colon => "':'",
            TokenKind::Semi => "';'",
            TokenKind::LBrace => "'{'",
            TokenKind::RBrace => "'}'",
            TokenKind::LBracket => "'['",
            TokenKind::RBracket => "']'",
            TokenKind::Eof => "end of input",
        };
        f.write_str(text)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Ident(name) => write!(f, "identifier '{}'", name),
            Token::Int(digits) => write!(f, "integer '{}'", digits),
            Token::String(content) => write!(f, "string \"{}\"", content),
            other => fmt::Display::fmt(&other.kind(), f),
        }
    }
}

/// A token and the source region it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpannedToken {
    pub token: Token,
    pub span: Span,
}

/// Lazy tokenizer over a source string.
///
/// Whitespace and `//` line comments are skipped between tokens and never
/// surface as tokens. Also usable as an iterator, which yields `Eof` once and
/// then stops (or stops after the first error).
pub struct Lexer<'a> {
    input: Chars<'a>,
    peek: Option<char>,
    offset: usize,
    line: usize,
    column: usize,
    finished: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        let mut lexer = Lexer {
            input: input.chars(),
            peek: None,
            offset: 0,
            line: 1,
            column: 1,
            finished: false,
        };
        lexer.peek = lexer.input.next();
        lexer
    }

    /// Position of the next unread character.
    pub fn current_position(&self) -> Position {
        Position {
            offset: self.offset,
            line: self.line,
            column: self.column,
        }
    }

    /// Reads the next token. Keeps returning `Eof` once the input is exhausted.
    pub fn next_token(&mut self) -> Result<SpannedToken, ParseError> {
        tokenizer::next_token(self)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<SpannedToken, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let result = self.next_token();
        match &result {
            Ok(SpannedToken { token: Token::Eof, .. }) | Err(_) => self.finished = true,
            Ok(_) => {}
        }
        Some(result)
    }
}

/// Tokenizes the whole input, including the trailing `Eof`.
pub fn tokenize(input: &str) -> Result<Vec<SpannedToken>, ParseError> {
    Lexer::new(input).collect()
}
