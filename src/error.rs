// Author: Dustin Pilgrim
// License: MIT

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::ast::Position;
use crate::lexer::{Token, TokenKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexicalErrorKind {
    /// A character outside every token class.
    UnexpectedCharacter,
    /// End of input reached inside a string literal.
    UnterminatedString,
}

impl fmt::Display for LexicalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexicalErrorKind::UnexpectedCharacter => f.write_str("Unexpected character"),
            LexicalErrorKind::UnterminatedString => f.write_str("Unterminated string starting with"),
        }
    }
}

/// The error returned by [`crate::parse`]. Parsing stops at the first one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("[langcfg] Lexical Error at {position}: {kind} '{character}'")]
    Lexical {
        position: Position,
        character: char,
        kind: LexicalErrorKind,
    },

    #[error(
        "[langcfg] Unexpected Token at {position}: found {found}, expected {}",
        describe_expected(.expected_one_of)
    )]
    UnexpectedToken {
        position: Position,
        found: Token,
        expected_one_of: Vec<TokenKind>,
    },

    #[error(
        "[langcfg] Unexpected EOF at {position}: expected {}",
        describe_expected(.expected_one_of)
    )]
    UnexpectedEndOfInput {
        position: Position,
        expected_one_of: Vec<TokenKind>,
    },

    #[error("[langcfg] Nesting Error at {position}: lists nested deeper than {limit}")]
    NestingLimitExceeded { position: Position, limit: usize },
}

impl ParseError {
    pub fn position(&self) -> Position {
        match self {
            ParseError::Lexical { position, .. }
            | ParseError::UnexpectedToken { position, .. }
            | ParseError::UnexpectedEndOfInput { position, .. }
            | ParseError::NestingLimitExceeded { position, .. } => *position,
        }
    }

    /// Stable numeric code: 1xx for lexical errors, 2xx for syntax errors.
    pub fn code(&self) -> u32 {
        match self {
            ParseError::Lexical { kind: LexicalErrorKind::UnterminatedString, .. } => 103,
            ParseError::Lexical { kind: LexicalErrorKind::UnexpectedCharacter, .. } => 104,
            ParseError::UnexpectedEndOfInput { .. } => 201,
            ParseError::UnexpectedToken { .. } => 205,
            ParseError::NestingLimitExceeded { .. } => 215,
        }
    }

    pub fn hint(&self) -> Option<&'static str> {
        match self {
            ParseError::Lexical { kind: LexicalErrorKind::UnterminatedString, .. } => {
                Some("Close the string with '\"'")
            }
            ParseError::Lexical { kind: LexicalErrorKind::UnexpectedCharacter, character, .. } => {
                Some(match *character {
                    ',' => "List items are separated by whitespace, not ','",
                    '/' => "Comments start with '//'",
                    '-' => "Identifiers may only contain letters and '_'",
                    c if c.is_alphanumeric() => "Identifiers may only contain ASCII letters and '_'",
                    _ => "Remove this character or put it inside a string",
                })
            }
            ParseError::UnexpectedToken { expected_one_of, .. }
            | ParseError::UnexpectedEndOfInput { expected_one_of, .. }
                if expected_one_of.contains(&TokenKind::Semi) =>
            {
                Some("Every pair ends with ';'")
            }
            ParseError::UnexpectedToken { .. } => Some("Check your syntax"),
            ParseError::UnexpectedEndOfInput { .. } => Some("A block or list was left open"),
            ParseError::NestingLimitExceeded { .. } => {
                Some("Flatten the list or raise ParseOptions::max_nesting_depth")
            }
        }
    }
}

fn describe_expected(kinds: &[TokenKind]) -> String {
    match kinds {
        [] => "nothing".to_string(),
        [only] => only.to_string(),
        _ => {
            let names: Vec<String> = kinds.iter().map(ToString::to_string).collect();
            format!("one of {}", names.join(", "))
        }
    }
}

/// Errors from loading and querying a [`crate::LanguageRegistry`].
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("[langcfg] File Error '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("[langcfg] Missing Key: language '{language}' has no '{key}'")]
    MissingKey { language: String, key: String },

    #[error("[langcfg] Type Error: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("[langcfg] Type Error: '{digits}' does not fit in {target}")]
    IntegerOverflow { digits: String, target: &'static str },

    #[error("[langcfg] Type Error for '{key}': {source}")]
    InvalidValue {
        key: String,
        #[source]
        source: Box<RegistryError>,
    },
}
