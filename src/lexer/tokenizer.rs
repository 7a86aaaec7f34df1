// Author: Dustin Pilgrim
// License: MIT

use super::*;
use super::scanner::{bump, skip_whitespace_and_comments};
use crate::error::LexicalErrorKind;

pub(super) fn next_token(lexer: &mut Lexer) -> Result<SpannedToken, ParseError> {
    skip_whitespace_and_comments(lexer);

    let start = lexer.current_position();
    let token = match lexer.peek {
        Some(':') => tokenize_symbol(lexer, Token::Colon),
        Some(';') => tokenize_symbol(lexer, Token::Semi),
        Some('{') => tokenize_symbol(lexer, Token::LBrace),
        Some('}') => tokenize_symbol(lexer, Token::RBrace),
        Some('[') => tokenize_symbol(lexer, Token::LBracket),
        Some(']') => tokenize_symbol(lexer, Token::RBracket),
        Some('"') => tokenize_string(lexer, start)?,
        Some(c) if c.is_ascii_digit() => tokenize_integer(lexer),
        Some(c) if is_identifier_char(c) => tokenize_identifier_or_keyword(lexer),
        Some(ch) => return Err(unexpected_char(start, ch)),
        None => Token::Eof,
    };

    Ok(SpannedToken {
        token,
        span: Span::new(start, lexer.current_position()),
    })
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn tokenize_symbol(lexer: &mut Lexer, token: Token) -> Token {
    bump(lexer);
    token
}

/// Scans a string body. `\"` and `\\` are consumed as pairs and kept verbatim,
/// so neither can close the string; any other backslash is an ordinary character.
fn tokenize_string(lexer: &mut Lexer, start: Position) -> Result<Token, ParseError> {
    bump(lexer); // opening quote
    let mut content = String::new();

    loop {
        match bump(lexer) {
            Some('"') => return Ok(Token::String(content)),
            Some('\\') => {
                content.push('\\');
                if let Some(next @ ('"' | '\\')) = lexer.peek {
                    content.push(next);
                    bump(lexer);
                }
            }
            Some(ch) => content.push(ch),
            None => {
                return Err(ParseError::Lexical {
                    position: start,
                    character: '"',
                    kind: LexicalErrorKind::UnterminatedString,
                });
            }
        }
    }
}

fn tokenize_integer(lexer: &mut Lexer) -> Token {
    let mut digits = String::new();

    while let Some(ch) = lexer.peek {
        if ch.is_ascii_digit() {
            digits.push(ch);
            bump(lexer);
        } else {
            break;
        }
    }

    Token::Int(digits)
}

fn tokenize_identifier_or_keyword(lexer: &mut Lexer) -> Token {
    let mut ident = String::new();

    while let Some(ch) = lexer.peek {
        if is_identifier_char(ch) {
            ident.push(ch);
            bump(lexer);
        } else {
            break;
        }
    }

    match ident.as_str() {
        "language" => Token::Language,
        "true" => Token::True,
        "false" => Token::False,
        _ => Token::Ident(ident),
    }
}

fn unexpected_char(position: Position, ch: char) -> ParseError {
    ParseError::Lexical {
        position,
        character: ch,
        kind: LexicalErrorKind::UnexpectedCharacter,
    }
}
