// Author: Dustin Pilgrim
// License: MIT

use tracing::{debug, trace};

use crate::ast::{Position, SourceFile};
use crate::error::ParseError;
use crate::lexer::{Lexer, SpannedToken, Token, TokenKind};
use crate::options::ParseOptions;

mod document;
mod literal;

/// Recursive-descent parser with one token of lookahead.
///
/// Each parser owns its lexer and output, so independent parses never share state.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    peek: SpannedToken,
    depth: usize,
    options: ParseOptions,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Result<Self, ParseError> {
        Self::with_options(input, ParseOptions::default())
    }

    pub fn with_options(input: &'a str, options: ParseOptions) -> Result<Self, ParseError> {
        let mut lexer = Lexer::new(input);
        let peek = lexer.next_token()?;
        Ok(Self {
            lexer,
            peek,
            depth: 0,
            options,
        })
    }

    pub(crate) fn bump(&mut self) -> Result<SpannedToken, ParseError> {
        let next = self.lexer.next_token()?;
        let curr = std::mem::replace(&mut self.peek, next);
        trace!(token = %curr.token, at = %curr.span.start, "consumed token");
        Ok(curr)
    }

    pub(crate) fn peek(&self) -> &SpannedToken {
        &self.peek
    }

    pub(crate) fn at(&self, kind: TokenKind) -> bool {
        self.peek.token.kind() == kind
    }

    /// Consume a token of `kind` or fail with the lookahead as the culprit.
    pub(crate) fn expect(&mut self, kind: TokenKind) -> Result<SpannedToken, ParseError> {
        if self.at(kind) {
            self.bump()
        } else {
            Err(self.unexpected(&[kind]))
        }
    }

    /// Error describing the current lookahead. Reaching `Eof` here means a
    /// construct was left open.
    pub(crate) fn unexpected(&self, expected: &[TokenKind]) -> ParseError {
        let position = self.peek.span.start;
        match &self.peek.token {
            Token::Eof => ParseError::UnexpectedEndOfInput {
                position,
                expected_one_of: expected.to_vec(),
            },
            found => ParseError::UnexpectedToken {
                position,
                found: found.clone(),
                expected_one_of: expected.to_vec(),
            },
        }
    }

    pub(crate) fn enter_list(&mut self, position: Position) -> Result<(), ParseError> {
        if self.depth >= self.options.max_nesting_depth {
            return Err(ParseError::NestingLimitExceeded {
                position,
                limit: self.options.max_nesting_depth,
            });
        }
        self.depth += 1;
        Ok(())
    }

    pub(crate) fn leave_list(&mut self) {
        self.depth -= 1;
    }

    pub fn parse_source_file(&mut self) -> Result<SourceFile, ParseError> {
        document::parse_source_file(self)
    }
}

/// Parses a whole source file with [`ParseOptions::default`].
///
/// # Examples
/// ```
/// let file = langcfg::parse(r#"language Foo { name: "bar"; }"#).unwrap();
/// assert_eq!(file.languages()[0].name().as_str(), "Foo");
/// ```
pub fn parse(source: &str) -> Result<SourceFile, ParseError> {
    parse_with_options(source, &ParseOptions::default())
}

/// Parses a whole source file, stopping at the first lexical or syntax error.
pub fn parse_with_options(source: &str, options: &ParseOptions) -> Result<SourceFile, ParseError> {
    debug!(
        bytes = source.len(),
        max_nesting_depth = options.max_nesting_depth,
        "parsing source"
    );

    let result = Parser::with_options(source, options.clone())
        .and_then(|mut parser| parser.parse_source_file());

    match &result {
        Ok(file) => debug!(blocks = file.len(), "parsed source"),
        Err(err) => debug!(code = err.code(), error = %err, "parse failed"),
    }

    result
}
