// Author: Dustin Pilgrim
// License: MIT

use super::*;
use crate::ast::{Identifier, LanguageBlock, Pair, Span};

pub(super) fn parse_source_file(parser: &mut Parser) -> Result<SourceFile, ParseError> {
    let mut languages = Vec::new();

    loop {
        match parser.peek().token {
            Token::Eof => break,
            Token::Language => languages.push(parse_language(parser)?),
            _ => return Err(parser.unexpected(&[TokenKind::Language, TokenKind::Eof])),
        }
    }

    let end = parser.peek().span.end;
    Ok(SourceFile::new(languages, Span::new(Position::START, end)))
}

fn parse_language(parser: &mut Parser) -> Result<LanguageBlock, ParseError> {
    let keyword = parser.expect(TokenKind::Language)?;
    let name = parse_identifier(parser)?;
    parser.expect(TokenKind::LBrace)?;

    let mut pairs = Vec::new();
    loop {
        match parser.peek().token {
            Token::RBrace => break,
            Token::Ident(_) | Token::Language => pairs.push(parse_pair(parser)?),
            _ => return Err(parser.unexpected(&[TokenKind::Ident, TokenKind::RBrace])),
        }
    }
    let close = parser.bump()?;

    Ok(LanguageBlock::new(name, pairs, keyword.span.to(close.span)))
}

fn parse_pair(parser: &mut Parser) -> Result<Pair, ParseError> {
    let key = parse_identifier(parser)?;
    parser.expect(TokenKind::Colon)?;
    let value = literal::parse_literal(parser)?;
    let semi = parser.expect(TokenKind::Semi)?;

    let span = key.span().to(semi.span);
    Ok(Pair::new(key, value, span))
}

/// Block names and keys. `language` is lexed as a keyword but is still a
/// valid identifier in both positions.
fn parse_identifier(parser: &mut Parser) -> Result<Identifier, ParseError> {
    if !parser.at(TokenKind::Ident) && !parser.at(TokenKind::Language) {
        return Err(parser.unexpected(&[TokenKind::Ident]));
    }

    let SpannedToken { token, span } = parser.bump()?;
    match token {
        Token::Ident(name) => Ok(Identifier::new(name, span)),
        Token::Language => Ok(Identifier::new("language".into(), span)),
        _ => unreachable!(),
    }
}
