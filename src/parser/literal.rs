// Author: Dustin Pilgrim
// License: MIT

use super::*;
use crate::ast::Literal;

const LITERAL_START: &[TokenKind] = &[
    TokenKind::String,
    TokenKind::Int,
    TokenKind::True,
    TokenKind::False,
    TokenKind::LBracket,
];

const LIST_CONTINUATION: &[TokenKind] = &[
    TokenKind::String,
    TokenKind::Int,
    TokenKind::True,
    TokenKind::False,
    TokenKind::LBracket,
    TokenKind::RBracket,
];

/// Dispatches on the leading token; every literal form starts with a distinct one.
pub(super) fn parse_literal(parser: &mut Parser) -> Result<Literal, ParseError> {
    match parser.peek().token {
        Token::String(_) => parse_string(parser),
        Token::Int(_) => parse_integer(parser),
        Token::True | Token::False => parse_boolean(parser),
        Token::LBracket => parse_list(parser),
        _ => Err(parser.unexpected(LITERAL_START)),
    }
}

fn parse_string(parser: &mut Parser) -> Result<Literal, ParseError> {
    let SpannedToken { token, span } = parser.bump()?;
    if let Token::String(content) = token {
        Ok(Literal::String { content, span })
    } else {
        unreachable!()
    }
}

fn parse_integer(parser: &mut Parser) -> Result<Literal, ParseError> {
    let SpannedToken { token, span } = parser.bump()?;
    if let Token::Int(digits) = token {
        Ok(Literal::Integer { digits, span })
    } else {
        unreachable!()
    }
}

fn parse_boolean(parser: &mut Parser) -> Result<Literal, ParseError> {
    let SpannedToken { token, span } = parser.bump()?;
    Ok(Literal::Boolean {
        value: token == Token::True,
        span,
    })
}

/// `[` literal* `]`. Items sit side by side with no separator.
fn parse_list(parser: &mut Parser) -> Result<Literal, ParseError> {
    let open = parser.peek().span;
    parser.enter_list(open.start)?;
    parser.bump()?;

    let mut items = Vec::new();
    loop {
        let token = &parser.peek().token;
        if *token == Token::RBracket {
            break;
        }
        if !token.starts_literal() {
            return Err(parser.unexpected(LIST_CONTINUATION));
        }
        items.push(parse_literal(parser)?);
    }

    let close = parser.bump()?;
    parser.leave_list();

    Ok(Literal::List {
        items,
        span: open.to(close.span),
    })
}
