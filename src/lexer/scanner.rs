// Author: Dustin Pilgrim
// License: MIT

use super::*;

/// Advance the character iterator and update offset/line/column tracking
pub(super) fn bump(lexer: &mut Lexer) -> Option<char> {
    let curr = lexer.peek;
    if let Some(c) = curr {
        lexer.offset += c.len_utf8();
        if c == '\n' {
            lexer.line += 1;
            lexer.column = 1;
        } else {
            lexer.column += 1;
        }
    }
    lexer.peek = lexer.input.next();
    curr
}

/// The character after `peek`, without consuming anything
pub(super) fn peek_second(lexer: &Lexer) -> Option<char> {
    lexer.input.clone().next()
}

/// Skip whitespace and `//` comments. The comment ends before its newline,
/// which is then skipped as ordinary whitespace.
pub(super) fn skip_whitespace_and_comments(lexer: &mut Lexer) {
    while let Some(c) = lexer.peek {
        match c {
            c if c.is_whitespace() => {
                bump(lexer);
            }
            '/' if peek_second(lexer) == Some('/') => {
                while let Some(ch) = lexer.peek {
                    if ch == '\n' {
                        break;
                    }
                    bump(lexer);
                }
            }
            _ => break,
        }
    }
}
