// Author: Dustin Pilgrim
// License: MIT

use std::fmt;

use serde::Serialize;

/// A location in the source text.
///
/// `offset` is a byte offset; `line` and `column` are 1-based and `column`
/// counts characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub const START: Position = Position { offset: 0, line: 1, column: 1 };
}

impl Default for Position {
    fn default() -> Self {
        Position::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Half-open region `[start, end)` of the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        Span { start, end }
    }

    /// Span covering `self` through the end of `other`.
    pub fn to(self, other: Span) -> Span {
        Span { start: self.start, end: other.end }
    }

    pub fn contains(&self, offset: usize) -> bool {
        self.start.offset <= offset && offset < self.end.offset
    }

    pub fn len(&self) -> usize {
        self.end.offset - self.start.offset
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A block name or pair key: one or more of `[A-Za-z_]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identifier {
    pub(crate) name: String,
    #[serde(skip)]
    pub(crate) span: Span,
}

impl Identifier {
    pub(crate) fn new(name: String, span: Span) -> Self {
        Identifier { name, span }
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }

    pub fn span(&self) -> Span {
        self.span
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A value on the right-hand side of a pair.
///
/// Lists own their items directly; nesting is structural.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Literal {
    /// Raw string content between the quotes. Escapes are kept verbatim,
    /// so `"a\"b"` holds the four characters `a\"b`.
    String {
        content: String,
        #[serde(skip)]
        span: Span,
    },
    /// Unsigned digit text, not converted to a number.
    Integer {
        digits: String,
        #[serde(skip)]
        span: Span,
    },
    Boolean {
        value: bool,
        #[serde(skip)]
        span: Span,
    },
    List {
        items: Vec<Literal>,
        #[serde(skip)]
        span: Span,
    },
}

impl Literal {
    pub fn span(&self) -> Span {
        match self {
            Literal::String { span, .. }
            | Literal::Integer { span, .. }
            | Literal::Boolean { span, .. }
            | Literal::List { span, .. } => *span,
        }
    }

    /// Name of the literal's node kind, as reported by context queries.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Literal::String { .. } => "string_literal",
            Literal::Integer { .. } => "integer_literal",
            Literal::Boolean { .. } => "boolean_literal",
            Literal::List { .. } => "list_literal",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Literal::String { content, .. } => Some(content),
            _ => None,
        }
    }

    pub fn as_digits(&self) -> Option<&str> {
        match self {
            Literal::Integer { digits, .. } => Some(digits),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Literal::Boolean { value, .. } => Some(*value),
            _ => None,
        }
    }

    pub fn items(&self) -> Option<&[Literal]> {
        match self {
            Literal::List { items, .. } => Some(items),
            _ => None,
        }
    }

    /// Structural equality, ignoring spans.
    pub fn same_shape(&self, other: &Literal) -> bool {
        match (self, other) {
            (Literal::String { content: a, .. }, Literal::String { content: b, .. }) => a == b,
            (Literal::Integer { digits: a, .. }, Literal::Integer { digits: b, .. }) => a == b,
            (Literal::Boolean { value: a, .. }, Literal::Boolean { value: b, .. }) => a == b,
            (Literal::List { items: a, .. }, Literal::List { items: b, .. }) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.same_shape(y))
            }
            _ => false,
        }
    }
}

/// A single `key: value;` declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pair {
    pub(crate) key: Identifier,
    pub(crate) value: Literal,
    #[serde(skip)]
    pub(crate) span: Span,
}

impl Pair {
    pub(crate) fn new(key: Identifier, value: Literal, span: Span) -> Self {
        Pair { key, value, span }
    }

    pub fn key(&self) -> &Identifier {
        &self.key
    }

    pub fn value(&self) -> &Literal {
        &self.value
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn same_shape(&self, other: &Pair) -> bool {
        self.key.name == other.key.name && self.value.same_shape(&other.value)
    }
}

/// `language <name> { pair* }`
///
/// Pairs stay in source order. Duplicate keys are kept as written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageBlock {
    pub(crate) name: Identifier,
    pub(crate) pairs: Vec<Pair>,
    #[serde(skip)]
    pub(crate) span: Span,
}

impl LanguageBlock {
    pub(crate) fn new(name: Identifier, pairs: Vec<Pair>, span: Span) -> Self {
        LanguageBlock { name, pairs, span }
    }

    pub fn name(&self) -> &Identifier {
        &self.name
    }

    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    pub fn span(&self) -> Span {
        self.span
    }

    /// First pair whose key is `key`, as written in this block.
    ///
    /// Duplicates are not resolved here; [`crate::LanguageView::get`] is the
    /// lookup where a later pair shadows an earlier one.
    pub fn first_pair(&self, key: &str) -> Option<&Pair> {
        self.pairs.iter().find(|p| p.key.name == key)
    }

    pub fn same_shape(&self, other: &LanguageBlock) -> bool {
        self.name.name == other.name.name
            && self.pairs.len() == other.pairs.len()
            && self.pairs.iter().zip(&other.pairs).all(|(a, b)| a.same_shape(b))
    }
}

/// Root of a parsed file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceFile {
    pub(crate) languages: Vec<LanguageBlock>,
    #[serde(skip)]
    pub(crate) span: Span,
}

impl SourceFile {
    pub(crate) fn new(languages: Vec<LanguageBlock>, span: Span) -> Self {
        SourceFile { languages, span }
    }

    pub fn languages(&self) -> &[LanguageBlock] {
        &self.languages
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    /// Structural equality, ignoring spans. Two parses of the same blocks with
    /// different whitespace or comments compare equal here.
    pub fn same_structure(&self, other: &SourceFile) -> bool {
        self.languages.len() == other.languages.len()
            && self
                .languages
                .iter()
                .zip(&other.languages)
                .all(|(a, b)| a.same_shape(b))
    }
}
