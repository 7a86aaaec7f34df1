// Author: Dustin Pilgrim
// License: MIT

//! Which nodes enclose a given point in the source.
//!
//! Editors use this to decide what the cursor is on, e.g. the string literal
//! inside the `extension` pair of the `Rust` block.

use std::fmt;

use crate::ast::{Identifier, LanguageBlock, Literal, Pair, SourceFile, Span};

/// A borrowed reference to any node in a parsed tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRef<'a> {
    SourceFile(&'a SourceFile),
    Language(&'a LanguageBlock),
    Identifier(&'a Identifier),
    Pair(&'a Pair),
    Literal(&'a Literal),
}

impl NodeRef<'_> {
    pub fn kind(&self) -> &'static str {
        match self {
            NodeRef::SourceFile(_) => "source_file",
            NodeRef::Language(_) => "language",
            NodeRef::Identifier(_) => "identifier",
            NodeRef::Pair(_) => "pair",
            NodeRef::Literal(literal) => literal.kind_name(),
        }
    }

    pub fn span(&self) -> Span {
        match self {
            NodeRef::SourceFile(file) => file.span(),
            NodeRef::Language(block) => block.span(),
            NodeRef::Identifier(ident) => ident.span(),
            NodeRef::Pair(pair) => pair.span(),
            NodeRef::Literal(literal) => literal.span(),
        }
    }
}

/// `kind (line, column)-(line, column)`
impl fmt::Display for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let span = self.span();
        write!(
            f,
            "{} ({}, {})-({}, {})",
            self.kind(),
            span.start.line,
            span.start.column,
            span.end.line,
            span.end.column
        )
    }
}

impl SourceFile {
    /// Nodes containing byte `offset`, outermost first. The root is always
    /// present, even for offsets between or after blocks.
    pub fn context_at(&self, offset: usize) -> Vec<NodeRef<'_>> {
        let mut path = vec![NodeRef::SourceFile(self)];

        let Some(block) = self.languages.iter().find(|b| b.span.contains(offset)) else {
            return path;
        };
        path.push(NodeRef::Language(block));

        if block.name.span.contains(offset) {
            path.push(NodeRef::Identifier(&block.name));
            return path;
        }

        let Some(pair) = block.pairs.iter().find(|p| p.span.contains(offset)) else {
            return path;
        };
        path.push(NodeRef::Pair(pair));

        if pair.key.span.contains(offset) {
            path.push(NodeRef::Identifier(&pair.key));
            return path;
        }

        let mut current = Some(&pair.value);
        while let Some(literal) = current.filter(|l| l.span().contains(offset)) {
            path.push(NodeRef::Literal(literal));
            current = literal
                .items()
                .and_then(|items| items.iter().find(|i| i.span().contains(offset)));
        }

        path
    }

    /// Renders [`SourceFile::context_at`] one node per line.
    pub fn describe_context_at(&self, offset: usize) -> String {
        self.context_at(offset)
            .iter()
            .map(|node| format!("{}\n", node))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    const RUST_BLOCK: &str = r#"
language Rust {
    extension: "rs";
    casing: "snake";
    raw: false;
    annoying: 1;
    nested: [1 ["deep"]];
}
"#;

    fn kinds(file: &SourceFile, offset: usize) -> Vec<&'static str> {
        file.context_at(offset).iter().map(NodeRef::kind).collect()
    }

    #[test]
    fn test_context_inside_string_literal() {
        let file = parse(RUST_BLOCK).expect("Failed to parse document");
        let offset = RUST_BLOCK.find("snake").expect("missing text");

        assert_eq!(
            kinds(&file, offset),
            vec!["source_file", "language", "pair", "string_literal"]
        );
        assert_eq!(
            file.describe_context_at(offset),
            "source_file (1, 1)-(9, 1)\n\
             language (2, 1)-(8, 2)\n\
             pair (4, 5)-(4, 21)\n\
             string_literal (4, 13)-(4, 20)\n"
        );
    }

    #[test]
    fn test_context_on_identifiers() {
        let file = parse(RUST_BLOCK).expect("Failed to parse document");

        let name = RUST_BLOCK.find("Rust").expect("missing text");
        assert_eq!(kinds(&file, name), vec!["source_file", "language", "identifier"]);

        let key = RUST_BLOCK.find("casing").expect("missing text");
        assert_eq!(
            kinds(&file, key),
            vec!["source_file", "language", "pair", "identifier"]
        );
    }

    #[test]
    fn test_context_descends_into_nested_lists() {
        let file = parse(RUST_BLOCK).expect("Failed to parse document");
        let offset = RUST_BLOCK.find("deep").expect("missing text");

        assert_eq!(
            kinds(&file, offset),
            vec![
                "source_file",
                "language",
                "pair",
                "list_literal",
                "list_literal",
                "string_literal",
            ]
        );

        // on the space between list items only the outer list matches
        let gap = RUST_BLOCK.find("1 [").expect("missing text") + 1;
        assert_eq!(
            kinds(&file, gap),
            vec!["source_file", "language", "pair", "list_literal"]
        );
    }

    #[test]
    fn test_context_outside_blocks() {
        let file = parse(RUST_BLOCK).expect("Failed to parse document");
        assert_eq!(kinds(&file, 0), vec!["source_file"]);
        assert_eq!(kinds(&file, RUST_BLOCK.len()), vec!["source_file"]);

        // between pairs, inside the block
        let between = RUST_BLOCK.find("\n    casing").expect("missing text");
        assert_eq!(kinds(&file, between), vec!["source_file", "language"]);
    }
}
