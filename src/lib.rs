//! Parser for a small declarative language-definition format:
//!
//! ```text
//! // comments run to end of line
//! language Rust {
//!     extension: "rs";
//!     raw: false;
//!     tab_width: 4;
//!     aliases: ["rust" "rs"];
//! }
//! ```
//!
//! [`parse`] turns text into a [`SourceFile`] or a positioned [`ParseError`].
//! [`LanguageRegistry`] layers typed, name-indexed lookup on top.

pub mod ast;
pub mod context;
pub mod error;
pub mod export;
pub mod lexer;
pub mod options;
pub mod parser;
pub mod registry;

pub use ast::{Identifier, LanguageBlock, Literal, Pair, Position, SourceFile, Span};
pub use context::NodeRef;
pub use error::{LexicalErrorKind, ParseError, RegistryError};
pub use options::ParseOptions;
pub use parser::{parse, parse_with_options};
pub use registry::{LanguageRegistry, LanguageView};
