// Author: Dustin Pilgrim
// License: MIT

use serde_json::json;

use crate::ast::{LanguageBlock, Literal, SourceFile};

/// Export a parsed file to JSON.
///
/// Blocks and pairs are exported as arrays so that order and duplicate keys
/// survive:
/// - strings → JSON strings (raw content, escapes untouched)
/// - integers → `{"int": "<digits>"}` (no numeric conversion)
/// - booleans → JSON booleans
/// - lists → JSON arrays
///
/// # Examples
/// ```
/// let file = langcfg::parse(r#"language Rust { extension: "rs"; }"#).unwrap();
/// let json = langcfg::export::to_json_value(&file);
/// assert_eq!(json["languages"][0]["name"], "Rust");
/// assert_eq!(json["languages"][0]["pairs"][0]["value"], "rs");
/// ```
pub fn to_json_value(file: &SourceFile) -> serde_json::Value {
    let languages: Vec<serde_json::Value> = file.languages().iter().map(block_to_json).collect();
    json!({ "languages": languages })
}

/// Pretty-printed form of [`to_json_value`].
pub fn to_json_string(file: &SourceFile) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&to_json_value(file))
}

fn block_to_json(block: &LanguageBlock) -> serde_json::Value {
    let pairs: Vec<serde_json::Value> = block
        .pairs()
        .iter()
        .map(|pair| {
            json!({
                "key": pair.key().as_str(),
                "value": literal_to_json(pair.value()),
            })
        })
        .collect();

    json!({
        "name": block.name().as_str(),
        "pairs": pairs,
    })
}

fn literal_to_json(literal: &Literal) -> serde_json::Value {
    match literal {
        Literal::String { content, .. } => json!(content),
        Literal::Integer { digits, .. } => json!({ "int": digits }),
        Literal::Boolean { value, .. } => json!(value),
        Literal::List { items, .. } => {
            serde_json::Value::Array(items.iter().map(literal_to_json).collect())
        }
    }
}
