// Author: Dustin Pilgrim
// License: MIT

#[cfg(test)]
use super::*;
use std::io::Write;

const LANGUAGES: &str = r#"
// editor language table
language Rust {
    extension: "rs";
    casing: "snake";
    raw: false;
    annoying: 1;
    aliases: ["rust" "rs"];
}

language Python {
    extension: "py";
    indent: 4;
}

language Rust {
    // later blocks shadow earlier ones
    annoying: 2;
}
"#;

fn registry() -> LanguageRegistry {
    LanguageRegistry::from_source(LANGUAGES).expect("Failed to parse languages")
}

fn literal(text: &str) -> Literal {
    let source = format!("language L {{ v: {}; }}", text);
    crate::parse(&source).expect("Failed to parse literal").languages()[0].pairs()[0]
        .value()
        .clone()
}

#[test]
fn test_registry_from_string() {
    let registry = registry();

    assert_eq!(registry.len(), 2);
    assert_eq!(registry.names().collect::<Vec<_>>(), vec!["Rust", "Python"]);
    assert!(registry.contains("Python"));
    assert!(!registry.contains("Cobol"));
    assert_eq!(registry.source_file().len(), 3);

    let rust = registry.language("Rust").expect("Failed to find Rust");
    assert_eq!(rust.blocks().len(), 2);

    let ext: String = rust.get_as("extension").expect("Failed to get extension");
    assert_eq!(ext, "rs");

    let raw: bool = rust.get_as("raw").expect("Failed to get raw");
    assert!(!raw);

    let aliases: Vec<String> = rust.get_as("aliases").expect("Failed to get aliases");
    assert_eq!(aliases, vec!["rust", "rs"]);

    let indent: u32 = registry
        .language("Python")
        .expect("Failed to find Python")
        .get_as("indent")
        .expect("Failed to get indent");
    assert_eq!(indent, 4);
}

#[test]
fn test_later_pairs_shadow_earlier_ones() {
    let registry = registry();
    let rust = registry.language("Rust").expect("Failed to find Rust");

    let annoying: i64 = rust.get_as("annoying").expect("Failed to get annoying");
    assert_eq!(annoying, 2);

    let all: Vec<&str> = rust
        .get_all("annoying")
        .into_iter()
        .filter_map(Literal::as_digits)
        .collect();
    assert_eq!(all, vec!["1", "2"]);
}

#[test]
fn test_keys_in_first_appearance_order() {
    let registry = registry();
    let rust = registry.language("Rust").expect("Failed to find Rust");

    assert_eq!(
        rust.keys(),
        vec!["extension", "casing", "raw", "annoying", "aliases"]
    );
    assert!(rust.contains_key("casing"));
    assert!(!rust.contains_key("indent"));
}

#[test]
fn test_find_by_extension() {
    let registry = registry();

    let found = registry.find_by("extension", "py").expect("Failed to find .py");
    assert_eq!(found.name(), "Python");
    assert!(registry.find_by("extension", "cpp").is_none());
}

#[test]
fn test_missing_and_optional_keys() {
    let registry = registry();
    let python = registry.language("Python").expect("Failed to find Python");

    let missing = python.get_as::<String>("casing");
    assert!(matches!(
        missing,
        Err(RegistryError::MissingKey { ref language, ref key }) if language == "Python" && key == "casing"
    ));

    let optional: Option<String> = python.get_optional("casing").expect("lookup failed");
    assert!(optional.is_none());

    assert_eq!(python.get_or("casing", String::from("camel")), "camel");
    assert_eq!(python.get_or("indent", 2usize), 4);
}

#[test]
fn test_type_mismatch_is_reported_with_key() {
    let registry = registry();
    let python = registry.language("Python").expect("Failed to find Python");

    let err = python.get_as::<bool>("extension").unwrap_err();
    match err {
        RegistryError::InvalidValue { key, source } => {
            assert_eq!(key, "extension");
            assert!(matches!(
                *source,
                RegistryError::TypeMismatch { expected: "boolean", found: "string" }
            ));
        }
        other => panic!("Expected InvalidValue, got {:?}", other),
    }
}

#[test]
fn test_integer_conversions() {
    let value = literal("007");
    let result: Result<u64, RegistryError> = (&value).try_into();
    assert_eq!(result.unwrap(), 7);

    let value = literal("99999999999999999999999");
    let result: Result<i64, RegistryError> = (&value).try_into();
    assert!(matches!(result, Err(RegistryError::IntegerOverflow { target: "i64", .. })));

    let value = literal("4294967296");
    assert!(u32::try_from(&value).is_err());
    assert_eq!(u64::try_from(&value).unwrap(), 4_294_967_296);
}

#[test]
fn test_string_conversion_keeps_escapes() {
    let value = literal(r#""a\"b""#);
    let result: Result<String, RegistryError> = (&value).try_into();
    assert_eq!(result.unwrap(), r#"a\"b"#);

    let value = literal("true");
    assert!(String::try_from(&value).is_err());
}

#[test]
fn test_nested_list_conversion() {
    let value = literal("[[1 2] [] [3]]");
    let nested: Vec<Vec<usize>> = (&value).try_into().expect("Failed to convert");
    assert_eq!(nested, vec![vec![1, 2], vec![], vec![3]]);

    let value = literal(r#"[1 "two"]"#);
    assert!(Vec::<u32>::try_from(&value).is_err());
}

#[test]
fn test_parse_error_propagates() {
    let result = LanguageRegistry::from_source("language { }");
    assert!(matches!(
        result,
        Err(RegistryError::Parse(crate::ParseError::UnexpectedToken { .. }))
    ));
}

#[test]
fn test_registry_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(LANGUAGES.as_bytes()).expect("Failed to write temp file");

    let registry = LanguageRegistry::from_file(file.path()).expect("Failed to load file");
    assert_eq!(registry.len(), 2);
    assert!(registry.find_by("extension", "rs").is_some());
}

#[test]
fn test_registry_missing_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("missing.lang");

    let err = LanguageRegistry::from_file(&path).err().expect("Expected an error");
    assert!(matches!(err, RegistryError::Io { .. }));
    assert!(err.to_string().contains("missing.lang"));
}

#[test]
fn test_empty_registry() {
    let registry = LanguageRegistry::from_source("// nothing\n").expect("Failed to parse");
    assert!(registry.is_empty());
    assert!(registry.language("Rust").is_none());
}
