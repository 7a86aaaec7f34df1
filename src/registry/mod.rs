// Author: Dustin Pilgrim
// License: MIT

use std::fs;
use std::path::Path;

use indexmap::{IndexMap, IndexSet};
use tracing::debug;

use crate::ast::{LanguageBlock, Literal, Pair, SourceFile};
use crate::error::RegistryError;
use crate::parser;

mod conversion;

/// Parsed language blocks indexed by name, in first-appearance order.
///
/// The parser keeps duplicate block names and duplicate keys as written;
/// this is the layer that decides what they mean. All blocks sharing a name
/// form one [`LanguageView`], and within it later pairs shadow earlier ones.
pub struct LanguageRegistry {
    source: SourceFile,
    index: IndexMap<String, Vec<usize>>,
}

impl LanguageRegistry {
    /// Parse `text` and index its blocks.
    ///
    /// # Example
    /// ```
    /// # use langcfg::LanguageRegistry;
    /// let registry = LanguageRegistry::from_source(r#"
    /// language Rust { extension: "rs"; }
    /// "#).unwrap();
    /// let ext: String = registry.language("Rust").unwrap().get_as("extension").unwrap();
    /// assert_eq!(ext, "rs");
    /// ```
    pub fn from_source(text: &str) -> Result<Self, RegistryError> {
        Ok(Self::from_parsed(parser::parse(text)?))
    }

    /// Read and parse a file.
    ///
    /// This is the only file access in the crate; [`crate::parse`] itself
    /// works purely on text supplied by the caller.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RegistryError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| RegistryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = text.len(), "loaded language file");
        Self::from_source(&text)
    }

    pub fn from_parsed(source: SourceFile) -> Self {
        let mut index: IndexMap<String, Vec<usize>> = IndexMap::new();
        for (i, block) in source.languages().iter().enumerate() {
            index.entry(block.name().as_str().to_string()).or_default().push(i);
        }
        debug!(blocks = source.len(), languages = index.len(), "indexed languages");
        LanguageRegistry { source, index }
    }

    pub fn source_file(&self) -> &SourceFile {
        &self.source
    }

    /// Distinct language names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.index.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn language(&self, name: &str) -> Option<LanguageView<'_>> {
        let (name, indices) = self.index.get_key_value(name)?;
        Some(self.view(name, indices))
    }

    pub fn languages(&self) -> impl Iterator<Item = LanguageView<'_>> {
        self.index.iter().map(|(name, indices)| self.view(name, indices))
    }

    /// First language whose `key` is the string `value`,
    /// e.g. `find_by("extension", "rs")`.
    pub fn find_by(&self, key: &str, value: &str) -> Option<LanguageView<'_>> {
        self.languages()
            .find(|view| view.get(key).and_then(Literal::as_str) == Some(value))
    }

    fn view<'a>(&'a self, name: &'a str, indices: &[usize]) -> LanguageView<'a> {
        LanguageView {
            name,
            blocks: indices.iter().map(|&i| &self.source.languages()[i]).collect(),
        }
    }
}

/// All blocks that share one language name.
#[derive(Debug, Clone)]
pub struct LanguageView<'a> {
    name: &'a str,
    blocks: Vec<&'a LanguageBlock>,
}

impl<'a> LanguageView<'a> {
    pub fn name(&self) -> &'a str {
        self.name
    }

    pub fn blocks(&self) -> &[&'a LanguageBlock] {
        &self.blocks
    }

    /// Every pair in source order, across all blocks.
    pub fn pairs(&self) -> impl Iterator<Item = &'a Pair> + '_ {
        self.blocks.iter().flat_map(|block| block.pairs().iter())
    }

    /// The value of the last pair named `key`.
    pub fn get(&self, key: &str) -> Option<&'a Literal> {
        self.pairs()
            .filter(|pair| pair.key().as_str() == key)
            .last()
            .map(Pair::value)
    }

    /// Every value written for `key`, in source order.
    pub fn get_all(&self, key: &str) -> Vec<&'a Literal> {
        self.pairs()
            .filter(|pair| pair.key().as_str() == key)
            .map(Pair::value)
            .collect()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.pairs().any(|pair| pair.key().as_str() == key)
    }

    /// Distinct keys in first-appearance order.
    pub fn keys(&self) -> Vec<&'a str> {
        let keys: IndexSet<&'a str> = self.pairs().map(|pair| pair.key().as_str()).collect();
        keys.into_iter().collect()
    }

    /// Typed access to the effective value of `key`.
    ///
    /// # Errors
    /// `MissingKey` if no pair has the key, `InvalidValue` if the value can't
    /// be converted to `T`.
    pub fn get_as<T>(&self, key: &str) -> Result<T, RegistryError>
    where
        T: TryFrom<&'a Literal, Error = RegistryError>,
    {
        match self.get_optional(key)? {
            Some(value) => Ok(value),
            None => Err(RegistryError::MissingKey {
                language: self.name.to_string(),
                key: key.to_string(),
            }),
        }
    }

    /// Like [`LanguageView::get_as`], but a missing key is `Ok(None)`.
    pub fn get_optional<T>(&self, key: &str) -> Result<Option<T>, RegistryError>
    where
        T: TryFrom<&'a Literal, Error = RegistryError>,
    {
        self.get(key)
            .map(|literal| {
                T::try_from(literal).map_err(|e| RegistryError::InvalidValue {
                    key: key.to_string(),
                    source: Box::new(e),
                })
            })
            .transpose()
    }

    /// Typed access with a fallback for missing or mistyped values.
    pub fn get_or<T>(&self, key: &str, default: T) -> T
    where
        T: TryFrom<&'a Literal, Error = RegistryError>,
    {
        self.get_as(key).unwrap_or(default)
    }
}

#[cfg(test)]
mod tests;
