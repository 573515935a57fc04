//! Tag data model
//!
//! A tag is one occurrence of a symbol in a single source file. Tags are
//! created by the definition and reference sources and are never mutated
//! afterwards.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Classification of a tag
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TagKind {
    /// Where a symbol is declared or defined
    Definition,
    /// Any lexical occurrence of a name
    Reference,
}

impl TagKind {
    /// Numeric code passed across the emission boundary
    pub fn code(self) -> i32 {
        match self {
            TagKind::Definition => 1,
            TagKind::Reference => 2,
        }
    }
}

/// A symbol occurrence within one file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub kind: TagKind,

    /// Identifier name, never empty
    pub symbol: String,

    /// 1-based line number
    pub line: usize,

    /// Path of the source file, identical for every tag of one extraction
    pub file: String,

    /// Context snippet for definitions, empty for references
    pub image: String,
}

impl Tag {
    /// Create a tag, rejecting an empty symbol or a zero line number
    pub fn new(
        kind: TagKind,
        symbol: impl Into<String>,
        line: usize,
        file: impl Into<String>,
        image: impl Into<String>,
    ) -> Result<Self> {
        let symbol = symbol.into();
        if symbol.is_empty() {
            return Err(Error::invalid_input("tag symbol must not be empty"));
        }
        if line == 0 {
            return Err(Error::invalid_input(format!(
                "tag line for '{symbol}' must be at least 1"
            )));
        }

        Ok(Self {
            kind,
            symbol,
            line,
            file: file.into(),
            image: image.into(),
        })
    }

    pub fn definition(
        symbol: impl Into<String>,
        line: usize,
        file: impl Into<String>,
        image: impl Into<String>,
    ) -> Result<Self> {
        Self::new(TagKind::Definition, symbol, line, file, image)
    }

    pub fn reference(
        symbol: impl Into<String>,
        line: usize,
        file: impl Into<String>,
    ) -> Result<Self> {
        Self::new(TagKind::Reference, symbol, line, file, String::new())
    }

    pub fn is_definition(&self) -> bool {
        self.kind == TagKind::Definition
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_kind_codes() {
        assert_eq!(TagKind::Definition.code(), 1);
        assert_eq!(TagKind::Reference.code(), 2);
    }

    #[test]
    fn test_kind_display_and_parse() {
        assert_eq!(TagKind::Definition.to_string(), "definition");
        assert_eq!(TagKind::from_str("reference").ok(), Some(TagKind::Reference));
    }

    #[test]
    fn test_reference_has_empty_image() {
        let tag = Tag::reference("foo", 3, "a.rs").expect("valid tag");
        assert_eq!(tag.kind, TagKind::Reference);
        assert!(tag.image.is_empty());
        assert!(!tag.is_definition());
    }

    #[test]
    fn test_rejects_empty_symbol() {
        let result = Tag::definition("", 1, "a.rs", "");
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_rejects_line_zero() {
        let result = Tag::reference("foo", 0, "a.rs");
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_serializes_kind_as_snake_case() {
        let tag = Tag::definition("foo", 10, "a.wg", "int foo(){}").expect("valid tag");
        let json = serde_json::to_string(&tag).expect("serialize");
        assert!(json.contains("\"kind\":\"definition\""));
    }
}
