//! Tag extraction pipeline
//!
//! Definitions come from an external ctags-compatible tool, references from
//! tokenizing the whole file. Both sets are merged, with definitions taking
//! priority at the same symbol and line, and emitted in line order.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

pub mod definitions;
pub mod emit;
pub mod extractor;
pub mod merge;
pub mod references;

// Re-export error types from core
pub use lextags_core::error::{Error, Result};

pub use definitions::{
    parse_definition_output, CtagsDefinitionSource, DefinitionSource, StaticDefinitionSource,
};
pub use emit::emit_tags;
pub use extractor::{ExtractRequest, TagExtractor};
pub use merge::merge_tags;
pub use references::{references_from_tokens, LexicalReferenceSource, ReferenceSource};
