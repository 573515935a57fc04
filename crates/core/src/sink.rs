//! Emission capability implemented by tag consumers

use crate::tag::{Tag, TagKind};

/// Receives tags one at a time, plus non-fatal diagnostics
///
/// Implementations must not retain the borrowed strings past the call;
/// copy whatever they need to keep.
pub trait TagSink {
    /// Called once per emitted tag, in final order
    fn put(&mut self, kind: TagKind, symbol: &str, line: usize, file: &str, image: &str);

    /// Called for degraded situations that do not stop extraction
    fn warning(&mut self, message: &str);
}

/// Owned copy of one `put` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedTag {
    pub kind: TagKind,
    pub symbol: String,
    pub line: usize,
    pub file: String,
    pub image: String,
}

impl From<&Tag> for EmittedTag {
    fn from(tag: &Tag) -> Self {
        Self {
            kind: tag.kind,
            symbol: tag.symbol.clone(),
            line: tag.line,
            file: tag.file.clone(),
            image: tag.image.clone(),
        }
    }
}

/// In-memory sink that records everything it receives
#[derive(Debug, Default)]
pub struct CollectingSink {
    pub tags: Vec<EmittedTag>,
    pub warnings: Vec<String>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// `(symbol, line)` pairs in emission order
    pub fn symbols_and_lines(&self) -> Vec<(&str, usize)> {
        self.tags
            .iter()
            .map(|t| (t.symbol.as_str(), t.line))
            .collect()
    }
}

impl TagSink for CollectingSink {
    fn put(&mut self, kind: TagKind, symbol: &str, line: usize, file: &str, image: &str) {
        self.tags.push(EmittedTag {
            kind,
            symbol: symbol.to_string(),
            line,
            file: file.to_string(),
            image: image.to_string(),
        });
    }

    fn warning(&mut self, message: &str) {
        self.warnings.push(message.to_string());
    }
}
