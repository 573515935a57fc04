//! Reference tags from whole-file lexical tokenization

use lextags_core::error::{Result, ResultExt};
use lextags_core::Tag;
use lextags_languages::{select_lexer, Token};
use std::path::Path;
use tracing::debug;

/// Produces reference tags for one file
pub trait ReferenceSource: Send + Sync {
    /// `language` is the name resolved from the language map, if any
    fn extract(&self, file_path: &str, language: Option<&str>) -> Result<Vec<Tag>>;
}

/// Tags every name token the selected lexer finds
#[derive(Debug, Clone, Copy, Default)]
pub struct LexicalReferenceSource;

impl ReferenceSource for LexicalReferenceSource {
    fn extract(&self, file_path: &str, language: Option<&str>) -> Result<Vec<Tag>> {
        let bytes =
            std::fs::read(file_path).context(format!("Failed to read {file_path}"))?;
        let content = String::from_utf8_lossy(&bytes);

        let (lexer, selection) = select_lexer(Path::new(file_path), &content, language);
        let tokens = lexer.tokenise(&content)?;
        let tags = references_from_tokens(&tokens, file_path);

        debug!(
            "{} references for {file_path} ({} lexer, {selection})",
            tags.len(),
            lexer.name()
        );
        Ok(tags)
    }
}

/// One reference per non-blank name token, at the line the token starts on
pub fn references_from_tokens(tokens: &[Token<'_>], file_path: &str) -> Vec<Tag> {
    let mut tags = Vec::new();
    let mut line = 1;

    for token in tokens {
        if token.token_type.is_name() {
            let symbol = token.value.trim();
            if !symbol.is_empty() {
                if let Ok(tag) = Tag::reference(symbol, line, file_path) {
                    tags.push(tag);
                }
            }
        }
        line += token.value.matches('\n').count();
    }

    tags
}
