//! Generic fallback lexer

use crate::lexer::{Lexer, LexerDescriptor};
use crate::token::{Token, TokenType};
use lextags_core::error::Result;

/// Emits the whole input as a single text token
pub struct PlaintextLexer;

impl Lexer for PlaintextLexer {
    fn name(&self) -> &'static str {
        "plaintext"
    }

    fn tokenise<'a>(&self, source: &'a str) -> Result<Vec<Token<'a>>> {
        if source.is_empty() {
            return Ok(Vec::new());
        }
        Ok(vec![Token::new(TokenType::Text, source)])
    }
}

fn plaintext_lexer() -> Box<dyn Lexer> {
    Box::new(PlaintextLexer)
}

inventory::submit! {
    LexerDescriptor {
        name: "plaintext",
        aliases: &["text", "plain", "no-highlight"],
        filenames: &["*.txt"],
        interpreters: &[],
        factory: plaintext_lexer,
    }
}
