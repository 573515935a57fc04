//! Lexers that turn source files into categorized token streams
//!
//! Lexers register themselves through [`LexerDescriptor`] and are selected
//! per file with [`select_lexer`].

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

mod grammars;
mod lexer;
mod plaintext;
mod selection;
mod token;
mod treesitter;

pub use lexer::{
    descriptors, detect_lexer, lexer_by_name, lexer_for_filename, lexer_for_shebang, Lexer,
    LexerDescriptor,
};
pub use plaintext::PlaintextLexer;
pub use selection::{lexer_name_for_language, select_lexer, LexerSelection, LANGUAGE_ALIASES};
pub use token::{Token, TokenType};
pub use treesitter::TreeSitterLexer;
