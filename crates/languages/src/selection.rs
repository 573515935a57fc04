//! Three-stage lexer selection
//!
//! 1. A language name resolved from the file's extension, normalized and
//!    passed through [`LANGUAGE_ALIASES`], looked up by name
//! 2. Content sniffing against registered file name patterns and shebangs
//! 3. The plain-text lexer, which always succeeds

use crate::lexer::{detect_lexer, lexer_by_name, Lexer};
use crate::plaintext::PlaintextLexer;
use std::path::Path;
use strum_macros::Display;
use tracing::debug;

/// Display names whose lexer is registered under a different identifier
pub const LANGUAGE_ALIASES: &[(&str, &str)] = &[
    ("fantom", "fan"),
    ("haxe", "haXe"),
    ("sourcepawn", "sp"),
    ("typescript", "ts"),
    ("xbase", "XBase"),
];

/// Which stage produced the lexer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum LexerSelection {
    Named,
    Detected,
    Fallback,
}

/// Lexer identifier for a configured language name
pub fn lexer_name_for_language(language: &str) -> String {
    let lowered = language.to_lowercase();
    LANGUAGE_ALIASES
        .iter()
        .find(|(display, _)| *display == lowered)
        .map(|(_, alias)| alias.to_string())
        .unwrap_or(lowered)
}

/// Pick a lexer for `path`, never failing
pub fn select_lexer(
    path: &Path,
    content: &str,
    language: Option<&str>,
) -> (Box<dyn Lexer>, LexerSelection) {
    if let Some(language) = language {
        let name = lexer_name_for_language(language);
        if let Some(descriptor) = lexer_by_name(&name) {
            debug!(
                "Lexer '{}' selected for {} by language '{language}'",
                descriptor.name,
                path.display()
            );
            return (descriptor.create(), LexerSelection::Named);
        }
        debug!("No lexer named '{name}' for language '{language}'");
    }

    if let Some(descriptor) = detect_lexer(path, content) {
        debug!(
            "Lexer '{}' detected for {}",
            descriptor.name,
            path.display()
        );
        return (descriptor.create(), LexerSelection::Detected);
    }

    debug!("Falling back to plain text for {}", path.display());
    (Box::new(PlaintextLexer), LexerSelection::Fallback)
}
