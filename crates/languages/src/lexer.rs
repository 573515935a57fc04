//! Lexer trait and the link-time lexer registry

use crate::token::Token;
use glob::Pattern;
use lextags_core::error::Result;
use std::path::Path;
use std::sync::OnceLock;
use tracing::trace;

/// Turns source text into an ordered sequence of categorized tokens
///
/// Implementations must cover the whole input: concatenating the values
/// of the returned tokens reproduces the source text.
pub trait Lexer: Send + Sync {
    /// Registry name of this lexer
    fn name(&self) -> &'static str;

    /// Tokenize the full source text
    fn tokenise<'a>(&self, source: &'a str) -> Result<Vec<Token<'a>>>;
}

/// Lexer descriptor for automatic registration
pub struct LexerDescriptor {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    /// Glob patterns matched against the file name
    pub filenames: &'static [&'static str],
    /// Interpreter names accepted on a `#!` line
    pub interpreters: &'static [&'static str],
    pub factory: fn() -> Box<dyn Lexer>,
}

inventory::collect!(LexerDescriptor);

impl LexerDescriptor {
    pub fn create(&self) -> Box<dyn Lexer> {
        (self.factory)()
    }

    fn answers_to(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(name))
    }

    fn matches_filename(&self, file_name: &str) -> bool {
        self.filenames.iter().any(|glob| {
            Pattern::new(glob)
                .map(|pattern| pattern.matches(file_name))
                .unwrap_or(false)
        })
    }

    fn matches_interpreter(&self, interpreter: &str) -> bool {
        self.interpreters.iter().any(|i| *i == interpreter)
    }
}

static DESCRIPTORS: OnceLock<Vec<&'static LexerDescriptor>> = OnceLock::new();

/// All registered lexers, ordered by name
///
/// The registry is fixed at link time, so it is sorted once.
pub fn descriptors() -> &'static [&'static LexerDescriptor] {
    DESCRIPTORS.get_or_init(|| {
        let mut all: Vec<&'static LexerDescriptor> =
            inventory::iter::<LexerDescriptor>.into_iter().collect();
        all.sort_by_key(|d| d.name);
        all
    })
}

/// Look up a lexer by name or alias, case-insensitively
///
/// Falls back to treating `name` as a file extension.
pub fn lexer_by_name(name: &str) -> Option<&'static LexerDescriptor> {
    if name.is_empty() {
        return None;
    }

    let all = descriptors();
    if let Some(found) = all.iter().copied().find(|d| d.answers_to(name)) {
        return Some(found);
    }

    let as_file_name = format!("filename.{name}");
    all.iter().copied().find(|d| d.matches_filename(&as_file_name))
}

/// Match the file name of `path` against registered glob patterns
pub fn lexer_for_filename(path: &Path) -> Option<&'static LexerDescriptor> {
    let file_name = path.file_name()?.to_str()?;
    descriptors()
        .iter()
        .copied()
        .find(|d| d.matches_filename(file_name))
}

/// Match the `#!` line of `content` against registered interpreters
pub fn lexer_for_shebang(content: &str) -> Option<&'static LexerDescriptor> {
    let interpreter = shebang_interpreter(content)?;
    trace!("Shebang interpreter: {interpreter}");

    let all = descriptors();
    if let Some(found) = all
        .iter()
        .copied()
        .find(|d| d.matches_interpreter(interpreter))
    {
        return Some(found);
    }

    // python3.11 -> python
    let unversioned = interpreter.trim_end_matches(|c: char| c.is_ascii_digit() || c == '.');
    all.iter()
        .copied()
        .find(|d| d.matches_interpreter(unversioned))
}

/// Content sniffing: file name patterns first, then the shebang line
pub fn detect_lexer(path: &Path, content: &str) -> Option<&'static LexerDescriptor> {
    lexer_for_filename(path).or_else(|| lexer_for_shebang(content))
}

/// Interpreter named on the first line, resolving `/usr/bin/env`
fn shebang_interpreter(content: &str) -> Option<&str> {
    let first_line = content.lines().next()?;
    let command = first_line.strip_prefix("#!")?;
    let mut words = command.split_whitespace();
    let program = basename(words.next()?);

    if program == "env" {
        words.find(|w| !w.starts_with('-') && !w.contains('=')).map(basename)
    } else {
        Some(program)
    }
}

fn basename(program: &str) -> &str {
    program.rsplit('/').next().unwrap_or(program)
}
