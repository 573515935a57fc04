//! Tree-sitter backed lexer
//!
//! Tree-sitter produces a concrete syntax tree; this module flattens it
//! back into a token stream. Leaf nodes become tokens, comments and
//! strings are kept whole (apart from interpolated expressions inside
//! them), and the bytes between nodes become whitespace or text tokens so
//! the stream covers the entire source.

use crate::lexer::Lexer;
use crate::token::{Token, TokenType};
use lextags_core::error::{Error, Result};
use tree_sitter::{Language, Node, Parser};

const COMMENT_KINDS: &[&str] = &["comment", "line_comment", "block_comment"];

const STRING_KINDS: &[&str] = &[
    "string",
    "string_literal",
    "raw_string_literal",
    "interpreted_string_literal",
    "template_string",
    "system_lib_string",
];

const CHAR_KINDS: &[&str] = &["char_literal", "character_literal", "rune_literal"];

/// Children of a string node that contain code rather than text
const INTERPOLATION_KINDS: &[&str] = &["interpolation", "template_substitution"];

const STRING_PART_KINDS: &[&str] = &[
    "string_content",
    "string_fragment",
    "string_start",
    "string_end",
    "escape_sequence",
];

const NUMBER_KINDS: &[&str] = &[
    "integer",
    "float",
    "integer_literal",
    "float_literal",
    "int_literal",
    "number",
    "number_literal",
    "imaginary_literal",
];

const CONSTANT_KINDS: &[&str] = &["true", "false", "none", "nil", "null", "undefined", "iota"];

const PSEUDO_KINDS: &[&str] = &["self", "this", "super", "crate"];

/// Unparsed text the grammar leaves as one node, such as a C macro body
const RAW_TEXT_KINDS: &[&str] = &["preproc_arg"];

const PUNCTUATION: &[&str] = &["(", ")", "[", "]", "{", "}", ",", ";", ":", ".", "::"];

pub struct TreeSitterLexer {
    name: &'static str,
    language: Language,
}

impl TreeSitterLexer {
    pub fn new(name: &'static str, language: Language) -> Self {
        Self { name, language }
    }
}

impl Lexer for TreeSitterLexer {
    fn name(&self) -> &'static str {
        self.name
    }

    fn tokenise<'a>(&self, source: &'a str) -> Result<Vec<Token<'a>>> {
        let mut parser = Parser::new();
        parser
            .set_language(&self.language)
            .map_err(|e| Error::tokenize(format!("Failed to set {} language: {e}", self.name)))?;

        let tree = parser
            .parse(source, None)
            .ok_or_else(|| Error::tokenize(format!("Failed to parse {} source", self.name)))?;

        let mut writer = TokenWriter::new(source);
        let mut cursor = tree.walk();

        loop {
            let node = cursor.node();
            let descend = match classify_node(&node) {
                NodeClass::Skip => false,
                NodeClass::Token(token_type) => {
                    writer.emit(node.start_byte(), node.end_byte(), token_type)?;
                    false
                }
                NodeClass::RawText => {
                    writer.emit_words(node.start_byte(), node.end_byte())?;
                    false
                }
                NodeClass::Container => true,
            };

            if descend && cursor.goto_first_child() {
                continue;
            }

            loop {
                if cursor.goto_next_sibling() {
                    break;
                }
                if !cursor.goto_parent() {
                    return writer.finish();
                }
            }
        }
    }
}

enum NodeClass {
    Skip,
    Token(TokenType),
    RawText,
    Container,
}

fn classify_node(node: &Node) -> NodeClass {
    if node.is_missing() || node.start_byte() >= node.end_byte() {
        return NodeClass::Skip;
    }

    let kind = node.kind();
    if COMMENT_KINDS.contains(&kind) {
        return NodeClass::Token(TokenType::Comment);
    }
    if CHAR_KINDS.contains(&kind) {
        return NodeClass::Token(TokenType::LiteralStringChar);
    }
    if kind == "regex" {
        return NodeClass::Token(TokenType::LiteralStringRegex);
    }
    if STRING_KINDS.contains(&kind) && !has_interpolation(node) {
        return NodeClass::Token(TokenType::LiteralString);
    }
    if RAW_TEXT_KINDS.contains(&kind) {
        return NodeClass::RawText;
    }
    if node.child_count() > 0 {
        return NodeClass::Container;
    }

    NodeClass::Token(classify_leaf(kind, node.is_named()))
}

fn has_interpolation(node: &Node) -> bool {
    let mut cursor = node.walk();
    let found = node
        .children(&mut cursor)
        .any(|child| INTERPOLATION_KINDS.contains(&child.kind()));
    found
}

/// Token category of a leaf node, from its grammar kind
pub(crate) fn classify_leaf(kind: &str, named: bool) -> TokenType {
    if !named {
        return classify_anonymous(kind);
    }

    match kind {
        "identifier"
        | "shorthand_property_identifier"
        | "shorthand_property_identifier_pattern"
        | "shorthand_field_identifier"
        | "private_property_identifier" => TokenType::Name,
        "type_identifier" => TokenType::NameClass,
        "field_identifier" | "property_identifier" => TokenType::NameAttribute,
        "namespace_identifier" | "package_identifier" => TokenType::NameNamespace,
        "statement_identifier" | "label_name" => TokenType::NameLabel,
        "primitive_type" | "predefined_type" => TokenType::KeywordType,
        "mutable_specifier" => TokenType::Keyword,
        "ERROR" => TokenType::Error,
        _ if CONSTANT_KINDS.contains(&kind) => TokenType::KeywordConstant,
        _ if PSEUDO_KINDS.contains(&kind) => TokenType::KeywordPseudo,
        _ if NUMBER_KINDS.contains(&kind) => TokenType::LiteralNumber,
        _ if STRING_PART_KINDS.contains(&kind) => TokenType::LiteralString,
        _ => TokenType::Other,
    }
}

fn classify_anonymous(kind: &str) -> TokenType {
    let is_word = kind.starts_with(|c: char| c.is_ascii_alphabetic())
        && kind.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');

    if is_word {
        TokenType::Keyword
    } else if PUNCTUATION.contains(&kind) {
        TokenType::Punctuation
    } else if matches!(kind, "\"" | "'" | "`") {
        TokenType::LiteralString
    } else {
        TokenType::Operator
    }
}

fn word_class(c: char) -> TokenType {
    if c.is_alphabetic() || c == '_' {
        TokenType::Name
    } else if c.is_ascii_digit() {
        TokenType::LiteralNumber
    } else if c.is_whitespace() {
        TokenType::Whitespace
    } else {
        TokenType::Operator
    }
}

fn continues_word(token_type: TokenType, c: char) -> bool {
    match token_type {
        TokenType::Name | TokenType::LiteralNumber => c.is_alphanumeric() || c == '_',
        TokenType::Whitespace => c.is_whitespace(),
        _ => false,
    }
}

/// Accumulates tokens, filling gaps between nodes with text tokens
struct TokenWriter<'a> {
    source: &'a str,
    offset: usize,
    tokens: Vec<Token<'a>>,
}

impl<'a> TokenWriter<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            offset: 0,
            tokens: Vec::new(),
        }
    }

    fn emit(&mut self, start: usize, end: usize, token_type: TokenType) -> Result<()> {
        let start = start.max(self.offset);
        if end <= start {
            return Ok(());
        }

        self.fill_gap(start)?;
        let value = self.slice(start, end)?;
        self.tokens.push(Token::new(token_type, value));
        self.offset = end;
        Ok(())
    }

    /// Split unparsed text into identifier, number, whitespace and
    /// operator runs
    fn emit_words(&mut self, start: usize, end: usize) -> Result<()> {
        let start = start.max(self.offset);
        if end <= start {
            return Ok(());
        }
        let text = self.slice(start, end)?;

        let mut chars = text.char_indices().peekable();
        while let Some((run_start, first)) = chars.next() {
            let token_type = word_class(first);
            let mut run_end = run_start + first.len_utf8();
            while let Some(&(idx, c)) = chars.peek() {
                if !continues_word(token_type, c) {
                    break;
                }
                run_end = idx + c.len_utf8();
                chars.next();
            }
            self.emit(start + run_start, start + run_end, token_type)?;
        }
        Ok(())
    }

    fn fill_gap(&mut self, until: usize) -> Result<()> {
        if until <= self.offset {
            return Ok(());
        }

        let gap = self.slice(self.offset, until)?;
        let token_type = if gap.chars().all(char::is_whitespace) {
            TokenType::Whitespace
        } else {
            TokenType::Text
        };
        self.tokens.push(Token::new(token_type, gap));
        self.offset = until;
        Ok(())
    }

    fn slice(&self, start: usize, end: usize) -> Result<&'a str> {
        let source: &'a str = self.source;
        source.get(start..end).ok_or_else(|| {
            Error::tokenize(format!(
                "Token range {start}..{end} does not fall on character boundaries"
            ))
        })
    }

    fn finish(mut self) -> Result<Vec<Token<'a>>> {
        self.fill_gap(self.source.len())?;
        Ok(self.tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn python() -> TreeSitterLexer {
        TreeSitterLexer::new("python", tree_sitter_python::LANGUAGE.into())
    }

    fn names<'a>(tokens: &[Token<'a>]) -> Vec<&'a str> {
        tokens
            .iter()
            .filter(|t| t.token_type.is_name())
            .map(|t| t.value)
            .collect()
    }

    #[test]
    fn test_tokens_cover_source() {
        let source = "def greet(name):\n    # say hi\n    return f\"hi {name}\"\n";
        let tokens = python().tokenise(source).expect("tokenise");

        let rebuilt: String = tokens.iter().map(|t| t.value).collect();
        assert_eq!(rebuilt, source);
    }

    #[test]
    fn test_python_names() {
        let source = "def greet(name):\n    return name.upper()\n";
        let tokens = python().tokenise(source).expect("tokenise");

        assert_eq!(names(&tokens), vec!["greet", "name", "name", "upper"]);
        assert!(tokens
            .iter()
            .any(|t| t.value == "def" && t.token_type == TokenType::Keyword));
    }

    #[test]
    fn test_comments_and_strings_are_single_tokens() {
        let source = "x = 'a b c'  # note about y\n";
        let tokens = python().tokenise(source).expect("tokenise");

        assert_eq!(names(&tokens), vec!["x"]);
        assert!(tokens
            .iter()
            .any(|t| t.token_type == TokenType::Comment && t.value == "# note about y"));
        assert!(tokens
            .iter()
            .any(|t| t.token_type == TokenType::LiteralString && t.value == "'a b c'"));
    }

    #[test]
    fn test_fstring_interpolation_yields_names() {
        let source = "msg = f\"hello {user}\"\n";
        let tokens = python().tokenise(source).expect("tokenise");

        assert_eq!(names(&tokens), vec!["msg", "user"]);
    }

    #[test]
    fn test_rust_identifier_categories() {
        let lexer = TreeSitterLexer::new("rust", tree_sitter_rust::LANGUAGE.into());
        let source = "struct Point { x: i32 }\nfn norm(p: Point) -> i32 { p.x }\n";
        let tokens = lexer.tokenise(source).expect("tokenise");

        let point = tokens.iter().find(|t| t.value == "Point").expect("Point token");
        assert_eq!(point.token_type, TokenType::NameClass);
        let i32_token = tokens.iter().find(|t| t.value == "i32").expect("i32 token");
        assert_eq!(i32_token.token_type, TokenType::KeywordType);
        assert!(names(&tokens).contains(&"norm"));
    }

    #[test]
    fn test_macro_body_yields_names() {
        let lexer = TreeSitterLexer::new("c", tree_sitter_c::LANGUAGE.into());
        let source = "#define SQ(x) ((x)*(x))\n#define LIMIT 10\n";
        let tokens = lexer.tokenise(source).expect("tokenise");

        assert_eq!(names(&tokens), vec!["SQ", "x", "x", "x", "LIMIT"]);
        let rebuilt: String = tokens.iter().map(|t| t.value).collect();
        assert_eq!(rebuilt, source);
    }

    #[test]
    fn test_empty_source() {
        let tokens = python().tokenise("").expect("tokenise");
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_classify_anonymous() {
        assert_eq!(classify_leaf("return", false), TokenType::Keyword);
        assert_eq!(classify_leaf("(", false), TokenType::Punctuation);
        assert_eq!(classify_leaf("+=", false), TokenType::Operator);
        assert_eq!(classify_leaf("`", false), TokenType::LiteralString);
    }

    #[test]
    fn test_classify_named() {
        assert_eq!(classify_leaf("identifier", true), TokenType::Name);
        assert_eq!(classify_leaf("property_identifier", true), TokenType::NameAttribute);
        assert_eq!(classify_leaf("integer", true), TokenType::LiteralNumber);
        assert_eq!(classify_leaf("true", true), TokenType::KeywordConstant);
        assert_eq!(classify_leaf("whatever_else", true), TokenType::Other);
    }
}
