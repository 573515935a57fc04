//! Token categories produced by lexers
//!
//! Categories form a dotted hierarchy (`Name.Class` is a sub-category of
//! `Name`). Reference extraction only cares about the `Name` branch.

use strum_macros::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum TokenType {
    #[strum(serialize = "Text")]
    Text,
    #[strum(serialize = "Text.Whitespace")]
    Whitespace,
    #[strum(serialize = "Other")]
    Other,
    #[strum(serialize = "Error")]
    Error,

    #[strum(serialize = "Keyword")]
    Keyword,
    #[strum(serialize = "Keyword.Constant")]
    KeywordConstant,
    #[strum(serialize = "Keyword.Pseudo")]
    KeywordPseudo,
    #[strum(serialize = "Keyword.Type")]
    KeywordType,

    #[strum(serialize = "Name")]
    Name,
    #[strum(serialize = "Name.Attribute")]
    NameAttribute,
    #[strum(serialize = "Name.Builtin")]
    NameBuiltin,
    #[strum(serialize = "Name.Class")]
    NameClass,
    #[strum(serialize = "Name.Function")]
    NameFunction,
    #[strum(serialize = "Name.Label")]
    NameLabel,
    #[strum(serialize = "Name.Namespace")]
    NameNamespace,
    #[strum(serialize = "Name.Variable")]
    NameVariable,

    #[strum(serialize = "Literal")]
    Literal,
    #[strum(serialize = "Literal.String")]
    LiteralString,
    #[strum(serialize = "Literal.String.Char")]
    LiteralStringChar,
    #[strum(serialize = "Literal.String.Regex")]
    LiteralStringRegex,
    #[strum(serialize = "Literal.Number")]
    LiteralNumber,

    #[strum(serialize = "Operator")]
    Operator,
    #[strum(serialize = "Punctuation")]
    Punctuation,
    #[strum(serialize = "Comment")]
    Comment,
}

impl TokenType {
    /// Direct parent category, `None` for top-level categories
    pub fn parent(self) -> Option<TokenType> {
        use TokenType::*;
        match self {
            Whitespace => Some(Text),
            KeywordConstant | KeywordPseudo | KeywordType => Some(Keyword),
            NameAttribute | NameBuiltin | NameClass | NameFunction | NameLabel
            | NameNamespace | NameVariable => Some(Name),
            LiteralString | LiteralNumber => Some(Literal),
            LiteralStringChar | LiteralStringRegex => Some(LiteralString),
            Text | Other | Error | Keyword | Name | Literal | Operator | Punctuation
            | Comment => None,
        }
    }

    /// True if `self` is `category` or one of its descendants
    pub fn in_category(self, category: TokenType) -> bool {
        let mut current = Some(self);
        while let Some(tt) = current {
            if tt == category {
                return true;
            }
            current = tt.parent();
        }
        false
    }

    pub fn is_name(self) -> bool {
        self.in_category(TokenType::Name)
    }
}

/// A categorized slice of the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub token_type: TokenType,
    pub value: &'a str,
}

impl<'a> Token<'a> {
    pub fn new(token_type: TokenType, value: &'a str) -> Self {
        Self { token_type, value }
    }
}
