use crate::location::Location;
use std::fmt::{self, Debug, Formatter};

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum TokenType {
    Ident,
    String,
    Number,
    Hash,
    Dot,
    Star,
    LBracket,
    RBracket,
    LParen,
    RParen,
    Colon,
    Comma,
    Minus,
    Equal,
    /// A `~=` include-match token
    IncludeMatch,
    /// A `|=` dash-match token
    DashMatch,
    /// A `^=` prefix-match token
    PrefixMatch,
    /// A `$=` suffix-match token
    SuffixMatch,
    /// A `*=` substring-match token
    SubstringMatch,
    /// A `>` sign
    ChildCombinator,
    /// A `+` sign
    NextSiblingCombinator,
    /// A `~` sign
    SubsequentSiblingCombinator,
    /// A single space between two compound selectors. Synthesized by
    /// [`insert_descendant_combinators`](crate::tokenizer::insert_descendant_combinators);
    /// the scanner itself never emits it.
    DescendantCombinator,
    Eof,
}

impl TokenType {
    pub fn is_combinator(&self) -> bool {
        matches!(
            self,
            TokenType::ChildCombinator
                | TokenType::NextSiblingCombinator
                | TokenType::SubsequentSiblingCombinator
                | TokenType::DescendantCombinator
        )
    }
}

#[derive(PartialEq, Clone)]
pub struct Token {
    pub token_type: TokenType,
    pub value: String,
    pub location: Location,
}

impl Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({})", self.token_type, self.value)
    }
}

impl Token {
    pub fn new(token_type: TokenType, value: impl Into<String>, location: Location) -> Token {
        Token {
            token_type,
            value: value.into(),
            location,
        }
    }
}

static STRING: &str = r#"^(?:"(?:[^"\\]|\\.)*"|'(?:[^'\\]|\\.)*')"#;
static NUMBER: &str = r"^[0-9]+(?:\.[0-9]+)?";
static INCLUDE_MATCH: &str = r"^~=";
static DASH_MATCH: &str = r"^\|=";
static PREFIX_MATCH: &str = r"^\^=";
static SUFFIX_MATCH: &str = r"^\$=";
static SUBSTRING_MATCH: &str = r"^\*=";
static IDENT: &str = r"^(?:--|-?[a-zA-Z_])(?:[\w-]|\\[^\n\r\f])*";
static CHILD_COMBINATOR: &str = "^>";
static NEXT_SIBLING_COMBINATOR: &str = r"^\+";
static SUBSEQUENT_SIBLING_COMBINATOR: &str = r"^~";
static LBRACKET: &str = r"^\[";
static RBRACKET: &str = r"^\]";
static LPAREN: &str = r"^\(";
static RPAREN: &str = r"^\)";
static COLON: &str = r"^:";
static COMMA: &str = r"^,";
static DOT: &str = r"^\.";
static HASH: &str = r"^#";
static STAR: &str = r"^\*";
static EQUAL: &str = r"^=";
static MINUS: &str = r"^-";

/// Token rules in matching order. First match wins, so the two-character
/// matchers come before `~`, `*` and `=`, and IDENT comes before the bare
/// `-` rule so dash-led identifiers (`-moz-fit-content`, `--primary`, `-n`)
/// scan as a single token.
pub static TOKEN_REFS: [(&str, TokenType); 22] = [
    (STRING, TokenType::String),
    (NUMBER, TokenType::Number),
    (INCLUDE_MATCH, TokenType::IncludeMatch),
    (DASH_MATCH, TokenType::DashMatch),
    (PREFIX_MATCH, TokenType::PrefixMatch),
    (SUFFIX_MATCH, TokenType::SuffixMatch),
    (SUBSTRING_MATCH, TokenType::SubstringMatch),
    (IDENT, TokenType::Ident),
    (CHILD_COMBINATOR, TokenType::ChildCombinator),
    (NEXT_SIBLING_COMBINATOR, TokenType::NextSiblingCombinator),
    (
        SUBSEQUENT_SIBLING_COMBINATOR,
        TokenType::SubsequentSiblingCombinator,
    ),
    (LBRACKET, TokenType::LBracket),
    (RBRACKET, TokenType::RBracket),
    (LPAREN, TokenType::LParen),
    (RPAREN, TokenType::RParen),
    (COLON, TokenType::Colon),
    (COMMA, TokenType::Comma),
    (DOT, TokenType::Dot),
    (HASH, TokenType::Hash),
    (STAR, TokenType::Star),
    (EQUAL, TokenType::Equal),
    (MINUS, TokenType::Minus),
];
