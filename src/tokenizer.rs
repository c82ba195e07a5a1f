use crate::location::Location;
use crate::tokens::{Token, TokenType, TOKEN_REFS};
use crate::types::{Error, Result};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TOKEN_TABLE: Vec<(Regex, TokenType)> = TOKEN_REFS
        .iter()
        .map(|(pattern, token_type)| (Regex::new(pattern).expect("token rule"), *token_type))
        .collect();
    static ref IDENT_ESCAPE: Regex = Regex::new(r"\\(.)").expect("escape rule");
}

/// CSS selector scanner. Walks the raw input left to right, skipping
/// whitespace and matching the token rules of [`TOKEN_REFS`] first-match-wins.
#[derive(Debug)]
pub struct Tokenizer<'input> {
    raw: &'input str,
    cursor: usize,
    line: u32,
    column: u32,
}

/// Scan `input` into a token vector terminated by an Eof sentinel.
pub fn tokenize(input: &str) -> Result<Vec<Token>> {
    Tokenizer::new(input).tokenize()
}

impl<'input> Tokenizer<'input> {
    pub fn new(raw: &'input str) -> Self {
        Tokenizer {
            raw,
            cursor: 0,
            line: 1,
            column: 1,
        }
    }

    pub fn tokenize(mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::with_capacity(self.raw.len() + self.raw.len() / 2);

        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        tokens.push(Token::new(TokenType::Eof, "", self.location()));

        Ok(tokens)
    }

    pub fn location(&self) -> Location {
        Location::new(self.line, self.column)
    }

    fn has_more_tokens(&self) -> bool {
        self.cursor < self.raw.len()
    }

    /// Returns the next token, or `None` once the input is exhausted.
    /// Fails with [`Error::Lex`] on a character no rule accepts.
    pub fn next_token(&mut self) -> Result<Option<Token>> {
        self.skip_whitespace();

        if !self.has_more_tokens() {
            return Ok(None);
        }

        let rest = &self.raw[self.cursor..];
        let location = self.location();

        let mut matched = None;
        for (re, token_type) in TOKEN_TABLE.iter() {
            if let Some(m) = re.find(rest) {
                matched = Some((m.as_str().to_string(), *token_type));
                break;
            }
        }

        let (lexeme, token_type) = match matched {
            Some(found) => found,
            None => {
                let character = rest.chars().next().unwrap_or_default();
                return Err(Error::Lex {
                    character,
                    location,
                });
            }
        };

        let value = match token_type {
            // the outer quotes go, the inner escapes stay untouched
            TokenType::String => lexeme[1..lexeme.len() - 1].to_string(),
            // `\X` escapes collapse to their bare character
            TokenType::Ident => IDENT_ESCAPE.replace_all(&lexeme, "$1").into_owned(),
            _ => lexeme.clone(),
        };

        self.advance(&lexeme);
        Ok(Some(Token::new(token_type, value, location)))
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.raw[self.cursor..].chars().next() {
            if !matches!(c, ' ' | '\t' | '\n' | '\r') {
                break;
            }
            self.advance_char(c);
        }
    }

    fn advance(&mut self, lexeme: &str) {
        for c in lexeme.chars() {
            self.advance_char(c);
        }
    }

    fn advance_char(&mut self, c: char) {
        self.cursor += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += c.len_utf8() as u32;
        }
    }
}

/// The scanner throws whitespace away, which erases the difference between
/// `div p` and `divp`. This pass puts the relationship back as an explicit
/// token: wherever one compound selector ends and the next one begins with
/// nothing in between, a descendant-combinator token is inserted, carrying
/// the position of the token on its left.
pub fn insert_descendant_combinators(tokens: Vec<Token>) -> Vec<Token> {
    let mut result: Vec<Token> = Vec::with_capacity(tokens.len() + tokens.len() / 2);

    for token in tokens {
        if let Some(previous) = result.last() {
            if ends_compound_selector(previous.token_type)
                && starts_compound_selector(token.token_type)
                && !same_compound_pair(previous.token_type, token.token_type)
            {
                let synthetic =
                    Token::new(TokenType::DescendantCombinator, " ", previous.location);
                result.push(synthetic);
            }
        }
        result.push(token);
    }

    result
}

fn ends_compound_selector(token_type: TokenType) -> bool {
    matches!(
        token_type,
        TokenType::Ident | TokenType::Star | TokenType::RParen | TokenType::RBracket
    )
}

fn starts_compound_selector(token_type: TokenType) -> bool {
    matches!(
        token_type,
        TokenType::Ident
            | TokenType::Star
            | TokenType::Dot
            | TokenType::Hash
            | TokenType::LBracket
            | TokenType::Colon
    )
}

/// `div.foo` is a single compound selector: a trailing subclass selector
/// attaches to the element selector on its left rather than starting a new
/// compound selector.
fn same_compound_pair(left: TokenType, right: TokenType) -> bool {
    matches!(left, TokenType::Ident | TokenType::Star)
        && matches!(
            right,
            TokenType::Dot | TokenType::Hash | TokenType::LBracket | TokenType::Colon
        )
}
