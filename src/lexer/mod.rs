//! Tokenizer for type annotations
//!
//! Splits an annotation such as `Int -> (Maybe a -> Int) -> a b` into a lazy,
//! forward-only stream of [`Token`]s. Whitespace between tokens is dropped.
//! Once the input is exhausted the tokenizer keeps answering with an
//! [`TokenKind::Eof`] token.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Byte range into the annotation text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn merge(&self, other: &Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Closed set of token classes. `Eof` marks the end of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    UpperIdent,
    LowerIdent,
    Arrow,
    LParen,
    RParen,
    Eof,
}

impl TokenKind {
    pub fn is_ident(&self) -> bool {
        matches!(self, TokenKind::UpperIdent | TokenKind::LowerIdent)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::UpperIdent => "UPPER_ID",
            TokenKind::LowerIdent => "LOWER_ID",
            TokenKind::Arrow => "ARROW",
            TokenKind::LParen => "L_PAREN",
            TokenKind::RParen => "R_PAREN",
            TokenKind::Eof => "EOF",
        };
        f.write_str(name)
    }
}

/// A classified piece of the input and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub position: Span,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>, position: Span) -> Self {
        Self {
            kind,
            value: value.into(),
            position,
        }
    }

    pub fn eof(at: usize) -> Self {
        Self::new(TokenKind::Eof, "", Span::new(at, at))
    }

    /// Tokenize the whole input eagerly. The last token is always `Eof`.
    pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
        Tokenizer::new(source).collect()
    }

    /// Returns a human-readable description of the token
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::UpperIdent | TokenKind::LowerIdent => {
                format!("identifier '{}'", self.value)
            }
            TokenKind::Arrow => "'->'".to_string(),
            TokenKind::LParen => "'('".to_string(),
            TokenKind::RParen => "')'".to_string(),
            TokenKind::Eof => "end of input".to_string(),
        }
    }
}

/// No token pattern matches the remaining input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub remainder: String,
    pub position: usize,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid text at offset {}: {:?}",
            self.position, self.remainder
        )
    }
}

impl std::error::Error for LexError {}

// Tried in order; the first match wins. Each pattern also eats trailing whitespace.
static LEXEMES: LazyLock<Vec<(Regex, TokenKind)>> = LazyLock::new(|| {
    [
        (r"^([A-Z]\w*)\s*", TokenKind::UpperIdent),
        (r"^([a-z]\w*)\s*", TokenKind::LowerIdent),
        (r"^(->)\s*", TokenKind::Arrow),
        (r"^(\()\s*", TokenKind::LParen),
        (r"^(\))\s*", TokenKind::RParen),
    ]
    .into_iter()
    .map(|(pattern, kind)| (Regex::new(pattern).unwrap(), kind))
    .collect()
});

static LEADING_WS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*").unwrap());

/// Lazy, single-pass token stream over an annotation.
pub struct Tokenizer<'src> {
    source: &'src str,
    offset: usize,
    done: bool,
}

impl<'src> Tokenizer<'src> {
    pub fn new(source: &'src str) -> Self {
        let offset = LEADING_WS.find(source).map(|m| m.end()).unwrap_or(0);
        Self {
            source,
            offset,
            done: false,
        }
    }

    /// The text that has not been consumed yet.
    pub fn remainder(&self) -> &'src str {
        &self.source[self.offset..]
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn next_token(&mut self) -> Result<Token, LexError> {
        let rest = self.remainder();
        if rest.is_empty() {
            return Ok(Token::eof(self.offset));
        }

        for (pattern, kind) in LEXEMES.iter() {
            let Some(caps) = pattern.captures(rest) else {
                continue;
            };
            let (Some(whole), Some(text)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            let start = self.offset;
            let token = Token::new(
                *kind,
                text.as_str(),
                Span::new(start, start + text.end()),
            );
            self.offset += whole.end();
            tracing::trace!(kind = %token.kind, value = %token.value, at = start, "token");
            return Ok(token);
        }

        Err(LexError {
            remainder: rest.to_string(),
            position: self.offset,
        })
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let result = self.next_token();
        if !matches!(&result, Ok(token) if token.kind != TokenKind::Eof) {
            self.done = true;
        }
        Some(result)
    }
}
