//! # Errors
//!
//! A failed [`crate::parse`] reports one of two things:
//!
//! - [`LexError`]: the input contains text no token pattern accepts
//!   (`a -> 1`, `a + b`).
//! - [`ParseError`]: the tokens do not form an annotation (`(a -> b`,
//!   `a ->`, `()`).
//!
//! Both abort the whole parse; there is no partial result.

use std::fmt;

use crate::lexer::{LexError, Span, Token};

/// Grammar violation in an otherwise well-tokenized annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A token showed up where the grammar does not allow it.
    UnexpectedToken {
        found: Token,
        expected: &'static str,
    },
    /// Input ended while an operand was still required.
    UnexpectedEnd {
        expected: &'static str,
        position: usize,
    },
    /// A `(` was never closed.
    UnclosedParen { open: Span },
    /// `()` with nothing inside.
    EmptyParens { span: Span },
    /// Parentheses nested deeper than the parser allows.
    TooDeep { open: Span },
}

impl ParseError {
    pub fn unexpected(found: Token, expected: &'static str) -> Self {
        ParseError::UnexpectedToken { found, expected }
    }

    pub fn span(&self) -> Span {
        match self {
            ParseError::UnexpectedToken { found, .. } => found.position,
            ParseError::UnexpectedEnd { position, .. } => Span::new(*position, *position),
            ParseError::UnclosedParen { open } => *open,
            ParseError::EmptyParens { span } => *span,
            ParseError::TooDeep { open } => *open,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnexpectedToken { found, expected } => write!(
                f,
                "expected {}, found {} at {}",
                expected,
                found.describe(),
                found.position
            ),
            ParseError::UnexpectedEnd { expected, position } => {
                write!(f, "expected {}, found end of input at {}", expected, position)
            }
            ParseError::UnclosedParen { open } => {
                write!(f, "unclosed '(' opened at {}", open)
            }
            ParseError::EmptyParens { span } => write!(f, "empty parentheses at {}", span),
            ParseError::TooDeep { open } => {
                write!(f, "parentheses nested too deeply at {}", open)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Any failure of [`crate::parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Lex(LexError),
    Parse(ParseError),
}

impl Error {
    /// Location of the offending input.
    pub fn span(&self) -> Span {
        match self {
            Error::Lex(err) => Span::new(err.position, err.position + err.remainder.len()),
            Error::Parse(err) => err.span(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Lex(err) => write!(f, "Lex error: {}", err),
            Error::Parse(err) => write!(f, "Parse error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Lex(err) => Some(err),
            Error::Parse(err) => Some(err),
        }
    }
}

impl From<LexError> for Error {
    fn from(err: LexError) -> Self {
        Error::Lex(err)
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::Parse(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::TokenKind;

    #[test]
    fn test_unexpected_token_message() {
        let found = Token::new(TokenKind::RParen, ")", Span::new(3, 4));
        let err = ParseError::unexpected(found, "a type");
        assert_eq!(err.to_string(), "expected a type, found ')' at 3..4");
        assert_eq!(err.span(), Span::new(3, 4));
    }

    #[test]
    fn test_lex_error_span_covers_remainder() {
        let err = Error::from(LexError {
            remainder: "1 b".to_string(),
            position: 5,
        });
        assert_eq!(err.span(), Span::new(5, 8));
        assert!(err.to_string().starts_with("Lex error"));
    }
}
