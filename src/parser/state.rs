use crate::error::Error;
use crate::lexer::{Token, Tokenizer};

pub type ParseResult<T> = Result<T, Error>;

/// Token cursor with one token of lookahead over a lazy [`Tokenizer`].
pub struct ParseState<'src> {
    tokens: Tokenizer<'src>,
    peeked: Option<Token>,
    depth: usize,
}

impl<'src> ParseState<'src> {
    pub fn new(tokens: Tokenizer<'src>) -> Self {
        Self {
            tokens,
            peeked: None,
            depth: 0,
        }
    }

    pub fn peek(&mut self) -> ParseResult<&Token> {
        let token = match self.peeked.take() {
            Some(token) => token,
            None => self.tokens.next_token()?,
        };
        Ok(&*self.peeked.insert(token))
    }

    /// Consume the next token. Past the end this keeps returning `Eof`.
    pub fn advance(&mut self) -> ParseResult<Token> {
        match self.peeked.take() {
            Some(token) => Ok(token),
            None => Ok(self.tokens.next_token()?),
        }
    }

    /// Number of parenthesized groups currently open.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn enter_group(&mut self) {
        self.depth += 1;
    }

    pub fn leave_group(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::TokenKind;

    #[test]
    fn test_peek_does_not_consume() {
        let mut state = ParseState::new(Tokenizer::new("a b"));
        assert_eq!(state.peek().unwrap().value, "a");
        assert_eq!(state.peek().unwrap().value, "a");
        assert_eq!(state.advance().unwrap().value, "a");
        assert_eq!(state.advance().unwrap().value, "b");
        assert_eq!(state.advance().unwrap().kind, TokenKind::Eof);
        assert_eq!(state.advance().unwrap().kind, TokenKind::Eof);
    }
}
