//! Recursive-descent parser for type annotations
//!
//! ```text
//! arrow       := application ("->" application)*
//! application := atom atom*
//! atom        := UPPER_ID | LOWER_ID | "(" arrow ")"
//! ```
//!
//! Juxtaposition binds tighter than `->`, and `->` nests to the right.
//! A parenthesized group is parsed by a nested call on the same token stream
//! and then used like a single identifier. Groups may nest at most
//! [`MAX_GROUP_DEPTH`] deep.

mod state;

pub use state::{ParseResult, ParseState};

use crate::ast::Type;
use crate::error::ParseError;
use crate::lexer::{Token, TokenKind, Tokenizer};

const EXPECTED_TYPE: &str = "a type";

/// Deepest allowed nesting of parenthesized groups.
pub const MAX_GROUP_DEPTH: usize = 128;

/// Parse a complete annotation.
pub fn parse(text: &str) -> ParseResult<Type> {
    tracing::debug!(input = text, "parsing annotation");
    let mut state = ParseState::new(Tokenizer::new(text));
    let ty = parse_tokens(&mut state)?;
    tracing::debug!(output = %ty, "parsed annotation");
    Ok(ty)
}

/// Parse one annotation from `state` and require the input to end after it.
pub fn parse_tokens(state: &mut ParseState) -> ParseResult<Type> {
    let ty = arrow(state)?;
    let next = state.advance()?;
    if next.kind != TokenKind::Eof {
        return Err(ParseError::unexpected(next, "'->' or end of input").into());
    }
    Ok(ty)
}

/// Arrow chains are collected in a loop and folded from the right, so their
/// length does not cost stack.
fn arrow(state: &mut ParseState) -> ParseResult<Type> {
    let mut params = Vec::new();
    let mut last = application(state)?;
    while state.peek()?.kind == TokenKind::Arrow {
        state.advance()?;
        params.push(last);
        last = application(state)?;
    }
    Ok(params
        .into_iter()
        .rev()
        .fold(last, |result, param| Type::arrow(param, result)))
}

fn application(state: &mut ParseState) -> ParseResult<Type> {
    let mut parts = vec![atom(state)?];
    while starts_atom(state.peek()?) {
        parts.push(atom(state)?);
    }
    Ok(Type::app(parts))
}

fn starts_atom(token: &Token) -> bool {
    token.kind.is_ident() || token.kind == TokenKind::LParen
}

fn atom(state: &mut ParseState) -> ParseResult<Type> {
    let token = state.advance()?;
    match token.kind {
        TokenKind::UpperIdent | TokenKind::LowerIdent => Ok(Type::Name(token.value)),
        TokenKind::LParen => group(state, token),
        TokenKind::Eof => Err(ParseError::UnexpectedEnd {
            expected: EXPECTED_TYPE,
            position: token.position.start,
        }
        .into()),
        _ => Err(ParseError::unexpected(token, EXPECTED_TYPE).into()),
    }
}

fn group(state: &mut ParseState, open: Token) -> ParseResult<Type> {
    tracing::debug!(at = open.position.start, "entering group");
    if state.depth() >= MAX_GROUP_DEPTH {
        return Err(ParseError::TooDeep {
            open: open.position,
        }
        .into());
    }
    match state.peek()?.kind {
        TokenKind::RParen => {
            let close = state.advance()?;
            return Err(ParseError::EmptyParens {
                span: open.position.merge(&close.position),
            }
            .into());
        }
        TokenKind::Eof => {
            return Err(ParseError::UnclosedParen {
                open: open.position,
            }
            .into());
        }
        _ => {}
    }

    state.enter_group();
    let inner = arrow(state)?;
    state.leave_group();
    let close = state.advance()?;
    match close.kind {
        TokenKind::RParen => {
            tracing::debug!(at = close.position.start, "leaving group");
            Ok(inner)
        }
        TokenKind::Eof => Err(ParseError::UnclosedParen {
            open: open.position,
        }
        .into()),
        _ => Err(ParseError::unexpected(close, "')'").into()),
    }
}
