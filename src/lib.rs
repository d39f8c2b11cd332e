//! # typesig - Haskell-style type annotation parser
//!
//! Reads annotations such as `Int -> (Maybe a -> Int) -> a b` into a small
//! tree and prints them back in canonical form. There is no type checking:
//! the crate only recognizes the surface syntax.
//!
//! ## Pipeline
//!
//! ```text
//! Annotation (String)
//!     ↓
//! [Tokenizer] → lazy Token stream
//!     ↓
//! [Parser] → ast::Type
//!     ↓
//! [fmt] → canonical String
//! ```
//!
//! ## Grammar
//!
//! ```text
//! expr   := simple | lambda | "(" expr ")"
//! simple := id | id simple
//! id     := UPPER_ID | LOWER_ID
//! lambda := expr "->" expr
//! ```
//!
//! Juxtaposition binds tighter than `->`, and `->` is right-associative:
//! `a b -> c -> d` reads as `(a b) -> (c -> d)`.
//!
//! ## Module Structure
//!
//! - [`lexer`] - Tokenization with one regex per token kind
//! - [`parser`] - Recursive-descent parsing over the token stream
//! - [`ast`] - The `Type` tree
//! - [`fmt`] - Canonical rendering and structure dumps
//! - [`error`] - Lex and parse errors
//!
//! ## Example
//!
//! ```
//! let ty = typesig::parse("(a -> b) -> Maybe a -> Maybe b").unwrap();
//! assert_eq!(ty.arity(), 2);
//! assert_eq!(ty.to_string(), "(a -> b) -> Maybe a -> Maybe b");
//! ```

pub mod ast;
pub mod error;
pub mod fmt;
pub mod lexer;
pub mod parser;

pub use ast::Type;
pub use error::{Error, ParseError};
pub use lexer::LexError;

/// Parse a type annotation.
pub fn parse(text: &str) -> Result<Type, Error> {
    parser::parse(text)
}
