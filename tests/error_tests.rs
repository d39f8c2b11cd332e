use typesig::lexer::{Span, TokenKind};
use typesig::{Error, ParseError, parse};

fn parse_error(input: &str) -> ParseError {
    match parse(input) {
        Err(Error::Parse(err)) => err,
        other => panic!("expected parse error for {input:?}, got {other:?}"),
    }
}

#[test]
fn unbalanced_parens_fail() {
    let err = parse_error("(a -> b");
    assert_eq!(
        err,
        ParseError::UnclosedParen {
            open: Span::new(0, 1)
        }
    );
}

#[test]
fn unbalanced_nested_paren_reports_unclosed_one() {
    let err = parse_error("(a -> (b c)");
    assert_eq!(
        err,
        ParseError::UnclosedParen {
            open: Span::new(0, 1)
        }
    );
    let err = parse_error("a -> (b (c)");
    assert_eq!(
        err,
        ParseError::UnclosedParen {
            open: Span::new(5, 6)
        }
    );
}

#[test]
fn stray_close_paren_fails() {
    let err = parse_error("a -> b)");
    assert!(matches!(
        err,
        ParseError::UnexpectedToken { ref found, .. } if found.kind == TokenKind::RParen
    ));
}

#[test]
fn invalid_character_fails() {
    match parse("a -> 1") {
        Err(Error::Lex(err)) => {
            assert_eq!(err.remainder, "1");
            assert_eq!(err.position, 5);
        }
        other => panic!("expected lex error, got {other:?}"),
    }
}

#[test]
fn lex_error_wins_over_later_grammar() {
    // The bad character is reached before the missing paren is noticed.
    assert!(matches!(parse("(a -> $"), Err(Error::Lex(_))));
}

#[test]
fn dangling_arrow_fails() {
    let err = parse_error("a ->");
    assert_eq!(
        err,
        ParseError::UnexpectedEnd {
            expected: "a type",
            position: 4
        }
    );
}

#[test]
fn missing_left_operand_fails() {
    let err = parse_error("-> a");
    assert!(matches!(
        err,
        ParseError::UnexpectedToken { ref found, .. } if found.kind == TokenKind::Arrow
    ));
}

#[test]
fn consecutive_arrows_fail() {
    let err = parse_error("a -> -> b");
    assert!(matches!(
        err,
        ParseError::UnexpectedToken { ref found, .. } if found.position == Span::new(5, 7)
    ));
}

#[test]
fn empty_parens_fail() {
    assert!(matches!(
        parse_error("()"),
        ParseError::EmptyParens { .. }
    ));
    assert!(matches!(
        parse_error("Maybe ( ) -> a"),
        ParseError::EmptyParens { span } if span == Span::new(6, 9)
    ));
}

#[test]
fn empty_input_fails() {
    assert!(matches!(
        parse_error("   "),
        ParseError::UnexpectedEnd { .. }
    ));
}

#[test]
fn errors_display_location() {
    let err = parse("(a -> b").unwrap_err();
    assert_eq!(err.to_string(), "Parse error: unclosed '(' opened at 0..1");
    assert_eq!(err.span(), Span::new(0, 1));

    let err = parse("a -> 1").unwrap_err();
    assert_eq!(err.to_string(), "Lex error: invalid text at offset 5: \"1\"");
}

#[test]
fn errors_expose_source() {
    use std::error::Error as _;

    let err = parse("a ->").unwrap_err();
    assert!(err.source().is_some());
}

#[test]
fn deep_nesting_fails_cleanly() {
    let depth = typesig::parser::MAX_GROUP_DEPTH;
    let err = parse_error(&format!("{}a{}", "(".repeat(depth + 1), ")".repeat(depth + 1)));
    assert_eq!(
        err,
        ParseError::TooDeep {
            open: Span::new(depth, depth + 1)
        }
    );

    let err = parse_error(&format!("{}a{}", "(".repeat(500), ")".repeat(500)));
    assert!(matches!(err, ParseError::TooDeep { .. }));
}
