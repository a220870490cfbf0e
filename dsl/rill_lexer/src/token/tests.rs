use crate::{Lexer, Token, TokenKind};

fn lex(source: &str) -> Vec<Token<'_>> {
    Lexer::new(source).tokens().to_vec()
}

// === Numeric queries ===

#[test]
fn float_literal_reports_is_float() {
    let tokens = lex("3.14");
    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert!(tokens[0].is_float());
}

#[test]
fn integer_literal_is_not_float() {
    let tokens = lex("42");
    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert!(!tokens[0].is_float());
}

#[test]
fn number_value_converts() {
    let tokens = lex("3.14 42");
    assert_eq!(tokens[0].number_value(), Some(3.14));
    assert_eq!(tokens[1].number_value(), Some(42.0));
}

#[test]
fn leading_dot_literal_converts() {
    let tokens = lex(".5");
    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert!(tokens[0].is_float());
    assert_eq!(tokens[0].number_value(), Some(0.5));
}

#[test]
fn non_number_has_no_value() {
    let tokens = lex("width");
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert!(!tokens[0].is_float());
    assert_eq!(tokens[0].number_value(), None);
}

// === Position metadata ===

#[test]
fn line_and_column_are_zero_based() {
    let tokens = lex("a\n  b");
    assert_eq!((tokens[0].line, tokens[0].column), (0, 0));
    assert_eq!((tokens[1].line, tokens[1].column), (1, 2));
}
