use crate::Lexer;

// === Lookup ===

#[test]
fn lines_record_text_and_start() {
    let lexer = Lexer::new("one\ntwo\nthree");
    let index = lexer.line_index();
    assert_eq!(index.len(), 3);
    assert_eq!(index.line(0), Some("one"));
    assert_eq!(index.line(1), Some("two"));
    assert_eq!(index.line(2), Some("three"));
    assert_eq!(index.line_start(0), Some(0));
    assert_eq!(index.line_start(1), Some(4));
    assert_eq!(index.line_start(2), Some(8));
}

#[test]
fn out_of_range_lookup_is_none() {
    let lexer = Lexer::new("only");
    let index = lexer.line_index();
    assert_eq!(index.line(1), None);
    assert_eq!(index.line_start(1), None);
}

#[test]
fn empty_source_has_no_lines() {
    let lexer = Lexer::new("");
    assert!(lexer.line_index().is_empty());
}

// === Terminators ===

#[test]
fn trailing_newline_adds_no_empty_line() {
    let lexer = Lexer::new("a\nb\n");
    assert_eq!(lexer.line_index().len(), 2);
}

#[test]
fn missing_final_newline_still_closes_the_line() {
    let lexer = Lexer::new("a\nb");
    let index = lexer.line_index();
    assert_eq!(index.len(), 2);
    assert_eq!(index.line(1), Some("b"));
}

#[test]
fn carriage_return_stays_in_line_text() {
    let lexer = Lexer::new("a\r\nb");
    assert_eq!(lexer.line_index().line(0), Some("a\r"));
}

#[test]
fn blank_lines_are_recorded() {
    let lexer = Lexer::new("a\n\nb");
    let index = lexer.line_index();
    assert_eq!(index.len(), 3);
    assert_eq!(index.line(1), Some(""));
}
