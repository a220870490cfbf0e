//! Single-pass scanner producing the token sequence and line index.
//!
//! The scan loop dispatches on the current byte and calls a focused
//! method per token class. Scanning is eager: [`Lexer::new`] runs to
//! end of input before returning, and never fails. Malformed input
//! degrades instead of erroring: an unterminated string's span extends
//! to end of input, and any byte outside the known classes becomes a
//! one-character `Operator` token, consumed greedily left to right.
//!
//! # Column rule
//!
//! A token's column is the exact byte offset of its first byte from
//! the start of its line, computed as `token_start - line_start`. This
//! holds no matter what was skipped earlier on the line (whitespace,
//! comments), so diagnostic carets are exact.

use memchr::{memchr, memchr_iter};

use crate::line_index::LineIndex;
use crate::span::SourceSpan;
use crate::token::{Token, TokenKind};

/// Eager tokenizer for one source string.
///
/// Construction scans the whole input. The outputs (token sequence and
/// line index) borrow the source, which must outlive them.
#[derive(Clone, Debug)]
pub struct Lexer<'src> {
    source: &'src str,
    tokens: Vec<Token<'src>>,
    lines: LineIndex<'src>,
}

impl<'src> Lexer<'src> {
    /// Scan `source` to completion.
    pub fn new(source: &'src str) -> Self {
        let mut scan = Scan::new(source);
        scan.run();
        Self {
            source,
            tokens: scan.tokens,
            lines: scan.lines,
        }
    }

    /// The original source buffer.
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// The complete token sequence, in source order.
    pub fn tokens(&self) -> &[Token<'src>] {
        &self.tokens
    }

    /// The line index recorded during scanning.
    pub fn line_index(&self) -> &LineIndex<'src> {
        &self.lines
    }

    /// Hand both outputs to a consumer by move.
    pub fn into_parts(self) -> (Vec<Token<'src>>, LineIndex<'src>) {
        (self.tokens, self.lines)
    }
}

/// Mutable scan state, alive only inside [`Lexer::new`].
struct Scan<'src> {
    source: &'src str,
    bytes: &'src [u8],
    /// Byte offset of the next unread byte.
    pos: usize,
    /// 0-based line number of `pos`.
    line: u32,
    /// Byte offset where the current line starts.
    line_start: usize,
    tokens: Vec<Token<'src>>,
    lines: LineIndex<'src>,
}

impl<'src> Scan<'src> {
    fn new(source: &'src str) -> Self {
        Self {
            source,
            bytes: source.as_bytes(),
            pos: 0,
            line: 0,
            line_start: 0,
            tokens: Vec::new(),
            lines: LineIndex::default(),
        }
    }

    fn run(&mut self) {
        while self.pos < self.bytes.len() {
            match self.bytes[self.pos] {
                b'\n' => self.newline(),
                b' ' | b'\t' | b'\r' | 0x0B | 0x0C => self.pos += 1,
                b'/' if self.peek() == Some(b'/') => self.line_comment(),
                b'"' | b'\'' => self.string_literal(),
                b'0'..=b'9' => self.number(),
                b'.' if self.peek().is_some_and(|b| b.is_ascii_digit()) => self.number(),
                b'A'..=b'Z' | b'a'..=b'z' | b'_' => self.identifier(),
                _ => self.operator(),
            }
        }
        // A trailing partial line (no terminating newline) still gets
        // closed into the index.
        if self.line_start < self.bytes.len() {
            self.close_line(self.bytes.len());
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos + 1).copied()
    }

    /// Record `line_start..end` as one line of the index.
    fn close_line(&mut self, end: usize) {
        self.lines.push(&self.source[self.line_start..end], self.line_start);
    }

    fn newline(&mut self) {
        self.close_line(self.pos);
        self.pos += 1;
        self.line_start = self.pos;
        self.line += 1;
    }

    /// `//` comment: skip to (not including) the next newline or end
    /// of input. Produces no token; the main loop closes the line.
    fn line_comment(&mut self) {
        match memchr(b'\n', &self.bytes[self.pos..]) {
            Some(offset) => self.pos += offset,
            None => self.pos = self.bytes.len(),
        }
    }

    /// Quoted literal, `"` or `'`, through the matching unescaped
    /// close quote of the same kind. A backslash escapes the following
    /// byte; both bytes stay in the span. No closing quote before end
    /// of input is not an error: the span extends to end of input.
    fn string_literal(&mut self) {
        let start = self.pos;
        let quote = self.bytes[self.pos];
        self.pos += 1;
        while self.pos < self.bytes.len() && self.bytes[self.pos] != quote {
            if self.bytes[self.pos] == b'\\' && self.pos + 1 < self.bytes.len() {
                self.pos += 1;
            }
            self.pos += 1;
        }
        if self.pos < self.bytes.len() {
            self.pos += 1; // closing quote
        }
        self.emit(TokenKind::String, start);
        self.account_interior_newlines(start);
    }

    /// Close any lines whose newline fell inside the token just
    /// emitted. Keeps the line index consistent when a string literal
    /// spans multiple lines.
    fn account_interior_newlines(&mut self, start: usize) {
        let bytes = self.bytes;
        let end = self.pos;
        for offset in memchr_iter(b'\n', &bytes[start..end]) {
            let newline = start + offset;
            self.close_line(newline);
            self.line_start = newline + 1;
            self.line += 1;
        }
    }

    /// Digits with at most one decimal point. A second `.` terminates
    /// the literal instead of being consumed.
    fn number(&mut self) {
        let start = self.pos;
        let mut seen_dot = false;
        while self.pos < self.bytes.len() {
            match self.bytes[self.pos] {
                b'0'..=b'9' => self.pos += 1,
                b'.' if !seen_dot => {
                    seen_dot = true;
                    self.pos += 1;
                }
                _ => break,
            }
        }
        self.emit(TokenKind::Number, start);
    }

    fn identifier(&mut self) {
        let start = self.pos;
        while self.pos < self.bytes.len() && is_ident_continue(self.bytes[self.pos]) {
            self.pos += 1;
        }
        self.emit(TokenKind::Identifier, start);
    }

    /// One character, or one of the fixed two-character forms.
    ///
    /// Consumes a full UTF-8 character so spans stay on character
    /// boundaries even for stray non-ASCII input.
    fn operator(&mut self) {
        let start = self.pos;
        let first = self.bytes[self.pos];
        self.pos += utf8_char_width(first);
        if let Some(second) = self.bytes.get(self.pos).copied() {
            if is_two_char_operator(first, second) {
                self.pos += 1;
            }
        }
        self.emit(TokenKind::Operator, start);
    }

    fn emit(&mut self, kind: TokenKind, start: usize) {
        let column = u32::try_from(start - self.line_start).unwrap_or(u32::MAX);
        let text = SourceSpan::new(self.source, start, self.pos);
        self.tokens.push(Token::new(kind, text, self.line, column));
    }
}

fn is_ident_continue(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

/// The fixed two-character operator table:
/// `==` `!=` `<=` `>=` `&&` `||` `+=` `-=`.
fn is_two_char_operator(first: u8, second: u8) -> bool {
    matches!(
        (first, second),
        (b'=' | b'!' | b'<' | b'>' | b'+' | b'-', b'=') | (b'&', b'&') | (b'|', b'|')
    )
}

/// Width in bytes of the UTF-8 character starting with `byte`.
fn utf8_char_width(byte: u8) -> usize {
    match byte {
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    }
}
