//! Cursor for navigating the fixed token sequence.
//!
//! Owns the token sequence and line index produced by the lexer (both
//! immutable after construction) plus one mutable position. All
//! navigation is replayable: nothing here mutates the tokens, so a
//! fresh cursor over the same sequence observes identical results.

use std::mem;

use rill_lexer::{Lexer, LineIndex, Token};

use crate::error::{StreamError, StreamResult};
use crate::report;

/// Forward/backward-movable cursor over a lexed token sequence.
///
/// Invariant: the position is always in `[0, token_count]`;
/// `token_count` is a valid but terminal position meaning "exhausted".
#[derive(Clone, Debug)]
pub struct TokenCursor<'src> {
    tokens: Vec<Token<'src>>,
    lines: LineIndex<'src>,
    /// Index of the next unconsumed token.
    pos: usize,
}

impl<'src> TokenCursor<'src> {
    /// Create a cursor at position 0 over lexer output.
    pub fn new(tokens: Vec<Token<'src>>, lines: LineIndex<'src>) -> Self {
        Self {
            tokens,
            lines,
            pos: 0,
        }
    }

    /// Current position in the token stream.
    ///
    /// Useful for progress tracking: compare positions before and
    /// after a parse attempt to see whether tokens were consumed.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Total number of tokens in the stream.
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    fn out_of_bounds(&self) -> StreamError {
        StreamError::OutOfBounds {
            index: self.pos,
            limit: self.tokens.len(),
        }
    }

    /// The token at the current position, without advancing.
    pub fn peek(&self) -> StreamResult<&Token<'src>> {
        self.tokens.get(self.pos).ok_or_else(|| self.out_of_bounds())
    }

    /// The token at the current position; advances by one.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> StreamResult<Token<'src>> {
        let token = *self.peek()?;
        self.pos += 1;
        Ok(token)
    }

    /// Advance past the current token iff its text equals `expected`
    /// exactly (length, then bytes). Returns `false` and leaves the
    /// position unchanged on any mismatch, including exhaustion.
    ///
    /// This is the lookahead-1 primitive grammar helpers chain on.
    pub fn consume(&mut self, expected: &str) -> bool {
        if let Some(token) = self.tokens.get(self.pos) {
            if token.text == expected {
                self.pos += 1;
                return true;
            }
        }
        false
    }

    /// Take tokens until the current token matches one of
    /// `end_markers`; the terminator is advanced over too when
    /// `consume_terminator` is set. Returns the (possibly empty)
    /// collected tokens.
    ///
    /// No virtual end-of-input marker is synthesized: exhausting the
    /// stream before any marker is found is [`StreamError::OutOfBounds`].
    pub fn collect_until(
        &mut self,
        end_markers: &[&str],
        consume_terminator: bool,
    ) -> StreamResult<Vec<Token<'src>>> {
        let mut collected = Vec::new();
        loop {
            let token = *self.peek()?;
            if end_markers.iter().any(|marker| token.text == *marker) {
                if consume_terminator {
                    self.pos += 1;
                }
                return Ok(collected);
            }
            collected.push(token);
            self.pos += 1;
        }
    }

    /// Consume a `(`, the tokens up to the next `)`, and the `)`
    /// itself; returns the tokens strictly in between.
    ///
    /// Not recursive: an inner parenthesized group comes back
    /// verbatim, for the caller to re-feed into a group helper.
    pub fn unwrap_parentheses(&mut self) -> StreamResult<Vec<Token<'src>>> {
        if !self.consume("(") {
            return Err(StreamError::expected("("));
        }
        // Running out of input before the `)` means the close was
        // never consumed.
        self.collect_until(&[")"], true)
            .map_err(|_| StreamError::expected(")"))
    }

    /// Consume `start`, then split the tokens up to `end` into groups
    /// at each `separator`. Empty interior groups are dropped (a
    /// doubled or trailing separator yields no empty group); a
    /// trailing non-empty group is kept.
    pub fn group_by_separator(
        &mut self,
        start: &str,
        end: &str,
        separator: &str,
    ) -> StreamResult<Vec<Vec<Token<'src>>>> {
        if !self.consume(start) {
            return Err(StreamError::expected(start));
        }
        let mut groups = Vec::new();
        let mut current = Vec::new();
        loop {
            let token = *self.peek()?;
            self.pos += 1;
            if token.text == end {
                break;
            }
            if token.text == separator {
                if !current.is_empty() {
                    groups.push(mem::take(&mut current));
                }
            } else {
                current.push(token);
            }
        }
        if !current.is_empty() {
            groups.push(current);
        }
        Ok(groups)
    }

    /// Returns `true` if unconsumed tokens remain.
    pub fn has_more(&self) -> bool {
        self.pos < self.tokens.len()
    }

    /// Returns `true` if the cursor is at the terminal position.
    pub fn is_exhausted(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Step the position back by one, for limited lookahead
    /// correction.
    pub fn move_back(&mut self) -> StreamResult<()> {
        if self.pos == 0 {
            return Err(self.out_of_bounds());
        }
        self.pos -= 1;
        Ok(())
    }

    /// Step the position forward by one without reading the token.
    pub fn move_forward(&mut self) -> StreamResult<()> {
        if self.pos >= self.tokens.len() {
            return Err(self.out_of_bounds());
        }
        self.pos += 1;
        Ok(())
    }

    /// Recorded source text of a line, as captured by the lexer.
    pub fn line_text(&self, line_number: usize) -> StreamResult<&'src str> {
        self.lines.line(line_number).ok_or(StreamError::OutOfBounds {
            index: line_number,
            limit: self.lines.len(),
        })
    }

    /// Render the diagnostic block for the current position without
    /// printing it. See [`report_error`](Self::report_error) for the
    /// format.
    pub fn render_error(&self, message: &str) -> String {
        report::render(self.tokens.get(self.pos), &self.lines, message)
    }

    /// Write a diagnostic for the current position to stderr: the
    /// 1-based line and 0-based column, the message, the offending
    /// source line, and a caret under the failing column. An exhausted
    /// cursor gets the end-of-file variant with no line or caret.
    pub fn report_error(&self, message: &str) {
        tracing::debug!(position = self.pos, message, "structural error reported");
        eprint!("{}", self.render_error(message));
    }
}

impl<'src> From<Lexer<'src>> for TokenCursor<'src> {
    fn from(lexer: Lexer<'src>) -> Self {
        let (tokens, lines) = lexer.into_parts();
        Self::new(tokens, lines)
    }
}
