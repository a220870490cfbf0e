//! Human-readable diagnostic rendering.
//!
//! Produces the block [`TokenCursor::report_error`] writes to stderr:
//!
//! ```text
//! Error at line 2, col 7: expected a number
//! rate = fast
//!        ^
//! ```
//!
//! Line numbers print 1-based, columns stay 0-based, and the caret
//! line is `column` spaces followed by `^`. An exhausted cursor has no
//! failing token to point at, so it gets a single end-of-file line.
//! No machine-readable format is produced here; consumers wanting
//! structured errors wrap the same inputs themselves.
//!
//! [`TokenCursor::report_error`]: crate::TokenCursor::report_error

use rill_lexer::{LineIndex, Token};

/// Render the diagnostic block for `token` (the cursor's current
/// token, or `None` when exhausted).
pub(crate) fn render(token: Option<&Token<'_>>, lines: &LineIndex<'_>, message: &str) -> String {
    match token {
        Some(token) => {
            let line = lines.line(token.line as usize).unwrap_or("");
            let caret = " ".repeat(token.column as usize);
            format!(
                "Error at line {}, col {}: {message}\n{line}\n{caret}^\n",
                token.line + 1,
                token.column,
            )
        }
        None => format!("Error at end of file: {message}\n"),
    }
}
