//! Stage five: trailing-whitespace hygiene and comment splitting.
//!
//! The dialect's escaping is lookback-only: at each `;` only the single
//! preceding character is inspected. A backslash there makes the pair a
//! literal `;` in the code; anything else (or nothing, for a leading `;`)
//! starts the comment, which runs to end of line and keeps its delimiter.
//! Whitespace cannot be escaped, so trailing space/tab is always noise:
//! it is flagged once per line and stripped before splitting.

use alint_diagnostic::{Diagnostic, DiagnosticCode, SinkHandle, Where};
use memchr::memchr;

use crate::error::ReadError;
use crate::reader::LineRecord;

fn is_blank(byte: u8) -> bool {
    byte == b' ' || byte == b'\t'
}

/// Length of `text` once trailing spaces and tabs are dropped.
fn trimmed_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut len = bytes.len();
    while len > 0 && is_blank(bytes[len - 1]) {
        len -= 1;
    }
    len
}

/// Split at the first `;`. Whitespace directly preceding the delimiter
/// belongs to the comment.
fn simple_split(text: &str) -> (String, String) {
    let Some(found) = memchr(b';', text.as_bytes()) else {
        return (text.to_owned(), String::new());
    };
    let mut split = found;
    let bytes = text.as_bytes();
    while split > 0 && is_blank(bytes[split - 1]) {
        split -= 1;
    }
    (text[..split].to_owned(), text[split..].to_owned())
}

/// Split honoring the lookback-only `\;` escape rule.
///
/// Each escaped pair collapses to a literal `;` in the code. The
/// substitution can expose fresh trailing whitespace on the code side;
/// that whitespace migrates to the front of the comment, without a second
/// `W_WSH_EOL`.
fn escape_split(text: &str) -> (String, String) {
    let mut rest = text;
    let mut code = String::new();
    let comment = loop {
        match memchr(b';', rest.as_bytes()) {
            None => {
                code.push_str(rest);
                break String::new();
            }
            Some(found) if found > 0 && rest.as_bytes()[found - 1] == b'\\' => {
                code.push_str(&rest[..found - 1]);
                code.push(';');
                rest = &rest[found + 1..];
            }
            Some(found) => {
                code.push_str(&rest[..found]);
                break rest[found..].to_owned();
            }
        }
    };

    let keep = trimmed_len(&code);
    if keep < code.len() {
        let moved = code.split_off(keep);
        return (code, moved + &comment);
    }
    (code, comment)
}

/// Splits cleaned lines into code and trailing comment.
pub struct CommentSplitter<I> {
    input: I,
    sink: SinkHandle,
}

impl<I> CommentSplitter<I> {
    pub fn new(input: I, sink: SinkHandle) -> Self {
        CommentSplitter { input, sink }
    }
}

impl<I> Iterator for CommentSplitter<I>
where
    I: Iterator<Item = Result<(Where, String), ReadError>>,
{
    type Item = Result<LineRecord, ReadError>;

    fn next(&mut self) -> Option<Self::Item> {
        let (at, mut text) = match self.input.next()? {
            Ok(pair) => pair,
            Err(err) => return Some(Err(err)),
        };

        let keep = trimmed_len(&text);
        if keep < text.len() {
            self.sink
                .report(Diagnostic::new(DiagnosticCode::WshEol, at.clone()));
            text.truncate(keep);
        }

        // Escape-free lines take the cheap path.
        let (code, comment) = if memchr(b'\\', text.as_bytes()).is_some() {
            escape_split(&text)
        } else {
            simple_split(&text)
        };

        Some(Ok(LineRecord { at, code, comment }))
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
