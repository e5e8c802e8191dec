//! Stage three: flag stray control characters.
//!
//! Text passes through unmodified; a line containing any disallowed
//! control character gets exactly one `W_FILE_CTRL_CHAR` warning, no
//! matter how many offenders it holds.

use alint_diagnostic::{Diagnostic, DiagnosticCode, SinkHandle, Where};

use crate::error::ReadError;

/// C0 controls except horizontal tab, line feed and carriage return.
/// DEL and the C1 range are deliberately not in the set.
fn is_illegal(ch: char) -> bool {
    matches!(ch, '\0'..='\u{1f}') && !matches!(ch, '\t' | '\n' | '\r')
}

/// Pass-through scanner for disallowed control characters.
pub struct CtrlGuard<I> {
    input: I,
    sink: SinkHandle,
}

impl<I> CtrlGuard<I> {
    pub fn new(input: I, sink: SinkHandle) -> Self {
        CtrlGuard { input, sink }
    }
}

impl<I> Iterator for CtrlGuard<I>
where
    I: Iterator<Item = Result<(Where, String), ReadError>>,
{
    type Item = Result<(Where, String), ReadError>;

    fn next(&mut self) -> Option<Self::Item> {
        let (at, text) = match self.input.next()? {
            Ok(pair) => pair,
            Err(err) => return Some(Err(err)),
        };
        if text.chars().any(is_illegal) {
            self.sink
                .report(Diagnostic::new(DiagnosticCode::FileCtrlChar, at.clone()));
        }
        Some(Ok((at, text)))
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
