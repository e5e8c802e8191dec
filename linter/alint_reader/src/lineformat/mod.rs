//! Stage four: per-source line-ending bookkeeping.
//!
//! Line-ending conventions are tracked per *source*, not globally: an
//! included file may use a different convention than its parent, and the
//! parent's convention must be back in force once the include ends. The
//! tracker keeps a stack of per-source frames mirroring the source stack's
//! nesting, observed through the incoming position's filename.
//!
//! Each source is classified by its first line (DOS iff CRLF-terminated or
//! unterminated, Unix iff bare-LF-terminated). Later lines that deviate
//! get `W_FILE_DOS_BARELF` or `W_FILE_UNIX_CRLF`; the detected terminator
//! is stripped. When a frame is popped (on returning from an include or at
//! end of input) it is finalized against [`finalize_code`].

use alint_diagnostic::{Diagnostic, DiagnosticCode, SinkHandle, Where};

use crate::error::ReadError;

/// Line-ending convention of one source, decided by its first line.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Convention {
    Dos,
    Unix,
}

/// Finalization outcome for a popped frame, keyed on the convention and
/// whether the source's last line carried a terminator.
///
/// The asymmetry is deliberate: a DOS file is expected to end *without* a
/// trailing CRLF, a UNIX file is expected to end *with* its LF.
fn finalize_code(convention: Convention, terminated: bool) -> Option<DiagnosticCode> {
    match (convention, terminated) {
        (Convention::Dos, true) => Some(DiagnosticCode::FileDosEofCrlf),
        (Convention::Dos, false) => None,
        (Convention::Unix, true) => None,
        (Convention::Unix, false) => Some(DiagnosticCode::FileUnixNoLf),
    }
}

/// Per-source state, stacked in lockstep with the source stack.
#[derive(Debug)]
struct FrameState {
    filename: String,
    convention: Option<Convention>,
    last_had_terminator: bool,
    last_where: Where,
}

/// Tracks line-ending consistency per source and strips terminators.
pub struct FormatTracker<I> {
    input: I,
    sink: SinkHandle,
    frames: Vec<FrameState>,
    finalized: bool,
}

impl<I> FormatTracker<I> {
    pub fn new(input: I, sink: SinkHandle) -> Self {
        FormatTracker {
            input,
            sink,
            frames: Vec::new(),
            finalized: false,
        }
    }

    fn finalize_frame(&mut self, frame: FrameState) {
        tracing::trace!(filename = %frame.filename, "finalizing source frame");
        // A frame always has a convention: it is created by the same line
        // that classifies it.
        let Some(convention) = frame.convention else {
            return;
        };
        if let Some(code) = finalize_code(convention, frame.last_had_terminator) {
            self.sink.report(Diagnostic::new(code, frame.last_where));
        }
    }

    /// Pop and finalize frames until `stop_at` is on top, or the stack is
    /// empty for `None`.
    fn pop_until(&mut self, stop_at: Option<&str>) {
        while self
            .frames
            .last()
            .is_some_and(|top| stop_at != Some(top.filename.as_str()))
        {
            if let Some(frame) = self.frames.pop() {
                self.finalize_frame(frame);
            }
        }
    }

    /// Handle a filename change between consecutive lines.
    ///
    /// A name already on the stack means we are backing out of an include:
    /// everything above it is popped and finalized. An unknown name means
    /// we moved into a fresh include. Either way the line is rebound to
    /// the top frame's stored position (identical to the incoming one on
    /// the way in; the parent's previous line on the way out).
    fn transition(&mut self, at: Where) -> Where {
        let filename = at.filename().to_owned();
        if self.frames.iter().any(|f| f.filename == filename) {
            self.pop_until(Some(&filename));
        } else {
            self.frames.push(FrameState {
                filename,
                convention: None,
                last_had_terminator: false,
                last_where: at.clone(),
            });
        }
        match self.frames.last() {
            Some(top) => top.last_where.clone(),
            None => at,
        }
    }
}

impl<I> Iterator for FormatTracker<I>
where
    I: Iterator<Item = Result<(Where, String), ReadError>>,
{
    type Item = Result<(Where, String), ReadError>;

    fn next(&mut self) -> Option<Self::Item> {
        let (at, mut text) = match self.input.next() {
            Some(Ok(pair)) => pair,
            Some(Err(err)) => return Some(Err(err)),
            None => {
                // End of all input: finalize every open frame, once.
                if !self.finalized {
                    self.finalized = true;
                    self.pop_until(None);
                }
                return None;
            }
        };

        let top_matches = self
            .frames
            .last()
            .is_some_and(|top| top.filename == at.filename());
        let at = if top_matches { at } else { self.transition(at) };

        let has_crlf = text.ends_with("\r\n");
        let has_lf = text.ends_with('\n');

        if let Some(top) = self.frames.last_mut() {
            top.last_had_terminator = has_lf;
            top.last_where = at.clone();
            let convention = *top.convention.get_or_insert(if has_crlf || !has_lf {
                Convention::Dos
            } else {
                Convention::Unix
            });
            match convention {
                Convention::Dos if has_lf && !has_crlf => self
                    .sink
                    .report(Diagnostic::new(DiagnosticCode::FileDosBareLf, at.clone())),
                Convention::Unix if has_crlf => self
                    .sink
                    .report(Diagnostic::new(DiagnosticCode::FileUnixCrlf, at.clone())),
                _ => {}
            }
        }

        if has_crlf {
            text.truncate(text.len() - 2);
        } else if has_lf {
            text.truncate(text.len() - 1);
        }

        Some(Ok((at, text)))
    }
}
