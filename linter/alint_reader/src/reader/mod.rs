//! The composed five-stage line reader.

use alint_diagnostic::{SinkHandle, Where};
use encoding_rs::Encoding;

use crate::comment::CommentSplitter;
use crate::ctrl::CtrlGuard;
use crate::decode::Decoder;
use crate::error::ReadError;
use crate::lineformat::FormatTracker;
use crate::source_stack::{Opener, StackHandle};

/// One logically-clean configuration line.
///
/// `code` and `comment` concatenate back to the cleaned line (terminator
/// stripped, trailing whitespace folded into the comment). Consumed by the
/// grammar layer; immutable once produced.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LineRecord {
    /// The physical line this record came from.
    pub at: Where,
    /// Everything before the first unescaped comment delimiter, with
    /// escaped delimiters collapsed to literal `;`.
    pub code: String,
    /// The comment, delimiter included; empty if the line has none.
    pub comment: String,
}

/// The full stage chain, wired over the shared source stack.
type Stages = CommentSplitter<FormatTracker<CtrlGuard<Decoder<StackHandle>>>>;

/// Produces [`LineRecord`]s from a stack of nested sources.
///
/// The reader does not recognize include syntax itself: the grammar layer
/// observes an include directive in a code line and calls
/// [`include`](Self::include), after which reading continues inside the
/// new source. Iteration ends only when every source is exhausted, with
/// all pending line-ending finalizations already emitted.
pub struct LineReader {
    stack: StackHandle,
    stages: Stages,
}

impl LineReader {
    /// Reader over `opener`, reporting irregularities to `sink`, with the
    /// default Windows-1252 decode fallback.
    pub fn new(opener: impl Opener + 'static, sink: SinkHandle) -> Self {
        Self::with_fallback(opener, sink, encoding_rs::WINDOWS_1252)
    }

    /// Reader with a caller-chosen fallback codepage.
    pub fn with_fallback(
        opener: impl Opener + 'static,
        sink: SinkHandle,
        fallback: &'static Encoding,
    ) -> Self {
        let stack = StackHandle::new(opener);
        let stages = CommentSplitter::new(
            FormatTracker::new(
                CtrlGuard::new(
                    Decoder::with_fallback(stack.clone(), sink.clone(), fallback),
                    sink.clone(),
                ),
                sink.clone(),
            ),
            sink,
        );
        LineReader { stack, stages }
    }

    /// Open `filename` and push it on top of the source stack.
    ///
    /// Used both for the top-level file and as the include trigger.
    /// Open failures propagate; nothing is pushed on error.
    pub fn include(&self, filename: &str) -> Result<(), ReadError> {
        self.stack.include(filename)
    }

    /// Number of currently-open sources.
    pub fn depth(&self) -> usize {
        self.stack.depth()
    }
}

impl Iterator for LineReader {
    type Item = Result<LineRecord, ReadError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.stages.next()
    }
}
