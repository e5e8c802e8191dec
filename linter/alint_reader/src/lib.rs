//! Layered line production for Asterisk-style configuration files.
//!
//! Turns a stack of nested, byte-oriented input files into a sequence of
//! positioned, logically-clean lines, each split into a code portion and a
//! trailing comment portion, ready for a configuration-grammar parser.
//!
//! Five stages compose linearly, each a lazy iterator adapter over the
//! previous stage's output:
//!
//! 1. [`SourceStack`] — raw byte lines across nested includes.
//! 2. [`Decoder`] — UTF-8 with a single-byte fallback codepage.
//! 3. [`CtrlGuard`] — flags stray control characters.
//! 4. [`FormatTracker`] — per-source line-ending bookkeeping, strips
//!    terminators.
//! 5. [`CommentSplitter`] — trailing-whitespace hygiene plus the
//!    lookback-only `\;` escape rule.
//!
//! [`LineReader`] wires the whole chain over one shared source stack and
//! one shared diagnostics sink. I/O failures are fatal and surface as
//! [`ReadError`]; every content irregularity is recovered locally and
//! reported as a diagnostic instead.

mod comment;
mod ctrl;
mod decode;
mod error;
mod lineformat;
mod reader;
mod source_stack;

pub use comment::CommentSplitter;
pub use ctrl::CtrlGuard;
pub use decode::Decoder;
pub use error::ReadError;
pub use lineformat::FormatTracker;
pub use reader::{LineReader, LineRecord};
pub use source_stack::{FsOpener, Opener, SourceStack, StackHandle};
