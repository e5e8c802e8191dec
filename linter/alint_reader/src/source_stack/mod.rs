//! Stage one: raw byte lines across a stack of nested sources.
//!
//! The stack always reads from its top frame. When the grammar layer sees
//! an include directive it calls [`StackHandle::include`], pushing a new
//! frame; exhausted frames are popped (and their handles dropped, which
//! closes them) and reading resumes in the parent. No diagnostics are
//! emitted at this layer.

use std::cell::RefCell;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::rc::Rc;

use alint_diagnostic::Where;

use crate::error::ReadError;

/// Capability for opening sources by name.
///
/// Injected into the stack so tests and embedders can supply in-memory
/// sources or custom path resolution. Failures must propagate; the stack
/// never swallows them.
pub trait Opener {
    /// Open `filename` as a binary byte stream.
    fn open(&self, filename: &str) -> io::Result<Box<dyn BufRead>>;
}

/// Default opener: local files, read in binary mode.
#[derive(Clone, Copy, Debug, Default)]
pub struct FsOpener;

impl Opener for FsOpener {
    fn open(&self, filename: &str) -> io::Result<Box<dyn BufRead>> {
        let file = File::open(filename)?;
        Ok(Box::new(BufReader::new(file)))
    }
}

/// One open source. Dropping the frame closes the handle.
struct Frame {
    filename: Rc<str>,
    reader: Box<dyn BufRead>,
    lineno: u32,
}

/// LIFO stack of currently-open sources.
///
/// Owns every handle it opens and closes each exactly once: on exhaustion,
/// on a mid-stream read failure, or when the stack itself is dropped
/// (early abandonment included).
pub struct SourceStack {
    opener: Box<dyn Opener>,
    frames: Vec<Frame>,
}

impl SourceStack {
    /// Create an empty stack over `opener`.
    pub fn new(opener: impl Opener + 'static) -> Self {
        SourceStack {
            opener: Box::new(opener),
            frames: Vec::new(),
        }
    }

    /// Open `filename` and push it on top of the stack.
    ///
    /// Open failures propagate to the caller that triggered the include.
    pub fn include(&mut self, filename: &str) -> Result<(), ReadError> {
        let reader = self
            .opener
            .open(filename)
            .map_err(|source| ReadError::Open {
                filename: filename.to_owned(),
                source,
            })?;
        tracing::debug!(filename, depth = self.frames.len(), "pushing source");
        self.frames.push(Frame {
            filename: Rc::from(filename),
            reader,
            lineno: 0,
        });
        Ok(())
    }

    /// Number of currently-open sources.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Read the next raw line from the top of the stack, popping exhausted
    /// frames until a line is found or the stack is empty.
    ///
    /// Lines keep their terminator bytes; a final line without one is still
    /// yielded. Numbering is 1-based per source.
    fn next_raw_line(&mut self) -> Option<Result<(Where, Vec<u8>), ReadError>> {
        loop {
            let frame = self.frames.last_mut()?;
            let mut raw = Vec::new();
            match frame.reader.read_until(b'\n', &mut raw) {
                Ok(0) => {
                    tracing::trace!(filename = %frame.filename, "source exhausted");
                    self.frames.pop();
                }
                Ok(_) => {
                    frame.lineno += 1;
                    let at = Where::new(Rc::clone(&frame.filename), frame.lineno, raw.clone());
                    return Some(Ok((at, raw)));
                }
                Err(source) => {
                    let filename = frame.filename.to_string();
                    self.frames.pop();
                    return Some(Err(ReadError::Read { filename, source }));
                }
            }
        }
    }
}

/// Cloneable handle to a shared [`SourceStack`].
///
/// The composed reader iterates the stack while the grammar layer calls
/// [`include`](Self::include) between pulls, so both sides hold the same
/// stack through this handle.
#[derive(Clone)]
pub struct StackHandle {
    inner: Rc<RefCell<SourceStack>>,
}

impl StackHandle {
    /// Create a fresh stack over `opener` and return its handle.
    pub fn new(opener: impl Opener + 'static) -> Self {
        StackHandle {
            inner: Rc::new(RefCell::new(SourceStack::new(opener))),
        }
    }

    /// Open `filename` and push it on top of the stack.
    pub fn include(&self, filename: &str) -> Result<(), ReadError> {
        self.inner.borrow_mut().include(filename)
    }

    /// Number of currently-open sources.
    pub fn depth(&self) -> usize {
        self.inner.borrow().depth()
    }
}

impl Iterator for StackHandle {
    type Item = Result<(Where, Vec<u8>), ReadError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.borrow_mut().next_raw_line()
    }
}
