//! Source positions for diagnostics and line records.

use std::fmt;
use std::rc::Rc;

/// Identifies exactly one physical line in exactly one source file.
///
/// Created once per raw line by the source stack and carried unchanged
/// through every later pipeline stage. Cloning is cheap: both payloads are
/// reference-counted. The pipeline is single-threaded by contract, so `Rc`
/// suffices.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Where {
    filename: Rc<str>,
    lineno: u32,
    raw_line: Rc<[u8]>,
}

impl Where {
    /// Create a position for line `lineno` (1-based) of `filename`.
    ///
    /// `raw_line` is the line exactly as read, terminator included. It is
    /// kept so downstream tooling can render the offending bytes.
    pub fn new(filename: Rc<str>, lineno: u32, raw_line: impl Into<Rc<[u8]>>) -> Self {
        Where {
            filename,
            lineno,
            raw_line: raw_line.into(),
        }
    }

    /// Name of the source file, as handed to the opener.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Physical line number, 1-based.
    pub fn lineno(&self) -> u32 {
        self.lineno
    }

    /// The raw bytes of the line, terminator included.
    pub fn raw_line(&self) -> &[u8] {
        &self.raw_line
    }
}

impl fmt::Display for Where {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.filename, self.lineno)
    }
}
