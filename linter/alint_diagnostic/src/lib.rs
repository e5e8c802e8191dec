//! Diagnostic system for the astlint configuration reader.
//!
//! Every irregularity the reader finds in its input is reported as a
//! [`Diagnostic`]: a position-tagged value with a stable code and a
//! severity. Diagnostics never interrupt processing — they are emitted to
//! an injected [`DiagnosticSink`] and the pipeline continues.
//!
//! The severity split is load-bearing: [`Severity::Error`] means content
//! was ambiguous or corrupted (e.g. an undecodable byte sequence), while
//! [`Severity::Warning`] means content was stylistically irregular but
//! unambiguous. Downstream tooling decides pass/fail on that distinction.

mod code;
mod diagnostic;
mod location;
pub mod queue;

pub use code::{parse_code, DiagnosticCode};
pub use diagnostic::{Diagnostic, Severity};
pub use location::Where;
pub use queue::{DiagnosticQueue, DiagnosticSink, SinkHandle};
