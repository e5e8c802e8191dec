//! Sink capability and the collecting diagnostic queue.
//!
//! Producers never talk to a concrete store: they emit into an injected
//! [`DiagnosticSink`]. [`DiagnosticQueue`] is the standard collecting
//! implementation; callers that want streaming output can provide their
//! own sink.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::Diagnostic;

/// Capability for receiving diagnostics as they are found.
///
/// Storage, formatting and exit-code policy belong to the implementation;
/// producers only guarantee that every irregularity is reported exactly
/// once, in input order.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Cloneable shared handle to a sink.
///
/// The reader's pipeline stages are stacked iterator adapters that all
/// emit into the same sink, so the sink is shared behind `Rc<RefCell>`.
/// Callers construct the handle from their own `Rc` and keep typed access
/// to the concrete sink.
#[derive(Clone)]
pub struct SinkHandle {
    inner: Rc<RefCell<dyn DiagnosticSink>>,
}

impl SinkHandle {
    /// Wrap a shared sink.
    pub fn new<S: DiagnosticSink + 'static>(sink: Rc<RefCell<S>>) -> Self {
        SinkHandle { inner: sink }
    }

    /// Emit one diagnostic.
    pub fn report(&self, diagnostic: Diagnostic) {
        self.inner.borrow_mut().report(diagnostic);
    }
}

impl fmt::Debug for SinkHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SinkHandle").finish_non_exhaustive()
    }
}

/// Collecting sink: stores diagnostics in emission order and tracks counts.
#[derive(Debug, Default)]
pub struct DiagnosticQueue {
    diagnostics: Vec<Diagnostic>,
    error_count: usize,
    warning_count: usize,
}

impl DiagnosticQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        DiagnosticQueue::default()
    }

    /// Create a shared queue plus a handle for wiring into producers.
    pub fn shared() -> (Rc<RefCell<Self>>, SinkHandle) {
        let queue = Rc::new(RefCell::new(DiagnosticQueue::new()));
        let handle = SinkHandle::new(Rc::clone(&queue));
        (queue, handle)
    }

    /// Number of error-severity diagnostics collected.
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Number of warning-severity diagnostics collected.
    pub fn warning_count(&self) -> usize {
        self.warning_count
    }

    /// Check if any errors were collected.
    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    /// Check if the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Iterate the collected diagnostics without clearing the queue.
    pub fn peek(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    /// Take the collected diagnostics, resetting the queue.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        self.error_count = 0;
        self.warning_count = 0;
        std::mem::take(&mut self.diagnostics)
    }
}

impl DiagnosticSink for DiagnosticQueue {
    fn report(&mut self, diagnostic: Diagnostic) {
        if diagnostic.is_error() {
            self.error_count += 1;
        } else {
            self.warning_count += 1;
        }
        self.diagnostics.push(diagnostic);
    }
}
