//! The diagnostic value type and its severity.

use std::fmt;

use crate::{DiagnosticCode, Where};

/// Severity level for diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A position-tagged report of one irregularity.
///
/// Diagnostics are plain values: constructing one has no side effect.
/// Emission happens explicitly through a
/// [`DiagnosticSink`](crate::DiagnosticSink).
#[derive(Clone, Eq, PartialEq, Debug)]
#[must_use = "diagnostics should be reported to a sink, not silently dropped"]
pub struct Diagnostic {
    /// Code identifying the irregularity.
    pub code: DiagnosticCode,
    /// Severity, fixed by the code at construction.
    pub severity: Severity,
    /// The physical line the irregularity was found on.
    pub at: Where,
    /// Human-readable message.
    pub message: String,
}

impl Diagnostic {
    /// Create a diagnostic for `code` at `at`, with the code's severity
    /// and default message.
    pub fn new(code: DiagnosticCode, at: Where) -> Self {
        Diagnostic {
            code,
            severity: code.severity(),
            at,
            message: code.message().to_owned(),
        }
    }

    /// Replace the default message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Check if this is an error (vs warning).
    pub fn is_error(&self) -> bool {
        matches!(self.severity, Severity::Error)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] {}: {}",
            self.severity, self.code, self.at, self.message
        )
    }
}

#[cfg(test)]
mod tests;
