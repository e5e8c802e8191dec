use std::rc::Rc;

use pretty_assertions::assert_eq;

use super::{Diagnostic, Severity};
use crate::{DiagnosticCode, Where};

fn loc(lineno: u32) -> Where {
    Where::new(Rc::from("extensions.conf"), lineno, b"line\n".to_vec())
}

#[test]
fn new_takes_severity_and_message_from_code() {
    let diag = Diagnostic::new(DiagnosticCode::WshEol, loc(3));
    assert_eq!(diag.severity, Severity::Warning);
    assert_eq!(diag.message, "unexpected trailing whitespace");
    assert!(!diag.is_error());
}

#[test]
fn encoding_diagnostic_is_an_error() {
    let diag = Diagnostic::new(DiagnosticCode::FileUtf8Bad, loc(1));
    assert_eq!(diag.severity, Severity::Error);
    assert!(diag.is_error());
}

#[test]
fn with_message_overrides_default() {
    let diag = Diagnostic::new(DiagnosticCode::FileCtrlChar, loc(9))
        .with_message("0x1b escape byte in value");
    assert_eq!(diag.message, "0x1b escape byte in value");
    assert_eq!(diag.code, DiagnosticCode::FileCtrlChar);
}

#[test]
fn display_carries_severity_code_and_position() {
    let diag = Diagnostic::new(DiagnosticCode::FileUnixCrlf, loc(12));
    assert_eq!(
        diag.to_string(),
        "warning [W_FILE_UNIX_CRLF] extensions.conf:12: unexpected CRLF in UNIX file format"
    );
}

#[test]
fn severity_display() {
    assert_eq!(Severity::Error.to_string(), "error");
    assert_eq!(Severity::Warning.to_string(), "warning");
}
