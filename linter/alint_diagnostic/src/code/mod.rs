//! Diagnostic codes for all reader irregularities.
//!
//! Each code is a stable identifier (e.g. `W_FILE_DOS_BARELF`) with a fixed
//! severity and default message. The `E_`/`W_` prefix encodes the severity;
//! the second component names the check family (`FILE` for byte/format
//! level checks, `WSH` for whitespace hygiene).

use std::fmt;

use crate::Severity;

/// Diagnostic codes for all reader irregularities.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum DiagnosticCode {
    /// Line was not valid UTF-8; decoded with the fallback codepage.
    FileUtf8Bad,
    /// Line contains a disallowed control character.
    FileCtrlChar,
    /// DOS-format file ends with a trailing CRLF.
    FileDosEofCrlf,
    /// Bare LF line ending inside a DOS-format file.
    FileDosBareLf,
    /// CRLF line ending inside a UNIX-format file.
    FileUnixCrlf,
    /// UNIX-format file ends without a final LF.
    FileUnixNoLf,
    /// Trailing whitespace at end of line.
    WshEol,
}

impl DiagnosticCode {
    /// All codes, in wire-name order. Useful for documentation tooling.
    pub const ALL: [DiagnosticCode; 7] = [
        DiagnosticCode::FileUtf8Bad,
        DiagnosticCode::FileCtrlChar,
        DiagnosticCode::FileDosEofCrlf,
        DiagnosticCode::FileDosBareLf,
        DiagnosticCode::FileUnixCrlf,
        DiagnosticCode::FileUnixNoLf,
        DiagnosticCode::WshEol,
    ];

    /// Get the stable wire name (e.g. `"W_WSH_EOL"`).
    pub fn as_str(self) -> &'static str {
        match self {
            DiagnosticCode::FileUtf8Bad => "E_FILE_UTF8_BAD",
            DiagnosticCode::FileCtrlChar => "W_FILE_CTRL_CHAR",
            DiagnosticCode::FileDosEofCrlf => "W_FILE_DOS_EOFCRLF",
            DiagnosticCode::FileDosBareLf => "W_FILE_DOS_BARELF",
            DiagnosticCode::FileUnixCrlf => "W_FILE_UNIX_CRLF",
            DiagnosticCode::FileUnixNoLf => "W_FILE_UNIX_NOLF",
            DiagnosticCode::WshEol => "W_WSH_EOL",
        }
    }

    /// Severity is fixed per code: errors mean the content was ambiguous or
    /// corrupted, warnings mean it was irregular but unambiguous.
    pub fn severity(self) -> Severity {
        match self {
            DiagnosticCode::FileUtf8Bad => Severity::Error,
            DiagnosticCode::FileCtrlChar
            | DiagnosticCode::FileDosEofCrlf
            | DiagnosticCode::FileDosBareLf
            | DiagnosticCode::FileUnixCrlf
            | DiagnosticCode::FileUnixNoLf
            | DiagnosticCode::WshEol => Severity::Warning,
        }
    }

    /// Default human-readable message for the code.
    pub fn message(self) -> &'static str {
        match self {
            DiagnosticCode::FileUtf8Bad => "expected UTF-8 encoding, got something else",
            DiagnosticCode::FileCtrlChar => "unexpected control character found",
            DiagnosticCode::FileDosEofCrlf => "unexpected trailing CRLF in DOS file format",
            DiagnosticCode::FileDosBareLf => "unexpected bare LF in DOS file format",
            DiagnosticCode::FileUnixCrlf => "unexpected CRLF in UNIX file format",
            DiagnosticCode::FileUnixNoLf => "unexpected line without LF in UNIX file format",
            DiagnosticCode::WshEol => "unexpected trailing whitespace",
        }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse a wire name like `"W_FILE_UNIX_CRLF"` back into a code.
///
/// Returns `None` for unknown names.
pub fn parse_code(name: &str) -> Option<DiagnosticCode> {
    DiagnosticCode::ALL
        .into_iter()
        .find(|code| code.as_str() == name)
}
