//! Stage two: decode raw byte lines to text.
//!
//! UTF-8 is the one true encoding. A line that fails to decode is reported
//! as `E_FILE_UTF8_BAD` and re-decoded with a fallback single-byte
//! codepage, which is total: every byte value maps to some character. This
//! is the only stage permitted to substitute content, and it always
//! reports doing so.

use alint_diagnostic::{Diagnostic, DiagnosticCode, SinkHandle, Where};
use encoding_rs::Encoding;

use crate::error::ReadError;

/// Decodes `(Where, bytes)` into `(Where, text)`.
pub struct Decoder<I> {
    input: I,
    sink: SinkHandle,
    fallback: &'static Encoding,
}

impl<I> Decoder<I> {
    /// Decoder with the default Windows-1252 fallback.
    pub fn new(input: I, sink: SinkHandle) -> Self {
        Self::with_fallback(input, sink, encoding_rs::WINDOWS_1252)
    }

    /// Decoder with a caller-chosen fallback codepage.
    ///
    /// The fallback mapping is a policy choice, not a correctness claim:
    /// any single-byte encoding that decodes every byte value will do.
    pub fn with_fallback(input: I, sink: SinkHandle, fallback: &'static Encoding) -> Self {
        Decoder {
            input,
            sink,
            fallback,
        }
    }
}

impl<I> Iterator for Decoder<I>
where
    I: Iterator<Item = Result<(Where, Vec<u8>), ReadError>>,
{
    type Item = Result<(Where, String), ReadError>;

    fn next(&mut self) -> Option<Self::Item> {
        let (at, raw) = match self.input.next()? {
            Ok(pair) => pair,
            Err(err) => return Some(Err(err)),
        };
        let text = match String::from_utf8(raw) {
            Ok(text) => text,
            Err(invalid) => {
                self.sink
                    .report(Diagnostic::new(DiagnosticCode::FileUtf8Bad, at.clone()));
                tracing::debug!(at = %at, fallback = self.fallback.name(), "UTF-8 decode failed");
                // No BOM sniffing: the fallback applies to exactly these bytes.
                let (text, _had_errors) = self
                    .fallback
                    .decode_without_bom_handling(invalid.as_bytes());
                text.into_owned()
            }
        };
        Some(Ok((at, text)))
    }
}
