//! Fatal reader failures.

use std::io;

use thiserror::Error;

/// I/O failures the pipeline cannot recover from.
///
/// Content irregularities (bad encoding, stray control characters,
/// inconsistent line endings, trailing whitespace) are never errors here;
/// they are reported to the diagnostics sink and processing continues.
#[derive(Debug, Error)]
pub enum ReadError {
    /// A source could not be opened. Propagates to whoever triggered the
    /// include; the pipeline has no file-existence policy of its own.
    #[error("cannot open {filename}: {source}")]
    Open {
        filename: String,
        #[source]
        source: io::Error,
    },

    /// A read from an already-open source failed mid-stream.
    #[error("read failure in {filename}: {source}")]
    Read {
        filename: String,
        #[source]
        source: io::Error,
    },
}
