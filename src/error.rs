//! Golden-file error handling.
//!
//! Every fallible operation in the crate surfaces a [`GoldenError`]. All
//! variants are diagnostics-compliant (`miette`) so failures render with a
//! code and, where it helps, a hint. There are no retries and no recovery
//! paths: golden-file testing assumes deterministic local state, so a failure
//! means a real defect or a missing/stale golden file.

use std::io;
use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GoldenError>;

/// All failure modes of the golden harness: file I/O, encode/decode, and
/// store capability mismatches. Comparison mismatches are *not* represented
/// here; those belong to the caller-supplied comparison callback.
#[derive(Error, Diagnostic, Debug)]
pub enum GoldenError {
    #[error("failed to read golden file for '{name}' at {}", path.display())]
    #[diagnostic(
        code(golden::io::read),
        help("if the golden file has never been recorded, re-run with GOLDEN_UPDATE=1 to create it")
    )]
    Read {
        name: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write golden file for '{name}' at {}", path.display())]
    #[diagnostic(code(golden::io::write))]
    Write {
        name: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to open golden file for '{name}' at {}", path.display())]
    #[diagnostic(
        code(golden::io::open),
        help("if the golden file has never been recorded, re-run with GOLDEN_UPDATE=1 to create it")
    )]
    Open {
        name: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode golden value for '{name}' as JSON")]
    #[diagnostic(code(golden::encode::json))]
    Encode {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to decode golden file for '{name}' as JSON")]
    #[diagnostic(
        code(golden::decode::json),
        help("the golden file may be stale; re-run with GOLDEN_UPDATE=1 to re-record it")
    )]
    Decode {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("golden file for '{name}' is not valid UTF-8")]
    #[diagnostic(code(golden::decode::utf8))]
    Utf8 {
        name: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("I/O error while streaming lines of golden file for '{name}'")]
    #[diagnostic(code(golden::io::stream))]
    Stream {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("the configured store cannot stream '{name}': it does not support open")]
    #[diagnostic(
        code(golden::store::capability),
        help("the line loader needs a store with streaming open, such as the default GoldenFile")
    )]
    Unstreamable { name: String },
}
