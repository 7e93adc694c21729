//! pqs Error Handling
//!
//! The classifier itself never fails: an input outside the alphabet is a
//! normal `valid = false` result. `PqError` covers everything around it,
//! reading inputs, writing output, and explaining *why* an input was rejected.

use std::io;
use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// The single error type of the pqs surface.
#[derive(Debug, Error, Diagnostic)]
pub enum PqError {
    #[error("failed to read inputs from `{}`", path.display())]
    #[diagnostic(code(pqs::io), help("pass a readable file with one input per line"))]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write results")]
    #[diagnostic(code(pqs::output))]
    Output(#[from] io::Error),

    #[error("failed to encode results as JSON")]
    #[diagnostic(code(pqs::json))]
    Json(#[from] serde_json::Error),

    #[error("unknown symbol `{found}`")]
    #[diagnostic(
        code(pqs::unknown_symbol),
        help("a pq string may only contain `p`, `q` and `-`")
    )]
    UnknownSymbol {
        found: char,
        #[source_code]
        src: NamedSource<String>,
        #[label("not part of the alphabet")]
        span: SourceSpan,
    },

    #[error("malformed pq string, expected {expected}")]
    #[diagnostic(
        code(pqs::malformed),
        help("strict strings have the shape x p y q z, where x, y and z are runs of hyphens")
    )]
    Malformed {
        expected: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("expected {expected}")]
        span: SourceSpan,
    },
}

impl PqError {
    /// Diagnostic for the first out-of-alphabet character at byte `offset`.
    pub fn unknown_symbol(input: &str, offset: usize, found: char) -> Self {
        PqError::UnknownSymbol {
            found,
            src: named_input(input),
            span: (offset, found.len_utf8()).into(),
        }
    }

    /// Diagnostic for a strict-grammar shape violation at byte `offset`.
    pub fn malformed(input: &str, offset: usize, expected: impl Into<String>) -> Self {
        let len = input[offset..].chars().next().map_or(0, char::len_utf8);
        PqError::Malformed {
            expected: expected.into(),
            src: named_input(input),
            span: (offset, len).into(),
        }
    }
}

fn named_input(input: &str) -> NamedSource<String> {
    NamedSource::new("input", input.to_string())
}
