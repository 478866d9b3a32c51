//! Error types for the text2doc library.
//!
//! The core transforms — segmentation and HTML rendering — are total
//! functions: any string input, including the empty one, produces a
//! well-formed result. A line the heading classifier cannot confidently
//! categorise is silently body content, never an error. [`Text2DocError`]
//! therefore only covers the edges where fallibility genuinely exists:
//! configuration validation and writing the serialised tree to disk.
//! Producing the input line sequence in the first place is the upstream
//! extractor's job, and so is surfacing its failures.

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the text2doc library.
#[derive(Debug, Error)]
pub enum Text2DocError {
    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── I/O errors ────────────────────────────────────────────────────────
    /// Could not create or write the output JSON file.
    #[error("Failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Serialisation errors ──────────────────────────────────────────────
    /// JSON encoding of the document tree failed.
    ///
    /// Practically unreachable — the tree contains only strings and nested
    /// objects — but `serde_json` is fallible and the error is propagated
    /// rather than unwrapped.
    #[error("Failed to serialise document tree: {0}")]
    SerializeFailed(#[from] serde_json::Error),
}
