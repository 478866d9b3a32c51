//! # text2doc
//!
//! Segment extracted document text into a section tree and render section
//! bodies into a constrained HTML subset.
//!
//! ## Why this crate?
//!
//! Office documents flattened to plain text (by a docx walker, a PDF text
//! extractor, OCR) lose their outline: section titles become ordinary
//! lines. Manuals and reports set those titles in caps, though, so a
//! small deterministic heuristic recovers the structure well — and when
//! the extractor can pass through native paragraph styles, those are
//! trusted instead. The result is a JSON-friendly tree of sections plus,
//! optionally, each section's body rendered to HTML.
//!
//! This crate owns no binary-format parsing: the upstream extractor
//! supplies lines, this crate supplies structure.
//!
//! ## Pipeline Overview
//!
//! ```text
//! extracted text
//!  │
//!  ├─ 1. Segment  classify lines as heading/body (pattern or style strategy)
//!  ├─ 2. Render   per-section body → HTML (optional)
//!  └─ 3. Output   ordered section tree + stats, JSON-serialisable
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use text2doc::{convert, ConversionConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let text = "GETTING STARTED\nPlug the unit in.\n";
//!     let config = ConversionConfig::default();
//!     let output = convert(text, &config)?;
//!     println!("{}", serde_json::to_string_pretty(&output.document)?);
//!     eprintln!("{} sections", output.stats.section_count);
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `text2doc` binary (clap + anyhow + tracing-subscriber) |
//!
//! Disable `cli` when using only the library to avoid pulling in CLI-only deps:
//! ```toml
//! text2doc = { version = "0.2", default-features = false }
//! ```
//!
//! ## Determinism
//!
//! Both pipeline stages are pure functions: same input, same output,
//! byte for byte. There is no shared state, no I/O inside the core, and
//! no failure path — malformed input degrades to body content rather
//! than erroring. Independent documents (or sections) can be converted
//! concurrently without coordination.

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod document;
pub mod error;
pub mod output;
pub mod pipeline;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ConversionConfig, ConversionConfigBuilder, HeadingStrategy};
pub use convert::{convert, convert_lines, convert_to_file};
pub use document::{DocumentTree, SectionRecord};
pub use error::Text2DocError;
pub use output::{ConversionOutput, ConversionStats, SectionHtml};
pub use pipeline::html::render_html;
pub use pipeline::segment::{segment, segment_text, SourceLine};
