//! Pipeline stages for text-to-document conversion.
//!
//! Each submodule implements exactly one transformation step.
//! Keeping stages separate makes each independently testable and lets us
//! swap implementations (e.g. a different heading heuristic) without
//! touching other stages.
//!
//! ## Data Flow
//!
//! ```text
//! lines ──▶ segment ──▶ html
//! (extracted)  (section tree)  (per-section HTML, optional)
//! ```
//!
//! 1. [`segment`] — classify each line as heading or body and accumulate
//!    body text under the current section title
//! 2. [`html`]    — convert one section's body text to a constrained HTML
//!    subset (paragraphs, lists, inline emphasis)
//!
//! Both stages are pure functions over their inputs: no I/O, no shared
//! state, safe to run concurrently across independent documents or
//! sections.

pub mod html;
pub mod segment;
