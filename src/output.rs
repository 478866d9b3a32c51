//! Output types returned by the conversion entry points.

use crate::document::DocumentTree;
use serde::{Deserialize, Serialize};

/// Complete result of one conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionOutput {
    /// The section tree, in first-heading-occurrence order.
    pub document: DocumentTree,
    /// Per-section rendered HTML, in tree order. Present only when
    /// [`crate::ConversionConfig::render_html`] was set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sections: Option<Vec<SectionHtml>>,
    /// Counters and timings for the run.
    pub stats: ConversionStats,
}

/// One section's rendered body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionHtml {
    /// Section title, identical to the tree key.
    pub title: String,
    /// Rendered HTML for the section's body text.
    pub html: String,
}

/// Counters and timings for a conversion run.
///
/// Durations are wall-clock milliseconds. Segmentation and rendering are
/// pure in-memory transforms, so on typical manuals every duration is 0–2
/// ms; the fields earn their keep on multi-megabyte inputs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversionStats {
    /// Top-level sections in the tree (including a synthetic intro
    /// section, when one was created).
    pub section_count: usize,
    /// Subsections across all sections. Always 0 today; the segmenter
    /// produces a flat tree.
    pub subsection_count: usize,
    /// Total characters of accumulated body content.
    pub content_chars: usize,
    /// End-to-end duration.
    pub total_duration_ms: u64,
    /// Time spent segmenting lines into the tree.
    pub segment_duration_ms: u64,
    /// Time spent rendering section bodies to HTML (0 when disabled).
    pub render_duration_ms: u64,
}
