//! Top-level conversion entry points.
//!
//! The pipeline stages in [`crate::pipeline`] are deliberately small and
//! free-standing; this module strings them together, measures them, and
//! handles the one piece of I/O the library owns (writing the JSON tree
//! to a file). Callers that only need the tree can use
//! [`crate::pipeline::segment::segment`] directly and skip the stats.

use crate::config::ConversionConfig;
use crate::error::Text2DocError;
use crate::output::{ConversionOutput, ConversionStats, SectionHtml};
use crate::pipeline::{html, segment};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Convert a block of extracted plain text to a section tree.
///
/// This is the primary entry point for the library. The text is split on
/// `\n`; callers holding per-line style metadata should use
/// [`convert_lines`] instead.
///
/// # Errors
/// The conversion itself is total. The `Result` exists for parity with
/// [`convert_to_file`] and for forward compatibility; today this function
/// always returns `Ok`.
pub fn convert(text: &str, config: &ConversionConfig) -> Result<ConversionOutput, Text2DocError> {
    convert_lines(text.split('\n').map(segment::SourceLine::new), config)
}

/// Convert an ordered sequence of [`segment::SourceLine`]s to a section
/// tree, carrying any per-line heading-style metadata into the segmenter.
pub fn convert_lines<I>(lines: I, config: &ConversionConfig) -> Result<ConversionOutput, Text2DocError>
where
    I: IntoIterator,
    I::Item: Into<segment::SourceLine>,
{
    let total_start = Instant::now();

    // ── Step 1: Segment lines into the tree ──────────────────────────────
    let segment_start = Instant::now();
    let document = segment::segment(lines, config);
    let segment_duration_ms = segment_start.elapsed().as_millis() as u64;
    debug!(
        sections = document.len(),
        "segmented input in {}ms", segment_duration_ms
    );

    // ── Step 2: Render section bodies (optional) ─────────────────────────
    let render_start = Instant::now();
    let sections = if config.render_html {
        Some(
            document
                .iter()
                .map(|(title, record)| SectionHtml {
                    title: title.to_string(),
                    html: html::render_html(&record.content),
                })
                .collect(),
        )
    } else {
        None
    };
    let render_duration_ms = render_start.elapsed().as_millis() as u64;

    // ── Step 3: Compute stats ────────────────────────────────────────────
    let stats = ConversionStats {
        section_count: document.len(),
        subsection_count: document.subsection_count(),
        content_chars: document.content_chars(),
        total_duration_ms: total_start.elapsed().as_millis() as u64,
        segment_duration_ms,
        render_duration_ms,
    };

    info!(
        "Conversion complete: {} sections, {} chars, {}ms total",
        stats.section_count, stats.content_chars, stats.total_duration_ms
    );

    Ok(ConversionOutput {
        document,
        sections,
        stats,
    })
}

/// Convert text and write the section tree to a JSON file.
///
/// The tree is serialised as pretty-printed JSON (2-space indent) with
/// top-level keys in first-occurrence order. Uses an atomic write (temp
/// file + rename) to prevent partial files.
pub fn convert_to_file(
    text: &str,
    output_path: impl AsRef<Path>,
    config: &ConversionConfig,
) -> Result<ConversionStats, Text2DocError> {
    let output = convert(text, config)?;
    let path = output_path.as_ref();
    let json = serde_json::to_string_pretty(&output.document)?;

    let write_failed = |source| Text2DocError::OutputWriteFailed {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(write_failed)?;
        }
    }

    // Atomic write: write to temp, then rename
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes()).map_err(write_failed)?;
    std::fs::rename(&tmp_path, path).map_err(write_failed)?;

    info!("Wrote {} sections to {}", output.stats.section_count, path.display());
    Ok(output.stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_populates_stats() {
        let config = ConversionConfig::default();
        let output = convert("TITLE\nbody line\n", &config).unwrap();
        assert_eq!(output.stats.section_count, 1);
        assert_eq!(output.stats.subsection_count, 0);
        assert_eq!(output.stats.content_chars, "body line\n".len());
        assert!(output.sections.is_none());
    }

    #[test]
    fn convert_renders_html_when_enabled() {
        let config = ConversionConfig::builder().render_html(true).build().unwrap();
        let output = convert("TITLE\n**bold** text\n", &config).unwrap();
        let sections = output.sections.unwrap();
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "TITLE");
        assert_eq!(sections[0].html, "<strong>bold</strong> text");
    }

    #[test]
    fn rendered_sections_follow_tree_order() {
        let config = ConversionConfig::builder().render_html(true).build().unwrap();
        let output = convert("BRAVO\nb\nALPHA\na\n", &config).unwrap();
        let titles: Vec<&str> = output
            .sections
            .as_ref()
            .unwrap()
            .iter()
            .map(|s| s.title.as_str())
            .collect();
        assert_eq!(titles, vec!["BRAVO", "ALPHA"]);
    }

    #[test]
    fn convert_empty_text() {
        let output = convert("", &ConversionConfig::default()).unwrap();
        assert!(output.document.is_empty());
        assert_eq!(output.stats.section_count, 0);
    }
}
