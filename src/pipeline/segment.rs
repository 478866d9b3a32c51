//! Segmentation: an ordered stream of text lines → section tree.
//!
//! ## Why a heuristic at all?
//!
//! Text extracted from a PDF (and often from a word-processor document)
//! arrives as a flat run of lines with no structural markup. Manuals and
//! reports written for print almost always set their section titles in
//! caps — `INTRODUCTION`, `SECTION 3 - MAINTENANCE` — so an all-caps
//! check with a length cap recovers the outline surprisingly well. When
//! the upstream extractor can do better (native paragraph styles), the
//! [`HeadingStrategy::Style`] variant trusts its metadata instead.
//!
//! Segmentation is deliberately total: a line the classifier is unsure
//! about is body content, never an error, and re-running on the same
//! input always yields byte-identical output.

use crate::config::{ConversionConfig, HeadingStrategy};
use crate::document::DocumentTree;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// One input line, as supplied by the upstream extractor.
///
/// `heading_style` carries the extractor's own verdict, where it has one:
/// `Some(true)` for a line taken from a heading/title paragraph,
/// `Some(false)` for a line taken from an ordinary paragraph, and `None`
/// when the source format had no style information to pass through
/// (plain text, most PDF extraction).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceLine {
    /// Raw line text. Leading/trailing whitespace is trimmed during
    /// segmentation; the original is kept here untouched.
    pub text: String,
    /// Extractor style verdict, if any.
    pub heading_style: Option<bool>,
}

impl SourceLine {
    /// A line with no style metadata.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            heading_style: None,
        }
    }

    /// A line the extractor tagged as heading-style (or explicitly not).
    pub fn with_style(text: impl Into<String>, heading_style: bool) -> Self {
        Self {
            text: text.into(),
            heading_style: Some(heading_style),
        }
    }
}

impl From<&str> for SourceLine {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for SourceLine {
    fn from(text: String) -> Self {
        Self {
            text,
            heading_style: None,
        }
    }
}

// Uppercase letters, digits, spaces, hyphens, colons — nothing else.
static RE_HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z0-9 \-:]+$").unwrap());

/// Pattern predicate: all caps/digits/`-`/`:` and under the length cap.
///
/// The length check counts characters, not bytes; any line that passes the
/// character-class check is pure ASCII anyway, so the two agree, but the
/// cap must also behave sensibly for lines that fail the class.
fn looks_like_heading(trimmed: &str, max_len: usize) -> bool {
    RE_HEADING.is_match(trimmed) && trimmed.chars().count() < max_len
}

/// Classify one trimmed, non-empty line under the active strategy.
fn is_heading(line: &SourceLine, trimmed: &str, config: &ConversionConfig) -> bool {
    match config.strategy {
        HeadingStrategy::Pattern => looks_like_heading(trimmed, config.max_heading_len),
        HeadingStrategy::Style => match line.heading_style {
            Some(v) => v,
            // Metadata unavailable for this line: fall back to the
            // surface-shape heuristic.
            None => looks_like_heading(trimmed, config.max_heading_len),
        },
    }
}

/// Segment an ordered sequence of lines into a section tree.
///
/// Walks the lines once. Blank lines are skipped; each remaining line is
/// either promoted to the current section title or appended (with a
/// trailing `\n`) to the current section's content. Body lines seen
/// before any heading land in a lazily-created synthetic section named
/// [`ConversionConfig::intro_title`].
///
/// Two documented quirks are preserved on purpose:
///
/// - A heading whose exact text recurs later appends to the record
///   created at the first occurrence, rather than opening a second
///   section. Map keys are deduplicated by exact string equality.
/// - Heading text is used verbatim as the key, so `"SETUP"` and
///   `"SETUP:"` are different sections even when a human would merge
///   them.
///
/// Never fails; the empty input yields an empty tree.
pub fn segment<I>(lines: I, config: &ConversionConfig) -> DocumentTree
where
    I: IntoIterator,
    I::Item: Into<SourceLine>,
{
    let mut tree = DocumentTree::new();
    let mut current_section: Option<String> = None;

    for line in lines {
        let line: SourceLine = line.into();
        let trimmed = line.text.trim();
        if trimmed.is_empty() {
            continue;
        }

        if is_heading(&line, trimmed, config) {
            debug!(title = trimmed, "detected heading");
            tree.entry(trimmed);
            current_section = Some(trimmed.to_string());
        } else {
            match current_section {
                Some(ref title) => tree.entry(title).push_line(trimmed),
                None => tree.entry(&config.intro_title).push_line(trimmed),
            }
        }
    }

    tree
}

/// Segment a block of plain text, splitting on `\n`.
///
/// Convenience wrapper for callers without per-line style metadata.
pub fn segment_text(text: &str, config: &ConversionConfig) -> DocumentTree {
    segment(text.split('\n'), config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ConversionConfig {
        ConversionConfig::default()
    }

    #[test]
    fn worked_example() {
        let lines = ["SECTION ONE", "hello world", "SECTION TWO", "- a", "- b"];
        let tree = segment(lines, &config());
        let titles: Vec<&str> = tree.titles().collect();
        assert_eq!(titles, vec!["SECTION ONE", "SECTION TWO"]);
        assert_eq!(tree.get("SECTION ONE").unwrap().content, "hello world\n");
        assert_eq!(tree.get("SECTION TWO").unwrap().content, "- a\n- b\n");
        assert!(tree.get("SECTION ONE").unwrap().subsections.is_empty());
    }

    #[test]
    fn body_before_first_heading_goes_to_introduction() {
        let tree = segment(["intro text"], &config());
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.get("Introduction").unwrap().content, "intro text\n");
    }

    #[test]
    fn intro_title_is_configurable() {
        let cfg = ConversionConfig::builder()
            .intro_title("Preamble")
            .build()
            .unwrap();
        let tree = segment(["floating text"], &cfg);
        assert_eq!(tree.get("Preamble").unwrap().content, "floating text\n");
    }

    #[test]
    fn empty_input_yields_empty_tree() {
        let tree = segment(std::iter::empty::<&str>(), &config());
        assert!(tree.is_empty());
    }

    #[test]
    fn blank_lines_skipped() {
        let tree = segment(["", "   ", "\t", "SETUP", "", "step one"], &config());
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.get("SETUP").unwrap().content, "step one\n");
    }

    #[test]
    fn length_boundary_at_exactly_100() {
        let at_cap = "A".repeat(100);
        let under_cap = "A".repeat(99);
        let tree = segment([under_cap.as_str(), at_cap.as_str()], &config());
        // 99 chars: heading. 100 chars: body of that heading.
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.get(&under_cap).unwrap().content, format!("{at_cap}\n"));
    }

    #[test]
    fn lowercase_disqualifies_heading() {
        let tree = segment(["Section One"], &config());
        assert!(tree.get("Section One").is_none());
        assert!(tree.get("Introduction").is_some());
    }

    #[test]
    fn digits_and_spaces_only_is_a_heading() {
        // Known false positive of the pattern predicate, kept as documented.
        let tree = segment(["12 34"], &config());
        assert!(tree.get("12 34").is_some());
    }

    #[test]
    fn hyphens_and_colons_allowed_in_headings() {
        let tree = segment(["SECTION 3 - MAINTENANCE: BASICS"], &config());
        assert!(tree.get("SECTION 3 - MAINTENANCE: BASICS").is_some());
    }

    #[test]
    fn duplicate_heading_appends_to_first_record() {
        let lines = ["NOTES", "first", "OTHER", "middle", "NOTES", "second"];
        let tree = segment(lines, &config());
        let titles: Vec<&str> = tree.titles().collect();
        assert_eq!(titles, vec!["NOTES", "OTHER"]);
        assert_eq!(tree.get("NOTES").unwrap().content, "first\nsecond\n");
    }

    #[test]
    fn heading_key_is_verbatim_trimmed_text() {
        let tree = segment(["  SETUP:  ", "a", "SETUP", "b"], &config());
        assert_eq!(tree.get("SETUP:").unwrap().content, "a\n");
        assert_eq!(tree.get("SETUP").unwrap().content, "b\n");
    }

    #[test]
    fn segmentation_is_deterministic() {
        let lines = vec!["ONE", "alpha", "TWO", "beta", "ONE", "gamma"];
        let a = segment(lines.clone(), &config());
        let b = segment(lines, &config());
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn style_strategy_trusts_metadata() {
        let cfg = ConversionConfig::builder()
            .strategy(HeadingStrategy::Style)
            .build()
            .unwrap();
        let lines = vec![
            SourceLine::with_style("Getting Started", true),
            SourceLine::with_style("WARNING", false),
            SourceLine::with_style("plug it in", false),
        ];
        let tree = segment(lines, &cfg);
        // Mixed-case heading accepted; all-caps body line not promoted.
        assert_eq!(
            tree.get("Getting Started").unwrap().content,
            "WARNING\nplug it in\n"
        );
    }

    #[test]
    fn style_strategy_falls_back_to_pattern_without_metadata() {
        let cfg = ConversionConfig::builder()
            .strategy(HeadingStrategy::Style)
            .build()
            .unwrap();
        let lines = vec![SourceLine::new("OVERVIEW"), SourceLine::new("some body")];
        let tree = segment(lines, &cfg);
        assert_eq!(tree.get("OVERVIEW").unwrap().content, "some body\n");
    }

    #[test]
    fn segment_text_splits_on_newlines() {
        let tree = segment_text("TITLE\nline one\nline two\n", &config());
        assert_eq!(tree.get("TITLE").unwrap().content, "line one\nline two\n");
    }
}
