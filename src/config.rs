//! Configuration types for text-to-document conversion.
//!
//! All conversion behaviour is controlled through [`ConversionConfig`],
//! built via its [`ConversionConfigBuilder`]. Keeping every knob in one
//! struct makes it trivial to share configs across threads, serialise them
//! for logging, and diff two runs to understand why their outputs differ.

use crate::error::Text2DocError;
use serde::{Deserialize, Serialize};

/// Configuration for a text-to-document conversion.
///
/// Built via [`ConversionConfig::builder()`] or using
/// [`ConversionConfig::default()`].
///
/// # Example
/// ```rust
/// use text2doc::{ConversionConfig, HeadingStrategy};
///
/// let config = ConversionConfig::builder()
///     .strategy(HeadingStrategy::Pattern)
///     .max_heading_len(80)
///     .render_html(true)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionConfig {
    /// How heading lines are told apart from body lines. Default: [`HeadingStrategy::Pattern`].
    pub strategy: HeadingStrategy,

    /// Length cap on pattern-detected headings, in characters. Default: 100.
    ///
    /// An all-caps line at or above this length is treated as body content.
    /// The cap guards against shouted sentences being promoted to section
    /// titles; it does not apply to style-tagged headings, which the
    /// upstream extractor has already vouched for.
    pub max_heading_len: usize,

    /// Title of the synthetic section that collects body lines appearing
    /// before the first detected heading. Default: `"Introduction"`.
    ///
    /// The section is created lazily, so a document that opens with a
    /// heading never contains it.
    pub intro_title: String,

    /// Render each section's body to HTML alongside the tree. Default: false.
    ///
    /// Rendering is independent per section and purely additive; the JSON
    /// tree is identical with or without it.
    pub render_html: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            strategy: HeadingStrategy::default(),
            max_heading_len: 100,
            intro_title: "Introduction".to_string(),
            render_html: false,
        }
    }
}

impl ConversionConfig {
    /// Create a new builder for `ConversionConfig`.
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`ConversionConfig`].
#[derive(Debug)]
pub struct ConversionConfigBuilder {
    config: ConversionConfig,
}

impl ConversionConfigBuilder {
    pub fn strategy(mut self, strategy: HeadingStrategy) -> Self {
        self.config.strategy = strategy;
        self
    }

    pub fn max_heading_len(mut self, len: usize) -> Self {
        self.config.max_heading_len = len.max(1);
        self
    }

    pub fn intro_title(mut self, title: impl Into<String>) -> Self {
        self.config.intro_title = title.into();
        self
    }

    pub fn render_html(mut self, v: bool) -> Self {
        self.config.render_html = v;
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ConversionConfig, Text2DocError> {
        let c = &self.config;
        if c.max_heading_len == 0 {
            return Err(Text2DocError::InvalidConfig(
                "max_heading_len must be ≥ 1".into(),
            ));
        }
        if c.intro_title.trim().is_empty() {
            return Err(Text2DocError::InvalidConfig(
                "intro_title must not be blank".into(),
            ));
        }
        Ok(self.config)
    }
}

// ── Enums ────────────────────────────────────────────────────────────────

/// How the segmenter decides whether a line is a section heading.
///
/// Two strategies exist because input documents arrive with different
/// amounts of upstream context. PDF text extraction flattens everything to
/// bare lines, leaving only surface shape to go on; word-processor
/// extraction can pass through each paragraph's native style, which is far
/// more reliable than guessing from capitalisation.
///
/// | Strategy | Signal | Use when |
/// |----------|--------|----------|
/// | `Pattern` | line is all caps/digits/`-`/`:` and short | no style metadata (default) |
/// | `Style`   | extractor tagged the line heading-style | extractor preserves paragraph styles |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HeadingStrategy {
    /// A line is a heading iff, after trimming, it consists only of
    /// uppercase letters, digits, spaces, hyphens, and colons, and is
    /// shorter than [`ConversionConfig::max_heading_len`]. (default)
    ///
    /// Known false positive: a line of only digits and spaces (a page
    /// number, say) qualifies. Left as-is rather than special-cased —
    /// callers with cleaner signals should use `Style`.
    #[default]
    Pattern,
    /// A line is a heading iff the upstream extractor tagged it with
    /// heading-style metadata. Lines without metadata fall back to the
    /// `Pattern` predicate, so a mixed stream still segments sensibly.
    Style,
}
