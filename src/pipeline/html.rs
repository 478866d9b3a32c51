//! HTML rendering: one section's body text → a constrained HTML subset.
//!
//! ## What this stage accepts
//!
//! Section bodies carry the light inline conventions found in extracted
//! manuals: `**bold**`, `*italic*`, `_underline_`, `` `code` ``, dash or
//! bullet or numbered list lines, blank-line paragraph breaks, and the
//! four directional arrow glyphs. The output vocabulary is equally small:
//! `<strong>`, `<em>`, `<u>`, `<code>`, `<ol>`/`<ul>`/`<li>`, `<br>`, and
//! the named arrow entities.
//!
//! ## What it does not do
//!
//! No HTML escaping is performed (the transform is one-shot, not
//! idempotent: rendering already-rendered output will mangle it), and no
//! attempt is made to recover structure beyond paragraphs and flat lists.
//!
//! ## Substitution order
//!
//! Inline rules run in a fixed order: strong before em, so the doubled
//! asterisks of `**bold**` are consumed before the single-asterisk rule
//! sees the text; underline, code, and arrow replacement follow. Every
//! capture is non-greedy, so `**a** and **b**` yields two spans, and a
//! lone unmatched marker passes through literally.

use once_cell::sync::Lazy;
use regex::Regex;

// List-item detection needs whitespace after the numeric marker; the
// paragraph-level ordered check deliberately does not (a paragraph whose
// first line is `3.2` still counts as numbered).
static RE_LIST_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\s+").unwrap());
static RE_ORDERED_LEAD: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.").unwrap());

static RE_STRONG: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());
static RE_EM: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.*?)\*").unwrap());
static RE_UNDERLINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"_(.*?)_").unwrap());
static RE_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`(.*?)`").unwrap());

/// Render a block of raw section text to HTML.
///
/// Paragraphs are split on blank lines (`"\n\n"`); within a paragraph,
/// consecutive list-marker lines form one list block and every other line
/// stands alone. Blocks within a paragraph are joined with `<br>`,
/// paragraphs with `<br><br>`. The empty string renders to the empty
/// string.
///
/// List typing is a paragraph-level signal, preserved as-is from the
/// original heuristic: a run renders as `<ol>` iff the paragraph's first
/// physical line starts with a numeric marker, so a paragraph opening
/// with `1.` renders even its later dash-prefixed runs as ordered.
pub fn render_html(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut html_paragraphs: Vec<String> = Vec::new();

    for paragraph in text.split("\n\n") {
        if paragraph.trim().is_empty() {
            continue;
        }

        let lines: Vec<&str> = paragraph.split('\n').collect();
        // First *raw* physical line of the paragraph governs the list tag
        // for every run in it.
        let ordered = RE_ORDERED_LEAD.is_match(lines[0]);

        let mut blocks: Vec<String> = Vec::new();
        let mut items: Vec<String> = Vec::new();

        for raw in &lines {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(item) = strip_list_marker(line) {
                items.push(format!("<li>{}</li>", format_inline(item)));
            } else {
                flush_list(&mut blocks, &mut items, ordered);
                blocks.push(format_inline(line));
            }
        }
        flush_list(&mut blocks, &mut items, ordered);

        if !blocks.is_empty() {
            html_paragraphs.push(blocks.join("<br>"));
        }
    }

    html_paragraphs.join("<br><br>")
}

/// If `line` is a list item, return its text with the marker stripped.
///
/// Recognised markers: `"- "`, the bullet glyph `"• "`, and `digits.`
/// followed by whitespace. Item text is trimmed after stripping so
/// `"-   spaced"` and `"- spaced"` render identically.
fn strip_list_marker(line: &str) -> Option<&str> {
    if let Some(rest) = line.strip_prefix("- ") {
        return Some(rest.trim());
    }
    if let Some(rest) = line.strip_prefix("• ") {
        return Some(rest.trim());
    }
    if let Some(m) = RE_LIST_ITEM.find(line) {
        return Some(line[m.end()..].trim());
    }
    None
}

/// Close the pending list run, if any, into a single `<ol>`/`<ul>` block.
fn flush_list(blocks: &mut Vec<String>, items: &mut Vec<String>, ordered: bool) {
    if items.is_empty() {
        return;
    }
    let tag = if ordered { "ol" } else { "ul" };
    blocks.push(format!("<{tag}>{}</{tag}>", items.join("")));
    items.clear();
}

/// Apply the inline substitutions, in order, to one line of text.
pub fn format_inline(text: &str) -> String {
    let s = RE_STRONG.replace_all(text, "<strong>$1</strong>");
    let s = RE_EM.replace_all(&s, "<em>$1</em>");
    let s = RE_UNDERLINE.replace_all(&s, "<u>$1</u>");
    let s = RE_CODE.replace_all(&s, "<code>$1</code>");
    s.replace('→', "&rarr;")
        .replace('←', "&larr;")
        .replace('↑', "&uarr;")
        .replace('↓', "&darr;")
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Inline formatting ────────────────────────────────────────────────

    #[test]
    fn bold_and_italic() {
        let html = render_html("**bold** and *italic*");
        assert_eq!(html, "<strong>bold</strong> and <em>italic</em>");
        assert!(!html.contains('*'), "no stray asterisks: {html}");
    }

    #[test]
    fn adjacent_strong_spans_stay_separate() {
        // Non-greedy match: two spans, not one spanning the middle text.
        let html = format_inline("**a** text **b**");
        assert_eq!(html, "<strong>a</strong> text <strong>b</strong>");
    }

    #[test]
    fn lone_asterisk_passes_through() {
        assert_eq!(format_inline("2 * 3 = 6"), "2 * 3 = 6");
    }

    #[test]
    fn underline_and_code() {
        assert_eq!(
            format_inline("_press_ the `ENTER` key"),
            "<u>press</u> the <code>ENTER</code> key"
        );
    }

    #[test]
    fn arrows_become_entities() {
        assert_eq!(
            format_inline("→ ← ↑ ↓"),
            "&rarr; &larr; &uarr; &darr;"
        );
    }

    // ── Lists ────────────────────────────────────────────────────────────

    #[test]
    fn numbered_lines_make_an_ordered_list() {
        let html = render_html("1. first\n2. second");
        assert_eq!(html, "<ol><li>first</li><li>second</li></ol>");
    }

    #[test]
    fn dash_lines_make_an_unordered_list() {
        let html = render_html("- a\n- b");
        assert_eq!(html, "<ul><li>a</li><li>b</li></ul>");
    }

    #[test]
    fn bullet_glyph_recognised() {
        let html = render_html("• alpha\n• beta");
        assert_eq!(html, "<ul><li>alpha</li><li>beta</li></ul>");
    }

    #[test]
    fn numeric_marker_requires_trailing_whitespace() {
        // "3.2" is a version number, not a list item.
        let html = render_html("3.2 is the current release");
        assert_eq!(html, "3.2 is the current release");
    }

    #[test]
    fn inline_formatting_applies_inside_items() {
        let html = render_html("- press **OK**");
        assert_eq!(html, "<ul><li>press <strong>OK</strong></li></ul>");
    }

    #[test]
    fn text_then_numeric_list_renders_unordered() {
        // The tag comes from the paragraph's first physical line, which is
        // plain text here — so the numeric run still renders as <ul>.
        let html = render_html("Steps:\n1. open\n2. close");
        assert_eq!(html, "Steps:<br><ul><li>open</li><li>close</li></ul>");
    }

    #[test]
    fn list_interrupted_by_text_produces_two_runs() {
        let html = render_html("- a\nplain\n- b");
        assert_eq!(html, "<ul><li>a</li></ul><br>plain<br><ul><li>b</li></ul>");
    }

    #[test]
    fn first_line_governs_list_tag_for_the_whole_paragraph() {
        // The paragraph opens with a numeric marker, so even the later
        // dash-prefixed run renders as <ol>. Surprising but intentional:
        // the tag is a paragraph-level signal, not per-run.
        let html = render_html("1. first\nplain\n- dash item");
        assert_eq!(
            html,
            "<ol><li>first</li></ol><br>plain<br><ol><li>dash item</li></ol>"
        );
    }

    // ── Paragraphs ───────────────────────────────────────────────────────

    #[test]
    fn paragraphs_join_with_double_break() {
        let html = render_html("one\n\ntwo");
        assert_eq!(html, "one<br><br>two");
    }

    #[test]
    fn whitespace_only_paragraph_dropped() {
        let html = render_html("one\n\n   \n\ntwo");
        assert_eq!(html, "one<br><br>two");
    }

    #[test]
    fn lines_within_paragraph_join_with_break() {
        let html = render_html("line a\nline b");
        assert_eq!(html, "line a<br>line b");
    }

    #[test]
    fn empty_input_renders_empty() {
        assert_eq!(render_html(""), "");
    }

    #[test]
    fn realistic_section_body() {
        let body = "1. Manual mode\n\
                    2. Automatic mode\n\n\
                    Press `START` → the display lights up.\n\n\
                    - check the **red** light\n\
                    - check the _green_ light";
        let html = render_html(body);
        assert_eq!(
            html,
            "<ol><li>Manual mode</li><li>Automatic mode</li></ol><br><br>\
             Press <code>START</code> &rarr; the display lights up.<br><br>\
             <ul><li>check the <strong>red</strong> light</li>\
             <li>check the <u>green</u> light</li></ul>"
        );
    }
}
