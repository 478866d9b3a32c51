//! The section-tree document model.
//!
//! A converted document is an ordered mapping from section title to
//! [`SectionRecord`]. Order matters: consumers expect the JSON object keys
//! in first-occurrence order, exactly as the headings appeared in the
//! source. `std::collections::HashMap` randomises order and `BTreeMap`
//! sorts it, so [`DocumentTree`] is a thin `Vec` of entries with
//! handwritten serde impls that read and write a plain JSON object.
//!
//! Lookups are linear. Real documents have tens of sections, not
//! thousands; keeping one flat `Vec` avoids carrying a side index that
//! would have to stay in sync on every insert.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// One section of the document: accumulated body text plus a slot for
/// nested subsections.
///
/// `subsections` is reserved for deeper outlines; the segmenter produces a
/// flat one-level tree and leaves it empty, but it must survive a JSON
/// round-trip as an empty object so downstream tooling can rely on the
/// shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionRecord {
    /// Body text in input order. Each body line is appended with a trailing
    /// `\n`, so non-empty content always ends with a newline.
    pub content: String,
    /// Nested subsections, keyed like the top level. Always empty today.
    #[serde(default)]
    pub subsections: DocumentTree,
}

impl SectionRecord {
    /// Append one body line, restoring the `line + "\n"` framing.
    pub fn push_line(&mut self, line: &str) {
        self.content.push_str(line);
        self.content.push('\n');
    }
}

/// Ordered map of section title → [`SectionRecord`].
///
/// Insertion order equals the order of first heading occurrence in the
/// input, and is preserved through serialisation. Titles are compared by
/// exact string equality — no case folding, no whitespace normalisation —
/// so `"SETUP"` and `"SETUP:"` are distinct sections.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentTree {
    entries: Vec<(String, SectionRecord)>,
}

impl DocumentTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of top-level sections.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no section has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a section by exact title.
    pub fn get(&self, title: &str) -> Option<&SectionRecord> {
        self.entries.iter().find(|(t, _)| t == title).map(|(_, r)| r)
    }

    /// Mutable access to the record for `title`, inserting an empty record
    /// at the end if the title is new.
    ///
    /// This is the append-on-duplicate behaviour the segmenter relies on: a
    /// heading that recurs later in the document routes its body lines into
    /// the record created at the first occurrence.
    pub fn entry(&mut self, title: &str) -> &mut SectionRecord {
        if let Some(idx) = self.entries.iter().position(|(t, _)| t == title) {
            return &mut self.entries[idx].1;
        }
        self.entries.push((title.to_string(), SectionRecord::default()));
        &mut self.entries.last_mut().unwrap().1
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SectionRecord)> {
        self.entries.iter().map(|(t, r)| (t.as_str(), r))
    }

    /// Section titles in insertion order.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(t, _)| t.as_str())
    }

    /// Total characters of body content across all sections, recursively.
    pub fn content_chars(&self) -> usize {
        self.iter()
            .map(|(_, r)| r.content.chars().count() + r.subsections.content_chars())
            .sum()
    }

    /// Total number of subsections across all sections, recursively.
    pub fn subsection_count(&self) -> usize {
        self.iter()
            .map(|(_, r)| r.subsections.len() + r.subsections.subsection_count())
            .sum()
    }
}

impl<'a> IntoIterator for &'a DocumentTree {
    type Item = (&'a str, &'a SectionRecord);
    type IntoIter = Box<dyn Iterator<Item = (&'a str, &'a SectionRecord)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

impl Serialize for DocumentTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (title, record) in &self.entries {
            map.serialize_entry(title, record)?;
        }
        map.end()
    }
}

struct TreeVisitor;

impl<'de> Visitor<'de> for TreeVisitor {
    type Value = DocumentTree;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON object of section title to section record")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut tree = DocumentTree {
            entries: Vec::with_capacity(access.size_hint().unwrap_or(0)),
        };
        while let Some((title, record)) = access.next_entry::<String, SectionRecord>()? {
            // Last occurrence wins on duplicate JSON keys, matching how
            // ordinary JSON object decoding behaves.
            *tree.entry(&title) = record;
        }
        Ok(tree)
    }
}

impl<'de> Deserialize<'de> for DocumentTree {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(TreeVisitor)
    }
}
