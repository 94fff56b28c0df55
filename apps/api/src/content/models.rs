#![allow(dead_code)]

use serde::{Deserialize, Serialize};

/// Ordered key/value metadata extracted from the front-matter block.
///
/// Keys are unbounded and unvalidated beyond the first-colon split; document
/// order is preserved. Immutable once parsing completes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeMetadata {
    entries: Vec<MetadataEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataEntry {
    pub key: String,
    pub value: String,
}

impl ResumeMetadata {
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.push(MetadataEntry {
            key: key.into(),
            value: value.into(),
        });
    }

    /// Returns the value for the first entry with the given key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .map(|e| e.value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MetadataEntry> {
        self.entries.iter()
    }
}

/// Classification of a content block produced by segmentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Header,
    Paragraph,
    List,
    Table,
    Code,
}

/// A classified content block, produced in document order.
///
/// `level` is set for headers only (the run length of leading `#`, uncapped
/// here; downstream rendering clamps). `items` is non-empty exactly for
/// list sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub kind: SectionKind,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<String>,
}

impl Section {
    pub fn header(level: u8, content: impl Into<String>) -> Self {
        Section {
            kind: SectionKind::Header,
            content: content.into(),
            level: Some(level),
            items: Vec::new(),
        }
    }

    pub fn paragraph(content: impl Into<String>) -> Self {
        Section {
            kind: SectionKind::Paragraph,
            content: content.into(),
            level: None,
            items: Vec::new(),
        }
    }

    pub fn list(items: Vec<String>) -> Self {
        Section {
            kind: SectionKind::List,
            content: items.join("\n"),
            level: None,
            items,
        }
    }

    pub fn table(content: impl Into<String>) -> Self {
        Section {
            kind: SectionKind::Table,
            content: content.into(),
            level: None,
            items: Vec::new(),
        }
    }

    pub fn code(content: impl Into<String>) -> Self {
        Section {
            kind: SectionKind::Code,
            content: content.into(),
            level: None,
            items: Vec::new(),
        }
    }
}

/// The parse result shared by every pipeline stage: metadata, ordered
/// sections, and the rendered markup (filled in by the render step; empty
/// straight out of `parse`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedContent {
    pub markup: String,
    pub metadata: ResumeMetadata,
    pub sections: Vec<Section>,
}
