use serde::{Deserialize, Serialize};

/// The flat element kinds the document builder understands. There is no
/// third heading tier; level-3 source headings collapse into level 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElementKind {
    #[serde(rename = "heading-level-1")]
    HeadingLevel1,
    #[serde(rename = "heading-level-2")]
    HeadingLevel2,
    #[serde(rename = "paragraph")]
    Paragraph,
    #[serde(rename = "list-item")]
    ListItem,
}

/// One unit of the flat element stream consumed by the binary document
/// builder. No nesting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuralElement {
    pub kind: ElementKind,
    pub text: String,
}

impl StructuralElement {
    pub fn new(kind: ElementKind, text: impl Into<String>) -> Self {
        StructuralElement {
            kind,
            text: text.into(),
        }
    }

    pub fn heading1(text: impl Into<String>) -> Self {
        Self::new(ElementKind::HeadingLevel1, text)
    }

    pub fn heading2(text: impl Into<String>) -> Self {
        Self::new(ElementKind::HeadingLevel2, text)
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::new(ElementKind::Paragraph, text)
    }

    pub fn list_item(text: impl Into<String>) -> Self {
        Self::new(ElementKind::ListItem, text)
    }
}
