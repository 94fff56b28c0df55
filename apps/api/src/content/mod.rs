//! Resume content parsing: front-matter metadata extraction plus
//! line-classification segmentation into typed sections.

pub mod front_matter;
pub mod models;
pub mod segment;

pub use models::{ParsedContent, ResumeMetadata, Section, SectionKind};

/// Parses a raw markdown resume into metadata and classified sections.
///
/// Never fails. The returned `markup` is empty; the render step fills it.
pub fn parse(text: &str) -> ParsedContent {
    let (metadata, body) = front_matter::split_front_matter(text);
    let sections = segment::segment(body);
    ParsedContent {
        markup: String::new(),
        metadata,
        sections,
    }
}
