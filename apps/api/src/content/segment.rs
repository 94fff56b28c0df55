//! Section segmentation: a single-pass line classifier driving an explicit
//! open-section state machine.
//!
//! Heading lines always emit standalone header sections, and a blank line
//! closes whatever section is open, so paragraphs separated by a blank line
//! stay distinct. Fenced code swallows every line class until the closing
//! fence.

use crate::content::models::Section;

/// One classified input line.
#[derive(Debug, PartialEq)]
enum LineClass<'a> {
    Blank,
    Header { level: u8, text: &'a str },
    ListItem(&'a str),
    Fence,
    TableRow(&'a str),
    Text(&'a str),
}

/// The currently open (unflushed) section.
#[derive(Debug)]
enum OpenSection {
    Paragraph(String),
    List(Vec<String>),
    Table(String),
    Code(String),
}

fn classify(line: &str) -> LineClass<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineClass::Blank;
    }
    if trimmed.starts_with("```") {
        return LineClass::Fence;
    }
    if trimmed.starts_with('#') {
        let run = trimmed.chars().take_while(|c| *c == '#').count();
        return LineClass::Header {
            level: run.min(u8::MAX as usize) as u8,
            text: trimmed[run..].trim(),
        };
    }
    if let Some(rest) = trimmed
        .strip_prefix('-')
        .or_else(|| trimmed.strip_prefix('*'))
    {
        return LineClass::ListItem(rest.trim());
    }
    if let Some(rest) = strip_ordered_marker(trimmed) {
        return LineClass::ListItem(rest);
    }
    if trimmed.starts_with('|') {
        return LineClass::TableRow(trimmed);
    }
    LineClass::Text(trimmed)
}

/// Strips a `1.`-style ordered marker, returning the trimmed item text.
fn strip_ordered_marker(line: &str) -> Option<&str> {
    let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    line[digits..].strip_prefix('.').map(str::trim)
}

/// Segments body text into classified sections, in document order.
///
/// Never fails; unclassifiable input degrades to paragraph sections.
/// All-blank input yields an empty sequence. Empty list sections are
/// never emitted.
pub fn segment(body: &str) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut open: Option<OpenSection> = None;

    for line in body.lines() {
        // Inside a fence, only the closing fence changes state; everything
        // else (blanks, `#`, markers) is literal content.
        if matches!(open, Some(OpenSection::Code(_))) {
            if line.trim().starts_with("```") {
                flush(&mut open, &mut sections);
            } else if let Some(OpenSection::Code(buf)) = &mut open {
                if !buf.is_empty() {
                    buf.push('\n');
                }
                buf.push_str(line);
            }
            continue;
        }

        match classify(line) {
            LineClass::Blank => flush(&mut open, &mut sections),
            LineClass::Header { level, text } => {
                flush(&mut open, &mut sections);
                sections.push(Section::header(level, text));
            }
            LineClass::Fence => {
                flush(&mut open, &mut sections);
                open = Some(OpenSection::Code(String::new()));
            }
            LineClass::ListItem(item) => match &mut open {
                Some(OpenSection::List(items)) => items.push(item.to_string()),
                _ => {
                    flush(&mut open, &mut sections);
                    open = Some(OpenSection::List(vec![item.to_string()]));
                }
            },
            LineClass::TableRow(row) => match &mut open {
                Some(OpenSection::Table(buf)) => {
                    buf.push('\n');
                    buf.push_str(row);
                }
                _ => {
                    flush(&mut open, &mut sections);
                    open = Some(OpenSection::Table(row.to_string()));
                }
            },
            LineClass::Text(text) => match &mut open {
                Some(OpenSection::Paragraph(buf)) => {
                    buf.push('\n');
                    buf.push_str(text);
                }
                _ => {
                    flush(&mut open, &mut sections);
                    open = Some(OpenSection::Paragraph(text.to_string()));
                }
            },
        }
    }

    flush(&mut open, &mut sections);
    sections
}

fn flush(open: &mut Option<OpenSection>, sections: &mut Vec<Section>) {
    match open.take() {
        None => {}
        Some(OpenSection::Paragraph(content)) => sections.push(Section::paragraph(content)),
        Some(OpenSection::List(items)) => {
            if !items.is_empty() {
                sections.push(Section::list(items));
            }
        }
        Some(OpenSection::Table(content)) => sections.push(Section::table(content)),
        Some(OpenSection::Code(content)) => sections.push(Section::code(content)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::models::SectionKind;

    #[test]
    fn test_empty_and_whitespace_input_yield_no_sections() {
        assert!(segment("").is_empty());
        assert!(segment("   \n\n  \t\n").is_empty());
    }

    #[test]
    fn test_single_line_is_a_paragraph() {
        let sections = segment("just some text");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].kind, SectionKind::Paragraph);
        assert_eq!(sections[0].content, "just some text");
    }

    #[test]
    fn test_heading_level_matches_hash_run() {
        let sections = segment("## Experience");
        assert_eq!(sections[0].kind, SectionKind::Header);
        assert_eq!(sections[0].level, Some(2));
        assert_eq!(sections[0].content, "Experience");
    }

    #[test]
    fn test_heading_followed_by_text_stays_standalone() {
        // A heading immediately followed by body text produces a header
        // section plus a separate paragraph.
        let sections = segment("# Summary\nSeasoned backend engineer.");
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].kind, SectionKind::Header);
        assert_eq!(sections[0].content, "Summary");
        assert_eq!(sections[1].kind, SectionKind::Paragraph);
        assert_eq!(sections[1].content, "Seasoned backend engineer.");
    }

    #[test]
    fn test_heading_then_blank_then_list() {
        let sections = segment("# Name\n\n- Skill A\n- Skill B");
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].kind, SectionKind::Header);
        assert_eq!(sections[0].level, Some(1));
        assert_eq!(sections[0].content, "Name");
        assert_eq!(sections[1].kind, SectionKind::List);
        assert_eq!(sections[1].items, vec!["Skill A", "Skill B"]);
    }

    #[test]
    fn test_blank_line_separates_paragraphs() {
        let sections = segment("first paragraph\n\nsecond paragraph");
        assert_eq!(sections.len(), 2, "a blank line must close the open paragraph");
        assert_eq!(sections[0].content, "first paragraph");
        assert_eq!(sections[1].content, "second paragraph");
    }

    #[test]
    fn test_adjacent_lines_join_into_one_paragraph() {
        let sections = segment("line one\nline two");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].content, "line one\nline two");
    }

    #[test]
    fn test_list_markers_dash_star_ordered() {
        let sections = segment("- dash\n* star\n1. ordered\n12. double digit");
        assert_eq!(sections.len(), 1);
        assert_eq!(
            sections[0].items,
            vec!["dash", "star", "ordered", "double digit"]
        );
    }

    #[test]
    fn test_list_interrupts_paragraph() {
        let sections = segment("intro text\n- item one\n- item two\nclosing text");
        assert_eq!(sections.len(), 3);
        assert_eq!(sections[0].kind, SectionKind::Paragraph);
        assert_eq!(sections[1].kind, SectionKind::List);
        assert_eq!(sections[1].items.len(), 2);
        assert_eq!(sections[2].kind, SectionKind::Paragraph);
    }

    #[test]
    fn test_table_rows_group_into_one_section() {
        let sections = segment("| a | b |\n| 1 | 2 |");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].kind, SectionKind::Table);
        assert_eq!(sections[0].content, "| a | b |\n| 1 | 2 |");
    }

    #[test]
    fn test_code_fence_captures_raw_lines() {
        let sections = segment("```\nfn main() {}\n\n# not a heading\n```\nafter");
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].kind, SectionKind::Code);
        assert_eq!(sections[0].content, "fn main() {}\n\n# not a heading");
        assert_eq!(sections[1].kind, SectionKind::Paragraph);
        assert_eq!(sections[1].content, "after");
    }

    #[test]
    fn test_unterminated_fence_flushes_at_end() {
        let sections = segment("```\nlet x = 1;");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].kind, SectionKind::Code);
        assert_eq!(sections[0].content, "let x = 1;");
    }

    #[test]
    fn test_marker_text_is_trimmed() {
        let sections = segment("-   padded item   ");
        assert_eq!(sections[0].items, vec!["padded item"]);
    }

    #[test]
    fn test_digits_without_period_are_text() {
        let sections = segment("2024 to present");
        assert_eq!(sections[0].kind, SectionKind::Paragraph);
        assert_eq!(sections[0].content, "2024 to present");
    }
}
