//! HTML synthesis from parsed content: a full document with the theme's
//! stylesheet injected inline, a metadata-derived header block, and each
//! section rendered by kind. One element per line; the structural
//! converter relies on that.

use crate::content::models::{ParsedContent, ResumeMetadata, Section, SectionKind};

/// Metadata keys folded into the contact line, in display order.
pub const CONTACT_KEYS: &[&str] = &["email", "phone", "location", "website", "linkedin", "github"];

/// Renders a complete HTML document for the parsed resume.
pub fn render_document(parsed: &ParsedContent, css: &str) -> String {
    let mut html = String::with_capacity(css.len() + 1024);
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<style>\n");
    html.push_str(css);
    html.push_str("\n</style>\n</head>\n<body>\n");
    render_header(&mut html, &parsed.metadata);
    html.push_str("<div class=\"content\">\n");
    for section in &parsed.sections {
        render_section(&mut html, section);
    }
    html.push_str("</div>\n</body>\n</html>\n");
    html
}

/// The name/contact block. Omitted entirely when the metadata carries none
/// of the recognized keys.
fn render_header(html: &mut String, metadata: &ResumeMetadata) {
    let name = metadata.get("name").filter(|v| !v.is_empty());
    let title = metadata.get("title").filter(|v| !v.is_empty());
    let contact = contact_line(metadata);
    if name.is_none() && title.is_none() && contact.is_none() {
        return;
    }
    html.push_str("<div class=\"header\">\n");
    if let Some(name) = name {
        html.push_str("<h1>");
        html.push_str(&escape(name));
        html.push_str("</h1>\n");
    }
    if let Some(title) = title {
        html.push_str("<p class=\"title\">");
        html.push_str(&escape(title));
        html.push_str("</p>\n");
    }
    if let Some(contact) = contact {
        html.push_str("<p class=\"contact\">");
        html.push_str(&escape(&contact));
        html.push_str("</p>\n");
    }
    html.push_str("</div>\n");
}

/// Joins the recognized contact fields with `" | "`.
pub fn contact_line(metadata: &ResumeMetadata) -> Option<String> {
    let parts: Vec<&str> = CONTACT_KEYS
        .iter()
        .filter_map(|key| metadata.get(key))
        .filter(|v| !v.is_empty())
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" | "))
    }
}

fn render_section(html: &mut String, section: &Section) {
    match section.kind {
        SectionKind::Header => {
            let level = section.level.unwrap_or(2).clamp(1, 6);
            html.push_str(&format!(
                "<h{level}>{}</h{level}>\n",
                escape(&section.content)
            ));
        }
        SectionKind::Paragraph => {
            let joined = section
                .content
                .lines()
                .map(escape)
                .collect::<Vec<_>>()
                .join("<br>");
            html.push_str("<p>");
            html.push_str(&joined);
            html.push_str("</p>\n");
        }
        SectionKind::List => {
            html.push_str("<ul>\n");
            for item in &section.items {
                html.push_str("<li>");
                html.push_str(&escape(item));
                html.push_str("</li>\n");
            }
            html.push_str("</ul>\n");
        }
        SectionKind::Table => {
            html.push_str("<table>\n");
            for row in section.content.lines() {
                html.push_str("<tr>");
                for cell in row.trim_matches('|').split('|') {
                    html.push_str("<td>");
                    html.push_str(&escape(cell.trim()));
                    html.push_str("</td>");
                }
                html.push_str("</tr>\n");
            }
            html.push_str("</table>\n");
        }
        SectionKind::Code => {
            html.push_str("<pre><code>");
            html.push_str(&escape(&section.content));
            html.push_str("</code></pre>\n");
        }
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;

    #[test]
    fn test_document_injects_stylesheet() {
        let parsed = content::parse("hello");
        let html = render_document(&parsed, "body { margin: 0; }");
        assert!(html.contains("<style>\nbody { margin: 0; }\n</style>"));
        assert!(html.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn test_header_block_from_metadata() {
        let parsed = content::parse(
            "---\nname: Ada Lovelace\ntitle: Engineer\nemail: ada@example.com\nphone: 555-0100\n---\nbody",
        );
        let html = render_document(&parsed, "");
        assert!(html.contains("<div class=\"header\">"));
        assert!(html.contains("<h1>Ada Lovelace</h1>"));
        assert!(html.contains("<p class=\"title\">Engineer</p>"));
        assert!(html.contains("<p class=\"contact\">ada@example.com | 555-0100</p>"));
    }

    #[test]
    fn test_no_metadata_means_no_header_block() {
        let parsed = content::parse("just body text");
        let html = render_document(&parsed, "");
        assert!(!html.contains("class=\"header\""));
        assert!(html.contains("<p>just body text</p>"));
    }

    #[test]
    fn test_sections_render_by_kind() {
        let parsed = content::parse("## Skills\n\n- Rust\n- SQL\n\nClosing note");
        let html = render_document(&parsed, "");
        assert!(html.contains("<h2>Skills</h2>"));
        assert!(html.contains("<li>Rust</li>"));
        assert!(html.contains("<li>SQL</li>"));
        assert!(html.contains("<p>Closing note</p>"));
    }

    #[test]
    fn test_heading_level_is_clamped_for_markup() {
        let parsed = content::parse("######### deep");
        let html = render_document(&parsed, "");
        assert!(html.contains("<h6>deep</h6>"));
    }

    #[test]
    fn test_paragraph_lines_join_with_br() {
        let parsed = content::parse("line one\nline two");
        let html = render_document(&parsed, "");
        assert!(html.contains("<p>line one<br>line two</p>"));
    }

    #[test]
    fn test_text_content_is_escaped() {
        let parsed = content::parse("a < b & c > d");
        let html = render_document(&parsed, "");
        assert!(html.contains("<p>a &lt; b &amp; c &gt; d</p>"));
    }

    #[test]
    fn test_table_rows_render_cells() {
        let parsed = content::parse("| Lang | Years |\n| Rust | 5 |");
        let html = render_document(&parsed, "");
        assert!(html.contains("<tr><td>Lang</td><td>Years</td></tr>"));
        assert!(html.contains("<tr><td>Rust</td><td>5</td></tr>"));
    }

    #[test]
    fn test_code_section_renders_pre_block() {
        let parsed = content::parse("```\nfn main() {}\n```");
        let html = render_document(&parsed, "");
        assert!(html.contains("<pre><code>fn main() {}</code></pre>"));
    }
}
