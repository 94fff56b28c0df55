//! Lossy recovery of a flat element stream from rendered markup.
//!
//! This is deliberately not a DOM parser: a small tag scanner handles the
//! block-level preprocessing (style/script removal, container scoping) and
//! the per-line pass maps each physical line to at most one element,
//! first match wins. Unmatched lines are either residue (skipped) or bare
//! paragraphs. Conversion never fails.

use crate::content::models::ResumeMetadata;
use crate::docx::models::StructuralElement;
use crate::render::html::contact_line;

/// Substrings that mark a bare line as style/script residue rather than
/// prose. Checked against the tag-stripped, lowercased text.
const RESIDUE_MARKERS: &[&str] = &[
    "{",
    "}",
    "function",
    "var ",
    "let ",
    "const ",
    "font-family",
    "font-size",
    "color:",
    "margin:",
    "padding:",
    "background",
    "javascript:",
    "document.",
    "window.",
];

/// Converts rendered markup into the flat element stream for the document
/// builder. Leading elements are synthesized from metadata since the
/// rendered header block is stripped during preprocessing.
pub fn to_structural_elements(
    markup: &str,
    metadata: &ResumeMetadata,
) -> Vec<StructuralElement> {
    let mut elements = metadata_elements(metadata);
    let body = preprocess(markup);

    for line in body.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let lower = trimmed.to_ascii_lowercase();
        if lower.contains("<h1") {
            elements.push(StructuralElement::heading1(strip_tags(trimmed)));
        } else if lower.contains("<h2") || lower.contains("<h3") {
            // No third heading tier in the output format; h3 collapses
            // into the h2 style.
            elements.push(StructuralElement::heading2(strip_tags(trimmed)));
        } else if lower.contains("<li>") || lower.contains("<li ") {
            elements.push(StructuralElement::list_item(strip_tags(trimmed)));
        } else if lower.contains("<p>") || lower.contains("<p ") {
            let text = strip_tags(trimmed);
            if !text.is_empty() {
                elements.push(StructuralElement::paragraph(text));
            }
        } else {
            // Wrapper-only lines strip to nothing and are dropped here;
            // whatever survives is either residue or a bare paragraph.
            let text = strip_tags(trimmed);
            if text.is_empty() || looks_like_residue(&text) {
                continue;
            }
            elements.push(StructuralElement::paragraph(text));
        }
    }
    elements
}

/// Name, title, and contact line recovered from metadata.
fn metadata_elements(metadata: &ResumeMetadata) -> Vec<StructuralElement> {
    let mut out = Vec::new();
    if let Some(name) = metadata.get("name").filter(|v| !v.is_empty()) {
        out.push(StructuralElement::heading1(name));
    }
    if let Some(title) = metadata.get("title").filter(|v| !v.is_empty()) {
        out.push(StructuralElement::paragraph(title));
    }
    if let Some(contact) = contact_line(metadata) {
        out.push(StructuralElement::paragraph(contact));
    }
    out
}

/// Strips style/script/header blocks and scopes to the content container
/// when one exists.
fn preprocess(markup: &str) -> String {
    let stripped = strip_tag_blocks(markup, "style");
    let stripped = strip_tag_blocks(&stripped, "script");
    let scoped = match container_inner(&stripped, "content") {
        Some(inner) => inner.to_string(),
        None => stripped,
    };
    let scoped = remove_container(&scoped, "header");
    strip_tag_blocks(&scoped, "header")
}

fn looks_like_residue(text: &str) -> bool {
    let lower = text.to_ascii_lowercase();
    RESIDUE_MARKERS.iter().any(|marker| lower.contains(marker))
}

/// Removes every `<tag ...> ... </tag>` block, case-insensitive. An
/// unterminated block swallows the rest of the input.
fn strip_tag_blocks(html: &str, tag: &str) -> String {
    let lower = html.to_ascii_lowercase();
    let open = format!("<{tag}");
    let close = format!("</{tag}>");
    let mut out = String::with_capacity(html.len());
    let mut pos = 0;
    while let Some(rel) = lower[pos..].find(&open) {
        let start = pos + rel;
        out.push_str(&html[pos..start]);
        match lower[start..].find(&close) {
            Some(rel_end) => pos = start + rel_end + close.len(),
            None => return out,
        }
    }
    out.push_str(&html[pos..]);
    out
}

/// Removes all markup tags from a line and trims the remainder. Entities
/// are left as-is.
pub fn strip_tags(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut in_tag = false;
    for c in line.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out.trim().to_string()
}

/// One scanned tag: its name, whether it closes, and its byte span.
#[derive(Debug)]
struct Tag<'a> {
    name: &'a str,
    closing: bool,
    start: usize,
    end: usize,
    raw: &'a str,
}

struct TagScanner<'a> {
    html: &'a str,
    pos: usize,
}

impl<'a> TagScanner<'a> {
    fn new(html: &'a str) -> Self {
        TagScanner { html, pos: 0 }
    }
}

impl<'a> Iterator for TagScanner<'a> {
    type Item = Tag<'a>;

    fn next(&mut self) -> Option<Tag<'a>> {
        let rel = self.html[self.pos..].find('<')?;
        let start = self.pos + rel;
        let rel_end = self.html[start..].find('>')?;
        let end = start + rel_end + 1;
        self.pos = end;

        let inner = &self.html[start + 1..end - 1];
        let closing = inner.starts_with('/');
        let name_src = inner.trim_start_matches('/').trim_start();
        let name_len: usize = name_src
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric())
            .map(char::len_utf8)
            .sum();
        Some(Tag {
            name: &name_src[..name_len],
            closing,
            start,
            end,
            raw: &self.html[start..end],
        })
    }
}

/// Byte spans of the first element whose opening tag carries
/// `class="<class>"`: (element start, inner start, inner end, element end).
fn find_container(html: &str, class: &str) -> Option<(usize, usize, usize, usize)> {
    let marker = format!("class=\"{class}\"");
    let mut scanner = TagScanner::new(html);
    let open = scanner.find(|tag| !tag.closing && tag.raw.contains(&marker))?;

    let mut depth = 1;
    for tag in scanner {
        if !tag.name.eq_ignore_ascii_case(open.name) {
            continue;
        }
        if tag.closing {
            depth -= 1;
            if depth == 0 {
                return Some((open.start, open.end, tag.start, tag.end));
            }
        } else {
            depth += 1;
        }
    }
    // Unterminated container: treat the rest of the input as its body.
    Some((open.start, open.end, html.len(), html.len()))
}

/// The inner markup of the first element with `class="<class>"`.
fn container_inner<'a>(html: &'a str, class: &str) -> Option<&'a str> {
    let (_, inner_start, inner_end, _) = find_container(html, class)?;
    Some(&html[inner_start..inner_end])
}

/// Removes the first element with `class="<class>"` wholesale.
fn remove_container(html: &str, class: &str) -> String {
    match find_container(html, class) {
        Some((start, _, _, end)) => {
            let mut out = String::with_capacity(html.len());
            out.push_str(&html[..start]);
            out.push_str(&html[end..]);
            out
        }
        None => html.to_string(),
    }
}
