//! Front-matter extraction: a leading `---` delimited block of
//! `key: value` lines at the very top of the document.

use crate::content::models::ResumeMetadata;

const DELIMITER: &str = "---";

/// Splits `input` into metadata and body.
///
/// The block counts only when the first line is a delimiter AND a closing
/// delimiter follows; otherwise the entire input is body and the metadata
/// is empty. Lines without a colon inside the block are ignored; the split
/// is on the first colon, both sides trimmed.
pub fn split_front_matter(input: &str) -> (ResumeMetadata, &str) {
    let mut lines = input.split_inclusive('\n');
    let Some(first) = lines.next() else {
        return (ResumeMetadata::default(), input);
    };
    if first.trim() != DELIMITER {
        return (ResumeMetadata::default(), input);
    }

    let mut metadata = ResumeMetadata::default();
    let mut offset = first.len();
    for line in lines {
        offset += line.len();
        let trimmed = line.trim();
        if trimmed == DELIMITER {
            return (metadata, &input[offset..]);
        }
        if let Some((key, value)) = trimmed.split_once(':') {
            metadata.push(key.trim(), value.trim());
        }
    }

    // Opening delimiter without a closing one: treat everything as body.
    (ResumeMetadata::default(), input)
}
