use shipyard_core::{ChangeCategory, PendingChange};

use crate::error::FragmentError;

/// Section assigned to bullets that appear before any `**Section**` header.
pub const DEFAULT_CATEGORY: ChangeCategory = ChangeCategory::Features;

const MAX_INPUT_SIZE: usize = 1024 * 1024;

const HEADER_MARKER: &str = "**";
const BULLET_PREFIXES: [&str; 2] = ["- ", "* "];

fn parse_header(trimmed: &str) -> Option<&str> {
    if trimmed.len() < HEADER_MARKER.len() * 2 {
        return None;
    }
    trimmed
        .strip_prefix(HEADER_MARKER)
        .and_then(|rest| rest.strip_suffix(HEADER_MARKER))
        .map(str::trim)
}

fn parse_bullet(line: &str) -> Option<&str> {
    BULLET_PREFIXES
        .iter()
        .find_map(|prefix| line.strip_prefix(prefix))
        .map(str::trim)
        .filter(|text| !text.is_empty())
}

/// Parses one changelog fragment into pending changes, in document order.
///
/// Section labels are carried through verbatim; validating them against the
/// known categories happens during classification.
///
/// # Errors
///
/// Returns a [`FragmentError`] for oversized input, empty headers, stray
/// text and indented lines that do not continue a bullet.
pub fn parse_fragment(content: &str) -> Result<Vec<PendingChange>, FragmentError> {
    if content.len() > MAX_INPUT_SIZE {
        return Err(FragmentError::InputTooLarge {
            max_bytes: MAX_INPUT_SIZE,
        });
    }

    let mut changes: Vec<PendingChange> = Vec::new();
    let mut section = DEFAULT_CATEGORY.label().to_string();
    let mut item_open = false;

    for (index, raw_line) in content.lines().enumerate() {
        let line_number = index + 1;
        let line = raw_line.trim_end_matches('\r');
        let trimmed = line.trim();

        if trimmed.is_empty() {
            continue;
        }

        if line.starts_with(char::is_whitespace) {
            match changes.last_mut() {
                Some(change) if item_open => {
                    change.description.push('\n');
                    change.description.push_str(trimmed);
                }
                _ => {
                    return Err(FragmentError::OrphanContinuation { line: line_number });
                }
            }
            continue;
        }

        if let Some(label) = parse_header(trimmed) {
            if label.is_empty() {
                return Err(FragmentError::EmptyHeader { line: line_number });
            }
            label.clone_into(&mut section);
            item_open = false;
            continue;
        }

        if let Some(text) = parse_bullet(line) {
            changes.push(PendingChange::new(section.clone(), text));
            item_open = true;
            continue;
        }

        return Err(FragmentError::UnexpectedLine {
            line: line_number,
            content: trimmed.to_string(),
        });
    }

    Ok(changes)
}
