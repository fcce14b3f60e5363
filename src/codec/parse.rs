//! Parsing a rendered message back into a list

use super::escape::unescape_item;
use super::layout::*;
use super::CodecError;
use crate::domain::{ListKind, ListState};

/// Parses message text produced by [`render`](super::render)
pub fn parse(text: &str) -> Result<ListState, CodecError> {
    let sections = split_sections(text);

    if sections.len() != SECTION_COUNT {
        return Err(CodecError::malformed(format!(
            "expected {} sections separated by '{}', found {}",
            SECTION_COUNT,
            DIVIDER,
            sections.len()
        )));
    }

    let demo_link = parse_link(&sections[0]);
    let reference_link = parse_link(&sections[1]);
    let pending = parse_items(&sections[3], ListKind::Pending, PENDING_PLACEHOLDER)?;
    let done = parse_items(&sections[5], ListKind::Done, DONE_PLACEHOLDER)?;

    Ok(ListState::from_parts(demo_link, reference_link, pending, done))
}

/// Returns true if the text looks like a rendered list
pub fn looks_like_rendering(text: &str) -> bool {
    text.contains(PENDING_HEADER)
}

/// A section's lines, each paired with its 1-based line number in the text
type Section<'a> = Vec<(usize, &'a str)>;

fn split_sections(text: &str) -> Vec<Section<'_>> {
    let mut sections = vec![Vec::new()];

    for (i, line) in text.lines().enumerate() {
        if line.trim() == DIVIDER {
            sections.push(Vec::new());
        } else if let Some(current) = sections.last_mut() {
            current.push((i + 1, line));
        }
    }

    sections
}

fn parse_link(section: &Section<'_>) -> Option<String> {
    let line = section
        .iter()
        .map(|(_, line)| line.trim())
        .find(|line| !line.is_empty())?;

    let (_, value) = line.split_once(LINK_SEPARATOR)?;
    let value = value.trim();

    if value.is_empty() || value == UNSET_LINK {
        None
    } else {
        Some(value.to_string())
    }
}

fn parse_items(
    section: &Section<'_>,
    list: ListKind,
    placeholder: &str,
) -> Result<Vec<String>, CodecError> {
    let mut items = Vec::new();

    for &(line_num, line) in section {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed == placeholder {
            continue;
        }

        let item = split_item(line.trim_start()).ok_or_else(|| {
            CodecError::malformed(format!(
                "line {} in the {} has no '{}' after its checkbox: '{}'",
                line_num,
                list,
                ITEM_SEPARATOR.trim_end(),
                trimmed
            ))
        })?;

        items.push(item);
    }

    Ok(items)
}

/// Strips the checkbox prefix, unescaping only lines with the escaped separator
fn split_item(line: &str) -> Option<String> {
    let plain = line.find(ITEM_SEPARATOR);
    let escaped = line.find(ESCAPED_ITEM_SEPARATOR);

    match (plain, escaped) {
        (Some(p), Some(e)) if e < p => {
            let item = &line[e + ESCAPED_ITEM_SEPARATOR.len()..];
            Some(unescape_item(item).into_owned())
        }
        (None, Some(e)) => {
            let item = &line[e + ESCAPED_ITEM_SEPARATOR.len()..];
            Some(unescape_item(item).into_owned())
        }
        (Some(p), _) => Some(line[p + ITEM_SEPARATOR.len()..].to_string()),
        (None, None) => None,
    }
}
