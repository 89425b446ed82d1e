use serde_json::Value;
use tracing::debug;

use crate::error::PayloadError;
use crate::payload::{type_name, LINKS_PATH};

/// Where a thumbnail URL may live in a link entry, in lookup order.
/// The first path whose key exists decides, even if its value is empty.
const THUMBNAIL_PATHS: &[&[&str]] = &[&["thumbnail"], &["modifiers", "thumbnailImage"]];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRecord {
    /// Zero-based position assigned by the source page.
    pub position: u64,
    pub title: String,
    pub url: String,
    pub thumbnail_url: Option<String>,
}

impl LinkRecord {
    /// One-based ordering shown on the site.
    pub fn priority(&self) -> u64 {
        self.position + 1
    }
}

/// Turn raw payload entries into link records, keeping source order.
///
/// Entries without a `url` key are decorations (headers, dividers) and are
/// skipped quietly. Every entry that has a `url` must be a readable link;
/// one that isn't fails the whole batch with the path of the bad field.
pub fn normalize(entries: &[Value]) -> Result<Vec<LinkRecord>, PayloadError> {
    let mut records = Vec::new();
    for (i, entry) in entries.iter().enumerate() {
        if entry.get("url").is_none() {
            debug!("Skipping entry {} without url", i);
            continue;
        }
        records.push(parse_entry(i, entry)?);
    }
    Ok(records)
}

fn parse_entry(index: usize, entry: &Value) -> Result<LinkRecord, PayloadError> {
    let url = string_field(index, entry, "url")?;
    let title = string_field(index, entry, "title")?;
    let position = field(index, entry, "position")?;
    let position = position
        .as_u64()
        .ok_or_else(|| PayloadError::UnexpectedShape {
            path: field_path(index, "position"),
            expected: "a non-negative integer",
            found: type_name(position),
        })?;

    Ok(LinkRecord {
        position,
        title: title.to_string(),
        url: url.to_string(),
        thumbnail_url: thumbnail_url(entry),
    })
}

fn field<'a>(index: usize, entry: &'a Value, key: &str) -> Result<&'a Value, PayloadError> {
    entry.get(key).ok_or_else(|| PayloadError::MissingSegment {
        path: field_path(index, key),
    })
}

fn string_field<'a>(index: usize, entry: &'a Value, key: &str) -> Result<&'a str, PayloadError> {
    let value = field(index, entry, key)?;
    value.as_str().ok_or_else(|| PayloadError::UnexpectedShape {
        path: field_path(index, key),
        expected: "a string",
        found: type_name(value),
    })
}

fn field_path(index: usize, key: &str) -> String {
    format!("{}[{}].{}", LINKS_PATH.join("."), index, key)
}

/// Resolve the thumbnail URL using the first matching entry in `THUMBNAIL_PATHS`.
pub fn thumbnail_url(entry: &Value) -> Option<String> {
    let found = THUMBNAIL_PATHS
        .iter()
        .find_map(|path| lookup(entry, path))?;

    found
        .as_str()
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn lookup<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(value, |node, key| node.get(*key))
}

// ── Tests ──
