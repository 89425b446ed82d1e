//! Everything that knows the shape of the profile page's embedded page model.
//!
//! The service ships its whole page model as JSON inside the HTML. That
//! contract is undocumented and changes without notice, so every assumption
//! about it (the script selector, the key path) lives here and fails loudly
//! with the offending path.

use scraper::{Html, Selector};
use serde_json::Value;

use crate::error::PayloadError;

const DATA_BLOCK_SELECTOR: &str = r#"script[type="application/json"]"#;

/// Key path from the payload root to the array of link entries.
pub const LINKS_PATH: [&str; 3] = ["props", "pageProps", "links"];

/// Parse the first JSON data block embedded in `html`.
pub fn extract_data_block(html: &str) -> Result<Value, PayloadError> {
    let document = Html::parse_document(html);
    let sel = Selector::parse(DATA_BLOCK_SELECTOR).expect("static selector is valid");

    let script = document
        .select(&sel)
        .next()
        .ok_or(PayloadError::MissingDataBlock)?;
    let text: String = script.text().collect();

    serde_json::from_str(&text).map_err(PayloadError::InvalidJson)
}

/// Walk `props.pageProps.links` and return the entries.
pub fn links_array(root: &Value) -> Result<&[Value], PayloadError> {
    let mut node = root;
    for (depth, key) in LINKS_PATH.iter().enumerate() {
        let here = LINKS_PATH[..depth].join(".");
        let map = node.as_object().ok_or_else(|| PayloadError::UnexpectedShape {
            path: if here.is_empty() { "<root>".to_string() } else { here },
            expected: "an object",
            found: type_name(node),
        })?;
        node = map.get(*key).ok_or_else(|| PayloadError::MissingSegment {
            path: LINKS_PATH[..=depth].join("."),
        })?;
    }

    node.as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| PayloadError::UnexpectedShape {
            path: LINKS_PATH.join("."),
            expected: "an array",
            found: type_name(node),
        })
}

pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ── Tests ──
