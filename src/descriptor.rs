use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::assets::AssetReference;
use crate::links::LinkRecord;
use crate::slug::slugify;

/// File stem for a link's descriptor. Titles with no usable characters fall
/// back to their priority so they don't become a hidden `.md` file.
///
/// The fallback shares the slug namespace: a title like "Link 7" also maps
/// to `link-7`, and whichever is written later silently replaces the other,
/// the same as any two titles that slug alike.
pub fn file_stem(record: &LinkRecord) -> String {
    let slug = slugify(&record.title);
    if slug.is_empty() {
        format!("link-{}", record.priority())
    } else {
        slug
    }
}

/// Front-matter block for one link, followed by an empty body.
pub fn render(record: &LinkRecord, image: Option<&AssetReference>) -> String {
    let mut out = String::new();
    out.push_str("---\n");
    let _ = writeln!(out, "title: {}", record.title);
    let _ = writeln!(out, "link: {}", record.url);
    let _ = writeln!(out, "priority: {}", record.priority());
    if let Some(image) = image {
        let _ = writeln!(out, "image: {}", image.web_path);
    }
    out.push_str("---\n");
    out.push('\n');
    out
}

/// Write `{link_root}/{slug}.md`, replacing any previous file of that name.
pub async fn write(
    link_root: &Path,
    record: &LinkRecord,
    image: Option<&AssetReference>,
) -> Result<PathBuf> {
    let path = link_root.join(format!("{}.md", file_stem(record)));
    tokio::fs::write(&path, render(record, image))
        .await
        .with_context(|| format!("Failed to write {:?}", path))?;
    debug!("Wrote {}", path.display());
    Ok(path)
}

// ── Tests ──
