use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::debug;
use url::Url;

use crate::config::Settings;
use crate::error::AssetError;
use crate::fetch::Fetcher;

/// A downloaded thumbnail: where it sits on disk and how the site refers to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetReference {
    pub file_path: PathBuf,
    pub web_path: String,
}

/// Final path segment of a thumbnail URL, without query or fragment.
pub fn image_file_name(image_url: &str) -> Option<String> {
    let name = match Url::parse(image_url) {
        Ok(parsed) => parsed.path_segments()?.last()?.to_string(),
        Err(_) => image_url.rsplit('/').next()?.to_string(),
    };
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

/// Download `thumbnail` (if any) into the image root.
///
/// No validation or resizing; an existing file with the same name is
/// overwritten. A failed download is returned as an error and ends the run.
pub async fn materialize(
    fetcher: &Fetcher,
    thumbnail: Option<&str>,
    settings: &Settings,
) -> Result<Option<AssetReference>> {
    let Some(image_url) = thumbnail else {
        return Ok(None);
    };

    println!("   ...downloading thumbnail");
    let file_name =
        image_file_name(image_url).ok_or_else(|| AssetError::NoFileName(image_url.to_string()))?;

    let bytes = fetcher
        .fetch_bytes(image_url)
        .await
        .with_context(|| format!("Failed to download thumbnail {}", image_url))?;

    let file_path = settings.image_root.join(&file_name);
    tokio::fs::write(&file_path, &bytes)
        .await
        .with_context(|| format!("Failed to write {:?}", file_path))?;
    debug!("Wrote {} bytes to {}", bytes.len(), file_path.display());

    Ok(Some(AssetReference {
        web_path: settings.image_web_path(&file_name),
        file_path,
    }))
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_is_last_segment() {
        assert_eq!(
            image_file_name("https://cdn.example.com/abc.png").as_deref(),
            Some("abc.png")
        );
        assert_eq!(
            image_file_name("https://cdn.example.com/u/123/thumb.jpeg").as_deref(),
            Some("thumb.jpeg")
        );
    }

    #[test]
    fn file_name_ignores_query_and_fragment() {
        assert_eq!(
            image_file_name("https://cdn.example.com/img/abc.png?w=200&h=200#x").as_deref(),
            Some("abc.png")
        );
    }

    #[test]
    fn file_name_from_unparseable_url() {
        assert_eq!(image_file_name("images/local.gif").as_deref(), Some("local.gif"));
    }

    #[test]
    fn no_file_name() {
        assert_eq!(image_file_name("https://cdn.example.com/"), None);
        assert_eq!(image_file_name("https://cdn.example.com"), None);
        assert_eq!(image_file_name("broken/"), None);
    }

    #[tokio::test]
    async fn no_thumbnail_touches_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::for_dir(dir.path());
        let fetcher = Fetcher::new(settings.timeout(), &settings.user_agent).unwrap();
        let asset = materialize(&fetcher, None, &settings).await.unwrap();
        assert_eq!(asset, None);
        assert!(!settings.image_root.exists());
    }
}
