use anyhow::{Context, Result};
use tracing::info;

use crate::assets;
use crate::config::Settings;
use crate::descriptor;
use crate::fetch::Fetcher;
use crate::links::{self, LinkRecord};
use crate::payload;

/// What a completed run produced.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub links: usize,
    pub images: usize,
}

/// Fetch the profile page and write one descriptor (plus thumbnail) per link.
///
/// Links are processed in page order. The first error ends the run; files
/// already written stay on disk.
pub async fn run(settings: &Settings, source_url: &str) -> Result<RunSummary> {
    let fetcher = Fetcher::new(settings.timeout(), &settings.user_agent)?;
    let records = collect_links(&fetcher, source_url).await?;

    prepare_output_dirs(settings).await?;

    let mut summary = RunSummary::default();
    for record in &records {
        println!("Collecting {}...", record.title);
        let image = assets::materialize(&fetcher, record.thumbnail_url.as_deref(), settings)
            .await
            .with_context(|| format!("Failed to capture link {:?}", record.title))?;
        let path = descriptor::write(&settings.link_root, record, image.as_ref()).await?;

        summary.links += 1;
        if let Some(image) = &image {
            summary.images += 1;
            info!("Saved {} with thumbnail {}", path.display(), image.file_path.display());
        } else {
            info!("Saved {}", path.display());
        }
    }

    info!(
        "Wrote {} links ({} thumbnails) to {}",
        summary.links,
        summary.images,
        settings.link_root.display()
    );
    Ok(summary)
}

/// Page fetch → data block → link records.
pub async fn collect_links(fetcher: &Fetcher, source_url: &str) -> Result<Vec<LinkRecord>> {
    info!("Fetching profile page: {}", source_url);
    let html = fetcher
        .fetch_text(source_url)
        .await
        .context("Failed to fetch profile page")?;

    let root = payload::extract_data_block(&html)
        .with_context(|| format!("Failed to read page data from {}", source_url))?;
    let entries = payload::links_array(&root)
        .with_context(|| format!("Unrecognized page data layout at {}", source_url))?;

    let records = links::normalize(entries)
        .with_context(|| format!("Unrecognized link entry at {}", source_url))?;
    info!("Found {} links ({} payload entries)", records.len(), entries.len());
    Ok(records)
}

async fn prepare_output_dirs(settings: &Settings) -> Result<()> {
    for dir in [&settings.link_root, &settings.image_root] {
        tokio::fs::create_dir_all(dir)
            .await
            .with_context(|| format!("Failed to create {:?}", dir))?;
    }
    Ok(())
}

// ── Tests ──
