mod assets;
mod config;
mod descriptor;
mod error;
mod fetch;
mod links;
mod payload;
mod pipeline;
mod slug;

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;

use crate::config::{Overrides, Settings};

/// Import the links of a public link profile page as site content.
///
/// Writes one `.md` descriptor per link and downloads link thumbnails.
/// Output directories can also be set with `LINKY_LINK_ROOT`,
/// `LINKY_IMAGE_ROOT`, `LINKY_IMAGE_WEB_ROOT` and `LINKY_TIMEOUT_SECS`.
#[derive(Parser)]
#[command(name = "linky_scraper", version, about)]
struct Cli {
    /// Profile page URL
    url: String,

    /// Directory for link descriptors [default: _links]
    #[arg(long)]
    link_root: Option<PathBuf>,

    /// Directory for downloaded thumbnails [default: images]
    #[arg(long)]
    image_root: Option<PathBuf>,

    /// Web path the site serves thumbnails under [default: /images]
    #[arg(long)]
    image_web_root: Option<String>,

    /// Per-request HTTP timeout in seconds [default: 30]
    #[arg(long)]
    timeout_secs: Option<u64>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let settings = Settings::load(Overrides {
        link_root: cli.link_root,
        image_root: cli.image_root,
        image_web_root: cli.image_web_root,
        timeout_secs: cli.timeout_secs,
    })?;

    let summary = pipeline::run(&settings, &cli.url).await?;
    println!(
        "Captured {} links ({} thumbnails).",
        summary.links, summary.images
    );

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("Done in {}", format_duration(elapsed));
    }
    Ok(())
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

// ── Tests ──
