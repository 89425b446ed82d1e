use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment};
use serde::Deserialize;

const ENV_PREFIX: &str = "LINKY";
const DEFAULT_USER_AGENT: &str = concat!("linky_scraper/", env!("CARGO_PKG_VERSION"));

/// Where output lands and how HTTP requests behave.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Directory receiving one `.md` descriptor per link.
    pub link_root: PathBuf,
    /// Directory receiving downloaded thumbnails.
    pub image_root: PathBuf,
    /// Prefix under which the site serves `image_root`.
    pub image_web_root: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

/// Values given on the command line; each one beats the environment.
#[derive(Debug, Default)]
pub struct Overrides {
    pub link_root: Option<PathBuf>,
    pub image_root: Option<PathBuf>,
    pub image_web_root: Option<String>,
    pub timeout_secs: Option<u64>,
}

fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("link_root", "_links")?
        .set_default("image_root", "images")?
        .set_default("image_web_root", "/images")?
        .set_default("timeout_secs", 30)?
        .set_default("user_agent", DEFAULT_USER_AGENT)
}

fn build(builder: ConfigBuilder<DefaultState>) -> Result<Settings> {
    builder
        .build()
        .context("Failed to read configuration")?
        .try_deserialize()
        .context("Invalid configuration")
}

impl Settings {
    /// Defaults, then `LINKY_*` environment variables, then CLI overrides.
    pub fn load(overrides: Overrides) -> Result<Self> {
        let builder = defaults()?.add_source(Environment::with_prefix(ENV_PREFIX));
        Ok(build(builder)?.with_overrides(overrides))
    }

    fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(p) = overrides.link_root {
            self.link_root = p;
        }
        if let Some(p) = overrides.image_root {
            self.image_root = p;
        }
        if let Some(w) = overrides.image_web_root {
            self.image_web_root = w;
        }
        if let Some(t) = overrides.timeout_secs {
            self.timeout_secs = t;
        }
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Web path for an image file, joined without doubling slashes.
    pub fn image_web_path(&self, file_name: &str) -> String {
        format!("{}/{}", self.image_web_root.trim_end_matches('/'), file_name)
    }
}

#[cfg(test)]
impl Settings {
    /// Settings rooted in a scratch directory, untouched by the environment.
    pub fn for_dir(dir: &std::path::Path) -> Self {
        Settings {
            link_root: dir.join("_links"),
            image_root: dir.join("images"),
            image_web_root: "/images".into(),
            timeout_secs: 5,
            user_agent: DEFAULT_USER_AGENT.into(),
        }
    }
}

// ── Tests ──
