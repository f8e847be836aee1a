// src/config/options.rs
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use super::consts::*;
use crate::csv::SplitMode;
use crate::feed::FeedSource;
use crate::specs::{ColumnMatch, NormalizeOptions, UrlPolicy};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub feed: FeedOptions,
    pub export: ExportOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedOptions {
    pub source: FeedSource,
    pub split: SplitMode,
    pub column_match: ColumnMatch,
    pub url_policy: UrlPolicy,
    pub timeout_secs: u64,
}

impl Default for FeedOptions {
    fn default() -> Self {
        Self {
            source: FeedSource::Url(s!(FEED_URL)),
            split: SplitMode::Quoted,
            column_match: ColumnMatch::Substring,
            url_policy: UrlPolicy::Instagram,
            timeout_secs: FETCH_TIMEOUT_SECS,
        }
    }
}

impl FeedOptions {
    pub fn normalize_options(&self) -> NormalizeOptions {
        NormalizeOptions { column_match: self.column_match, url_policy: self.url_policy }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    /// Explicit target; `None` → `out/products.<ext>`
    pub path: Option<PathBuf>,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { format: ExportFormat::Csv, path: None, include_headers: false }
    }
}

impl ExportOptions {
    pub fn out_path(&self) -> PathBuf {
        match &self.path {
            Some(p) => p.clone(),
            None => PathBuf::from(DEFAULT_OUT_DIR)
                .join(format!("{}.{}", DEFAULT_FILE, self.format.ext())),
        }
    }
}

/* ---------------- Config file ---------------- */

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("[feed] sets both `url` and `file`; pick one")]
    AmbiguousSource,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileConfig {
    feed: FeedSection,
    export: ExportSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FeedSection {
    url: Option<String>,
    file: Option<PathBuf>,
    split: Option<SplitMode>,
    column_match: Option<ColumnMatch>,
    url_policy: Option<UrlPolicy>,
    timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ExportSection {
    format: Option<ExportFormat>,
    path: Option<PathBuf>,
    include_headers: Option<bool>,
}

/// Defaults, overlaid with `path` if it exists. A missing file is not an error.
pub fn load(path: &Path) -> Result<AppOptions, ConfigError> {
    if !path.exists() {
        logd!("Config: {} not found, using defaults", path.display());
        return Ok(AppOptions::default());
    }
    let text = fs::read_to_string(path)
        .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
    let opts = from_toml(&text)?;
    logf!("Config: loaded {}", path.display());
    Ok(opts)
}

/// Defaults overlaid with TOML text.
pub fn from_toml(text: &str) -> Result<AppOptions, ConfigError> {
    let file: FileConfig = toml::from_str(text)?;
    let mut opts = AppOptions::default();

    let FeedSection { url, file: feed_file, split, column_match, url_policy, timeout_secs } = file.feed;
    match (url, feed_file) {
        (Some(_), Some(_)) => return Err(ConfigError::AmbiguousSource),
        (Some(u), None) => opts.feed.source = FeedSource::Url(u),
        (None, Some(p)) => opts.feed.source = FeedSource::File(p),
        (None, None) => {}
    }
    if let Some(v) = split { opts.feed.split = v; }
    if let Some(v) = column_match { opts.feed.column_match = v; }
    if let Some(v) = url_policy { opts.feed.url_policy = v; }
    if let Some(v) = timeout_secs { opts.feed.timeout_secs = v; }

    let ExportSection { format, path, include_headers } = file.export;
    if let Some(v) = format { opts.export.format = v; }
    if path.is_some() { opts.export.path = path; }
    if let Some(v) = include_headers { opts.export.include_headers = v; }

    Ok(opts)
}
