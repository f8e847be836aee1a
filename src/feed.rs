// src/feed.rs
//
// One feed load: fetch text → parse → normalize. Any failure before products
// exist (transport, unreadable file, bad header) swaps in the sample set so
// the front-end always has something to show.

use std::error::Error;
use std::fmt;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::{
    config::options::FeedOptions,
    core::net,
    data::Origin,
    product::{Product, sample_products},
    progress::Progress,
    specs::{self, RowSkipped},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FeedSource {
    Url(String),
    File(PathBuf),
}

impl fmt::Display for FeedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedSource::Url(u) => f.write_str(u),
            FeedSource::File(p) => write!(f, "{}", p.display()),
        }
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[source] reqwest::Error),
    #[error("server answered HTTP {0}")]
    Status(u16),
    #[error("cannot read feed file: {0}")]
    Io(#[from] io::Error),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        match e.status() {
            Some(code) => FetchError::Status(code.as_u16()),
            None => FetchError::Http(e),
        }
    }
}

/// Raw feed text from `source`. `timeout` only applies to URLs.
pub fn fetch_text(source: &FeedSource, timeout: Duration) -> Result<String, FetchError> {
    match source {
        FeedSource::Url(url) => Ok(net::http_get(url, timeout)?),
        FeedSource::File(path) => Ok(fs::read_to_string(path)?),
    }
}

#[derive(Clone, Debug)]
pub struct LoadOutcome {
    pub products: Vec<Product>,
    pub origin: Origin,
    pub skipped: Vec<RowSkipped>,
}

/// Fetch and normalize the feed; never fails.
///
/// On fetch or schema failure the sample products come back with
/// `Origin::Fallback` and a warning goes to `progress`. A readable feed that
/// simply has no valid rows is returned as-is.
pub fn load(opts: &FeedOptions, mut progress: Option<&mut dyn Progress>) -> LoadOutcome {
    if let Some(p) = progress.as_deref_mut() {
        p.log("Loading feed…");
    }
    logf!("Feed: Begin source={} split={:?}", opts.source, opts.split);

    let result = fetch_text(&opts.source, opts.timeout())
        .map_err(|e| Box::new(e) as Box<dyn Error>)
        .and_then(|text| {
            logd!("Feed: fetched {} byte(s)", text.len());
            specs::parse_products(&text, opts.split, &opts.normalize_options())
                .map_err(|e| Box::new(e) as Box<dyn Error>)
        });

    let outcome = match result {
        Ok(n) => {
            logf!("Feed: OK products={} skipped={}", n.products.len(), n.skipped.len());
            if let Some(p) = progress.as_deref_mut() {
                p.log(&format!("Loaded {} product(s)", n.products.len()));
            }
            LoadOutcome { products: n.products, origin: Origin::Live, skipped: n.skipped }
        }
        Err(e) => {
            logw!("Feed: {e}; showing sample data");
            if let Some(p) = progress.as_deref_mut() {
                p.warn(&format!("Could not load the feed ({e}). Showing sample products."));
                p.log("Showing sample products");
            }
            LoadOutcome {
                products: sample_products(),
                origin: Origin::Fallback { reason: e.to_string() },
                skipped: Vec::new(),
            }
        }
    };

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    outcome
}
