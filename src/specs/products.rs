// src/specs/products.rs

use serde::Deserialize;

use crate::csv::{self, SplitMode};
use crate::product::Product;
use super::columns::{Column, ColumnMap, ColumnMatch, SchemaError};

/// Which `url` values make a row displayable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrlPolicy {
    /// `http://` or `https://` prefix.
    Http,
    /// `Http`, and the link must point at instagram.com.
    #[default]
    Instagram,
}

pub const SOCIAL_DOMAIN: &str = "instagram.com";

impl UrlPolicy {
    pub fn accepts(self, url: &str) -> bool {
        if !has_http_scheme(url) { return false; }
        match self {
            UrlPolicy::Http => true,
            UrlPolicy::Instagram => url.to_ascii_lowercase().contains(SOCIAL_DOMAIN),
        }
    }
}

fn has_http_scheme(url: &str) -> bool {
    let lower = |n: usize| url.get(..n).map(str::to_ascii_lowercase);
    lower(7).as_deref() == Some("http://") || lower(8).as_deref() == Some("https://")
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NormalizeOptions {
    pub column_match: ColumnMatch,
    pub url_policy: UrlPolicy,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// Every field empty.
    Blank,
    TooShort { fields: usize, required: usize },
    InvalidUrl(String),
}

/// A data row that did not make it into the output. `position` is 1-based
/// among data rows (header excluded).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowSkipped {
    pub position: usize,
    pub reason: SkipReason,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Normalized {
    pub products: Vec<Product>,
    pub skipped: Vec<RowSkipped>,
}

/// Turn parsed rows (header first) into products.
///
/// Only a header problem is an error. Bad rows are dropped and listed in
/// `skipped`; accepted rows keep source order.
pub fn normalize(rows: &[Vec<String>], opts: &NormalizeOptions) -> Result<Normalized, SchemaError> {
    let (header, data) = csv::split_header(rows).ok_or(SchemaError::EmptyFeed)?;
    let map = ColumnMap::resolve(header, opts.column_match)?;
    let required = map.min_fields();

    let mut out = Normalized::default();

    for (i, row) in data.iter().enumerate() {
        let position = i + 1;

        let reason = if row.iter().all(|f| f.trim().is_empty()) {
            Some(SkipReason::Blank)
        } else if row.len() < required {
            Some(SkipReason::TooShort { fields: row.len(), required })
        } else {
            None
        };
        if let Some(reason) = reason {
            logd!("Normalize: skip row {position}: {reason:?}");
            out.skipped.push(RowSkipped { position, reason });
            continue;
        }

        let product = build(row, &map, position);
        if !opts.url_policy.accepts(product.url()) {
            let reason = SkipReason::InvalidUrl(s!(product.url()));
            logd!("Normalize: skip row {position}: {reason:?}");
            out.skipped.push(RowSkipped { position, reason });
            continue;
        }
        out.products.push(product);
    }

    logf!(
        "Normalize: {} product(s), {} row(s) skipped (match={:?}, url={:?})",
        out.products.len(), out.skipped.len(), opts.column_match, opts.url_policy
    );
    Ok(out)
}

fn build(row: &[String], map: &ColumnMap, position: usize) -> Product {
    let get = |col: Column| field(row, map, col);

    let id = get(Column::Seq)
        .parse::<i64>()
        .unwrap_or_else(|_| i64::try_from(position).unwrap_or(i64::MAX));

    Product::new(
        id,
        get(Column::Category),
        get(Column::Gender),
        get(Column::Size),
        get(Column::Url),
        get(Column::Status),
        get(Column::Notes),
    )
}

fn field<'a>(row: &'a [String], map: &ColumnMap, col: Column) -> &'a str {
    map.index(col).and_then(|i| row.get(i)).map_or("", |f| f.trim())
}

/// Parser + normalizer in one step.
pub fn parse_products(text: &str, split: SplitMode, opts: &NormalizeOptions) -> Result<Normalized, SchemaError> {
    let rows = csv::parse_rows(text, split);
    normalize(&rows, opts)
}
