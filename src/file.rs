// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::csv::rows_to_string;
use crate::product::Product;

pub use crate::config::options::{ExportFormat, ExportOptions};

/// Column order for exported products. Matches the feed's canonical header,
/// so an export can be fed back in.
pub const PRODUCT_HEADERS: [&str; 7] = ["STT", "CATEGORY", "GENDER", "SIZE", "URL", "STATUS", "NOTES"];

pub fn product_headers() -> Vec<String> {
    PRODUCT_HEADERS.iter().map(|h| s!(*h)).collect()
}

pub fn product_rows<'a, I>(products: I) -> Vec<Vec<String>>
where
    I: IntoIterator<Item = &'a Product>,
{
    products
        .into_iter()
        .map(|p| row![
            p.id().to_string(), p.category(), p.gender(), p.size(),
            p.url(), p.status(), p.notes(),
        ])
        .collect()
}

/// Write `products` according to ExportOptions (path, header policy, delimiter).
/// Returns the final path written to.
pub fn export_products<'a, I>(
    export: &ExportOptions,
    products: I,
) -> Result<PathBuf, Box<dyn std::error::Error>>
where
    I: IntoIterator<Item = &'a Product>,
{
    let path = export.out_path();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let headers = product_headers();
    let header = export.include_headers.then_some(headers.as_slice());
    let rows = product_rows(products);

    fs::write(&path, rows_to_string(header, &rows, export.format.delim()))?; // truncate/overwrite

    logf!("Export: {} row(s) → {}", rows.len(), path.display());
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
