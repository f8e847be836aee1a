// src/cli.rs
use std::{env, error::Error, path::PathBuf};

use crate::{
    config::{consts::CONFIG_FILE, options::{self, AppOptions, ExportFormat}},
    csv::SplitMode,
    data::{Catalog, Facet, Filters},
    feed::{self, FeedSource},
    file,
    product::Product,
    progress::Progress,
    specs::{ColumnMatch, UrlPolicy},
};

#[derive(Debug, Default)]
pub struct CliArgs {
    pub help: bool,
    pub config: Option<PathBuf>,
    pub source: Option<FeedSource>,
    pub split: Option<SplitMode>,
    pub column_match: Option<ColumnMatch>,
    pub url_policy: Option<UrlPolicy>,
    pub filters: Filters,
    pub out: Option<PathBuf>,
    pub format: Option<ExportFormat>,
    pub include_headers: bool,
    pub facets: bool,
}

impl CliArgs {
    /// Config-file options with command-line overrides on top.
    pub fn apply(&self, mut opts: AppOptions) -> AppOptions {
        if let Some(s) = &self.source { opts.feed.source = s.clone(); }
        if let Some(v) = self.split { opts.feed.split = v; }
        if let Some(v) = self.column_match { opts.feed.column_match = v; }
        if let Some(v) = self.url_policy { opts.feed.url_policy = v; }
        if let Some(p) = &self.out { opts.export.path = Some(p.clone()); }
        if let Some(f) = self.format { opts.export.format = f; }
        if self.include_headers { opts.export.include_headers = true; }
        opts
    }
}

/// Prints status lines to stderr so stdout stays clean for the table.
struct CliProgress;

impl Progress for CliProgress {
    fn log(&mut self, msg: &str) { eprintln!("{msg}"); }
    fn warn(&mut self, msg: &str) { eprintln!("Warning: {msg}"); }
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let args = parse_args(env::args().skip(1))?;
    if args.help {
        eprintln!(include_str!("cli_help.txt"));
        return Ok(());
    }

    if let Err(e) = crate::log::init() {
        eprintln!("Warning: logging disabled ({e})");
    }

    let cfg_path = args.config.clone().unwrap_or_else(|| PathBuf::from(CONFIG_FILE));
    let opts = args.apply(options::load(&cfg_path)?);

    let outcome = feed::load(&opts.feed, Some(&mut CliProgress));
    if !outcome.skipped.is_empty() {
        eprintln!("Skipped {} row(s)", outcome.skipped.len());
    }

    let mut catalog = Catalog::new(outcome.products, outcome.origin);
    catalog.set_filters(args.filters.clone());

    if args.facets {
        for facet in Facet::ALL {
            println!("{}: {}", facet, catalog.facet_values(facet).join(", "));
        }
        return Ok(());
    }

    if args.out.is_some() {
        let path = file::export_products(&opts.export, catalog.visible())?;
        eprintln!("Wrote {} product(s) to {}", catalog.visible_count(), path.display());
        return Ok(());
    }

    print!("{}", render_table(catalog.visible()));
    eprintln!("{} of {} product(s)", catalog.visible_count(), catalog.total_count());
    Ok(())
}

pub fn parse_args<I>(args: I) -> Result<CliArgs, Box<dyn Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut out = CliArgs::default();
    let mut args = args.into_iter();

    while let Some(a) = args.next() {
        let mut value = |flag: &str| args.next().ok_or_else(|| format!("Missing value for {flag}"));
        match a.as_str() {
            "--url" => out.source = Some(FeedSource::Url(value("--url")?)),
            "--file" => out.source = Some(FeedSource::File(PathBuf::from(value("--file")?))),
            "--config" => out.config = Some(PathBuf::from(value("--config")?)),
            "--match" => {
                let v = value("--match")?;
                out.column_match = Some(match v.to_ascii_lowercase().as_str() {
                    "exact" => ColumnMatch::Exact,
                    "substring" => ColumnMatch::Substring,
                    other => return Err(format!("Unknown match strategy: {other}").into()),
                });
            }
            "--split" => {
                let v = value("--split")?;
                out.split = Some(match v.to_ascii_lowercase().as_str() {
                    "simple" => SplitMode::Simple,
                    "quoted" => SplitMode::Quoted,
                    other => return Err(format!("Unknown split mode: {other}").into()),
                });
            }
            "--url-policy" => {
                let v = value("--url-policy")?;
                out.url_policy = Some(match v.to_ascii_lowercase().as_str() {
                    "http" => UrlPolicy::Http,
                    "instagram" => UrlPolicy::Instagram,
                    other => return Err(format!("Unknown url policy: {other}").into()),
                });
            }
            "--gender" => out.filters.select(Facet::Gender, value("--gender")?),
            "--category" => out.filters.select(Facet::Category, value("--category")?),
            "--size" => out.filters.select(Facet::Size, value("--size")?),
            "--status" => out.filters.select(Facet::Status, value("--status")?),
            "-o" | "--out" => out.out = Some(PathBuf::from(value("--out")?)),
            "--format" => {
                let v = value("--format")?;
                out.format = Some(match v.to_ascii_lowercase().as_str() {
                    "csv" => ExportFormat::Csv,
                    "tsv" => ExportFormat::Tsv,
                    other => return Err(format!("Unknown format: {other}").into()),
                });
            }
            "--include-headers" => out.include_headers = true,
            "--facets" => out.facets = true,
            "-h" | "--help" => out.help = true,
            _ => return Err(format!("Unknown arg: {a}").into()),
        }
    }

    Ok(out)
}

const TABLE_HEADERS: [&str; 7] = ["ID", "CATEGORY", "GENDER", "SIZE", "STATUS", "URL", "NOTES"];

/// Plain aligned table; widths count chars, not bytes.
pub fn render_table<'a, I>(products: I) -> String
where
    I: IntoIterator<Item = &'a Product>,
{
    let rows: Vec<Vec<String>> = products
        .into_iter()
        .map(|p| row![
            p.id().to_string(), p.category(), p.gender(), p.size(),
            p.status(), p.url(), p.notes(),
        ])
        .collect();

    let mut widths: Vec<usize> = TABLE_HEADERS.iter().map(|h| h.chars().count()).collect();
    for r in &rows {
        for (w, cell) in widths.iter_mut().zip(r) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = s!();
    let header: Vec<String> = TABLE_HEADERS.iter().map(|h| s!(*h)).collect();
    for r in std::iter::once(&header).chain(rows.iter()) {
        let line: Vec<String> = r
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| format!("{cell}{}", " ".repeat(w - cell.chars().count())))
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    }
    out
}
