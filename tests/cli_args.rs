// tests/cli_args.rs
use std::path::PathBuf;

use shop_feed::cli::{parse_args, render_table};
use shop_feed::config::options::{AppOptions, ExportFormat};
use shop_feed::data::Facet;
use shop_feed::feed::FeedSource;
use shop_feed::product::sample_products;
use shop_feed::specs::{ColumnMatch, UrlPolicy};

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn flags_override_config() {
    let a = parse_args(args(&[
        "--file", "feed.csv", "--match", "exact", "--url-policy", "HTTP",
        "--status", "AVAILABLE", "--size", "S", "--size", "M",
        "-o", "out/x.tsv", "--format", "tsv",
    ]))
    .unwrap();

    assert!(a.filters.is_selected(Facet::Status, "AVAILABLE"));
    assert_eq!(a.filters.selected(Facet::Size).len(), 2);

    let opts = a.apply(AppOptions::default());
    assert_eq!(opts.feed.source, FeedSource::File(PathBuf::from("feed.csv")));
    assert_eq!(opts.feed.column_match, ColumnMatch::Exact);
    assert_eq!(opts.feed.url_policy, UrlPolicy::Http);
    assert_eq!(opts.export.format, ExportFormat::Tsv);
    assert_eq!(opts.export.out_path(), PathBuf::from("out/x.tsv"));
    assert!(!opts.export.include_headers);
}

#[test]
fn repeated_filter_value_stays_selected() {
    let a = parse_args(args(&["--size", "S", "--size", "S"])).unwrap();
    assert!(a.filters.is_selected(Facet::Size, "S"));
    assert_eq!(a.filters.selected(Facet::Size).len(), 1);
}

#[test]
fn bad_args_are_errors() {
    assert!(parse_args(args(&["--bogus"])).is_err());
    assert!(parse_args(args(&["--split", "weird"])).is_err());
    assert!(parse_args(args(&["--url"])).is_err());
}

#[test]
fn no_args_changes_nothing() {
    let a = parse_args(Vec::new()).unwrap();
    assert!(!a.help);
    assert_eq!(a.apply(AppOptions::default()), AppOptions::default());
}

#[test]
fn table_aligns_on_chars() {
    let products = sample_products();
    let out = render_table(products.iter().take(2));
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("ID  CATEGORY  GENDER"));
    // "QUẦN" and "ÁO" are padded by char count, so GENDER starts in the same column
    let col = |l: &str, needle: &str| l.find(needle).map(|b| l[..b].chars().count());
    assert_eq!(col(lines[1], "MALE"), col(lines[0], "GENDER"));
    assert_eq!(col(lines[2], "FEMALE"), col(lines[0], "GENDER"));
}
