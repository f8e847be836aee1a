// tests/config_options.rs
//
// Defaults and TOML overlay for AppOptions.
//
use std::path::{Path, PathBuf};

use shop_feed::config::consts::FEED_URL;
use shop_feed::config::options::{self, AppOptions, ConfigError, ExportFormat};
use shop_feed::csv::SplitMode;
use shop_feed::feed::FeedSource;
use shop_feed::specs::{ColumnMatch, UrlPolicy};

#[test]
fn defaults_point_at_published_sheet() {
    let opts = AppOptions::default();
    assert_eq!(opts.feed.source, FeedSource::Url(FEED_URL.to_string()));
    assert_eq!(opts.feed.split, SplitMode::Quoted);
    assert_eq!(opts.feed.column_match, ColumnMatch::Substring);
    assert_eq!(opts.feed.url_policy, UrlPolicy::Instagram);
    assert_eq!(opts.feed.timeout().as_secs(), 15);
    assert!(opts.export.out_path().to_string_lossy().ends_with("products.csv"));
}

#[test]
fn toml_overrides_only_what_it_sets() {
    let opts = options::from_toml(
        r#"
        [feed]
        file = "data/feed.csv"
        column_match = "exact"
        url_policy = "http"

        [export]
        format = "tsv"
        "#,
    )
    .unwrap();

    assert_eq!(opts.feed.source, FeedSource::File(PathBuf::from("data/feed.csv")));
    assert_eq!(opts.feed.column_match, ColumnMatch::Exact);
    assert_eq!(opts.feed.url_policy, UrlPolicy::Http);
    assert_eq!(opts.feed.split, SplitMode::Quoted);
    assert_eq!(opts.export.format, ExportFormat::Tsv);
    assert!(opts.export.out_path().to_string_lossy().ends_with("products.tsv"));
}

#[test]
fn url_and_file_together_is_rejected() {
    let err = options::from_toml("[feed]\nurl = \"https://a/\"\nfile = \"b.csv\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::AmbiguousSource));
}

#[test]
fn unknown_keys_and_bad_enums_are_rejected() {
    assert!(matches!(options::from_toml("[feed]\nspeed = 3\n"), Err(ConfigError::Parse(_))));
    assert!(matches!(options::from_toml("[feed]\nsplit = \"fancy\"\n"), Err(ConfigError::Parse(_))));
}

#[test]
fn missing_config_file_means_defaults() {
    let opts = options::load(Path::new("definitely/not/here/shop_feed.toml")).unwrap();
    assert_eq!(opts, AppOptions::default());
}
