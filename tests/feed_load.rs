// tests/feed_load.rs
//
// Full load pipeline against local files; no network.
//
use std::fs;
use std::path::PathBuf;

use shop_feed::config::options::FeedOptions;
use shop_feed::data::Origin;
use shop_feed::feed::{self, FeedSource};
use shop_feed::product::sample_products;
use shop_feed::progress::{NullProgress, Progress};

fn tmp_file(name: &str, contents: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("shop_feed_{}", name));
    fs::write(&p, contents).unwrap();
    p
}

fn file_opts(path: PathBuf) -> FeedOptions {
    FeedOptions { source: FeedSource::File(path), ..FeedOptions::default() }
}

#[derive(Default)]
struct Recorder {
    logs: Vec<String>,
    warnings: Vec<String>,
    finished: bool,
}

impl Progress for Recorder {
    fn log(&mut self, msg: &str) { self.logs.push(msg.to_string()); }
    fn warn(&mut self, msg: &str) { self.warnings.push(msg.to_string()); }
    fn finish(&mut self) { self.finished = true; }
}

#[test]
fn good_feed_loads_live() {
    let path = tmp_file(
        "good.csv",
        "STT,CATEGORY,GENDER,SIZE,URL,STATUS,NOTES\r\n\
         1,QUẦN,MALE,XS,https://www.instagram.com/p/ABC123/,SOLD,hàng tặng\r\n\
         2,ÁO,FEMALE,S,https://www.instagram.com/p/DEF456/,AVAILABLE,\"độ mới 98%, như mới\"\r\n\
         3,ÁO,FEMALE,S,,AVAILABLE,\r\n",
    );
    let mut rec = Recorder::default();
    let out = feed::load(&file_opts(path), Some(&mut rec));

    assert_eq!(out.origin, Origin::Live);
    assert_eq!(out.products.len(), 2);
    assert_eq!(out.skipped.len(), 1);
    assert!(rec.warnings.is_empty());
    assert!(rec.finished);
    assert!(rec.logs.iter().any(|l| l.contains("2 product")));
}

#[test]
fn missing_file_falls_back_with_warning() {
    let mut p = std::env::temp_dir();
    p.push("shop_feed_does_not_exist.csv");
    let _ = fs::remove_file(&p);

    let mut rec = Recorder::default();
    let out = feed::load(&file_opts(p), Some(&mut rec));

    assert!(out.origin.is_fallback());
    assert_eq!(out.products, sample_products());
    assert_eq!(rec.warnings.len(), 1);
    assert_eq!(rec.logs.last().map(String::as_str), Some("Showing sample products"));
    assert!(rec.finished);
}

#[test]
fn schema_failure_falls_back() {
    let path = tmp_file("no_url.csv", "STT,CATEGORY,GENDER,SIZE,STATUS\n1,ÁO,MALE,M,SOLD\n");
    let out = feed::load(&file_opts(path), None);

    match &out.origin {
        Origin::Fallback { reason } => assert!(reason.contains("URL")),
        other => panic!("expected fallback, got {:?}", other),
    }
    assert_eq!(out.products.len(), 6);
}

#[test]
fn valid_feed_without_usable_rows_stays_live_and_empty() {
    let path = tmp_file(
        "all_bad.csv",
        "STT,CATEGORY,GENDER,SIZE,URL,STATUS,NOTES\n1,ÁO,MALE,M,not-a-link,SOLD,\n",
    );
    let out = feed::load(&file_opts(path), None);
    assert_eq!(out.origin, Origin::Live);
    assert!(out.products.is_empty());
    assert_eq!(out.skipped.len(), 1);
}

#[test]
fn fetch_text_reads_files_verbatim() {
    let path = tmp_file("verbatim.csv", "a,b\n");
    let text = feed::fetch_text(&FeedSource::File(path), std::time::Duration::from_secs(1)).unwrap();
    assert_eq!(text, "a,b\n");
}

#[test]
fn quiet_sinks_get_the_same_outcome() {
    let path = tmp_file("quiet.csv", "STT,CATEGORY,GENDER,SIZE,URL,STATUS\n1,ÁO,FEMALE,S,https://instagram.com/p/A/,AVAILABLE\n");
    let opts = file_opts(path);

    let with_null = feed::load(&opts, Some(&mut NullProgress));
    let with_none = feed::load(&opts, None);

    assert_eq!(with_null.products, with_none.products);
    assert_eq!(with_null.products.len(), 1);
    assert_eq!(with_null.products[0].notes(), "");
}
