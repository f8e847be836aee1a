// src/config/consts.rs

// Feed
pub const FEED_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vR0NTNc6hIENjmwHxmUX6kbtyFiZqf3g62WdzaYNclAep7h3sCZGsNyfejkn5MHsOLKuVyucYkuhtmd/pub?output=csv";
pub const USER_AGENT: &str = "shop_feed/0.3";
pub const FETCH_TIMEOUT_SECS: u64 = 15;

// Embeds
pub const EMBED_TIMEOUT_SECS: u64 = 10;

// Local files
pub const LOG_FILE: &str = ".store/debug.log";
pub const LOG_ENV: &str = "SHOP_FEED_LOG";
pub const CONFIG_FILE: &str = "shop_feed.toml";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "products";
