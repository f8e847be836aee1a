// src/core/net.rs

// Blocking HTTPS GET for the published sheet.

use std::time::Duration;

use crate::config::consts::USER_AGENT;

/// GET `url` and return the body as text.
///
/// Redirects are followed (published sheets bounce through googleusercontent).
/// Non-2xx statuses come back as `Err` via `error_for_status`.
pub fn http_get(url: &str, timeout: Duration) -> Result<String, reqwest::Error> {
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()?;

    let resp = client.get(url).send()?.error_for_status()?;
    resp.text()
}
