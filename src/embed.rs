// src/embed.rs
//
// Turns a product's post link into something a front-end can display.
// No network here: resolvers only rewrite URLs. The declared timeout is for
// whoever ends up loading the returned reference.

use std::time::Duration;

use crate::config::consts::EMBED_TIMEOUT_SECS;

pub trait EmbedResolver {
    /// Displayable reference for `url`, or `None` if this resolver can't handle it.
    fn resolve(&self, url: &str) -> Option<String>;

    /// How long a consumer should wait on the reference before giving up.
    fn timeout(&self) -> Duration;
}

/// Instagram post → captioned embed page.
#[derive(Clone, Copy, Debug, Default)]
pub struct InstagramEmbed;

impl EmbedResolver for InstagramEmbed {
    fn resolve(&self, url: &str) -> Option<String> {
        post_id(url).map(|id| format!("https://www.instagram.com/p/{id}/embed/captioned/"))
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(EMBED_TIMEOUT_SECS)
    }
}

const INSTAGRAM_HOST: &str = "instagram.com";
const POST_KINDS: [&str; 3] = ["p", "reel", "tv"];

/// Post shortcode from an instagram.com link.
///
/// The host must be `instagram.com` or `www.instagram.com`. Accepts
/// `/p/<id>`, `/reel/<id>` and `/tv/<id>`, optionally after a username
/// segment (`/<user>/p/<id>`). Query and fragment are ignored.
pub fn post_id(url: &str) -> Option<&str> {
    let rest = url.split_once("://").map_or(url, |(_, r)| r);
    let (host, path) = rest.split_once('/')?;
    let host = host.strip_prefix("www.").or_else(|| host.strip_prefix("WWW.")).unwrap_or(host);
    if !host.eq_ignore_ascii_case(INSTAGRAM_HOST) {
        return None;
    }
    let path = path.split(['?', '#']).next().unwrap_or("");

    let segs: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    let kind_at = segs
        .iter()
        .take(2)
        .position(|s| POST_KINDS.iter().any(|k| s.eq_ignore_ascii_case(k)))?;
    segs.get(kind_at + 1).copied()
}
