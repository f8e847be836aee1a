// tests/embed.rs
use std::time::Duration;

use shop_feed::embed::{post_id, EmbedResolver, InstagramEmbed};

#[test]
fn post_id_from_common_link_shapes() {
    assert_eq!(post_id("https://www.instagram.com/p/DUVF5iiEmtI/"), Some("DUVF5iiEmtI"));
    assert_eq!(post_id("https://instagram.com/p/ABC123"), Some("ABC123"));
    assert_eq!(post_id("https://www.instagram.com/shopname/p/XYZ/?igsh=abc"), Some("XYZ"));
    assert_eq!(post_id("https://www.instagram.com/reel/R1/#top"), Some("R1"));
}

#[test]
fn non_post_links_have_no_id() {
    assert_eq!(post_id(""), None);
    assert_eq!(post_id("https://www.instagram.com/shopname/"), None);
    assert_eq!(post_id("https://www.instagram.com/p/"), None);
    assert_eq!(post_id("https://example.com/p/ABC/"), None);
    assert_eq!(post_id("https://notinstagram.com/p/X/"), None);
    assert_eq!(post_id("https://instagram.com.evil.net/p/X/"), None);
    assert_eq!(post_id("https://example.com/?next=instagram.com/p/X/"), None);
}

#[test]
fn instagram_embed_resolves_to_captioned_page() {
    let r = InstagramEmbed;
    assert_eq!(
        r.resolve("https://www.instagram.com/p/ABC123/").as_deref(),
        Some("https://www.instagram.com/p/ABC123/embed/captioned/")
    );
    assert_eq!(r.resolve("https://example.com/"), None);
    assert_eq!(r.timeout(), Duration::from_secs(10));
}
