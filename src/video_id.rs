/// Video identifier extraction for YouTube watch URLs
use regex::Regex;
use std::sync::LazyLock;

/// `v` query parameter: starts after `?` or `&`, runs until the next `&`
static VIDEO_PARAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[?&]v=([^&]+)").expect("video id pattern is valid"));

/// Extract the video identifier from a page URL
///
/// The first `v=` query parameter wins. Its value is returned verbatim:
/// no percent-decoding and no validation of the token alphabet, so a
/// fragment such as `#t=10` stays attached when there is no `&` before it.
///
/// Examples:
/// - https://www.youtube.com/watch?v=abc123 → abc123
/// - https://youtube.com/watch?v=abc123&t=5 → abc123
/// - https://www.youtube.com/watch?list=PL1&v=xyz → xyz
/// - https://www.youtube.com/feed/subscriptions → None
pub fn extract_video_id(url: &str) -> Option<String> {
    VIDEO_PARAM
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
