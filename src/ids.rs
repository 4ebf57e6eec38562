//! URL and identifier heuristics.
//!
//! Upstream URL shapes are inconsistent, so these are total functions over
//! raw text with a fixed fallback chain, not a URL parser. They never
//! fail; an empty string means nothing recognizable matched.

/// Video id from a watch, shorts or embed style URL.
///
/// Checks `v=` first, then `/shorts/`, then falls back to the text after
/// the final slash (the whole input when there is no slash).
pub fn extract_video_id(url: &str) -> String {
    if let Some((_, rest)) = url.split_once("v=") {
        return rest.split('&').next().unwrap_or_default().to_string();
    }
    if let Some((_, rest)) = url.split_once("/shorts/") {
        return rest.split('?').next().unwrap_or_default().to_string();
    }
    url.rsplit('/').next().unwrap_or_default().to_string()
}

/// Channel id from the `/channel/`, `/c/` or `/user/` URL shapes, checked
/// in that priority order. A bare `@handle` is returned verbatim.
pub fn extract_channel_id(url: &str) -> String {
    for marker in ["/channel/", "/c/", "/user/"] {
        if let Some((_, rest)) = url.split_once(marker) {
            return rest.split('/').next().unwrap_or_default().to_string();
        }
    }
    if url.starts_with('@') {
        return url.to_string();
    }
    url.rsplit('/').next().unwrap_or_default().to_string()
}

/// Expand a handle, bare channel id or custom slug into a full channel
/// page URL. Full URLs pass through untouched.
pub fn normalize_channel_url(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.starts_with("http") {
        return trimmed.to_string();
    }
    if trimmed.starts_with('@') {
        return format!("https://www.youtube.com/{trimmed}");
    }
    if trimmed.starts_with("UC") {
        return format!("https://www.youtube.com/channel/{trimmed}");
    }
    format!("https://www.youtube.com/{trimmed}")
}

/// Seconds from a `"1:02:03"`, `"12:34"` or `"45"` style duration label.
/// Unparseable input counts as zero.
pub fn parse_duration_text(text: &str) -> i64 {
    let parts: Vec<i64> = text
        .split(':')
        .filter_map(|part| part.trim().parse().ok())
        .collect();
    match parts.as_slice() {
        [hours, minutes, seconds] => hours * 3600 + minutes * 60 + seconds,
        [minutes, seconds] => minutes * 60 + seconds,
        [seconds] => *seconds,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn video_id_from_watch_url() {
        assert_eq!(extract_video_id("https://x/watch?v=ABC123&t=5"), "ABC123");
    }

    #[test]
    fn video_id_from_shorts_url() {
        assert_eq!(extract_video_id("https://x/shorts/XYZ?feature=share"), "XYZ");
    }

    #[test]
    fn video_id_falls_back_to_last_segment() {
        assert_eq!(extract_video_id("https://x/embed/QQQ"), "QQQ");
    }

    #[test]
    fn video_id_without_slashes_is_the_input() {
        assert_eq!(extract_video_id("dQw4w9WgXcQ"), "dQw4w9WgXcQ");
    }

    #[test]
    fn video_id_is_total_over_junk() {
        assert_eq!(extract_video_id(""), "");
        assert_eq!(extract_video_id("https://x/watch?v="), "");
        assert_eq!(extract_video_id("https://x/"), "");
    }

    #[test]
    fn channel_id_from_channel_path() {
        assert_eq!(
            extract_channel_id("https://x/channel/UC123/videos"),
            "UC123"
        );
    }

    #[test]
    fn channel_id_from_custom_and_user_paths() {
        assert_eq!(extract_channel_id("https://x/c/SomeName/about"), "SomeName");
        assert_eq!(extract_channel_id("https://x/user/old_name"), "old_name");
    }

    #[test]
    fn channel_handle_passes_through() {
        assert_eq!(extract_channel_id("@SomeHandle"), "@SomeHandle");
    }

    #[test]
    fn channel_id_falls_back_to_last_segment() {
        assert_eq!(extract_channel_id("https://x/something"), "something");
    }

    #[test]
    fn channel_id_with_empty_tail_is_empty() {
        assert_eq!(extract_channel_id("https://x/"), "");
        assert_eq!(extract_channel_id(""), "");
    }

    #[test]
    fn channel_url_normalization() {
        assert_eq!(
            normalize_channel_url("https://www.youtube.com/@handle"),
            "https://www.youtube.com/@handle"
        );
        assert_eq!(
            normalize_channel_url("@handle"),
            "https://www.youtube.com/@handle"
        );
        assert_eq!(
            normalize_channel_url("UCabc123"),
            "https://www.youtube.com/channel/UCabc123"
        );
        assert_eq!(
            normalize_channel_url(" customslug "),
            "https://www.youtube.com/customslug"
        );
    }

    #[test]
    fn duration_text_parsing() {
        assert_eq!(parse_duration_text("1:02:03"), 3723);
        assert_eq!(parse_duration_text("12:34"), 754);
        assert_eq!(parse_duration_text("45"), 45);
        assert_eq!(parse_duration_text(""), 0);
        assert_eq!(parse_duration_text("n/a"), 0);
    }
}
