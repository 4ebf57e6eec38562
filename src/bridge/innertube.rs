//! Fixed client identity for requests against the private data API.
//!
//! The upstream rejects API calls whose api-format version, client name,
//! client version, origin, referer and user agent do not agree with each
//! other, so the whole set is applied as a unit and callers cannot
//! override individual members.

use reqwest::header::{HeaderName, HeaderValue, ORIGIN, REFERER, USER_AGENT};

/// Path fragment identifying a private data API endpoint.
pub const API_PATH_MARKER: &str = "youtubei/v1";

pub const API_FORMAT_VERSION: &str = "1";
pub const CLIENT_NAME: &str = "1";
pub const CLIENT_VERSION: &str = "2.20260124.00.00";
pub const API_ORIGIN: &str = "https://www.youtube.com";
pub const API_REFERER: &str = "https://www.youtube.com/";
pub const API_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:140.0) Gecko/20100101 Firefox/140.0";

/// True when the URL targets the private data API.
pub fn is_api_request(url: &str) -> bool {
    url.contains(API_PATH_MARKER)
}

/// The override header set, applied together.
pub fn impersonation_headers() -> [(HeaderName, HeaderValue); 6] {
    [
        (
            HeaderName::from_static("x-goog-api-format-version"),
            HeaderValue::from_static(API_FORMAT_VERSION),
        ),
        (
            HeaderName::from_static("x-youtube-client-name"),
            HeaderValue::from_static(CLIENT_NAME),
        ),
        (
            HeaderName::from_static("x-youtube-client-version"),
            HeaderValue::from_static(CLIENT_VERSION),
        ),
        (ORIGIN, HeaderValue::from_static(API_ORIGIN)),
        (REFERER, HeaderValue::from_static(API_REFERER)),
        (USER_AGENT, HeaderValue::from_static(API_USER_AGENT)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_detection_is_path_based() {
        assert!(is_api_request("https://www.youtube.com/youtubei/v1/search"));
        assert!(is_api_request(
            "https://youtubei.googleapis.com/youtubei/v1/player?key=x"
        ));
        assert!(!is_api_request("https://www.youtube.com/watch?v=abc"));
    }

    #[test]
    fn impersonation_set_is_internally_consistent() {
        let headers = impersonation_headers();
        assert_eq!(headers.len(), 6);
        // The origin and referer must describe the same site the client
        // version claims to be served from.
        assert!(API_REFERER.starts_with(API_ORIGIN));
        assert!(API_USER_AGENT.contains("Firefox"));
    }
}
