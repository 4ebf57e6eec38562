//! Per-host cookie persistence for the transport.

use cookie::Cookie;
use dashmap::DashMap;
use reqwest::Url;
use reqwest::cookie::CookieStore;
use reqwest::header::HeaderValue;

/// Session cookie continuity across requests.
///
/// Cookies are keyed by host, then by name within a host: a cookie
/// arriving in a response replaces any stored cookie of the same name for
/// that host, so at most one value per name survives. The store lives as
/// long as the bridge and is consulted again at every redirect hop.
#[derive(Default)]
pub struct CookieVault {
    store: DashMap<String, Vec<Cookie<'static>>>,
}

impl CookieVault {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current name/value pairs for a host, in unspecified order.
    pub fn cookies_for_host(&self, host: &str) -> Vec<(String, String)> {
        self.store
            .get(host)
            .map(|entry| {
                entry
                    .iter()
                    .map(|cookie| (cookie.name().to_string(), cookie.value().to_string()))
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl CookieStore for CookieVault {
    fn set_cookies(&self, cookie_headers: &mut dyn Iterator<Item = &HeaderValue>, url: &Url) {
        let Some(host) = url.host_str() else { return };
        let incoming: Vec<Cookie<'static>> = cookie_headers
            .filter_map(|value| value.to_str().ok())
            .filter_map(|raw| Cookie::parse(raw.to_owned()).ok())
            .collect();
        if incoming.is_empty() {
            return;
        }

        let mut entry = self.store.entry(host.to_string()).or_default();
        for cookie in incoming {
            entry.retain(|stored| stored.name() != cookie.name());
            entry.push(cookie);
        }
    }

    fn cookies(&self, url: &Url) -> Option<HeaderValue> {
        let entry = self.store.get(url.host_str()?)?;
        if entry.is_empty() {
            return None;
        }
        let joined = entry
            .iter()
            .map(|cookie| format!("{}={}", cookie.name(), cookie.value()))
            .collect::<Vec<_>>()
            .join("; ");
        HeaderValue::from_str(&joined).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(vault: &CookieVault, url: &str, set_cookie_values: &[&str]) {
        let url = Url::parse(url).unwrap();
        let headers: Vec<HeaderValue> = set_cookie_values
            .iter()
            .map(|value| HeaderValue::from_str(value).unwrap())
            .collect();
        vault.set_cookies(&mut headers.iter(), &url);
    }

    #[test]
    fn newest_value_replaces_same_name_for_host() {
        let vault = CookieVault::new();
        apply(&vault, "https://a.example/x", &["session=one; Path=/"]);
        apply(&vault, "https://a.example/y", &["session=two; Path=/"]);

        let stored = vault.cookies_for_host("a.example");
        assert_eq!(stored, vec![("session".to_string(), "two".to_string())]);
    }

    #[test]
    fn hosts_are_isolated() {
        let vault = CookieVault::new();
        apply(&vault, "https://a.example/", &["id=aaa"]);
        apply(&vault, "https://b.example/", &["id=bbb"]);

        assert_eq!(
            vault.cookies_for_host("a.example"),
            vec![("id".to_string(), "aaa".to_string())]
        );
        assert_eq!(
            vault.cookies_for_host("b.example"),
            vec![("id".to_string(), "bbb".to_string())]
        );
        assert!(vault.cookies_for_host("c.example").is_empty());
    }

    #[test]
    fn request_header_joins_all_host_cookies() {
        let vault = CookieVault::new();
        apply(&vault, "https://a.example/", &["one=1", "two=2"]);

        let header = vault
            .cookies(&Url::parse("https://a.example/page").unwrap())
            .unwrap();
        let text = header.to_str().unwrap();
        assert!(text.contains("one=1"));
        assert!(text.contains("two=2"));
        assert!(text.contains("; "));
    }

    #[test]
    fn no_header_for_unknown_host() {
        let vault = CookieVault::new();
        assert!(
            vault
                .cookies(&Url::parse("https://nowhere.example/").unwrap())
                .is_none()
        );
    }

    #[test]
    fn unparseable_set_cookie_is_ignored() {
        let vault = CookieVault::new();
        apply(&vault, "https://a.example/", &["not a cookie"]);
        assert!(vault.cookies_for_host("a.example").is_empty());
    }
}
