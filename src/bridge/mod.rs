//! Transport servicing the extraction engine's outbound HTTP needs.
//!
//! The engine only knows the [`Downloader`] contract; this module backs it
//! with a real client, per-host cookie continuity and the protocol-aware
//! header shaping the upstream requires.

pub mod cookies;
pub mod innertube;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, USER_AGENT};

use crate::config::ServiceConfig;
use crate::engine::downloader::{Downloader, DownloaderError, HttpMethod, Request, Response};
use cookies::CookieVault;

/// Marker the upstream embeds in soft-block interstitial pages.
const SOFT_BLOCK_MARKER: &str = "The page needs to be reloaded";

/// Characters of an error body worth keeping in the diagnostic record.
const BODY_LOG_LIMIT: usize = 500;

/// [`Downloader`] implementation over a shared HTTP client.
///
/// Requests block the logical operation until the full round trip,
/// including redirects, has completed; no concurrency is introduced here.
/// Responses pass through with their original status, 429 excepted.
pub struct TransportBridge {
    http: reqwest::Client,
    cookies: Arc<CookieVault>,
    user_agent: String,
}

impl TransportBridge {
    pub fn new(config: &ServiceConfig) -> Result<Self, DownloaderError> {
        let cookies = Arc::new(CookieVault::new());
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .read_timeout(Duration::from_secs(config.read_timeout_secs))
            .cookie_provider(cookies.clone())
            .build()?;
        Ok(Self {
            http,
            cookies,
            user_agent: config.user_agent.clone(),
        })
    }

    /// The cookie store backing this bridge.
    pub fn cookie_vault(&self) -> &Arc<CookieVault> {
        &self.cookies
    }
}

#[async_trait]
impl Downloader for TransportBridge {
    async fn execute(&self, request: Request) -> Result<Response, DownloaderError> {
        let headers = shape_headers(&request.url, &request.headers, &self.user_agent)?;

        let outbound = match request.method {
            HttpMethod::Post => self
                .http
                .post(&request.url)
                .body(request.body.unwrap_or_default()),
            // Everything else goes out as a plain GET with no body.
            HttpMethod::Get | HttpMethod::Head => self.http.get(&request.url),
        };

        tracing::debug!(url = %request.url, "dispatching engine request");
        let upstream = outbound.headers(headers).send().await?;

        let code = upstream.status().as_u16();
        let message = upstream
            .status()
            .canonical_reason()
            .unwrap_or_default()
            .to_string();
        let final_url = upstream.url().to_string();
        let headers = collect_headers(upstream.headers());
        let body = upstream.text().await?;

        finalize_response(&request.url, code, message, headers, body, final_url)
    }
}

/// Build the outbound header map: caller headers first, in order and with
/// duplicates intact, then the protocol-specific overrides.
///
/// Data-API requests always carry the impersonation set, replacing any
/// conflicting caller values for those keys. Plain requests only gain a
/// user agent when the caller supplied none.
fn shape_headers(
    url: &str,
    supplied: &[(String, Vec<String>)],
    default_user_agent: &str,
) -> Result<HeaderMap, DownloaderError> {
    let mut headers = HeaderMap::new();
    for (name, values) in supplied {
        let parsed_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| DownloaderError::InvalidHeader(name.clone()))?;
        for value in values {
            let parsed_value = HeaderValue::from_str(value)
                .map_err(|_| DownloaderError::InvalidHeader(name.clone()))?;
            headers.append(parsed_name.clone(), parsed_value);
        }
    }

    if innertube::is_api_request(url) {
        for (name, value) in innertube::impersonation_headers() {
            headers.insert(name, value);
        }
    } else if !headers.contains_key(USER_AGENT) {
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(default_user_agent)
                .map_err(|_| DownloaderError::InvalidHeader("User-Agent".to_string()))?,
        );
    }

    Ok(headers)
}

/// Post-receipt handling shared by every request: diagnostics for error
/// pages, the rate-limit signal, then the response the engine sees.
fn finalize_response(
    request_url: &str,
    code: u16,
    message: String,
    headers: Vec<(String, Vec<String>)>,
    body: String,
    final_url: String,
) -> Result<Response, DownloaderError> {
    if code >= 400 || body.contains(SOFT_BLOCK_MARKER) {
        let preview: String = body.chars().take(BODY_LOG_LIMIT).collect();
        tracing::warn!(url = %request_url, code, body = %preview, "upstream returned an error page");
    }

    if code == 429 {
        return Err(DownloaderError::RateLimited {
            url: request_url.to_string(),
        });
    }

    Ok(Response {
        code,
        message,
        headers,
        body,
        final_url,
    })
}

/// Flatten the client's header map back into the engine's ordered multimap.
fn collect_headers(map: &HeaderMap) -> Vec<(String, Vec<String>)> {
    let mut collected: Vec<(String, Vec<String>)> = Vec::new();
    for (name, value) in map {
        let text = String::from_utf8_lossy(value.as_bytes()).into_owned();
        match collected.iter_mut().find(|entry| entry.0 == name.as_str()) {
            Some(entry) => entry.1.push(text),
            None => collected.push((name.as_str().to_string(), vec![text])),
        }
    }
    collected
}
