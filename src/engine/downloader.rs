//! Network contract the extraction engine requires of its environment.

use async_trait::async_trait;
use thiserror::Error;

/// Methods the engine issues. Anything that is not a POST is dispatched by
/// the transport as a plain GET with no body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Head,
}

/// Outbound request produced by the engine, consumed once by the transport.
///
/// Headers are an ordered multimap: duplicate keys are allowed and the
/// supplied order is preserved on the wire.
#[derive(Debug, Clone)]
pub struct Request {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, Vec<String>)>,
    pub body: Option<Vec<u8>>,
}

impl Request {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn post(url: impl Into<String>, body: Vec<u8>) -> Self {
        Self {
            method: HttpMethod::Post,
            url: url.into(),
            headers: Vec::new(),
            body: Some(body),
        }
    }

    /// Append a header value, keeping any values already present for the key.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self
            .headers
            .iter_mut()
            .find(|(key, _)| key.eq_ignore_ascii_case(&name))
        {
            Some((_, values)) => values.push(value),
            None => self.headers.push((name, vec![value])),
        }
        self
    }
}

/// Response handed back to the engine once the whole body has been read.
#[derive(Debug, Clone)]
pub struct Response {
    pub code: u16,
    pub message: String,
    pub headers: Vec<(String, Vec<String>)>,
    /// Complete body text; the engine consumes strings, never streams.
    pub body: String,
    /// URL reached after the transport followed redirects.
    pub final_url: String,
}

impl Response {
    /// First value of the given header, matched case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .and_then(|(_, values)| values.first())
            .map(String::as_str)
    }
}

/// Failures the transport reports back to the engine.
#[derive(Debug, Error)]
pub enum DownloaderError {
    /// Upstream answered 429 and wants a verification challenge solved.
    /// The engine must abort the enclosing operation.
    #[error("verification challenge required (429) at {url}")]
    RateLimited { url: String },
    /// A header supplied with the request is not valid HTTP.
    #[error("invalid request header: {0}")]
    InvalidHeader(String),
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// The single operation an extraction engine needs from its environment.
#[async_trait]
pub trait Downloader: Send + Sync {
    async fn execute(&self, request: Request) -> Result<Response, DownloaderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_builder_groups_values_by_key() {
        let request = Request::get("https://example.com")
            .header("Accept", "text/html")
            .header("accept", "application/json")
            .header("Range", "bytes=0-");

        assert_eq!(request.headers.len(), 2);
        assert_eq!(
            request.headers[0],
            (
                "Accept".to_string(),
                vec!["text/html".to_string(), "application/json".to_string()]
            )
        );
    }

    #[test]
    fn response_header_lookup_is_case_insensitive() {
        let response = Response {
            code: 200,
            message: "OK".to_string(),
            headers: vec![(
                "Content-Type".to_string(),
                vec!["text/html".to_string()],
            )],
            body: String::new(),
            final_url: "https://example.com/".to_string(),
        };

        assert_eq!(response.header("content-type"), Some("text/html"));
        assert_eq!(response.header("x-missing"), None);
    }
}
