use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};

use crate::error::OrthoError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

/// Issues a GET for `url`, asking for `content_type`, and hands back the
/// status and body whatever the status is. Only failures to get any
/// response at all are errors. Content types are fixed per endpoint.
pub trait Transport: Send + Sync {
    fn get(&self, url: &str, content_type: &'static str) -> Result<HttpResponse, OrthoError>;
}

#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self, OrthoError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&format!("ortho-fetch/{}", env!("CARGO_PKG_VERSION")))
                .map_err(|err| OrthoError::Http(err.to_string()))?,
        );
        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|err| OrthoError::Http(err.to_string()))?;
        Ok(Self { client })
    }

    fn request(&self, url: &str, content_type: &'static str) -> RequestBuilder {
        self.client
            .get(url)
            .header(ACCEPT, HeaderValue::from_static(media_type(content_type)))
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str, content_type: &'static str) -> Result<HttpResponse, OrthoError> {
        let response = self
            .request(url, content_type)
            .send()
            .map_err(|err| OrthoError::Http(err.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|err| OrthoError::Http(err.to_string()))?;
        Ok(HttpResponse { status, body })
    }
}

/// `text/x-fasta;type=protein` -> `text/x-fasta`
fn media_type(content_type: &str) -> &str {
    content_type
        .split(';')
        .next()
        .map(str::trim)
        .unwrap_or(content_type)
}
