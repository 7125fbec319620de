use reqwest::{Client, ClientBuilder, header};
use tracing::{debug, instrument};

use crate::config::Config;
use crate::fetcher::{
    errors::FetchError,
    pipeline::{is_html, process_response},
    types::PageResponse,
};

const ACCEPT_HTML: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";

/// HTTP client for pulling pages to scrape.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    max_body_bytes: u64,
}

impl Fetcher {
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(header::ACCEPT, header::HeaderValue::from_static(ACCEPT_HTML));

        let client = ClientBuilder::new()
            .connect_timeout(config.connect_timeout())
            .timeout(config.timeout())
            .user_agent(config.user_agent())
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects()))
            .default_headers(headers)
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self {
            client,
            max_body_bytes: config.max_body_bytes(),
        })
    }

    #[instrument(skip_all, fields(url = %url))]
    pub async fn fetch(&self, url: &str) -> Result<PageResponse, FetchError> {
        let parsed_url = url::Url::parse(url)?;

        let response = self
            .client
            .get(parsed_url)
            .send()
            .await
            .map_err(FetchError::from_reqwest_error)?;

        // Check content length before downloading
        if let Some(content_length) = response.content_length()
            && content_length > self.max_body_bytes
        {
            return Err(FetchError::BodyTooLarge(content_length));
        }

        let final_url = response.url().clone();
        let status = response.status();
        let headers = response.headers().clone();

        if !status.is_success() {
            return Err(FetchError::Http {
                status,
                retriable: status.is_server_error(),
            });
        }

        let content_type = headers
            .get(header::CONTENT_TYPE)
            .and_then(|ct| ct.to_str().ok())
            .unwrap_or("text/html")
            .to_string();

        if !is_html(&content_type) {
            return Err(FetchError::UnsupportedContentType(content_type));
        }

        let body_bytes = response
            .bytes()
            .await
            .map_err(|e| FetchError::Io(e.to_string()))?;

        // Content-Length may be missing or wrong
        if body_bytes.len() as u64 > self.max_body_bytes {
            return Err(FetchError::BodyTooLarge(body_bytes.len() as u64));
        }

        debug!(%final_url, %status, bytes = body_bytes.len(), "fetched page");
        process_response(final_url, status, headers, body_bytes, &content_type)
    }
}
