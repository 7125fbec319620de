use bytes::Bytes;
use chrono::{DateTime, Utc};
use reqwest::{StatusCode, header::HeaderMap};
use url::Url;

use crate::charset::Charset;
use crate::extractor::Page;

#[derive(Debug)]
pub struct PageResponse {
    pub url_final: Url,
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body_raw: Bytes,
    pub body_utf8: String,
    pub charset: Charset,
    pub fetched_at: DateTime<Utc>,
}

impl PageResponse {
    /// Run extraction over the decoded body, keyed by the post-redirect URL.
    pub fn to_page(&self) -> Page {
        Page::parse(self.url_final.as_str(), &self.body_utf8)
    }
}
