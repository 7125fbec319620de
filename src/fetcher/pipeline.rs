use bytes::Bytes;
use chrono::Utc;
use reqwest::{StatusCode, header::HeaderMap};
use url::Url;

use crate::charset;
use crate::fetcher::{errors::FetchError, types::PageResponse};

pub fn process_response(
    url_final: Url,
    status: StatusCode,
    headers: HeaderMap,
    body_bytes: Bytes,
    content_type: &str,
) -> Result<PageResponse, FetchError> {
    let charset = charset::detect_charset(Some(content_type), &body_bytes);
    let body_utf8 = charset::decode(&body_bytes, &charset);

    Ok(PageResponse {
        url_final,
        status,
        headers,
        body_raw: body_bytes,
        body_utf8,
        charset,
        fetched_at: Utc::now(),
    })
}

/// Only HTML documents are worth extracting from.
pub fn is_html(content_type: &str) -> bool {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    mime == "text/html" || mime == "application/xhtml+xml"
}
