use scraper::Html;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::charset;
use crate::extractor::model::{ItemScope, Meta};
use crate::extractor::{meta, microdata, repair, text};

/// Everything extracted from one HTML document. Built once, read-only after.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    url: String,
    #[serde(skip)]
    html: String,
    title: String,
    text: String,
    meta: Vec<Meta>,
    schema: Vec<ItemScope>,
}

impl Page {
    /// Decode raw document bytes and extract from them. Malformed byte
    /// sequences degrade to U+FFFD rather than failing the page.
    #[instrument(skip_all, fields(url = %url, bytes = body.len()))]
    pub fn read(url: &str, body: &[u8]) -> Self {
        let charset = charset::detect_charset(None, body);
        debug!(?charset, "decoding document");
        let html = charset::decode(body, &charset);
        Self::parse(url, &html)
    }

    #[instrument(skip_all, fields(url = %url))]
    pub fn parse(url: &str, html: &str) -> Self {
        let document = Html::parse_document(&repair::inline_meta_text(html));

        let page = Self {
            url: url.to_string(),
            html: html.to_string(),
            title: text::extract_title(&document),
            text: text::extract_text(&document),
            meta: meta::extract_meta(&document),
            schema: microdata::extract_schema(&document),
        };

        debug!(
            meta = page.meta.len(),
            schema = page.schema.len(),
            "extracted page metadata"
        );
        page
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// The source document as given, before any repair.
    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn meta_data(&self) -> &[Meta] {
        &self.meta
    }

    pub fn schema_data(&self) -> &[ItemScope] {
        &self.schema
    }
}
