use encoding_rs::Encoding;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::warn;

static CHARSET_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)charset\s*=\s*["']?([^"'\s;]+)"#).expect("valid charset regex")
});

static META_CHARSET_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<meta\s+[^>]*?charset\s*=\s*["']?([^"'\s/>]+)"#)
        .expect("valid meta charset regex")
});

static META_HTTP_EQUIV_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<meta\s+[^>]*?http-equiv\s*=\s*["']?content-type["']?[^>]*?content\s*=\s*["']?[^"'>]*?charset\s*=\s*([^"'\s;/>]+)"#)
        .expect("valid meta http-equiv regex")
});

/// How far into the document to look for a declared charset.
const SNIFF_LEN: usize = 4096;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Charset {
    Utf8,
    Windows1252,
    ShiftJis,
    Gb2312,
    Big5,
    Other(String),
}

impl Charset {
    pub fn from_encoding(encoding: &'static Encoding) -> Self {
        use std::ptr;

        if ptr::eq(encoding, encoding_rs::UTF_8) {
            Self::Utf8
        } else if ptr::eq(encoding, encoding_rs::WINDOWS_1252) {
            Self::Windows1252
        } else if ptr::eq(encoding, encoding_rs::SHIFT_JIS) {
            Self::ShiftJis
        } else if ptr::eq(encoding, encoding_rs::GBK) || ptr::eq(encoding, encoding_rs::GB18030) {
            Self::Gb2312
        } else if ptr::eq(encoding, encoding_rs::BIG5) {
            Self::Big5
        } else {
            Self::Other(encoding.name().to_string())
        }
    }

    pub fn encoding(&self) -> &'static Encoding {
        match self {
            Self::Utf8 => encoding_rs::UTF_8,
            Self::Windows1252 => encoding_rs::WINDOWS_1252,
            Self::ShiftJis => encoding_rs::SHIFT_JIS,
            Self::Gb2312 => encoding_rs::GBK,
            Self::Big5 => encoding_rs::BIG5,
            Self::Other(name) => Encoding::for_label(name.as_bytes()).unwrap_or(encoding_rs::UTF_8),
        }
    }
}

/// Work out the document encoding from, in order: the Content-Type header,
/// a `<meta charset>` or `<meta http-equiv>` declaration, and finally
/// byte-frequency heuristics.
pub fn detect_charset(content_type: Option<&str>, body: &[u8]) -> Charset {
    if let Some(encoding) = content_type.and_then(|ct| label_from(&CHARSET_REGEX, ct)) {
        return Charset::from_encoding(encoding);
    }

    let head = &body[..body.len().min(SNIFF_LEN)];
    let head_str = String::from_utf8_lossy(head);

    if let Some(encoding) = label_from(&META_CHARSET_REGEX, &head_str)
        .or_else(|| label_from(&META_HTTP_EQUIV_REGEX, &head_str))
    {
        return Charset::from_encoding(encoding);
    }

    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(head, head.len() == body.len());
    Charset::from_encoding(detector.guess(None, true))
}

fn label_from(regex: &Regex, haystack: &str) -> Option<&'static Encoding> {
    let label = regex.captures(haystack)?.get(1)?.as_str().to_lowercase();
    Encoding::for_label(label.as_bytes())
}

/// Decode `body`, replacing malformed sequences with U+FFFD.
pub fn decode(body: &[u8], charset: &Charset) -> String {
    let encoding = charset.encoding();
    let (decoded, _encoding, had_errors) = encoding.decode(body);

    if had_errors {
        warn!(
            encoding = encoding.name(),
            "malformed byte sequences replaced while decoding"
        );
    }

    decoded.into_owned()
}
