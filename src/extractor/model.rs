use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static WHITESPACE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Which attribute of a `<meta>` element supplied its key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetaKey {
    Property(String),
    Name(String),
}

impl MetaKey {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Property(key) | Self::Name(key) => key,
        }
    }

    fn same_kind(&self, other: &MetaKey) -> bool {
        matches!(
            (self, other),
            (Self::Property(_), Self::Property(_)) | (Self::Name(_), Self::Name(_))
        )
    }

    /// True when `other` is a colon-delimited qualifier of this key,
    /// e.g. `og:image:width` for `og:image`.
    pub fn is_qualified_by(&self, other: &MetaKey) -> bool {
        self.same_kind(other)
            && other
                .as_str()
                .strip_prefix(self.as_str())
                .is_some_and(|rest| rest.starts_with(':'))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    #[serde(flatten)]
    pub key: MetaKey,
    pub content: String,
    /// Qualifier entries grouped under this one. Never nested further.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra: Vec<Meta>,
}

impl Meta {
    pub fn new(key: MetaKey, content: impl Into<String>) -> Self {
        Self {
            key,
            content: content.into(),
            extra: Vec::new(),
        }
    }

    pub fn property(&self) -> Option<&str> {
        match &self.key {
            MetaKey::Property(key) => Some(key),
            MetaKey::Name(_) => None,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match &self.key {
            MetaKey::Name(key) => Some(key),
            MetaKey::Property(_) => None,
        }
    }
}

/// A microdata item rooted at an element carrying `itemscope`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemScope {
    pub tag_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
    /// Set when this item is the value of a property of its enclosing item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_prop: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub props: Vec<ItemProp>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ItemScope>,
}

// Deeply nested items would otherwise be dropped one stack frame per level.
impl Drop for ItemScope {
    fn drop(&mut self) {
        let mut stack = std::mem::take(&mut self.children);
        while let Some(mut scope) = stack.pop() {
            stack.append(&mut scope.children);
        }
    }
}

/// A leaf `itemprop` value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemProp {
    pub tag_name: String,
    pub item_prop: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datetime: Option<String>,
}

/// Collapse every whitespace run to a single space and trim the ends.
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_REGEX.replace_all(text.trim(), " ").into_owned()
}
