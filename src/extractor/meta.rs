use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

use crate::extractor::model::{Meta, MetaKey};

static META_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("meta").expect("valid meta selector"));

/// Collect every keyed `<meta>` element in document order, grouping
/// colon-qualified keys (`og:image:width`) under the top-level entry they
/// directly follow.
pub fn extract_meta(document: &Html) -> Vec<Meta> {
    let mut entries: Vec<Meta> = Vec::new();

    for element in document.select(&META_SELECTOR) {
        let Some(candidate) = read_meta(element) else {
            continue;
        };

        // Only the latest top-level entry can take qualifiers.
        match entries.last_mut() {
            Some(current) if current.key.is_qualified_by(&candidate.key) => {
                current.extra.push(candidate)
            }
            _ => entries.push(candidate),
        }
    }

    entries
}

fn read_meta(element: ElementRef<'_>) -> Option<Meta> {
    let el = element.value();
    let key = match (el.attr("property"), el.attr("name")) {
        (Some(property), _) => MetaKey::Property(property.to_string()),
        (None, Some(name)) => MetaKey::Name(name.to_string()),
        (None, None) => return None,
    };

    let content = match el.attr("content") {
        Some(content) => content.to_string(),
        None => element.text().collect::<String>().trim().to_string(),
    };

    Some(Meta::new(key, content))
}
