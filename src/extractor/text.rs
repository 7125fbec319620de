use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Node, Selector};

use crate::extractor::model::normalize_whitespace;

static TITLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("title").expect("valid title selector"));
static BODY_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("body").expect("valid body selector"));

/// Elements whose contents never count as visible text.
const HIDDEN_TAGS: [&str; 3] = ["meta", "script", "style"];

pub fn extract_title(document: &Html) -> String {
    document
        .select(&TITLE_SELECTOR)
        .next()
        .map(|title| title.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

/// Visible body text with whitespace collapsed. Text fragments are joined
/// with a space so adjacent elements never run together.
pub fn extract_text(document: &Html) -> String {
    let Some(body) = document.select(&BODY_SELECTOR).next() else {
        return String::new();
    };

    let mut fragments = Vec::new();
    collect_text(body, &mut fragments);
    normalize_whitespace(&fragments.join(" "))
}

fn collect_text<'a>(body: ElementRef<'a>, fragments: &mut Vec<&'a str>) {
    let mut stack: Vec<_> = body.children().rev().collect();

    while let Some(node) = stack.pop() {
        match node.value() {
            Node::Text(text) => fragments.push(&**text),
            Node::Element(el) if HIDDEN_TAGS.contains(&el.name()) => {}
            Node::Element(_) => stack.extend(node.children().rev()),
            _ => {}
        }
    }
}
