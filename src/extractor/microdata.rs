use scraper::{ElementRef, Html};

use crate::extractor::model::{ItemProp, ItemScope};

/// Tags whose property value is their `src` attribute.
const MEDIA_TAGS: [&str; 7] = ["audio", "embed", "iframe", "img", "source", "track", "video"];

/// Build every top-level microdata item (an `itemscope` element with no
/// `itemscope` ancestor), in document order.
pub fn extract_schema(document: &Html) -> Vec<ItemScope> {
    let mut scopes = Vec::new();
    let mut stack = vec![document.root_element()];

    // Descent stops at the first `itemscope` on each path, so everything
    // below it belongs to that item.
    while let Some(element) = stack.pop() {
        if element.value().attr("itemscope").is_some() {
            scopes.push(build_scope(element));
        } else {
            stack.extend(element.children().rev().filter_map(ElementRef::wrap));
        }
    }

    scopes
}

/// An item discovered but not yet attached to its parent.
struct PendingScope<'a> {
    element: ElementRef<'a>,
    parent: Option<usize>,
    scope: ItemScope,
}

/// Build the item rooted at `root` together with every item nested in it.
///
/// Items are discovered breadth-first into a flat list where each entry
/// records its parent's index, then folded back into a tree. Nesting depth
/// never grows the call stack.
fn build_scope(root: ElementRef<'_>) -> ItemScope {
    let mut pending = vec![new_pending(root, None, None)];

    let mut next = 0;
    while next < pending.len() {
        let element = pending[next].element;
        let mut stack: Vec<_> = element
            .children()
            .rev()
            .filter_map(ElementRef::wrap)
            .collect();

        // A claimed element's subtree is never searched again: leaves own
        // their text, nested items collect their own properties.
        while let Some(child) = stack.pop() {
            let el = child.value();
            let is_scope = el.attr("itemscope").is_some();

            match el.attr("itemprop") {
                Some(name) if is_scope => {
                    pending.push(new_pending(child, Some(name), Some(next)));
                }
                Some(name) => pending[next].scope.props.push(read_property(child, name)),
                None if is_scope => pending.push(new_pending(child, None, Some(next))),
                None => stack.extend(child.children().rev().filter_map(ElementRef::wrap)),
            }
        }
        next += 1;
    }

    // Children always sit after their parent, so folding from the back
    // attaches every item before its parent is moved.
    while pending.len() > 1 {
        let Some(PendingScope { parent, mut scope, .. }) = pending.pop() else {
            break;
        };
        scope.children.reverse();
        if let Some(parent) = parent {
            pending[parent].scope.children.push(scope);
        }
    }

    let mut scope = pending
        .pop()
        .map(|p| p.scope)
        .unwrap_or_else(|| empty_scope(root));
    scope.children.reverse();
    scope
}

fn new_pending<'a>(
    element: ElementRef<'a>,
    item_prop: Option<&str>,
    parent: Option<usize>,
) -> PendingScope<'a> {
    let mut scope = empty_scope(element);
    scope.item_prop = item_prop.map(str::to_string);
    PendingScope {
        element,
        parent,
        scope,
    }
}

fn empty_scope(element: ElementRef<'_>) -> ItemScope {
    let el = element.value();
    ItemScope {
        tag_name: el.name().to_string(),
        item_type: el.attr("itemtype").map(str::to_string),
        item_prop: None,
        props: Vec::new(),
        children: Vec::new(),
    }
}

fn read_property(element: ElementRef<'_>, name: &str) -> ItemProp {
    let el = element.value();
    let tag = el.name();
    let attr = |key: &str| el.attr(key).unwrap_or_default().to_string();

    let mut prop = ItemProp {
        tag_name: tag.to_string(),
        item_prop: name.to_string(),
        content: String::new(),
        href: None,
        datetime: None,
    };

    match tag {
        "meta" => prop.content = attr("content"),
        "time" => {
            prop.datetime = el.attr("datetime").map(str::to_string);
            prop.content = trimmed_text(element);
        }
        "a" | "link" | "area" => {
            prop.href = el.attr("href").map(str::to_string);
            prop.content = trimmed_text(element);
        }
        "object" => prop.content = attr("data"),
        _ if MEDIA_TAGS.contains(&tag) => prop.content = attr("src"),
        _ => prop.content = trimmed_text(element),
    }

    prop
}

fn trimmed_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
