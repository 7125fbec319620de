use std::fs;

use crate::extractor::{ItemProp, ItemScope, Meta, MetaKey, Page};

fn property(key: &str, content: &str) -> Meta {
    Meta::new(MetaKey::Property(key.to_string()), content)
}

fn name(key: &str, content: &str) -> Meta {
    Meta::new(MetaKey::Name(key.to_string()), content)
}

fn with_extra(mut meta: Meta, extra: Vec<Meta>) -> Meta {
    meta.extra = extra;
    meta
}

fn prop(tag_name: &str, item_prop: &str, content: &str) -> ItemProp {
    ItemProp {
        tag_name: tag_name.to_string(),
        item_prop: item_prop.to_string(),
        content: content.to_string(),
        href: None,
        datetime: None,
    }
}

fn scope(item_type: &str, props: Vec<ItemProp>) -> ItemScope {
    ItemScope {
        tag_name: "div".to_string(),
        item_type: Some(item_type.to_string()),
        item_prop: None,
        props,
        children: Vec::new(),
    }
}

fn read_fixture(name: &str) -> String {
    fs::read_to_string(format!("src/extractor/tests/fixtures/{name}"))
        .expect("Failed to read test fixture")
}

#[test]
fn test_product_page_title_and_text() {
    let page = Page::parse("https://www.example.com", &read_fixture("product.html"));

    assert_eq!(page.title(), "TestPage");
    assert_eq!(
        page.text(),
        "Blend-O-Matic $19.95 Based on 25 user ratings Spinal Tap One of the loudest bands ever \
         reunites for an unforgettable two-day show. Event date: May 8, 7:30pm Alice Jones Bob Smith"
    );
}

#[test]
fn test_product_page_meta() {
    let page = Page::parse("https://www.example.com", &read_fixture("product.html"));

    let expected = vec![
        property("og:title", "The Rock"),
        property("og:type", "video.movie"),
        property("og:url", "http://www.imdb.com/title/tt0117500/"),
        with_extra(
            property("og:image", "http://example.com/rock.jpg"),
            vec![
                property("og:image:width", "300"),
                property("og:image:height", "300"),
            ],
        ),
        property("og:image", "http://example.com/rock2.jpg"),
        with_extra(
            property("og:image", "http://example.com/rock3.jpg"),
            vec![property("og:image:height", "1000")],
        ),
        name("keywords", "a,b,c"),
        name("unusual", "special"),
    ];

    assert_eq!(page.meta_data(), expected.as_slice());
}

#[test]
fn test_product_page_schema() {
    let page = Page::parse("https://www.example.com", &read_fixture("product.html"));

    let mut rating = scope(
        "http://schema.org/AggregateRating",
        vec![
            prop("meta", "ratingValue", "4"),
            prop("meta", "bestRating", "5"),
            prop("span", "ratingCount", "25"),
        ],
    );
    rating.item_prop = Some("reviews".to_string());

    let mut offer = scope(
        "http://schema.org/Offer",
        vec![
            prop("span", "name", "Blend-O-Matic"),
            prop("span", "price", "$19.95"),
        ],
    );
    offer.children.push(rating);

    let mut start = prop("time", "startDate", "May 8, 7:30pm");
    start.datetime = Some("2011-05-08T19:30".to_string());
    let event = scope(
        "http://schema.org/Event",
        vec![
            prop("div", "name", "Spinal Tap"),
            prop(
                "span",
                "description",
                "One of the loudest bands ever reunites for an unforgettable two-day show.",
            ),
            start,
        ],
    );

    let person = |href: &str, label: &str| {
        let mut url = prop("a", "url", label);
        url.href = Some(href.to_string());
        scope("http://schema.org/Person", vec![url])
    };

    let expected = vec![
        offer,
        event,
        person("alice.html", "Alice Jones"),
        person("bob.html", "Bob Smith"),
    ];

    assert_eq!(page.schema_data(), expected.as_slice());
}

#[test]
fn test_article_page() {
    let page = Page::parse("https://example.com/article", &read_fixture("article.html"));

    assert_eq!(page.title(), "Sample Article | News Site");
    assert_eq!(
        page.text(),
        "Home Related Sample Article By Jane Doe March 1, 2024 \
         This is the first paragraph. This is the second paragraph."
    );

    let keys: Vec<_> = page.meta_data().iter().map(|m| m.key.as_str()).collect();
    assert_eq!(
        keys,
        [
            "viewport",
            "og:site_name",
            "og:title",
            "article:published_time",
            "article:tag",
            "article:tag",
            "twitter:card",
            "twitter:image",
        ]
    );
    let twitter_image = &page.meta_data()[7];
    assert_eq!(twitter_image.extra.len(), 1);
    assert_eq!(twitter_image.extra[0].name(), Some("twitter:image:alt"));
    assert_eq!(twitter_image.extra[0].content, "A sample image");

    let schema = page.schema_data();
    assert_eq!(schema.len(), 1);
    let article = &schema[0];
    assert_eq!(article.tag_name, "article");
    let names: Vec<_> = article.props.iter().map(|p| p.item_prop.as_str()).collect();
    assert_eq!(names, ["headline", "datePublished", "image", "articleBody"]);
    assert_eq!(article.props[1].datetime.as_deref(), Some("2024-03-01"));
    assert_eq!(article.props[2].content, "/images/sample.jpg");
    assert!(article.props[3].content.contains("first paragraph"));

    assert_eq!(article.children.len(), 1);
    let author = &article.children[0];
    assert_eq!(author.tag_name, "span");
    assert_eq!(author.item_prop.as_deref(), Some("author"));
    assert_eq!(author.props.len(), 1);
    assert_eq!(author.props[0].href.as_deref(), Some("/authors/jane"));
    assert_eq!(author.props[0].content, "Jane Doe");
}

#[test]
fn test_extraction_is_deterministic() {
    let html = read_fixture("product.html");

    let first = Page::read("https://www.example.com", html.as_bytes());
    let second = Page::read("https://www.example.com", html.as_bytes());

    assert_eq!(first, second);
}

#[test]
fn test_malformed_html() {
    let html = "<html><head><title>Broken</title><meta property=og:title content=Broken>\
                <body><div itemscope><p itemprop=name>Unclosed tags<div>More content";
    let page = Page::parse("https://example.com/broken", html);

    assert_eq!(page.title(), "Broken");
    assert_eq!(page.meta_data()[0].content, "Broken");
    assert!(page.text().contains("Unclosed tags More content"));
    assert_eq!(page.schema_data().len(), 1);
    assert_eq!(page.schema_data()[0].props[0].item_prop, "name");
}

#[cfg(feature = "fuzz")]
mod fuzz {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_parse_never_panics(html in ".*") {
            let _ = Page::parse("https://example.com", &html);
        }

        #[test]
        fn test_parse_is_deterministic(html in ".*") {
            let first = Page::parse("https://example.com", &html);
            let second = Page::parse("https://example.com", &html);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn test_extra_is_one_level_deep(
            keys in proptest::collection::vec("og:image(:width|:height)?", 0..12)
        ) {
            let head: String = keys
                .iter()
                .map(|key| format!(r#"<meta property="{key}" content="x">"#))
                .collect();
            let page = Page::parse("https://example.com", &format!("<html><head>{head}</head></html>"));

            prop_assert!(page.meta_data().iter().all(|m| m.extra.iter().all(|e| e.extra.is_empty())));
            let total: usize = page.meta_data().iter().map(|m| 1 + m.extra.len()).sum();
            prop_assert_eq!(total, keys.len());
        }
    }
}
