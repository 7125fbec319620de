#![no_main]

use libfuzzer_sys::fuzz_target;

use metascraper::Page;

fuzz_target!(|data: &[u8]| {
    let page = Page::read("https://example.com", data);
    for meta in page.meta_data() {
        assert!(meta.extra.iter().all(|extra| extra.extra.is_empty()));
    }
});
