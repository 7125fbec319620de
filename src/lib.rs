pub mod charset;
pub mod config;
pub mod extractor;
pub mod fetcher;

pub use extractor::{ItemProp, ItemScope, Meta, MetaKey, Page};
