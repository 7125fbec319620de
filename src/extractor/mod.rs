pub mod meta;
pub mod microdata;
pub mod model;
pub mod page;
pub mod repair;
pub mod text;

#[cfg(test)]
mod tests;

pub use model::{ItemProp, ItemScope, Meta, MetaKey};
pub use page::Page;
