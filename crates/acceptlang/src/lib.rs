#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]

mod helper;
mod language;

pub mod error;
pub mod extension;
pub mod header;
pub mod quality;
pub mod selector;
pub mod strategy;
pub mod tag;

pub use language::Language;
pub use selector::{Outcome, Resolution, Selector, SelectorConfig};

/// A value which is initialized on the first access.
pub type LazyLock<T> = std::sync::LazyLock<T>;

/// An allocation-optimized string.
pub type SharedString = std::borrow::Cow<'static, str>;
