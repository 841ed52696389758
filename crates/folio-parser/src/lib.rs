//! Folio Parser Library
//!
//! Turns blog Markdown into HTML with a heading outline.
//!
//! - [`toc`] - heading extraction and the [`slugify`] id scheme
//! - [`markdown`] - pulldown-cmark rendering with stable heading ids
//! - [`syntax`] - syntect highlighting for fenced code blocks

pub mod markdown;
pub mod syntax;
pub mod toc;

pub use markdown::{MarkdownRenderer, RenderedDocument};
pub use syntax::{SyntaxError, SyntaxHighlighter};
pub use toc::{HeadingItem, extract_headings, slugify};
