//! Heading outline extraction.
//!
//! The outline is read from the same pulldown-cmark event stream the renderer
//! consumes, and heading text is collected by the same [`HeadingCollector`],
//! so an outline id always names an element in the rendered HTML. Only ATX
//! headings written as `## Text` or `### Text` enter the outline.

use std::ops::Range;

use pulldown_cmark::{Event, Tag, TagEnd};

use crate::markdown::source_events;

/// One entry of the table of contents.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HeadingItem {
    /// Anchor id, `slugify(text)`.
    pub id: String,

    /// Heading text with inline markup removed.
    pub text: String,

    /// Heading level (2 or 3).
    pub level: u8,
}

impl HeadingItem {
    pub fn new(level: u8, text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            id: slugify(&text),
            text,
            level,
        }
    }

    /// Link target for this heading.
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

/// Convert heading text to an anchor id.
///
/// Lower-cases, drops everything outside `[a-z0-9]`, whitespace and `-`,
/// turns whitespace runs into a single `-`, collapses repeated `-` and trims
/// `-` from both ends. Idempotent.
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());

    for c in lowered.chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            slug.push(c);
        } else if (c.is_whitespace() || c == '-') && !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }

    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Lazily scan `markdown` for level-2 and level-3 headings, in document order.
///
/// Fenced code, setext headings and headings without text are skipped.
pub fn extract_headings(markdown: &str) -> impl Iterator<Item = HeadingItem> + '_ {
    let mut events = source_events(markdown);
    let mut collector = HeadingCollector::default();

    std::iter::from_fn(move || {
        for (event, range) in events.by_ref() {
            if let Some(finished) = collector.observe(markdown, &event, range) {
                if finished.in_outline {
                    return Some(finished.item);
                }
            }
        }
        None
    })
}

/// A heading whose end tag has been seen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FinishedHeading {
    /// Id and text; `level` is the rendered level (1-6).
    pub item: HeadingItem,

    /// Whether the heading belongs in the table of contents.
    pub in_outline: bool,
}

#[derive(Debug)]
struct OpenHeading {
    level: u8,
    text: String,
    in_outline: bool,
}

/// Accumulates heading text from an event stream.
#[derive(Debug, Default)]
pub(crate) struct HeadingCollector {
    open: Option<OpenHeading>,
}

impl HeadingCollector {
    /// Feed one event with its source range. Returns the heading when its end
    /// tag arrives.
    pub(crate) fn observe(
        &mut self,
        source: &str,
        event: &Event<'_>,
        range: Range<usize>,
    ) -> Option<FinishedHeading> {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                let level = *level as u8;
                let line = source.get(range).unwrap_or_default();
                self.open = Some(OpenHeading {
                    level,
                    text: String::new(),
                    in_outline: is_outline_marker(line, level),
                });
                None
            }
            Event::End(TagEnd::Heading(_)) => {
                let open = self.open.take()?;
                let text = open.text.trim().to_string();
                let in_outline = open.in_outline && !text.is_empty();
                Some(FinishedHeading {
                    item: HeadingItem::new(open.level, text),
                    in_outline,
                })
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some(open) = self.open.as_mut() {
                    open.text.push_str(text);
                }
                None
            }
            _ => None,
        }
    }
}

/// True for `## ` / `### ` ATX openers (up to three spaces of indent).
fn is_outline_marker(line: &str, level: u8) -> bool {
    if !(2..=3).contains(&level) {
        return false;
    }

    let indent = line.len() - line.trim_start_matches(' ').len();
    if indent > 3 {
        return false;
    }

    let rest = &line[indent..];
    let hashes = rest.bytes().take_while(|b| *b == b'#').count();
    hashes == usize::from(level) && rest[hashes..].starts_with([' ', '\t'])
}
