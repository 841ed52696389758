//! Property-based tests for slugs and the heading outline using proptest.

use folio_parser::{MarkdownRenderer, extract_headings, slugify};
use proptest::prelude::*;

// Strategy: one outline heading line plus a paragraph of filler.
fn section_strategy() -> impl Strategy<Value = (u8, String, String)> {
    (2u8..=3, "[A-Za-z][A-Za-z0-9 ?!&-]{0,20}", "[a-z ]{0,40}")
}

fn document(sections: &[(u8, String, String)]) -> String {
    sections
        .iter()
        .map(|(level, title, body)| {
            format!("{} {title}\n\n{body}\n\n", "#".repeat(usize::from(*level)))
        })
        .collect()
}

proptest! {
    /// Slugifying a slug changes nothing.
    #[test]
    fn slugify_is_idempotent(text in any::<String>()) {
        let once = slugify(&text);
        prop_assert_eq!(slugify(&once), once);
    }

    /// Slugs hold only `[a-z0-9-]`, never start or end with `-`, never repeat it.
    #[test]
    fn slug_charset(text in any::<String>()) {
        let slug = slugify(&text);
        prop_assert!(slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        prop_assert!(!slug.starts_with('-'));
        prop_assert!(!slug.ends_with('-'));
        prop_assert!(!slug.contains("--"));
    }

    /// Every `## ` / `### ` line yields exactly one outline entry, in order.
    #[test]
    fn outline_counts_heading_lines(sections in prop::collection::vec(section_strategy(), 0..12)) {
        let markdown = document(&sections);
        let headings: Vec<_> = extract_headings(&markdown).collect();

        prop_assert_eq!(headings.len(), sections.len());
        for (heading, (level, title, _)) in headings.iter().zip(&sections) {
            prop_assert_eq!(heading.level, *level);
            prop_assert_eq!(heading.text.as_str(), title.trim());
        }
    }

    /// Every outline id names an element in the rendered HTML.
    #[test]
    fn outline_ids_resolve(sections in prop::collection::vec(section_strategy(), 0..12)) {
        let markdown = document(&sections);
        let doc = MarkdownRenderer::new().render(&markdown);
        let outline: Vec<_> = extract_headings(&markdown).collect();

        prop_assert_eq!(&doc.headings, &outline);
        for heading in &outline {
            let anchor = format!("id=\"{}\"", heading.id);
            prop_assert!(doc.html.contains(&anchor), "missing {} in {}", anchor, doc.html);
        }
    }
}
