//! Document head updates.
//!
//! [`use_seo`] projects a view's [`SeoPage`] through the site defaults and
//! upserts the result into `<head>`. When the view is torn down the defaults
//! are put back and the article JSON-LD block is removed.

use folio_core::{MetaTag, SeoDocument, SeoPage};
use leptos::prelude::*;
use wasm_bindgen::JsValue;
use web_sys::{Document, HtmlHeadElement};

use crate::site::use_site;

const CANONICAL_SELECTOR: &str = "link[rel=\"canonical\"]";
const JSON_LD_SELECTOR: &str = "script[data-seo=\"dynamic\"]";

/// Keep the document head in sync with `page` while the calling view lives.
pub fn use_seo<F>(page: F)
where
    F: Fn() -> SeoPage + Send + Sync + 'static,
{
    let site = use_site();

    let defaults = site.seo.clone();
    let document = Memo::new(move |_| defaults.document(&page()));
    Effect::new(move |_| document.with(apply_document));

    let defaults = site.seo;
    on_cleanup(move || apply_document(&defaults.default_document()));
}

/// Write `seo` into the live document. Applying the same document twice
/// leaves the DOM unchanged.
pub fn apply_document(seo: &SeoDocument) {
    let document = document();
    document.set_title(&seo.title);

    let Some(head) = document.head() else {
        log::warn!("document has no <head>, skipping metadata");
        return;
    };

    let result = seo
        .tags
        .iter()
        .try_for_each(|tag| upsert_meta(&document, &head, tag))
        .and_then(|()| upsert_canonical(&document, &head, &seo.canonical))
        .and_then(|()| replace_json_ld(&document, &head, seo.json_ld.as_ref()));

    if let Err(err) = result {
        log::warn!("failed to update document metadata: {err:?}");
    }
}

fn upsert_meta(document: &Document, head: &HtmlHeadElement, tag: &MetaTag) -> Result<(), JsValue> {
    let element = match document.query_selector(&tag.selector())? {
        Some(element) => element,
        None => {
            let element = document.create_element("meta")?;
            element.set_attribute(tag.attr.as_str(), tag.key)?;
            head.append_child(&element)?;
            element
        }
    };
    element.set_attribute("content", &tag.content)
}

fn upsert_canonical(document: &Document, head: &HtmlHeadElement, href: &str) -> Result<(), JsValue> {
    let element = match document.query_selector(CANONICAL_SELECTOR)? {
        Some(element) => element,
        None => {
            let element = document.create_element("link")?;
            element.set_attribute("rel", "canonical")?;
            head.append_child(&element)?;
            element
        }
    };
    element.set_attribute("href", href)
}

fn replace_json_ld(
    document: &Document,
    head: &HtmlHeadElement,
    json_ld: Option<&serde_json::Value>,
) -> Result<(), JsValue> {
    if let Some(existing) = document.query_selector(JSON_LD_SELECTOR)? {
        existing.remove();
    }

    let Some(json_ld) = json_ld else {
        return Ok(());
    };

    let script = document.create_element("script")?;
    script.set_attribute("type", "application/ld+json")?;
    script.set_attribute("data-seo", "dynamic")?;
    script.set_text_content(Some(&json_ld.to_string()));
    head.append_child(&script)?;
    Ok(())
}
