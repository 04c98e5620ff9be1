// src/core/html.rs
//! Thin layer over `scraper` for the handful of tree walks the extractor does.
//!
//! Parsing goes through html5ever's WHATWG tree builder, which never fails:
//! unclosed tags are closed, stray end tags dropped, and table rows that are
//! not wrapped in a `<tbody>` get an implied one. Every "Nth tbody" lookup
//! below counts on the repaired tree.

use std::path::PathBuf;
use std::sync::LazyLock;

use scraper::{ElementRef, Html, Node, Selector};
use tracing::debug;

use crate::error::{Error, Result};

static TBODY: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tbody").expect("tbody selector"));
static TR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr").expect("tr selector"));

/// Build a tree from possibly broken markup. Recovered parse errors are
/// logged, not returned.
pub fn parse_document(text: &str) -> Html {
    let doc = Html::parse_document(text);
    if !doc.errors.is_empty() {
        debug!(errors = doc.errors.len(), "recovered from malformed markup");
    }
    doc
}

/// The `n`-th (1-based) `<tbody>` in document order, nested ones included.
pub fn nth_tbody(doc: &Html, n: usize) -> Result<ElementRef<'_>> {
    doc.select(&TBODY)
        .nth(n.saturating_sub(1))
        .ok_or_else(|| Error::MissingTableBody {
            path: PathBuf::new(),
            found: doc.select(&TBODY).count(),
        })
}

/// Every `<tr>` below `el`, in document order.
pub fn rows(el: ElementRef<'_>) -> impl Iterator<Item = ElementRef<'_>> {
    el.select(&TR)
}

/// Direct child elements (the cells, for a row). Whitespace text between
/// cells is skipped.
pub fn child_elements(el: ElementRef<'_>) -> impl Iterator<Item = ElementRef<'_>> {
    el.children().filter_map(ElementRef::wrap)
}

/// Number of direct child nodes of any kind (text, elements, comments).
pub fn child_count(el: ElementRef<'_>) -> usize {
    el.children().count()
}

/// Rendered text of the `i`-th direct child node of `el`.
///
/// Text and comment nodes give their content verbatim; an element gives the
/// concatenation of its descendant text (so `<img>` renders as "").
pub fn child_text(el: ElementRef<'_>, i: usize) -> Option<String> {
    let node = el.children().nth(i)?;
    let text = match node.value() {
        Node::Text(t) => s!(&**t),
        Node::Comment(c) => s!(&**c),
        Node::Element(_) => ElementRef::wrap(node)
            .map(|e| e.text().collect::<String>())
            .unwrap_or_default(),
        _ => s!(),
    };
    Some(text)
}
