//! HTML to render-instruction pipeline.
//!
//! This module parses an HTML fragment with html5ever into an arena tree and
//! walks it, re-emitting each recognized tag as a rich component.
//!
//! # Example
//!
//! ```
//! use pagecraft::compiler::render_html;
//! use pagecraft::ir::{Component, Fragment, TypographyLevel};
//!
//! let out = render_html("<h3>Title</h3>");
//! let heading = out[0].as_instruction().unwrap();
//! assert_eq!(
//!     heading.component,
//!     Component::Typography { level: TypographyLevel::Heading(3) }
//! );
//! assert_eq!(heading.children, vec![Fragment::Text("Title".to_string())]);
//! ```

mod arena;
mod classify;
mod transform;
mod tree_sink;

pub use arena::{ArenaDom, ArenaNode, ArenaNodeData, ArenaNodeId, Attribute, ChildrenIter};
pub use classify::{
    DIAGRAM_KEYWORDS, DIAGRAM_LANGUAGE, is_diagram_language, is_likely_diagram,
    language_from_class,
};
pub use transform::{MAX_RENDER_DEPTH, transform};

use html5ever::driver::ParseOpts;
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;

use crate::ir::Fragment;
use tree_sink::ArenaSink;

/// Parse HTML into an arena tree.
///
/// Parsing never fails: malformed markup is repaired the way browsers repair
/// it, and fragments are wrapped in implied `html`/`head`/`body` elements.
pub fn parse_html(html: &str) -> ArenaDom {
    let sink = ArenaSink::new();
    parse_document(sink, ParseOpts::default())
        .from_utf8()
        .one(html.as_bytes())
        .into_dom()
}

/// Render an HTML fragment into rich-component instructions.
///
/// This is the main entry point. Empty input yields an empty forest. The
/// function is pure and total: every input produces a tree and nothing
/// panics or errors.
///
/// # Example
///
/// ```
/// use pagecraft::compiler::render_html;
/// use pagecraft::ir::Component;
///
/// let out = render_html(r#"<pre><code class="language-rust">fn main() {}</code></pre>"#);
/// assert_eq!(
///     out[0].as_instruction().unwrap().component,
///     Component::CodeBlock {
///         code: "fn main() {}".to_string(),
///         language: "rust".to_string(),
///     }
/// );
///
/// assert!(render_html("").is_empty());
/// ```
pub fn render_html(html: &str) -> Vec<Fragment> {
    if html.is_empty() {
        return Vec::new();
    }

    let dom = parse_html(html);
    let fragments = transform(&dom);
    tracing::debug!(
        input_bytes = html.len(),
        source_nodes = dom.len(),
        top_level = fragments.len(),
        "rendered html"
    );
    fragments
}

/// Render HTML bytes into instructions.
///
/// Convenience wrapper that decodes the bytes first: UTF-8 when valid,
/// otherwise the charset declared in the markup, otherwise Windows-1252.
pub fn render_html_bytes(html: &[u8]) -> Vec<Fragment> {
    let hint = crate::util::sniff_charset(html);
    let text = crate::util::decode_text(html, hint);
    render_html(&text)
}
