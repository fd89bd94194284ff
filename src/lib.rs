//! # pagecraft
//!
//! Turn markdown-generated HTML into a tree of rich UI component
//! instructions.
//!
//! Blog posts are authored in markdown and converted to HTML. Instead of
//! injecting that HTML verbatim, a host UI walks the instruction tree this
//! crate produces and draws each node with its own component library:
//! headings become typography, fenced code becomes a highlighted code block,
//! and mermaid definitions become diagrams.
//!
//! ## Quick Start
//!
//! ```
//! use pagecraft::{Component, Target, render_html};
//!
//! let out = render_html(concat!(
//!     "<h2>Flow</h2>",
//!     r#"<pre><code class="language-mermaid">graph TD; A-->B;</code></pre>"#,
//! ));
//!
//! let targets: Vec<Target> = out
//!     .iter()
//!     .filter_map(|f| f.as_instruction())
//!     .map(|i| i.target())
//!     .collect();
//! assert_eq!(targets, vec![Target::Typography, Target::DiagramBlock]);
//!
//! let diagram = out[1].as_instruction().unwrap();
//! assert_eq!(
//!     diagram.component,
//!     Component::DiagramBlock { definition: "graph TD; A-->B;".to_string() }
//! );
//! ```
//!
//! ## Markdown input
//!
//! ```
//! use pagecraft::{Target, render_markdown};
//!
//! let out = render_markdown("---\ntitle: Post\n---\n\n```rust\nfn main() {}\n```\n");
//! assert_eq!(out[0].as_instruction().unwrap().target(), Target::CodeBlock);
//! ```
//!
//! ## Modules
//!
//! - [`compiler`]: HTML parsing and the tag-to-component transform
//! - [`ir`]: the instruction tree ([`Fragment`], [`Instruction`], [`Component`])
//! - [`markdown`]: markdown to HTML via pulldown-cmark
//! - [`export`]: outline and statistics views of a rendered tree

pub mod compiler;
pub mod error;
pub mod export;
pub mod ir;
pub mod markdown;
pub(crate) mod util;

#[cfg(feature = "wasm")]
pub mod wasm;

use std::path::Path;

pub use compiler::{parse_html, render_html, render_html_bytes};
pub use error::{Error, Result};
pub use ir::{Component, Fragment, Instruction, Target, TypographyLevel};
pub use markdown::render_markdown;

/// Render a file from disk.
///
/// Files ending in `.md` or `.markdown` are converted from markdown first and
/// must be UTF-8. Anything else is treated as HTML and decoded from its
/// declared charset.
pub fn render_file(path: impl AsRef<Path>) -> Result<Vec<Fragment>> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;

    if is_markdown_path(path) {
        let text = String::from_utf8(bytes).map_err(|e| {
            Error::InvalidInput(format!("{} is not valid UTF-8: {e}", path.display()))
        })?;
        Ok(render_markdown(&text))
    } else {
        Ok(render_html_bytes(&bytes))
    }
}

/// Whether a path names a markdown source, by extension.
pub fn is_markdown_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("md") || ext.eq_ignore_ascii_case("markdown"))
}
