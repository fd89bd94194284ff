//! Markdown front end.
//!
//! Posts are written in markdown; the renderer consumes HTML. This module is
//! the thin adapter between the two:
//!
//! - [`to_html`]: markdown → HTML via pulldown-cmark, with the extensions
//!   blog posts rely on (tables, footnotes, strikethrough, task lists,
//!   heading attributes)
//! - [`split_front_matter`]: cut a leading `---` metadata block off the body
//! - [`render_markdown`]: markdown straight to render instructions
//!
//! Front matter contents are left to the caller; they are never rendered.

mod front_matter;

pub use front_matter::{split_front_matter, strip_front_matter};

use pulldown_cmark::{Options, Parser, html};

use crate::compiler::render_html;
use crate::ir::Fragment;

/// Extensions enabled for post bodies.
pub fn options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_HEADING_ATTRIBUTES
}

/// Convert markdown to HTML.
///
/// Front matter is stripped first. Fenced code blocks come out as
/// `<pre><code class="language-...">`, which the renderer turns into code or
/// diagram blocks.
///
/// # Examples
///
/// ```
/// use pagecraft::markdown::to_html;
///
/// assert_eq!(to_html("# Hi"), "<h1>Hi</h1>\n");
/// assert_eq!(
///     to_html("```rust\nfn main() {}\n```"),
///     "<pre><code class=\"language-rust\">fn main() {}\n</code></pre>\n"
/// );
/// ```
pub fn to_html(markdown: &str) -> String {
    let body = strip_front_matter(markdown);
    let parser = Parser::new_ext(body, options());

    let mut out = String::with_capacity(body.len() + body.len() / 2);
    html::push_html(&mut out, parser);
    out
}

/// Convert markdown to HTML and render it into instructions.
///
/// # Examples
///
/// ```
/// use pagecraft::ir::Component;
/// use pagecraft::markdown::render_markdown;
///
/// let out = render_markdown("```mermaid\ngraph TD\n  A-->B\n```");
/// assert_eq!(
///     out[0].as_instruction().unwrap().component,
///     Component::DiagramBlock { definition: "graph TD\n  A-->B\n".to_string() }
/// );
/// ```
pub fn render_markdown(markdown: &str) -> Vec<Fragment> {
    let html = to_html(markdown);
    tracing::trace!(
        markdown_bytes = markdown.len(),
        html_bytes = html.len(),
        "converted markdown"
    );
    render_html(&html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{Component, PropValue, Target, TypographyLevel};

    fn instructions(fragments: &[Fragment]) -> Vec<&crate::ir::Instruction> {
        fragments.iter().filter_map(Fragment::as_instruction).collect()
    }

    #[test]
    fn test_front_matter_is_not_rendered() {
        let html = to_html("---\ntitle: Hidden\n---\n\nVisible\n");
        assert_eq!(html, "<p>Visible</p>\n");
    }

    #[test]
    fn test_tables_are_enabled() {
        let out = render_markdown("| a | b |\n|---|---|\n| 1 | 2 |\n");
        let targets: Vec<_> = instructions(&out).iter().map(|i| i.target()).collect();
        assert_eq!(targets, vec![Target::Table]);
    }

    #[test]
    fn test_post_body_maps_to_components() {
        let out = render_markdown(
            "## Setup\n\nRun `cargo build` first.\n\n> quoted\n\n1. one\n2. two\n",
        );
        let top = instructions(&out);

        assert_eq!(
            top[0].component,
            Component::Typography {
                level: TypographyLevel::Heading(2)
            }
        );
        let inline = top[1].child_instructions().next().expect("inline code");
        assert_eq!(inline.component, Component::InlineCode);
        assert_eq!(inline.text_content(), "cargo build");
        assert_eq!(top[2].target(), Target::Blockquote);
        assert_eq!(top[3].component, Component::List { ordered: true });
    }

    #[test]
    fn test_indented_code_block_has_no_language() {
        let out = render_markdown("    plain code\n");
        assert_eq!(
            instructions(&out)[0].component,
            Component::CodeBlock {
                code: "plain code\n".to_string(),
                language: String::new()
            }
        );
    }

    #[test]
    fn test_task_list_checkbox_passes_through() {
        let out = render_markdown("- [x] done\n");
        let list = instructions(&out)[0];
        let item = list.child_instructions().next().expect("item");
        let checkbox = item.child_instructions().next().expect("checkbox");
        assert_eq!(checkbox.target(), Target::RawElement);
        assert_eq!(checkbox.prop("tagName"), Some(PropValue::Str("input")));
        assert_eq!(checkbox.prop("type"), Some(PropValue::Str("checkbox")));
    }
}
