//! Transform an [`ArenaDom`] into render instructions.

use super::arena::{ArenaDom, ArenaNodeData, ArenaNodeId};
use super::classify::{is_diagram_language, is_likely_diagram, language_from_class};
use crate::ir::{Component, Fragment, Instruction, TypographyLevel};

/// Deepest element nesting rendered as instructions.
///
/// Elements nested deeper than this are flattened into a single text leaf
/// holding their text content. This bounds recursion here and in every
/// consumer that walks the output tree.
pub const MAX_RENDER_DEPTH: usize = 256;

/// Tags with a rich counterpart. Everything else is a raw passthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tag {
    Typography(TypographyLevel),
    UnorderedList,
    OrderedList,
    ListItem,
    Blockquote,
    Anchor,
    Image,
    Table,
    Pre,
    Code,
    Other,
}

impl Tag {
    fn classify(local_name: &str) -> Tag {
        if let Some(level) = TypographyLevel::from_heading_tag(local_name) {
            return Tag::Typography(level);
        }
        match local_name {
            "p" => Tag::Typography(TypographyLevel::Body),
            "ul" => Tag::UnorderedList,
            "ol" => Tag::OrderedList,
            "li" => Tag::ListItem,
            "blockquote" => Tag::Blockquote,
            "a" => Tag::Anchor,
            "img" => Tag::Image,
            "table" => Tag::Table,
            "pre" => Tag::Pre,
            "code" => Tag::Code,
            _ => Tag::Other,
        }
    }
}

/// Walks the source tree, one call per render.
struct RenderContext<'a> {
    dom: &'a ArenaDom,
}

impl<'a> RenderContext<'a> {
    fn new(dom: &'a ArenaDom) -> Self {
        Self { dom }
    }

    /// Render the document's content.
    ///
    /// The children of `<html>` are walked in order. `<head>` and `<body>`
    /// are unwrapped, so content the parser hoists into `<head>` (`<style>`,
    /// `<title>`) is kept. Any other child, such as a `<frameset>`, is
    /// rendered as a node of its own.
    fn render(self) -> Vec<Fragment> {
        let document = self.dom.document();
        let Some(html) = self
            .dom
            .children(document)
            .find(|&id| self.is_tag(id, "html"))
        else {
            return self.render_children(document, false, 0);
        };

        let mut out = Vec::new();
        for child in self.dom.children(html) {
            if self.is_tag(child, "head") || self.is_tag(child, "body") {
                out.extend(self.render_children(child, false, 0));
            } else if let Some(fragment) = self.render_node(child, false, 0) {
                out.push(fragment);
            }
        }
        out
    }

    fn is_tag(&self, id: ArenaNodeId, tag: &str) -> bool {
        self.dom.get(id).is_some_and(|node| match &node.data {
            ArenaNodeData::Element { name, .. } => name.local.as_ref().eq_ignore_ascii_case(tag),
            _ => false,
        })
    }

    /// Render the children of a source node, each at nesting `depth`.
    ///
    /// `inside_pre` is true when `parent` is a `<pre>` element; only a
    /// direct `<code>` child consults it.
    fn render_children(
        &self,
        parent: ArenaNodeId,
        inside_pre: bool,
        depth: usize,
    ) -> Vec<Fragment> {
        self.dom
            .children(parent)
            .filter_map(|child| self.render_node(child, inside_pre, depth))
            .collect()
    }

    fn render_node(&self, id: ArenaNodeId, inside_pre: bool, depth: usize) -> Option<Fragment> {
        let node = self.dom.get(id)?;
        match &node.data {
            ArenaNodeData::Text(text) => Some(Fragment::Text(text.clone())),
            ArenaNodeData::Element { .. } if depth >= MAX_RENDER_DEPTH => {
                let text = self.dom.text_content(id);
                tracing::trace!(depth, "flattened element nested too deep");
                (!text.is_empty()).then_some(Fragment::Text(text))
            }
            ArenaNodeData::Element { name, .. } => {
                let tag = name.local.as_ref().to_ascii_lowercase();
                let instruction = self.render_element(id, &tag, inside_pre, depth);
                Some(Fragment::Instruction(instruction))
            }
            ArenaNodeData::Document | ArenaNodeData::Comment(_) => None,
        }
    }

    fn render_element(
        &self,
        id: ArenaNodeId,
        tag: &str,
        inside_pre: bool,
        depth: usize,
    ) -> Instruction {
        match Tag::classify(tag) {
            Tag::Typography(level) => self.container(id, Component::Typography { level }, depth),
            Tag::UnorderedList => self.container(id, Component::List { ordered: false }, depth),
            Tag::OrderedList => self.container(id, Component::List { ordered: true }, depth),
            Tag::ListItem => self.container(id, Component::ListItem, depth),
            Tag::Blockquote => self.container(id, Component::Blockquote, depth),
            Tag::Table => self.container(id, Component::Table, depth),
            Tag::Anchor => self.render_link(id, depth),
            Tag::Image => self.render_image(id),
            Tag::Pre => self.render_pre(id, depth),
            Tag::Code => self.render_code(id, inside_pre, depth),
            Tag::Other => self.render_raw(id, tag, depth),
        }
    }

    /// A component whose children are the recursively rendered source children.
    fn container(&self, id: ArenaNodeId, component: Component, depth: usize) -> Instruction {
        Instruction::with_children(component, self.render_children(id, false, depth + 1))
    }

    fn attr_or_empty(&self, id: ArenaNodeId, name: &str) -> String {
        self.dom.get_attr(id, name).unwrap_or_default().to_string()
    }

    fn render_link(&self, id: ArenaNodeId, depth: usize) -> Instruction {
        let href = self.attr_or_empty(id, "href");
        let target = self
            .dom
            .get_attr(id, "target")
            .filter(|t| !t.is_empty())
            .map(str::to_string);

        self.container(id, Component::Link { href, target }, depth)
    }

    fn render_image(&self, id: ArenaNodeId) -> Instruction {
        Instruction::new(Component::Image {
            src: self.attr_or_empty(id, "src"),
            alt: self.attr_or_empty(id, "alt"),
        })
    }

    /// `<pre>`: fenced code, diagram, or plain preformatted text.
    fn render_pre(&self, id: ArenaNodeId, depth: usize) -> Instruction {
        if let Some(code_id) = self.dom.find_descendant_by_tag(id, "code") {
            let class = self.dom.get_attr(code_id, "class").unwrap_or_default();
            let language = language_from_class(class);
            let code = self.dom.text_content(code_id);

            if is_diagram_language(language) {
                tracing::trace!(language, "fenced diagram block");
                return Instruction::new(Component::DiagramBlock { definition: code });
            }

            return Instruction::new(Component::CodeBlock {
                code,
                language: language.to_string(),
            });
        }

        let text = self.dom.text_content(id);
        let trimmed = text.trim();
        if is_likely_diagram(trimmed) {
            tracing::trace!("bare preformatted text sniffed as diagram");
            return Instruction::new(Component::DiagramBlock {
                definition: trimmed.to_string(),
            });
        }

        Instruction::with_children(
            Component::PreformattedBlock,
            self.render_children(id, true, depth + 1),
        )
    }

    /// `<code>`: inline code unless it sits directly inside a `<pre>`.
    fn render_code(&self, id: ArenaNodeId, inside_pre: bool, depth: usize) -> Instruction {
        if inside_pre {
            // Only reachable if a <pre> with a <code> child is walked
            // generically, which render_pre never does.
            let component = Component::RawElement {
                tag_name: "code".to_string(),
                attributes: Vec::new(),
            };
            return self.container(id, component, depth);
        }

        self.container(id, Component::InlineCode, depth)
    }

    /// Passthrough: source tag name, every attribute verbatim, children rendered.
    fn render_raw(&self, id: ArenaNodeId, tag: &str, depth: usize) -> Instruction {
        let attributes = self
            .dom
            .attrs(id)
            .iter()
            .map(|a| {
                let name = match &a.name.prefix {
                    Some(prefix) => format!("{prefix}:{}", a.name.local),
                    None => a.name.local.to_string(),
                };
                (name, a.value.clone())
            })
            .collect();

        let component = Component::RawElement {
            tag_name: tag.to_string(),
            attributes,
        };
        self.container(id, component, depth)
    }
}

/// Render an [`ArenaDom`] into an instruction forest.
pub fn transform(dom: &ArenaDom) -> Vec<Fragment> {
    RenderContext::new(dom).render()
}


#[cfg(test)]
mod tests {
    use html5ever::{LocalName, QualName, ns};

    use super::*;
    use crate::compiler::parse_html;
    use crate::ir::{PropValue, Target};

    fn render(html: &str) -> Vec<Fragment> {
        transform(&parse_html(html))
    }

    fn single(html: &str) -> Instruction {
        let out = render(html);
        assert_eq!(out.len(), 1, "expected one fragment for {html:?}: {out:?}");
        out[0].as_instruction().cloned().expect("instruction")
    }

    fn qname(local: &str) -> QualName {
        QualName::new(None, ns!(html), LocalName::from(local))
    }

    #[test]
    fn test_heading_levels() {
        for level in 1..=6u8 {
            let heading = single(&format!("<h{level}>Title</h{level}>"));
            assert_eq!(
                heading.component,
                Component::Typography {
                    level: TypographyLevel::Heading(level)
                }
            );
            assert_eq!(heading.children, vec![Fragment::Text("Title".to_string())]);
        }
    }

    #[test]
    fn test_lists_and_items() {
        let list = single("<ol><li>one</li><li>two</li></ol>");
        assert_eq!(list.component, Component::List { ordered: true });
        let items: Vec<_> = list.child_instructions().collect();
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|i| i.component == Component::ListItem));
        assert_eq!(items[1].text_content(), "two");

        let list = single("<ul><li>x</li></ul>");
        assert_eq!(list.component, Component::List { ordered: false });
    }

    #[test]
    fn test_blockquote_and_table_wrap_children() {
        let quote = single("<blockquote><p>quoted</p></blockquote>");
        assert_eq!(quote.target(), Target::Blockquote);
        let inner = quote.child_instructions().next().map(|i| i.target());
        assert_eq!(inner, Some(Target::Typography));

        let table = single("<table><tr><td>cell</td></tr></table>");
        assert_eq!(table.target(), Target::Table);
        // The parser inserts an implied <tbody>, which passes through raw.
        let tbody = table.child_instructions().next().expect("tbody");
        assert_eq!(tbody.prop("tagName"), Some(PropValue::Str("tbody")));
        assert_eq!(table.text_content(), "cell");
    }

    #[test]
    fn test_link_props() {
        let link = single(r#"<a href="/x" target="_blank">go</a>"#);
        assert_eq!(
            link.component,
            Component::Link {
                href: "/x".to_string(),
                target: Some("_blank".to_string())
            }
        );

        let link = single(r#"<a target="">go</a>"#);
        assert_eq!(
            link.component,
            Component::Link {
                href: String::new(),
                target: None
            }
        );
    }

    #[test]
    fn test_image_has_no_children() {
        let out = render(r#"<p><img src="/a.png"></p>"#);
        let image = out[0]
            .as_instruction()
            .and_then(|p| p.child_instructions().next())
            .expect("image");
        assert_eq!(
            image.component,
            Component::Image {
                src: "/a.png".to_string(),
                alt: String::new()
            }
        );
        assert!(image.children.is_empty());
    }

    #[test]
    fn test_code_block_takes_text_not_markup() {
        let block =
            single(r#"<pre><code class="language-html">&lt;b&gt;<span>x</span></code></pre>"#);
        assert_eq!(
            block.component,
            Component::CodeBlock {
                code: "<b>x".to_string(),
                language: "html".to_string()
            }
        );
        assert!(block.children.is_empty());
    }

    #[test]
    fn test_nested_code_inside_pre_is_found() {
        let block = single("<pre><span><code class=\"language-sh\">ls</code></span></pre>");
        assert_eq!(
            block.component,
            Component::CodeBlock {
                code: "ls".to_string(),
                language: "sh".to_string()
            }
        );
    }

    #[test]
    fn test_bare_pre_walks_children() {
        let block = single("<pre>plain <em>text</em></pre>");
        assert_eq!(block.component, Component::PreformattedBlock);
        assert_eq!(block.children[0], Fragment::Text("plain ".to_string()));
        let em = block.children[1].as_instruction().expect("em");
        assert_eq!(em.prop("tagName"), Some(PropValue::Str("em")));
    }

    #[test]
    fn test_inline_code_outside_pre() {
        let code = single("<code>x</code>");
        assert_eq!(code.component, Component::InlineCode);
        assert_eq!(code.text_content(), "x");
    }

    #[test]
    fn test_code_directly_under_pre_in_generic_walk_is_raw() {
        // Build the tree by hand: render_children with inside_pre = true is
        // the only way to reach this branch.
        let mut dom = ArenaDom::new();
        let pre = dom.create_element(qname("pre"), vec![]);
        let code = dom.create_element(qname("code"), vec![]);
        dom.append(dom.document(), pre);
        dom.append(pre, code);
        dom.append_text(code, "x");

        let ctx = RenderContext::new(&dom);
        let out = ctx.render_children(pre, true, 0);
        let raw = out[0].as_instruction().expect("raw code");
        assert_eq!(
            raw.component,
            Component::RawElement {
                tag_name: "code".to_string(),
                attributes: Vec::new()
            }
        );
        assert_eq!(raw.text_content(), "x");
    }

    #[test]
    fn test_raw_element_passthrough() {
        let raw = single(r#"<div class="note" id="n1"><p>hi</p></div>"#);
        assert_eq!(
            raw.component,
            Component::RawElement {
                tag_name: "div".to_string(),
                attributes: vec![
                    ("class".to_string(), "note".to_string()),
                    ("id".to_string(), "n1".to_string()),
                ]
            }
        );
        assert_eq!(raw.child_instructions().count(), 1);
    }

    #[test]
    fn test_comments_are_dropped() {
        let out = render("<p>a<!-- hidden -->b</p>");
        let p = out[0].as_instruction().expect("p");
        assert_eq!(p.text_content(), "ab");
        assert!(p.children.iter().all(Fragment::is_text));
    }

    #[test]
    fn test_head_content_is_kept() {
        let out = render("<style>p { color: red }</style><p>body</p>");
        let targets: Vec<_> = out
            .iter()
            .filter_map(Fragment::as_instruction)
            .map(|i| i.target())
            .collect();
        assert_eq!(targets, vec![Target::RawElement, Target::Typography]);
    }

    #[test]
    fn test_empty_dom_renders_nothing() {
        assert!(transform(&ArenaDom::new()).is_empty());
    }

    #[test]
    fn test_frameset_is_rendered_raw() {
        let frameset = single("<frameset><frame src=a></frameset>");
        assert_eq!(frameset.prop("tagName"), Some(PropValue::Str("frameset")));

        let frame = frameset.child_instructions().next().expect("frame");
        assert_eq!(
            frame.component,
            Component::RawElement {
                tag_name: "frame".to_string(),
                attributes: vec![("src".to_string(), "a".to_string())],
            }
        );
    }

    #[test]
    fn test_nesting_past_limit_is_flattened_to_text() {
        let depth = MAX_RENDER_DEPTH + 5;
        let html = format!("{}<b>x</b>y{}", "<div>".repeat(depth), "</div>".repeat(depth));
        let out = render(&html);

        let mut current = out[0].as_instruction().expect("outer div");
        for _ in 1..MAX_RENDER_DEPTH {
            current = current.child_instructions().next().expect("nested div");
        }
        assert_eq!(current.prop("tagName"), Some(PropValue::Str("div")));
        assert_eq!(current.children, vec![Fragment::Text("xy".to_string())]);
    }

    #[test]
    fn test_elements_at_limit_without_text_are_dropped() {
        let depth = MAX_RENDER_DEPTH + 1;
        let html = format!("{}<img>{}", "<div>".repeat(depth), "</div>".repeat(depth));
        let out = render(&html);

        let mut current = out[0].as_instruction().expect("outer div");
        for _ in 1..MAX_RENDER_DEPTH {
            current = current.child_instructions().next().expect("nested div");
        }
        assert!(current.children.is_empty());
    }
}
