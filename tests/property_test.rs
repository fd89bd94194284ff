//! Property tests for the renderer.

use proptest::prelude::*;

use pagecraft::compiler::{is_likely_diagram, language_from_class};
use pagecraft::ir::text_content;
use pagecraft::{Component, Fragment, render_html, render_markdown};

/// Tag soup built from the tags the renderer dispatches on plus a few it
/// passes through, with unbalanced open/close tags mixed in.
fn tag_soup() -> impl Strategy<Value = String> {
    let tag = prop::sample::select(vec![
        "h1", "h4", "p", "ul", "ol", "li", "blockquote", "a", "img", "table", "tr", "td", "pre",
        "code", "mark", "div", "span", "br",
    ]);
    let piece = prop_oneof![
        tag.clone().prop_map(|t| format!("<{t}>")),
        tag.clone().prop_map(|t| format!("</{t}>")),
        tag.prop_map(|t| format!("<{t} class=\"language-mermaid\" href=\"/x\">")),
        "[a-zA-Z &;<>#0-9\n]{0,12}",
        Just("graph TD\n".to_string()),
        Just("<!-- c -->".to_string()),
    ];
    prop::collection::vec(piece, 0..24).prop_map(|pieces| pieces.concat())
}

proptest! {
    #[test]
    fn prop_render_is_total_on_arbitrary_strings(input in any::<String>()) {
        let _ = render_html(&input);
    }

    #[test]
    fn prop_render_is_total_on_tag_soup(input in tag_soup()) {
        let out = render_html(&input);
        prop_assert_eq!(&out, &render_html(&input));
    }

    #[test]
    fn prop_markdown_is_total(input in any::<String>()) {
        let _ = render_markdown(&input);
    }

    #[test]
    fn prop_paragraph_text_is_preserved(body in "[a-zA-Z0-9 .,!?]{1,40}") {
        let out = render_html(&format!("<p>{body}</p>"));
        prop_assert_eq!(text_content(&out), body);
    }

    #[test]
    fn prop_escaped_text_round_trips(body in "[a-z<>&\"' ]{1,40}") {
        let escaped = body
            .replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;");
        let out = render_html(&format!("<blockquote>{escaped}</blockquote>"));
        prop_assert_eq!(text_content(&out), body);
    }

    #[test]
    fn prop_passthrough_keeps_attributes(
        values in prop::collection::vec("[a-z0-9 ]{0,8}", 1..5)
    ) {
        let attrs: String = values
            .iter()
            .enumerate()
            .map(|(i, v)| format!(" data-k{i}=\"{v}\""))
            .collect();
        let out = render_html(&format!("<section{attrs}>x</section>"));

        let expected: Vec<(String, String)> = values
            .iter()
            .enumerate()
            .map(|(i, v)| (format!("data-k{i}"), v.clone()))
            .collect();
        let instruction = out[0].as_instruction().expect("section");
        prop_assert_eq!(
            &instruction.component,
            &Component::RawElement { tag_name: "section".to_string(), attributes: expected }
        );
    }

    #[test]
    fn prop_images_never_have_children(input in tag_soup()) {
        let out = render_html(&format!("{input}<img src=\"a\">{input}"));

        fn check(fragments: &[Fragment]) -> bool {
            fragments.iter().all(|f| match f {
                Fragment::Text(_) => true,
                Fragment::Instruction(i) => match i.component {
                    Component::Image { .. } => i.children.is_empty(),
                    _ => check(&i.children),
                },
            })
        }
        prop_assert!(check(&out));
    }

    #[test]
    fn prop_code_blocks_carry_no_children(input in tag_soup()) {
        fn check(fragments: &[Fragment]) -> bool {
            fragments.iter().all(|f| match f {
                Fragment::Text(_) => true,
                Fragment::Instruction(i) => match i.component {
                    Component::CodeBlock { .. } | Component::DiagramBlock { .. } => {
                        i.children.is_empty()
                    }
                    _ => check(&i.children),
                },
            })
        }
        prop_assert!(check(&render_html(&input)));
    }

    #[test]
    fn prop_diagram_detection_ignores_leading_blank_lines(
        blanks in prop::collection::vec("[ \t]{0,4}", 0..4)
    ) {
        let text = format!("{}\nsequenceDiagram\n  A->>B: hi", blanks.join("\n"));
        prop_assert!(is_likely_diagram(&text));
    }

    #[test]
    fn prop_language_is_first_language_token(
        before in "[a-z]{1,6}",
        lang in "[a-z0-9+#]{1,8}",
        after in "[a-z-]{0,12}"
    ) {
        let class = format!("{before} language-{lang} {after}");
        prop_assert_eq!(language_from_class(&class), lang.as_str());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn prop_deep_nesting_is_total(
        tag in prop::sample::select(vec!["div", "blockquote", "ul", "li", "span", "a", "pre"]),
        depth in 0usize..5_000
    ) {
        let open = format!("<{tag}>").repeat(depth);
        let close = format!("</{tag}>").repeat(depth);
        let out = render_html(&format!("{open}x{close}"));
        prop_assert_eq!(text_content(&out), "x");
    }
}
