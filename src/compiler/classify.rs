//! Content sniffing for preformatted blocks.
//!
//! Two heuristics decide how a `<pre>` is presented: the fence language
//! carried in a `<code>` element's class list, and whether bare
//! preformatted text reads as a Mermaid diagram definition.

/// Keywords that open a Mermaid diagram definition.
///
/// `graph` and `flowchart` require a trailing space (they always take a
/// direction argument); the rest match as bare prefixes.
pub const DIAGRAM_KEYWORDS: &[&str] = &[
    "graph ",
    "flowchart ",
    "sequenceDiagram",
    "classDiagram",
    "stateDiagram",
    "erDiagram",
    "journey",
    "gantt",
    "pie",
    "mindmap",
    "timeline",
    "gitGraph",
    "quadrantChart",
    "requirementDiagram",
    "C4Context",
    "C4Container",
    "C4Component",
    "C4Dynamic",
    "C4Deployment",
];

/// Fence language that is always rendered as a diagram.
pub const DIAGRAM_LANGUAGE: &str = "mermaid";

const LANGUAGE_PREFIX: &str = "language-";

/// Extract the fence language from a `class` attribute value.
///
/// Returns the first whitespace-separated token prefixed `language-`, with
/// the prefix stripped, or `""` when there is none.
///
/// # Examples
///
/// ```
/// use pagecraft::compiler::language_from_class;
///
/// assert_eq!(language_from_class("hljs language-rust"), "rust");
/// assert_eq!(language_from_class("language-"), "");
/// assert_eq!(language_from_class("lang-rust"), "");
/// ```
pub fn language_from_class(class: &str) -> &str {
    class
        .split_whitespace()
        .find_map(|token| token.strip_prefix(LANGUAGE_PREFIX))
        .unwrap_or("")
}

/// Whether a fence language names a diagram rather than source code.
pub fn is_diagram_language(language: &str) -> bool {
    language.eq_ignore_ascii_case(DIAGRAM_LANGUAGE)
}

/// Guess whether preformatted text is a diagram definition.
///
/// Only the first non-blank line is inspected, and only for a keyword
/// prefix (ASCII case-insensitive). The diagram grammar itself is never
/// validated.
///
/// # Examples
///
/// ```
/// use pagecraft::compiler::is_likely_diagram;
///
/// assert!(is_likely_diagram("\n\n  sequenceDiagram\n  A->>B: hi"));
/// assert!(!is_likely_diagram("graphviz is a different tool"));
/// assert!(!is_likely_diagram("   "));
/// ```
pub fn is_likely_diagram(text: &str) -> bool {
    let Some(first_line) = text.lines().map(str::trim).find(|line| !line.is_empty()) else {
        return false;
    };

    DIAGRAM_KEYWORDS
        .iter()
        .any(|keyword| starts_with_ignore_ascii_case(first_line, keyword))
}

fn starts_with_ignore_ascii_case(haystack: &str, prefix: &str) -> bool {
    haystack
        .as_bytes()
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix.as_bytes()))
}
