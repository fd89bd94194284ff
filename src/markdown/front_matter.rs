//! Front matter detection.
//!
//! Posts may open with a YAML block fenced by `---` lines. Its contents are
//! metadata for the content layer, not body text, so it is cut off before
//! the markdown is converted.

const FENCE: &str = "---";

/// Split a leading `---` fenced block from a markdown document.
///
/// Returns `(front_matter, body)`. The opening fence must be the very first
/// line; the block ends at the next line that is exactly `---` (or `...`).
/// Without a closing fence the whole input is treated as body.
///
/// # Examples
///
/// ```
/// use pagecraft::markdown::split_front_matter;
///
/// let (meta, body) = split_front_matter("---\ntitle: Hi\n---\n# Hi\n");
/// assert_eq!(meta, Some("title: Hi\n"));
/// assert_eq!(body, "# Hi\n");
///
/// assert_eq!(split_front_matter("# Hi\n"), (None, "# Hi\n"));
/// ```
pub fn split_front_matter(source: &str) -> (Option<&str>, &str) {
    let source_no_bom = source.strip_prefix('\u{feff}').unwrap_or(source);

    let Some(rest) = strip_fence_line(source_no_bom) else {
        return (None, source);
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        let content = line.trim_end_matches(['\n', '\r']);
        if content == FENCE || content == "..." {
            let meta = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return (Some(meta), body);
        }
        offset += line.len();
    }

    (None, source)
}

/// The markdown body with any front matter removed.
pub fn strip_front_matter(source: &str) -> &str {
    split_front_matter(source).1
}

fn strip_fence_line(source: &str) -> Option<&str> {
    let rest = source.strip_prefix(FENCE)?;
    let rest = rest.trim_start_matches([' ', '\t']);
    rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n'))
}
