//! Indented text dump of an instruction forest.

use std::fmt::Write;

use crate::ir::{Fragment, Instruction};

const INDENT: &str = "  ";

/// Render an instruction forest as an indented outline.
///
/// One line per instruction (`Target prop=value ...`) and one per text leaf
/// (Rust-escaped and quoted, so whitespace-only leaves stay visible).
///
/// # Examples
///
/// ```
/// use pagecraft::compiler::render_html;
/// use pagecraft::export::outline;
///
/// let out = outline(&render_html(r#"<p>Hello <a href="/x">link</a></p>"#));
/// assert_eq!(
///     out,
///     "Typography level=body\n  \"Hello \"\n  Link href=\"/x\"\n    \"link\"\n"
/// );
/// ```
pub fn outline(fragments: &[Fragment]) -> String {
    let mut out = String::new();
    for fragment in fragments {
        write_fragment(&mut out, fragment, 0);
    }
    out
}

fn write_fragment(out: &mut String, fragment: &Fragment, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
    match fragment {
        Fragment::Text(text) => {
            let _ = writeln!(out, "{text:?}");
        }
        Fragment::Instruction(instruction) => write_instruction(out, instruction, depth),
    }
}

fn write_instruction(out: &mut String, instruction: &Instruction, depth: usize) {
    out.push_str(instruction.target().as_str());
    for (name, value) in instruction.props() {
        let _ = write!(out, " {name}={value}");
    }
    out.push('\n');

    for child in &instruction.children {
        write_fragment(out, child, depth + 1);
    }
}
