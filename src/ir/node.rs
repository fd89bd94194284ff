//! Instruction tree nodes.

use super::component::{Component, PropValue, Target};

/// One rich component to instantiate, with its nested content.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Instruction {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub component: Component,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Vec::is_empty"))]
    pub children: Vec<Fragment>,
}

impl Instruction {
    /// Create a leaf instruction.
    pub fn new(component: Component) -> Self {
        Self {
            component,
            children: Vec::new(),
        }
    }

    /// Create an instruction with nested content.
    pub fn with_children(component: Component, children: Vec<Fragment>) -> Self {
        Self {
            component,
            children,
        }
    }

    pub fn target(&self) -> Target {
        self.component.target()
    }

    pub fn props(&self) -> Vec<(&str, PropValue<'_>)> {
        self.component.props()
    }

    pub fn prop(&self, name: &str) -> Option<PropValue<'_>> {
        self.component.prop(name)
    }

    /// Concatenated text of every text leaf below this instruction.
    ///
    /// Props are not included, so a `CodeBlock` reports an empty string.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }

    /// Nested instructions, skipping text leaves.
    pub fn child_instructions(&self) -> impl Iterator<Item = &Instruction> {
        self.children.iter().filter_map(Fragment::as_instruction)
    }
}

/// A child in the instruction tree: literal text or a nested instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Fragment {
    Text(String),
    Instruction(Instruction),
}

impl Fragment {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Fragment::Text(text) => Some(text),
            Fragment::Instruction(_) => None,
        }
    }

    pub fn as_instruction(&self) -> Option<&Instruction> {
        match self {
            Fragment::Instruction(instruction) => Some(instruction),
            Fragment::Text(_) => None,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Fragment::Text(_))
    }
}

impl From<Instruction> for Fragment {
    fn from(instruction: Instruction) -> Self {
        Fragment::Instruction(instruction)
    }
}

impl From<String> for Fragment {
    fn from(text: String) -> Self {
        Fragment::Text(text)
    }
}

/// Concatenated text of every text leaf in a forest.
pub fn text_content(fragments: &[Fragment]) -> String {
    let mut out = String::new();
    collect_text(fragments, &mut out);
    out
}

fn collect_text(fragments: &[Fragment], out: &mut String) {
    for fragment in fragments {
        match fragment {
            Fragment::Text(text) => out.push_str(text),
            Fragment::Instruction(instruction) => collect_text(&instruction.children, out),
        }
    }
}
