//! Rich component targets and their resolved props.

use std::fmt;

/// Which rich component an instruction instantiates.
///
/// This is the closed set of targets a host UI layer must know how to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Target {
    Typography,
    List,
    ListItem,
    Blockquote,
    Link,
    Image,
    CodeBlock,
    InlineCode,
    DiagramBlock,
    PreformattedBlock,
    Table,
    RawElement,
}

impl Target {
    /// Every target, in declaration order.
    pub const ALL: [Target; 12] = [
        Target::Typography,
        Target::List,
        Target::ListItem,
        Target::Blockquote,
        Target::Link,
        Target::Image,
        Target::CodeBlock,
        Target::InlineCode,
        Target::DiagramBlock,
        Target::PreformattedBlock,
        Target::Table,
        Target::RawElement,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Target::Typography => "Typography",
            Target::List => "List",
            Target::ListItem => "ListItem",
            Target::Blockquote => "Blockquote",
            Target::Link => "Link",
            Target::Image => "Image",
            Target::CodeBlock => "CodeBlock",
            Target::InlineCode => "InlineCode",
            Target::DiagramBlock => "DiagramBlock",
            Target::PreformattedBlock => "PreformattedBlock",
            Target::Table => "Table",
            Target::RawElement => "RawElement",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typography variant: a heading level or body text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypographyLevel {
    /// `h1`..`h6`; always within 1..=6.
    Heading(u8),
    /// `p`
    Body,
}

impl TypographyLevel {
    /// Map a heading tag name (`h1`..`h6`) to its level.
    pub fn from_heading_tag(tag: &str) -> Option<Self> {
        match tag {
            "h1" => Some(TypographyLevel::Heading(1)),
            "h2" => Some(TypographyLevel::Heading(2)),
            "h3" => Some(TypographyLevel::Heading(3)),
            "h4" => Some(TypographyLevel::Heading(4)),
            "h5" => Some(TypographyLevel::Heading(5)),
            "h6" => Some(TypographyLevel::Heading(6)),
            _ => None,
        }
    }
}

impl fmt::Display for TypographyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypographyLevel::Heading(level) => write!(f, "{level}"),
            TypographyLevel::Body => f.write_str("body"),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TypographyLevel {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TypographyLevel::Heading(level) => serializer.serialize_u8(*level),
            TypographyLevel::Body => serializer.serialize_str("body"),
        }
    }
}

/// A target together with its resolved props.
///
/// Attribute-derived string props are never absent: a missing attribute
/// resolves to the empty string. The one optional prop is a link's
/// `target`, which is present only when non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "component"))]
pub enum Component {
    Typography {
        level: TypographyLevel,
    },
    List {
        ordered: bool,
    },
    ListItem,
    Blockquote,
    Link {
        href: String,
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        target: Option<String>,
    },
    Image {
        src: String,
        alt: String,
    },
    CodeBlock {
        code: String,
        language: String,
    },
    InlineCode,
    DiagramBlock {
        definition: String,
    },
    PreformattedBlock,
    Table,
    /// Passthrough for tags without a rich counterpart.
    RawElement {
        #[cfg_attr(feature = "serde", serde(rename = "tagName"))]
        tag_name: String,
        #[cfg_attr(feature = "serde", serde(serialize_with = "serialize_attributes"))]
        attributes: Vec<(String, String)>,
    },
}

#[cfg(feature = "serde")]
fn serialize_attributes<S: serde::Serializer>(
    attributes: &[(String, String)],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_map(attributes.iter().map(|(k, v)| (k, v)))
}

impl Component {
    pub fn target(&self) -> Target {
        match self {
            Component::Typography { .. } => Target::Typography,
            Component::List { .. } => Target::List,
            Component::ListItem => Target::ListItem,
            Component::Blockquote => Target::Blockquote,
            Component::Link { .. } => Target::Link,
            Component::Image { .. } => Target::Image,
            Component::CodeBlock { .. } => Target::CodeBlock,
            Component::InlineCode => Target::InlineCode,
            Component::DiagramBlock { .. } => Target::DiagramBlock,
            Component::PreformattedBlock => Target::PreformattedBlock,
            Component::Table => Target::Table,
            Component::RawElement { .. } => Target::RawElement,
        }
    }

    /// Props as generic name/value pairs, in a stable order.
    ///
    /// For `RawElement` the first pair is `tagName`, followed by the copied
    /// attributes.
    pub fn props(&self) -> Vec<(&str, PropValue<'_>)> {
        match self {
            Component::Typography { level } => vec![("level", PropValue::Level(*level))],
            Component::List { ordered } => vec![("ordered", PropValue::Bool(*ordered))],
            Component::Link { href, target } => {
                let mut props = vec![("href", PropValue::Str(href))];
                if let Some(target) = target {
                    props.push(("target", PropValue::Str(target)));
                }
                props
            }
            Component::Image { src, alt } => {
                vec![("src", PropValue::Str(src)), ("alt", PropValue::Str(alt))]
            }
            Component::CodeBlock { code, language } => vec![
                ("code", PropValue::Str(code)),
                ("language", PropValue::Str(language)),
            ],
            Component::DiagramBlock { definition } => {
                vec![("definition", PropValue::Str(definition))]
            }
            Component::RawElement {
                tag_name,
                attributes,
            } => std::iter::once(("tagName", PropValue::Str(tag_name)))
                .chain(
                    attributes
                        .iter()
                        .map(|(name, value)| (name.as_str(), PropValue::Str(value))),
                )
                .collect(),
            Component::ListItem
            | Component::Blockquote
            | Component::InlineCode
            | Component::PreformattedBlock
            | Component::Table => Vec::new(),
        }
    }

    /// Look up a single prop by name.
    pub fn prop(&self, name: &str) -> Option<PropValue<'_>> {
        self.props()
            .into_iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value)
    }
}

/// A prop value borrowed from a [`Component`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropValue<'a> {
    Str(&'a str),
    Bool(bool),
    Level(TypographyLevel),
}

impl PropValue<'_> {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropValue::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for PropValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropValue::Str(s) => write!(f, "{s:?}"),
            PropValue::Bool(b) => write!(f, "{b}"),
            PropValue::Level(level) => write!(f, "{level}"),
        }
    }
}
