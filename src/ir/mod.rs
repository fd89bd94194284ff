//! Render-instruction tree.
//!
//! The renderer's output is an owned tree of [`Fragment`]s. Each
//! [`Instruction`] names a rich [`Component`] (a [`Target`] plus its resolved
//! props) and carries its nested children; text leaves are plain strings.
//!
//! The tree is what a host UI layer consumes: it knows how to draw each of
//! the twelve targets and how to emit a literal text leaf.
//!
//! # Example
//!
//! ```
//! use pagecraft::ir::{Component, Fragment, Instruction, Target, TypographyLevel};
//!
//! let heading = Instruction::with_children(
//!     Component::Typography { level: TypographyLevel::Heading(3) },
//!     vec![Fragment::Text("Title".to_string())],
//! );
//! assert_eq!(heading.target(), Target::Typography);
//! assert_eq!(heading.text_content(), "Title");
//! ```

mod component;
mod node;

pub use component::{Component, PropValue, Target, TypographyLevel};
pub use node::{Fragment, Instruction, text_content};
