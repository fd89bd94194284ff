//! Instruction counts for an instruction forest.

use std::collections::BTreeMap;
use std::fmt;

use crate::ir::{Fragment, Target};

/// Summary of an instruction forest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Stats {
    /// Instructions per target. Targets that never occur are absent.
    pub targets: BTreeMap<Target, usize>,
    /// Number of literal text leaves.
    pub text_leaves: usize,
    /// Deepest nesting level; a forest of only top-level leaves has depth 1.
    pub max_depth: usize,
}

impl Stats {
    /// Walk a forest and count what it holds.
    pub fn collect(fragments: &[Fragment]) -> Self {
        let mut stats = Stats::default();
        stats.visit(fragments, 1);
        stats
    }

    fn visit(&mut self, fragments: &[Fragment], depth: usize) {
        for fragment in fragments {
            self.max_depth = self.max_depth.max(depth);
            match fragment {
                Fragment::Text(_) => self.text_leaves += 1,
                Fragment::Instruction(instruction) => {
                    *self.targets.entry(instruction.target()).or_default() += 1;
                    self.visit(&instruction.children, depth + 1);
                }
            }
        }
    }

    /// Total number of instructions.
    pub fn instructions(&self) -> usize {
        self.targets.values().sum()
    }

    /// Count for a single target.
    pub fn count(&self, target: Target) -> usize {
        self.targets.get(&target).copied().unwrap_or(0)
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "instructions: {}", self.instructions())?;
        for (target, count) in &self.targets {
            writeln!(f, "  {target}: {count}")?;
        }
        writeln!(f, "text leaves: {}", self.text_leaves)?;
        write!(f, "max depth: {}", self.max_depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::render_html;

    #[test]
    fn test_collect_counts_targets_and_depth() {
        let stats = Stats::collect(&render_html(
            "<ul><li><a href=\"/a\">a</a></li><li>b</li></ul>",
        ));

        assert_eq!(stats.count(Target::List), 1);
        assert_eq!(stats.count(Target::ListItem), 2);
        assert_eq!(stats.count(Target::Link), 1);
        assert_eq!(stats.count(Target::Table), 0);
        assert_eq!(stats.instructions(), 4);
        assert_eq!(stats.text_leaves, 2);
        // ul > li > a > "a"
        assert_eq!(stats.max_depth, 4);
    }

    #[test]
    fn test_empty_forest() {
        let stats = Stats::collect(&[]);
        assert_eq!(stats, Stats::default());
        assert_eq!(stats.instructions(), 0);
    }

    #[test]
    fn test_display() {
        let stats = Stats::collect(&render_html("<p>x</p>"));
        assert_eq!(
            stats.to_string(),
            "instructions: 1\n  Typography: 1\ntext leaves: 1\nmax depth: 2"
        );
    }
}
