//! Views over a rendered instruction forest.
//!
//! - [`outline`]: indented text dump, one line per node
//! - [`Stats`]: per-target instruction counts and nesting depth
//!
//! JSON output is available through `serde` when the `serde` feature is on.

mod outline;
mod stats;

pub use outline::outline;
pub use stats::Stats;
