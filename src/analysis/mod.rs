//! Analysis module for npm-depgraph.
//!
//! Summarizes a parsed dependency tree before it is rendered:
//!
//! - **Duplicates**: package names installed at more than one position
//! - **Conflicts**: duplicates whose copies carry different versions
//! - **Stats**: node count and nesting depth

pub mod duplicates;

pub use duplicates::{find_duplicates, DuplicateSummary, TreeStats};
