//! Parser module for npm-depgraph.
//!
//! Parses the JSON tree printed by `npm ls --json` into typed nodes.
//!
//! # Example
//!
//! ```ignore
//! use npm_depgraph::parser::parse_str;
//!
//! let tree = parse_str(r#"{"dependencies": {"react": {"version": "18.2.0"}}}"#).unwrap();
//!
//! for (depth, node) in tree.walk() {
//!     println!("{}{}", "  ".repeat(depth), node);
//! }
//! ```

pub mod npm_ls;
pub mod types;

// Re-export commonly used types for convenience
pub use npm_ls::{parse_slice, parse_str, ParseError, ParseResult};

pub use types::{DependencyMap, DependencyNode, DependencyTree, Walk};
