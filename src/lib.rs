//! npm-depgraph - render an npm dependency tree as an interactive HTML report
//!
//! This crate runs `npm ls --json`, parses the tree it prints, and writes a
//! self-contained HTML/SVG page where hovering a package highlights every
//! other copy of it, flagging copies at a different version.

pub mod analysis;
pub mod collector;
pub mod config;
pub mod parser;
pub mod pipeline;
pub mod render;

pub use config::Config;
pub use pipeline::run;
