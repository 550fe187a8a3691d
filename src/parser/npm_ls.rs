//! Parser for `npm ls --json` output.
//!
//! Turns the JSON document printed by the dependency listing command into a
//! [`DependencyTree`] with every node named.

use super::types::DependencyTree;

/// Errors that can occur while parsing dependency listing output.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The command printed nothing.
    #[error("No output to parse")]
    Empty,

    /// Failed to parse JSON content, or the JSON has the wrong shape.
    #[error("Failed to parse JSON")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias for parser operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Parses dependency listing output from a string.
///
/// # Example
///
/// ```
/// use npm_depgraph::parser::npm_ls::parse_str;
///
/// let json = r#"{"dependencies": {"a": {"version": "1.0.0"}}}"#;
/// let tree = parse_str(json).unwrap();
/// assert_eq!(tree.dependencies["a"].name, "a");
/// ```
pub fn parse_str(content: &str) -> ParseResult<DependencyTree> {
    parse_slice(content.as_bytes())
}

/// Parses dependency listing output from raw bytes, such as captured stdout.
pub fn parse_slice(content: &[u8]) -> ParseResult<DependencyTree> {
    if content.iter().all(u8::is_ascii_whitespace) {
        return Err(ParseError::Empty);
    }

    let mut tree: DependencyTree = serde_json::from_slice(content)?;
    tree.assign_names();
    Ok(tree)
}
