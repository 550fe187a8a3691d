//! Shared types for dependency tree parsing.
//!
//! These mirror the JSON document printed by `npm ls --json`: a root object
//! whose `dependencies` map package names to entries that carry a version and,
//! optionally, their own nested `dependencies`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Child mapping from package name to node.
pub type DependencyMap = BTreeMap<String, DependencyNode>;

/// The parsed output of a dependency listing command.
///
/// # Example
///
/// ```ignore
/// use npm_depgraph::parser::types::DependencyTree;
///
/// let json = r#"{"name": "my-app", "dependencies": {"react": {"version": "18.2.0"}}}"#;
/// let tree: DependencyTree = serde_json::from_str(json).unwrap();
/// assert_eq!(tree.name, Some("my-app".to_string()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyTree {
    /// The name of the root project, when the command reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The version of the root project.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Top-level dependencies. Absent in the JSON means no dependencies.
    #[serde(default)]
    pub dependencies: DependencyMap,
}

impl DependencyTree {
    /// Creates an empty tree with no root metadata.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a top-level dependency, returning the tree for chaining.
    pub fn with_dependency(mut self, node: DependencyNode) -> Self {
        self.dependencies.insert(node.name.clone(), node);
        self
    }

    /// Returns true if the tree has no dependencies at all.
    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty()
    }

    /// Returns the number of nodes at every depth.
    pub fn node_count(&self) -> usize {
        self.walk().count()
    }

    /// Returns a human-readable title for the root project.
    pub fn title(&self) -> String {
        match (&self.name, &self.version) {
            (Some(name), Some(version)) => format!("{}@{}", name, version),
            (Some(name), None) => name.clone(),
            _ => "Dependency Tree".to_string(),
        }
    }

    /// Iterates over every node in depth-first pre-order, paired with its depth.
    ///
    /// Top-level dependencies have depth 0.
    pub fn walk(&self) -> Walk<'_> {
        Walk::new(&self.dependencies)
    }

    /// Copies each map key into the `name` field of its node, at every level.
    ///
    /// Names are not part of the entries themselves in `npm ls` output, so this
    /// runs once right after deserialization.
    pub(crate) fn assign_names(&mut self) {
        assign_names(&mut self.dependencies);
    }
}

// Recursion depth is bounded by serde_json's nesting limit of 128 (about 63
// dependency levels), so this cannot overflow the stack on parsed input.
fn assign_names(map: &mut DependencyMap) {
    for (name, node) in map.iter_mut() {
        node.name.clone_from(name);
        assign_names(&mut node.dependencies);
    }
}

/// One occurrence of a package in the dependency tree.
///
/// The same package can appear several times at different positions, each
/// one its own node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyNode {
    /// The package name, taken from the key of the enclosing map.
    #[serde(skip)]
    pub name: String,

    /// The installed version. Empty when the command omits it (e.g. missing packages).
    #[serde(default)]
    pub version: String,

    /// Nested dependencies of this package.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub dependencies: DependencyMap,
}

impl DependencyNode {
    /// Creates a leaf node.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            dependencies: DependencyMap::new(),
        }
    }

    /// Adds a child, returning the node for chaining.
    pub fn with_child(mut self, child: DependencyNode) -> Self {
        self.dependencies.insert(child.name.clone(), child);
        self
    }

    /// Returns true if this node has no nested dependencies.
    pub fn is_leaf(&self) -> bool {
        self.dependencies.is_empty()
    }

    /// The label drawn for this node, `name@version`.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DependencyNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.version.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}@{}", self.name, self.version)
        }
    }
}

/// Depth-first pre-order iterator over a dependency map.
///
/// Uses an explicit stack, so arbitrarily deep trees do not grow the call stack.
pub struct Walk<'a> {
    stack: Vec<(usize, &'a DependencyNode)>,
}

impl<'a> Walk<'a> {
    fn new(roots: &'a DependencyMap) -> Self {
        Self {
            stack: roots.values().rev().map(|node| (0, node)).collect(),
        }
    }
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a DependencyNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        self.stack
            .extend(node.dependencies.values().rev().map(|child| (depth + 1, child)));
        Some((depth, node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> DependencyTree {
        DependencyTree::new()
            .with_dependency(
                DependencyNode::new("express", "4.18.2")
                    .with_child(DependencyNode::new("accepts", "1.3.8"))
                    .with_child(
                        DependencyNode::new("debug", "2.6.9")
                            .with_child(DependencyNode::new("ms", "2.0.0")),
                    ),
            )
            .with_dependency(DependencyNode::new("ms", "2.1.3"))
    }

    #[test]
    fn test_node_display() {
        let node = DependencyNode::new("lodash", "4.17.21");
        assert_eq!(node.to_string(), "lodash@4.17.21");
        assert_eq!(node.label(), "lodash@4.17.21");
    }

    #[test]
    fn test_node_display_without_version() {
        let node = DependencyNode::new("left-pad", "");
        assert_eq!(node.label(), "left-pad");
    }

    #[test]
    fn test_node_is_leaf() {
        let leaf = DependencyNode::new("ms", "2.0.0");
        assert!(leaf.is_leaf());

        let parent = DependencyNode::new("debug", "2.6.9").with_child(leaf);
        assert!(!parent.is_leaf());
    }

    #[test]
    fn test_walk_pre_order_with_depth() {
        let tree = sample_tree();
        let visited: Vec<(usize, String)> = tree
            .walk()
            .map(|(depth, node)| (depth, node.label()))
            .collect();

        assert_eq!(
            visited,
            vec![
                (0, "express@4.18.2".to_string()),
                (1, "accepts@1.3.8".to_string()),
                (1, "debug@2.6.9".to_string()),
                (2, "ms@2.0.0".to_string()),
                (0, "ms@2.1.3".to_string()),
            ]
        );
    }

    #[test]
    fn test_node_count() {
        assert_eq!(sample_tree().node_count(), 5);
        assert_eq!(DependencyTree::new().node_count(), 0);
    }

    #[test]
    fn test_tree_title() {
        let mut tree = DependencyTree::new();
        assert_eq!(tree.title(), "Dependency Tree");

        tree.name = Some("my-app".to_string());
        assert_eq!(tree.title(), "my-app");

        tree.version = Some("1.0.0".to_string());
        assert_eq!(tree.title(), "my-app@1.0.0");
    }

    #[test]
    fn test_serialize_omits_names_and_empty_children() {
        let tree = DependencyTree::new().with_dependency(DependencyNode::new("a", "1.0.0"));
        let json = serde_json::to_string(&tree).unwrap();
        assert_eq!(json, r#"{"dependencies":{"a":{"version":"1.0.0"}}}"#);
    }
}
