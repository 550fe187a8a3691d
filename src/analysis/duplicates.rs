//! Duplicate package detection.
//!
//! npm installs one copy of a package per position where the resolver could
//! not deduplicate it, so the same name often shows up several times in the
//! tree, sometimes at different versions. This module finds those names.

use std::collections::BTreeMap;

use crate::parser::DependencyTree;

/// A package name that occurs at more than one position in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateSummary {
    /// The package name.
    pub name: String,
    /// Distinct versions, in the order they are first met during the walk.
    pub versions: Vec<String>,
    /// Total number of positions where the name occurs.
    pub occurrences: usize,
}

impl DuplicateSummary {
    /// Returns true if the occurrences disagree on version.
    pub fn is_conflict(&self) -> bool {
        self.versions.len() > 1
    }

    /// Returns a human-readable description, e.g. `ms: 3 copies (2.0.0, 2.1.3)`.
    pub fn description(&self) -> String {
        format!(
            "{}: {} copies ({})",
            self.name,
            self.occurrences,
            self.versions.join(", ")
        )
    }
}

/// Finds every package name that occurs two or more times, sorted by name.
///
/// # Example
///
/// ```
/// use npm_depgraph::analysis::find_duplicates;
/// use npm_depgraph::parser::{DependencyNode, DependencyTree};
///
/// let tree = DependencyTree::new()
///     .with_dependency(DependencyNode::new("debug", "2.6.9").with_child(DependencyNode::new("ms", "2.0.0")))
///     .with_dependency(DependencyNode::new("ms", "2.1.3"));
///
/// let duplicates = find_duplicates(&tree);
/// assert_eq!(duplicates.len(), 1);
/// assert!(duplicates[0].is_conflict());
/// ```
pub fn find_duplicates(tree: &DependencyTree) -> Vec<DuplicateSummary> {
    let mut seen: BTreeMap<&str, (usize, Vec<&str>)> = BTreeMap::new();

    for (_, node) in tree.walk() {
        let (count, versions) = seen.entry(node.name.as_str()).or_default();
        *count += 1;
        if !versions.contains(&node.version.as_str()) {
            versions.push(node.version.as_str());
        }
    }

    seen.into_iter()
        .filter(|(_, (count, _))| *count > 1)
        .map(|(name, (occurrences, versions))| DuplicateSummary {
            name: name.to_string(),
            versions: versions.into_iter().map(str::to_string).collect(),
            occurrences,
        })
        .collect()
}

/// Aggregate figures about a dependency tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Number of nodes, counting every occurrence.
    pub total_nodes: usize,
    /// Deepest nesting level, where top-level dependencies are level 0.
    pub max_depth: usize,
    /// Names that occur more than once.
    pub duplicate_names: usize,
    /// Duplicated names whose occurrences disagree on version.
    pub conflicting_names: usize,
}

impl TreeStats {
    pub fn from_tree(tree: &DependencyTree) -> Self {
        let (total_nodes, max_depth) = tree
            .walk()
            .fold((0usize, 0usize), |(count, deepest), (depth, _)| {
                (count + 1, deepest.max(depth))
            });
        let duplicates = find_duplicates(tree);

        Self {
            total_nodes,
            max_depth,
            duplicate_names: duplicates.len(),
            conflicting_names: duplicates.iter().filter(|d| d.is_conflict()).count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::DependencyNode;

    fn create_test_tree() -> DependencyTree {
        DependencyTree::new()
            .with_dependency(
                DependencyNode::new("express", "4.18.2")
                    .with_child(
                        DependencyNode::new("debug", "2.6.9")
                            .with_child(DependencyNode::new("ms", "2.0.0")),
                    )
                    .with_child(DependencyNode::new("send", "0.18.0").with_child(
                        DependencyNode::new("debug", "2.6.9")
                            .with_child(DependencyNode::new("ms", "2.0.0")),
                    )),
            )
            .with_dependency(DependencyNode::new("ms", "2.1.3"))
            .with_dependency(DependencyNode::new("react", "18.2.0"))
    }

    #[test]
    fn test_find_duplicates() {
        let duplicates = find_duplicates(&create_test_tree());
        let names: Vec<&str> = duplicates.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["debug", "ms"]);
    }

    #[test]
    fn test_duplicate_same_version_is_not_conflict() {
        let duplicates = find_duplicates(&create_test_tree());
        let debug = duplicates.iter().find(|d| d.name == "debug").unwrap();

        assert_eq!(debug.occurrences, 2);
        assert_eq!(debug.versions, vec!["2.6.9"]);
        assert!(!debug.is_conflict());
    }

    #[test]
    fn test_duplicate_versions_first_seen_order() {
        let duplicates = find_duplicates(&create_test_tree());
        let ms = duplicates.iter().find(|d| d.name == "ms").unwrap();

        assert_eq!(ms.occurrences, 3);
        assert_eq!(ms.versions, vec!["2.0.0", "2.1.3"]);
        assert!(ms.is_conflict());
        assert_eq!(ms.description(), "ms: 3 copies (2.0.0, 2.1.3)");
    }

    #[test]
    fn test_no_duplicates() {
        let tree = DependencyTree::new()
            .with_dependency(DependencyNode::new("a", "1.0.0"))
            .with_dependency(DependencyNode::new("b", "1.0.0"));
        assert!(find_duplicates(&tree).is_empty());
    }

    #[test]
    fn test_tree_stats() {
        let stats = TreeStats::from_tree(&create_test_tree());

        assert_eq!(stats.total_nodes, 8);
        assert_eq!(stats.max_depth, 3);
        assert_eq!(stats.duplicate_names, 2);
        assert_eq!(stats.conflicting_names, 1);
    }

    #[test]
    fn test_tree_stats_empty() {
        assert_eq!(TreeStats::from_tree(&DependencyTree::new()), TreeStats::default());
    }
}
