//! Hover highlighting rules.
//!
//! While the pointer rests on a node, every node gets exactly one mark:
//! same name and version is a match, same name at another version is a
//! conflict, any other name is collapsed. Leaving the node clears every mark.
//!
//! The page script applies the same rule; the class names it uses are
//! emitted from [`HoverClass::css_class`] through [`HoverClassNames`].

use serde::Serialize;

use crate::parser::DependencyNode;

/// The mark a node receives while another node is hovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HoverClass {
    /// Same package, same version.
    Match,
    /// Same package, different version.
    Conflict,
    /// A different package; shrunk to near-zero height.
    Collapsed,
}

impl HoverClass {
    pub const ALL: [HoverClass; 3] = [HoverClass::Match, HoverClass::Conflict, HoverClass::Collapsed];

    /// The CSS class the page toggles for this mark.
    pub const fn css_class(self) -> &'static str {
        match self {
            HoverClass::Match => "highlight",
            HoverClass::Conflict => "highlight-diff",
            HoverClass::Collapsed => "hide",
        }
    }
}

/// Returns the mark `node` receives while `hovered` is under the pointer.
pub fn hover_class(hovered: &DependencyNode, node: &DependencyNode) -> HoverClass {
    if node.name != hovered.name {
        HoverClass::Collapsed
    } else if node.version == hovered.version {
        HoverClass::Match
    } else {
        HoverClass::Conflict
    }
}

/// Class names handed to the page script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HoverClassNames {
    #[serde(rename = "match")]
    pub matched: &'static str,
    pub conflict: &'static str,
    pub collapsed: &'static str,
}

impl Default for HoverClassNames {
    fn default() -> Self {
        Self {
            matched: HoverClass::Match.css_class(),
            conflict: HoverClass::Conflict.css_class(),
            collapsed: HoverClass::Collapsed.css_class(),
        }
    }
}

/// Hover state over a rendered node list: idle, or one node highlighted.
#[derive(Debug, Clone)]
pub struct HoverState<'a> {
    nodes: Vec<&'a DependencyNode>,
    hovered: Option<usize>,
}

impl<'a> HoverState<'a> {
    /// Starts idle over `nodes`, given in drawing order.
    pub fn new(nodes: Vec<&'a DependencyNode>) -> Self {
        Self {
            nodes,
            hovered: None,
        }
    }

    /// Pointer enters the node at `index`. Out-of-range indices leave the state idle.
    pub fn enter(&mut self, index: usize) {
        self.hovered = (index < self.nodes.len()).then_some(index);
    }

    /// Pointer leaves; every mark is cleared.
    pub fn leave(&mut self) {
        self.hovered = None;
    }

    pub fn is_idle(&self) -> bool {
        self.hovered.is_none()
    }

    /// The mark currently on the node at `index`, if any.
    pub fn class_of(&self, index: usize) -> Option<HoverClass> {
        let hovered = self.nodes.get(self.hovered?)?;
        let node = self.nodes.get(index)?;
        Some(hover_class(hovered, node))
    }

    /// Marks for every node, in drawing order.
    pub fn classes(&self) -> Vec<Option<HoverClass>> {
        (0..self.nodes.len()).map(|index| self.class_of(index)).collect()
    }
}
