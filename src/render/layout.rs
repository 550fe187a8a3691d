//! Layout for the rendered tree.
//!
//! Nodes are placed in depth-first pre-order: each one on its own row,
//! indented by its depth. The vertical offset is threaded through the walk
//! and returned, so the final value is the canvas height.

use serde::Serialize;

use crate::parser::{DependencyMap, DependencyNode, DependencyTree};

/// Horizontal position of depth-0 boxes.
pub const LEFT_MARGIN: u32 = 20;
/// Extra horizontal offset per nesting level.
pub const INDENT: u32 = 30;
/// Vertical position of the first box.
pub const TOP_MARGIN: u32 = 20;
pub const BOX_WIDTH: u32 = 300;
pub const BOX_HEIGHT: u32 = 20;
/// Distance between the tops of consecutive boxes.
pub const ROW_PITCH: u32 = 30;
/// Label offset from the box's top-left corner.
pub const LABEL_INSET_X: u32 = 5;
pub const LABEL_INSET_Y: u32 = 15;
/// The canvas is never narrower than this.
pub const MIN_CANVAS_WIDTH: u32 = 500;
/// Space kept to the right of the deepest box.
pub const RIGHT_MARGIN: u32 = 20;

/// The layout constants, as handed to the page script that draws the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutMetrics {
    pub left_margin: u32,
    pub indent: u32,
    pub top_margin: u32,
    pub box_width: u32,
    pub box_height: u32,
    pub row_pitch: u32,
    pub label_inset_x: u32,
    pub label_inset_y: u32,
    pub min_width: u32,
    pub right_margin: u32,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            left_margin: LEFT_MARGIN,
            indent: INDENT,
            top_margin: TOP_MARGIN,
            box_width: BOX_WIDTH,
            box_height: BOX_HEIGHT,
            row_pitch: ROW_PITCH,
            label_inset_x: LABEL_INSET_X,
            label_inset_y: LABEL_INSET_Y,
            min_width: MIN_CANVAS_WIDTH,
            right_margin: RIGHT_MARGIN,
        }
    }
}

/// A node with its position on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutNode<'a> {
    pub node: &'a DependencyNode,
    pub depth: usize,
    /// Left edge of the box.
    pub x: u32,
    /// Top edge of the box.
    pub y: u32,
}

impl LayoutNode<'_> {
    pub fn label_x(&self) -> u32 {
        self.x + LABEL_INSET_X
    }

    pub fn label_y(&self) -> u32 {
        self.y + LABEL_INSET_Y
    }
}

/// Every node of a tree, positioned, plus the canvas size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout<'a> {
    /// Nodes in traversal order.
    pub nodes: Vec<LayoutNode<'a>>,
    pub width: u32,
    pub height: u32,
}

/// Positions every node of `tree`.
///
/// # Example
///
/// ```
/// use npm_depgraph::parser::parse_str;
/// use npm_depgraph::render::layout::layout;
///
/// let tree = parse_str(r#"{"dependencies":{"a":{"version":"1.0.0","dependencies":{"b":{"version":"2.0.0"}}}}}"#).unwrap();
/// let placed = layout(&tree);
///
/// assert_eq!(placed.nodes.len(), 2);
/// assert!(placed.nodes[1].x > placed.nodes[0].x);
/// assert!(placed.nodes[1].y > placed.nodes[0].y);
/// ```
pub fn layout(tree: &DependencyTree) -> Layout<'_> {
    let mut nodes = Vec::new();
    let height = place(&tree.dependencies, 0, TOP_MARGIN, &mut nodes);

    let width = nodes
        .iter()
        .map(|placed| placed.x + BOX_WIDTH + RIGHT_MARGIN)
        .max()
        .unwrap_or(0)
        .max(MIN_CANVAS_WIDTH);

    Layout {
        nodes,
        width,
        height,
    }
}

/// Places `map` and its descendants starting at offset `y`, returning the next free offset.
///
/// Recursion depth is bounded by serde_json's nesting limit of 128 (about 63
/// dependency levels), so parsed trees cannot overflow the stack.
fn place<'a>(
    map: &'a DependencyMap,
    depth: usize,
    y: u32,
    out: &mut Vec<LayoutNode<'a>>,
) -> u32 {
    map.values().fold(y, |y, node| {
        out.push(LayoutNode {
            node,
            depth,
            x: indent_for(depth),
            y,
        });
        place(&node.dependencies, depth + 1, y + ROW_PITCH, out)
    })
}

fn indent_for(depth: usize) -> u32 {
    let depth = u32::try_from(depth).unwrap_or(u32::MAX);
    LEFT_MARGIN.saturating_add(depth.saturating_mul(INDENT))
}
