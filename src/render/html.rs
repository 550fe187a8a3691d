//! HTML document generation.
//!
//! The document is fully self-contained: styles and script are inlined and
//! the tree is embedded as a JSON data block. On load, the page script draws
//! the boxes from that block, using the layout metrics and hover class names
//! emitted in a second JSON block. The same drawing, produced by the
//! [`layout`](super::layout) pass, is written inside `<noscript>` for viewers
//! without JavaScript.

use std::io::{self, Write};

use serde::Serialize;

use super::hover::HoverClassNames;
use super::layout::{self, Layout, LayoutMetrics, BOX_HEIGHT, BOX_WIDTH};
use crate::analysis::TreeStats;
use crate::parser::DependencyTree;

const STYLE: &str = include_str!("assets/style.css");
const SCRIPT: &str = include_str!("assets/tree.js");

/// Everything the page script needs besides the tree itself.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct RenderConfig {
    pub layout: LayoutMetrics,
    pub classes: HoverClassNames,
}

/// Escapes text for use in HTML element content and quoted attributes.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Serializes `value` as JSON that is safe to place inside a `<script>` element.
///
/// `<`, `>` and `&` can only occur inside JSON strings, where the `\uXXXX`
/// forms decode to the same characters, so the data round-trips unchanged
/// while `</script>` can never appear. U+2028/U+2029 are escaped for
/// consumers that treat the block as JavaScript source.
pub fn json_script_literal<T: Serialize>(value: &T) -> serde_json::Result<String> {
    let json = serde_json::to_string(value)?;
    Ok(json
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026")
        .replace('\u{2028}', "\\u2028")
        .replace('\u{2029}', "\\u2029"))
}

/// Writes the complete report for `tree` to `writer`.
pub fn write_html<W: Write>(tree: &DependencyTree, writer: &mut W) -> io::Result<()> {
    let placed = layout::layout(tree);
    let stats = TreeStats::from_tree(tree);
    let data = json_script_literal(tree)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    let config = json_script_literal(&RenderConfig::default())
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    writeln!(writer, "<!DOCTYPE html>")?;
    writeln!(writer, "<html lang=\"en\">")?;
    writeln!(writer, "  <head>")?;
    writeln!(writer, "    <meta charset=\"UTF-8\">")?;
    writeln!(
        writer,
        "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">"
    )?;
    writeln!(writer, "    <title>Dependency Tree Visualization</title>")?;
    writeln!(writer, "    <style>")?;
    write!(writer, "{}", STYLE)?;
    writeln!(writer, "    </style>")?;
    writeln!(writer, "  </head>")?;
    writeln!(writer, "  <body>")?;

    write_summary(tree, &stats, writer)?;
    writeln!(writer, "    <div id=\"tree\"></div>")?;
    writeln!(writer, "    <noscript>")?;
    write_svg(&placed, writer)?;
    writeln!(writer, "    </noscript>")?;

    writeln!(
        writer,
        "    <script type=\"application/json\" id=\"render-config\">{}</script>",
        config
    )?;
    writeln!(
        writer,
        "    <script type=\"application/json\" id=\"dependency-data\">{}</script>",
        data
    )?;
    writeln!(writer, "    <script>")?;
    write!(writer, "{}", SCRIPT)?;
    writeln!(writer, "    </script>")?;
    writeln!(writer, "  </body>")?;
    writeln!(writer, "</html>")
}

fn write_summary<W: Write>(tree: &DependencyTree, stats: &TreeStats, writer: &mut W) -> io::Result<()> {
    writeln!(writer, "    <header class=\"summary\">")?;
    writeln!(writer, "      <h1>{}</h1>", escape_html(&tree.title()))?;
    writeln!(
        writer,
        "      <p>{} packages &middot; {} duplicated names &middot; {} with conflicting versions</p>",
        stats.total_nodes, stats.duplicate_names, stats.conflicting_names
    )?;
    writeln!(writer, "    </header>")
}

fn write_svg<W: Write>(placed: &Layout<'_>, writer: &mut W) -> io::Result<()> {
    writeln!(
        writer,
        "      <svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\">",
        placed.width, placed.height
    )?;

    for entry in &placed.nodes {
        writeln!(
            writer,
            "        <g class=\"node\" data-name=\"{}\" data-version=\"{}\" data-depth=\"{}\">",
            escape_html(&entry.node.name),
            escape_html(&entry.node.version),
            entry.depth
        )?;
        writeln!(
            writer,
            "          <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"></rect>",
            entry.x, entry.y, BOX_WIDTH, BOX_HEIGHT
        )?;
        writeln!(
            writer,
            "          <text x=\"{}\" y=\"{}\">{}</text>",
            entry.label_x(),
            entry.label_y(),
            escape_html(&entry.node.label())
        )?;
        writeln!(writer, "        </g>")?;
    }

    writeln!(writer, "      </svg>")
}
