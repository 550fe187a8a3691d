//! Renderer: turns a dependency tree into an interactive HTML report.
//!
//! Each package occurrence becomes one box with a `name@version` label,
//! indented by depth and stacked top to bottom. Hovering a box marks every
//! box with the same name, green for the same version and red for a
//! different one, and collapses all other boxes until the pointer leaves.

pub mod hover;
pub mod html;
pub mod layout;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::parser::DependencyTree;

pub use hover::{hover_class, HoverClass, HoverClassNames, HoverState};
pub use html::{escape_html, json_script_literal, write_html, RenderConfig};
pub use layout::{layout, Layout, LayoutMetrics, LayoutNode};

/// Errors that can occur while producing the report file.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Failed to build the document.
    #[error("Failed to render the HTML report")]
    Render(#[source] io::Error),

    /// Failed to create the directory that holds the report.
    #[error("Failed to create directory {}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failed to write the report itself.
    #[error("Failed to write the HTML file {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Renders `tree` to an HTML string.
pub fn render_html(tree: &DependencyTree) -> Result<String, ReportError> {
    let mut buffer = Vec::new();
    write_html(tree, &mut buffer).map_err(ReportError::Render)?;
    String::from_utf8(buffer)
        .map_err(|e| ReportError::Render(io::Error::new(io::ErrorKind::InvalidData, e)))
}

/// Writes `html` to `path`, creating missing parent directories and
/// replacing any existing file.
pub fn write_report(path: &Path, html: &str) -> Result<(), ReportError> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|source| ReportError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, html).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), bytes = html.len(), "report written");
    Ok(())
}
