//! One full run: collect, analyze, render, write.

use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::Context;
use tracing::{debug, info, warn};

use crate::analysis::{find_duplicates, TreeStats};
use crate::collector;
use crate::config::Config;
use crate::render;

/// Runs the dependency listing command with `extra_args` appended and writes
/// the report to `config.output`, returning that path.
///
/// Nothing is written unless every earlier step succeeds.
pub async fn run(config: &Config, extra_args: &[OsString]) -> anyhow::Result<PathBuf> {
    let command = config.command_line(extra_args);
    let tree = collector::collect(&command)
        .await
        .context("Failed to collect the dependency tree")?;

    let stats = TreeStats::from_tree(&tree);
    info!(
        packages = stats.total_nodes,
        max_depth = stats.max_depth,
        duplicated = stats.duplicate_names,
        conflicting = stats.conflicting_names,
        "dependency tree collected"
    );
    if stats.conflicting_names > 0 {
        warn!(
            "{} packages are installed at more than one version",
            stats.conflicting_names
        );
        for duplicate in find_duplicates(&tree).iter().filter(|d| d.is_conflict()) {
            debug!("{}", duplicate.description());
        }
    }

    let html = render::render_html(&tree).context("Failed to build the report")?;
    render::write_report(&config.output, &html).context("Failed to save the report")?;

    Ok(config.output.clone())
}
