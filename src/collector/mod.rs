//! Collector: runs the dependency listing command and parses what it prints.
//!
//! The command runs once, with its standard output captured. A failure to
//! start it, a non-zero exit, or unparseable output all end the run.

pub mod command;

pub use command::CommandLine;

use std::process::{ExitStatus, Stdio};
use std::time::Instant;

use tokio::process::Command;
use tracing::debug;

use crate::parser::{self, DependencyTree, ParseError};

/// Errors that can occur while collecting the dependency tree.
#[derive(Debug, thiserror::Error)]
pub enum CollectError {
    /// The command could not be started at all.
    #[error("Error executing {command}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The command ran but exited unsuccessfully.
    #[error("Error executing {command}: {status}{}", stderr_suffix(.stderr))]
    Status {
        command: String,
        status: ExitStatus,
        stderr: String,
    },

    /// The command's output is not a dependency tree.
    #[error("Failed to parse the {command} output")]
    Parse {
        command: String,
        #[source]
        source: ParseError,
    },
}

impl CollectError {
    /// The rendered command line that triggered the error.
    pub fn command(&self) -> &str {
        match self {
            CollectError::Spawn { command, .. }
            | CollectError::Status { command, .. }
            | CollectError::Parse { command, .. } => command,
        }
    }
}

fn stderr_suffix(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!("\n{}", stderr)
    }
}

/// Runs `command` and parses its standard output as a dependency tree.
///
/// # Example
///
/// ```ignore
/// use npm_depgraph::collector::{collect, CommandLine};
///
/// let command = CommandLine::new("npm").args(["ls", "--json", "--all"]);
/// let tree = collect(&command).await?;
/// println!("{} packages", tree.node_count());
/// ```
pub async fn collect(command: &CommandLine) -> Result<DependencyTree, CollectError> {
    let rendered = command.to_string();
    debug!(command = %rendered, "running dependency listing command");
    let started = Instant::now();

    let output = Command::new(command.program())
        .args(command.arguments())
        .stdin(Stdio::null())
        .output()
        .await
        .map_err(|source| CollectError::Spawn {
            command: rendered.clone(),
            source,
        })?;

    debug!(
        command = %rendered,
        status = %output.status,
        stdout_bytes = output.stdout.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "command finished"
    );

    if !output.status.success() {
        return Err(CollectError::Status {
            command: rendered,
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    parser::parse_slice(&output.stdout).map_err(|source| CollectError::Parse {
        command: rendered,
        source,
    })
}
