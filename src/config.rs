//! Runtime configuration.
//!
//! Every command-line argument is forwarded to the package manager, so the
//! few knobs this tool has are read from the environment instead.

use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

use crate::collector::CommandLine;

/// Default location of the generated report, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "report/dependency-graph.html";

/// Environment variable overriding the package manager executable.
pub const PROGRAM_ENV: &str = "NPM_DEPGRAPH_PROGRAM";

/// Environment variable overriding the report path.
pub const OUTPUT_ENV: &str = "NPM_DEPGRAPH_OUTPUT";

#[cfg(windows)]
const DEFAULT_PROGRAM: &str = "npm.cmd";
#[cfg(not(windows))]
const DEFAULT_PROGRAM: &str = "npm";

const DEFAULT_BASE_ARGS: [&str; 2] = ["ls", "--json"];

/// Settings for one run of the tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Executable that prints the dependency tree.
    pub program: String,
    /// Arguments always passed before the caller's own.
    pub base_args: Vec<String>,
    /// Where the HTML report is written.
    pub output: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            base_args: DEFAULT_BASE_ARGS.iter().map(|s| s.to_string()).collect(),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl Config {
    /// Builds the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Unset and empty variables fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(program) = get(PROGRAM_ENV) {
            config.program = program;
        }
        if let Some(output) = get(OUTPUT_ENV) {
            config.output = PathBuf::from(output);
        }

        config
    }

    /// The full command to run: program, base arguments, then `extra_args` verbatim.
    pub fn command_line<I, S>(&self, extra_args: I) -> CommandLine
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        CommandLine::new(&self.program)
            .args(&self.base_args)
            .args(extra_args)
    }
}

/// The arguments to forward, given the full process argv.
///
/// Only the program name is dropped; nothing is interpreted, so `--`,
/// `--help` and non-UTF-8 arguments reach the package manager unchanged.
pub fn forwarded_args<I>(argv: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    argv.into_iter().skip(1).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.base_args, vec!["ls", "--json"]);
        assert_eq!(config.output, PathBuf::from("report/dependency-graph.html"));
        assert!(config.program.starts_with("npm"));
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            (PROGRAM_ENV, "pnpm"),
            (OUTPUT_ENV, "out/tree.html"),
        ]));

        assert_eq!(config.program, "pnpm");
        assert_eq!(config.output, PathBuf::from("out/tree.html"));
        assert_eq!(config.base_args, vec!["ls", "--json"]);
    }

    #[test]
    fn test_from_lookup_ignores_empty_values() {
        let config = Config::from_lookup(lookup_from(&[(PROGRAM_ENV, "  "), (OUTPUT_ENV, "")]));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_command_line_appends_extra_args() {
        let config = Config {
            program: "npm".to_string(),
            ..Config::default()
        };
        let extra = vec!["--all".to_string(), "--omit=dev".to_string()];
        let command = config.command_line(&extra);

        assert_eq!(command.program(), "npm");
        assert_eq!(command.arguments(), ["ls", "--json", "--all", "--omit=dev"]);
        assert_eq!(command.to_string(), "npm ls --json --all --omit=dev");
    }

    #[test]
    fn test_forwarded_args_keep_double_dash() {
        let argv = ["npm-depgraph", "--", "--all", "--help"]
            .iter()
            .map(OsString::from);
        let forwarded = forwarded_args(argv);

        assert_eq!(forwarded, ["--", "--all", "--help"]);

        let command = Config::default().command_line(&forwarded);
        assert_eq!(command.arguments(), ["ls", "--json", "--", "--all", "--help"]);
    }

    #[test]
    fn test_forwarded_args_without_arguments() {
        assert!(forwarded_args(vec![OsString::from("npm-depgraph")]).is_empty());
        assert!(forwarded_args(Vec::new()).is_empty());
    }
}
