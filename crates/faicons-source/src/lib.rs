//! Upstream sources for the Font Awesome icon metadata catalog.
//!
//! This crate fetches `metadata/icons.yml` text for the schema layer: the
//! `IconYamlProvider` trait with git (`GitSource`) and npm (`NpmSource`)
//! implementations, an injectable `CommandRunner` for child processes,
//! self-cleaning scratch directories, prerequisite checks, and the JSON
//! source configuration.

pub mod config;
pub mod git;
pub mod npm;
pub mod prereq;
pub mod process;
pub mod scratch;

pub use config::SourceConfig;
pub use git::GitSource;
pub use npm::NpmSource;
pub use prereq::{check_fetch_prereqs, format_missing, MissingPrereq};
pub use process::{CommandRunner, ProcessOutput, SystemRunner};
pub use scratch::ScratchDir;

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{tool} is required but was not found on PATH: {source}")]
    ToolUnavailable {
        tool: String,
        #[source]
        source: std::io::Error,
    },
    #[error("process `{command}` failed with {}\nSTDOUT: {stdout}\nSTDERR: {stderr}", describe_code(.code))]
    ProcessFailed {
        command: String,
        code: Option<i32>,
        stdout: String,
        stderr: String,
    },
    #[error("icon metadata not found at {}", .0.display())]
    NotFound(PathBuf),
    #[error("could not locate package.json near the executable or in the current directory")]
    NoPackageManifest,
    #[error("source I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("source config error: {0}")]
    Config(String),
}

fn describe_code(code: &Option<i32>) -> String {
    code.map_or_else(|| "no exit code (terminated by signal)".to_owned(), |c| format!("code {c}"))
}

/// Anything that can produce the text of the icon metadata catalog.
pub trait IconYamlProvider {
    fn name(&self) -> &str;

    fn icons_yaml(&self) -> Result<String, FetchError>;
}

/// Which upstream to fetch from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Git,
    Npm,
}

impl SourceKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SourceKind::Git => "git",
            SourceKind::Npm => "npm",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceKind {
    type Err = FetchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "git" | "github" => Ok(SourceKind::Git),
            "npm" => Ok(SourceKind::Npm),
            other => Err(FetchError::Config(format!(
                "unknown source '{other}' (expected: git, npm)"
            ))),
        }
    }
}

/// Read the catalog file, reporting a missing file as [`FetchError::NotFound`].
pub(crate) fn read_catalog(path: &Path) -> Result<String, FetchError> {
    if !path.is_file() {
        return Err(FetchError::NotFound(path.to_path_buf()));
    }
    Ok(std::fs::read_to_string(path)?)
}

/// Build the provider for `kind` using the system process runner.
pub fn select_source(kind: SourceKind, config: &SourceConfig) -> Box<dyn IconYamlProvider> {
    match kind {
        SourceKind::Git => Box::new(GitSource::new(config.clone())),
        SourceKind::Npm => Box::new(NpmSource::new(config.clone())),
    }
}
