use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A deterministic region selection rule.
///
/// Replaces the hand-edited index placeholder of earlier workflows: every
/// rule maps a detection listing to indices without human intervention.
/// `Manual` carries indices an operator chose after inspecting the listing;
/// they are forwarded to the engine verbatim.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", content = "value", rename_all = "snake_case")]
pub enum SelectorSpec {
    Manual(Vec<usize>),
    Largest,
    Label(String),
}

#[derive(Error, Debug)]
pub enum SelectorParseError {
    #[error("unknown selection rule '{0}'; expected 'largest' or 'label:<text>'")]
    UnknownRule(String),
    #[error("label selector requires text after the colon")]
    EmptyLabel,
}

impl FromStr for SelectorSpec {
    type Err = SelectorParseError;

    /// Parses the CLI `--select` syntax: `largest` or `label:<text>`.
    ///
    /// Manual index lists arrive through a separate flag and never pass
    /// through here.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "largest" {
            return Ok(SelectorSpec::Largest);
        }
        if let Some(needle) = s.strip_prefix("label:") {
            if needle.is_empty() {
                return Err(SelectorParseError::EmptyLabel);
            }
            return Ok(SelectorSpec::Label(needle.to_string()));
        }
        Err(SelectorParseError::UnknownRule(s.to_string()))
    }
}

/// One cleaning run, fully specified: which file to read, where to write
/// the cleaned copy, and how to pick the regions to remove.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CleanJob {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub selector: SelectorSpec,
}

#[derive(Error, Debug)]
pub enum JobError {
    #[error("failed to read job file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid job file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl CleanJob {
    pub fn from_json_file(path: &Path) -> Result<Self, JobError> {
        let text = fs::read_to_string(path).map_err(|e| JobError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&text).map_err(|e| JobError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }
}
