use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use thiserror::Error;

use crate::removal::domain::text_remover::TextRemover;
use crate::shared::region::DetectedRegion;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("failed to run engine {program}: {source}")]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("engine {program} exited with {status}: {stderr}")]
    Failed {
        program: PathBuf,
        status: ExitStatus,
        stderr: String,
    },
    #[error("engine produced invalid detection output: {0}")]
    InvalidDetections(#[source] serde_json::Error),
    #[error("no video opened; call detect_text_regions first")]
    NoInput,
}

/// Adapter to an external removal engine executable.
///
/// The engine binary owns detection, inpainting, and codec handling; this
/// adapter only speaks its command-line protocol:
///
/// - `<engine> detect <input>` — prints a JSON array of region descriptors
///   on stdout, ordered by the engine's ranking.
/// - `<engine> process <input> <output> --regions a,b,c` — writes the
///   cleaned video and prints the written path as the last stdout line.
pub struct CommandRemover {
    program: PathBuf,
    input: Option<PathBuf>,
}

impl CommandRemover {
    pub fn new(program: PathBuf) -> Self {
        Self {
            program,
            input: None,
        }
    }

    fn run_engine(&self, args: Vec<OsString>) -> Result<String, EngineError> {
        let output = Command::new(&self.program)
            .args(&args)
            .output()
            .map_err(|e| EngineError::Spawn {
                program: self.program.clone(),
                source: e,
            })?;
        if !output.status.success() {
            return Err(EngineError::Failed {
                program: self.program.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Parses the `detect` subcommand's stdout: a JSON array of region
/// descriptors, surrounding whitespace tolerated.
pub fn parse_detections(stdout: &str) -> Result<Vec<DetectedRegion>, EngineError> {
    serde_json::from_str(stdout.trim()).map_err(EngineError::InvalidDetections)
}

impl TextRemover for CommandRemover {
    fn detect_text_regions(
        &mut self,
        path: &Path,
    ) -> Result<Vec<DetectedRegion>, Box<dyn std::error::Error>> {
        let stdout = self.run_engine(vec!["detect".into(), path.into()])?;
        let regions = parse_detections(&stdout)?;
        self.input = Some(path.to_path_buf());
        log::debug!(
            "engine {} reported {} region(s)",
            self.program.display(),
            regions.len()
        );
        Ok(regions)
    }

    fn process_video(
        &mut self,
        output_path: &Path,
        remove_regions: &[usize],
    ) -> Result<PathBuf, Box<dyn std::error::Error>> {
        let input = self.input.as_ref().ok_or(EngineError::NoInput)?;

        let mut args: Vec<OsString> = vec!["process".into(), input.into(), output_path.into()];
        if !remove_regions.is_empty() {
            let joined = remove_regions
                .iter()
                .map(|i| i.to_string())
                .collect::<Vec<_>>()
                .join(",");
            args.push("--regions".into());
            args.push(joined.into());
        }

        let stdout = self.run_engine(args)?;
        // Engines echo the written path; fall back to the requested one.
        let written = stdout
            .lines()
            .rev()
            .find(|line| !line.trim().is_empty())
            .map(|line| PathBuf::from(line.trim()))
            .unwrap_or_else(|| output_path.to_path_buf());
        Ok(written)
    }
}
