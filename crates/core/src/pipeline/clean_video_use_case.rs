use std::path::{Path, PathBuf};

use crate::removal::domain::text_remover::TextRemover;
use crate::selection::domain::region_selector::RegionSelector;

/// Outcome of a completed cleaning run.
#[derive(Clone, Debug, PartialEq)]
pub struct CleanReport {
    /// Path the engine reported writing, verbatim.
    pub output_path: PathBuf,
    /// Number of regions the engine detected.
    pub detected: usize,
    /// Indices forwarded to the engine for removal.
    pub removed: Vec<usize>,
}

impl CleanReport {
    /// The single stdout line a cleaning run ends with.
    pub fn summary_line(&self) -> String {
        format!("Cleaned video saved to: {}", self.output_path.display())
    }
}

/// Orchestrates one cleaning run: detect, select, process.
///
/// The sequence is strict — selection needs the detection listing and
/// processing needs the selection — and any failure aborts the remaining
/// steps. The use case passes the input path and the selected indices to
/// the engine untouched; it never inspects or repairs either.
pub struct CleanVideoUseCase {
    remover: Box<dyn TextRemover>,
    selector: Box<dyn RegionSelector>,
}

impl CleanVideoUseCase {
    pub fn new(remover: Box<dyn TextRemover>, selector: Box<dyn RegionSelector>) -> Self {
        Self { remover, selector }
    }

    pub fn execute(
        &mut self,
        input: &Path,
        output: &Path,
    ) -> Result<CleanReport, Box<dyn std::error::Error>> {
        let regions = self.remover.detect_text_regions(input)?;
        log::info!(
            "Detected {} text/logo region(s) in {}",
            regions.len(),
            input.display()
        );
        for (index, region) in regions.iter().enumerate() {
            log::debug!("[{index}] {}", region.summary());
        }

        let selected = self.selector.select(&regions);
        log::info!("Removing region(s) {selected:?}");

        let written = self.remover.process_video(output, &selected)?;
        Ok(CleanReport {
            output_path: written,
            detected: regions.len(),
            removed: selected,
        })
    }
}
