use std::fmt::Write as _;
use std::path::Path;

use crate::removal::domain::text_remover::TextRemover;
use crate::shared::region::DetectedRegion;

/// Detection-only scan for operator inspection.
///
/// Runs the engine's detector and hands back the ordered listing so a human
/// can read off the indices of unwanted overlays before a cleaning run.
/// Nothing is written.
pub struct InspectRegionsUseCase {
    remover: Box<dyn TextRemover>,
}

impl InspectRegionsUseCase {
    pub fn new(remover: Box<dyn TextRemover>) -> Self {
        Self { remover }
    }

    pub fn execute(
        &mut self,
        input: &Path,
    ) -> Result<Vec<DetectedRegion>, Box<dyn std::error::Error>> {
        let regions = self.remover.detect_text_regions(input)?;
        log::info!(
            "Detected {} text/logo region(s) in {}",
            regions.len(),
            input.display()
        );
        Ok(regions)
    }
}

/// Renders the numbered listing shown to the operator.
pub fn listing(regions: &[DetectedRegion]) -> String {
    if regions.is_empty() {
        return "No text or logo regions detected.\n".to_string();
    }
    let mut out = String::new();
    for (index, region) in regions.iter().enumerate() {
        let _ = writeln!(out, "[{index}] {}", region.summary());
    }
    out
}
