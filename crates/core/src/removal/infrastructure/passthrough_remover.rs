use std::fs;
use std::path::{Path, PathBuf};

use crate::removal::domain::text_remover::TextRemover;
use crate::shared::region::DetectedRegion;

/// Engine stand-in that performs no visual work.
///
/// Detection reports whatever regions it was constructed with (none by
/// default) and processing copies the opened input byte-for-byte to the
/// output path. Useful for dry runs of the orchestration and as a test
/// double; real engines plug in behind the same trait.
pub struct PassthroughRemover {
    scripted: Vec<DetectedRegion>,
    input: Option<PathBuf>,
}

impl PassthroughRemover {
    pub fn new() -> Self {
        Self {
            scripted: Vec::new(),
            input: None,
        }
    }

    /// Reports the given regions from every `detect_text_regions` call.
    pub fn with_regions(scripted: Vec<DetectedRegion>) -> Self {
        Self {
            scripted,
            input: None,
        }
    }
}

impl Default for PassthroughRemover {
    fn default() -> Self {
        Self::new()
    }
}

impl TextRemover for PassthroughRemover {
    fn detect_text_regions(
        &mut self,
        path: &Path,
    ) -> Result<Vec<DetectedRegion>, Box<dyn std::error::Error>> {
        self.input = Some(path.to_path_buf());
        Ok(self.scripted.clone())
    }

    fn process_video(
        &mut self,
        output_path: &Path,
        _remove_regions: &[usize],
    ) -> Result<PathBuf, Box<dyn std::error::Error>> {
        let input = self
            .input
            .as_ref()
            .ok_or("no video opened; call detect_text_regions first")?;
        fs::copy(input, output_path)?;
        Ok(output_path.to_path_buf())
    }
}
