use std::path::{Path, PathBuf};

use crate::shared::region::DetectedRegion;

/// Domain interface for a video text-removal engine.
///
/// The engine owns everything visual: how overlays are found, how they are
/// erased (masking, inpainting), and how the video is decoded and encoded.
/// Implementations are stateful — `process_video` operates on the video most
/// recently opened by `detect_text_regions` — hence `&mut self`.
pub trait TextRemover: Send {
    /// Locates text/logo overlays in the video without modifying it.
    ///
    /// The returned order is the engine's ranking and defines the region
    /// indices used everywhere else.
    fn detect_text_regions(
        &mut self,
        path: &Path,
    ) -> Result<Vec<DetectedRegion>, Box<dyn std::error::Error>>;

    /// Writes a copy of the opened video with the given regions removed
    /// and returns the path actually written.
    ///
    /// `remove_regions` indexes into the sequence returned by the last
    /// `detect_text_regions` call and is forwarded untouched; validating
    /// the indices is the engine's concern. Calling this before any
    /// detection is an error.
    fn process_video(
        &mut self,
        output_path: &Path,
        remove_regions: &[usize],
    ) -> Result<PathBuf, Box<dyn std::error::Error>>;
}
