use serde::{Deserialize, Serialize};

/// A detected text or logo overlay within a video.
///
/// Coordinates are pixels in the source frame; the frame span is inclusive
/// on both ends. Detection results are an ordered sequence, and a region's
/// index is its position in that sequence — that index is what operators
/// and selectors use to name a region for removal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DetectedRegion {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub first_frame: usize,
    pub last_frame: usize,
    pub confidence: f64,
    /// Recognized overlay text or logo name, when the engine provides one.
    #[serde(default)]
    pub label: Option<String>,
}

impl DetectedRegion {
    /// Bounding-box area in pixels. Degenerate dimensions count as zero.
    pub fn area(&self) -> i64 {
        self.width.max(0) as i64 * self.height.max(0) as i64
    }

    /// Case-insensitive substring match against the region label.
    ///
    /// Unlabeled regions never match.
    pub fn matches_label(&self, needle: &str) -> bool {
        self.label
            .as_deref()
            .is_some_and(|label| label.to_lowercase().contains(&needle.to_lowercase()))
    }

    /// One-line human-readable description for operator listings.
    pub fn summary(&self) -> String {
        let label = match &self.label {
            Some(label) => format!(", label \"{label}\""),
            None => String::new(),
        };
        format!(
            "{}x{} at ({}, {}), frames {}-{}, confidence {:.2}{}",
            self.width,
            self.height,
            self.x,
            self.y,
            self.first_frame,
            self.last_frame,
            self.confidence,
            label
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    fn region(w: i32, h: i32, label: Option<&str>) -> DetectedRegion {
        DetectedRegion {
            x: 10,
            y: 20,
            width: w,
            height: h,
            first_frame: 0,
            last_frame: 99,
            confidence: 0.9,
            label: label.map(str::to_string),
        }
    }

    #[test]
    fn test_area() {
        assert_eq!(region(120, 40, None).area(), 4800);
    }

    #[rstest]
    #[case::zero_width(0, 100)]
    #[case::negative_width(-5, 100)]
    #[case::negative_height(100, -1)]
    fn test_area_degenerate_is_zero(#[case] w: i32, #[case] h: i32) {
        assert_eq!(region(w, h, None).area(), 0);
    }

    #[rstest]
    #[case::exact("NotebookLLM", "NotebookLLM", true)]
    #[case::case_insensitive("NotebookLLM", "notebookllm", true)]
    #[case::substring("NotebookLLM watermark", "llm", true)]
    #[case::no_match("station ident", "notebookllm", false)]
    fn test_matches_label(#[case] label: &str, #[case] needle: &str, #[case] expected: bool) {
        assert_eq!(region(10, 10, Some(label)).matches_label(needle), expected);
    }

    #[test]
    fn test_matches_label_unlabeled_never_matches() {
        assert!(!region(10, 10, None).matches_label("anything"));
        assert!(!region(10, 10, None).matches_label(""));
    }

    #[test]
    fn test_summary_with_label() {
        let r = region(120, 40, Some("notebookllm"));
        assert_eq!(
            r.summary(),
            "120x40 at (10, 20), frames 0-99, confidence 0.90, label \"notebookllm\""
        );
    }

    #[test]
    fn test_summary_without_label() {
        let r = region(64, 64, None);
        assert_eq!(r.summary(), "64x64 at (10, 20), frames 0-99, confidence 0.90");
    }

    #[test]
    fn test_deserializes_without_label_field() {
        let json = r#"{
            "x": 600, "y": 20, "width": 120, "height": 40,
            "first_frame": 0, "last_frame": 299, "confidence": 0.92
        }"#;
        let r: DetectedRegion = serde_json::from_str(json).unwrap();
        assert_eq!(r.label, None);
        assert_eq!(r.width, 120);
        assert_relative_eq!(r.confidence, 0.92);
    }
}
