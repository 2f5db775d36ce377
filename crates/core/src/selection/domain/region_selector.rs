use crate::shared::region::DetectedRegion;

/// Picks which detected regions should be removed.
///
/// Returns indices into `regions` in selection order. The indices are
/// forwarded to the engine exactly as returned — no validation, reordering,
/// or deduplication happens downstream — so a selector is the single place
/// where the choice is made.
pub trait RegionSelector: Send {
    fn select(&self, regions: &[DetectedRegion]) -> Vec<usize>;
}

/// Operator-chosen indices, forwarded verbatim.
///
/// Out-of-range or repeated indices are passed through untouched; whether
/// they are acceptable is the engine's call.
pub struct ManualSelector {
    indices: Vec<usize>,
}

impl ManualSelector {
    pub fn new(indices: Vec<usize>) -> Self {
        Self { indices }
    }
}

impl RegionSelector for ManualSelector {
    fn select(&self, _regions: &[DetectedRegion]) -> Vec<usize> {
        self.indices.clone()
    }
}

/// Selects the single region with the largest bounding-box area.
///
/// Ties keep the earliest index; an empty listing selects nothing.
pub struct LargestSelector;

impl RegionSelector for LargestSelector {
    fn select(&self, regions: &[DetectedRegion]) -> Vec<usize> {
        let mut best: Option<(usize, i64)> = None;
        for (index, region) in regions.iter().enumerate() {
            let area = region.area();
            if best.map_or(true, |(_, best_area)| area > best_area) {
                best = Some((index, area));
            }
        }
        best.map(|(index, _)| vec![index]).unwrap_or_default()
    }
}

/// Selects every region whose label contains the needle,
/// case-insensitively. Unlabeled regions never match.
pub struct LabelSelector {
    needle: String,
}

impl LabelSelector {
    pub fn new(needle: String) -> Self {
        Self { needle }
    }
}

impl RegionSelector for LabelSelector {
    fn select(&self, regions: &[DetectedRegion]) -> Vec<usize> {
        regions
            .iter()
            .enumerate()
            .filter(|(_, r)| r.matches_label(&self.needle))
            .map(|(index, _)| index)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(w: i32, h: i32, label: Option<&str>) -> DetectedRegion {
        DetectedRegion {
            x: 0,
            y: 0,
            width: w,
            height: h,
            first_frame: 0,
            last_frame: 0,
            confidence: 0.8,
            label: label.map(str::to_string),
        }
    }

    #[test]
    fn test_manual_returns_indices_verbatim() {
        // Order, duplicates, and out-of-range values all survive.
        let selector = ManualSelector::new(vec![3, 1, 1, 99]);
        let regions = vec![region(10, 10, None)];
        assert_eq!(selector.select(&regions), vec![3, 1, 1, 99]);
    }

    #[test]
    fn test_manual_empty_selects_nothing() {
        let selector = ManualSelector::new(vec![]);
        assert!(selector.select(&[region(10, 10, None)]).is_empty());
    }

    #[test]
    fn test_largest_picks_max_area() {
        let regions = vec![
            region(10, 10, None),
            region(50, 40, None),
            region(30, 30, None),
        ];
        assert_eq!(LargestSelector.select(&regions), vec![1]);
    }

    #[test]
    fn test_largest_tie_keeps_earliest_index() {
        let regions = vec![
            region(20, 20, None),
            region(40, 10, None), // same area as index 0
            region(5, 5, None),
        ];
        assert_eq!(LargestSelector.select(&regions), vec![0]);
    }

    #[test]
    fn test_largest_empty_listing_selects_nothing() {
        assert!(LargestSelector.select(&[]).is_empty());
    }

    #[test]
    fn test_label_matches_case_insensitive_substring() {
        let regions = vec![
            region(10, 10, Some("NotebookLLM watermark")),
            region(10, 10, Some("channel ident")),
            region(10, 10, None),
            region(10, 10, Some("notebookllm")),
        ];
        let selector = LabelSelector::new("notebookllm".to_string());
        assert_eq!(selector.select(&regions), vec![0, 3]);
    }

    #[test]
    fn test_label_no_matches_selects_nothing() {
        let regions = vec![region(10, 10, Some("scoreboard"))];
        let selector = LabelSelector::new("notebookllm".to_string());
        assert!(selector.select(&regions).is_empty());
    }
}
