use crate::selection::domain::region_selector::{
    LabelSelector, LargestSelector, ManualSelector, RegionSelector,
};
use crate::shared::job::SelectorSpec;

/// Builds the selector implementing a `SelectorSpec`.
pub fn create_selector(spec: &SelectorSpec) -> Box<dyn RegionSelector> {
    match spec {
        SelectorSpec::Manual(indices) => Box::new(ManualSelector::new(indices.clone())),
        SelectorSpec::Largest => Box::new(LargestSelector),
        SelectorSpec::Label(needle) => Box::new(LabelSelector::new(needle.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::region::DetectedRegion;

    fn regions() -> Vec<DetectedRegion> {
        vec![
            DetectedRegion {
                x: 0,
                y: 0,
                width: 10,
                height: 10,
                first_frame: 0,
                last_frame: 0,
                confidence: 0.9,
                label: Some("ticker".to_string()),
            },
            DetectedRegion {
                x: 0,
                y: 0,
                width: 80,
                height: 80,
                first_frame: 0,
                last_frame: 0,
                confidence: 0.9,
                label: None,
            },
        ]
    }

    #[test]
    fn test_manual_spec_builds_manual_selector() {
        let selector = create_selector(&SelectorSpec::Manual(vec![1, 0]));
        assert_eq!(selector.select(&regions()), vec![1, 0]);
    }

    #[test]
    fn test_largest_spec_builds_largest_selector() {
        let selector = create_selector(&SelectorSpec::Largest);
        assert_eq!(selector.select(&regions()), vec![1]);
    }

    #[test]
    fn test_label_spec_builds_label_selector() {
        let selector = create_selector(&SelectorSpec::Label("tick".to_string()));
        assert_eq!(selector.select(&regions()), vec![0]);
    }
}
