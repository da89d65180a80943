pub mod rows;
pub mod serialize;

pub use serialize::SPLIT_MARKER;

use crate::core::model::TextObservation;

/// Tunables for the row-reconstruction pass.
#[derive(Debug, Clone, Copy)]
pub struct LayoutConfig {
    /// Two observations belong to the same row when their mid_y values
    /// differ by less than this, in normalized page units. Wide enough to
    /// tolerate page tilt and curvature without merging adjacent lines.
    pub row_threshold: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            row_threshold: 0.03,
        }
    }
}

/// Reconstruct the serialized line sequence, top-to-bottom, from an
/// unordered set of observations.
pub fn build_lines(observations: &[TextObservation], config: &LayoutConfig) -> Vec<String> {
    rows::cluster_rows(observations, config.row_threshold)
        .iter()
        .map(serialize::serialize_row)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry::BoundingBox;
    use pretty_assertions::assert_eq;

    fn obs(text: &str, x0: f32, x1: f32, y: f32) -> TextObservation {
        TextObservation::new(text, BoundingBox::new(x0, y - 0.01, x1, y + 0.01))
    }

    #[test]
    fn builds_lines_top_to_bottom() {
        let observations = vec![
            obs("2. house", 0.1, 0.25, 0.5),
            obs("Veckans ord", 0.1, 0.4, 0.9),
            obs("hus", 0.7, 0.78, 0.5),
            obs("1. water", 0.1, 0.25, 0.7),
            obs("vatten", 0.7, 0.82, 0.7),
        ];
        let lines = build_lines(&observations, &LayoutConfig::default());
        assert_eq!(
            lines,
            vec![
                "Veckans ord".to_string(),
                format!("1. water {SPLIT_MARKER} vatten"),
                format!("2. house {SPLIT_MARKER} hus"),
            ]
        );
    }

    #[test]
    fn line_sequence_is_independent_of_observation_order() {
        let mut observations = vec![
            obs("1. water", 0.1, 0.25, 0.7),
            obs("vatten", 0.7, 0.82, 0.7),
            obs("2. house", 0.1, 0.25, 0.5),
            obs("hus", 0.7, 0.78, 0.5),
        ];
        let forward = build_lines(&observations, &LayoutConfig::default());
        observations.reverse();
        let reversed = build_lines(&observations, &LayoutConfig::default());
        assert_eq!(forward, reversed);
    }

    #[test]
    fn empty_input_builds_no_lines() {
        let lines = build_lines(&[], &LayoutConfig::default());
        assert!(lines.is_empty());
    }
}
