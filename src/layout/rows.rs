use crate::core::model::TextObservation;

/// Observations believed to lie on the same horizontal text line.
/// The first member is the row's anchor: every later member was within
/// the clustering threshold of it when assigned.
#[derive(Debug, Clone)]
pub struct Row {
    pub members: Vec<TextObservation>,
}

impl Row {
    fn anchor_mid_y(&self) -> f32 {
        self.members[0].bbox.mid_y()
    }
}

/// Group unordered observations into rows, top-to-bottom.
///
/// Greedy single pass over observations sorted by descending mid_y: each
/// observation joins the first existing row whose anchor is within
/// `threshold`, else opens a new row. Comparing against the anchor rather
/// than a running centroid keeps cluster boundaries stable; a late loose
/// match cannot drag a row toward its neighbor.
pub fn cluster_rows(observations: &[TextObservation], threshold: f32) -> Vec<Row> {
    let mut sorted: Vec<TextObservation> = observations.to_vec();
    sorted.sort_by(|a, b| b.bbox.mid_y().total_cmp(&a.bbox.mid_y()));

    let mut rows: Vec<Row> = Vec::new();
    for obs in sorted {
        let mid_y = obs.bbox.mid_y();
        match rows
            .iter_mut()
            .find(|row| (row.anchor_mid_y() - mid_y).abs() < threshold)
        {
            Some(row) => row.members.push(obs),
            None => rows.push(Row { members: vec![obs] }),
        }
    }

    // Creation order already tracks descending mid_y, but ties during the
    // initial sort make that an accident rather than a guarantee.
    rows.sort_by(|a, b| b.anchor_mid_y().total_cmp(&a.anchor_mid_y()));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry::BoundingBox;
    use pretty_assertions::assert_eq;

    fn obs(text: &str, x0: f32, y: f32) -> TextObservation {
        TextObservation::new(text, BoundingBox::new(x0, y - 0.01, x0 + 0.1, y + 0.01))
    }

    #[test]
    fn empty_input_yields_no_rows() {
        assert!(cluster_rows(&[], 0.03).is_empty());
    }

    #[test]
    fn single_observation_yields_single_member_row() {
        let rows = cluster_rows(&[obs("hello", 0.1, 0.5)], 0.03);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].members.len(), 1);
    }

    #[test]
    fn groups_tilted_neighbors_into_one_row() {
        // Slight vertical offset between columns, as a tilted photo produces.
        let rows = cluster_rows(&[obs("water", 0.1, 0.50), obs("vatten", 0.6, 0.52)], 0.03);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].members.len(), 2);
    }

    #[test]
    fn separates_distinct_lines() {
        let rows = cluster_rows(&[obs("water", 0.1, 0.50), obs("house", 0.1, 0.42)], 0.03);
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn orders_rows_top_to_bottom() {
        let rows = cluster_rows(
            &[
                obs("bottom", 0.1, 0.2),
                obs("top", 0.1, 0.9),
                obs("middle", 0.1, 0.5),
            ],
            0.03,
        );
        let texts: Vec<&str> = rows
            .iter()
            .map(|row| row.members[0].text.as_str())
            .collect();
        assert_eq!(texts, vec!["top", "middle", "bottom"]);
    }

    #[test]
    fn grouping_does_not_depend_on_input_order() {
        let a = obs("water", 0.1, 0.50);
        let b = obs("vatten", 0.6, 0.52);
        let c = obs("house", 0.1, 0.42);

        let forward = cluster_rows(&[a.clone(), b.clone(), c.clone()], 0.03);
        let shuffled = cluster_rows(&[c, b, a], 0.03);

        assert_eq!(forward.len(), shuffled.len());
        for (x, y) in forward.iter().zip(shuffled.iter()) {
            assert_eq!(x.members.len(), y.members.len());
        }
    }
}
