use crate::core::model::TextObservation;
use crate::layout::rows::Row;

/// Reserved column-boundary token injected between the two sides of a
/// row. Protocol between serialization and parsing only; recognized sheet
/// text containing this exact substring would mis-split, which is an
/// accepted limitation rather than something to escape around.
pub const SPLIT_MARKER: &str = "|SPLIT|";

/// Serialize one row into a single line, marking the column boundary.
///
/// Members are read left-to-right; the widest horizontal gap between
/// adjacent members is taken as the boundary between the foreign and
/// native columns. A single-cut heuristic: rows with more than two
/// columns are out of scope.
pub fn serialize_row(row: &Row) -> String {
    let mut members: Vec<&TextObservation> = row.members.iter().collect();
    members.sort_by(|a, b| a.bbox.x0.total_cmp(&b.bbox.x0));

    if members.len() < 2 {
        return members
            .iter()
            .map(|member| member.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
    }

    let mut max_gap = 0.0_f32;
    let mut split_index = 0;
    for i in 0..members.len() - 1 {
        let gap = members[i + 1].bbox.x0 - members[i].bbox.x1;
        if gap > max_gap {
            max_gap = gap;
            split_index = i;
        }
    }

    let left = join_texts(&members[..=split_index]);
    let right = join_texts(&members[split_index + 1..]);

    if right.is_empty() {
        return left;
    }
    format!("{left} {SPLIT_MARKER} {right}")
}

fn join_texts(members: &[&TextObservation]) -> String {
    members
        .iter()
        .map(|member| member.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
