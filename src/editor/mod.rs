use crate::core::model::{ParseResult, WordPair};

/// One editable row of the draft. Either side may be empty while the
/// user is still typing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftPair {
    pub foreign: String,
    pub native: String,
}

impl DraftPair {
    pub fn is_blank(&self) -> bool {
        self.foreign.is_empty() && self.native.is_empty()
    }
}

/// An in-progress word list as the editing surface sees it. A scan is a
/// convenience pre-fill merged into whatever the user already typed; the
/// user keeps full manual control afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordListDraft {
    pub title: String,
    pub pairs: Vec<DraftPair>,
}

impl Default for WordListDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl WordListDraft {
    /// A fresh draft starts with one blank row ready for input.
    pub fn new() -> Self {
        Self {
            title: String::new(),
            pairs: vec![DraftPair::default()],
        }
    }

    pub fn add_pair(&mut self) {
        self.pairs.push(DraftPair::default());
    }

    pub fn remove_pair(&mut self, index: usize) {
        if index < self.pairs.len() {
            self.pairs.remove(index);
        }
    }

    /// Merge a scan into the draft: the scanned title fills an empty
    /// title field, a blank trailing placeholder row gives way to the
    /// scanned pairs, and an emptied-out draft gets its blank row back.
    pub fn merge_scan(&mut self, scan: &ParseResult) {
        if let Some(scanned_title) = scan.title.as_deref() {
            if !scanned_title.is_empty() && self.title.is_empty() {
                self.title = scanned_title.to_string();
            }
        }

        if self.pairs.last().is_some_and(DraftPair::is_blank) {
            self.pairs.pop();
        }
        self.pairs.extend(scan.pairs.iter().map(|pair| DraftPair {
            foreign: pair.foreign.clone(),
            native: pair.native.clone(),
        }));
        if self.pairs.is_empty() {
            self.pairs.push(DraftPair::default());
        }
    }

    /// Rows worth saving: a pair needs at least its native term.
    pub fn committed_pairs(&self) -> Vec<WordPair> {
        self.pairs
            .iter()
            .filter(|pair| !pair.native.is_empty())
            .map(|pair| WordPair::new(pair.foreign.clone(), pair.native.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn scan(title: Option<&str>, pairs: &[(&str, &str)]) -> ParseResult {
        ParseResult {
            title: title.map(str::to_string),
            pairs: pairs
                .iter()
                .map(|(foreign, native)| WordPair::new(*foreign, *native))
                .collect(),
            debug: None,
        }
    }

    #[test]
    fn scan_fills_empty_title() {
        let mut draft = WordListDraft::new();
        draft.merge_scan(&scan(Some("Vecka 5"), &[("water", "vatten")]));
        assert_eq!(draft.title, "Vecka 5");
    }

    #[test]
    fn scan_does_not_overwrite_existing_title() {
        let mut draft = WordListDraft::new();
        draft.title = "My own title".to_string();
        draft.merge_scan(&scan(Some("Vecka 5"), &[]));
        assert_eq!(draft.title, "My own title");
    }

    #[test]
    fn blank_placeholder_is_replaced_by_scanned_pairs() {
        let mut draft = WordListDraft::new();
        draft.merge_scan(&scan(None, &[("water", "vatten"), ("house", "hus")]));
        assert_eq!(
            draft.pairs,
            vec![
                DraftPair {
                    foreign: "water".to_string(),
                    native: "vatten".to_string(),
                },
                DraftPair {
                    foreign: "house".to_string(),
                    native: "hus".to_string(),
                },
            ]
        );
    }

    #[test]
    fn partially_filled_last_row_is_kept() {
        let mut draft = WordListDraft::new();
        draft.pairs[0].native = "katt".to_string();
        draft.merge_scan(&scan(None, &[("water", "vatten")]));
        assert_eq!(draft.pairs.len(), 2);
        assert_eq!(draft.pairs[0].native, "katt");
    }

    #[test]
    fn empty_scan_leaves_a_blank_row() {
        let mut draft = WordListDraft::new();
        draft.merge_scan(&scan(None, &[]));
        assert_eq!(draft.pairs, vec![DraftPair::default()]);
    }

    #[test]
    fn committed_pairs_require_a_native_term() {
        let mut draft = WordListDraft::new();
        draft.pairs = vec![
            DraftPair {
                foreign: "water".to_string(),
                native: "vatten".to_string(),
            },
            DraftPair {
                foreign: "half-typed".to_string(),
                native: String::new(),
            },
        ];
        assert_eq!(
            draft.committed_pairs(),
            vec![WordPair::new("water", "vatten")]
        );
    }
}
