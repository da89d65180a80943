use serde::{Deserialize, Serialize};

use crate::core::geometry::BoundingBox;

/// One detected text fragment from the recognition engine: the best
/// recognition candidate plus its normalized bounding box. Produced
/// entirely upstream; the reconstruction stages never mutate it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TextObservation {
    pub text: String,
    pub bbox: BoundingBox,
}

impl TextObservation {
    pub fn new(text: impl Into<String>, bbox: BoundingBox) -> Self {
        Self {
            text: text.into(),
            bbox,
        }
    }
}

/// A foreign/native word pair, in reading order off the sheet: left
/// column is the foreign term, right column the native term.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WordPair {
    pub foreign: String,
    pub native: String,
}

impl WordPair {
    pub fn new(foreign: impl Into<String>, native: impl Into<String>) -> Self {
        Self {
            foreign: foreign.into(),
            native: native.into(),
        }
    }
}

/// The recovered structure of one scanned sheet. Created fresh per scan;
/// merging into any longer-lived word list is the caller's concern.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParseResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub pairs: Vec<WordPair>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<ScanDebug>,
}

/// Intermediate reconstruction state kept for the debug exporter: the raw
/// observations and the serialized lines they produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanDebug {
    pub observations: Vec<TextObservation>,
    pub lines: Vec<String>,
}
