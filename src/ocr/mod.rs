pub mod bridge;
pub mod normalize;

pub use bridge::OcrBridge;

use anyhow::Result;
use std::path::Path;

use crate::core::model::TextObservation;

/// The recognition-engine boundary. Implementations eventually produce a
/// finite set of observations for one page image, or an empty set when
/// nothing was detected.
pub trait Recognizer {
    fn recognize(&self, image_path: &Path) -> Result<Vec<TextObservation>>;
}
