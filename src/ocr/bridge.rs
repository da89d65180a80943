use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

use crate::core::geometry::BoundingBox;
use crate::core::model::TextObservation;
use crate::ocr::normalize::clean_text;
use crate::ocr::Recognizer;

/// Wire format of the external recognizer script: pixel coordinates with
/// the raster convention (top-left origin, y grows downward).
#[derive(Debug, Clone, Deserialize)]
struct RawToken {
    text: String,
    bbox: [f32; 4],
    #[serde(default = "default_confidence")]
    confidence: f32,
}

fn default_confidence() -> f32 {
    0.5
}

#[derive(Debug, Clone)]
pub struct OcrBridge {
    script_path: PathBuf,
    lang: String,
}

impl Default for OcrBridge {
    fn default() -> Self {
        Self::new()
    }
}

impl OcrBridge {
    pub fn new() -> Self {
        Self {
            script_path: PathBuf::from("ocr/recognize.py"),
            lang: "en+sv".to_string(),
        }
    }

    pub fn with_script(mut self, script_path: PathBuf) -> Self {
        self.script_path = script_path;
        self
    }

    pub fn with_lang(mut self, lang: String) -> Self {
        self.lang = lang;
        self
    }

    fn run_script(&self, image_path: &Path) -> Result<Vec<RawToken>> {
        let output = Command::new("python3")
            .arg(&self.script_path)
            .arg("--image")
            .arg(image_path)
            .arg("--lang")
            .arg(&self.lang)
            .output()
            .with_context(|| "failed to invoke recognizer script")?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("recognizer failed: {stderr}");
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let tokens: Vec<RawToken> = serde_json::from_str(&stdout)
            .with_context(|| "failed to parse recognizer JSON response")?;
        Ok(tokens)
    }
}

impl Recognizer for OcrBridge {
    fn recognize(&self, image_path: &Path) -> Result<Vec<TextObservation>> {
        let tokens = self.run_script(image_path)?;
        let (width, height) = image::image_dimensions(image_path)
            .with_context(|| format!("failed to read image dimensions: {}", image_path.display()))?;
        debug!(
            tokens = tokens.len(),
            width, height, "recognizer returned tokens"
        );
        Ok(tokens_to_observations(tokens, width, height))
    }
}

/// Convert raw pixel-space tokens into normalized observations, flipping
/// y so that larger values sit higher on the page. Tokens whose text is
/// empty after cleaning carry no signal and are dropped.
fn tokens_to_observations(tokens: Vec<RawToken>, width: u32, height: u32) -> Vec<TextObservation> {
    let (width, height) = (width as f32, height as f32);
    tokens
        .into_iter()
        .filter_map(|token| {
            let text = clean_text(&token.text);
            if text.is_empty() {
                return None;
            }
            debug!(text = %text, confidence = token.confidence, "observation");
            let bbox = BoundingBox::new(
                token.bbox[0] / width,
                1.0 - token.bbox[3] / height,
                token.bbox[2] / width,
                1.0 - token.bbox[1] / height,
            );
            Some(TextObservation::new(text, bbox))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn normalizes_and_flips_pixel_boxes() {
        let tokens = vec![RawToken {
            text: "vatten".to_string(),
            bbox: [100.0, 50.0, 300.0, 100.0],
            confidence: 0.9,
        }];
        let observations = tokens_to_observations(tokens, 1000, 1000);
        assert_eq!(observations.len(), 1);
        let bbox = observations[0].bbox;
        assert_eq!(bbox.x0, 0.1);
        assert_eq!(bbox.x1, 0.3);
        // Pixel rows 50..100 sit near the top of the page.
        assert_eq!(bbox.y0, 0.9);
        assert_eq!(bbox.y1, 0.95);
    }

    #[test]
    fn drops_tokens_that_clean_to_empty() {
        let tokens = vec![RawToken {
            text: "   ".to_string(),
            bbox: [0.0, 0.0, 10.0, 10.0],
            confidence: 0.2,
        }];
        assert!(tokens_to_observations(tokens, 100, 100).is_empty());
    }

    #[test]
    fn parses_wire_format_with_default_confidence() {
        let json = r#"[{"text": "water", "bbox": [10.0, 20.0, 80.0, 40.0]}]"#;
        let tokens: Vec<RawToken> = serde_json::from_str(json).unwrap();
        assert_eq!(tokens[0].confidence, 0.5);
    }
}
