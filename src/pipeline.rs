use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::{debug, warn};

use crate::core::model::{ParseResult, ScanDebug, TextObservation};
use crate::export::{Exporter, HtmlDebugExporter, JsonExporter, MarkdownExporter};
use crate::layout::{self, LayoutConfig};
use crate::ocr::{OcrBridge, Recognizer};
use crate::parse::parse_lines;

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub lang: String,
    pub script: Option<PathBuf>,
    pub layout: LayoutConfig,
    pub debug: bool,
}

impl PipelineConfig {
    pub fn new(input: PathBuf, output: PathBuf) -> Self {
        Self {
            input,
            output,
            lang: "en+sv".to_string(),
            script: None,
            layout: LayoutConfig::default(),
            debug: false,
        }
    }
}

/// Run the full scan: recognition, row reconstruction, parsing.
///
/// A recognition failure degrades to an empty page rather than failing
/// the scan; the sheet is noisy camera input and the user edits the
/// result by hand either way.
pub fn scan_page(config: &PipelineConfig) -> Result<ParseResult> {
    let mut bridge = OcrBridge::new().with_lang(config.lang.clone());
    if let Some(script) = &config.script {
        bridge = bridge.with_script(script.clone());
    }
    let observations = match bridge.recognize(&config.input) {
        Ok(observations) => observations,
        Err(err) => {
            warn!("recognition failed, treating page as empty: {err:#}");
            Vec::new()
        }
    };
    Ok(reconstruct_page(observations, &config.layout, config.debug))
}

/// The pure reconstruction core: observations in, structured result out.
/// No I/O; callable from any execution context.
pub fn reconstruct_page(
    observations: Vec<TextObservation>,
    layout: &LayoutConfig,
    keep_debug: bool,
) -> ParseResult {
    let lines = layout::build_lines(&observations, layout);
    debug!(
        observations = observations.len(),
        lines = lines.len(),
        "reconstructed line sequence"
    );
    let mut result = parse_lines(&lines);
    if keep_debug {
        result.debug = Some(ScanDebug {
            observations,
            lines,
        });
    }
    result
}

pub fn export_result(result: &ParseResult, output: &Path) -> Result<()> {
    let json_exporter = JsonExporter::new(output.to_path_buf());
    json_exporter.export(result)?;

    let markdown_exporter = MarkdownExporter::new(output.to_path_buf());
    markdown_exporter.export(result)?;

    let html_exporter = HtmlDebugExporter::new(output.join("debug"));
    html_exporter.export(result)?;

    Ok(())
}
