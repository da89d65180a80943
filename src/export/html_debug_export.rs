use std::fs;
use std::path::PathBuf;

use anyhow::Result;

use crate::core::model::{ParseResult, ScanDebug, TextObservation};
use crate::export::Exporter;

/// Writes an interactive view of the reconstruction: every observation
/// box positioned on a page-shaped canvas, the serialized lines with the
/// column marker visible, and the parsed pairs. Emitted only when the
/// pipeline attached debug data.
#[derive(Debug, Clone)]
pub struct HtmlDebugExporter {
    out_dir: PathBuf,
}

impl HtmlDebugExporter {
    pub fn new(out_dir: PathBuf) -> Self {
        Self { out_dir }
    }

    fn observation_to_div(observation: &TextObservation) -> String {
        let bbox = observation.bbox;
        // Normalized coordinates use a bottom-left origin; CSS offsets run
        // from the top, so y flips here.
        format!(
            r#"<div class='obs' style='left:{left:.2}%; top:{top:.2}%; width:{width:.2}%; height:{height:.2}%;' data-text='{text}'>{text}</div>"#,
            left = bbox.x0 * 100.0,
            top = (1.0 - bbox.y1) * 100.0,
            width = bbox.width() * 100.0,
            height = bbox.height() * 100.0,
            text = html_escape::encode_text(&observation.text),
        )
    }

    fn render(result: &ParseResult, debug: &ScanDebug) -> String {
        let boxes = debug
            .observations
            .iter()
            .map(Self::observation_to_div)
            .collect::<Vec<_>>()
            .join("\n");

        let lines = debug
            .lines
            .iter()
            .map(|line| format!("<li><code>{}</code></li>", html_escape::encode_text(line)))
            .collect::<Vec<_>>()
            .join("\n");

        let pairs = result
            .pairs
            .iter()
            .map(|pair| {
                format!(
                    "<tr><td>{}</td><td>{}</td></tr>",
                    html_escape::encode_text(&pair.foreign),
                    html_escape::encode_text(&pair.native),
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        let title = result
            .title
            .as_deref()
            .map(|title| html_escape::encode_text(title).into_owned())
            .unwrap_or_else(|| "(no title)".to_string());

        format!(
            r#"<!DOCTYPE html>
<html>
<head>
<meta charset='utf-8'>
<title>scan debug</title>
<style>
body {{ font-family: sans-serif; margin: 20px; }}
.page {{ position: relative; width: 620px; height: 877px; border: 1px solid #888; background: #fdfdfd; }}
.obs {{ position: absolute; border: 1px solid #c33; background: rgba(204,51,51,0.08); font-size: 9px; overflow: hidden; }}
table {{ border-collapse: collapse; }}
td {{ border: 1px solid #aaa; padding: 2px 8px; }}
</style>
</head>
<body>
<h1>{title}</h1>
<h2>Observations</h2>
<div class='page'>
{boxes}
</div>
<h2>Serialized lines</h2>
<ol>
{lines}
</ol>
<h2>Pairs</h2>
<table>
<tr><th>foreign</th><th>native</th></tr>
{pairs}
</table>
</body>
</html>
"#
        )
    }
}

impl Exporter for HtmlDebugExporter {
    fn export(&self, result: &ParseResult) -> Result<()> {
        let Some(debug) = result.debug.as_ref() else {
            return Ok(());
        };
        fs::create_dir_all(&self.out_dir)?;
        let path = self.out_dir.join("scan.html");
        fs::write(path, Self::render(result, debug))?;
        Ok(())
    }
}
