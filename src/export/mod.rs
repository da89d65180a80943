pub mod html_debug_export;
pub mod json_export;
pub mod markdown_export;

use anyhow::Result;

use crate::core::model::ParseResult;

pub use html_debug_export::HtmlDebugExporter;
pub use json_export::JsonExporter;
pub use markdown_export::MarkdownExporter;

pub trait Exporter {
    fn export(&self, result: &ParseResult) -> Result<()>;
}
