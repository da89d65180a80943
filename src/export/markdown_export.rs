use std::fs;
use std::path::PathBuf;

use anyhow::Result;

use crate::core::model::ParseResult;
use crate::export::Exporter;

#[derive(Debug, Clone)]
pub struct MarkdownExporter {
    out_dir: PathBuf,
}

impl MarkdownExporter {
    pub fn new(out_dir: PathBuf) -> Self {
        Self { out_dir }
    }

    fn render(result: &ParseResult) -> String {
        let mut markdown = String::new();
        if let Some(title) = result.title.as_deref() {
            markdown.push_str(&format!("# {title}\n\n"));
        }
        for (index, pair) in result.pairs.iter().enumerate() {
            markdown.push_str(&format!(
                "{}. {} - {}\n",
                index + 1,
                pair.foreign,
                pair.native
            ));
        }
        if result.pairs.is_empty() {
            markdown.push_str("_No word pairs recognized._\n");
        }
        markdown
    }
}

impl Exporter for MarkdownExporter {
    fn export(&self, result: &ParseResult) -> Result<()> {
        fs::create_dir_all(&self.out_dir)?;
        let path = self.out_dir.join("wordlist.md");
        fs::write(path, Self::render(result))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::WordPair;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_title_and_numbered_pairs() {
        let result = ParseResult {
            title: Some("Vecka 5".to_string()),
            pairs: vec![
                WordPair::new("water", "vatten"),
                WordPair::new("ice cream", "glass"),
            ],
            debug: None,
        };
        assert_eq!(
            MarkdownExporter::render(&result),
            "# Vecka 5\n\n1. water - vatten\n2. ice cream - glass\n"
        );
    }

    #[test]
    fn renders_placeholder_for_empty_results() {
        let result = ParseResult::default();
        assert_eq!(
            MarkdownExporter::render(&result),
            "_No word pairs recognized._\n"
        );
    }
}
