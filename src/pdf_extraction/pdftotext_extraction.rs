// Layout-aware text extraction using poppler's pdftotext
use std::path::Path;
use std::process::Command;
use tracing::debug;

use super::{lopdf_helper, TextStrategy};
use crate::types::StrategyError;

const FORM_FEED: char = '\x0c';

/// First engine. Runs `pdftotext -f N -l N <pdf> -` once per page.
#[derive(Debug, Clone)]
pub struct PdfToTextStrategy {
    bin: String,
}

impl PdfToTextStrategy {
    pub fn new(bin: impl Into<String>) -> Self {
        Self { bin: bin.into() }
    }

    fn run(&self, pdf_path: &Path, page_index: Option<usize>) -> Result<String, StrategyError> {
        let mut command = Command::new(&self.bin);
        if let Some(index) = page_index {
            let page = (index + 1).to_string(); // pdftotext is 1-indexed
            command.args(["-f", &page, "-l", &page]);
        }
        // "-" sends the text to stdout
        command.arg(pdf_path).arg("-");

        let output = command.output().map_err(|source| StrategyError::Spawn {
            tool: self.bin.clone(),
            source,
        })?;

        if !output.status.success() {
            return Err(StrategyError::ToolFailed {
                tool: self.bin.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Whole document in one call, split on the form feed pdftotext puts after each page
    fn run_whole_document(&self, pdf_path: &Path) -> Result<Vec<String>, StrategyError> {
        let text = self.run(pdf_path, None)?;
        let mut pages: Vec<String> = text.split(FORM_FEED).map(str::to_string).collect();
        if pages.len() > 1 && pages.last().is_some_and(|p| p.trim().is_empty()) {
            pages.pop();
        }
        Ok(pages)
    }
}

impl TextStrategy for PdfToTextStrategy {
    fn name(&self) -> &str {
        "pdftotext"
    }

    fn extract_pages(&self, pdf_path: &Path) -> Result<Vec<String>, StrategyError> {
        let page_count = match lopdf_helper::get_page_count(pdf_path) {
            Ok(count) => count,
            Err(e) => {
                debug!("pdftotext: page count unavailable ({}), converting whole document", e);
                return self.run_whole_document(pdf_path);
            }
        };

        let mut pages = Vec::with_capacity(page_count);
        for index in 0..page_count {
            match self.run(pdf_path, Some(index)) {
                Ok(text) => pages.push(text.trim_end_matches(FORM_FEED).to_string()),
                // a missing binary fails every page the same way
                Err(e @ StrategyError::Spawn { .. }) => return Err(e),
                Err(e) => {
                    debug!("pdftotext: page {} yielded no text: {}", index + 1, e);
                    pages.push(String::new());
                }
            }
        }
        Ok(pages)
    }
}
