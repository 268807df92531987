// lopdf helper - Pure Rust PDF operations
use lopdf::Document;
use std::path::Path;
use tracing::debug;

use super::TextStrategy;
use crate::types::StrategyError;

/// Load a PDF document using lopdf
pub fn load_pdf(path: &Path) -> Result<Document, lopdf::Error> {
    Document::load(path)
}

pub fn get_page_count(path: &Path) -> Result<usize, lopdf::Error> {
    Ok(load_pdf(path)?.get_pages().len())
}

/// Second engine: reads the text-showing operators of each page's content stream
#[derive(Debug, Default, Clone)]
pub struct LopdfStrategy;

impl LopdfStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl TextStrategy for LopdfStrategy {
    fn name(&self) -> &str {
        "lopdf"
    }

    fn extract_pages(&self, pdf_path: &Path) -> Result<Vec<String>, StrategyError> {
        let document = load_pdf(pdf_path)?;

        // get_pages is keyed by 1-based page number, already sorted
        let pages = document
            .get_pages()
            .keys()
            .map(|&page_num| {
                document.extract_text(&[page_num]).unwrap_or_else(|e| {
                    debug!("lopdf: page {} yielded no text: {}", page_num, e);
                    String::new()
                })
            })
            .collect();

        Ok(pages)
    }
}
