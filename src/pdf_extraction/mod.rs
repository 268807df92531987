// PDF text extraction module
//
// Every engine implements `TextStrategy`; `ExtractionRouter` walks them in
// priority order and stops at the first one that yields non-blank text.
use std::path::Path;

use crate::types::StrategyError;

pub mod extraction_router;
pub mod html_extraction;
pub mod lopdf_helper;
pub mod pdftotext_extraction;

pub use extraction_router::{build_strategy, ExtractionResult, ExtractionRouter};
pub use html_extraction::{html_to_text, HtmlStrategy};
pub use lopdf_helper::{get_page_count, LopdfStrategy};
pub use pdftotext_extraction::PdfToTextStrategy;

/// One way of turning a PDF into text
pub trait TextStrategy {
    fn name(&self) -> &str;

    /// Text of each page in page order. A page that yields nothing is `""`,
    /// not an error; only a failure of the whole engine is.
    fn extract_pages(&self, pdf_path: &Path) -> Result<Vec<String>, StrategyError>;

    /// Pages joined with newlines, or `Empty` if nothing but whitespace came out
    fn attempt(&self, pdf_path: &Path) -> Result<String, StrategyError> {
        let text = self.extract_pages(pdf_path)?.join("\n");
        if text.trim().is_empty() {
            return Err(StrategyError::Empty);
        }
        Ok(text)
    }
}
