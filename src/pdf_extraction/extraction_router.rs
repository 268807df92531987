// PDF text extraction with an ordered fallback chain
//
// Real-world exports differ in how their text layer is encoded and no single
// engine reads all of them, so the router tries each configured strategy in
// turn. A strategy failure is logged and swallowed; only when every strategy
// has failed does the caller see an error.

use std::io::Write;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

use super::{HtmlStrategy, LopdfStrategy, PdfToTextStrategy, TextStrategy};
use crate::config::ExtractionConfig;
use crate::types::{ExtractionError, StrategyAttempt, StrategyKind};

/// Text from the first strategy that produced any
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    pub text: String,
    pub method: String,
    /// Strategies that failed before `method` succeeded
    pub fallbacks: usize,
    pub extraction_time_ms: u64,
}

/// Instantiate one configured strategy
pub fn build_strategy(kind: StrategyKind, config: &ExtractionConfig) -> Box<dyn TextStrategy> {
    match kind {
        StrategyKind::Pdftotext => Box::new(PdfToTextStrategy::new(config.pdftotext_bin.clone())),
        StrategyKind::Lopdf => Box::new(LopdfStrategy::new()),
        StrategyKind::Html => Box::new(HtmlStrategy::new(config.pdftohtml_bin.clone())),
    }
}

pub struct ExtractionRouter {
    strategies: Vec<Box<dyn TextStrategy>>,
}

impl ExtractionRouter {
    pub fn new(strategies: Vec<Box<dyn TextStrategy>>) -> Self {
        Self { strategies }
    }

    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self::new(
            config
                .strategies
                .iter()
                .map(|&kind| build_strategy(kind, config))
                .collect(),
        )
    }

    pub fn strategy_names(&self) -> Vec<&str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Walk the chain, returning the first non-blank text
    pub fn extract_with_fallback(&self, pdf_path: &Path) -> Result<ExtractionResult, ExtractionError> {
        let start = Instant::now();
        let mut attempts = Vec::new();

        for (i, strategy) in self.strategies.iter().enumerate() {
            debug!("extracting {} with {}", pdf_path.display(), strategy.name());

            match strategy.attempt(pdf_path) {
                Ok(text) => {
                    info!(
                        "extracted {} chars from {} with {}",
                        text.len(),
                        pdf_path.display(),
                        strategy.name()
                    );
                    return Ok(ExtractionResult {
                        text,
                        method: strategy.name().to_string(),
                        fallbacks: attempts.len(),
                        extraction_time_ms: start.elapsed().as_millis() as u64,
                    });
                }
                Err(error) => {
                    warn!("⚠️ {} failed: {}", strategy.name(), error);
                    if let Some(next) = self.strategies.get(i + 1) {
                        info!("🔄 {} failed, trying {}...", strategy.name(), next.name());
                    }
                    attempts.push(StrategyAttempt {
                        strategy: strategy.name().to_string(),
                        error,
                    });
                }
            }
        }

        Err(ExtractionError::AllStrategiesFailed { attempts })
    }

    /// Same as `extract_with_fallback` for an in-memory upload. The bytes are
    /// spilled to a temp file that is removed when this call returns.
    pub fn extract_bytes_with_fallback(&self, pdf_bytes: &[u8]) -> Result<ExtractionResult, ExtractionError> {
        let mut spill = tempfile::Builder::new()
            .prefix("rostercheck-")
            .suffix(".pdf")
            .tempfile()?;
        spill.write_all(pdf_bytes)?;
        spill.flush()?;
        self.extract_with_fallback(spill.path())
    }
}
