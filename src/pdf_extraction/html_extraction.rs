// Last-resort extraction: pdftohtml into a scratch dir, then strip the markup
use scraper::{Html, Selector};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;
use tracing::debug;

use super::TextStrategy;
use crate::types::StrategyError;

const INTERMEDIATE_NAME: &str = "roster.html";

/// Third engine. The intermediate HTML lives in a `TempDir`, so it is removed
/// on every exit path, including tool failure.
#[derive(Debug, Clone)]
pub struct HtmlStrategy {
    bin: String,
    work_root: Option<PathBuf>,
}

impl HtmlStrategy {
    pub fn new(bin: impl Into<String>) -> Self {
        Self { bin: bin.into(), work_root: None }
    }

    /// Create the scratch dir under `root` instead of the system temp dir
    pub fn with_work_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.work_root = Some(root.into());
        self
    }

    fn scratch_dir(&self) -> std::io::Result<TempDir> {
        match &self.work_root {
            Some(root) => TempDir::new_in(root),
            None => TempDir::new(),
        }
    }
}

impl TextStrategy for HtmlStrategy {
    fn name(&self) -> &str {
        "html"
    }

    fn extract_pages(&self, pdf_path: &Path) -> Result<Vec<String>, StrategyError> {
        let work_dir = self.scratch_dir()?;
        let target = work_dir.path().join(INTERMEDIATE_NAME);

        // -i: skip images, -noframes: one file, -q: quiet
        let output = Command::new(&self.bin)
            .args(["-i", "-noframes", "-q", "-enc", "UTF-8"])
            .arg(pdf_path)
            .arg(&target)
            .output()
            .map_err(|source| StrategyError::Spawn { tool: self.bin.clone(), source })?;

        if !output.status.success() {
            return Err(StrategyError::ToolFailed {
                tool: self.bin.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        // Some pdftohtml builds append their own .html suffix
        let html_path = find_html(work_dir.path())
            .ok_or_else(|| StrategyError::MissingOutput(work_dir.path().to_path_buf()))?;
        debug!("html: reading intermediate {}", html_path.display());

        let html = String::from_utf8_lossy(&fs::read(&html_path)?).into_owned();

        // the whole document comes back as one page
        Ok(vec![html_to_text(&html)])
    }
}

fn find_html(dir: &Path) -> Option<PathBuf> {
    let preferred = dir.join(INTERMEDIATE_NAME);
    if preferred.is_file() {
        return Some(preferred);
    }
    fs::read_dir(dir)
        .ok()?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("html")))
}

/// Text content of the document body. `&#160;` comes back as U+00A0, which
/// would defeat the parser's `" Male "` split, so it is folded to a space.
pub fn html_to_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let body = Selector::parse("body")
        .ok()
        .and_then(|selector| document.select(&selector).next());

    let text: String = match body {
        Some(body) => body.text().collect(),
        None => document.root_element().text().collect(),
    };
    text.replace('\u{a0}', " ")
}
