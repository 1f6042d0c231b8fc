//! Resume text extraction from local files.

use autoapply_core::collab::{ExtractError, TextExtractor};
use std::path::Path;
use tracing::debug;

/// Extracts text from PDF resumes via `pdf-extract`, and reads plain-text
/// formats directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileTextExtractor;

impl TextExtractor for FileTextExtractor {
    fn extract_text(&self, path: &Path) -> Result<String, ExtractError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        let text = match extension.as_str() {
            "pdf" => pdf_extract::extract_text(path).map_err(|e| ExtractError::Extraction {
                path: path.display().to_string(),
                detail: e.to_string(),
            })?,
            "txt" | "md" => std::fs::read_to_string(path).map_err(|e| ExtractError::Io {
                path: path.display().to_string(),
                source: e,
            })?,
            other => return Err(ExtractError::UnsupportedFormat(other.to_string())),
        };

        debug!(path = %path.display(), chars = text.len(), "Extracted resume text");
        Ok(text)
    }
}
