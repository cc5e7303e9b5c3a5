use std::path::Path;

use thiserror::Error;

pub mod columns;

pub use columns::{extract_layout_aware_text, is_two_column_layout};
// Re-export domain types from core (canonical definitions live there)
pub use cvparse_core::{BackendError, PageBlocks, PdfBackend, TextBlock};

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("backend error: {0}")]
    Backend(#[from] BackendError),
}

/// Extract plain text from a PDF file using the given backend for page
/// loading.
///
/// Pipeline:
/// 1. Load positioned text blocks for every page via `backend`
/// 2. Classify the document as single- or two-column from page 1
/// 3. Assemble text in reading order (left column fully, then right
///    column fully, for two-column documents)
pub fn extract_text(pdf_path: &Path, backend: &dyn PdfBackend) -> Result<String, LayoutError> {
    let pages = backend.load_pages(pdf_path)?;
    Ok(extract_layout_aware_text(&pages))
}
