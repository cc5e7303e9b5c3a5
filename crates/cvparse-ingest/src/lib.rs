use std::path::Path;

use thiserror::Error;

// Re-export domain types for convenience
pub use cvparse_core::{BackendError, PageBlocks, PdfBackend, TextBlock};
pub use cvparse_layout::extract_layout_aware_text;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("PDF extraction error: {0}")]
    Pdf(#[from] cvparse_layout::LayoutError),
    #[error("DOCX extraction error: {0}")]
    Docx(#[from] cvparse_docx::DocxError),
    #[error("unsupported file type .{0}: only .pdf and .docx are allowed")]
    UnsupportedFormat(String),
    #[cfg(not(feature = "pdf"))]
    #[error("PDF support not compiled in (enable the `pdf` feature of cvparse-ingest)")]
    NoPdfSupport,
}

/// Extract plain text from a resume file.
///
/// Dispatches on the (lowercased) file extension:
/// - `.pdf` → layout-aware PDF extraction (requires `pdf` feature / mupdf)
/// - `.docx` → paragraph extraction
/// - anything else → [`IngestError::UnsupportedFormat`]
pub fn extract_text(path: &Path) -> Result<String, IngestError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    tracing::debug!(path = %path.display(), ext = %ext, "dispatching extraction");

    match ext.as_str() {
        "pdf" => extract_pdf(path),
        "docx" => cvparse_docx::extract_text(path).map_err(IngestError::Docx),
        other => Err(IngestError::UnsupportedFormat(other.to_string())),
    }
}

#[cfg(feature = "pdf")]
fn extract_pdf(path: &Path) -> Result<String, IngestError> {
    let backend = cvparse_pdf_mupdf::MupdfBackend::new();
    cvparse_layout::extract_text(path, &backend).map_err(IngestError::Pdf)
}

#[cfg(not(feature = "pdf"))]
fn extract_pdf(_path: &Path) -> Result<String, IngestError> {
    Err(IngestError::NoPdfSupport)
}
