use std::path::Path;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("failed to open PDF: {0}")]
    OpenError(String),
    #[error("failed to extract text: {0}")]
    ExtractionError(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A contiguous span of text with its bounding rectangle, as segmented by
/// the underlying PDF parser.
///
/// Coordinates follow the mupdf convention: `x0`/`y0` is the top-left
/// corner, `x1`/`y1` the bottom-right, in page units, with `x0 <= x1`.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
    /// Raw block text. May be empty or whitespace-only.
    pub text: String,
}

/// One page's worth of positioned text blocks, in the order the parser
/// yields them. Blocks are never re-sorted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageBlocks {
    pub width: f32,
    pub blocks: Vec<TextBlock>,
}

/// Trait for PDF page-loading backends.
///
/// Implementors provide the low-level page/block loading step; the
/// layout-aware text assembly (column detection, reading order) lives in
/// `cvparse-layout`.
pub trait PdfBackend: Send + Sync {
    /// Load every page of the document as positioned text blocks.
    fn load_pages(&self, path: &Path) -> Result<Vec<PageBlocks>, BackendError>;
}
