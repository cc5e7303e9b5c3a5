use std::path::Path;

use mupdf::{Document, TextPageFlags};

use cvparse_core::{BackendError, PageBlocks, PdfBackend, TextBlock};

/// MuPDF-based implementation of [`PdfBackend`].
///
/// This crate is the sole AGPL island — it isolates the mupdf dependency
/// (which is AGPL-3.0) so that non-PDF code paths do not transitively
/// depend on it.
///
/// Pages are returned as positioned text blocks in the order mupdf yields
/// them; column handling happens downstream in `cvparse-layout`.
#[derive(Default)]
pub struct MupdfBackend;

impl MupdfBackend {
    pub fn new() -> Self {
        Self
    }
}

impl PdfBackend for MupdfBackend {
    fn load_pages(&self, path: &Path) -> Result<Vec<PageBlocks>, BackendError> {
        let path_str = path
            .to_str()
            .ok_or_else(|| BackendError::OpenError("invalid path encoding".into()))?;

        let document =
            Document::open(path_str).map_err(|e| BackendError::OpenError(e.to_string()))?;

        let mut pages = Vec::new();

        for page_result in document
            .pages()
            .map_err(|e| BackendError::ExtractionError(e.to_string()))?
        {
            let page = page_result.map_err(|e| BackendError::ExtractionError(e.to_string()))?;

            let page_bounds = page
                .bounds()
                .map_err(|e| BackendError::ExtractionError(e.to_string()))?;
            let width = page_bounds.x1 - page_bounds.x0;

            let text_page = page
                .to_text_page(TextPageFlags::empty())
                .map_err(|e| BackendError::ExtractionError(e.to_string()))?;

            let mut blocks = Vec::new();
            for block in text_page.blocks() {
                let bounds = block.bounds();

                let mut text = String::new();
                for line in block.lines() {
                    for c in line.chars() {
                        text.push(c.char().unwrap_or('\u{FFFD}'));
                    }
                    text.push('\n');
                }

                blocks.push(TextBlock {
                    x0: bounds.x0,
                    y0: bounds.y0,
                    x1: bounds.x1,
                    y1: bounds.y1,
                    text,
                });
            }

            pages.push(PageBlocks { width, blocks });
        }

        Ok(pages)
    }
}
