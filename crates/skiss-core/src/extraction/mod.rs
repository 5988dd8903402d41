pub mod pdftotext;

use crate::error::SkissError;

/// Raw text of a single PDF page that contained extractable text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageText {
    /// 1-based physical page number.
    pub page_number: usize,
    pub text: String,
}

impl PageText {
    pub fn new(page_number: usize, text: impl Into<String>) -> Self {
        PageText {
            page_number,
            text: text.into(),
        }
    }
}

/// Trait for PDF text extraction backends.
pub trait PdfExtractor: Send + Sync {
    /// Extract text from PDF bytes, returning one PageText per non-blank page.
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageText>, SkissError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Split form-feed separated text into pages.
///
/// This is the page format of `pdftotext` output and of pre-extracted `.txt`
/// input. Pages keep their physical number; blank pages are omitted.
pub fn pages_from_text(text: &str) -> Vec<PageText> {
    text.split('\x0c')
        .enumerate()
        .filter(|(_, page_text)| !page_text.trim().is_empty())
        .map(|(i, page_text)| PageText::new(i + 1, page_text.trim()))
        .collect()
}
