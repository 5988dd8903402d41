use crate::error::SkissError;
use crate::extraction::{pages_from_text, PageText, PdfExtractor};
use std::io::Write;
use std::process::Command;

/// PDF extraction backend using pdftotext (from poppler-utils).
///
/// Reading order mode is the default; `with_layout` switches to
/// `pdftotext -layout`, which keeps column alignment at the cost of
/// padding lines with runs of spaces.
pub struct PdftotextExtractor {
    layout: bool,
}

impl PdftotextExtractor {
    pub fn new() -> Self {
        PdftotextExtractor { layout: false }
    }

    pub fn with_layout(layout: bool) -> Self {
        PdftotextExtractor { layout }
    }

    /// Check if pdftotext is available on the system.
    pub fn is_available() -> bool {
        Command::new("pdftotext")
            .arg("-v")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }

    /// Fail early with `PdftotextNotFound` instead of once per document.
    pub fn ensure_available() -> Result<(), SkissError> {
        if Self::is_available() {
            Ok(())
        } else {
            Err(SkissError::PdftotextNotFound)
        }
    }
}

impl Default for PdftotextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfExtractor for PdftotextExtractor {
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageText>, SkissError> {
        // pdftotext only reads from a path
        let mut tmpfile =
            tempfile::NamedTempFile::new().map_err(|e| SkissError::Extraction(e.to_string()))?;
        tmpfile
            .write_all(pdf_bytes)
            .map_err(|e| SkissError::Extraction(e.to_string()))?;

        let mut cmd = Command::new("pdftotext");
        cmd.arg("-enc").arg("UTF-8");
        if self.layout {
            cmd.arg("-layout");
        }
        let output = cmd
            .arg(tmpfile.path())
            .arg("-") // output to stdout
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    SkissError::PdftotextNotFound
                } else {
                    SkissError::Extraction(format!("pdftotext failed: {}", e))
                }
            })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            return Err(SkissError::PdftotextFailed { code, stderr });
        }

        let text = String::from_utf8_lossy(&output.stdout);
        let pages = pages_from_text(&text);
        log::debug!(
            "pdftotext extracted {} page(s) with text (layout: {})",
            pages.len(),
            self.layout
        );
        Ok(pages)
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}
