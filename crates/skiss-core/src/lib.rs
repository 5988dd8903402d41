pub mod batch;
pub mod classify;
pub mod error;
pub mod extraction;
pub mod model;
pub mod outline;
pub mod parsing;
pub mod profile;
pub mod trace;
pub mod validate;

use error::SkissError;
use extraction::PdfExtractor;
use model::ExtractionResult;
use profile::schema::HeuristicProfile;

/// Main API entry point: extract the title and outline of a PDF.
///
/// A PDF without any extractable text yields an empty result, not an error.
pub fn extract_pdf(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
    profile: &HeuristicProfile,
) -> Result<ExtractionResult, SkissError> {
    let pages = extractor.extract_pages(pdf_bytes)?;
    log::debug!(
        "{} pages with text from {}",
        pages.len(),
        extractor.backend_name()
    );
    Ok(outline::build(&pages, profile))
}

/// Extract from pre-extracted text with form-feed page breaks.
pub fn extract_text(text: &str, profile: &HeuristicProfile) -> ExtractionResult {
    outline::build(&extraction::pages_from_text(text), profile)
}
