use crate::classify::{self, LineVerdict};
use crate::extraction::PageText;
use crate::model::{DocumentType, ExtractionResult, Heading};
use crate::parsing::normalize::clean;
use crate::parsing::{non_blank_lines, title};
use crate::profile::schema::HeuristicProfile;

/// Build the title and outline of one document.
///
/// Headings keep the page number delivered by the provider and appear in
/// scan order (page, then line within page).
pub fn build(pages: &[PageText], profile: &HeuristicProfile) -> ExtractionResult {
    if pages.is_empty() {
        return ExtractionResult::empty();
    }

    let doc_type = classify::classify(pages, profile);
    let resolution = title::resolve_traced(pages, doc_type, profile);
    log::debug!(
        "document type {doc_type}, title via {} ({} pages)",
        resolution.strategy,
        pages.len()
    );

    if !profile.has_outline(doc_type) {
        return ExtractionResult {
            title: resolution.title,
            outline: Vec::new(),
        };
    }

    let outline = headings(pages, doc_type, profile);
    log::debug!("{} headings found", outline.len());

    ExtractionResult {
        title: resolution.title,
        outline,
    }
}

/// Every cleaned line accepted as a heading for the given document type.
pub fn headings(
    pages: &[PageText],
    doc_type: DocumentType,
    profile: &HeuristicProfile,
) -> Vec<Heading> {
    let mut outline = Vec::new();
    for page in pages {
        for line in non_blank_lines(&page.text) {
            let text = clean(line);
            if let LineVerdict::Heading { level, .. } = classify::evaluate(&text, doc_type, profile) {
                outline.push(Heading {
                    level,
                    text,
                    page: page.page_number,
                });
            }
        }
    }
    outline
}
