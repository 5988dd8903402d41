//! Integration tests for extract_pdf() and batch extraction.
//!
//! Uses a MockExtractor that returns pre-built PageText without
//! invoking pdftotext, so these tests run without poppler-utils.

use skiss_core::batch::{extract_files, find_pdfs};
use skiss_core::error::SkissError;
use skiss_core::extraction::{PageText, PdfExtractor};
use skiss_core::model::{ExtractionResult, HeadingLevel};
use skiss_core::profile::builtin::{default_profile, load_preset};
use skiss_core::validate::validate_output;
use skiss_core::{extract_pdf, extract_text};

struct MockExtractor {
    pages: Vec<PageText>,
}

impl PdfExtractor for MockExtractor {
    fn extract_pages(&self, _pdf_bytes: &[u8]) -> Result<Vec<PageText>, SkissError> {
        Ok(self.pages.clone())
    }

    fn backend_name(&self) -> &str {
        "mock"
    }
}

/// Treats the file bytes as form-feed separated text; rejects anything
/// starting with "%broken".
struct TextExtractor;

impl PdfExtractor for TextExtractor {
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageText>, SkissError> {
        if pdf_bytes.starts_with(b"%broken") {
            return Err(SkissError::Extraction("damaged xref table".into()));
        }
        let text = String::from_utf8_lossy(pdf_bytes);
        Ok(skiss_core::extraction::pages_from_text(&text))
    }

    fn backend_name(&self) -> &str {
        "text"
    }
}

fn mock(pages: &[(usize, &str)]) -> MockExtractor {
    MockExtractor {
        pages: pages
            .iter()
            .map(|(n, text)| PageText::new(*n, *text))
            .collect(),
    }
}

// ---------------------------------------------------------------------------
// Form: no outline, upper-case title
// ---------------------------------------------------------------------------
#[test]
fn form_has_title_and_no_outline() {
    let extractor = mock(&[(
        1,
        "FORM FOR GRANT\nName of applicant: ____\nDate of birth: ____\n1. Designation of the Officer",
    )]);

    let result = extract_pdf(&[], &extractor, default_profile()).unwrap();

    assert_eq!(result.title, "FORM FOR GRANT");
    assert!(result.outline.is_empty());
}

// ---------------------------------------------------------------------------
// Certificate: never an outline, even with heading-shaped lines
// ---------------------------------------------------------------------------
#[test]
fn certificate_has_no_outline() {
    let extractor = mock(&[(
        1,
        "CERTIFICATE OF ACHIEVEMENT\nAwarded for completion of\nChapter 1: Foundations",
    )]);

    let result = extract_pdf(&[], &extractor, default_profile()).unwrap();

    assert_eq!(result.title, "CERTIFICATE OF ACHIEVEMENT");
    assert!(result.outline.is_empty());
}

// ---------------------------------------------------------------------------
// Chapter heading kept, body sentence dropped
// ---------------------------------------------------------------------------
#[test]
fn chapter_heading_and_body_sentence() {
    let extractor = mock(&[(
        1,
        "Chapter 1: Background\nThis chapter will be issued during the pilot.",
    )]);

    let result = extract_pdf(&[], &extractor, default_profile()).unwrap();

    assert_eq!(result.outline.len(), 1);
    assert_eq!(result.outline[0].text, "Chapter 1: Background");
    assert_eq!(result.outline[0].level, HeadingLevel::H1);
    assert_eq!(result.outline[0].page, 1);
}

// ---------------------------------------------------------------------------
// Invitation: no title, only the closing line
// ---------------------------------------------------------------------------
#[test]
fn invitation_keeps_only_closing_line() {
    let extractor = mock(&[(
        1,
        "You're invited!\nParty at 5pm\nAddress: 123 Main St\nHope to see you there!",
    )]);

    let result = extract_pdf(&[], &extractor, default_profile()).unwrap();
    assert_eq!(result.title, "");
    assert_eq!(result.outline.len(), 1);
    assert_eq!(result.outline[0].text, "Hope to see you there!");

    let strict = load_preset("strict").unwrap();
    let result = extract_pdf(&[], &extractor, &strict).unwrap();
    assert_eq!(result, ExtractionResult::empty());
}

// ---------------------------------------------------------------------------
// Multi-page manual: scan order and provider page numbers are preserved
// ---------------------------------------------------------------------------
#[test]
fn manual_outline_across_pages() {
    let extractor = mock(&[
        (
            1,
            "Overview\nFoundation Level Extension Agile Tester\nVersion 2024",
        ),
        (
            3,
            "Table of Contents\nRevision History\n\
             The syllabus will be updated every year. Readers are advised to check.",
        ),
        (
            4,
            "1. Introduction to Foundation Level Agile Tester Extension\n\
             1.1 Intended Audience\n1.2 Career Paths for Testers\n\
             Testers must be certified before taking this course.",
        ),
    ]);

    let result = extract_pdf(&[], &extractor, default_profile()).unwrap();

    assert_eq!(result.title, "Foundation Level Extension Agile Tester");
    let got: Vec<(HeadingLevel, &str, usize)> = result
        .outline
        .iter()
        .map(|h| (h.level, h.text.as_str(), h.page))
        .collect();
    assert_eq!(
        got,
        vec![
            (HeadingLevel::H1, "Table of Contents", 3),
            (HeadingLevel::H3, "1. Introduction to Foundation Level Agile Tester Extension", 4),
            (HeadingLevel::H2, "1.1 Intended Audience", 4),
            (HeadingLevel::H2, "1.2 Career Paths for Testers", 4),
        ]
    );
}

// ---------------------------------------------------------------------------
// One- and two-word lines are body text unless fully upper-case
// ---------------------------------------------------------------------------
#[test]
fn short_mixed_case_lines_are_not_headings() {
    let extractor = mock(&[(1, "Manual handbook guide\nBackground\nOverview")]);

    let result = extract_pdf(&[], &extractor, default_profile()).unwrap();
    assert!(result.outline.is_empty());

    let extractor = mock(&[(1, "Manual handbook guide\nBACKGROUND\nOverview")]);
    let result = extract_pdf(&[], &extractor, default_profile()).unwrap();
    assert_eq!(result.outline.len(), 1);
    assert_eq!(result.outline[0].text, "BACKGROUND");
    assert_eq!(result.outline[0].level, HeadingLevel::H1);
}

// ---------------------------------------------------------------------------
// OCR-duplicated proposal cover resolves to the canonical title
// ---------------------------------------------------------------------------
#[test]
fn proposal_literal_title() {
    let extractor = mock(&[(
        1,
        "RFP:Request f quest f  r Pr  r Proposal\n\
         RRRRFFFFPPPP: RRRRequest ffffor Proposal\n\
         To Present a Proposal for Developing\n\
         the Business Plan for the Ontario Digital Library",
    )]);

    let result = extract_pdf(&[], &extractor, default_profile()).unwrap();

    assert!(result.title.starts_with("RFP: Request for Proposal"));
    assert!(result.title.chars().count() < 200);
    for h in &result.outline {
        assert!(!h.text.contains("RRRR"));
    }
}

// ---------------------------------------------------------------------------
// Empty input is not an error
// ---------------------------------------------------------------------------
#[test]
fn empty_document() {
    let extractor = mock(&[]);
    let result = extract_pdf(&[], &extractor, default_profile()).unwrap();
    assert_eq!(result, ExtractionResult::empty());
    assert_eq!(extract_text("\x0c  \x0c", default_profile()), ExtractionResult::empty());
}

#[test]
fn extractor_errors_propagate() {
    let err = extract_pdf(b"%broken", &TextExtractor, default_profile()).unwrap_err();
    assert!(matches!(err, SkissError::Extraction(_)));
}

#[test]
fn output_passes_validation() {
    let result = extract_text(
        "Chapter 1: Background\x0cAppendix A: ODL Envisioned Phases",
        default_profile(),
    );
    assert_eq!(result.outline[1].page, 2);
    let json = serde_json::to_value(&result).unwrap();
    validate_output(&json).unwrap();
}

// ---------------------------------------------------------------------------
// Batch: a failing file does not stop the others, order is kept
// ---------------------------------------------------------------------------
#[test]
fn batch_continues_past_failures() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a.pdf"), "Chapter 1: Background").unwrap();
    std::fs::write(dir.path().join("b.pdf"), "%broken").unwrap();
    std::fs::write(dir.path().join("c.PDF"), "FORM FOR GRANT\nName of applicant").unwrap();
    std::fs::write(dir.path().join("readme.txt"), "Chapter 9: Ignored").unwrap();

    let paths = find_pdfs(dir.path()).unwrap();
    assert_eq!(paths.len(), 3);

    let outcomes = extract_files(&paths, &TextExtractor, default_profile());

    assert_eq!(outcomes.len(), 3);
    assert!(outcomes[0].is_ok());
    assert_eq!(outcomes[0].result.outline.len(), 1);
    assert!(!outcomes[1].is_ok());
    assert_eq!(outcomes[1].result, ExtractionResult::empty());
    assert!(outcomes[1].error.as_deref().unwrap().contains("damaged xref"));
    assert!(outcomes[2].is_ok());
    assert!(outcomes[2].result.outline.is_empty());
    for (outcome, path) in outcomes.iter().zip(&paths) {
        assert_eq!(&outcome.path, path);
    }
}
