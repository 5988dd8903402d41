use crate::classify::doctype;
use crate::classify::{evaluate, DocTypeScore, LineVerdict};
use crate::extraction::PageText;
use crate::model::{DocumentType, ExtractionResult, Heading};
use crate::parsing::normalize::clean;
use crate::parsing::non_blank_lines;
use crate::parsing::title::{self, TitleStrategy};
use crate::profile::schema::HeuristicProfile;
use serde::{Deserialize, Serialize};

pub const TRACE_SCHEMA_VERSION: &str = "1.0";

/// Verdict on one scanned line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineTrace {
    pub page: usize,
    /// Index among the page's non-blank lines (0-based).
    pub line_index: usize,
    pub text: String,
    pub verdict: LineVerdict,
}

/// Every decision taken while extracting one document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceBundle {
    pub trace_schema_version: String,
    pub profile: String,
    pub document_type: DocumentType,
    pub scores: Vec<DocTypeScore>,
    pub title: String,
    pub title_strategy: TitleStrategy,
    pub lines: Vec<LineTrace>,
}

impl TraceBundle {
    pub fn accepted(&self) -> impl Iterator<Item = &LineTrace> {
        self.lines.iter().filter(|l| l.verdict.is_heading())
    }

    /// The extraction result these decisions add up to.
    pub fn to_result(&self) -> ExtractionResult {
        let outline = self
            .lines
            .iter()
            .filter_map(|l| {
                l.verdict.level().map(|level| Heading {
                    level,
                    text: l.text.clone(),
                    page: l.page,
                })
            })
            .collect();
        ExtractionResult {
            title: self.title.clone(),
            outline,
        }
    }
}

/// Run the extraction and record why each decision was taken.
pub fn trace_document(pages: &[PageText], profile: &HeuristicProfile) -> TraceBundle {
    let scores = doctype::score(pages, profile);
    let document_type = doctype::best_of(&scores);
    let resolution = title::resolve_traced(pages, document_type, profile);

    let mut lines = Vec::new();
    for page in pages {
        for (line_index, raw) in non_blank_lines(&page.text).into_iter().enumerate() {
            let text = clean(raw);
            let verdict = evaluate(&text, document_type, profile);
            lines.push(LineTrace {
                page: page.page_number,
                line_index,
                text,
                verdict,
            });
        }
    }

    TraceBundle {
        trace_schema_version: TRACE_SCHEMA_VERSION.to_string(),
        profile: profile.name.clone(),
        document_type,
        scores,
        title: resolution.title,
        title_strategy: resolution.strategy,
        lines,
    }
}
