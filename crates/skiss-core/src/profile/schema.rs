use crate::model::DocumentType;
use serde::{Deserialize, Serialize};

/// Keyword tables and thresholds driving the extraction heuristics.
///
/// All phrase lists are lowercase and matched against lowercased text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeuristicProfile {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub version: String,
    /// Number of leading pages scanned for document-type keywords.
    #[serde(default = "default_sample_pages")]
    pub sample_pages: usize,
    /// Ordered keyword table. On equal scores the earlier entry wins.
    pub doc_types: Vec<DocTypeKeywords>,
    /// Document types that never carry an outline.
    pub no_outline: Vec<DocumentType>,
    pub title: TitleRules,
    pub headings: HeadingRules,
}

impl HeuristicProfile {
    pub fn has_outline(&self, doc_type: DocumentType) -> bool {
        !self.no_outline.contains(&doc_type)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocTypeKeywords {
    pub doc_type: DocumentType,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TitleRules {
    /// Any of these on the first page of an invitation suppresses the title.
    pub invitation_markers: Vec<String>,
    #[serde(default)]
    pub literal_titles: Vec<LiteralTitle>,
    /// Groups of keywords; a line containing every keyword of a group is the title.
    #[serde(default)]
    pub anchored_keywords: Vec<Vec<String>>,
    pub document_nouns: Vec<String>,
    /// Lines scanned by the keyword-anchored strategy.
    #[serde(default = "default_wide_window")]
    pub anchored_lines: usize,
    /// Lines scanned for upper-case, title-case or document-noun candidates.
    #[serde(default = "default_narrow_window")]
    pub candidate_lines: usize,
    /// Lines scanned for capitalized-phrase candidates.
    #[serde(default = "default_wide_window")]
    pub phrase_lines: usize,
    #[serde(default = "default_title_min_len")]
    pub min_len: usize,
    /// Exclusive upper bound on title length, in characters.
    #[serde(default = "default_title_max_len")]
    pub max_len: usize,
}

/// A canonical title recovered verbatim when its phrase and markers appear
/// on the first page, however badly OCR duplicated them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiteralTitle {
    pub phrase: String,
    #[serde(default)]
    pub markers: Vec<String>,
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadingRules {
    /// Lines longer than this (in characters) are body text.
    pub max_len: usize,
    pub sentence_markers: Vec<String>,
    pub junk_fragments: Vec<String>,
    /// Terms that mark a numbered line as a form field rather than a section.
    pub form_fields: Vec<String>,
    /// The only lines accepted in an invitation.
    pub closing_phrases: Vec<String>,
    pub major_headings: Vec<String>,
    pub structural_prefixes: Vec<String>,
    pub h1_prefixes: Vec<String>,
    pub h2_prefixes: Vec<String>,
    pub h3_prefixes: Vec<String>,
}

fn default_sample_pages() -> usize {
    3
}

fn default_narrow_window() -> usize {
    10
}

fn default_wide_window() -> usize {
    15
}

fn default_title_min_len() -> usize {
    10
}

fn default_title_max_len() -> usize {
    200
}
