use crate::classify::outcome::DocTypeScore;
use crate::extraction::PageText;
use crate::model::DocumentType;
use crate::profile::schema::HeuristicProfile;

/// Score every document type of the profile against the leading pages.
///
/// The first `sample_pages` pages are lowercased and joined with a space;
/// each keyword contributes its number of non-overlapping occurrences.
/// Scores come back in the profile's table order.
pub fn score(pages: &[PageText], profile: &HeuristicProfile) -> Vec<DocTypeScore> {
    let sample = pages
        .iter()
        .take(profile.sample_pages)
        .map(|p| p.text.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");

    profile
        .doc_types
        .iter()
        .map(|entry| DocTypeScore {
            doc_type: entry.doc_type,
            score: entry
                .keywords
                .iter()
                .map(|kw| sample.matches(kw.as_str()).count())
                .sum(),
        })
        .collect()
}

/// Detect the document type from keyword frequency.
pub fn classify(pages: &[PageText], profile: &HeuristicProfile) -> DocumentType {
    best_of(&score(pages, profile))
}

/// Pick the highest non-zero score.
///
/// Only a strictly higher score replaces the current best, so on a tie the
/// type declared first in the profile wins.
pub fn best_of(scores: &[DocTypeScore]) -> DocumentType {
    let mut best: Option<&DocTypeScore> = None;
    for s in scores.iter().filter(|s| s.score > 0) {
        match best {
            Some(b) if s.score <= b.score => {}
            _ => best = Some(s),
        }
    }
    best.map(|b| b.doc_type).unwrap_or(DocumentType::Unknown)
}
