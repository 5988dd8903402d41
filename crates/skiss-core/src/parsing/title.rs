use crate::extraction::PageText;
use crate::model::DocumentType;
use crate::parsing::normalize::{clean, squeeze};
use crate::parsing::{is_title_case, is_upper, non_blank_lines, word_count};
use crate::profile::schema::{HeuristicProfile, TitleRules};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

static CAPITALIZED_PHRASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][A-Za-z\s\-&:]+$").unwrap());

const PHRASE_MIN_WORDS: usize = 3;
const PHRASE_MAX_WORDS: usize = 15;

/// Which step of the title chain produced the title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TitleStrategy {
    InvitationSuppressed,
    LiteralMatch,
    AnchoredLine,
    Candidate,
    FirstLine,
    Empty,
}

impl fmt::Display for TitleStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TitleStrategy::InvitationSuppressed => "invitation suppressed",
            TitleStrategy::LiteralMatch => "literal match",
            TitleStrategy::AnchoredLine => "keyword-anchored line",
            TitleStrategy::Candidate => "candidate scan",
            TitleStrategy::FirstLine => "first line",
            TitleStrategy::Empty => "no title",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleResolution {
    pub title: String,
    pub strategy: TitleStrategy,
}

impl TitleResolution {
    fn new(title: impl Into<String>, strategy: TitleStrategy) -> Self {
        TitleResolution {
            title: title.into(),
            strategy,
        }
    }
}

/// Pick the document title from the first page.
pub fn resolve(pages: &[PageText], doc_type: DocumentType, profile: &HeuristicProfile) -> String {
    resolve_traced(pages, doc_type, profile).title
}

/// Pick the document title and report the strategy that produced it.
///
/// Only the first page is consulted. The returned title is always either
/// empty or shorter than `title.max_len` characters.
pub fn resolve_traced(
    pages: &[PageText],
    doc_type: DocumentType,
    profile: &HeuristicProfile,
) -> TitleResolution {
    let Some(first) = pages.first() else {
        return TitleResolution::new("", TitleStrategy::Empty);
    };
    let rules = &profile.title;

    if doc_type == DocumentType::Invitation {
        let lower = first.text.to_lowercase();
        if rules
            .invitation_markers
            .iter()
            .any(|m| lower.contains(m.as_str()))
        {
            return TitleResolution::new("", TitleStrategy::InvitationSuppressed);
        }
    }

    if let Some(title) = literal_match(&first.text, rules) {
        return TitleResolution::new(title, TitleStrategy::LiteralMatch);
    }

    let lines: Vec<String> = non_blank_lines(&first.text)
        .into_iter()
        .map(clean)
        .filter(|l| !l.is_empty())
        .collect();

    if let Some(line) = anchored_line(&lines, rules) {
        return TitleResolution::new(line, TitleStrategy::AnchoredLine);
    }

    if let Some(line) = candidate_line(&lines, rules) {
        return TitleResolution::new(line, TitleStrategy::Candidate);
    }

    match lines.first() {
        Some(line) if line.chars().count() < rules.max_len => {
            TitleResolution::new(line.clone(), TitleStrategy::FirstLine)
        }
        _ => TitleResolution::new("", TitleStrategy::Empty),
    }
}

/// Compare on squeezed text so OCR-duplicated letters and spacing do not
/// hide the phrase.
fn literal_match<'a>(page_text: &str, rules: &'a TitleRules) -> Option<&'a str> {
    let haystack = squeeze(&clean(page_text));
    rules
        .literal_titles
        .iter()
        .find(|lit| {
            haystack.contains(&squeeze(&lit.phrase))
                && lit.markers.iter().all(|m| haystack.contains(&squeeze(m)))
        })
        .map(|lit| lit.title.as_str())
}

fn anchored_line<'a>(lines: &'a [String], rules: &TitleRules) -> Option<&'a str> {
    lines
        .iter()
        .take(rules.anchored_lines)
        .filter(|line| line.chars().count() < rules.max_len)
        .find(|line| {
            let lower = line.to_lowercase();
            rules
                .anchored_keywords
                .iter()
                .any(|group| group.iter().all(|kw| lower.contains(kw.as_str())))
        })
        .map(String::as_str)
}

fn candidate_line<'a>(lines: &'a [String], rules: &TitleRules) -> Option<&'a str> {
    let window = rules.candidate_lines.max(rules.phrase_lines);
    lines
        .iter()
        .take(window)
        .enumerate()
        .find(|(i, line)| {
            (*i < rules.candidate_lines && is_shape_candidate(line, rules))
                || (*i < rules.phrase_lines && is_phrase_candidate(line, rules))
        })
        .map(|(_, line)| line.as_str())
}

fn is_shape_candidate(line: &str, rules: &TitleRules) -> bool {
    let len = line.chars().count();
    if len < rules.min_len || len >= rules.max_len {
        return false;
    }
    if is_upper(line) || is_title_case(line) {
        return true;
    }
    let lower = line.to_lowercase();
    rules
        .document_nouns
        .iter()
        .any(|noun| lower.contains(noun.as_str()))
}

fn is_phrase_candidate(line: &str, rules: &TitleRules) -> bool {
    let words = word_count(line);
    line.chars().count() < rules.max_len
        && (PHRASE_MIN_WORDS..=PHRASE_MAX_WORDS).contains(&words)
        && CAPITALIZED_PHRASE.is_match(line)
}
