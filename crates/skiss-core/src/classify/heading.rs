use crate::classify::outcome::{AcceptRule, LineVerdict, RejectReason};
use crate::model::{DocumentType, HeadingLevel};
use crate::parsing::{is_upper, word_count};
use crate::profile::schema::{HeadingRules, HeuristicProfile};
use regex::Regex;
use std::sync::LazyLock;

const MIN_LEN: usize = 3;

static DIVISION_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:chapter\s+(?:\d+|[ivxlc]+)|section\s+\d+|appendix\s+(?:[a-z]|\d+))\b")
        .unwrap()
});
static NUMBERING_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(?:\.\d+)*\.?\s+").unwrap());
static MID_SENTENCE_PERIOD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.\s+\S").unwrap());
static DATE_PHRASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:january|february|march|april|may|june|july|august|september|october|november|december)\s+\d{1,2}(?:st|nd|rd|th)?,?\s+\d{4}\b",
    )
    .unwrap()
});
static NUMBERED_SECTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s+[A-Z]").unwrap());
static NUMBERED_SUBSECTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\d+(?:\.\d+)*\.?\s+[A-Z]").unwrap());
static APPENDIX_COLON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^appendix\s+[a-z0-9]+\s*:").unwrap());
static TWO_LEVEL_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\d+\.?\s").unwrap());
static THREE_LEVEL_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\d+\.\d+").unwrap());
static SINGLE_LEVEL_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s+\S").unwrap());

/// Classify one cleaned line of a document of the given type.
pub fn evaluate(text: &str, doc_type: DocumentType, profile: &HeuristicProfile) -> LineVerdict {
    match reject(text, doc_type, profile) {
        Some(reason) => LineVerdict::Rejected(reason),
        None => accept(text, doc_type, &profile.headings),
    }
}

pub fn is_heading(text: &str, doc_type: DocumentType, profile: &HeuristicProfile) -> bool {
    evaluate(text, doc_type, profile).is_heading()
}

/// Level of a line already accepted as a heading.
pub fn heading_level(text: &str, doc_type: DocumentType, profile: &HeuristicProfile) -> HeadingLevel {
    assign_level(text, &text.to_lowercase(), doc_type, &profile.headings)
}

fn reject(text: &str, doc_type: DocumentType, profile: &HeuristicProfile) -> Option<RejectReason> {
    if !profile.has_outline(doc_type) {
        return Some(RejectReason::NoOutlineType);
    }
    let rules = &profile.headings;
    let len = text.chars().count();
    if len < MIN_LEN {
        return Some(RejectReason::TooShort);
    }
    if len > rules.max_len {
        return Some(RejectReason::TooLong);
    }
    if has_mid_sentence_period(text) {
        return Some(RejectReason::MidSentencePeriod);
    }

    let lower = text.to_lowercase();
    if let Some(marker) = rules
        .sentence_markers
        .iter()
        .find(|m| lower.contains(m.as_str()))
    {
        return Some(RejectReason::SentenceMarker(marker.clone()));
    }
    if DATE_PHRASE.is_match(text) {
        return Some(RejectReason::DatePhrase);
    }

    let bare = lower.trim_end_matches([':', '.']).trim_end();
    if rules.junk_fragments.iter().any(|j| j == bare) {
        return Some(RejectReason::JunkFragment);
    }
    if word_count(text) <= 2 && !is_upper(text) {
        return Some(RejectReason::TooFewWords);
    }

    if doc_type == DocumentType::Invitation && !has_closing_phrase(&lower, rules) {
        return Some(RejectReason::NotClosingPhrase);
    }
    None
}

fn accept(text: &str, doc_type: DocumentType, rules: &HeadingRules) -> LineVerdict {
    let lower = text.to_lowercase();
    let rule = if doc_type == DocumentType::Invitation {
        Some(AcceptRule::ClosingPhrase)
    } else {
        acceptance_rule(text, &lower, rules)
    };
    match rule {
        Some(rule) => LineVerdict::Heading {
            level: assign_level(text, &lower, doc_type, rules),
            rule,
        },
        None => LineVerdict::Rejected(RejectReason::NoStructuralPattern),
    }
}

fn acceptance_rule(text: &str, lower: &str, rules: &HeadingRules) -> Option<AcceptRule> {
    let words = word_count(text);

    if DIVISION_PREFIX.is_match(text) {
        return Some(AcceptRule::DivisionPrefix);
    }
    if is_major_heading(lower, rules) {
        return Some(AcceptRule::MajorHeading);
    }
    if starts_with_any(lower, &rules.structural_prefixes) {
        return Some(AcceptRule::StructuralKeyword);
    }
    if NUMBERED_SECTION.is_match(text)
        && (3..=10).contains(&words)
        && !rules.form_fields.iter().any(|f| lower.contains(f.as_str()))
    {
        return Some(AcceptRule::NumberedSection);
    }
    if NUMBERED_SUBSECTION.is_match(text) {
        return Some(AcceptRule::NumberedSubsection);
    }
    if text.ends_with(':') && (3..=8).contains(&words) {
        return Some(AcceptRule::ColonLabel);
    }
    if is_upper(text) && (3..=8).contains(&words) {
        return Some(AcceptRule::UpperCase);
    }
    None
}

fn assign_level(text: &str, lower: &str, doc_type: DocumentType, rules: &HeadingRules) -> HeadingLevel {
    let words = word_count(text);
    let colon = text.ends_with(':');

    if doc_type == DocumentType::Invitation
        || starts_with_any(lower, &rules.h1_prefixes)
        || APPENDIX_COLON.is_match(text)
        || (is_upper(text) && words <= 6)
    {
        return HeadingLevel::H1;
    }
    if starts_with_any(lower, &rules.h2_prefixes)
        || TWO_LEVEL_NUMBER.is_match(text)
        || (colon && words <= 5)
        || (starts_with_phrase(lower, "appendix") && !text.contains(':'))
    {
        return HeadingLevel::H2;
    }
    if starts_with_any(lower, &rules.h3_prefixes)
        || (colon && words > 5)
        || THREE_LEVEL_NUMBER.is_match(text)
        || (SINGLE_LEVEL_NUMBER.is_match(text) && words >= 2)
    {
        return HeadingLevel::H3;
    }
    HeadingLevel::H4
}

/// A period followed by more text, ignoring a leading "2.1." style number.
fn has_mid_sentence_period(text: &str) -> bool {
    let rest = match NUMBERING_PREFIX.find(text) {
        Some(m) => &text[m.end()..],
        None => text,
    };
    MID_SENTENCE_PERIOD.is_match(rest)
}

fn has_closing_phrase(lower: &str, rules: &HeadingRules) -> bool {
    rules
        .closing_phrases
        .iter()
        .any(|p| lower.contains(p.as_str()))
}

fn is_major_heading(lower: &str, rules: &HeadingRules) -> bool {
    let bare = lower.trim_end_matches(':').trim_end();
    rules.major_headings.iter().any(|h| h == bare)
}

fn starts_with_any(lower: &str, phrases: &[String]) -> bool {
    phrases.iter().any(|p| starts_with_phrase(lower, p))
}

/// Prefix match on whole words: "part" matches "part ii" but not "party".
fn starts_with_phrase(lower: &str, phrase: &str) -> bool {
    lower
        .strip_prefix(phrase)
        .is_some_and(|rest| !rest.starts_with(char::is_alphanumeric))
}
