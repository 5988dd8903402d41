use crate::model::{DocumentType, HeadingLevel};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Keyword score of one document type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocTypeScore {
    pub doc_type: DocumentType,
    pub score: usize,
}

/// Why a line was not taken as a heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "reason", content = "detail")]
pub enum RejectReason {
    /// The document type never carries an outline.
    NoOutlineType,
    TooShort,
    TooLong,
    MidSentencePeriod,
    SentenceMarker(String),
    DatePhrase,
    JunkFragment,
    TooFewWords,
    /// Invitation line without a closing phrase.
    NotClosingPhrase,
    NoStructuralPattern,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::NoOutlineType => write!(f, "document type has no outline"),
            RejectReason::TooShort => write!(f, "too short"),
            RejectReason::TooLong => write!(f, "too long for a heading"),
            RejectReason::MidSentencePeriod => write!(f, "period inside a sentence"),
            RejectReason::SentenceMarker(marker) => write!(f, "sentence marker '{marker}'"),
            RejectReason::DatePhrase => write!(f, "contains a date"),
            RejectReason::JunkFragment => write!(f, "known non-heading fragment"),
            RejectReason::TooFewWords => write!(f, "two words or fewer"),
            RejectReason::NotClosingPhrase => write!(f, "invitation line without closing phrase"),
            RejectReason::NoStructuralPattern => write!(f, "no structural pattern"),
        }
    }
}

/// The acceptance rule that matched a heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AcceptRule {
    ClosingPhrase,
    DivisionPrefix,
    MajorHeading,
    StructuralKeyword,
    NumberedSection,
    NumberedSubsection,
    ColonLabel,
    UpperCase,
}

impl fmt::Display for AcceptRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AcceptRule::ClosingPhrase => "closing phrase",
            AcceptRule::DivisionPrefix => "chapter/section/appendix prefix",
            AcceptRule::MajorHeading => "major heading",
            AcceptRule::StructuralKeyword => "structural keyword",
            AcceptRule::NumberedSection => "numbered section",
            AcceptRule::NumberedSubsection => "numbered subsection",
            AcceptRule::ColonLabel => "colon label",
            AcceptRule::UpperCase => "upper-case line",
        };
        write!(f, "{name}")
    }
}

/// Classification of one cleaned line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineVerdict {
    Heading { level: HeadingLevel, rule: AcceptRule },
    Rejected(RejectReason),
}

impl LineVerdict {
    pub fn is_heading(&self) -> bool {
        matches!(self, LineVerdict::Heading { .. })
    }

    pub fn level(&self) -> Option<HeadingLevel> {
        match self {
            LineVerdict::Heading { level, .. } => Some(*level),
            LineVerdict::Rejected(_) => None,
        }
    }
}
