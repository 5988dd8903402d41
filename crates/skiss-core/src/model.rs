use serde::{Deserialize, Serialize};
use std::fmt;

/// Document archetype detected from keyword frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    Form,
    Certificate,
    Manual,
    Proposal,
    Invitation,
    Pathway,
    Unknown,
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DocumentType::Form => "form",
            DocumentType::Certificate => "certificate",
            DocumentType::Manual => "manual",
            DocumentType::Proposal => "proposal",
            DocumentType::Invitation => "invitation",
            DocumentType::Pathway => "pathway",
            DocumentType::Unknown => "unknown",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
    H4,
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeadingLevel::H1 => write!(f, "H1"),
            HeadingLevel::H2 => write!(f, "H2"),
            HeadingLevel::H3 => write!(f, "H3"),
            HeadingLevel::H4 => write!(f, "H4"),
        }
    }
}

impl HeadingLevel {
    pub fn from_str_loose(s: &str) -> Option<HeadingLevel> {
        match s.trim().to_uppercase().as_str() {
            "H1" => Some(HeadingLevel::H1),
            "H2" => Some(HeadingLevel::H2),
            "H3" => Some(HeadingLevel::H3),
            "H4" => Some(HeadingLevel::H4),
            _ => None,
        }
    }

    /// 1-based depth, used for indentation.
    pub fn depth(&self) -> usize {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
            HeadingLevel::H4 => 4,
        }
    }
}

/// A line judged to be a structural heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    pub level: HeadingLevel,
    /// Cleaned line text.
    pub text: String,
    /// Page number as delivered by the page-text provider (1-based).
    pub page: usize,
}

/// Title and outline of one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub title: String,
    pub outline: Vec<Heading>,
}

impl ExtractionResult {
    pub fn empty() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_json_shape() {
        let result = ExtractionResult {
            title: "Overview".into(),
            outline: vec![Heading {
                level: HeadingLevel::H2,
                text: "2.1 Intended Audience".into(),
                page: 3,
            }],
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["title"], "Overview");
        assert_eq!(json["outline"][0]["level"], "H2");
        assert_eq!(json["outline"][0]["text"], "2.1 Intended Audience");
        assert_eq!(json["outline"][0]["page"], 3);
    }

    #[test]
    fn test_document_type_serde_lowercase() {
        let json = serde_json::to_string(&DocumentType::Certificate).unwrap();
        assert_eq!(json, "\"certificate\"");
        let back: DocumentType = serde_json::from_str("\"invitation\"").unwrap();
        assert_eq!(back, DocumentType::Invitation);
    }

    #[test]
    fn test_level_from_str_loose() {
        assert_eq!(HeadingLevel::from_str_loose(" h3 "), Some(HeadingLevel::H3));
        assert_eq!(HeadingLevel::from_str_loose("H5"), None);
    }
}
