pub mod builtin;
pub mod schema;

use crate::error::SkissError;
use crate::model::DocumentType;
use crate::parsing::normalize::clean;
use schema::HeuristicProfile;
use std::collections::HashSet;
use std::path::Path;

/// Titles are always shorter than this many characters.
pub const TITLE_LEN_LIMIT: usize = 200;

/// Load a profile from a JSON file.
pub fn load_profile(path: &Path) -> Result<HeuristicProfile, SkissError> {
    let content = std::fs::read_to_string(path).map_err(|e| SkissError::ProfileLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_profile(&content, path)
}

/// Parse a profile from a JSON string.
pub fn parse_profile(json: &str, source: &Path) -> Result<HeuristicProfile, SkissError> {
    let profile: HeuristicProfile =
        serde_json::from_str(json).map_err(|e| SkissError::ProfileLoad {
            path: source.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_profile(&profile)?;
    Ok(profile)
}

/// Parse a profile from a JSON string (no file path context).
pub fn parse_profile_str(json: &str) -> Result<HeuristicProfile, SkissError> {
    let profile: HeuristicProfile = serde_json::from_str(json).map_err(SkissError::Json)?;
    validate_profile(&profile)?;
    Ok(profile)
}

/// Validate that a profile is well-formed.
pub fn validate_profile(profile: &HeuristicProfile) -> Result<(), SkissError> {
    if profile.sample_pages == 0 {
        return Err(SkissError::ProfileInvalid(
            "sample_pages must be at least 1".into(),
        ));
    }

    if profile.doc_types.is_empty() {
        return Err(SkissError::ProfileInvalid(
            "doc_types must not be empty".into(),
        ));
    }

    let mut seen = HashSet::new();
    for entry in &profile.doc_types {
        if entry.doc_type == DocumentType::Unknown {
            return Err(SkissError::ProfileInvalid(
                "'unknown' is the fallback type and cannot carry keywords".into(),
            ));
        }
        if !seen.insert(entry.doc_type) {
            return Err(SkissError::ProfileInvalid(format!(
                "document type '{}' is listed twice",
                entry.doc_type
            )));
        }
        if entry.keywords.is_empty() {
            return Err(SkissError::ProfileInvalid(format!(
                "document type '{}' has no keywords",
                entry.doc_type
            )));
        }
        check_phrases(&format!("doc_types.{}", entry.doc_type), &entry.keywords)?;
    }

    for required in [DocumentType::Form, DocumentType::Certificate] {
        if profile.has_outline(required) {
            return Err(SkissError::ProfileInvalid(format!(
                "no_outline must include '{}'",
                required
            )));
        }
    }

    let title = &profile.title;
    if title.min_len >= title.max_len {
        return Err(SkissError::ProfileInvalid(format!(
            "title.min_len ({}) must be below title.max_len ({})",
            title.min_len, title.max_len
        )));
    }
    if title.max_len > TITLE_LEN_LIMIT {
        return Err(SkissError::ProfileInvalid(format!(
            "title.max_len ({}) must not exceed {}",
            title.max_len, TITLE_LEN_LIMIT
        )));
    }
    if title.anchored_lines == 0 || title.candidate_lines == 0 || title.phrase_lines == 0 {
        return Err(SkissError::ProfileInvalid(
            "title scan windows must be at least 1 line".into(),
        ));
    }
    check_phrases("title.invitation_markers", &title.invitation_markers)?;
    check_phrases("title.document_nouns", &title.document_nouns)?;
    for group in &title.anchored_keywords {
        if group.is_empty() {
            return Err(SkissError::ProfileInvalid(
                "title.anchored_keywords contains an empty group".into(),
            ));
        }
        check_phrases("title.anchored_keywords", group)?;
    }
    for literal in &title.literal_titles {
        check_phrases("title.literal_titles.phrase", std::slice::from_ref(&literal.phrase))?;
        check_phrases("title.literal_titles.markers", &literal.markers)?;
        if literal.title.is_empty() || clean(&literal.title) != literal.title {
            return Err(SkissError::ProfileInvalid(format!(
                "literal title '{}' must be non-empty and already cleaned",
                literal.title
            )));
        }
        if literal.title.chars().count() >= title.max_len {
            return Err(SkissError::ProfileInvalid(format!(
                "literal title '{}' is not shorter than title.max_len ({})",
                literal.title, title.max_len
            )));
        }
    }

    let headings = &profile.headings;
    if headings.max_len < 3 {
        return Err(SkissError::ProfileInvalid(
            "headings.max_len must be at least 3".into(),
        ));
    }
    check_phrases("headings.sentence_markers", &headings.sentence_markers)?;
    check_phrases("headings.junk_fragments", &headings.junk_fragments)?;
    check_phrases("headings.form_fields", &headings.form_fields)?;
    check_phrases("headings.closing_phrases", &headings.closing_phrases)?;
    check_phrases("headings.major_headings", &headings.major_headings)?;
    check_phrases("headings.structural_prefixes", &headings.structural_prefixes)?;
    check_phrases("headings.h1_prefixes", &headings.h1_prefixes)?;
    check_phrases("headings.h2_prefixes", &headings.h2_prefixes)?;
    check_phrases("headings.h3_prefixes", &headings.h3_prefixes)?;

    Ok(())
}

/// Phrases are matched against lowercased text, so they must be lowercase
/// and non-blank themselves.
fn check_phrases(field: &str, phrases: &[String]) -> Result<(), SkissError> {
    for phrase in phrases {
        if phrase.trim().is_empty() {
            return Err(SkissError::ProfileInvalid(format!(
                "{field} contains an empty phrase"
            )));
        }
        if phrase.to_lowercase() != *phrase {
            return Err(SkissError::ProfileInvalid(format!(
                "{field} phrase '{phrase}' must be lowercase"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_json(doc_types: &str, no_outline: &str) -> String {
        format!(
            r#"{{
            "name": "Test",
            "version": "1.0",
            "doc_types": {doc_types},
            "no_outline": {no_outline},
            "title": {{
                "invitation_markers": ["rsvp"],
                "document_nouns": ["form"]
            }},
            "headings": {{
                "max_len": 120,
                "sentence_markers": ["will be"],
                "junk_fragments": [],
                "form_fields": ["name of"],
                "closing_phrases": ["see you there"],
                "major_headings": ["introduction"],
                "structural_prefixes": ["chapter"],
                "h1_prefixes": ["chapter"],
                "h2_prefixes": [],
                "h3_prefixes": []
            }}
        }}"#
        )
    }

    #[test]
    fn test_parse_valid_profile_with_defaults() {
        let json = minimal_json(
            r#"[{ "doc_type": "form", "keywords": ["form"] }]"#,
            r#"["form", "certificate"]"#,
        );
        let p = parse_profile_str(&json).unwrap();
        assert_eq!(p.name, "Test");
        assert_eq!(p.sample_pages, 3);
        assert_eq!(p.title.candidate_lines, 10);
        assert_eq!(p.title.phrase_lines, 15);
        assert_eq!(p.title.max_len, 200);
        assert!(p.title.literal_titles.is_empty());
    }

    #[test]
    fn test_missing_no_outline_type_rejected() {
        let json = minimal_json(
            r#"[{ "doc_type": "form", "keywords": ["form"] }]"#,
            r#"["form"]"#,
        );
        assert!(parse_profile_str(&json).is_err());
    }

    #[test]
    fn test_duplicate_doc_type_rejected() {
        let json = minimal_json(
            r#"[{ "doc_type": "form", "keywords": ["form"] },
                { "doc_type": "form", "keywords": ["grant"] }]"#,
            r#"["form", "certificate"]"#,
        );
        assert!(parse_profile_str(&json).is_err());
    }

    #[test]
    fn test_unknown_doc_type_keywords_rejected() {
        let json = minimal_json(
            r#"[{ "doc_type": "unknown", "keywords": ["misc"] }]"#,
            r#"["form", "certificate"]"#,
        );
        assert!(parse_profile_str(&json).is_err());
    }

    #[test]
    fn test_uppercase_keyword_rejected() {
        let json = minimal_json(
            r#"[{ "doc_type": "form", "keywords": ["Form"] }]"#,
            r#"["form", "certificate"]"#,
        );
        assert!(matches!(
            parse_profile_str(&json),
            Err(SkissError::ProfileInvalid(_))
        ));
    }

    #[test]
    fn test_title_max_len_capped() {
        let mut value: serde_json::Value =
            serde_json::from_str(builtin::preset_json("default").unwrap()).unwrap();
        value["title"]["max_len"] = serde_json::json!(1000);
        let err = parse_profile_str(&value.to_string()).unwrap_err();
        assert!(matches!(err, SkissError::ProfileInvalid(_)));
        assert!(err.to_string().contains("title.max_len"));

        value["title"]["max_len"] = serde_json::json!(TITLE_LEN_LIMIT);
        assert!(parse_profile_str(&value.to_string()).is_ok());
    }

    #[test]
    fn test_load_profile_reports_path() {
        let err = load_profile(Path::new("/nonexistent/profile.json")).unwrap_err();
        assert!(matches!(err, SkissError::ProfileLoad { .. }));
        assert!(err.to_string().contains("/nonexistent/profile.json"));
    }
}
