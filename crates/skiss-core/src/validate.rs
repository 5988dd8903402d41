use crate::error::SkissError;
use crate::model::{ExtractionResult, Heading, HeadingLevel};
use crate::parsing::normalize::clean;
use serde_json::Value;

/// Check that a JSON value has the shape of an extraction result.
pub fn validate_output(value: &Value) -> Result<(), SkissError> {
    let obj = value
        .as_object()
        .ok_or_else(|| SkissError::InvalidOutput("top level must be an object".into()))?;

    match obj.get("title") {
        Some(Value::String(_)) => {}
        Some(_) => return Err(SkissError::InvalidOutput("'title' must be a string".into())),
        None => return Err(SkissError::InvalidOutput("missing 'title'".into())),
    }

    let outline = match obj.get("outline") {
        Some(Value::Array(items)) => items,
        Some(_) => return Err(SkissError::InvalidOutput("'outline' must be an array".into())),
        None => return Err(SkissError::InvalidOutput("missing 'outline'".into())),
    };

    for (i, entry) in outline.iter().enumerate() {
        let entry = entry.as_object().ok_or_else(|| {
            SkissError::InvalidOutput(format!("outline[{i}] must be an object"))
        })?;
        match entry.get("level").and_then(Value::as_str) {
            Some("H1" | "H2" | "H3" | "H4") => {}
            Some(other) => {
                return Err(SkissError::InvalidOutput(format!(
                    "outline[{i}].level '{other}' is not one of H1, H2, H3, H4"
                )))
            }
            None => {
                return Err(SkissError::InvalidOutput(format!(
                    "outline[{i}].level must be a string"
                )))
            }
        }
        if !entry.get("text").is_some_and(Value::is_string) {
            return Err(SkissError::InvalidOutput(format!(
                "outline[{i}].text must be a string"
            )));
        }
        if !entry.get("page").is_some_and(Value::is_u64) {
            return Err(SkissError::InvalidOutput(format!(
                "outline[{i}].page must be a non-negative integer"
            )));
        }
    }

    Ok(())
}

/// Leniently load an extraction result from untrusted JSON.
///
/// Malformed outline entries are dropped without error.
pub fn sanitize(value: &Value) -> ExtractionResult {
    let title = value
        .get("title")
        .and_then(Value::as_str)
        .map(clean)
        .unwrap_or_default();

    let outline = value
        .get("outline")
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(sanitize_entry).collect())
        .unwrap_or_default();

    ExtractionResult { title, outline }
}

fn sanitize_entry(entry: &Value) -> Option<Heading> {
    let level = entry
        .get("level")
        .and_then(Value::as_str)
        .and_then(HeadingLevel::from_str_loose)?;
    let text = clean(entry.get("text")?.as_str()?);
    if text.is_empty() {
        return None;
    }
    let page = match entry.get("page")? {
        Value::Number(n) => usize::try_from(n.as_u64()?).ok()?,
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit()) {
                return None;
            }
            s.parse().ok()?
        }
        _ => return None,
    };
    Some(Heading { level, text, page })
}
