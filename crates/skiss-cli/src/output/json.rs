use serde::Serialize;
use skiss_core::error::SkissError;
use std::path::Path;

pub fn print<T: Serialize>(value: &T) -> Result<(), SkissError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}

/// Write pretty JSON, creating the parent directory if needed.
pub fn write<T: Serialize>(path: &Path, value: &T) -> Result<(), SkissError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    std::fs::write(path, json)?;
    Ok(())
}
