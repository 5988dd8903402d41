use skiss_core::error::SkissError;
use skiss_core::validate::{sanitize, validate_output};
use std::path::{Path, PathBuf};

use crate::output;

pub fn run(path: &Path, fix: bool) -> Result<(), SkissError> {
    let files = json_files(path)?;
    if files.is_empty() {
        println!("No JSON files found in {}", path.display());
        return Ok(());
    }

    let mut invalid = 0;
    for file in &files {
        match check_file(file, fix) {
            Ok(Status::Valid) => println!("  OK       {}", file.display()),
            Ok(Status::Fixed) => println!("  FIXED    {}", file.display()),
            Err(e) => {
                invalid += 1;
                println!("  INVALID  {}: {e}", file.display());
            }
        }
    }

    println!("\n{} checked, {} invalid", files.len(), invalid);
    if invalid > 0 {
        return Err(SkissError::InvalidOutput(format!(
            "{invalid} of {} files failed validation",
            files.len()
        )));
    }
    Ok(())
}

#[derive(Debug, PartialEq, Eq)]
enum Status {
    Valid,
    Fixed,
}

fn check_file(file: &Path, fix: bool) -> Result<Status, SkissError> {
    let value: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(file)?)?;
    let verdict = validate_output(&value);
    if !fix {
        return verdict.map(|()| Status::Valid);
    }

    let cleaned = sanitize(&value);
    if verdict.is_ok() && serde_json::to_value(&cleaned)? == value {
        return Ok(Status::Valid);
    }
    output::json::write(file, &cleaned)?;
    Ok(Status::Fixed)
}

fn json_files(path: &Path) -> Result<Vec<PathBuf>, SkissError> {
    if !path.is_dir() {
        return Ok(vec![path.to_path_buf()]);
    }
    let mut files = Vec::new();
    for entry in std::fs::read_dir(path)? {
        let p = entry?.path();
        let is_json = p
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if p.is_file() && is_json {
            files.push(p);
        }
    }
    files.sort();
    Ok(files)
}
