pub mod explain;
pub mod extract;
pub mod profiles;
pub mod validate;

use skiss_core::error::SkissError;
use skiss_core::extraction::pdftotext::PdftotextExtractor;
use skiss_core::extraction::{pages_from_text, PageText, PdfExtractor};
use skiss_core::profile::builtin;
use skiss_core::profile::schema::HeuristicProfile;
use std::path::Path;

/// A profile file wins over a preset; without either the default preset is used.
pub fn select_profile(
    preset: Option<&str>,
    profile: Option<&Path>,
) -> Result<HeuristicProfile, SkissError> {
    match (profile, preset) {
        (Some(path), _) => skiss_core::profile::load_profile(path),
        (None, Some(name)) => builtin::load_preset(name),
        (None, None) => Ok(builtin::default_profile().clone()),
    }
}

pub enum InputKind {
    Pdf,
    Text,
    Directory,
}

pub fn input_kind(path: &Path) -> Result<InputKind, SkissError> {
    if path.is_dir() {
        return Ok(InputKind::Directory);
    }
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("pdf") => Ok(InputKind::Pdf),
        Some("txt") => Ok(InputKind::Text),
        _ => Err(SkissError::UnsupportedInput {
            path: path.to_path_buf(),
        }),
    }
}

/// Page texts of a single PDF or form-feed separated text file.
pub fn load_pages(path: &Path, layout: bool) -> Result<Vec<PageText>, SkissError> {
    match input_kind(path)? {
        InputKind::Pdf => {
            let bytes = std::fs::read(path)?;
            PdftotextExtractor::with_layout(layout).extract_pages(&bytes)
        }
        InputKind::Text => Ok(pages_from_text(&std::fs::read_to_string(path)?)),
        InputKind::Directory => Err(SkissError::UnsupportedInput {
            path: path.to_path_buf(),
        }),
    }
}
