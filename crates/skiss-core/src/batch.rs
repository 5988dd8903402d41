use crate::error::SkissError;
use crate::extraction::PdfExtractor;
use crate::model::ExtractionResult;
use crate::profile::schema::HeuristicProfile;
use rayon::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Result of processing one file of a batch.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentOutcome {
    pub path: PathBuf,
    pub result: ExtractionResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DocumentOutcome {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// PDF files directly inside `dir`, sorted by path.
pub fn find_pdfs(dir: &Path) -> Result<Vec<PathBuf>, SkissError> {
    let mut pdfs = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && is_pdf(&path) {
            pdfs.push(path);
        }
    }
    pdfs.sort();
    Ok(pdfs)
}

pub fn is_pdf(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("pdf"))
}

/// Extract every file in parallel. A failing file yields an empty result
/// and its error message; output order matches input order.
pub fn extract_files(
    paths: &[PathBuf],
    extractor: &dyn PdfExtractor,
    profile: &HeuristicProfile,
) -> Vec<DocumentOutcome> {
    paths
        .par_iter()
        .map(|path| extract_file(path, extractor, profile))
        .collect()
}

fn extract_file(
    path: &Path,
    extractor: &dyn PdfExtractor,
    profile: &HeuristicProfile,
) -> DocumentOutcome {
    let outcome = std::fs::read(path)
        .map_err(SkissError::from)
        .and_then(|bytes| crate::extract_pdf(&bytes, extractor, profile));

    match outcome {
        Ok(result) => {
            log::info!(
                "{}: {} headings",
                path.display(),
                result.outline.len()
            );
            DocumentOutcome {
                path: path.to_path_buf(),
                result,
                error: None,
            }
        }
        Err(e) => {
            log::warn!("{}: {e}", path.display());
            DocumentOutcome {
                path: path.to_path_buf(),
                result: ExtractionResult::empty(),
                error: Some(e.to_string()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_find_pdfs_sorted_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.pdf", "a.PDF", "notes.txt", "c.pdf.bak"] {
            fs::write(dir.path().join(name), b"x").unwrap();
        }
        fs::create_dir(dir.path().join("nested.pdf")).unwrap();

        let names: Vec<String> = find_pdfs(dir.path())
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.PDF", "b.pdf"]);
    }

    #[test]
    fn test_find_pdfs_missing_dir() {
        assert!(matches!(
            find_pdfs(Path::new("/nonexistent/skiss-batch")),
            Err(SkissError::Io(_))
        ));
    }
}
