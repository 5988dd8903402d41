use skiss_core::batch;
use skiss_core::error::SkissError;
use skiss_core::extraction::pdftotext::PdftotextExtractor;
use skiss_core::outline;
use skiss_core::profile::schema::HeuristicProfile;
use std::path::{Path, PathBuf};

use crate::commands::{input_kind, load_pages, InputKind};
use crate::output;

const BATCH_OUTPUT_DIR: &str = "pdf_extraction_outputs";

pub fn run(
    input: &Path,
    out: Option<PathBuf>,
    profile: &HeuristicProfile,
    format: &str,
    layout: bool,
    jobs: Option<usize>,
) -> Result<(), SkissError> {
    if let InputKind::Directory = input_kind(input)? {
        return run_batch(input, out, profile, layout, jobs);
    }

    let pages = load_pages(input, layout)?;
    let result = outline::build(&pages, profile);

    match out {
        Some(path) => {
            output::json::write(&path, &result)?;
            eprintln!("Wrote {}", path.display());
        }
        None => match format {
            "table" => output::table::print_result(&result),
            _ => output::json::print(&result)?,
        },
    }

    Ok(())
}

fn run_batch(
    input: &Path,
    out: Option<PathBuf>,
    profile: &HeuristicProfile,
    layout: bool,
    jobs: Option<usize>,
) -> Result<(), SkissError> {
    if let Some(n) = jobs {
        if let Err(e) = rayon::ThreadPoolBuilder::new().num_threads(n).build_global() {
            log::warn!("could not size worker pool to {n} threads: {e}");
        }
    }

    let out_dir = out.unwrap_or_else(|| default_output_dir(input));
    std::fs::create_dir_all(&out_dir)?;

    let pdfs = batch::find_pdfs(input)?;
    if pdfs.is_empty() {
        eprintln!("No PDF files found in {}", input.display());
        return Ok(());
    }
    log::info!("processing {} PDFs from {}", pdfs.len(), input.display());
    PdftotextExtractor::ensure_available()?;

    let extractor = PdftotextExtractor::with_layout(layout);
    let outcomes = batch::extract_files(&pdfs, &extractor, profile);

    let write_failures = write_outcomes(&outcomes, &out_dir);

    output::table::print_batch_summary(&outcomes, &out_dir);
    if !write_failures.is_empty() {
        eprintln!("\nCould not write:");
        for (path, err) in &write_failures {
            eprintln!("  - {}: {err}", path.display());
        }
        return Err(SkissError::Io(std::io::Error::other(format!(
            "{} of {} result files could not be written",
            write_failures.len(),
            outcomes.len()
        ))));
    }
    Ok(())
}

/// Write one `<stem>.json` per outcome. A failed write is recorded and
/// the remaining files are still written.
fn write_outcomes(
    outcomes: &[batch::DocumentOutcome],
    out_dir: &Path,
) -> Vec<(PathBuf, SkissError)> {
    let mut failures = Vec::new();
    for outcome in outcomes {
        let stem = outcome
            .path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document".into());
        let target = out_dir.join(format!("{stem}.json"));
        if let Err(e) = output::json::write(&target, &outcome.result) {
            log::warn!("failed to write {}: {e}", target.display());
            failures.push((target, e));
        }
    }
    failures
}

/// `pdf_extraction_outputs` next to the input directory.
fn default_output_dir(input: &Path) -> PathBuf {
    match input.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join(BATCH_OUTPUT_DIR),
        _ => PathBuf::from(BATCH_OUTPUT_DIR),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skiss_core::model::ExtractionResult;

    fn outcome(name: &str) -> batch::DocumentOutcome {
        batch::DocumentOutcome {
            path: PathBuf::from(format!("in/{name}.pdf")),
            result: ExtractionResult::empty(),
            error: None,
        }
    }

    #[test]
    fn test_write_outcomes_continues_past_failures() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where b.json should go makes that one write fail.
        std::fs::create_dir(dir.path().join("b.json")).unwrap();

        let outcomes = vec![outcome("a"), outcome("b"), outcome("c")];
        let failures = write_outcomes(&outcomes, dir.path());

        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].0, dir.path().join("b.json"));
        assert!(dir.path().join("a.json").is_file());
        assert!(dir.path().join("c.json").is_file());
    }

    #[test]
    fn test_default_output_dir() {
        assert_eq!(
            default_output_dir(Path::new("data/pdfs")),
            PathBuf::from("data/pdf_extraction_outputs")
        );
        assert_eq!(
            default_output_dir(Path::new("pdfs")),
            PathBuf::from("pdf_extraction_outputs")
        );
    }
}
