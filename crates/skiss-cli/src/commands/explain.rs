use skiss_core::error::SkissError;
use skiss_core::profile::schema::HeuristicProfile;
use skiss_core::trace;
use std::path::Path;

use crate::commands::load_pages;
use crate::output;

pub fn run(
    input: &Path,
    profile: &HeuristicProfile,
    format: &str,
    layout: bool,
) -> Result<(), SkissError> {
    let pages = load_pages(input, layout)?;
    let bundle = trace::trace_document(&pages, profile);

    match format {
        "json" => output::json::print(&bundle)?,
        _ => output::table::print_trace(&bundle),
    }

    Ok(())
}
