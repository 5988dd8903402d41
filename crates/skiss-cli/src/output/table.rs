use skiss_core::batch::DocumentOutcome;
use skiss_core::classify::LineVerdict;
use skiss_core::model::ExtractionResult;
use skiss_core::trace::TraceBundle;
use std::path::Path;

pub fn print_result(result: &ExtractionResult) {
    if result.title.is_empty() {
        println!("Title: (none)\n");
    } else {
        println!("Title: {}\n", result.title);
    }

    if result.outline.is_empty() {
        println!("  (no outline)");
        return;
    }

    for h in &result.outline {
        let indent = "  ".repeat(h.level.depth());
        println!("{:>4}  {:<3}{}{}", h.page, h.level.to_string(), indent, h.text);
    }
}

pub fn print_trace(bundle: &TraceBundle) {
    println!("=== {} ===\n", bundle.profile);

    let scores: Vec<String> = bundle
        .scores
        .iter()
        .filter(|s| s.score > 0)
        .map(|s| format!("{} {}", s.doc_type, s.score))
        .collect();
    let scores = if scores.is_empty() {
        "no keywords".to_string()
    } else {
        scores.join(", ")
    };
    println!("  Document type: {} ({})", bundle.document_type, scores);

    if bundle.title.is_empty() {
        println!("  Title: (none) [{}]\n", bundle.title_strategy);
    } else {
        println!("  Title: {} [{}]\n", bundle.title, bundle.title_strategy);
    }

    let mut current_page = None;
    for line in &bundle.lines {
        if current_page != Some(line.page) {
            if current_page.is_some() {
                println!();
            }
            println!("  --- page {} ---", line.page);
            current_page = Some(line.page);
        }
        match &line.verdict {
            LineVerdict::Heading { level, rule } => {
                println!("  {:<3} {}  ({})", level.to_string(), line.text, rule);
            }
            LineVerdict::Rejected(reason) => {
                println!("   -  {}  ({})", truncate(&line.text, 60), reason);
            }
        }
    }

    println!(
        "\n  {} of {} lines accepted",
        bundle.accepted().count(),
        bundle.lines.len()
    );
}

pub fn print_batch_summary(outcomes: &[DocumentOutcome], out_dir: &Path) {
    let failed: Vec<&DocumentOutcome> = outcomes.iter().filter(|o| !o.is_ok()).collect();

    for o in outcomes.iter().filter(|o| o.is_ok()) {
        let name = o
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        println!("  {:<40} {} headings", name, o.result.outline.len());
    }

    println!(
        "\nProcessed {} documents, {} failed. Output in {}",
        outcomes.len(),
        failed.len(),
        out_dir.display()
    );

    if !failed.is_empty() {
        eprintln!("\nFailed:");
        for o in failed {
            eprintln!(
                "  - {}: {}",
                o.path.display(),
                o.error.as_deref().unwrap_or("unknown error")
            );
        }
    }
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max).collect();
    format!("{cut}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghij", 4), "abcd...");
    }
}
