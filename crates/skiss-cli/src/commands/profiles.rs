use skiss_core::error::SkissError;
use skiss_core::profile::builtin;
use std::path::Path;

pub fn list() -> Result<(), SkissError> {
    println!("Available predefined profiles:\n");
    for name in builtin::PRESETS {
        let p = builtin::load_preset(name)?;
        println!("  {:<8} v{}", name, p.version);
        if let Some(ref desc) = p.description {
            println!("           {}", desc);
        }
        let no_outline: Vec<String> = p.no_outline.iter().map(|t| t.to_string()).collect();
        println!("           no outline for: {}", no_outline.join(", "));
        println!("           heading length ceiling: {}", p.headings.max_len);
        println!();
    }
    Ok(())
}

pub fn show(preset: &str) -> Result<(), SkissError> {
    let json = builtin::preset_json(preset).ok_or_else(|| {
        SkissError::ProfileInvalid(format!(
            "unknown preset '{}'. Available: {}",
            preset,
            builtin::PRESETS.join(", ")
        ))
    })?;
    print!("{json}");
    if !json.ends_with('\n') {
        println!();
    }
    Ok(())
}

pub fn schema() -> Result<(), SkissError> {
    print!(
        r#"JSON Profile Schema
===================

A profile holds every keyword table and threshold used to detect the
document type, pick the title and accept headings. All phrases are
lowercase and matched against lowercased text.

Top-level fields:
  name          (string, required)  Profile name
  description   (string, optional)  What the profile is for
  version       (string, required)  Version identifier
  sample_pages  (integer, optional) Leading pages scanned for document-type
                                    keywords. Default: 3
  doc_types     (array, required)   Ordered keyword table. Each entry is
                                    {{"doc_type": ..., "keywords": [...]}}.
                                    Types: form, certificate, manual,
                                    proposal, invitation, pathway.
                                    On equal scores the earlier entry wins.
  no_outline    (array, required)   Document types that never get an
                                    outline. Must include form and certificate.
  title         (object, required)  Title rules (see below)
  headings      (object, required)  Heading rules (see below)

title:
  invitation_markers  Phrases that suppress the title of an invitation
  literal_titles      [{{"phrase", "markers", "title"}}]: canonical titles
                      returned verbatim when phrase and markers appear on
                      the first page (compared ignoring repeated letters,
                      spacing and punctuation)
  anchored_keywords   Keyword groups; the first line containing a whole
                      group is the title
  document_nouns      Nouns that make a line a title candidate
  anchored_lines      Lines scanned for anchored keywords. Default: 15
  candidate_lines     Lines scanned for shaped candidates. Default: 10
  phrase_lines        Lines scanned for capitalized phrases. Default: 15
  min_len, max_len    Candidate length bounds. Defaults: 10, 200

headings:
  max_len             Longer lines are body text
  sentence_markers    Phrases that mark a line as a sentence
  junk_fragments      Lines equal to one of these are never headings
  form_fields         Terms that disqualify a numbered line
  closing_phrases     The only lines kept in an invitation
  major_headings      Whole-line headings ("introduction", ...)
  structural_prefixes Line openings that make a heading
  h1_prefixes, h2_prefixes, h3_prefixes
                      Line openings that fix the heading level

Run `skiss profiles show default` for a complete example.
"#
    );
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), SkissError> {
    let p = skiss_core::profile::load_profile(file)?;

    println!("Profile '{}' (v{}) is valid.", p.name, p.version);
    println!("  Document types: {}", p.doc_types.len());
    println!(
        "  Keywords: {}",
        p.doc_types.iter().map(|d| d.keywords.len()).sum::<usize>()
    );
    println!("  Heading length ceiling: {}", p.headings.max_len);

    let mut warnings = Vec::new();
    for (i, entry) in p.doc_types.iter().enumerate() {
        for kw in &entry.keywords {
            for other in &p.doc_types[i + 1..] {
                if other.keywords.contains(kw) {
                    warnings.push(format!(
                        "keyword '{}' scores for both '{}' and '{}'",
                        kw, entry.doc_type, other.doc_type
                    ));
                }
            }
        }
    }
    if p.headings.h1_prefixes.is_empty() {
        warnings.push("no h1_prefixes: only upper-case and appendix lines reach H1".into());
    }

    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in &warnings {
            println!("  - {}", w);
        }
    }

    Ok(())
}
