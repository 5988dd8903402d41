/// Minimum length of a run of one repeated letter treated as an OCR artifact.
const OCR_RUN_MIN: usize = 4;

/// Minimum length of a separator run (`:`, `-`, `_`) that gets collapsed.
const SEPARATOR_RUN_MIN: usize = 3;

/// Clean a line or block of extracted text.
///
/// Steps:
/// 1. Collapse runs of 4+ identical letters ("RRRRFFFF" -> "RF")
/// 2. Collapse runs of 3+ separators to one character, preferring `:`;
///    a doubled colon also becomes a single `:`
/// 3. Collapse whitespace to single spaces and trim
///
/// The result is stable under a second application.
pub fn clean(text: &str) -> String {
    let letters = collapse_letter_runs(text);
    let separators = collapse_separator_runs(&letters);
    normalize_ws(&separators)
}

/// Reduce text to a comparison key that survives OCR duplication.
///
/// Lowercases, drops everything except letters and digits, and collapses
/// every run of a repeated character to one. "RRRRequest  for" and
/// "Request for" both become "requestfor".
pub fn squeeze(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev: Option<char> = None;
    for c in text.chars().flat_map(char::to_lowercase) {
        if !c.is_alphanumeric() {
            continue;
        }
        if prev != Some(c) {
            out.push(c);
        }
        prev = Some(c);
    }
    out
}

fn collapse_letter_runs(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let mut j = i + 1;
        while j < chars.len() && chars[j] == c {
            j += 1;
        }
        if c.is_alphabetic() && j - i >= OCR_RUN_MIN {
            out.push(c);
        } else {
            out.extend(&chars[i..j]);
        }
        i = j;
    }

    out
}

fn is_separator(c: char) -> bool {
    matches!(c, ':' | '-' | '_')
}

fn collapse_separator_runs(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        if !is_separator(chars[i]) {
            out.push(chars[i]);
            i += 1;
            continue;
        }

        let mut j = i + 1;
        while j < chars.len() && is_separator(chars[j]) {
            j += 1;
        }
        let run = &chars[i..j];

        if run.len() >= SEPARATOR_RUN_MIN {
            if run.contains(&':') {
                out.push(':');
            } else {
                out.push(run[run.len() - 1]);
            }
        } else if run.len() == 2 && run.iter().all(|&c| c == ':') {
            out.push(':');
        } else {
            out.extend(run);
        }
        i = j;
    }

    out
}

pub(crate) fn normalize_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has_letter_run(s: &str, min: usize) -> bool {
        let chars: Vec<char> = s.chars().collect();
        chars
            .windows(min)
            .any(|w| w[0].is_alphabetic() && w.iter().all(|&c| c == w[0]))
    }

    #[test]
    fn test_ocr_uppercase_runs() {
        assert_eq!(clean("RRRRFFFFPPPP"), "RFP");
        assert!(!has_letter_run(&clean("RRRRFFFFPPPP"), 4));
    }

    #[test]
    fn test_ocr_lowercase_runs() {
        assert_eq!(clean("Reeeequest foooor Pr"), "Request for Pr");
    }

    #[test]
    fn test_short_runs_are_kept() {
        assert_eq!(clean("Committee Bookkeeper"), "Committee Bookkeeper");
        assert_eq!(clean("XXX"), "XXX");
    }

    #[test]
    fn test_separator_runs() {
        assert_eq!(clean("Name::::: ____"), "Name: _");
        assert_eq!(clean("Date:: 2024"), "Date: 2024");
        assert_eq!(clean("-----"), "-");
        assert_eq!(clean("a -:- b"), "a : b");
        assert_eq!(clean("well-known"), "well-known");
    }

    #[test]
    fn test_whitespace_collapse_and_trim() {
        assert_eq!(clean("  Chapter   1:\tBackground \n"), "Chapter 1: Background");
        assert_eq!(clean("   "), "");
        assert_eq!(clean(""), "");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "RRRRFFFFPPPP: RRRRequest ffffor Proposal",
            "aaaa::::bbbb----cccc____",
            "  Mixed\t\tCASE   text  ::  -- __ ",
            "Hope to see you there!",
            "a:::::::a aaaa  aaa",
            "",
        ];
        for s in samples {
            let once = clean(s);
            assert_eq!(clean(&once), once, "not idempotent for {s:?}");
        }
    }

    #[test]
    fn test_squeeze() {
        assert_eq!(squeeze("RRRRequest  ffor Proposal"), "requestforproposal");
        assert_eq!(squeeze("Request for Proposal"), "requestforproposal");
        assert_eq!(squeeze("Digital-Library!"), "digitalibrary");
        assert_eq!(squeeze(""), "");
    }
}
