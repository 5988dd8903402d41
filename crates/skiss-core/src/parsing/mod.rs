pub mod normalize;
pub mod title;

/// Trimmed, non-blank lines of a page in page order.
pub fn non_blank_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect()
}

pub fn word_count(s: &str) -> usize {
    s.split_whitespace().count()
}

/// True when the text has at least one cased character and none of them
/// are lowercase ("FORM FOR GRANT", "RFP: 2024").
pub fn is_upper(s: &str) -> bool {
    let mut cased = false;
    for c in s.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            cased = true;
        }
    }
    cased
}

/// True when every word starts with an uppercase letter followed only by
/// lowercase letters ("Chapter 1: Background").
///
/// Uncased characters (digits, punctuation, spaces) end a word, so
/// "You're" is not title case while "Part-Time" is.
pub fn is_title_case(s: &str) -> bool {
    let mut cased = false;
    let mut prev_cased = false;
    for c in s.chars() {
        if c.is_uppercase() {
            if prev_cased {
                return false;
            }
            prev_cased = true;
            cased = true;
        } else if c.is_lowercase() {
            if !prev_cased {
                return false;
            }
            prev_cased = true;
            cased = true;
        } else {
            prev_cased = false;
        }
    }
    cased
}
