//! ISBN pattern extraction from recognized text.
//!
//! The recognition backend (OCR engine or vision-language model) returns
//! freeform text; this module pulls ISBN-shaped tokens out of it. No checksum
//! validation is performed -- any token matching the length/prefix shape is
//! accepted, mirroring the reference behavior. A checksum filter would be a
//! stricter follow-up improvement.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

/// ISBN-13 candidates: `978`/`979` prefix, then digit groups optionally
/// separated by single hyphens or spaces, ending in one digit.
const ISBN13_PATTERN: &str = r"97[89][-\s]?\d{1,5}[-\s]?\d{1,7}[-\s]?\d{1,6}[-\s]?\d";

/// ISBN-10 candidates: nine digits in separator-delimited groups plus a final
/// digit or check character `X`/`x`.
const ISBN10_PATTERN: &str = r"\b\d[-\s]?\d{1,5}[-\s]?\d{1,7}[-\s]?\d{1,5}[-\s]?[0-9Xx]\b";

static ISBN13_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ISBN13_PATTERN).expect("valid regex"));
static ISBN10_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ISBN10_PATTERN).expect("valid regex"));

/// Sentinel the vision-language backend is prompted to answer with when the
/// image contains no ISBN codes.
const NO_RESULT_SENTINEL: &str = "none";

/// Returns `true` when the backend's text output means "zero ISBNs found".
///
/// The comparison is case-insensitive and ignores surrounding whitespace:
/// a literal `"None"` response is an empty result, not an error.
pub fn is_no_result_sentinel(text: &str) -> bool {
    text.trim().eq_ignore_ascii_case(NO_RESULT_SENTINEL)
}

/// Extract ISBN-10 and ISBN-13 codes from recognized text.
///
/// Separators (hyphens/spaces) are stripped from each candidate before the
/// shape check. ISBN-13 tokens must be exactly 13 digits; ISBN-10 tokens must
/// be 9 digits plus a final digit or `X` (a trailing lowercase `x` is
/// normalized to uppercase). An ISBN-10 that is a substring of an accepted
/// ISBN-13 is dropped as a duplicate read of the same code.
///
/// The result is deduplicated and sorted.
pub fn extract_isbns(text: &str) -> Vec<String> {
    let mut isbn13s: Vec<String> = Vec::new();

    for m in ISBN13_RE.find_iter(text) {
        let candidate = strip_separators(m.as_str());
        if candidate.len() == 13 && candidate.bytes().all(|b| b.is_ascii_digit()) {
            isbn13s.push(candidate);
        }
    }

    let mut found: BTreeSet<String> = isbn13s.iter().cloned().collect();

    for m in ISBN10_RE.find_iter(text) {
        let mut candidate = strip_separators(m.as_str());
        if candidate.len() != 10 {
            continue;
        }
        let (digits, check) = candidate.split_at(9);
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            continue;
        }
        let check = check.as_bytes()[0];
        if !(check.is_ascii_digit() || check == b'X' || check == b'x') {
            continue;
        }
        if check == b'x' {
            candidate = format!("{digits}X");
        }
        // A 10-digit substring of an accepted ISBN-13 is the same physical
        // code read twice, not a second ISBN.
        if isbn13s.iter().any(|isbn13| isbn13.contains(&candidate)) {
            continue;
        }
        found.insert(candidate);
    }

    found.into_iter().collect()
}

fn strip_separators(token: &str) -> String {
    token.chars().filter(|c| *c != '-' && !c.is_whitespace()).collect()
}
