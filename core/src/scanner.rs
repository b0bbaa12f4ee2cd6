//! Candidate scanning for arithmetic-looking substrings.
//!
//! The scanner is deliberately permissive: it proposes anything shaped like
//! a chain of operands joined by operators and leaves all precision work to
//! [`crate::validator::is_valid`]. In particular, a parenthesized operand is
//! matched verbatim (`\([^()]*\)`), so a proposed candidate may still carry
//! an invalid interior. Keeping recall here and precision in the validator
//! keeps the two halves orthogonal; the validator is the single source of
//! truth for well-formedness.

use std::sync::OnceLock;

use regex::Regex;

/// Candidate shape: an optional sign, an operand, then one or more
/// operator-and-operand continuations.
///
/// An operand is a decimal number with an optional fractional part, or a
/// single-level paren group whose interior is anything except a nested
/// paren. Deeper nesting is never proposed.
const CANDIDATE_PATTERN: &str = r"(?x)
    [-+]? \s*
    (?: \d+ (?: \. \d+ )? | \( [^()]* \) )
    (?:
        \s* [-+*/%] \s*
        [-+]? \s*
        (?: \d+ (?: \. \d+ )? | \( [^()]* \) )
    )+
";

static CANDIDATE_REGEX: OnceLock<Regex> = OnceLock::new();

fn candidate_regex() -> &'static Regex {
    CANDIDATE_REGEX
        .get_or_init(|| Regex::new(CANDIDATE_PATTERN).expect("valid candidate pattern"))
}

/// Propose arithmetic-looking substrings of `text`, leftmost first.
///
/// Matches are non-overlapping, reported in input order, and trimmed of
/// surrounding whitespace. Total: any input, including the empty string,
/// yields a (possibly empty) vector. A bare number is never proposed; a
/// candidate always carries at least one operator.
#[must_use]
pub fn scan(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }

    let candidates: Vec<&str> = candidate_regex()
        .find_iter(text)
        .map(|m| m.as_str().trim())
        .collect();

    tracing::trace!(candidates = candidates.len(), "candidate scan finished");
    candidates
}
