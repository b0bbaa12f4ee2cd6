//! Structural validation of candidate expressions.
//!
//! [`is_valid`] enforces stricter well-formedness than the scanner's
//! pattern can express: paren balance, no empty groups, no trailing or
//! doubled operators, a textual division-by-zero guard, and finally a
//! whole-string grammar check over the flattened candidate. Checks run
//! cheapest first and short-circuit on the first failure.
//!
//! The function is total and pure: any input terminates in a boolean,
//! never a panic or an error.

use std::sync::OnceLock;

use regex::Regex;

/// A well-formed paren group with no nested parens. Innermost groups are
/// collapsed to a placeholder before the chain grammar runs.
const PAREN_GROUP_PATTERN: &str = r"\([^()]*\)";

/// Flattened chain grammar: optional sign, an operand, then one or more
/// operator-and-operand continuations. `N` stands for a collapsed paren
/// group; the input whitelist rejects letters long before this runs, so
/// the placeholder cannot be spoofed from outside.
const CHAIN_PATTERN: &str = r"^[-+]?(?:N|\d+(?:\.\d+)?)(?:[-+*/%][-+]?(?:N|\d+(?:\.\d+)?))+$";

static PAREN_GROUP_REGEX: OnceLock<Regex> = OnceLock::new();
static CHAIN_REGEX: OnceLock<Regex> = OnceLock::new();

fn paren_group_regex() -> &'static Regex {
    PAREN_GROUP_REGEX
        .get_or_init(|| Regex::new(PAREN_GROUP_PATTERN).expect("valid paren pattern"))
}

fn chain_regex() -> &'static Regex {
    CHAIN_REGEX.get_or_init(|| Regex::new(CHAIN_PATTERN).expect("valid chain pattern"))
}

/// Decide whether `candidate` is a well-formed arithmetic expression.
///
/// Whitespace anywhere in the candidate is insignificant. A confirmed
/// expression always contains at least one binary operator: a bare
/// number, signed or not, is rejected, as is a lone parenthesized group
/// with no top-level operator.
///
/// The division-by-zero guard is textual and intentionally narrow: it
/// rejects a literal `/0` (so `5/0`, `5/ 0`, `5/01`) but lets `5/(0)`
/// through. Broadening it would change observable behavior.
#[must_use]
pub fn is_valid(candidate: &str) -> bool {
    let trimmed = candidate.trim();
    if trimmed.is_empty() {
        return false;
    }

    if !trimmed.chars().all(is_allowed_char) {
        return false;
    }

    if !parens_balanced(trimmed) {
        return false;
    }

    let stripped: String = trimmed.chars().filter(|c| !c.is_ascii_whitespace()).collect();

    if stripped.contains("()") {
        return false;
    }

    if stripped.chars().last().is_some_and(is_operator) {
        return false;
    }

    if has_operator_before_close(&stripped) {
        return false;
    }

    if has_adjacent_operators(&stripped) {
        return false;
    }

    if stripped.contains("/0") {
        return false;
    }

    chain_shape_holds(&stripped)
}

/// The five binary operator characters. A leading `+`/`-` doubles as a
/// unary sign; the adjacency check below only fires when two of these
/// characters touch.
fn is_operator(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/' | '%')
}

fn is_allowed_char(c: char) -> bool {
    c.is_ascii_digit()
        || c == '.'
        || c == '('
        || c == ')'
        || c.is_ascii_whitespace()
        || is_operator(c)
}

/// Left-to-right balance check: every `)` needs an earlier unmatched `(`,
/// and nothing may remain open at the end.
fn parens_balanced(s: &str) -> bool {
    let mut open = 0_usize;
    for c in s.chars() {
        match c {
            '(' => open += 1,
            ')' => {
                if open == 0 {
                    return false;
                }
                open -= 1;
            }
            _ => {}
        }
    }
    open == 0
}

/// A paren group may not end on its operator: `(2 +) * 3` is malformed.
fn has_operator_before_close(stripped: &str) -> bool {
    // The whitelist has already run, so the string is pure ASCII.
    stripped
        .as_bytes()
        .windows(2)
        .any(|pair| is_operator(pair[0] as char) && pair[1] == b')')
}

/// Two touching operator characters are always malformed, `--` included.
/// A leading unary sign precedes a digit or `(`, so it never trips this.
fn has_adjacent_operators(stripped: &str) -> bool {
    stripped
        .as_bytes()
        .windows(2)
        .any(|pair| is_operator(pair[0] as char) && is_operator(pair[1] as char))
}

/// Collapse innermost paren groups to `N` until none remain, then require
/// the remainder to be a full sign-operand-operator chain. This is what
/// rejects `+ 3`, `2 3`, and bare numbers: an expression must contain at
/// least one binary operator.
fn chain_shape_holds(stripped: &str) -> bool {
    let mut collapsed = stripped.to_string();
    loop {
        let next = paren_group_regex().replace_all(&collapsed, "N").into_owned();
        if next == collapsed {
            break;
        }
        collapsed = next;
    }

    chain_regex().is_match(&collapsed)
}

#[cfg(test)]
mod tests {
    use super::is_valid;

    #[test]
    fn accepts_plain_chains() {
        for case in ["2 + 2", "3 * 4", "10 - 5", "15 / 3", "20 % 6", "2 + 3 + 4"] {
            assert!(is_valid(case), "expected valid: {case}");
        }
    }

    #[test]
    fn accepts_signs_and_fractions() {
        for case in ["-5 + 10", "+8 - 3", "3.14 * 2"] {
            assert!(is_valid(case), "expected valid: {case}");
        }
    }

    #[test]
    fn accepts_paren_operands_in_chains() {
        for case in ["2 * (3 + 4)", "(5 + 3) * 2", "(1 + 2) * (3 - 4)"] {
            assert!(is_valid(case), "expected valid: {case}");
        }
    }

    #[test]
    fn whitespace_is_insignificant() {
        assert!(is_valid("  2 + 2  "));
        assert!(is_valid("2\t+\n2"));
        assert!(is_valid("2+2"));
    }

    #[test]
    fn rejects_empty_input() {
        assert!(!is_valid(""));
        assert!(!is_valid("   "));
    }

    #[test]
    fn rejects_disallowed_characters() {
        assert!(!is_valid("abc + 3"));
        assert!(!is_valid("2 + x"));
        assert!(!is_valid("2 , 3"));
    }

    #[test]
    fn rejects_trailing_operator() {
        assert!(!is_valid("2 +"));
        assert!(!is_valid("2 + 3 *"));
    }

    #[test]
    fn rejects_bare_operands() {
        // No binary operator, no expression.
        assert!(!is_valid("7"));
        assert!(!is_valid("+ 3"));
        assert!(!is_valid("-5"));
        assert!(!is_valid("3.14"));
        assert!(!is_valid("(2 + 2)"));
    }

    #[test]
    fn rejects_number_pairs_without_operator() {
        assert!(!is_valid("2 3"));
        assert!(!is_valid("2 . 3"));
    }

    #[test]
    fn rejects_empty_and_degenerate_paren_groups() {
        assert!(!is_valid("()"));
        assert!(!is_valid("( )"));
        assert!(!is_valid("() + 1"));
        assert!(!is_valid("(+)"));
        assert!(!is_valid("(abc)"));
    }

    #[test]
    fn rejects_operator_before_closing_paren() {
        assert!(!is_valid("(2 +) * 3"));
        assert!(!is_valid("(2 + 3 *) - 1"));
    }

    #[test]
    fn rejects_adjacent_operators() {
        for case in ["2 ++ 3", "2 +* 3", "2 -- 3", "2 %/ 3", "3 * -2"] {
            assert!(!is_valid(case), "expected invalid: {case}");
        }
    }

    #[test]
    fn rejects_unbalanced_parens() {
        for case in ["(2 + 3", "2 + 3)", ")2 + 3(", "((2 + 3)"] {
            assert!(!is_valid(case), "expected invalid: {case}");
        }
    }

    #[test]
    fn rejects_textual_division_by_zero() {
        assert!(!is_valid("5/0"));
        assert!(!is_valid("5 / 0"));
        assert!(!is_valid("1 + 5/0 + 2"));
    }

    #[test]
    fn division_guard_has_no_false_positive_on_other_zeros() {
        assert!(is_valid("5/10"));
        assert!(is_valid("0 + 5"));
        assert!(is_valid("10 / 5"));
    }

    #[test]
    fn division_by_parenthesized_zero_slips_through() {
        // Known narrow guard: the check is textual, not semantic.
        assert!(is_valid("5 / (0)"));
    }

    #[test]
    fn verdict_is_deterministic() {
        for case in ["2 + 2", "2 +", "(2 + 3) * 4"] {
            assert_eq!(is_valid(case), is_valid(case));
        }
    }
}
