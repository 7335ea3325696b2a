//! Text sanitiser applied to code-table values and derived field names.
//!
//! Symphony table values arrive as display strings (`Item ID`, `Date of
//! Discharge`). Data-code names become JSON keys, so they are folded to
//! `snake_case`-ish identifiers; command names keep their spacing and case.

/// Characters stripped unconditionally from table values.
const PUNCTUATION: &[char] = &[
    '[', ']', '$', '*', '\'', '(', ')', '{', '}', '\\', '"', '`',
];

/// Remove the fixed punctuation set from `s`.
///
/// With `fold_spaces`, the result is additionally trimmed, lowercased, and
/// interior whitespace is collapsed to single underscores, the form used
/// for record keys. Without it, spacing and case are preserved as-is.
///
/// Applying the function twice yields the same output as applying it once.
pub fn clean_string(s: &str, fold_spaces: bool) -> String {
    let stripped: String = s.chars().filter(|c| !PUNCTUATION.contains(c)).collect();
    if fold_spaces {
        stripped
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("_")
            .to_lowercase()
    } else {
        stripped
    }
}
