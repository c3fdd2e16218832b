/*!
 * Special-token extraction from decoded entry text.
 *
 * Two token classes are scanned, left to right, maximal-match,
 * non-overlapping:
 * - Flag tokens: command-line-option-shaped substrings (`-4`, `--baz`)
 * - Format tokens: printf-directive-shaped substrings (`%s`, `%-4d`)
 */

use once_cell::sync::Lazy;
use regex::Regex;

/// Regex for flag tokens.
///
/// The hyphen must not be preceded by an alphanumeric, underscore or hyphen
/// (so the hyphen inside `well-known` is not a token). The regex crate has
/// no lookbehind, so the leading group matches the boundary explicitly and
/// the token itself is capture group 1; for a maximal non-overlapping scan
/// this is equivalent.
static FLAG_TOKEN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:^|[^0-9A-Za-z_-])(-[0-9A-Za-z_-]+)").expect("Invalid flag token regex")
});

/// Regex for format tokens.
///
/// Deliberately loose: any percent-prefixed run of `[0-9A-Za-z+-]` counts,
/// so unrelated substrings like `%quux` also match. Accepted false-positive
/// cost; do not tighten.
static FORMAT_TOKEN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"%[0-9A-Za-z+-]+").expect("Invalid format token regex")
});

/// Extracts special-token subsequences from decoded entry text
pub struct TokenScanner;

impl TokenScanner {
    /// Ordered flag tokens found in the text.
    ///
    /// `"well-known -4 --baz"` yields `["-4", "--baz"]`.
    pub fn flag_tokens(text: &str) -> Vec<String> {
        FLAG_TOKEN_REGEX
            .captures_iter(text)
            .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
            .collect()
    }

    /// Ordered format tokens found in the text.
    ///
    /// `"%s failed with %-4d"` yields `["%s", "%-4d"]`.
    pub fn format_tokens(text: &str) -> Vec<String> {
        FORMAT_TOKEN_REGEX
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}
