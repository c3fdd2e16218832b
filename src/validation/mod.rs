/*!
 * Validation module for translation catalog linting.
 *
 * This module compares each entry's source and translation text over two
 * independent token classes:
 * - Flag tokens (command-line-option-shaped substrings)
 * - Format tokens (printf-directive-shaped substrings)
 *
 * # Architecture
 *
 * - `tokens`: Extracts ordered token subsequences from decoded text
 * - `service`: Compares the subsequences per entry and emits issues
 */

pub mod tokens;
pub mod service;

// Re-export main types
pub use service::{LintConfig, LintIssue, LintService};
pub use tokens::TokenScanner;
