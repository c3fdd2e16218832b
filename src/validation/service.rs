/*!
 * Lint service comparing source and translation token sequences.
 *
 * For every translated entry, the ordered token subsequences of msgid and
 * msgstr are extracted per enabled token class and compared as sequences
 * (order and duplicate count matter). A difference yields one issue per
 * token class, quoting both sequences verbatim.
 */

use log::debug;
use serde::{Deserialize, Serialize};

use crate::catalog::CatalogEntry;

use super::tokens::TokenScanner;

/// Configuration for the lint service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LintConfig {
    /// Whether to compare command-line flag tokens
    #[serde(default = "default_true")]
    pub flag_tokens: bool,

    /// Whether to compare printf-style format tokens; off by default due to
    /// the known false-positive cost of the loose token heuristic
    #[serde(default)]
    pub format_tokens: bool,
}

fn default_true() -> bool {
    true
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            flag_tokens: true,
            format_tokens: false,
        }
    }
}

/// A reported mismatch between an entry's source and translation tokens
#[derive(Debug, Clone)]
pub struct LintIssue<'a> {
    /// Entry that triggered the issue
    pub entry: &'a CatalogEntry,

    /// Human-readable description naming both token sequences
    pub reason: String,
}

/// Lint service for parsed catalog entries
pub struct LintService {
    config: LintConfig,
}

impl LintService {
    /// Create a new lint service with default configuration
    pub fn new() -> Self {
        Self::with_config(LintConfig::default())
    }

    /// Create a new lint service with custom configuration
    pub fn with_config(config: LintConfig) -> Self {
        Self { config }
    }

    /// Lint a single entry.
    ///
    /// Untranslated entries are skipped entirely. A translated entry yields
    /// zero, one or two issues; a flag-token issue precedes a format-token
    /// issue.
    pub fn lint_entry<'a>(&self, entry: &'a CatalogEntry) -> Vec<LintIssue<'a>> {
        if !entry.is_translated() {
            // Missing translations are not an error
            return Vec::new();
        }

        let mut issues = Vec::new();

        if self.config.flag_tokens {
            let source_flags = TokenScanner::flag_tokens(&entry.source_text);
            let translated_flags = TokenScanner::flag_tokens(&entry.translated_text);

            if source_flags != translated_flags {
                issues.push(LintIssue {
                    entry,
                    reason: format!(
                        "mismatching mentions of command-line options: >>{:?}<< (in msgid) versus >>{:?}<< (in msgstr)",
                        source_flags, translated_flags
                    ),
                });
            }
        }

        if self.config.format_tokens {
            let source_formats = TokenScanner::format_tokens(&entry.source_text);
            let translated_formats = TokenScanner::format_tokens(&entry.translated_text);

            if source_formats != translated_formats {
                issues.push(LintIssue {
                    entry,
                    reason: format!(
                        "mismatching printf instructions: >>{:?}<< (in msgid) versus >>{:?}<< (in msgstr)",
                        source_formats, translated_formats
                    ),
                });
            }
        }

        issues
    }

    /// Lint an entry sequence, preserving entry order in the issue order
    pub fn lint_entries<'a>(&self, entries: &'a [CatalogEntry]) -> Vec<LintIssue<'a>> {
        let issues: Vec<LintIssue<'a>> = entries
            .iter()
            .flat_map(|entry| self.lint_entry(entry))
            .collect();

        debug!(
            "Lint complete: {} entries, {} issues",
            entries.len(),
            issues.len()
        );

        issues
    }
}

impl Default for LintService {
    fn default() -> Self {
        Self::new()
    }
}
