use anyhow::Result;
use log::{debug, error, info, warn};
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::catalog::Catalog;
use crate::file_utils::FileManager;
use crate::validation::{LintIssue, LintService};

// @module: Application controller for catalog linting

/// Outcome of linting one catalog file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// Parsed cleanly, no issues found
    Clean,
    /// Parsed cleanly, this many issues reported
    IssuesFound(usize),
    /// Malformed catalog or unreadable file
    Failed,
}

/// Aggregated counters for one run.
///
/// A fresh summary is built per run; nothing is carried over between runs
/// and one file's failure never contaminates another file's outcome.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Files that were parsed and linted
    pub files_linted: usize,

    /// Files rejected as malformed (or unreadable)
    pub parse_failures: usize,

    /// Total lint issues across all parsed files
    pub issues_found: usize,
}

impl RunSummary {
    /// Fold one file outcome into the counters
    fn record(&mut self, outcome: FileOutcome) {
        match outcome {
            FileOutcome::Clean => {
                self.files_linted += 1;
            }
            FileOutcome::IssuesFound(count) => {
                self.files_linted += 1;
                self.issues_found += count;
            }
            FileOutcome::Failed => {
                self.parse_failures += 1;
            }
        }
    }

    /// Whether the run finished with no failures and no findings
    pub fn is_clean(&self) -> bool {
        self.parse_failures == 0 && self.issues_found == 0
    }
}

/// Main application controller for catalog linting
pub struct Controller {
    // @field: App configuration
    config: Config,

    // @field: Lint service built from the configured token classes
    linter: LintService,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let linter = LintService::with_config(config.lint.clone());

        Ok(Self { config, linter })
    }

    /// Lint every input path.
    ///
    /// Directories are scanned recursively for `*.po` files. Each file is an
    /// independent pipeline run; a malformed file is logged and counted, and
    /// the remaining files are still processed.
    pub fn run(&self, input_paths: &[PathBuf]) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        for path in input_paths {
            if FileManager::dir_exists(path) {
                let files = FileManager::find_files(path, "po")?;
                if files.is_empty() {
                    warn!("No catalog files found under {:?}", path);
                }
                for file in &files {
                    summary.record(self.run_file(file));
                }
            } else {
                summary.record(self.run_file(path));
            }
        }

        info!(
            "Checked {} file(s): {} issue(s) found, {} malformed",
            summary.files_linted + summary.parse_failures,
            summary.issues_found,
            summary.parse_failures
        );

        Ok(summary)
    }

    /// Run the parse + lint pipeline on one file
    fn run_file(&self, path: &Path) -> FileOutcome {
        debug!("Linting catalog: {:?}", path);

        let catalog = match Catalog::from_file(path) {
            Ok(catalog) => catalog,
            Err(e) => {
                error!("{:#}", e);
                return FileOutcome::Failed;
            }
        };

        if self.config.show_parsed_entries {
            for entry in &catalog.entries {
                println!("line {}:", entry.first_line);
                println!("    {}", entry.source_text);
                println!("    {}", entry.translated_text);
            }
        }

        let issues = self.linter.lint_entries(&catalog.entries);
        for issue in &issues {
            Self::print_issue(&catalog.source_file, issue);
        }

        if issues.is_empty() {
            FileOutcome::Clean
        } else {
            FileOutcome::IssuesFound(issues.len())
        }
    }

    /// Print one issue as `<path>:<line>: <reason>` plus the offending texts
    fn print_issue(path: &Path, issue: &LintIssue) {
        println!(
            "{}:{}: {}",
            path.display(),
            issue.entry.first_line,
            issue.reason
        );
        println!("    msgid  = {}", issue.entry.source_text);
        println!("    msgstr = {}", issue.entry.translated_text);
    }
}
