/*!
 * # polint - PO catalog translation linter
 *
 * A Rust library for detecting grave translation errors in gettext PO
 * catalogs, like translating "please use the -0 option" as "bitte nutze
 * die -O Option", a different command-line option that likely won't work.
 *
 * ## Features
 *
 * - Strict parser for the PO escaped-string grammar (multi-line
 *   continuation strings, comment and blank-line handling)
 * - Line-numbered, typed errors for malformed catalogs
 * - Comparison of command-line flag tokens between msgid and msgstr
 * - Optional comparison of printf-style format tokens
 * - Per-file isolation: one malformed catalog never aborts a whole run
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `catalog`: Escaped-string codec and catalog parsing
 * - `validation`: Token extraction and mismatch linting:
 *   - `validation::tokens`: Flag/format token scanning
 *   - `validation::service`: Entry-by-entry comparison
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod file_utils;
pub mod catalog;
pub mod validation;
pub mod app_controller;
pub mod errors;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{Controller, RunSummary};
pub use catalog::{Catalog, CatalogEntry};
pub use validation::{LintConfig, LintIssue, LintService};
pub use errors::{AppError, EscapeError, ParseError};
