/*!
 * End-to-end catalog linting tests: configuration -> controller -> summary
 */

use anyhow::Result;
use polint::app_config::Config;
use polint::app_controller::Controller;
use crate::common;

#[test]
fn test_run_withCleanCatalog_shouldReportCleanSummary() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_catalog(&temp_dir.path().to_path_buf(), "clean.po")?;

    let controller = Controller::with_config(Config::default())?;
    let summary = controller.run(&[path])?;

    assert!(summary.is_clean());
    assert_eq!(summary.files_linted, 1);
    assert_eq!(summary.parse_failures, 0);
    assert_eq!(summary.issues_found, 0);
    Ok(())
}

#[test]
fn test_run_withMismatchedCatalog_shouldCountIssue() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_mismatched_catalog(&temp_dir.path().to_path_buf(), "bad.po")?;

    let controller = Controller::with_config(Config::default())?;
    let summary = controller.run(&[path])?;

    assert!(!summary.is_clean());
    assert_eq!(summary.files_linted, 1);
    assert_eq!(summary.issues_found, 1);
    Ok(())
}

/// One malformed file is counted and the rest of the run continues
#[test]
fn test_run_withMalformedFile_shouldNotAbortOtherFiles() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();

    let broken = common::create_test_file(&dir, "broken.po", "msgid \"dangling\n")?;
    let flagged = common::create_mismatched_catalog(&dir, "flagged.po")?;
    let clean = common::create_test_catalog(&dir, "clean.po")?;

    let controller = Controller::with_config(Config::default())?;
    let summary = controller.run(&[broken, flagged, clean])?;

    assert_eq!(summary.parse_failures, 1);
    assert_eq!(summary.files_linted, 2);
    assert_eq!(summary.issues_found, 1);
    Ok(())
}

/// A directory input lints every *.po beneath it
#[test]
fn test_run_withDirectoryInput_shouldScanRecursively() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let root = temp_dir.path().to_path_buf();
    let nested = root.join("de");
    std::fs::create_dir_all(&nested)?;

    common::create_test_catalog(&root, "top.po")?;
    common::create_mismatched_catalog(&nested, "deep.po")?;
    common::create_test_file(&root, "ignored.pot", "not a po file")?;

    let controller = Controller::with_config(Config::default())?;
    let summary = controller.run(&[root])?;

    assert_eq!(summary.files_linted, 2);
    assert_eq!(summary.issues_found, 1);
    Ok(())
}

/// Runs are isolated: a second run starts from zeroed counters
#[test]
fn test_run_calledTwice_shouldNotLeakCountsBetweenRuns() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_mismatched_catalog(&temp_dir.path().to_path_buf(), "bad.po")?;

    let controller = Controller::with_config(Config::default())?;
    let first = controller.run(&[path.clone()])?;
    let second = controller.run(&[path])?;

    assert_eq!(first, second);
    assert_eq!(second.issues_found, 1);
    Ok(())
}

#[test]
fn test_run_withFormatTokensEnabled_shouldFlagChangedDirective() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    let path = common::create_test_file(
        &dir,
        "printf.po",
        "msgid \"%s failed\"\nmsgstr \"%d fehlgeschlagen\"\n",
    )?;

    let mut config = Config::default();
    config.lint.format_tokens = true;
    let controller = Controller::with_config(config)?;
    let summary = controller.run(&[path.clone()])?;

    assert_eq!(summary.issues_found, 1);

    // The same file is clean when format-token linting stays disabled
    let controller = Controller::with_config(Config::default())?;
    let summary = controller.run(&[path])?;

    assert!(summary.is_clean());
    Ok(())
}

/// Entry dumping is a pure diagnostic and must not change the outcome
#[test]
fn test_run_withShowParsedEntries_shouldKeepSummaryIdentical() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_catalog(&temp_dir.path().to_path_buf(), "clean.po")?;

    let mut config = Config::default();
    config.show_parsed_entries = true;
    let controller = Controller::with_config(config)?;
    let summary = controller.run(&[path])?;

    assert!(summary.is_clean());
    assert_eq!(summary.files_linted, 1);
    Ok(())
}

#[test]
fn test_run_withMissingFile_shouldCountAsFailure() -> Result<()> {
    let controller = Controller::with_config(Config::default())?;
    let summary = controller.run(&[std::path::PathBuf::from("no/such/catalog.po")])?;

    assert_eq!(summary.parse_failures, 1);
    assert_eq!(summary.files_linted, 0);
    Ok(())
}
