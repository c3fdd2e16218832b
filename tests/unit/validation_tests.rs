/*!
 * Tests for the lint service over parsed catalog entries
 */

use polint::catalog::Catalog;
use polint::validation::{LintConfig, LintService, TokenScanner};

/// Lint entries straight out of the parser, not hand-built ones
#[test]
fn test_lintEntries_onParsedCatalog_shouldFlagChangedOption() {
    let content = r#"msgid "please use the -0 option"
msgstr "bitte nutze die -O Option"
"#;
    let entries = Catalog::parse_str(content).unwrap();
    let service = LintService::new();

    let issues = service.lint_entries(&entries);

    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].entry.first_line, 1);
    assert!(issues[0]
        .reason
        .contains(r#">>["-0"]<< (in msgid) versus >>["-O"]<< (in msgstr)"#));
}

#[test]
fn test_lintEntries_onUntranslatedEntries_shouldStaySilent() {
    let content = r#"msgid "uses -x and %s"
msgstr ""
"#;
    let entries = Catalog::parse_str(content).unwrap();
    let service = LintService::with_config(LintConfig {
        flag_tokens: true,
        format_tokens: true,
    });

    let issues = service.lint_entries(&entries);

    assert!(issues.is_empty());
}

#[test]
fn test_lintEntries_withMultiLineStrings_shouldCompareJoinedText() {
    // The flag is split across continuation lines; the joined text carries it
    let content = r#"msgid "use -"
"-force here"
msgstr "nutze hier --force"
"#;
    let entries = Catalog::parse_str(content).unwrap();
    assert_eq!(entries[0].source_text, "use --force here");

    let issues = LintService::new().lint_entries(&entries);

    assert!(issues.is_empty());
}

#[test]
fn test_lintEntries_withDroppedDuplicateFlag_shouldReportMismatch() {
    // Sequences are compared with duplicates, not as sets
    let content = r#"msgid "-v -v for more detail"
msgstr "-v pour plus de détail"
"#;
    let entries = Catalog::parse_str(content).unwrap();

    let issues = LintService::new().lint_entries(&entries);

    assert_eq!(issues.len(), 1);
    assert!(issues[0].reason.contains(r#"["-v", "-v"]"#));
    assert!(issues[0].reason.contains(r#"["-v"]"#));
}

#[test]
fn test_tokenScanner_matchesLinterExpectations() {
    // The loose format heuristic also catches %quux; accepted cost
    assert_eq!(
        TokenScanner::format_tokens("-foo bar --baz and %quux the -4"),
        vec!["%quux"]
    );
    assert_eq!(
        TokenScanner::flag_tokens("-foo bar --baz and %quux the -4"),
        vec!["-foo", "--baz", "-4"]
    );
}

#[test]
fn test_lintEntries_withFormatTokensEnabled_shouldCheckBothClasses() {
    let content = r#"msgid "%s uses -a"
msgstr "%d nutzt -b"
"#;
    let entries = Catalog::parse_str(content).unwrap();
    let service = LintService::with_config(LintConfig {
        flag_tokens: true,
        format_tokens: true,
    });

    let issues = service.lint_entries(&entries);

    assert_eq!(issues.len(), 2);
    assert!(issues[0].reason.contains("command-line options"));
    assert!(issues[1].reason.contains("printf instructions"));
}

#[test]
fn test_lintConfig_fromPartialJson_shouldKeepDefaults() {
    let config: LintConfig = serde_json::from_str("{}").unwrap();
    assert!(config.flag_tokens);
    assert!(!config.format_tokens);

    let config: LintConfig = serde_json::from_str(r#"{"format_tokens": true}"#).unwrap();
    assert!(config.flag_tokens);
    assert!(config.format_tokens);
}
