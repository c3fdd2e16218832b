/*!
 * Tests for file utility functionality
 */

use anyhow::Result;
use polint::file_utils::FileManager;
use crate::common;

#[test]
fn test_fileExists_withExistingFile_shouldReturnTrue() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(&temp_dir.path().to_path_buf(), "a.po", "x")?;

    assert!(FileManager::file_exists(&path));
    assert!(!FileManager::file_exists(temp_dir.path().join("missing.po")));
    Ok(())
}

#[test]
fn test_dirExists_shouldDistinguishFilesFromDirectories() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(&temp_dir.path().to_path_buf(), "a.po", "x")?;

    assert!(FileManager::dir_exists(temp_dir.path()));
    assert!(!FileManager::dir_exists(&path));
    Ok(())
}

/// Directory scanning is recursive and extension-filtered
#[test]
fn test_findFiles_shouldFindNestedCatalogsOnly() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let root = temp_dir.path().to_path_buf();
    let nested = root.join("locale").join("de");
    std::fs::create_dir_all(&nested)?;

    common::create_test_file(&root, "top.po", "x")?;
    common::create_test_file(&nested, "deep.po", "x")?;
    common::create_test_file(&root, "notes.txt", "x")?;

    let found = FileManager::find_files(&root, "po")?;

    assert_eq!(found.len(), 2);
    assert!(found.iter().any(|p| p.ends_with("top.po")));
    assert!(found.iter().any(|p| p.ends_with("deep.po")));
    Ok(())
}

#[test]
fn test_findFiles_withDotPrefixedExtension_shouldNormalize() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let root = temp_dir.path().to_path_buf();
    common::create_test_file(&root, "a.po", "x")?;

    let found = FileManager::find_files(&root, ".po")?;

    assert_eq!(found.len(), 1);
    Ok(())
}

#[test]
fn test_readToString_withMissingFile_shouldError() {
    let result = FileManager::read_to_string("no/such/file.po");

    assert!(result.is_err());
}

#[test]
fn test_writeToFile_thenRead_shouldRoundTrip() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("out").join("fresh.po");

    FileManager::write_to_file(&path, "msgid \"a\"\nmsgstr \"b\"\n")?;
    let content = FileManager::read_to_string(&path)?;

    assert!(content.starts_with("msgid"));
    Ok(())
}
