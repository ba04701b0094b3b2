//! Variable-name extraction from a key-value file. For every line containing
//! `=`, the trimmed text before the first `=` is a variable name; all other
//! lines are skipped.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("file {} not found", .0.display())]
    Missing(PathBuf),
    #[error("unable to read {}: {}", .0.display(), .1)]
    Read(PathBuf, String),
}

/// Collects variable names from the file contents, in order of appearance.
pub fn extract_vars(contents: &str) -> Vec<String> {
    contents
        .lines()
        .filter_map(|line| line.split_once('=').map(|(name, _)| name.trim().to_string()))
        .collect()
}

/// Reads the whole file and extracts variable names from it.
pub fn extract_vars_from_file(path: &Path) -> Result<Vec<String>, ExtractError> {
    if !path.exists() {
        return Err(ExtractError::Missing(path.to_path_buf()));
    }
    let contents =
        fs::read_to_string(path).map_err(|e| ExtractError::Read(path.to_path_buf(), format!("{e}")))?;
    Ok(extract_vars(&contents))
}

#[cfg(test)]
mod tests {
    use super::{extract_vars, extract_vars_from_file, ExtractError};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn takes_text_before_the_first_equals_only() {
        let vars = extract_vars("A=1\nB=2\nNOVAR\nC=3=4\n");
        assert_eq!(vars, vec!["A", "B", "C"]);
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let vars = extract_vars("  SPACED = value\n\tTABBED\t=1\n");
        assert_eq!(vars, vec!["SPACED", "TABBED"]);
    }

    #[test]
    fn skips_blank_and_equals_free_lines() {
        let vars = extract_vars("\n\n# comment without delimiter\nONLY=1\n");
        assert_eq!(vars, vec!["ONLY"]);
    }

    #[test]
    fn reads_variables_from_a_file() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join(".env");
        fs::write(&path, "HOST=localhost\nPORT=8080\n").expect("write file");

        let vars = extract_vars_from_file(&path).expect("extraction should succeed");
        assert_eq!(vars, vec!["HOST", "PORT"]);
    }

    #[test]
    fn reports_missing_file() {
        let dir = TempDir::new().expect("temp dir");
        let err = extract_vars_from_file(&dir.path().join("absent.env")).unwrap_err();
        assert!(matches!(err, ExtractError::Missing(_)));
    }
}
