//! Wordlist loading module
//!
//! Reads line-oriented wordlist files into memory once at startup. Lines
//! are trimmed and blank lines dropped; source order is preserved. A
//! missing file is not fatal: the run continues with that dimension empty.

use crate::error::{Error, Result};
use log::warn;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Load a wordlist file, preserving line order.
///
/// Returns `Error::NotFound` if the file is missing or cannot be opened.
/// Content is treated as UTF-8 text; invalid sequences are replaced rather
/// than rejected.
pub fn load_wordlist(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|_| Error::not_found(path))?;
    let reader = BufReader::new(file);

    let mut entries = Vec::new();
    for line in reader.split(b'\n') {
        let line = line?;
        let text = String::from_utf8_lossy(&line);
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            entries.push(trimmed.to_string());
        }
    }

    Ok(entries)
}

/// Load a wordlist, degrading a missing file to an empty list.
///
/// The `NotFound` condition is logged so the operator can tell an absent
/// dimension from an empty one.
pub fn load_or_empty(path: &Path) -> Vec<String> {
    match load_wordlist(path) {
        Ok(entries) => entries,
        Err(err) => {
            warn!("{} - continuing with empty list", err);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_preserves_order() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "words.txt", "zeta\nalpha\nmid\n");

        let entries = load_wordlist(&path).unwrap();
        assert_eq!(entries, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_load_trims_and_skips_blank_lines() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "words.txt", "  api \n\n   \n\tdev\t\n");

        let entries = load_wordlist(&path).unwrap();
        assert_eq!(entries, vec!["api", "dev"]);
    }

    #[test]
    fn test_load_handles_crlf() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "words.txt", "api\r\ndev\r\n");

        let entries = load_wordlist(&path).unwrap();
        assert_eq!(entries, vec!["api", "dev"]);
    }

    #[test]
    fn test_load_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.txt");

        let err = load_wordlist(&path).unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
    }

    #[test]
    fn test_load_or_empty_degrades() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.txt");

        assert!(load_or_empty(&path).is_empty());
    }

    #[test]
    fn test_load_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "empty.txt", "");

        assert!(load_wordlist(&path).unwrap().is_empty());
    }
}
