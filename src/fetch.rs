//! Wordlist download and merge
//!
//! External collaborator for the generation core: pulls remote wordlists
//! into a working folder and concatenates the downloaded files into one
//! merged list. The whole step is skipped when the merged file already
//! exists, so the core never depends on network availability once the
//! wordlists are on disk. Individual download failures are logged and
//! skipped; generation proceeds with whatever is present.

use crate::error::{Error, Result};
use bytesize::ByteSize;
use log::{error, info};
use reqwest::blocking::Client;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use walkdir::WalkDir;

/// Per-request timeout for wordlist downloads.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Name of the merged wordlist file inside the working folder.
pub const MERGED_FILE_NAME: &str = "MergedList.txt";

/// Fetch step configuration.
pub struct FetchConfig {
    pub urls: Vec<String>,
    pub wordlist_dir: PathBuf,
    pub timeout_secs: u64,
}

impl FetchConfig {
    pub fn merged_path(&self) -> PathBuf {
        self.wordlist_dir.join(MERGED_FILE_NAME)
    }
}

/// Download the configured URLs and merge the results.
///
/// Returns the path of the merged wordlist file. Skipped entirely when the
/// merged file already exists.
pub fn fetch_and_merge(config: &FetchConfig) -> Result<PathBuf> {
    let merged = config.merged_path();

    if merged.exists() {
        info!("merged wordlist already exists, skipping download: {:?}", merged);
        return Ok(merged);
    }

    fs::create_dir_all(&config.wordlist_dir)?;

    let client = Client::new();
    let timeout = Duration::from_secs(config.timeout_secs);

    for url in &config.urls {
        match download(&client, url, &config.wordlist_dir, timeout) {
            Ok((path, bytes)) => {
                info!("downloaded {} ({}) -> {:?}", url, ByteSize(bytes), path);
            }
            Err(err) => error!("{}", err),
        }
    }

    let merged_count = merge_downloads(&config.wordlist_dir, MERGED_FILE_NAME)?;
    info!("merged {} wordlist files into {:?}", merged_count, merged);

    Ok(merged)
}

/// Download one URL into the working folder, named after its last path
/// segment.
fn download(client: &Client, url: &str, dir: &Path, timeout: Duration) -> Result<(PathBuf, u64)> {
    let file_name = url
        .rsplit('/')
        .next()
        .filter(|name| !name.is_empty())
        .unwrap_or("download.txt");
    let path = dir.join(file_name);

    let response = client
        .get(url)
        .timeout(timeout)
        .send()
        .and_then(|r| r.error_for_status())
        .map_err(|e| Error::network(url, e.to_string()))?;
    let body = response
        .bytes()
        .map_err(|e| Error::network(url, e.to_string()))?;

    fs::write(&path, &body)?;
    Ok((path, body.len() as u64))
}

/// Concatenate the `.txt` files in the working folder (the merged file
/// itself excluded) into one merged file. Returns the number of files
/// merged.
fn merge_downloads(dir: &Path, merged_name: &str) -> Result<usize> {
    let merged_path = dir.join(merged_name);
    let mut merged = File::create(&merged_path)?;
    let mut count = 0;

    for entry in WalkDir::new(dir).max_depth(1).into_iter().filter_map(|e| e.ok()) {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) != Some("txt") {
            continue;
        }
        if path.file_name().and_then(|n| n.to_str()) == Some(merged_name) {
            continue;
        }

        let mut file = File::open(path)?;
        std::io::copy(&mut file, &mut merged)?;
        // Separator in case a source file lacks a trailing newline.
        merged.write_all(b"\n")?;
        count += 1;
    }

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_file(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn test_merge_concatenates_txt_files() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "a.txt", "alpha\n");
        write_file(dir.path(), "b.txt", "beta\n");
        write_file(dir.path(), "notes.md", "ignored\n");

        let count = merge_downloads(dir.path(), MERGED_FILE_NAME).unwrap();
        assert_eq!(count, 2);

        let merged = fs::read_to_string(dir.path().join(MERGED_FILE_NAME)).unwrap();
        assert!(merged.contains("alpha"));
        assert!(merged.contains("beta"));
        assert!(!merged.contains("ignored"));
    }

    #[test]
    fn test_merge_excludes_merged_file_itself() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), MERGED_FILE_NAME, "stale\n");
        write_file(dir.path(), "a.txt", "alpha\n");

        let count = merge_downloads(dir.path(), MERGED_FILE_NAME).unwrap();
        assert_eq!(count, 1);

        let merged = fs::read_to_string(dir.path().join(MERGED_FILE_NAME)).unwrap();
        assert!(!merged.contains("stale"));
        assert!(merged.contains("alpha"));
    }

    #[test]
    fn test_fetch_skipped_when_merged_exists() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), MERGED_FILE_NAME, "existing\n");

        let config = FetchConfig {
            // Never contacted: the merged file check comes first.
            urls: vec!["http://192.0.2.1/words.txt".to_string()],
            wordlist_dir: dir.path().to_path_buf(),
            timeout_secs: 1,
        };

        let merged = fetch_and_merge(&config).unwrap();
        assert_eq!(fs::read_to_string(merged).unwrap(), "existing\n");
    }

    #[test]
    fn test_fetch_with_no_urls_creates_empty_merged() {
        let dir = TempDir::new().unwrap();
        let config = FetchConfig {
            urls: Vec::new(),
            wordlist_dir: dir.path().join("wordlists"),
            timeout_secs: 1,
        };

        let merged = fetch_and_merge(&config).unwrap();
        assert!(merged.exists());
        assert!(fs::read_to_string(merged).unwrap().is_empty());
    }
}
