//! Error taxonomy for the recoverable boundaries.
//!
//! None of these abort a run: missing wordlists degrade to empty lists,
//! failed downloads are skipped, and a failed batch write drops that batch
//! and lets the run continue. The CLI boundary uses `anyhow` for the fatal
//! setup path.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A wordlist or base-domain file is missing or cannot be opened.
    #[error("wordlist not found: {path:?}")]
    NotFound { path: PathBuf },

    /// A wordlist download failed. Fetch-collaborator only.
    #[error("download failed for {url}: {message}")]
    Network { url: String, message: String },

    /// A batch file could not be written. That batch's data is dropped.
    #[error("failed to write batch file {path:?}")]
    BatchWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound { path: path.into() }
    }

    pub fn network(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Network {
            url: url.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = Error::not_found("word.txt");
        assert!(err.to_string().contains("word.txt"));
    }

    #[test]
    fn test_network_display() {
        let err = Error::network("https://example.com/w.txt", "timed out");
        let msg = err.to_string();
        assert!(msg.contains("https://example.com/w.txt"));
        assert!(msg.contains("timed out"));
    }
}
