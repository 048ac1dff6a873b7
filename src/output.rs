//! Batch output module
//!
//! Writes each flushed batch of candidates to its own numbered file,
//! one candidate per line, through a buffered writer.

use crate::error::{Error, Result};
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Default buffer size for batch file writing (64MB)
pub const DEFAULT_BUFFER_SIZE: usize = 64 * 1024 * 1024;

/// Writer for numbered batch files.
pub struct BatchWriter {
    output_dir: PathBuf,
    buffer_size: usize,
    batches_written: u64,
    lines_written: u64,
    bytes_written: u64,
}

impl BatchWriter {
    pub fn new(output_dir: PathBuf, buffer_size: usize) -> Self {
        Self {
            output_dir,
            buffer_size,
            batches_written: 0,
            lines_written: 0,
            bytes_written: 0,
        }
    }

    /// Path of the file a given batch number lands in.
    pub fn batch_path(&self, batch_number: u64) -> PathBuf {
        self.output_dir.join(format!("batch_{}.txt", batch_number))
    }

    /// Write one batch, one candidate per line, and return the count written.
    ///
    /// Each batch opens (and truncates) its own file, so a failed write
    /// loses at most that one batch.
    pub fn write_batch(&mut self, candidates: &[String], batch_number: u64) -> Result<usize> {
        let path = self.batch_path(batch_number);

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)
            .map_err(|source| Error::BatchWrite {
                path: path.clone(),
                source,
            })?;

        let mut writer = BufWriter::with_capacity(self.buffer_size, file);
        let mut bytes = 0u64;
        for candidate in candidates {
            writeln!(writer, "{}", candidate).map_err(|source| Error::BatchWrite {
                path: path.clone(),
                source,
            })?;
            bytes += candidate.len() as u64 + 1;
        }
        writer.flush().map_err(|source| Error::BatchWrite {
            path: path.clone(),
            source,
        })?;

        self.batches_written += 1;
        self.lines_written += candidates.len() as u64;
        self.bytes_written += bytes;

        Ok(candidates.len())
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn batches_written(&self) -> u64 {
        self.batches_written
    }

    pub fn lines_written(&self) -> u64 {
        self.lines_written
    }

    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }
}

/// Ensure the output directory exists.
pub fn ensure_output_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}
