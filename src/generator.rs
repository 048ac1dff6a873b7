//! Core generation engine
//!
//! Orchestrates pattern expansion across all (base domain × pattern) pairs,
//! funnels candidates through the grammar filter and the bounded dedup set,
//! and flushes numbered batches as the set fills.

use crate::dedup::DedupSet;
use crate::filter::DomainFilter;
use crate::output::{ensure_output_dir, BatchWriter};
use crate::pattern::Pattern;
use crate::progress::{create_progress_bar, GenerationStats};

use indicatif::ProgressBar;
use log::{error, info};
use std::path::PathBuf;
use std::sync::Arc;

/// Engine configuration, fixed for the duration of a run.
pub struct GeneratorConfig {
    pub base_domains: Vec<String>,
    pub patterns: Vec<Pattern>,
    pub words: Vec<String>,
    pub numbers: Vec<String>,
    pub regions: Vec<String>,
    pub batch_size: usize,
    pub output_dir: PathBuf,
    pub buffer_size: usize,
    pub quiet: bool,
}

/// The generation engine. Single-threaded; one pass over the product space.
pub struct Generator {
    config: GeneratorConfig,
    filter: DomainFilter,
    stats: Arc<GenerationStats>,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            filter: DomainFilter::new(),
            stats: Arc::new(GenerationStats::new()),
        }
    }

    /// Pre-run estimate of the raw combination count, for progress display
    /// and dry runs. Saturates rather than overflowing.
    pub fn estimated_combinations(&self) -> u64 {
        let per_base: u64 = self
            .config
            .patterns
            .iter()
            .map(|p| {
                p.combination_count(
                    self.config.words.len(),
                    self.config.numbers.len(),
                    self.config.regions.len(),
                ) as u64
            })
            .fold(0u64, u64::saturating_add);

        per_base.saturating_mul(self.config.base_domains.len() as u64)
    }

    /// Run the full generation pass. Returns the total candidates written.
    ///
    /// Batch numbers start at 1 and increase by one per flush. A failed
    /// batch write is logged and its candidates dropped; the run continues.
    /// Any non-empty remainder is flushed once at the end. Nothing here
    /// terminates the run: even an unwritable output directory only means
    /// every flush fails and the run finishes with a written count of zero.
    pub fn run(&self) -> u64 {
        if let Err(err) = ensure_output_dir(&self.config.output_dir) {
            error!("cannot create output directory: {} - batch writes will fail", err);
        }

        let mut dedup = DedupSet::new(self.config.batch_size);
        let mut writer = BatchWriter::new(self.config.output_dir.clone(), self.config.buffer_size);
        let mut batch_number: u64 = 0;

        let pb = if self.config.quiet {
            ProgressBar::hidden()
        } else {
            create_progress_bar(self.estimated_combinations(), "Generating...")
        };

        for base_domain in &self.config.base_domains {
            info!("generating candidates for base domain: {}", base_domain);
            self.stats.add_base_domain();

            for pattern in &self.config.patterns {
                let expansion = pattern.expand(
                    base_domain,
                    &self.config.words,
                    &self.config.numbers,
                    &self.config.regions,
                );

                for candidate in expansion {
                    pb.inc(1);
                    self.stats.add_candidate();

                    if !self.filter.is_valid(&candidate) {
                        self.stats.add_rejected();
                        continue;
                    }
                    self.stats.add_valid();

                    if !dedup.insert(candidate) {
                        self.stats.add_duplicate();
                    }

                    if dedup.is_full() {
                        batch_number += 1;
                        self.flush(&mut dedup, &mut writer, batch_number);
                    }
                }
            }
        }

        // Final flush for the remainder.
        if !dedup.is_empty() {
            batch_number += 1;
            self.flush(&mut dedup, &mut writer, batch_number);
        }

        pb.finish_and_clear();

        writer.lines_written()
    }

    /// Drain the set into one numbered batch file.
    ///
    /// The set is cleared whether or not the write succeeds; a failed write
    /// loses exactly that batch's candidates.
    fn flush(&self, dedup: &mut DedupSet, writer: &mut BatchWriter, batch_number: u64) {
        let batch = dedup.drain();

        match writer.write_batch(&batch, batch_number) {
            Ok(count) => {
                let bytes: u64 = batch.iter().map(|c| c.len() as u64 + 1).sum();
                self.stats.add_batch(count as u64, bytes);
                info!("saved batch {} with {} candidates", batch_number, count);
            }
            Err(err) => {
                self.stats.add_failed_batch();
                error!("{} - dropping {} candidates", err, batch.len());
            }
        }
    }

    pub fn stats(&self) -> Arc<GenerationStats> {
        Arc::clone(&self.stats)
    }
}
