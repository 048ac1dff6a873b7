//! # Subgen
//!
//! Pattern-based subdomain candidate generation for penetration testing.
//!
//! ## Features
//!
//! - **Pattern templates**: `{{word}}`, `{{number}}`, `{{region}}` and
//!   `{{domain}}` tokens substituted over the cartesian product of the
//!   referenced wordlists
//! - **Grammar validation**: every candidate checked against a strict
//!   domain-name grammar before it is kept
//! - **Bounded memory**: a deduplicating accumulator capped at the batch
//!   size; the combination space is enumerated lazily, never materialized
//! - **Batched output**: numbered `batch_N.txt` files sized for downstream
//!   DNS-resolution tooling
//! - **Wordlist fetch**: optional download-and-merge step for remote
//!   wordlist sources
//!
//! ## Usage
//!
//! ```bash
//! # Built-in patterns, wordlists from the conventional files
//! subgen -d filtered_domains.txt -w word.txt
//!
//! # One custom pattern and a smaller batch size
//! subgen -d domains.txt -w words.txt -p "{{word}}.{{domain}}" -b 10000
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use subgen::generator::{Generator, GeneratorConfig};
//! use subgen::pattern::Pattern;
//! use std::path::PathBuf;
//!
//! let config = GeneratorConfig {
//!     base_domains: vec!["cyble.com".to_string()],
//!     patterns: vec![Pattern::parse("{{word}}.{{domain}}")],
//!     words: vec!["api".to_string(), "dev".to_string()],
//!     numbers: vec![],
//!     regions: vec![],
//!     batch_size: 50_000,
//!     output_dir: PathBuf::from("batches"),
//!     buffer_size: 64 * 1024 * 1024,
//!     quiet: true,
//! };
//!
//! let generator = Generator::new(config);
//! let written = generator.run();
//! ```

pub mod cli;
pub mod dedup;
pub mod error;
pub mod fetch;
pub mod filter;
pub mod generator;
pub mod loader;
pub mod output;
pub mod pattern;
pub mod progress;

pub use cli::Args;
pub use error::{Error, Result};
pub use filter::DomainFilter;
pub use generator::{Generator, GeneratorConfig};
pub use pattern::Pattern;
