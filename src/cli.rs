//! Command-line interface definition for subgen
//!
//! Provides argument parsing and validation for the subdomain generator.

use clap::Parser;
use std::path::PathBuf;

/// The built-in pattern templates used when no `--pattern` is given.
pub const DEFAULT_PATTERNS: &[&str] = &[
    "{{word}}.{{domain}}",
    "{{sub}}.{{word}}.{{domain}}",
    "{{word}}-{{sub}}.{{domain}}",
    "{{sub}}-{{word}}.{{domain}}",
    "{{word}}.{{sub}}.{{domain}}",
    "{{region}}.{{sub}}.{{domain}}",
    "{{word}}{{number}}.{{domain}}",
];

/// Default wordlist sources for the download step.
pub const DEFAULT_URLS: &[&str] =
    &["https://raw.githubusercontent.com/dwyl/english-words/refs/heads/master/words.txt"];

/// Pattern-based subdomain candidate generator for penetration testing
///
/// Combines base domains with pattern templates and wordlists, validates
/// the results, and writes deduplicated candidates in numbered batches
/// ready for DNS-resolution tooling.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "subgen",
    version,
    about = "Pattern-based subdomain candidate generator for penetration testing",
    long_about = r#"
╔══════════════════════════════════════════════════════════════════════════════╗
║                               SUBGEN                                         ║
║                  Pattern-Based Subdomain Generation                           ║
║                       For Penetration Testing                                 ║
╚══════════════════════════════════════════════════════════════════════════════╝

Generates candidate subdomains by substituting wordlists into pattern
templates for every base domain, validating each candidate against the
domain-name grammar, deduplicating, and writing numbered batch files
sized for downstream resolvers.

EXAMPLES:
    # Generate with the built-in patterns and wordlist files
    subgen -d filtered_domains.txt

    # Custom wordlists and batch size
    subgen -d domains.txt -w words.txt --numbers num.txt --regions reg.txt -b 10000

    # One custom pattern, skipping the download step
    subgen -d domains.txt -w words.txt -p "{{word}}.{{domain}}" --skip-fetch

    # Estimate the combination space without writing anything
    subgen -d domains.txt -w words.txt --dry-run

PATTERN TOKENS:
    {{word}}    - entry from the words list
    {{number}}  - entry from the numbers list
    {{region}}  - entry from the regions list
    {{domain}}  - the current base domain
"#
)]
pub struct Args {
    /// File of base domains to expand, one per line
    #[arg(short, long, required = true, value_name = "FILE")]
    pub domains: PathBuf,

    /// Words wordlist (default: the merged downloaded list)
    #[arg(short, long, value_name = "FILE")]
    pub words: Option<PathBuf>,

    /// Numbers wordlist
    #[arg(long, value_name = "FILE", default_value = "number.txt")]
    pub numbers: PathBuf,

    /// Regions wordlist
    #[arg(long, value_name = "FILE", default_value = "region.txt")]
    pub regions: PathBuf,

    /// Pattern template (repeatable; default: the built-in set)
    #[arg(short, long = "pattern", value_name = "TEMPLATE")]
    pub patterns: Vec<String>,

    /// Candidates per output batch
    #[arg(short, long, value_name = "N", default_value_t = 50_000)]
    pub batch_size: usize,

    /// Output directory for batch files
    #[arg(short, long, value_name = "DIR", default_value = "batches")]
    pub output: PathBuf,

    /// Wordlist download URL (repeatable)
    #[arg(long = "url", value_name = "URL")]
    pub urls: Vec<String>,

    /// Working folder for downloaded wordlists
    #[arg(long, value_name = "DIR", default_value = "wordlists")]
    pub wordlist_dir: PathBuf,

    /// Skip the wordlist download and merge step
    #[arg(long, default_value_t = false)]
    pub skip_fetch: bool,

    /// Buffer size for batch file writes
    #[arg(long, value_name = "SIZE", default_value = "64MB")]
    pub buffer_size: String,

    /// Dry run - report configuration and combination estimate, write nothing
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Verbose mode - detailed logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Args {
    /// Pattern templates to expand, falling back to the built-in set.
    pub fn get_patterns(&self) -> Vec<String> {
        if self.patterns.is_empty() {
            DEFAULT_PATTERNS.iter().map(|p| p.to_string()).collect()
        } else {
            self.patterns.clone()
        }
    }

    /// Download URLs, falling back to the built-in sources.
    pub fn get_urls(&self) -> Vec<String> {
        if self.urls.is_empty() {
            DEFAULT_URLS.iter().map(|u| u.to_string()).collect()
        } else {
            self.urls.clone()
        }
    }

    /// Parse buffer size string to bytes
    pub fn parse_buffer_size(&self) -> anyhow::Result<usize> {
        parse_size(&self.buffer_size)
    }
}

/// Parse human-readable size string to bytes
fn parse_size(size_str: &str) -> anyhow::Result<usize> {
    let size_str = size_str.trim().to_uppercase();

    let (num_str, multiplier) = if size_str.ends_with("GB") {
        (&size_str[..size_str.len() - 2], 1024 * 1024 * 1024)
    } else if size_str.ends_with("MB") {
        (&size_str[..size_str.len() - 2], 1024 * 1024)
    } else if size_str.ends_with("KB") {
        (&size_str[..size_str.len() - 2], 1024)
    } else if size_str.ends_with('B') {
        (&size_str[..size_str.len() - 1], 1)
    } else {
        (size_str.as_str(), 1)
    };

    let num: usize = num_str
        .trim()
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid size format: '{}'", size_str))?;

    Ok(num * multiplier)
}
