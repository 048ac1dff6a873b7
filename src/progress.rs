//! Progress display module
//!
//! Provides styled progress bars and statistics display for the pentesting aesthetic.

use bytesize::ByteSize;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Print the application banner
pub fn print_banner() {
    let banner = r#"
╔══════════════════════════════════════════════════════════════════════════════╗
║                                                                              ║
║   ███████╗██╗   ██╗██████╗  ██████╗ ███████╗███╗   ██╗                      ║
║   ██╔════╝██║   ██║██╔══██╗██╔════╝ ██╔════╝████╗  ██║                      ║
║   ███████╗██║   ██║██████╔╝██║  ███╗█████╗  ██╔██╗ ██║                      ║
║   ╚════██║██║   ██║██╔══██╗██║   ██║██╔══╝  ██║╚██╗██║                      ║
║   ███████║╚██████╔╝██████╔╝╚██████╔╝███████╗██║ ╚████║                      ║
║   ╚══════╝ ╚═════╝ ╚═════╝  ╚═════╝ ╚══════╝╚═╝  ╚═══╝                      ║
║                                                                              ║
║                    Pattern-Based Subdomain Generation                         ║
║                         For Penetration Testing                               ║
╚══════════════════════════════════════════════════════════════════════════════╝
"#;

    println!("{}", banner.green());
}

/// Print a section header
pub fn print_header(text: &str) {
    println!("\n{} {}", "▶".green(), text.green().bold());
}

/// Print an info message
pub fn print_info(text: &str) {
    println!("  {} {}", "ℹ".cyan(), text);
}

/// Print a success message
pub fn print_success(text: &str) {
    println!("  {} {}", "✔".green(), text.green());
}

/// Print a warning message
pub fn print_warning(text: &str) {
    println!("  {} {}", "⚠".yellow(), text.yellow());
}

/// Print an error message
pub fn print_error(text: &str) {
    eprintln!("  {} {}", "✖".red(), text.red());
}

/// Print a bullet point
pub fn print_bullet(text: &str) {
    println!("  {} {}", "•".green(), text);
}

/// Create a styled progress bar over a known combination count
pub fn create_progress_bar(total: u64, msg: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);

    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.green/dim}] {pos}/{len} ({percent}%) {msg}")
            .unwrap()
            .progress_chars("█▓░")
    );

    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));

    pb
}

/// Create a styled spinner for indeterminate progress
pub fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();

    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ "),
    );

    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));

    pb
}

/// Generation run statistics
#[derive(Debug)]
pub struct GenerationStats {
    pub base_domains: AtomicU64,
    pub candidates_generated: AtomicU64,
    pub valid_candidates: AtomicU64,
    pub rejected_candidates: AtomicU64,
    pub duplicate_candidates: AtomicU64,
    pub batches_written: AtomicU64,
    pub batches_failed: AtomicU64,
    pub lines_written: AtomicU64,
    pub bytes_written: AtomicU64,
    pub start_time: Instant,
}

impl GenerationStats {
    pub fn new() -> Self {
        Self {
            base_domains: AtomicU64::new(0),
            candidates_generated: AtomicU64::new(0),
            valid_candidates: AtomicU64::new(0),
            rejected_candidates: AtomicU64::new(0),
            duplicate_candidates: AtomicU64::new(0),
            batches_written: AtomicU64::new(0),
            batches_failed: AtomicU64::new(0),
            lines_written: AtomicU64::new(0),
            bytes_written: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    pub fn add_base_domain(&self) {
        self.base_domains.fetch_add(1, Ordering::Relaxed);
    }

    pub fn add_candidate(&self) {
        self.candidates_generated.fetch_add(1, Ordering::Relaxed);
    }

    pub fn add_valid(&self) {
        self.valid_candidates.fetch_add(1, Ordering::Relaxed);
    }

    pub fn add_rejected(&self) {
        self.rejected_candidates.fetch_add(1, Ordering::Relaxed);
    }

    pub fn add_duplicate(&self) {
        self.duplicate_candidates.fetch_add(1, Ordering::Relaxed);
    }

    pub fn add_batch(&self, lines: u64, bytes: u64) {
        self.batches_written.fetch_add(1, Ordering::Relaxed);
        self.lines_written.fetch_add(lines, Ordering::Relaxed);
        self.bytes_written.fetch_add(bytes, Ordering::Relaxed);
    }

    pub fn add_failed_batch(&self) {
        self.batches_failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn get_candidates_generated(&self) -> u64 {
        self.candidates_generated.load(Ordering::Relaxed)
    }

    pub fn get_valid(&self) -> u64 {
        self.valid_candidates.load(Ordering::Relaxed)
    }

    pub fn get_rejected(&self) -> u64 {
        self.rejected_candidates.load(Ordering::Relaxed)
    }

    pub fn get_duplicates(&self) -> u64 {
        self.duplicate_candidates.load(Ordering::Relaxed)
    }

    pub fn get_batches_written(&self) -> u64 {
        self.batches_written.load(Ordering::Relaxed)
    }

    pub fn get_batches_failed(&self) -> u64 {
        self.batches_failed.load(Ordering::Relaxed)
    }

    pub fn get_lines_written(&self) -> u64 {
        self.lines_written.load(Ordering::Relaxed)
    }

    pub fn get_bytes_written(&self) -> u64 {
        self.bytes_written.load(Ordering::Relaxed)
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn candidates_per_second(&self) -> f64 {
        let elapsed = self.elapsed().as_secs_f64();
        if elapsed > 0.0 {
            self.get_candidates_generated() as f64 / elapsed
        } else {
            0.0
        }
    }

    /// Print final statistics
    pub fn print_summary(&self) {
        let elapsed = self.elapsed();
        let generated = self.get_candidates_generated();
        let valid = self.get_valid();
        let rejected = self.get_rejected();
        let duplicates = self.get_duplicates();
        let failed = self.get_batches_failed();

        println!();
        println!("{}", "═".repeat(60).green());
        println!("{}", "                    GENERATION COMPLETE".green().bold());
        println!("{}", "═".repeat(60).green());
        println!();

        println!(
            "  {} {}",
            "Base domains:   ".green(),
            format_number(self.base_domains.load(Ordering::Relaxed))
        );
        println!(
            "  {} {}",
            "Generated:      ".green(),
            format_number(generated)
        );
        println!("  {} {}", "Valid:          ".green(), format_number(valid));
        println!(
            "  {} {}",
            "Rejected:       ".yellow(),
            format_number(rejected)
        );
        println!(
            "  {} {}",
            "Duplicates:     ".yellow(),
            format_number(duplicates)
        );
        println!();

        println!(
            "  {} {}",
            "Batches written:".green(),
            format_number(self.get_batches_written())
        );
        if failed > 0 {
            println!(
                "  {} {}",
                "Batches failed: ".red(),
                format_number(failed).red()
            );
        }
        println!(
            "  {} {}",
            "Candidates out: ".green().bold(),
            format_number(self.get_lines_written()).green().bold()
        );
        println!(
            "  {} {}",
            "Data written:   ".green(),
            ByteSize(self.get_bytes_written())
        );

        println!();
        println!(
            "  {} {}",
            "Duration:       ".green(),
            format_duration(elapsed)
        );
        println!(
            "  {} {:.2} candidates/sec",
            "Throughput:     ".green(),
            self.candidates_per_second()
        );
        println!();
        println!("{}", "═".repeat(60).green());
    }
}

impl Default for GenerationStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a number with thousand separators
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    result
}

/// Format duration as human-readable string
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();

    if secs < 60 {
        format!("{:.1}s", duration.as_secs_f64())
    } else if secs < 3600 {
        let mins = secs / 60;
        let secs = secs % 60;
        format!("{}m {}s", mins, secs)
    } else {
        let hours = secs / 3600;
        let mins = (secs % 3600) / 60;
        format!("{}h {}m", hours, mins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(123), "123");
        assert_eq!(format_number(1234), "1,234");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_secs(30)), "30.0s");
        assert_eq!(format_duration(Duration::from_secs(90)), "1m 30s");
        assert_eq!(format_duration(Duration::from_secs(3661)), "1h 1m");
    }

    #[test]
    fn test_stats() {
        let stats = GenerationStats::new();

        stats.add_candidate();
        stats.add_candidate();
        stats.add_valid();
        stats.add_rejected();
        stats.add_batch(10, 150);

        assert_eq!(stats.get_candidates_generated(), 2);
        assert_eq!(stats.get_valid(), 1);
        assert_eq!(stats.get_rejected(), 1);
        assert_eq!(stats.get_batches_written(), 1);
        assert_eq!(stats.get_lines_written(), 10);
        assert_eq!(stats.get_bytes_written(), 150);
    }
}
