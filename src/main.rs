//! Subgen - pattern-based subdomain candidate generation
//!
//! Main entry point for the command-line application.

use clap::Parser;
use std::process;

use subgen::cli::Args;
use subgen::fetch::{fetch_and_merge, FetchConfig, DEFAULT_TIMEOUT_SECS};
use subgen::generator::{Generator, GeneratorConfig};
use subgen::loader::load_or_empty;
use subgen::pattern::Pattern;
use subgen::progress::{
    format_number, print_banner, print_bullet, print_error, print_header, print_info,
    print_success, print_warning,
};

fn main() {
    // Parse command-line arguments
    let args = Args::parse();

    // Set up logging
    if args.verbose {
        std::env::set_var("RUST_LOG", "debug");
    } else if !args.quiet {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    // Run the application
    if let Err(e) = run(args) {
        print_error(&format!("{}", e));

        // Print chain of errors
        let mut source = e.source();
        while let Some(err) = source {
            print_error(&format!("  Caused by: {}", err));
            source = err.source();
        }

        process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    // Print banner unless quiet mode
    if !args.quiet {
        print_banner();
    }

    // Validate arguments
    validate_args(&args)?;
    let buffer_size = args.parse_buffer_size()?;

    // Download and merge remote wordlists unless skipped. A failed fetch
    // never stops the run; generation uses whatever is on disk.
    let merged = if args.skip_fetch {
        None
    } else {
        if !args.quiet {
            print_header("Fetching wordlists...");
        }
        let fetch_config = FetchConfig {
            urls: args.get_urls(),
            wordlist_dir: args.wordlist_dir.clone(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        };
        match fetch_and_merge(&fetch_config) {
            Ok(path) => Some(path),
            Err(e) => {
                print_warning(&format!("Wordlist fetch failed: {}", e));
                None
            }
        }
    };

    // Load input lists. Missing files degrade to empty dimensions.
    let base_domains = load_or_empty(&args.domains);
    let words = match &args.words {
        Some(path) => load_or_empty(path),
        None => merged.as_deref().map(load_or_empty).unwrap_or_default(),
    };
    let numbers = load_or_empty(&args.numbers);
    let regions = load_or_empty(&args.regions);

    if !args.quiet {
        print_header("Wordlists");
        print_info(&format!("Base domains: {}", format_number(base_domains.len() as u64)));
        print_info(&format!(
            "Words: {}, numbers: {}, regions: {}",
            format_number(words.len() as u64),
            format_number(numbers.len() as u64),
            format_number(regions.len() as u64)
        ));
    }

    let patterns: Vec<Pattern> = args.get_patterns().iter().map(|t| Pattern::parse(t)).collect();

    let config = GeneratorConfig {
        base_domains,
        patterns,
        words,
        numbers,
        regions,
        batch_size: args.batch_size,
        output_dir: args.output.clone(),
        buffer_size,
        quiet: args.quiet,
    };
    let generator = Generator::new(config);

    if args.dry_run {
        dry_run_report(&args, &generator);
        return Ok(());
    }

    if !args.quiet {
        print_header("Generating candidates...");
        print_info(&format!(
            "Combination space: {}",
            format_number(generator.estimated_combinations())
        ));
    }

    let written = generator.run();

    if !args.quiet {
        generator.stats().print_summary();
        print_success(&format!(
            "{} candidates written to {:?}",
            format_number(written),
            args.output
        ));
    }

    Ok(())
}

/// Validate command-line arguments
fn validate_args(args: &Args) -> anyhow::Result<()> {
    if args.batch_size == 0 {
        anyhow::bail!("--batch-size must be at least 1");
    }

    if args.get_patterns().iter().any(|p| p.trim().is_empty()) {
        anyhow::bail!("pattern templates cannot be empty");
    }

    args.parse_buffer_size()?;

    Ok(())
}

/// Dry run report
fn dry_run_report(args: &Args, generator: &Generator) {
    print_header("DRY RUN - No files will be written");

    print_bullet(&format!("Base domains file: {:?}", args.domains));
    print_bullet(&format!("Output directory:  {:?}", args.output));
    print_bullet(&format!("Batch size:        {}", format_number(args.batch_size as u64)));

    println!();
    for pattern in args.get_patterns() {
        print_bullet(&format!("Pattern: {}", pattern));
    }

    println!();
    print_info(&format!(
        "Estimated combinations: {}",
        format_number(generator.estimated_combinations())
    ));
}
