//! Dump Sanitizer - credential dump sanitization for forensic workflows
//!
//! Main entry point for the command-line application.

use clap::Parser;
use std::error::Error;
use std::process;

use dump_sanitizer::cli::{Args, OutputKind};
use dump_sanitizer::engine::Engine;
use dump_sanitizer::progress::{
    create_spinner, print_banner, print_error, print_header, print_info, print_summary,
    print_warning,
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

    // Building the engine validates length bounds and compiles patterns
    let engine = Engine::new(args.engine_config())?;

    if !args.quiet && args.verbose {
        print_config(&args);
    }

    let out_dir = args.get_output_dir();
    if !out_dir.exists() {
        std::fs::create_dir_all(&out_dir)?;
    }

    if !args.quiet {
        print_header("Processing...");
    }

    // Spinner is pure decoration; quiet mode hides it without changing results
    let spinner = if args.quiet {
        indicatif::ProgressBar::hidden()
    } else {
        create_spinner("Sanitizing dump...")
    };

    let result = engine.run(args.mode.into(), &args.input, &out_dir);
    spinner.finish_and_clear();

    let outcome = result?;

    if args.quiet {
        // Machine-friendly single line
        println!(
            "{}\t{}\t{}",
            outcome.output_path.display(),
            outcome.report.unique,
            outcome.report.duplicates
        );
    } else if outcome.report.is_empty() {
        print_warning("No matching records were found in the source.");
        print_info(&format!("Empty output written to {:?}", outcome.output_path));
    } else {
        let source_bytes = std::fs::metadata(&args.input).map(|m| m.len()).unwrap_or(0);
        print_summary(&outcome, source_bytes, args.mode == OutputKind::Combo);
    }

    Ok(())
}

/// Validate command-line arguments
fn validate_args(args: &Args) -> anyhow::Result<()> {
    // Check that input exists and is a file
    if !args.input.exists() {
        anyhow::bail!("Input path does not exist: {:?}", args.input);
    }
    if !args.input.is_file() {
        anyhow::bail!("Input path is not a file: {:?}", args.input);
    }

    if args.min_length > args.max_length {
        anyhow::bail!(
            "Invalid length bounds: min ({}) must be <= max ({})",
            args.min_length,
            args.max_length
        );
    }

    if args.password_prefix.is_empty() {
        anyhow::bail!("The password prefix must not be empty");
    }
    if args.mode == OutputKind::Combo && args.account_prefix.is_empty() {
        anyhow::bail!("The account prefix must not be empty in combo mode");
    }

    Ok(())
}

/// Print configuration summary
fn print_config(args: &Args) {
    print_header("Configuration");

    print_info(&format!("Input:            {:?}", args.input));
    print_info(&format!("Output dir:       {:?}", args.get_output_dir()));
    print_info(&format!("Mode:             {:?}", args.mode));
    print_info(&format!("Password prefix:  {:?}", args.password_prefix));
    if args.mode == OutputKind::Combo {
        print_info(&format!("Account prefix:   {:?}", args.account_prefix));
    }
    print_info(&format!(
        "Length bounds:    {}..={}",
        args.min_length, args.max_length
    ));
    print_info(&format!("Max slot number:  {}", args.max_number));
}
