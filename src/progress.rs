//! Progress display module
//!
//! Styled terminal output: banner, message helpers, the processing spinner,
//! and the final run summary. Everything here is cosmetic. The engine never
//! touches this module, and hiding the spinner (quiet mode) cannot change
//! any extraction result.

use crate::engine::Outcome;
use bytesize::ByteSize;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Print the application banner
pub fn print_banner() {
    let banner = r#"
╔══════════════════════════════════════════════════════════════════╗
║                                                                  ║
║   ██████╗ ██╗   ██╗███╗   ███╗██████╗                            ║
║   ██╔══██╗██║   ██║████╗ ████║██╔══██╗                           ║
║   ██║  ██║██║   ██║██╔████╔██║██████╔╝                           ║
║   ██║  ██║██║   ██║██║╚██╔╝██║██╔═══╝                            ║
║   ██████╔╝╚██████╔╝██║ ╚═╝ ██║██║                                ║
║   ╚═════╝  ╚═════╝ ╚═╝     ╚═╝╚═╝                                ║
║                                                                  ║
║   ███████╗ █████╗ ███╗   ██╗██╗████████╗██╗███████╗███████╗██████╗ ║
║   ██╔════╝██╔══██╗████╗  ██║██║╚══██╔══╝██║╚══███╔╝██╔════╝██╔══██╗║
║   ███████╗███████║██╔██╗ ██║██║   ██║   ██║  ███╔╝ █████╗  ██████╔╝║
║   ╚════██║██╔══██║██║╚██╗██║██║   ██║   ██║ ███╔╝  ██╔══╝  ██╔══██╗║
║   ███████║██║  ██║██║ ╚████║██║   ██║   ██║███████╗███████╗██║  ██║║
║   ╚══════╝╚═╝  ╚═╝╚═╝  ╚═══╝╚═╝   ╚═╝   ╚═╝╚══════╝╚══════╝╚═╝  ╚═╝║
║                                                                  ║
║              Credential Dump Sanitization                        ║
║                                               v1.0.0             ║
╚══════════════════════════════════════════════════════════════════╝
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

/// Create the processing spinner.
///
/// indicatif's steady tick runs on its own thread and is stopped by
/// `finish_and_clear`; it shares no state with the extraction pipeline.
pub fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();

    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap()
            .tick_chars("|/-\\ "),
    );

    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));

    pb
}

/// Print the final run summary.
pub fn print_summary(outcome: &Outcome, source_bytes: u64, combo_mode: bool) {
    let record_kind = if combo_mode {
        "email:password pairs"
    } else {
        "passwords"
    };

    println!();
    println!("{}", "═".repeat(60).green());
    println!("{}", "                 SANITIZATION COMPLETE".green().bold());
    println!("{}", "═".repeat(60).green());
    println!();

    println!(
        "  {} {:?}",
        "Saved to:       ".green(),
        outcome.output_path
    );
    println!(
        "  {} {}",
        "Source read:    ".green(),
        ByteSize(source_bytes)
    );
    println!(
        "  {} {} unique {}",
        "Records:        ".green().bold(),
        format_number(outcome.report.unique).green().bold(),
        record_kind
    );
    println!(
        "  {} {}",
        "Duplicates:     ".yellow(),
        format_number(outcome.report.duplicates)
    );
    println!(
        "  {} {:.2}s",
        "Duration:       ".green(),
        outcome.elapsed.as_secs_f64()
    );
    println!();
    println!("{}", "═".repeat(60).green());
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
