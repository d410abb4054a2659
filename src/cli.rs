//! Command-line interface definition for dump-sanitizer
//!
//! Provides argument parsing and validation for the credential dump
//! sanitization tool.

use crate::engine::{
    EngineConfig, Mode, DEFAULT_ACCOUNT_PREFIX, DEFAULT_MAX_LENGTH, DEFAULT_MAX_NUMBER,
    DEFAULT_MIN_LENGTH, DEFAULT_PASSWORD_PREFIX,
};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Credential dump sanitizer
///
/// Extract clean password lists or email:password combo lists from
/// key/value credential dumps.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "dump-sanitizer",
    author = "m0h1nd4",
    version,
    about = "Credential dump sanitizer - clean password and combo lists from key/value dumps",
    long_about = r#"
╔══════════════════════════════════════════════════════════════════════════════╗
║                           DUMP-SANITIZER v1.0.0                              ║
║                     Credential Dump Sanitization                             ║
╚══════════════════════════════════════════════════════════════════════════════╝

Extract candidate credentials from a semi-structured key/value dump (e.g. a
GrayKey keychain export) and write a deduplicated artifact: either a plain
password list or an email:password combo list built by correlating adjacent
account and password records.

Output lands in numbered slots (passwords_clean_00.txt, combolist_00.txt, ...)
so repeated runs never overwrite earlier results.

EXAMPLES:
    # Plain password list with default markers and bounds
    dump-sanitizer -i dump.txt -m passwords

    # email:password combo list
    dump-sanitizer -i dump.txt -m combo

    # Custom markers and tighter length bounds
    dump-sanitizer -i dump.txt -m passwords \
        --password-prefix "Secret:" --min-length 8 --max-length 32

    # Combo list with a custom account marker, output elsewhere
    dump-sanitizer -i dump.txt -m combo --account-prefix "Login:" -o ./out
"#,
    after_help = "For more information, visit: https://github.com/m0h1nd4/dump-sanitizer"
)]
pub struct Args {
    /// Source dump file path
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Extraction mode
    #[arg(short, long, value_enum, default_value_t = OutputKind::Passwords)]
    pub mode: OutputKind,

    /// Output directory (default: current directory)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Marker substring for password lines
    #[arg(long, value_name = "PREFIX", default_value = DEFAULT_PASSWORD_PREFIX)]
    pub password_prefix: String,

    /// Marker substring for account lines (combo mode)
    #[arg(long, value_name = "PREFIX", default_value = DEFAULT_ACCOUNT_PREFIX)]
    pub account_prefix: String,

    /// Minimum password length (inclusive, characters)
    #[arg(long, value_name = "LEN", default_value_t = DEFAULT_MIN_LENGTH)]
    pub min_length: usize,

    /// Maximum password length (inclusive, characters)
    #[arg(long, value_name = "LEN", default_value_t = DEFAULT_MAX_LENGTH)]
    pub max_length: usize,

    /// Highest numbered output slot to try
    #[arg(long, value_name = "NUM", default_value_t = DEFAULT_MAX_NUMBER)]
    pub max_number: u32,

    /// Quiet mode - minimal output
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Verbose mode - detailed logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Which artifact to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputKind {
    /// Plain deduplicated password list
    Passwords,
    /// Correlated email:password combo list
    Combo,
}

impl From<OutputKind> for Mode {
    fn from(kind: OutputKind) -> Self {
        match kind {
            OutputKind::Passwords => Mode::Passwords,
            OutputKind::Combo => Mode::Combo,
        }
    }
}

impl Args {
    /// Build the engine configuration from the parsed arguments.
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            password_prefix: self.password_prefix.clone(),
            account_prefix: self.account_prefix.clone(),
            min_length: self.min_length,
            max_length: self.max_length,
            max_number: self.max_number,
        }
    }

    /// Get output directory, defaulting to current directory
    pub fn get_output_dir(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}
