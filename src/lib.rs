//! # Dump Sanitizer
//!
//! Credential dump sanitization tool for forensic workflows.
//!
//! Extracts candidate credentials from semi-structured key/value dumps
//! (e.g. GrayKey keychain exports) and emits deduplicated artifacts.
//!
//! ## Features
//!
//! - **Password lists**: extract values after a marker prefix, filtered by
//!   length bounds and JSON-shape rejection
//! - **Combo lists**: correlate adjacent account and password records into
//!   `email:password` pairs
//! - **Deduplication**: order-preserving, first occurrence wins
//! - **Numbered output slots**: `passwords_clean_00.txt` ... `_99.txt`,
//!   never overwriting earlier runs
//! - **Encoding detection**: UTF-16/legacy dumps transcoded automatically
//!
//! ## Usage
//!
//! ```bash
//! # Plain password list
//! dump-sanitizer -i dump.txt -m passwords
//!
//! # email:password combo list
//! dump-sanitizer -i dump.txt -m combo
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use dump_sanitizer::engine::{Engine, EngineConfig, Mode};
//! use std::path::Path;
//!
//! let engine = Engine::new(EngineConfig::default()).unwrap();
//! let outcome = engine
//!     .run(Mode::Passwords, Path::new("dump.txt"), Path::new("."))
//!     .unwrap();
//! println!("{} unique records", outcome.report.unique);
//! ```

pub mod classify;
pub mod cli;
pub mod correlate;
pub mod dedup;
pub mod engine;
pub mod error;
pub mod output;
pub mod progress;
pub mod source;
pub mod validate;

pub use cli::Args;
pub use engine::{Engine, EngineConfig, ExtractReport, Mode, Outcome};
pub use error::ExtractError;
