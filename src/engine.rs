//! Extraction engine
//!
//! Orchestrates the full read-classify-validate-dedup-write pipeline for the
//! two output modes: plain password lists and email:password combo lists.
//!
//! Both modes read the entire source into memory before any output file is
//! created or truncated: a failed read never leaves an empty output behind.

use crate::classify::{Classified, Classifier};
use crate::correlate::Correlator;
use crate::dedup::DedupSink;
use crate::error::ExtractError;
use crate::output::{allocate_output_name, OutputWriter};
use crate::source::read_source_lines;
use crate::validate::{EmailValidator, ValueFilter};

use log::{debug, info};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Default marker for password lines in GrayKey-style dumps.
pub const DEFAULT_PASSWORD_PREFIX: &str = "Item value:";
/// Default marker for account lines.
pub const DEFAULT_ACCOUNT_PREFIX: &str = "Account:";
pub const DEFAULT_MIN_LENGTH: usize = 4;
pub const DEFAULT_MAX_LENGTH: usize = 64;
/// Highest numbered output slot (`_00` through `_99`).
pub const DEFAULT_MAX_NUMBER: u32 = 99;

const PASSWORD_LIST_BASE: &str = "passwords_clean";
const COMBO_LIST_BASE: &str = "combolist";

/// Extraction mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Plain deduplicated password list.
    Passwords,
    /// Correlated email:password combo list.
    Combo,
}

impl Mode {
    /// Base prefix for numbered output filenames in this mode.
    pub fn base_prefix(&self) -> &'static str {
        match self {
            Self::Passwords => PASSWORD_LIST_BASE,
            Self::Combo => COMBO_LIST_BASE,
        }
    }
}

/// Engine configuration
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub password_prefix: String,
    pub account_prefix: String,
    pub min_length: usize,
    pub max_length: usize,
    pub max_number: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            password_prefix: DEFAULT_PASSWORD_PREFIX.to_string(),
            account_prefix: DEFAULT_ACCOUNT_PREFIX.to_string(),
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
            max_number: DEFAULT_MAX_NUMBER,
        }
    }
}

/// Counts for one extraction run.
///
/// `unique + duplicates` equals the number of lines that passed both
/// classification and validation, never the total line count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExtractReport {
    pub unique: u64,
    pub duplicates: u64,
}

impl ExtractReport {
    /// True when nothing matched. With the error enum carrying failures,
    /// this genuinely means an empty (but successful) run.
    pub fn is_empty(&self) -> bool {
        self.unique == 0 && self.duplicates == 0
    }
}

/// Result of a complete `run`: where the records went and what was counted.
#[derive(Debug)]
pub struct Outcome {
    pub output_path: PathBuf,
    pub report: ExtractReport,
    pub elapsed: Duration,
}

/// Extraction engine over one validated configuration.
pub struct Engine {
    config: EngineConfig,
    filter: ValueFilter,
    email: EmailValidator,
}

impl Engine {
    /// Build an engine, validating length bounds and compiling the email
    /// pattern up front.
    pub fn new(config: EngineConfig) -> anyhow::Result<Self> {
        let filter = ValueFilter::new(config.min_length, config.max_length)?;
        let email = EmailValidator::new()?;
        Ok(Self {
            config,
            filter,
            email,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run one full extraction: allocate an output slot, read the source,
    /// extract, and report.
    ///
    /// Slot exhaustion aborts before any read or write is attempted.
    pub fn run(&self, mode: Mode, source: &Path, out_dir: &Path) -> Result<Outcome, ExtractError> {
        let output_path = allocate_output_name(out_dir, mode.base_prefix(), self.config.max_number)
            .ok_or_else(|| ExtractError::NoFreeSlot {
                base: mode.base_prefix().to_string(),
                max_number: self.config.max_number,
            })?;

        info!("extracting {:?} -> {:?}", source, output_path);

        let start = Instant::now();
        let report = match mode {
            Mode::Passwords => self.extract_passwords(source, &output_path)?,
            Mode::Combo => self.extract_combos(source, &output_path)?,
        };

        Ok(Outcome {
            output_path,
            report,
            elapsed: start.elapsed(),
        })
    }

    /// Extract a plain password list from `source` into `output`.
    ///
    /// Password-only classification: the account prefix is never consulted.
    pub fn extract_passwords(
        &self,
        source: &Path,
        output: &Path,
    ) -> Result<ExtractReport, ExtractError> {
        let lines = read_source_lines(source)
            .map_err(|e| ExtractError::from_read_error(source, e))?;
        debug!("read {} lines from {:?}", lines.len(), source);

        let classifier = Classifier::passwords_only(&self.config.password_prefix);
        let writer = OutputWriter::create(output.to_path_buf())
            .map_err(|e| ExtractError::from_write_error(output, e))?;
        let mut sink = DedupSink::new(writer);

        for line in &lines {
            if let Classified::Password(value) = classifier.classify(line) {
                if self.filter.accepts(value) {
                    sink.offer(value)
                        .map_err(|e| ExtractError::from_write_error(output, e))?;
                }
            }
        }

        let (unique, duplicates) = sink
            .finish()
            .map_err(|e| ExtractError::from_write_error(output, e))?;
        Ok(ExtractReport { unique, duplicates })
    }

    /// Extract a correlated email:password combo list from `source`.
    ///
    /// The length/structure filter applies to the password component; the
    /// account component only has to pass the email-shape check.
    pub fn extract_combos(
        &self,
        source: &Path,
        output: &Path,
    ) -> Result<ExtractReport, ExtractError> {
        let lines = read_source_lines(source)
            .map_err(|e| ExtractError::from_read_error(source, e))?;
        debug!("read {} lines from {:?}", lines.len(), source);

        let classifier =
            Classifier::with_accounts(&self.config.account_prefix, &self.config.password_prefix);
        let mut correlator = Correlator::new(self.email.clone());

        let writer = OutputWriter::create(output.to_path_buf())
            .map_err(|e| ExtractError::from_write_error(output, e))?;
        let mut sink = DedupSink::new(writer);

        for line in &lines {
            match classifier.classify(line) {
                Classified::Account(value) => correlator.observe_account(value),
                Classified::Password(value) => {
                    if self.filter.accepts(value) {
                        if let Some(combo) = correlator.pair(value) {
                            sink.offer(&combo)
                                .map_err(|e| ExtractError::from_write_error(output, e))?;
                        }
                    }
                }
                Classified::Skip => {}
            }
        }

        let (unique, duplicates) = sink
            .finish()
            .map_err(|e| ExtractError::from_write_error(output, e))?;
        Ok(ExtractReport { unique, duplicates })
    }
}
