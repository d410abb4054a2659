//! Deduplicating output sink
//!
//! Order-preserving, uniqueness-enforcing sink: the first offer of a record
//! writes it through, later equal offers are counted as duplicates and
//! dropped. Output order equals first-occurrence order in the source.

use crate::output::OutputWriter;
use ahash::RandomState;
use hashbrown::HashSet;
use std::io;

/// Outcome of offering one record to the sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Offer {
    /// Record was new and has been written to the output.
    Written,
    /// Record was already written earlier in this run; nothing was written.
    Duplicate,
}

/// Deduplicating sink around a buffered output writer.
///
/// The seen-set lives for one extraction call and is never persisted: a
/// fresh sink starts with an empty set.
pub struct DedupSink {
    writer: OutputWriter,
    seen: HashSet<String, RandomState>,
    unique: u64,
    duplicates: u64,
}

impl DedupSink {
    pub fn new(writer: OutputWriter) -> Self {
        Self {
            writer,
            seen: HashSet::with_hasher(RandomState::new()),
            unique: 0,
            duplicates: 0,
        }
    }

    /// Offer one record. Writes it (plus line terminator) if unseen.
    pub fn offer(&mut self, record: &str) -> io::Result<Offer> {
        if self.seen.contains(record) {
            self.duplicates += 1;
            return Ok(Offer::Duplicate);
        }

        self.writer.write_line(record)?;
        self.seen.insert(record.to_string());
        self.unique += 1;
        Ok(Offer::Written)
    }

    /// Get the unique-record count so far.
    pub fn unique(&self) -> u64 {
        self.unique
    }

    /// Get the duplicate-record count so far.
    pub fn duplicates(&self) -> u64 {
        self.duplicates
    }

    /// Flush the underlying writer and return `(unique, duplicates)`.
    pub fn finish(mut self) -> io::Result<(u64, u64)> {
        self.writer.flush()?;
        Ok((self.unique, self.duplicates))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn sink_in(dir: &TempDir) -> (DedupSink, std::path::PathBuf) {
        let path = dir.path().join("out.txt");
        let writer = OutputWriter::create(path.clone()).unwrap();
        (DedupSink::new(writer), path)
    }

    #[test]
    fn test_first_offer_writes() {
        let temp_dir = TempDir::new().unwrap();
        let (mut sink, path) = sink_in(&temp_dir);

        assert_eq!(sink.offer("hunter2").unwrap(), Offer::Written);
        assert_eq!(sink.offer("letmein").unwrap(), Offer::Written);

        let (unique, duplicates) = sink.finish().unwrap();
        assert_eq!((unique, duplicates), (2, 0));

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "hunter2\nletmein\n");
    }

    #[test]
    fn test_duplicate_offer_counted_not_written() {
        let temp_dir = TempDir::new().unwrap();
        let (mut sink, path) = sink_in(&temp_dir);

        assert_eq!(sink.offer("hunter2").unwrap(), Offer::Written);
        assert_eq!(sink.offer("hunter2").unwrap(), Offer::Duplicate);
        assert_eq!(sink.offer("hunter2").unwrap(), Offer::Duplicate);

        let (unique, duplicates) = sink.finish().unwrap();
        assert_eq!((unique, duplicates), (1, 2));

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "hunter2\n");
    }

    #[test]
    fn test_output_preserves_first_occurrence_order() {
        let temp_dir = TempDir::new().unwrap();
        let (mut sink, path) = sink_in(&temp_dir);

        for record in ["zulu", "alpha", "zulu", "mike", "alpha"] {
            sink.offer(record).unwrap();
        }
        sink.finish().unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "zulu\nalpha\nmike\n");
    }
}
