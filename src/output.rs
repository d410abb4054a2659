//! Output management module
//!
//! Buffered line writing plus numbered output-slot allocation.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Default buffer size for file writing (1MB)
const DEFAULT_BUFFER_SIZE: usize = 1024 * 1024;

/// Buffered output file writer.
pub struct OutputWriter {
    writer: BufWriter<File>,
    path: PathBuf,
    lines_written: u64,
    bytes_written: u64,
}

impl OutputWriter {
    /// Create a new output writer, truncating any existing file at `path`.
    pub fn create(path: PathBuf) -> io::Result<Self> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)?;

        let writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);

        Ok(Self {
            writer,
            path,
            lines_written: 0,
            bytes_written: 0,
        })
    }

    /// Write a record followed by a line terminator.
    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", line)?;
        self.lines_written += 1;
        self.bytes_written += line.len() as u64 + 1; // +1 for newline
        Ok(())
    }

    /// Flush the buffer to disk.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    /// Get the output path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get number of lines written
    pub fn lines_written(&self) -> u64 {
        self.lines_written
    }

    /// Get bytes written
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }
}

impl Drop for OutputWriter {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

/// Allocate the first free numbered output filename.
///
/// Scans `{base}_{NN}.txt` for `NN` from `00` through `max_number`
/// (zero-padded to at least two digits) under `dir` and returns the first
/// path that does not exist yet, or `None` when every slot is taken.
///
/// Known limitation: the exists-check and the later file creation are not
/// atomic, so a concurrent process could claim the same slot in between.
/// The tool is single-operator and single-process, so the simple
/// check-then-create sequence is kept.
pub fn allocate_output_name(dir: &Path, base: &str, max_number: u32) -> Option<PathBuf> {
    for number in 0..=max_number {
        let candidate = dir.join(format!("{}_{:02}.txt", base, number));
        if !candidate.exists() {
            return Some(candidate);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_output_writer() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.txt");

        let mut writer = OutputWriter::create(path.clone()).unwrap();
        writer.write_line("hello").unwrap();
        writer.write_line("world").unwrap();
        writer.flush().unwrap();

        assert_eq!(writer.lines_written(), 2);

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "hello\nworld\n");
    }

    #[test]
    fn test_allocate_first_slot() {
        let temp_dir = TempDir::new().unwrap();

        let path = allocate_output_name(temp_dir.path(), "passwords_clean", 99).unwrap();
        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "passwords_clean_00.txt"
        );
    }

    #[test]
    fn test_allocate_skips_existing() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("combolist_00.txt"), "").unwrap();
        fs::write(temp_dir.path().join("combolist_01.txt"), "").unwrap();

        let path = allocate_output_name(temp_dir.path(), "combolist", 99).unwrap();
        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "combolist_02.txt"
        );
    }

    #[test]
    fn test_allocate_exhausted() {
        let temp_dir = TempDir::new().unwrap();
        for number in 0..=3u32 {
            let name = format!("passwords_clean_{:02}.txt", number);
            fs::write(temp_dir.path().join(name), "").unwrap();
        }

        assert!(allocate_output_name(temp_dir.path(), "passwords_clean", 3).is_none());
    }

    #[test]
    fn test_allocate_zero_pads_to_two_digits() {
        let temp_dir = TempDir::new().unwrap();
        for number in 0..=8u32 {
            let name = format!("out_{:02}.txt", number);
            fs::write(temp_dir.path().join(name), "").unwrap();
        }

        let path = allocate_output_name(temp_dir.path(), "out", 99).unwrap();
        assert_eq!(path.file_name().unwrap().to_str().unwrap(), "out_09.txt");
    }
}
