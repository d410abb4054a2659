//! Source reading module
//!
//! Reads a whole dump file into an ordered sequence of lines, detecting and
//! transcoding non-UTF-8 encodings. Dumps exported on Windows are frequently
//! UTF-16 or Windows-1252, so the raw bytes are sniffed before decoding.
//!
//! The full read happens up front: the engine must not create or truncate
//! any output file unless reading the source fully succeeded.

use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use std::fs;
use std::io;
use std::path::Path;

/// Read the entire source file and split it into lines.
///
/// Line terminators (`\n` or `\r\n`) are stripped; original order is kept.
pub fn read_source_lines(path: &Path) -> io::Result<Vec<String>> {
    let bytes = fs::read(path)?;
    Ok(decode_lines(&bytes))
}

/// Decode raw bytes to text and split into lines.
fn decode_lines(bytes: &[u8]) -> Vec<String> {
    let encoding = detect_encoding(bytes);
    let (text, _, _) = encoding.decode(bytes);

    text.lines().map(|line| line.to_string()).collect()
}

/// Detect the encoding of raw content: BOM first, then statistical sniffing.
fn detect_encoding(bytes: &[u8]) -> &'static Encoding {
    if let Some(encoding) = detect_bom(bytes) {
        return encoding;
    }

    let mut detector = EncodingDetector::new();
    // 64KB sample is enough for detection
    let sample_len = bytes.len().min(64 * 1024);
    detector.feed(&bytes[..sample_len], sample_len == bytes.len());
    detector.guess(None, true)
}

/// Detect a BOM (Byte Order Mark) at the start of content.
fn detect_bom(content: &[u8]) -> Option<&'static Encoding> {
    if content.starts_with(&[0xEF, 0xBB, 0xBF]) {
        Some(encoding_rs::UTF_8)
    } else if content.starts_with(&[0xFF, 0xFE]) {
        Some(encoding_rs::UTF_16LE)
    } else if content.starts_with(&[0xFE, 0xFF]) {
        Some(encoding_rs::UTF_16BE)
    } else {
        None
    }
}
