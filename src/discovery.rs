// src/discovery.rs
//! File walking: turns a scan root into a flat, sorted list of [`FileRecord`]s.

use crate::cancel::CancelToken;
use crate::config::ScanConfig;
use crate::error::{IndError, Result};
use crate::types::{extension_of, FileRecord, Outcome, ReadQuality};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{ErrorKind, Read};
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

/// Bytes inspected for a NUL before a file is treated as binary.
const BINARY_SNIFF_LEN: usize = 8192;
const READ_CHUNK: usize = 64 * 1024;

/// Aggregate counters accumulated while walking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkCounters {
    pub total_files: usize,
    pub total_size_bytes: u64,
    pub total_lines_of_code: usize,
    /// Extension -> number of files.
    pub file_types: BTreeMap<String, usize>,
    /// Files recorded with degraded metrics.
    pub degraded: usize,
    /// Files dropped because they vanished or could not be stat'ed.
    pub skipped: usize,
    /// Directory entries the walker itself failed to read.
    pub walk_errors: usize,
}

impl WalkCounters {
    fn record(&mut self, file: &FileRecord) {
        self.total_files += 1;
        self.total_size_bytes += file.size_bytes;
        self.total_lines_of_code += file.line_count;
        *self.file_types.entry(file.extension.clone()).or_insert(0) += 1;
    }
}

/// Output of one walk.
#[derive(Debug, Clone, Default)]
pub struct Discovery {
    /// Sorted by relative path.
    pub files: Vec<FileRecord>,
    pub counters: WalkCounters,
}

/// Walks `root`, skipping ignored directories and files.
///
/// # Errors
/// Returns `PathNotFound`/`NotADirectory` if the root is unusable and
/// `Cancelled` if the token fires. Per-file failures never error.
pub fn discover(root: &Path, config: &ScanConfig, cancel: &CancelToken) -> Result<Discovery> {
    ensure_root(root)?;

    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !should_prune(e, config));

    let mut out = Discovery::default();
    for item in walker {
        cancel.checkpoint()?;

        let entry = match item {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("Walk error under {}: {e}", root.display());
                out.counters.walk_errors += 1;
                continue;
            }
        };

        if !is_regular_file(&entry) {
            continue;
        }
        if config.is_ignored_file(&entry.file_name().to_string_lossy()) {
            continue;
        }

        accept(&mut out, read_record(root, entry.path()));
    }

    out.files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));

    log::debug!(
        "Walked {} files ({} degraded, {} skipped)",
        out.counters.total_files,
        out.counters.degraded,
        out.counters.skipped
    );
    Ok(out)
}

/// Fails fast when the scan root is missing or not a directory.
///
/// # Errors
/// Returns `PathNotFound` or `NotADirectory`.
pub fn ensure_root(root: &Path) -> Result<()> {
    if !root.exists() {
        return Err(IndError::PathNotFound {
            path: root.to_path_buf(),
        });
    }
    if !root.is_dir() {
        return Err(IndError::NotADirectory {
            path: root.to_path_buf(),
        });
    }
    Ok(())
}

// The root itself is never pruned, even if its own name is ignored.
fn should_prune(entry: &DirEntry, config: &ScanConfig) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && config.is_ignored_dir(&entry.file_name().to_string_lossy())
}

fn is_regular_file(entry: &DirEntry) -> bool {
    let ft = entry.file_type();
    ft.is_file() || (ft.is_symlink() && entry.path().is_file())
}

fn accept(out: &mut Discovery, outcome: Outcome<FileRecord>) {
    match outcome {
        Outcome::Ok(record) => {
            out.counters.record(&record);
            out.files.push(record);
        }
        Outcome::Partial { value, reason } => {
            log::warn!("Degraded metrics for {}: {reason}", value.relative_path);
            out.counters.degraded += 1;
            out.counters.record(&value);
            out.files.push(value);
        }
        Outcome::Skipped { reason } => {
            log::warn!("Skipped file: {reason}");
            out.counters.skipped += 1;
        }
    }
}

/// Builds the record for one file.
///
/// A failed stat skips the file; a failed or binary read keeps the file
/// with `line_count = 0` and a matching [`ReadQuality`].
#[must_use]
pub fn read_record(root: &Path, path: &Path) -> Outcome<FileRecord> {
    let relative_path = relative_posix(root, path);

    let size_bytes = match fs::metadata(path) {
        Ok(meta) => meta.len(),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Outcome::Skipped {
                reason: format!("{relative_path} vanished before it could be read"),
            };
        }
        Err(e) => {
            return Outcome::Skipped {
                reason: format!("{relative_path}: {e}"),
            };
        }
    };

    let file_name = relative_path.rsplit('/').next().unwrap_or(&relative_path);
    let mut record = FileRecord {
        extension: extension_of(file_name),
        relative_path: relative_path.clone(),
        size_bytes,
        line_count: 0,
        quality: ReadQuality::Clean,
    };

    match count_lines(path) {
        Ok(LineCount::Text(n)) => {
            record.line_count = n;
            Outcome::Ok(record)
        }
        Ok(LineCount::Binary) => {
            record.quality = ReadQuality::Binary;
            Outcome::Partial {
                value: record,
                reason: "binary content".to_string(),
            }
        }
        Err(e) => {
            record.quality = ReadQuality::Unreadable;
            Outcome::Partial {
                value: record,
                reason: e.to_string(),
            }
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum LineCount {
    Text(usize),
    Binary,
}

// Universal newlines: `\n`, `\r\n` and a lone `\r` each end one line.
// Neither byte appears inside a UTF-8 multi-byte sequence, so counting raw
// bytes equals counting after a lossy decode.
fn count_lines(path: &Path) -> std::io::Result<LineCount> {
    let mut file = File::open(path)?;
    let mut buf = vec![0u8; READ_CHUNK];
    let mut lines = 0;
    let mut sniffed = 0;
    let mut prev = 0u8;

    loop {
        let n = match file.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        let chunk = &buf[..n];

        if sniffed < BINARY_SNIFF_LEN {
            let window = &chunk[..n.min(BINARY_SNIFF_LEN - sniffed)];
            if window.contains(&0) {
                return Ok(LineCount::Binary);
            }
            sniffed += window.len();
        }

        for &b in chunk {
            if b == b'\r' || (b == b'\n' && prev != b'\r') {
                lines += 1;
            }
            prev = b;
        }
    }

    Ok(LineCount::Text(lines))
}

/// Path of `path` relative to `root`, with forward slashes.
#[must_use]
pub fn relative_posix(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    normalize_path(rel)
}

/// Normalizes a path to use forward slashes (cross-platform pattern matching).
#[must_use]
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_count_lines_terminators() {
        let d = TempDir::new().unwrap();
        let p = d.path().join("a.txt");
        fs::write(&p, "one\ntwo\nthree").unwrap();
        assert_eq!(count_lines(&p).unwrap(), LineCount::Text(2));
    }

    #[test]
    fn test_count_lines_carriage_returns() {
        let d = TempDir::new().unwrap();
        let p = d.path().join("mac.py");
        fs::write(&p, "import os\rimport sys\r").unwrap();
        assert_eq!(count_lines(&p).unwrap(), LineCount::Text(2));

        let p = d.path().join("dos.py");
        fs::write(&p, "a\r\nb\r\nc\n").unwrap();
        assert_eq!(count_lines(&p).unwrap(), LineCount::Text(3));
    }

    #[test]
    fn test_crlf_split_across_chunks_counts_once() {
        let d = TempDir::new().unwrap();
        let p = d.path().join("split.txt");
        let mut content = vec![b'x'; READ_CHUNK - 1];
        content.extend_from_slice(b"\r\nend\n");
        fs::write(&p, content).unwrap();
        assert_eq!(count_lines(&p).unwrap(), LineCount::Text(2));
    }

    #[test]
    fn test_invalid_utf8_without_nul_is_text() {
        let d = TempDir::new().unwrap();
        let p = d.path().join("latin1.txt");
        fs::write(&p, [b'c', b'a', b'f', 0xE9, b'\n', 0xFF, b'\n']).unwrap();
        assert_eq!(count_lines(&p).unwrap(), LineCount::Text(2));
    }

    #[test]
    fn test_nul_is_binary() {
        let d = TempDir::new().unwrap();
        let p = d.path().join("blob.bin");
        fs::write(&p, [0x89, b'P', b'N', b'G', 0, 0, b'\n']).unwrap();
        assert_eq!(count_lines(&p).unwrap(), LineCount::Binary);
    }

    #[test]
    fn test_missing_file_is_skipped() {
        let d = TempDir::new().unwrap();
        let outcome = read_record(d.path(), &d.path().join("gone.py"));
        assert!(matches!(outcome, Outcome::Skipped { .. }));
    }

    // A directory stats fine but fails on read.
    #[cfg(unix)]
    #[test]
    fn test_read_failure_is_unreadable() {
        let d = TempDir::new().unwrap();
        let dir = d.path().join("pkg.py");
        fs::create_dir(&dir).unwrap();

        let Outcome::Partial { value, .. } = read_record(d.path(), &dir) else {
            panic!("expected partial outcome");
        };
        assert_eq!(value.quality, ReadQuality::Unreadable);
        assert_eq!(value.line_count, 0);
        assert_eq!(value.relative_path, "pkg.py");
        assert_eq!(value.extension, ".py");
    }

    #[test]
    fn test_relative_posix() {
        let root = Path::new("/tmp/proj");
        let p = root.join("a").join("b.py");
        assert_eq!(relative_posix(root, &p), "a/b.py");
    }
}
