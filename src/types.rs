use serde::{Deserialize, Serialize};

/// Extension recorded for files without one.
pub const NO_EXTENSION: &str = "Other";

/// How faithfully a file's metrics reflect its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReadQuality {
    /// Content was read and decoded.
    #[default]
    Clean,
    /// Content looked binary; lines were not counted.
    Binary,
    /// Content could not be read at all.
    Unreadable,
}

/// A single scanned file. Built once by the walker, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// POSIX-style path relative to the scan root.
    pub relative_path: String,
    pub size_bytes: u64,
    pub line_count: usize,
    /// Leading-dot extension, or [`NO_EXTENSION`].
    pub extension: String,
    #[serde(default)]
    pub quality: ReadQuality,
}

impl FileRecord {
    /// Last path segment.
    #[must_use]
    pub fn file_name(&self) -> &str {
        self.relative_path
            .rsplit('/')
            .next()
            .unwrap_or(&self.relative_path)
    }

    /// Parent folder, `None` for files at the root.
    #[must_use]
    pub fn folder(&self) -> Option<&str> {
        self.relative_path.rsplit_once('/').map(|(dir, _)| dir)
    }
}

/// Normalises a file name's extension to the recorded form.
///
/// Dotfiles such as `.gitignore` have no extension, matching how
/// `splitext` treats them.
#[must_use]
pub fn extension_of(file_name: &str) -> String {
    let stem_start = file_name.len() - file_name.trim_start_matches('.').len();
    match file_name[stem_start..].rfind('.') {
        Some(idx) => file_name[stem_start + idx..].to_string(),
        None => NO_EXTENSION.to_string(),
    }
}

/// Result of one file-level operation.
///
/// Scans never fail because of a single file; instead every per-file step
/// reports whether it fully succeeded, degraded, or had to be skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Ok(T),
    Partial { value: T, reason: String },
    Skipped { reason: String },
}

impl<T> Outcome<T> {
    /// The carried value, if any.
    pub fn value(self) -> Option<T> {
        match self {
            Self::Ok(v) | Self::Partial { value: v, .. } => Some(v),
            Self::Skipped { .. } => None,
        }
    }

    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Ok(_) => None,
            Self::Partial { reason, .. } | Self::Skipped { reason } => Some(reason),
        }
    }

    #[must_use]
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }
}
