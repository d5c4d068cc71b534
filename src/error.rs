// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort a whole scan invocation.
///
/// Per-file problems (unreadable files, unparsable sources) never show up
/// here; they are absorbed into [`crate::types::Outcome`] values.
#[derive(Debug, Error)]
pub enum IndError {
    #[error("Scan path does not exist: {}", path.display())]
    PathNotFound { path: PathBuf },

    #[error("Scan path is not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    #[error("A scan is already in progress")]
    ScanInProgress,

    #[error("Scan was cancelled")]
    Cancelled,

    #[error("Invalid config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error("I/O error: {source} (path: {})", path.display())]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },
}

pub type Result<T> = std::result::Result<T, IndError>;

impl IndError {
    /// Wraps an I/O error together with the path that produced it.
    #[must_use]
    pub fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            source,
            path: path.into(),
        }
    }
}

// Allow `?` on std::io::Error by converting to IndError::Io with unknown path.
impl From<std::io::Error> for IndError {
    fn from(source: std::io::Error) -> Self {
        IndError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_not_found_message() {
        let e = IndError::PathNotFound {
            path: PathBuf::from("/nope"),
        };
        assert_eq!(e.to_string(), "Scan path does not exist: /nope");
    }

    #[test]
    fn test_io_keeps_path() {
        let e = IndError::io(
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            "a/b.py",
        );
        assert!(e.to_string().contains("a/b.py"));
    }
}
