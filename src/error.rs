//! Error types for log file operations
//!
//! Every failure carries the underlying `std::io::Error` as its source so
//! callers can inspect the exact cause. Nothing is retried or recovered
//! internally.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by [`Logger`](crate::Logger) construction and operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The directory containing the current executable could not be resolved.
    #[error("could not resolve the process base directory")]
    BaseDir {
        #[source]
        source: io::Error,
    },

    /// Creating the target subdirectory at construction time failed.
    #[error("failed to create log directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Appending to (or creating) the log file failed.
    #[error("failed to append to log file {path}")]
    Append {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Opening the log file for truncation failed.
    #[error("failed to truncate log file {path}")]
    Truncate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// The underlying I/O failure.
    pub fn io_source(&self) -> &io::Error {
        match self {
            Error::BaseDir { source }
            | Error::CreateDir { source, .. }
            | Error::Append { source, .. }
            | Error::Truncate { source, .. } => source,
        }
    }

    /// Categorize the underlying failure for user-facing messages.
    pub fn category(&self) -> IoErrorCategory {
        categorize_io_error(self.io_source())
    }
}

/// Categories of disk errors for user-friendly messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoErrorCategory {
    /// Disk is full or quota exceeded
    DiskFull,
    /// Permission denied (read or write)
    PermissionDenied,
    /// File or directory not found
    NotFound,
    /// Other IO error
    Other,
}

impl IoErrorCategory {
    /// Get a user-friendly message for this error category
    pub fn user_message(&self) -> &'static str {
        match self {
            IoErrorCategory::DiskFull => "Disk full - free space needed to write log",
            IoErrorCategory::PermissionDenied => "Permission denied writing to the log file",
            IoErrorCategory::NotFound => "Log file or directory not found",
            IoErrorCategory::Other => "Failed to write log entry",
        }
    }
}

/// Categorize an IO error into a user-friendly category
pub fn categorize_io_error(e: &io::Error) -> IoErrorCategory {
    use std::io::ErrorKind;

    match e.kind() {
        // On some systems, disk full might appear as WriteZero
        ErrorKind::WriteZero => IoErrorCategory::DiskFull,

        ErrorKind::PermissionDenied => IoErrorCategory::PermissionDenied,

        ErrorKind::NotFound => IoErrorCategory::NotFound,

        // Unix reports out-of-space conditions through errno values that
        // ErrorKind does not always cover, so fall back to the raw code
        _ => {
            #[cfg(unix)]
            {
                if let Some(os_error) = e.raw_os_error() {
                    // 28 is ENOSPC everywhere; quota exhaustion (EDQUOT) is
                    // 122 on Linux and 69 on macOS
                    if os_error == 28 || os_error == 122 || os_error == 69 {
                        return IoErrorCategory::DiskFull;
                    }
                    // 13: EACCES
                    if os_error == 13 {
                        return IoErrorCategory::PermissionDenied;
                    }
                }
            }
            IoErrorCategory::Other
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categorize_permission_denied() {
        let e = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        assert_eq!(categorize_io_error(&e), IoErrorCategory::PermissionDenied);
    }

    #[test]
    fn test_categorize_not_found() {
        let e = io::Error::new(io::ErrorKind::NotFound, "missing");
        assert_eq!(categorize_io_error(&e), IoErrorCategory::NotFound);
    }

    #[test]
    fn test_categorize_other() {
        let e = io::Error::new(io::ErrorKind::Interrupted, "interrupted");
        assert_eq!(categorize_io_error(&e), IoErrorCategory::Other);
    }

    #[cfg(unix)]
    #[test]
    fn test_categorize_enospc_by_raw_os_error() {
        let e = io::Error::from_raw_os_error(28);
        assert_eq!(categorize_io_error(&e), IoErrorCategory::DiskFull);
    }

    #[test]
    fn test_error_exposes_io_source_and_category() {
        let err = Error::Append {
            path: PathBuf::from("/tmp/app.txt"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.io_source().kind(), io::ErrorKind::PermissionDenied);
        assert_eq!(err.category(), IoErrorCategory::PermissionDenied);
        assert!(err.to_string().contains("/tmp/app.txt"));
    }
}
