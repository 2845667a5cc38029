//! File-backed logger with timestamped entries and notification hooks
//!
//! Each operation opens the backing file, performs its I/O and closes it
//! again; no handle is held between calls. The file is an unsynchronized
//! shared resource: callers logging from multiple threads must serialize
//! access externally (one logger per thread, or a mutex around the logger).

use std::fmt::{self, Display};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::error::Error;
use crate::hooks::{HookId, Hooks};

/// File stem used by [`Logger::new`].
pub const DEFAULT_LOG_NAME: &str = "easylog";

/// Substituted when no caller name is supplied to an error entry.
pub const UNKNOWN_CALLER: &str = "unknown";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[cfg(windows)]
const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
const LINE_ENDING: &str = "\n";

/// Appends timestamped text entries to a single file.
///
/// The backing path is resolved once at construction and never changes.
/// Observers can attach to the logged/cleared events via the `on_*` methods;
/// handlers run synchronously after the write completes and never run for a
/// failed write.
pub struct Logger {
    file_path: PathBuf,
    hooks: Hooks,
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("file_path", &self.file_path)
            .finish_non_exhaustive()
    }
}

impl Logger {
    /// Create a logger writing to `easylog.txt` next to the executable.
    pub fn new() -> Result<Self, Error> {
        Self::with_name(DEFAULT_LOG_NAME)
    }

    /// Create a logger writing to `<name>.txt` next to the executable.
    pub fn with_name(name: &str) -> Result<Self, Error> {
        let path = base_dir()?.join(format!("{name}.txt"));
        Ok(Self::at_path(path))
    }

    /// Create a logger writing to `<dir>/<name>.txt` under the executable's
    /// directory, creating `<dir>` (and any intermediate segments) if it does
    /// not exist yet. Fails construction if the directory cannot be created.
    pub fn with_name_in_dir(name: &str, dir: &str) -> Result<Self, Error> {
        let path = resolve_in_dir(&base_dir()?, name, dir)?;
        Ok(Self::at_path(path))
    }

    /// Create a logger writing to an exact path (for testing or embedding).
    ///
    /// No base-directory resolution and no directory creation happens; the
    /// parent directory must already exist before the first write.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: path.into(),
            hooks: Hooks::default(),
        }
    }

    /// The resolved backing file path.
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Append an info entry: `[<timestamp>] <value>`.
    ///
    /// Creates the file on first write. Fires the info-logged hooks once the
    /// write has completed.
    pub fn log_info(&mut self, value: impl Display) -> Result<(), Error> {
        let line = format!("[{}] {}", timestamp(), value);
        self.append(&line)?;
        tracing::debug!(target: "easylog", "{line}");
        self.hooks.fire_info_logged();
        Ok(())
    }

    /// Append an error entry, upper-cased for visibility:
    /// `[<TIMESTAMP>] [CALLED BY: <CALLER>] <VALUE>`.
    ///
    /// A missing `caller` is rendered as [`UNKNOWN_CALLER`]. Fires the
    /// error-logged hooks with code `0`. Note that observers cannot
    /// distinguish this from an explicit [`log_error_with_code`] call that
    /// passed `0`.
    ///
    /// [`log_error_with_code`]: Logger::log_error_with_code
    pub fn log_error(&mut self, value: impl Display, caller: Option<&str>) -> Result<(), Error> {
        let caller = caller.unwrap_or(UNKNOWN_CALLER);
        let line = format!("[{}] [Called by: {}] {}", timestamp(), caller, value).to_uppercase();
        self.append(&line)?;
        tracing::debug!(target: "easylog", "{line}");
        self.hooks.fire_error_logged(0);
        Ok(())
    }

    /// Append an error entry carrying a numeric code, upper-cased:
    /// `[<TIMESTAMP>] [ERROR CODE: <CODE>] [CALLED BY: <CALLER>] <VALUE>`.
    ///
    /// `code` is passed through to the error-logged hooks unvalidated.
    pub fn log_error_with_code(
        &mut self,
        value: impl Display,
        code: i32,
        caller: Option<&str>,
    ) -> Result<(), Error> {
        let caller = caller.unwrap_or(UNKNOWN_CALLER);
        let line = format!(
            "[{}] [Error Code: {}] [Called by: {}] {}",
            timestamp(),
            code,
            caller,
            value
        )
        .to_uppercase();
        self.append(&line)?;
        tracing::debug!(target: "easylog", "{line}");
        self.hooks.fire_error_logged(code);
        Ok(())
    }

    /// Truncate the backing file to zero length without deleting it.
    ///
    /// Fires the log-cleared hooks once truncation has completed.
    pub fn clear(&mut self) -> Result<(), Error> {
        File::create(&self.file_path).map_err(|source| Error::Truncate {
            path: self.file_path.clone(),
            source,
        })?;
        tracing::debug!(target: "easylog", "clearing logs in {}", self.file_path.display());
        self.hooks.fire_log_cleared();
        Ok(())
    }

    /// Attach a handler fired after each successful [`log_info`](Logger::log_info).
    pub fn on_info_logged(&mut self, handler: impl FnMut() + 'static) -> HookId {
        self.hooks.on_info_logged(handler)
    }

    /// Attach a handler fired after each successful error entry, receiving
    /// the error code (`0` when none was given).
    pub fn on_error_logged(&mut self, handler: impl FnMut(i32) + 'static) -> HookId {
        self.hooks.on_error_logged(handler)
    }

    /// Attach a handler fired after each successful [`clear`](Logger::clear).
    pub fn on_log_cleared(&mut self, handler: impl FnMut() + 'static) -> HookId {
        self.hooks.on_log_cleared(handler)
    }

    /// Detach a previously attached handler. Returns `false` if the id is
    /// unknown (already removed, or from another logger).
    pub fn remove_hook(&mut self, id: HookId) -> bool {
        self.hooks.remove(id)
    }

    fn append(&self, line: &str) -> Result<(), Error> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.file_path)
            .map_err(|source| Error::Append {
                path: self.file_path.clone(),
                source,
            })?;
        file.write_all(line.as_bytes())
            .and_then(|()| file.write_all(LINE_ENDING.as_bytes()))
            .map_err(|source| Error::Append {
                path: self.file_path.clone(),
                source,
            })
    }
}

fn timestamp() -> impl Display {
    Local::now().format(TIMESTAMP_FORMAT)
}

/// Directory containing the current executable.
fn base_dir() -> Result<PathBuf, Error> {
    let exe = std::env::current_exe().map_err(|source| Error::BaseDir { source })?;
    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| Error::BaseDir {
            source: io::Error::new(io::ErrorKind::NotFound, "executable has no parent directory"),
        })
}

/// Resolve `<base>/<dir>/<name>.txt`, creating `<dir>` if missing.
fn resolve_in_dir(base: &Path, name: &str, dir: &str) -> Result<PathBuf, Error> {
    let target = base.join(dir);
    if !target.exists() {
        fs::create_dir_all(&target).map_err(|source| Error::CreateDir {
            path: target.clone(),
            source,
        })?;
    }
    Ok(target.join(format!("{name}.txt")))
}
