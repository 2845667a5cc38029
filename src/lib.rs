//! easylog - minimal file-based logging helper
//!
//! Appends timestamped text lines to a single file, with a distinct
//! upper-cased error mode (optional numeric error codes and caller
//! identification) and notification hooks fired after each logging action.
//! Every formatted line is also mirrored to the `tracing` debug sink for live
//! observation during development.
//!
//! ```no_run
//! use easylog::Logger;
//!
//! # fn main() -> Result<(), easylog::Error> {
//! let mut log = Logger::with_name_in_dir("run", "logs")?;
//! log.on_error_logged(|code| eprintln!("error logged, code {code}"));
//!
//! log.log_info("start")?;
//! log.log_error_with_code("fetch failed", 404, Some("fetcher"))?;
//! log.clear()?;
//! # Ok(())
//! # }
//! ```
//!
//! Operations are plain synchronous calls; the backing file is opened and
//! closed per call and is not internally synchronized. See [`Logger`] for the
//! concurrency contract.

pub mod error;
pub mod hooks;
pub mod logger;

pub use error::{categorize_io_error, Error, IoErrorCategory};
pub use hooks::HookId;
pub use logger::{Logger, DEFAULT_LOG_NAME, UNKNOWN_CALLER};
