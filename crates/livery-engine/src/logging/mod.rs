//! Logging utilities.
//!
//! Two layers:
//! - `init` installs the process-wide `log` backend (`env_logger`).
//! - `diagnostics` is the per-engine capability: a minimum severity plus a
//!   sink, so tests can capture what a style application reported.

mod diagnostics;
mod init;

pub use diagnostics::{
    FacadeSink, LOG_LEVEL_ENV, LogLevel, LogSink, Logger, MemorySink, ParseLogLevelError,
};
pub use init::{LoggingConfig, init_logging};
