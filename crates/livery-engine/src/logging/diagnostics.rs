use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, Mutex, PoisonError};

use crate::error::StyleError;

/// Environment variable read by [`LogLevel::from_env`].
pub const LOG_LEVEL_ENV: &str = "LIVERY_LOG_LEVEL";

// ── LogLevel ──────────────────────────────────────────────────────────────

/// Severity of an engine diagnostic. Ordered from least to most severe.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    Verbose,
    #[default]
    Warning,
    Error,
}

impl LogLevel {
    pub fn icon(self) -> &'static str {
        match self {
            LogLevel::Verbose => "📢",
            LogLevel::Warning => "⚠️",
            LogLevel::Error => "💥",
        }
    }

    /// The `log` facade level this severity is forwarded at.
    pub fn as_log_level(self) -> log::Level {
        match self {
            LogLevel::Verbose => log::Level::Debug,
            LogLevel::Warning => log::Level::Warn,
            LogLevel::Error => log::Level::Error,
        }
    }

    /// Reads [`LOG_LEVEL_ENV`]. `Ok(None)` when the variable is unset.
    pub fn from_env() -> Result<Option<Self>, ParseLogLevelError> {
        match std::env::var(LOG_LEVEL_ENV) {
            Ok(raw) => raw.parse().map(Some),
            Err(_) => Ok(None),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogLevel::Verbose => "verbose",
            LogLevel::Warning => "warning",
            LogLevel::Error => "error",
        };
        f.write_str(name)
    }
}

/// Error returned when a string is not one of `verbose`, `warning`, `error`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLogLevelError(pub String);

impl fmt::Display for ParseLogLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level {:?} (expected verbose, warning or error)", self.0)
    }
}

impl std::error::Error for ParseLogLevelError {}

impl FromStr for LogLevel {
    type Err = ParseLogLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "verbose" | "debug" => Ok(LogLevel::Verbose),
            "warning" | "warn" => Ok(LogLevel::Warning),
            "error" => Ok(LogLevel::Error),
            _ => Err(ParseLogLevelError(s.to_owned())),
        }
    }
}

// ── Sinks ─────────────────────────────────────────────────────────────────

/// Destination for engine diagnostics.
pub trait LogSink: Send + Sync {
    fn write(&self, level: LogLevel, message: &str);
}

/// Forwards diagnostics to the `log` facade under the `livery` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct FacadeSink;

impl LogSink for FacadeSink {
    fn write(&self, level: LogLevel, message: &str) {
        let icon = level.icon();
        log::log!(target: "livery", level.as_log_level(), "🎨{icon} livery {icon}🎨: {message}");
    }
}

/// Keeps every diagnostic in memory. Intended for tests and tooling that
/// want to inspect what a style application reported.
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: Mutex<Vec<(LogLevel, String)>>,
}

impl MemorySink {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn entries(&self) -> Vec<(LogLevel, String)> {
        self.lock().clone()
    }

    /// Messages recorded at exactly `level`.
    pub fn messages(&self, level: LogLevel) -> Vec<String> {
        self.lock()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    /// `true` if a message at `level` contains `needle`.
    pub fn contains(&self, level: LogLevel, needle: &str) -> bool {
        self.lock().iter().any(|(l, m)| *l == level && m.contains(needle))
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<(LogLevel, String)>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl LogSink for MemorySink {
    fn write(&self, level: LogLevel, message: &str) {
        self.lock().push((level, message.to_owned()));
    }
}

// ── Logger ────────────────────────────────────────────────────────────────

/// The diagnostics capability carried by a [`StyleEngine`](crate::engine::StyleEngine).
///
/// Messages below `level` are dropped before they are formatted.
#[derive(Clone)]
pub struct Logger {
    level: LogLevel,
    sink: Arc<dyn LogSink>,
}

impl Logger {
    pub fn new(level: LogLevel, sink: Arc<dyn LogSink>) -> Self {
        Self { level, sink }
    }

    /// A logger that forwards to the `log` facade at `level`.
    pub fn facade(level: LogLevel) -> Self {
        Self::new(level, Arc::new(FacadeSink))
    }

    #[inline]
    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn set_level(&mut self, level: LogLevel) {
        self.level = level;
    }

    #[inline]
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.level
    }

    pub fn log(&self, level: LogLevel, message: impl fmt::Display) {
        if self.enabled(level) {
            self.sink.write(level, &message.to_string());
        }
    }

    #[inline]
    pub fn verbose(&self, message: impl fmt::Display) {
        self.log(LogLevel::Verbose, message);
    }

    #[inline]
    pub fn warning(&self, message: impl fmt::Display) {
        self.log(LogLevel::Warning, message);
    }

    #[inline]
    pub fn error(&self, message: impl fmt::Display) {
        self.log(LogLevel::Error, message);
    }

    /// Logs a style failure at the severity it carries.
    pub fn report(&self, error: StyleError) {
        self.log(error.level(), error);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::facade(LogLevel::default())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger").field("level", &self.level).finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_are_ordered_by_severity() {
        assert!(LogLevel::Verbose < LogLevel::Warning);
        assert!(LogLevel::Warning < LogLevel::Error);
    }

    #[test]
    fn parse_accepts_names_and_aliases() {
        assert_eq!("verbose".parse::<LogLevel>(), Ok(LogLevel::Verbose));
        assert_eq!(" Warning ".parse::<LogLevel>(), Ok(LogLevel::Warning));
        assert_eq!("warn".parse::<LogLevel>(), Ok(LogLevel::Warning));
        assert_eq!("ERROR".parse::<LogLevel>(), Ok(LogLevel::Error));
        assert!("loud".parse::<LogLevel>().is_err());
    }

    #[test]
    fn messages_below_level_are_dropped() {
        let sink = MemorySink::shared();
        let logger = Logger::new(LogLevel::Warning, sink.clone());
        logger.verbose("chatty");
        logger.warning("careful");
        logger.error("broken");

        let entries = sink.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], (LogLevel::Warning, "careful".to_owned()));
        assert_eq!(entries[1], (LogLevel::Error, "broken".to_owned()));
    }

    #[test]
    fn verbose_logger_records_everything() {
        let sink = MemorySink::shared();
        let logger = Logger::new(LogLevel::Verbose, sink.clone());
        logger.verbose(format_args!("found {} appliers", 3));
        assert!(sink.contains(LogLevel::Verbose, "found 3 appliers"));
    }

    #[test]
    fn report_uses_the_error_severity() {
        let sink = MemorySink::shared();
        let logger = Logger::new(LogLevel::Warning, sink.clone());
        logger.report(StyleError::NullTarget { property: "titleFont".into(), value_type: "Font" });
        logger.report(StyleError::NullTerminalValue {
            property: "textColor".into(),
            type_name: "Label",
        });
        assert!(sink.contains(LogLevel::Error, "no target to assign Font value for 'titleFont'"));
        assert!(sink.contains(LogLevel::Warning, "unset value for 'textColor' on Label"));
    }

    #[test]
    fn set_level_changes_the_gate() {
        let sink = MemorySink::shared();
        let mut logger = Logger::new(LogLevel::Verbose, sink.clone());
        logger.set_level(LogLevel::Error);
        logger.warning("ignored");
        assert!(sink.entries().is_empty());
    }

    #[test]
    fn clear_empties_the_sink() {
        let sink = MemorySink::shared();
        sink.write(LogLevel::Error, "x");
        sink.clear();
        assert!(sink.entries().is_empty());
    }
}
