use std::sync::Once;

use super::LogLevel;

/// Backend configuration for the process-wide `log` logger.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "livery=debug"). When it is `None` the filter comes from `RUST_LOG`, and
/// failing that from [`LogLevel`] (see [`LoggingConfig::resolve_filter`]).
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
    /// Engine severity used to open the `livery` target when no filter is
    /// given. Defaults to [`LogLevel::from_env`].
    pub engine_level: Option<LogLevel>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
            engine_level: LogLevel::from_env().ok().flatten(),
        }
    }
}

impl LoggingConfig {
    /// Shows every engine diagnostic, verbose ones included.
    pub fn verbose() -> Self {
        Self { engine_level: Some(LogLevel::Verbose), ..Self::default() }
    }

    /// The filter handed to `env_logger`.
    pub fn resolve_filter(&self) -> String {
        if let Some(filter) = &self.env_filter {
            return filter.clone();
        }
        if let Ok(filter) = std::env::var("RUST_LOG") {
            return filter;
        }
        match self.engine_level {
            Some(level) => {
                let target = level.as_log_level().to_string().to_lowercase();
                format!("info,livery={target}")
            }
            None => "info".to_owned(),
        }
    }
}

static INIT: Once = Once::new();

/// Installs `env_logger` as the global `log` backend once.
///
/// Later calls are ignored, as is the case where another logger was
/// installed first. Call it early in `main`, before the first style is
/// applied.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = config.resolve_filter();
        let mut builder = env_logger::Builder::new();
        builder.parse_filters(&filter);
        builder.write_style(config.write_style);

        if builder.try_init().is_ok() {
            log::debug!(target: "livery", "logging initialized with filter {filter:?}");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_wins() {
        let config = LoggingConfig {
            env_filter: Some("warn".into()),
            engine_level: Some(LogLevel::Verbose),
            ..LoggingConfig::default()
        };
        assert_eq!(config.resolve_filter(), "warn");
    }

    #[test]
    fn engine_level_opens_the_livery_target() {
        // RUST_LOG takes precedence, so only check when it is unset.
        if std::env::var("RUST_LOG").is_ok() {
            return;
        }
        assert_eq!(LoggingConfig::verbose().resolve_filter(), "info,livery=debug");
        let errors_only = LoggingConfig {
            engine_level: Some(LogLevel::Error),
            ..LoggingConfig::default()
        };
        assert_eq!(errors_only.resolve_filter(), "info,livery=error");
    }
}
