//! Logging subsystem configuration.
//!
//! The `--debug` flag is resolved into a [`LogConfig`] during argument
//! handling and applied here exactly once per invocation, before any command
//! handler runs. Nothing downstream mutates the log level afterwards.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

/// Effective log level for one invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    /// Warnings and errors only.
    #[default]
    Normal,
    /// Debug-level detail, enabled by `--debug`.
    Verbose,
}

/// Immutable logging configuration handed to [`init`] at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogConfig {
    pub level: LogLevel,
}

impl LogConfig {
    /// Resolve the config from the parsed `--debug` flag.
    pub fn from_debug_flag(debug: bool) -> Self {
        let level = if debug {
            LogLevel::Verbose
        } else {
            LogLevel::Normal
        };
        Self { level }
    }

    pub fn is_verbose(&self) -> bool {
        self.level == LogLevel::Verbose
    }

    fn level_filter(&self) -> LevelFilter {
        match self.level {
            LogLevel::Normal => LevelFilter::WARN,
            LogLevel::Verbose => LevelFilter::DEBUG,
        }
    }
}

/// Install the global tracing subscriber from `config`.
///
/// Formatted output goes to stderr so that handler output on stdout stays
/// clean. Safe to call when a subscriber is already installed (tests).
pub fn init(config: &LogConfig) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false);

    let filtered_layer = fmt_layer.with_filter(config.level_filter());

    let _ = tracing_subscriber::registry().with(filtered_layer).try_init();

    if config.is_verbose() {
        tracing::debug!("Debug mode: verbose");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_debug_flag_when_resolved_then_config_is_verbose() {
        let config = LogConfig::from_debug_flag(true);
        assert!(config.is_verbose());
        assert_eq!(config.level_filter(), LevelFilter::DEBUG);
    }

    #[test]
    fn given_no_debug_flag_when_resolved_then_config_is_normal() {
        let config = LogConfig::from_debug_flag(false);
        assert!(!config.is_verbose());
        assert_eq!(config.level_filter(), LevelFilter::WARN);
    }
}
