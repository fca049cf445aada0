//! Logger setup
//!
//! `RUST_LOG` is honoured as usual; verbose mode forces debug output on top
//! of it so request/response diagnostics and dry-run bodies are shown.

use log::LevelFilter;

/// Level used when `RUST_LOG` is not set
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Build the env_logger configuration for the given verbosity
pub fn logger_builder(verbose: bool) -> env_logger::Builder {
    let env = env_logger::Env::default().default_filter_or(default_filter(verbose));
    let mut builder = env_logger::Builder::from_env(env);
    builder.format_timestamp(None);

    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }

    builder
}

/// Install the global logger
///
/// Call after the CLI and configuration have been read, so that a verbose
/// flag from either source takes effect.
pub fn init_logging(verbose: bool) {
    logger_builder(verbose).init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::{Level, Log, Metadata};

    fn enabled(logger: &env_logger::Logger, level: Level) -> bool {
        let metadata = Metadata::builder()
            .level(level)
            .target("monsync::api::client")
            .build();
        logger.enabled(&metadata)
    }

    #[test]
    fn test_default_filter() {
        assert_eq!(default_filter(false), "warn");
        assert_eq!(default_filter(true), "debug");
    }

    #[test]
    fn test_verbose_logger_shows_debug() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let logger = logger_builder(true).build();
        assert_eq!(logger.filter(), LevelFilter::Debug);
        assert!(enabled(&logger, Level::Debug));
        assert!(enabled(&logger, Level::Info));
        assert!(!enabled(&logger, Level::Trace));
    }

    #[test]
    fn test_quiet_logger_hides_debug() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let logger = logger_builder(false).build();
        assert!(enabled(&logger, Level::Warn));
        assert!(!enabled(&logger, Level::Info));
        assert!(!enabled(&logger, Level::Debug));
    }
}
