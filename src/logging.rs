//! Structured logging setup.
//!
//! Diagnostics go through `tracing` and are written to stderr so they never
//! mix with a Dockerfile printed on stdout. Console messages meant for the
//! user are printed directly by the commands.
//!
//! Level resolution, first match wins:
//! - `RUST_LOG` (full `EnvFilter` syntax)
//! - `--verbose` (debug)
//! - `DOCKGEN_LOG_LEVEL` (trace, debug, info, warn, error)
//! - warn

use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable selecting the dockgen log level.
pub const LOG_LEVEL_ENV: &str = "DOCKGEN_LOG_LEVEL";

static INIT: Once = Once::new();

/// Parse a level name, case-insensitive. Unknown names fall back to WARN.
pub fn parse_level(level_str: &str) -> Level {
    match level_str.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => {
            eprintln!(
                "Invalid log level '{}', defaulting to WARN. Valid levels: trace, debug, info, warn, error",
                level_str
            );
            Level::WARN
        }
    }
}

/// Pick the dockgen level from the verbose flag and an optional env value.
pub fn resolve_level(verbose: bool, env_level: Option<&str>) -> Level {
    if verbose {
        return Level::DEBUG;
    }
    env_level.map(parse_level).unwrap_or(Level::WARN)
}

/// Install the global subscriber. Later calls are ignored.
pub fn init(verbose: bool) {
    INIT.call_once(|| {
        let env_level = env::var(LOG_LEVEL_ENV).ok();
        let level = resolve_level(verbose, env_level.as_deref());

        let filter = if env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new(format!("dockgen={}", level))
        };

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_level_is_case_insensitive() {
        assert_eq!(parse_level("trace"), Level::TRACE);
        assert_eq!(parse_level("Debug"), Level::DEBUG);
        assert_eq!(parse_level("INFO"), Level::INFO);
        assert_eq!(parse_level("warn"), Level::WARN);
        assert_eq!(parse_level("error"), Level::ERROR);
    }

    #[test]
    fn parse_level_invalid_falls_back_to_warn() {
        assert_eq!(parse_level("loud"), Level::WARN);
        assert_eq!(parse_level(""), Level::WARN);
    }

    #[test]
    fn verbose_wins_over_env() {
        assert_eq!(resolve_level(true, Some("error")), Level::DEBUG);
    }

    #[test]
    fn env_level_used_when_not_verbose() {
        assert_eq!(resolve_level(false, Some("info")), Level::INFO);
        assert_eq!(resolve_level(false, None), Level::WARN);
    }
}
