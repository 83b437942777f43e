// extractguard/src/logger.rs
//! Logger initialisation for the `extractguard` binary and its tests.

use log::LevelFilter;
use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes `env_logger` exactly once per process.
///
/// `RUST_LOG` is honoured when no explicit level is given; an explicit level
/// overrides it for the `extractguard` crates only. Later calls are no-ops.
pub fn init_logger(level: Option<LevelFilter>) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or("warn"),
        );

        if let Some(level) = level {
            builder
                .filter_module("extractguard", level)
                .filter_module("extractguard_core", level);
        }

        builder.format_timestamp(None).target(env_logger::Target::Stderr);

        if builder.try_init().is_err() {
            log::debug!("Logger already initialized; keeping the existing one.");
        }
    });
}

/// Maps the global `--quiet`/`--debug` flags to a log level override.
pub fn level_for_flags(quiet: bool, debug: bool) -> Option<LevelFilter> {
    if quiet {
        Some(LevelFilter::Off)
    } else if debug {
        Some(LevelFilter::Debug)
    } else {
        None
    }
}
