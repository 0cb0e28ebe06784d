//! Logger setup for the command-line tool.

use std::env;

use log::LevelFilter;

/// Initializes `env_logger` on stderr.
///
/// Logs at `Warn` by default and `Debug` when `verbose` is set. A `RUST_LOG` value in the
/// environment overrides both.
pub fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_target(false);

    if let Ok(spec) = env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    // a logger may already be installed, e.g. when called twice from tests
    if builder.try_init().is_ok() {
        log::debug!("logger initialized at {:?} level", level);
    }
}
