//! Stderr logging for the command-line tool
//!
//! Controlled by the PRETTIFY_LOG environment variable or `--log-level`:
//! - off, error, warn, info, debug, trace
//! - unset or unrecognized: warn
//!
//! Output goes to stderr so it never mixes with rendered output on stdout.

use std::io::Write;

use log::{LevelFilter, Log, Metadata, Record};

/// Environment variable consulted when no level is given explicitly
pub const LOG_ENV: &str = "PRETTIFY_LOG";

/// Level used when nothing else is configured
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;

struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(
            stderr,
            "[{:<5}] {}: {}",
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Parse a level name, case-insensitively
pub fn parse_level(name: &str) -> Option<LevelFilter> {
    name.trim().parse().ok()
}

/// Level from PRETTIFY_LOG, or the default
pub fn level_from_env() -> LevelFilter {
    match std::env::var(LOG_ENV) {
        Ok(val) => parse_level(&val).unwrap_or(DEFAULT_LEVEL),
        Err(_) => DEFAULT_LEVEL,
    }
}

/// Install the stderr logger
///
/// Only the first call installs the logger; later calls just change
/// the level.
pub fn init(level: LevelFilter) {
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}
