use crate::boot_trace;
use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

/// `log` backend over the debug console.
///
/// Designed to live in a `static`: construction is `const` and installation
/// borrows it for `'static`, so no allocation or interior mutability is
/// needed anywhere.
pub struct DebugconLogger {
    max_level: LevelFilter,
}

impl DebugconLogger {
    #[must_use]
    pub const fn new(max_level: LevelFilter) -> Self {
        Self { max_level }
    }

    /// Register `logger` as the global `log` sink.
    ///
    /// Call once, as early as a stack exists.
    ///
    /// # Errors
    /// [`SetLoggerError`] when a logger is already installed.
    pub fn install(logger: &'static Self) -> Result<(), SetLoggerError> {
        log::set_logger(logger)?;
        log::set_max_level(logger.max_level);
        Ok(())
    }
}

impl Log for DebugconLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.max_level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        boot_trace!(
            "[{}] {}: {}\n",
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {
        // nothing buffers
    }
}
