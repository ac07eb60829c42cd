use anyhow::{anyhow, Result};
use log::{LevelFilter, Log, Metadata, Record};
use std::str::FromStr;

/// Environment variable that overrides the configured level.
pub const LOG_ENV: &str = "TCLB_LOG";

struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{:<5} {}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

/// Pick the level: the environment wins over the config file.
pub fn resolve_level(env: Option<&str>, configured: &str) -> Result<LevelFilter> {
    let raw = env.filter(|s| !s.trim().is_empty()).unwrap_or(configured);
    LevelFilter::from_str(raw.trim()).map_err(|_| anyhow!("Unknown log level: {raw}"))
}

pub fn init(configured: &str) -> Result<()> {
    let env = std::env::var(LOG_ENV).ok();
    let level = resolve_level(env.as_deref(), configured)?;
    log::set_logger(&LOGGER).map_err(|e| anyhow!("Logger already installed: {e}"))?;
    log::set_max_level(level);
    Ok(())
}
