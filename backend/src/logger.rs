use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::OnceLock;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

/// Log levels representing increasing verbosity.
///
/// Setting a level enables it and every less verbose level below it, so
/// `Level::Info` logs info, warning and error messages but not debug output.
/// `Level::Silent` disables logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Silent = 0,
    Error = 1,
    Warn = 2,
    Info = 3,
    Debug = 4,
}

impl Level {
    /// Parse a log level from a string (case insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "silent" => Some(Level::Silent),
            "error" => Some(Level::Error),
            "warn" => Some(Level::Warn),
            "info" => Some(Level::Info),
            "debug" => Some(Level::Debug),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Silent => "silent",
            Level::Error => "error",
            Level::Warn => "warn",
            Level::Info => "info",
            Level::Debug => "debug",
        }
    }
}

pub struct Logger {
    log_file: Option<PathBuf>,
    level: Mutex<Level>,
}

impl Logger {
    pub fn new(level: Level, log_file: Option<PathBuf>) -> Self {
        Logger {
            log_file,
            level: Mutex::new(level),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Logger::new(config.log_level, config.log_file.clone())
    }

    pub fn init_tracing(level: Level) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let default_directive = match level {
            Level::Silent => "off",
            other => other.as_str(),
        };

        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive));

        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .finish();

        tracing::subscriber::set_global_default(subscriber)?;

        Ok(())
    }

    fn write_to_file(&self, level: Level, message: &str) -> std::io::Result<()> {
        let Some(path) = &self.log_file else {
            return Ok(());
        };

        let mut file = OpenOptions::new().create(true).append(true).open(path)?;

        let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3fZ");
        writeln!(file, "[{}] {}: {}", timestamp, level.as_str().to_uppercase(), message)
    }

    pub fn enabled(&self, level: Level) -> bool {
        level != Level::Silent && level <= *self.level.lock()
    }

    pub fn log(&self, level: Level, msg: &str) {
        if !self.enabled(level) {
            return;
        }

        match level {
            Level::Error => tracing::error!("{}", msg),
            Level::Warn => tracing::warn!("{}", msg),
            Level::Info => tracing::info!("{}", msg),
            Level::Debug => tracing::debug!("{}", msg),
            Level::Silent => {}
        }

        if let Err(e) = self.write_to_file(level, msg) {
            eprintln!("Failed to write log file: {}", e);
        }
    }

    pub fn get_level(&self) -> Level {
        *self.level.lock()
    }

    pub fn set_level(&self, new_level: Level) {
        *self.level.lock() = new_level;
    }
}

pub static LOGGER: OnceLock<Logger> = OnceLock::new();
static TRACING_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Installs the global logger and the tracing subscriber. Only the first call
/// has an effect.
pub fn init_logger(config: &AppConfig) {
    let _ = LOGGER.set(Logger::from_config(config));

    TRACING_INITIALIZED.get_or_init(|| {
        if let Err(e) = Logger::init_tracing(config.log_level) {
            eprintln!("Failed to initialize tracing: {}", e);
        }
    });
}

fn logger() -> &'static Logger {
    LOGGER.get_or_init(|| Logger::new(Level::Info, None))
}

pub fn info(msg: &str) {
    logger().log(Level::Info, msg);
}

pub fn warn(msg: &str) {
    logger().log(Level::Warn, msg);
}

pub fn error(msg: &str) {
    logger().log(Level::Error, msg);
}

pub fn debug(msg: &str) {
    logger().log(Level::Debug, msg);
}

pub fn get_log_level() -> Level {
    logger().get_level()
}

pub fn set_log_level(level: Level) {
    logger().set_level(level);
}
