// Conditional logging macros - only active in debug builds

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        log::debug!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{}};
}

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        log::info!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {{}};
}

/// Where log records end up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
    /// Dropped; stderr would draw over the full-screen UI.
    Discard,
}

/// Pick the log destination for the chosen front end.
pub fn log_target(log_file: Option<&Path>, owns_terminal: bool) -> LogTarget {
    match log_file {
        Some(path) => LogTarget::File(path.to_path_buf()),
        None if owns_terminal => LogTarget::Discard,
        None => LogTarget::Stderr,
    }
}

/// Install the `env_logger` backend, filtered by `RUST_LOG`.
pub fn init(target: &LogTarget) -> io::Result<()> {
    let mut builder = env_logger::Builder::from_default_env();
    match target {
        LogTarget::Stderr => {}
        LogTarget::File(path) => {
            let file = File::create(path)?;
            builder
                .target(env_logger::Target::Pipe(Box::new(file)))
                .format(|buf, record| {
                    writeln!(
                        buf,
                        "{} [{}] {}: {}",
                        chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                        record.level(),
                        record.target(),
                        record.args()
                    )
                });
        }
        LogTarget::Discard => {
            builder.target(env_logger::Target::Pipe(Box::new(io::sink())));
        }
    }
    // A second init (e.g. from tests) keeps the first logger.
    if let Err(e) = builder.try_init() {
        debug_log!("Logger already installed: {}", e);
    }
    Ok(())
}
