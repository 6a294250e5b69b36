// Conditional logging macros - only active in debug builds

use crate::error::Error;
use std::fs::{self, OpenOptions};
use std::io::Write;
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

const LOG_FILE_NAME: &str = "word-scramble.log";

/// Default log location for the TUI, which cannot write to stderr.
#[must_use]
pub fn default_log_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("word-scramble").join(LOG_FILE_NAME))
}

/// Installs `env_logger` with timestamped output.
///
/// The filter comes from `RUST_LOG` and defaults to `info`. Output goes to
/// `log_file` when given, stderr otherwise.
pub fn init_logging(log_file: Option<&Path>) -> Result<(), Error> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} [{}] {}: {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    if let Some(path) = log_file {
        let to_error = |source| Error::LogFile {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(to_error)?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(to_error)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.try_init().map_err(|_| Error::LoggerAlreadySet)
}
