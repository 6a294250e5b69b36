use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Setup failures: loading resources or driving the terminal.
///
/// Rejected submissions are reported through [`crate::Outcome`], never here.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to load word list from '{}': {source}", path.display())]
    WordList {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to load dictionary from '{}': {source}", path.display())]
    Dictionary {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to open log file '{}': {source}", path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("logger already initialized")]
    LoggerAlreadySet,
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}
