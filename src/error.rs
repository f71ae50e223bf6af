use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that stop the trainer before or during a session.
///
/// Everything here is fatal: recoverable problems (a malformed answer flag,
/// bad user input) are handled where they occur and never reach this type.
#[derive(Debug, Error)]
pub enum QuizError {
    /// A question source could not be read.
    #[error("failed to read question bank '{source_name}': {source}")]
    Read {
        source_name: String,
        #[source]
        source: io::Error,
    },

    /// A question source was read but is not a valid bank document.
    #[error("failed to parse question bank '{source_name}': {source}")]
    Parse {
        source_name: String,
        #[source]
        source: serde_json::Error,
    },

    /// A built-in bank is not embedded in the binary.
    #[error("question bank '{0}' is not built in")]
    MissingBank(String),

    /// The config file could not be read or parsed.
    #[error("invalid config file {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    /// Reading the player's input or writing output failed mid-session.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, QuizError>;
