//! Errors surfaced by the command line front end. The tree and the duplicate finder can't fail;
//! only talking to the terminal can.

use thiserror::Error;

/// Exit code for bad command line usage (`EX_USAGE` from sysexits).
pub const EXIT_USAGE: i32 = 64;
/// Exit code for input/output failures (`EX_IOERR` from sysexits).
pub const EXIT_IOERR: i32 = 74;

/// Top-level error for the `ordered-tree` binary. These are what get shown to the user.
#[derive(Error, Debug)]
pub enum CliError {
    /// Reading from stdin or writing to stdout failed.
    #[error("terminal i/o failed: {0}")]
    Io(#[from] std::io::Error),

    /// `dupes` was handed an empty string to analyse.
    #[error("empty string entered, please enter a valid string")]
    EmptyInput,
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// The process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Io(_) => EXIT_IOERR,
            CliError::EmptyInput => EXIT_USAGE,
        }
    }
}
