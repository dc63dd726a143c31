//! Console-level error type: everything a subcommand can fail with.

use thiserror::Error;

use apexclub_client::ClientError;
use apexclub_core::CoreError;

#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Bad command-line input (unknown package, malformed amount, ...).
    #[error("{0}")]
    Input(String),

    /// The sale rules rejected the session.
    #[error("{0}")]
    Core(#[from] CoreError),

    /// The backend call failed.
    #[error("{0}")]
    Client(#[from] ClientError),
}

impl From<String> for ConsoleError {
    fn from(message: String) -> Self {
        ConsoleError::Input(message)
    }
}
