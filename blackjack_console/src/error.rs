use blackjack_lib::BlackjackGameError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that end a console session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Game(#[from] BlackjackGameError),

    #[error("unable to read config file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config file {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        source: serde_json::Error,
    },
}
