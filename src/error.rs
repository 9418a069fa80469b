//! Error type shared by games, search and the match driver.

use thiserror::Error;

use crate::core::{Move, PlayerId};

/// Errors raised by the engine.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A move outside the current legal menu was supplied.
    #[error("illegal move {mv} for {player}")]
    IllegalMove { mv: Move, player: PlayerId },

    /// The operation cannot run on this state (e.g. searching a finished game).
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// Rejected setup value, reported before any turn is played.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// The human move source ran out of input.
    #[error("input closed before a move was entered")]
    InputClosed,

    /// The human asked to stop the match.
    #[error("match aborted by player")]
    Aborted,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] bincode::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::IllegalMove {
            mv: Move::new(7),
            player: PlayerId::TWO,
        };
        assert_eq!(err.to_string(), "illegal move 7 for Player 2");

        let err = Error::Configuration("search depth must be at least 1".into());
        assert_eq!(
            err.to_string(),
            "invalid configuration: search depth must be at least 1"
        );
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
