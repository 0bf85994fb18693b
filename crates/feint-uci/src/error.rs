//! UCI protocol errors.

use feint_core::{FenError, MoveError};

/// Errors that can occur during UCI protocol handling.
#[derive(Debug, thiserror::Error)]
pub enum UciError {
    /// The `position` command is missing `startpos` or `fen` keyword.
    #[error("malformed position command: missing startpos or fen keyword")]
    MalformedPosition,

    /// Failed to parse a FEN string.
    #[error("invalid FEN: {source}")]
    InvalidFen {
        #[from]
        source: FenError,
    },

    /// A move in the `position` command could not be played.
    #[error("invalid move: {source}")]
    InvalidMove {
        #[from]
        source: MoveError,
    },

    /// A parameter was given without its value.
    #[error("missing value for {param}")]
    MissingValue {
        /// The parameter name.
        param: String,
    },

    /// A parameter value could not be parsed or is out of range.
    #[error("invalid value for {param}: {value}")]
    InvalidValue {
        /// The parameter name.
        param: String,
        /// The rejected value.
        value: String,
    },

    /// `setoption` named an option the engine does not have.
    #[error("unknown option: {name}")]
    UnknownOption {
        /// The option name as given.
        name: String,
    },

    /// An I/O error occurred on the protocol streams.
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}
