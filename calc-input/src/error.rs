//! Input errors

use calc_spec::InputKind;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Unexpected input at line {line}, column {column}: {text}")]
    UnexpectedCharacter {
        line: usize,
        column: usize,
        text: String,
    },

    #[error("Unknown word: {0}")]
    UnknownWord(String),

    #[error("Invalid command: :{0}")]
    InvalidCommand(String),

    #[error("Missing argument for :{0}")]
    MissingArgument(String),

    #[error("Invalid argument for :{command}: {value}")]
    InvalidArgument { command: String, value: String },

    #[error("Token '{token}' is not a {kind:?} input")]
    KindMismatch { token: String, kind: InputKind },
}

pub type Result<T> = std::result::Result<T, InputError>;
