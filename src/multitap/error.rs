use thiserror::Error;

#[derive(Error, Debug)]
pub enum MultitapError {
    #[error("Input cannot be null")]
    NullInput,

    #[error("Input must contain the send character '#'")]
    MissingSend,

    #[error("Unexpected symbol {symbol:?} at position {position}")]
    UnexpectedSymbol { symbol: char, position: usize },

    #[error("Character {ch:?} at position {position} is not on the keypad")]
    Unencodable { ch: char, position: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MultitapError>;
